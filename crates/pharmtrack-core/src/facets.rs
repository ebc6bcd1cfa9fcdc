//! Facet counter
//!
//! Counts per category for the badges next to each filter control. Counts
//! are always taken over the unfiltered base collection, so they do not move
//! when the search text or active filter changes.

/// A record kind with per-category badge counts
pub trait Faceted: Sized {
    /// Count structure for this record kind
    type Counts: Copy + Default + PartialEq + std::fmt::Debug;

    /// Count `records` per category
    fn facet_counts(records: &[Self]) -> Self::Counts;
}

/// Count `records` per category
#[inline]
#[must_use]
pub fn counts<R: Faceted>(records: &[R]) -> R::Counts {
    R::facet_counts(records)
}
