//! Query engine
//!
//! Applies a free-text query and then a categorical filter to a record
//! collection. The result is an order-preserving subsequence of the input.
//!
//! The text step is skipped only for the empty string. Queries are not
//! trimmed, so `"  "` is a real query and usually matches nothing.

use std::fmt::Debug;

/// A record kind the query engine can search and narrow
pub trait Queryable {
    /// Categorical filter (inventory filter, delivery tab)
    type Filter: Copy + Debug + Default + PartialEq;

    /// Collection name used in logs and errors
    const COLLECTION: &'static str;

    /// Plural noun used in empty-state messages
    const NOUN: &'static str;

    /// Unique identifier of the record
    fn record_id(&self) -> &str;

    /// String fields the free-text query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Check if the record passes the categorical filter
    fn matches_filter(&self, filter: Self::Filter) -> bool;

    /// Check if any searchable field contains `needle`
    ///
    /// `needle` must already be lowercased.
    fn matches_text(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Filter `records` by text query, then by category
///
/// Never mutates the input. Calling again with the output and the same
/// arguments yields the same output.
#[must_use]
pub fn filter<R>(records: &[R], query: &str, active: R::Filter) -> Vec<R>
where
    R: Queryable + Clone,
{
    filter_refs(records, query, active).into_iter().cloned().collect()
}

/// Borrowing variant of [`filter`]
#[must_use]
pub fn filter_refs<'a, R>(records: &'a [R], query: &str, active: R::Filter) -> Vec<&'a R>
where
    R: Queryable,
{
    let needle = (!query.is_empty()).then(|| query.to_lowercase());

    let visible: Vec<&R> = records
        .iter()
        .filter(|record| {
            needle
                .as_deref()
                .map_or(true, |needle| record.matches_text(needle))
        })
        .filter(|record| record.matches_filter(active))
        .collect();

    tracing::trace!(
        collection = R::COLLECTION,
        query,
        filter = ?active,
        total = records.len(),
        visible = visible.len(),
        "query applied"
    );

    visible
}
