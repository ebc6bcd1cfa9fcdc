//! Page-level state holder
//!
//! [`PageState`] owns one base collection together with the ephemeral query
//! state of a page (search text and active filter). Every state change fully
//! recomputes the visible subset; there is no incremental update.
//!
//! Facet counts are always derived from the base collection, never from the
//! visible subset.

use crate::error::CatalogError;
use crate::facets::{counts, Faceted};
use crate::query::{filter, Queryable};

/// Query state and owned records for one page
#[derive(Debug, Clone)]
pub struct PageState<R: Queryable> {
    records: Vec<R>,
    search_query: String,
    active_filter: R::Filter,
    visible: Vec<R>,
}

impl<R> PageState<R>
where
    R: Queryable + Faceted + Clone,
{
    /// Mount a page over `records` with an empty query and the `all` filter
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        let visible = records.clone();
        Self {
            records,
            search_query: String::new(),
            active_filter: R::Filter::default(),
            visible,
        }
    }

    /// Base collection
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Records currently visible
    #[inline]
    #[must_use]
    pub fn visible(&self) -> &[R] {
        &self.visible
    }

    /// Current search text
    #[inline]
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current filter or tab
    #[inline]
    #[must_use]
    pub fn active_filter(&self) -> R::Filter {
        self.active_filter
    }

    /// Badge counts over the base collection
    #[inline]
    #[must_use]
    pub fn counts(&self) -> R::Counts {
        counts(&self.records)
    }

    /// Replace the search text
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refresh();
    }

    /// Reset the search text to empty
    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }

    /// Select a filter or tab
    pub fn set_active_filter(&mut self, filter: R::Filter) {
        self.active_filter = filter;
        self.refresh();
    }

    /// Replace the record sharing `record`'s id
    ///
    /// Returns the previous record.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownRecord`] if no record has that id
    pub fn replace_record(&mut self, record: R) -> Result<R, CatalogError> {
        let slot = self
            .records
            .iter_mut()
            .find(|existing| existing.record_id() == record.record_id())
            .ok_or_else(|| CatalogError::UnknownRecord {
                collection: R::COLLECTION,
                id: record.record_id().to_string(),
            })?;

        let previous = std::mem::replace(slot, record);
        tracing::debug!(
            collection = R::COLLECTION,
            id = previous.record_id(),
            "record replaced"
        );
        self.refresh();
        Ok(previous)
    }

    /// Check if the current query hides every record
    #[inline]
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Message for the empty state
    #[must_use]
    pub fn empty_message(&self) -> String {
        if self.search_query.is_empty() {
            format!("No {} match the selected filters", R::NOUN)
        } else {
            format!("No {} match your search \"{}\"", R::NOUN, self.search_query)
        }
    }

    fn refresh(&mut self) {
        self.visible = filter(&self.records, &self.search_query, self.active_filter);
        tracing::debug!(
            collection = R::COLLECTION,
            query = %self.search_query,
            filter = ?self.active_filter,
            visible = self.visible.len(),
            "visible subset recomputed"
        );
    }
}
