//! PharmTrack Core
//!
//! Status classification and filtering engine for pharmaceutical-instrument
//! inventory and shipment deliveries.
//!
//! # Overview
//!
//! Two parallel pipelines, one per record kind:
//! - **Status classifier**: [`classify`] derives stock sufficiency on every read
//! - **Progress estimator**: [`estimate_progress`] maps a delivery stage to a percentage
//! - **Query engine**: [`filter`] applies free-text search, then a category filter
//! - **Facet counter**: [`counts`] tallies categories over the unfiltered collection
//!
//! [`PageState`] ties them together for one page: it owns the base
//! collection and recomputes the visible subset whenever the query changes.
//!
//! # Example
//!
//! ```rust
//! use pharmtrack_core::prelude::*;
//!
//! let mut page = PageState::new(sample::inventory());
//! page.set_search_query("glucose");
//! assert_eq!(page.visible().len(), 1);
//! assert_eq!(page.visible()[0].status(), StockStatus::InStock);
//!
//! // badges always reflect the whole collection
//! assert_eq!(page.counts().low_stock, 1);
//! ```

#![warn(missing_docs)]

pub mod dataset;
pub mod dates;
pub mod delivery;
pub mod error;
pub mod facets;
pub mod inventory;
pub mod page;
pub mod query;
pub mod sample;
pub mod summary;

// Re-exports
pub use dataset::{load_records, parse_records, read_records, Dataset};
pub use delivery::{estimate_progress, DeliveryCounts, DeliveryRecord, DeliveryStatus, DeliveryTab};
pub use error::CatalogError;
pub use facets::{counts, Faceted};
pub use inventory::{classify, InventoryCounts, InventoryFilter, InventoryRecord, StockStatus};
pub use page::PageState;
pub use query::{filter, filter_refs, Queryable};
pub use summary::DashboardSummary;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the engine
    pub use crate::sample;
    pub use crate::{
        classify, counts, estimate_progress, filter, filter_refs, CatalogError, Dataset, DashboardSummary,
        DeliveryCounts, DeliveryRecord, DeliveryStatus, DeliveryTab, Faceted, InventoryCounts,
        InventoryFilter, InventoryRecord, PageState, Queryable, StockStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
