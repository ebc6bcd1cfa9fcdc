//! Dataset loading
//!
//! Record collections arrive from outside the engine as JSON arrays. This
//! module decodes them, rejects duplicate ids, and hands back owned
//! collections. Nothing here is cached or global.

use crate::delivery::DeliveryRecord;
use crate::error::CatalogError;
use crate::inventory::InventoryRecord;
use crate::page::PageState;
use crate::query::Queryable;
use crate::sample;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Inventory and delivery collections supplied by a data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Instrument inventory
    pub inventory: Vec<InventoryRecord>,
    /// Shipments
    pub deliveries: Vec<DeliveryRecord>,
}

impl Dataset {
    /// Build a dataset, checking id uniqueness per collection
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] on a repeated id
    pub fn new(
        inventory: Vec<InventoryRecord>,
        deliveries: Vec<DeliveryRecord>,
    ) -> Result<Self, CatalogError> {
        ensure_unique_ids(&inventory)?;
        ensure_unique_ids(&deliveries)?;
        Ok(Self {
            inventory,
            deliveries,
        })
    }

    /// Built-in sample dataset
    #[must_use]
    pub fn sample() -> Self {
        Self {
            inventory: sample::inventory(),
            deliveries: sample::deliveries(),
        }
    }

    /// Mount an inventory page over a copy of the inventory
    #[must_use]
    pub fn inventory_page(&self) -> PageState<InventoryRecord> {
        PageState::new(self.inventory.clone())
    }

    /// Mount a deliveries page over a copy of the deliveries
    #[must_use]
    pub fn deliveries_page(&self) -> PageState<DeliveryRecord> {
        PageState::new(self.deliveries.clone())
    }
}

/// Decode a JSON array of records
///
/// # Errors
/// Returns [`CatalogError::Malformed`] if decoding fails, or
/// [`CatalogError::DuplicateId`] on a repeated id
pub fn parse_records<R>(json: &str) -> Result<Vec<R>, CatalogError>
where
    R: Queryable + DeserializeOwned,
{
    let records: Vec<R> = serde_json::from_str(json).map_err(|source| CatalogError::Malformed {
        collection: R::COLLECTION,
        source,
    })?;
    ensure_unique_ids(&records)?;
    Ok(records)
}

/// Decode a JSON array of records from a reader
///
/// # Errors
/// Same as [`parse_records`]
pub fn read_records<R, T>(reader: T) -> Result<Vec<R>, CatalogError>
where
    R: Queryable + DeserializeOwned,
    T: Read,
{
    let records: Vec<R> =
        serde_json::from_reader(reader).map_err(|source| CatalogError::Malformed {
            collection: R::COLLECTION,
            source,
        })?;
    ensure_unique_ids(&records)?;
    Ok(records)
}

/// Load a JSON array of records from a file
///
/// # Errors
/// Returns [`CatalogError::Io`] if the file cannot be opened, otherwise the
/// same errors as [`parse_records`]
pub fn load_records<R>(path: impl AsRef<Path>) -> Result<Vec<R>, CatalogError>
where
    R: Queryable + DeserializeOwned,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| CatalogError::io_error(path, e))?;
    let records = read_records(std::io::BufReader::new(file))?;
    tracing::info!(
        collection = R::COLLECTION,
        path = %path.display(),
        count = records.len(),
        "dataset loaded"
    );
    Ok(records)
}

fn ensure_unique_ids<R: Queryable>(records: &[R]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.record_id()) {
            return Err(CatalogError::DuplicateId {
                collection: R::COLLECTION,
                id: record.record_id().to_string(),
            });
        }
    }
    Ok(())
}
