//! Dashboard overview stats
//!
//! Landing-page numbers computed from a [`Dataset`] with the same
//! classifier, estimator and facet counter the list pages use.

use crate::dataset::Dataset;
use crate::delivery::DeliveryRecord;
use crate::facets::counts;
use crate::inventory::InventoryRecord;
use serde::{Deserialize, Serialize};

/// Overview numbers for the dashboard landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of stock over all inventory lines
    pub total_units: u64,
    /// Number of inventory lines
    pub tracked_items: usize,
    /// Lines below threshold or empty
    pub low_stock_alerts: usize,
    /// Lines with nothing on hand
    pub out_of_stock: usize,
    /// Deliveries still underway
    pub active_deliveries: usize,
    /// Deliveries received
    pub delivered: usize,
    /// Mean progress estimate over all deliveries, rounded
    pub average_progress: u8,
}

impl DashboardSummary {
    /// Compute the overview for a dataset
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::from_records(&dataset.inventory, &dataset.deliveries)
    }

    /// Compute the overview from separate collections
    #[must_use]
    pub fn from_records(inventory: &[InventoryRecord], deliveries: &[DeliveryRecord]) -> Self {
        let stock = counts(inventory);
        let shipments = counts(deliveries);

        Self {
            total_units: inventory.iter().map(|r| u64::from(r.stock)).sum(),
            tracked_items: inventory.len(),
            low_stock_alerts: stock.low_stock + stock.out_of_stock,
            out_of_stock: stock.out_of_stock,
            active_deliveries: shipments.active,
            delivered: shipments.delivered,
            average_progress: average_progress(deliveries),
        }
    }
}

fn average_progress(deliveries: &[DeliveryRecord]) -> u8 {
    if deliveries.is_empty() {
        return 0;
    }
    let len = deliveries.len() as u64;
    let total: u64 = deliveries
        .iter()
        .map(|d| u64::from(d.progress_percent()))
        .sum();
    // each term is at most 100, so the rounded mean is too
    u8::try_from((total + len / 2) / len).unwrap_or(100)
}
