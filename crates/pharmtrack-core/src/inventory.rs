//! Inventory records and stock classification
//!
//! Provides:
//! - [`InventoryRecord`]: one instrument line held in a warehouse
//! - [`classify`]: stock sufficiency derived from `(stock, threshold)`
//! - [`InventoryFilter`]: the status buttons on the inventory page
//! - [`InventoryCounts`]: badge counts for those buttons
//!
//! Status is never stored on the record. It is recomputed on every read.

use crate::error::CatalogError;
use crate::facets::Faceted;
use crate::query::Queryable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stock sufficiency of an inventory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// On hand at or above the reorder threshold
    InStock,
    /// Some stock, but below the reorder threshold
    LowStock,
    /// Nothing on hand
    OutOfStock,
}

impl StockStatus {
    /// Kebab-case name (`in-stock`)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }

    /// Human label shown on the status chip
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// Check if this status should raise a reorder alert
    #[inline]
    #[must_use]
    pub fn needs_reorder(&self) -> bool {
        !matches!(self, Self::InStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify stock sufficiency
///
/// Zero stock is checked first, so `threshold` is irrelevant once the shelf
/// is empty. With `threshold == 0` every non-empty shelf is in stock.
#[inline]
#[must_use]
pub fn classify(stock: u32, threshold: u32) -> StockStatus {
    if stock == 0 {
        StockStatus::OutOfStock
    } else if stock < threshold {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// One instrument line in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Unique identifier (`INV-001`)
    pub id: String,
    /// Instrument name
    pub name: String,
    /// Product category (`Diagnostic`, `Therapeutic`, ...)
    pub category: String,
    /// Units on hand
    pub stock: u32,
    /// Reorder trigger level
    pub threshold: u32,
    /// Storage location
    pub location: String,
    /// Date of the last stock count
    #[serde(with = "crate::dates")]
    pub last_updated: NaiveDate,
}

impl InventoryRecord {
    /// Create a record
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
        threshold: u32,
        location: impl Into<String>,
        last_updated: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            stock,
            threshold,
            location: location.into(),
            last_updated,
        }
    }

    /// Derived stock status
    #[inline]
    #[must_use]
    pub fn status(&self) -> StockStatus {
        classify(self.stock, self.threshold)
    }

    /// Copy of this record with a new stock level
    #[must_use]
    pub fn with_stock(&self, stock: u32, counted_on: NaiveDate) -> Self {
        Self {
            stock,
            last_updated: counted_on,
            ..self.clone()
        }
    }
}

/// Status buttons on the inventory page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InventoryFilter {
    /// No narrowing
    #[default]
    All,
    /// `stock >= threshold`
    InStock,
    /// `stock > 0 && stock < threshold`
    LowStock,
    /// `stock == 0`
    OutOfStock,
}

impl InventoryFilter {
    /// Every filter, in button order
    pub const VARIANTS: [Self; 4] = [Self::All, Self::InStock, Self::LowStock, Self::OutOfStock];

    /// Kebab-case name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }

    /// Check if a record passes this filter
    ///
    /// The predicates are evaluated inline on the raw numbers. Note that a
    /// record with `stock == 0 && threshold == 0` satisfies both `in-stock`
    /// and `out-of-stock`.
    #[inline]
    #[must_use]
    pub fn admits(&self, record: &InventoryRecord) -> bool {
        match self {
            Self::All => true,
            Self::InStock => record.stock >= record.threshold,
            Self::LowStock => record.stock > 0 && record.stock < record.threshold,
            Self::OutOfStock => record.stock == 0,
        }
    }
}

impl fmt::Display for InventoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InventoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| CatalogError::unknown_filter("inventory", s))
    }
}

impl Queryable for InventoryRecord {
    type Filter = InventoryFilter;
    const COLLECTION: &'static str = "inventory";
    const NOUN: &'static str = "items";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str(), self.category.as_str()]
    }

    fn matches_filter(&self, filter: InventoryFilter) -> bool {
        filter.admits(self)
    }
}

/// Badge counts on the inventory page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCounts {
    /// Records passing the `in-stock` filter
    pub in_stock: usize,
    /// Records passing the `low-stock` filter
    pub low_stock: usize,
    /// Records passing the `out-of-stock` filter
    pub out_of_stock: usize,
}

impl InventoryCounts {
    /// Count for a given filter button; `all` has no badge
    #[must_use]
    pub fn get(&self, filter: InventoryFilter) -> Option<usize> {
        match filter {
            InventoryFilter::All => None,
            InventoryFilter::InStock => Some(self.in_stock),
            InventoryFilter::LowStock => Some(self.low_stock),
            InventoryFilter::OutOfStock => Some(self.out_of_stock),
        }
    }
}

impl Faceted for InventoryRecord {
    type Counts = InventoryCounts;

    fn facet_counts(records: &[Self]) -> InventoryCounts {
        let tally = |filter: InventoryFilter| records.iter().filter(|r| filter.admits(r)).count();
        InventoryCounts {
            in_stock: tally(InventoryFilter::InStock),
            low_stock: tally(InventoryFilter::LowStock),
            out_of_stock: tally(InventoryFilter::OutOfStock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::counts;
    use crate::query::filter;
    use proptest::prelude::*;

    fn item(id: &str, name: &str, category: &str, stock: u32, threshold: u32) -> InventoryRecord {
        InventoryRecord::new(
            id,
            name,
            category,
            stock,
            threshold,
            "Warehouse A-1",
            NaiveDate::from_ymd_opt(2023, 7, 15).unwrap(),
        )
    }

    #[test]
    fn classifies_concrete_levels() {
        assert_eq!(classify(5, 30), StockStatus::LowStock);
        assert_eq!(classify(0, 10), StockStatus::OutOfStock);
        assert_eq!(classify(84, 50), StockStatus::InStock);
    }

    #[test]
    fn threshold_boundary_is_in_stock() {
        assert_eq!(classify(20, 20), StockStatus::InStock);
        assert_eq!(classify(19, 20), StockStatus::LowStock);
    }

    #[test]
    fn zero_threshold_never_low() {
        assert_eq!(classify(1, 0), StockStatus::InStock);
        assert_eq!(classify(0, 0), StockStatus::OutOfStock);
    }

    #[test]
    fn labels_match_chips() {
        assert_eq!(StockStatus::InStock.label(), "In Stock");
        assert_eq!(StockStatus::LowStock.label(), "Low Stock");
        assert_eq!(StockStatus::OutOfStock.label(), "Out of Stock");
        assert!(StockStatus::OutOfStock.needs_reorder());
        assert!(!StockStatus::InStock.needs_reorder());
    }

    #[test]
    fn status_follows_stock_replacement() {
        let low = item("INV-004", "Infusion Sets", "Therapeutic", 5, 30);
        assert_eq!(low.status(), StockStatus::LowStock);
        let restocked = low.with_stock(40, NaiveDate::from_ymd_opt(2023, 8, 1).unwrap());
        assert_eq!(restocked.status(), StockStatus::InStock);
        assert_eq!(low.stock, 5);
    }

    #[test]
    fn filter_names_round_trip_through_from_str() {
        for filter in InventoryFilter::VARIANTS {
            assert_eq!(filter.as_str().parse::<InventoryFilter>().unwrap(), filter);
        }
        assert!("In-Stock".parse::<InventoryFilter>().is_err());
    }

    #[test]
    fn search_covers_name_id_and_category_but_not_location() {
        let items = vec![
            item("INV-001", "Glucose Meters", "Diagnostic", 45, 20),
            item("INV-002", "Insulin Pump", "Therapeutic", 18, 15),
        ];
        assert_eq!(filter(&items, "glucose", InventoryFilter::All).len(), 1);
        assert_eq!(filter(&items, "inv-002", InventoryFilter::All)[0].name, "Insulin Pump");
        assert_eq!(filter(&items, "therapeutic", InventoryFilter::All).len(), 1);
        assert!(filter(&items, "warehouse", InventoryFilter::All).is_empty());
    }

    #[test]
    fn empty_shelf_with_zero_threshold_counts_in_two_buckets() {
        let items = vec![item("INV-900", "Spare Leads", "Diagnostic", 0, 0)];
        let c = counts(&items);
        assert_eq!(c.in_stock, 1);
        assert_eq!(c.out_of_stock, 1);
        assert_eq!(c.low_stock, 0);
        assert_eq!(c.get(InventoryFilter::All), None);
    }

    #[test]
    fn counts_serialize_camel_case() {
        let json = serde_json::to_value(InventoryCounts { in_stock: 1, low_stock: 2, out_of_stock: 3 })
            .unwrap();
        assert_eq!(json["inStock"], 1);
        assert_eq!(json["outOfStock"], 3);
    }

    proptest! {
        #[test]
        fn prop_empty_shelf_is_out_of_stock(threshold in any::<u32>()) {
            prop_assert_eq!(classify(0, threshold), StockStatus::OutOfStock);
        }

        #[test]
        fn prop_low_iff_below_threshold(stock in 1u32..=u32::MAX, threshold in any::<u32>()) {
            let status = classify(stock, threshold);
            prop_assert_eq!(status == StockStatus::LowStock, stock < threshold);
            if stock >= threshold {
                prop_assert_eq!(status, StockStatus::InStock);
            }
        }

        #[test]
        fn prop_filter_agrees_with_classifier_for_nonzero_stock(
            stock in 1u32..500,
            threshold in 0u32..500,
        ) {
            let record = item("INV-X", "Probe", "Diagnostic", stock, threshold);
            let status = record.status();
            prop_assert_eq!(InventoryFilter::InStock.admits(&record), status == StockStatus::InStock);
            prop_assert_eq!(InventoryFilter::LowStock.admits(&record), status == StockStatus::LowStock);
            prop_assert!(!InventoryFilter::OutOfStock.admits(&record));
        }
    }
}
