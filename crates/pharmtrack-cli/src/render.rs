//! Terminal and JSON rendering of engine output
//!
//! Views are plain serde structs built from a [`PageState`]; the text
//! renderers format the same views as aligned tables.

use pharmtrack_core::dates::display_date;
use pharmtrack_core::{
    DashboardSummary, DeliveryCounts, DeliveryRecord, DeliveryTab, InventoryCounts,
    InventoryFilter, InventoryRecord, PageState,
};
use serde::Serialize;
use std::fmt::Write;

/// One inventory line as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    /// Record id
    pub id: String,
    /// Instrument name
    pub name: String,
    /// Category
    pub category: String,
    /// Units on hand
    pub stock: u32,
    /// Storage location
    pub location: String,
    /// Derived status (`low-stock`)
    pub status: &'static str,
    /// Status chip label (`Low Stock`)
    pub label: &'static str,
    /// Last stock count (ISO)
    pub last_updated: String,
}

impl From<&InventoryRecord> for InventoryRow {
    fn from(record: &InventoryRecord) -> Self {
        let status = record.status();
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            stock: record.stock,
            location: record.location.clone(),
            status: status.as_str(),
            label: status.label(),
            last_updated: record.last_updated.to_string(),
        }
    }
}

/// Inventory page output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    /// Search text in effect
    pub query: String,
    /// Filter in effect
    pub filter: InventoryFilter,
    /// Badges over the whole collection
    pub counts: InventoryCounts,
    /// Visible rows
    pub rows: Vec<InventoryRow>,
    /// Empty-state text when nothing is visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl InventoryView {
    /// Capture the current state of an inventory page
    #[must_use]
    pub fn from_page(page: &PageState<InventoryRecord>) -> Self {
        Self {
            query: page.search_query().to_string(),
            filter: page.active_filter(),
            counts: page.counts(),
            rows: page.visible().iter().map(InventoryRow::from).collect(),
            empty_message: page.is_empty_result().then(|| page.empty_message()),
        }
    }
}

/// One delivery as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRow {
    /// Record id
    pub id: String,
    /// Destination address
    pub destination: String,
    /// Item names
    pub items: Vec<String>,
    /// Total units
    pub quantity: u32,
    /// Stored status, verbatim
    pub status: String,
    /// Status chip label
    pub label: &'static str,
    /// Progress estimate
    pub progress: u8,
    /// Expected arrival, omitted once delivered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    /// Creation date (ISO)
    pub created_at: String,
}

impl From<&DeliveryRecord> for DeliveryRow {
    fn from(record: &DeliveryRecord) -> Self {
        Self {
            id: record.id.clone(),
            destination: record.destination.clone(),
            items: record.items.clone(),
            quantity: record.quantity,
            status: record.status.to_string(),
            label: record.status.label(),
            progress: record.progress_percent(),
            eta: record
                .shows_eta()
                .then(|| record.estimated_arrival.to_string()),
            created_at: record.created_at.to_string(),
        }
    }
}

/// Deliveries page output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryView {
    /// Search text in effect
    pub query: String,
    /// Tab in effect
    pub tab: DeliveryTab,
    /// Badges over the whole collection
    pub counts: DeliveryCounts,
    /// Visible rows
    pub rows: Vec<DeliveryRow>,
    /// Empty-state text when nothing is visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl DeliveryView {
    /// Capture the current state of a deliveries page
    #[must_use]
    pub fn from_page(page: &PageState<DeliveryRecord>) -> Self {
        Self {
            query: page.search_query().to_string(),
            tab: page.active_filter(),
            counts: page.counts(),
            rows: page.visible().iter().map(DeliveryRow::from).collect(),
            empty_message: page.is_empty_result().then(|| page.empty_message()),
        }
    }
}

/// Render the inventory page as text
#[must_use]
pub fn inventory_text(page: &PageState<InventoryRecord>) -> String {
    let counts = page.counts();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Filter: {}  |  In Stock {}  Low {}  Out {}",
        page.active_filter(),
        counts.in_stock,
        counts.low_stock,
        counts.out_of_stock
    );
    out.push('\n');

    if page.is_empty_result() {
        let _ = writeln!(out, "No items found. {}", page.empty_message());
        return out;
    }

    for record in page.visible() {
        let _ = writeln!(
            out,
            "{:<8} {:<24} {:<12} {:>5} units  {:<14} {:<12}  updated {}",
            record.id,
            record.name,
            record.category,
            record.stock,
            record.location,
            record.status().label(),
            display_date(record.last_updated),
        );
    }
    out
}

/// Render the deliveries page as text
#[must_use]
pub fn deliveries_text(page: &PageState<DeliveryRecord>) -> String {
    let counts = page.counts();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Tab: {}  |  All {}  Active {}  Delivered {}",
        page.active_filter(),
        counts.all,
        counts.active,
        counts.delivered
    );
    out.push('\n');

    if page.is_empty_result() {
        let _ = writeln!(out, "No deliveries found. {}", page.empty_message());
        return out;
    }

    for record in page.visible() {
        let _ = writeln!(
            out,
            "Delivery #{}  [{}]  {}",
            record.id,
            record.status.label(),
            progress_bar(record.progress_percent())
        );
        let _ = writeln!(out, "  Destination: {}", record.destination);
        let _ = writeln!(
            out,
            "  Items ({}): {}",
            record.quantity,
            record.items.join(", ")
        );
        let _ = write!(out, "  Created: {}", display_date(record.created_at));
        if record.shows_eta() {
            let _ = write!(out, "  ETA: {}", display_date(record.estimated_arrival));
        }
        out.push('\n');
    }
    out
}

/// Render the dashboard overview as text
#[must_use]
pub fn summary_text(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Inventory     {:>6} units across {} items", summary.total_units, summary.tracked_items);
    let _ = writeln!(out, "Active Deliveries   {:>6}", summary.active_deliveries);
    let _ = writeln!(out, "Delivered           {:>6}", summary.delivered);
    let _ = writeln!(out, "Low Stock Alerts    {:>6} ({} out of stock)", summary.low_stock_alerts, summary.out_of_stock);
    let _ = writeln!(out, "Average Progress    {:>5}%", summary.average_progress);
    out
}

fn progress_bar(percent: u8) -> String {
    const WIDTH: usize = 20;
    let filled = usize::from(percent.min(100)) * WIDTH / 100;
    format!(
        "{}{} {:>3}%",
        "#".repeat(filled),
        ".".repeat(WIDTH - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmtrack_core::{sample, DeliveryStatus};
    use pretty_assertions::assert_eq;

    #[test]
    fn progress_bar_scales() {
        assert_eq!(progress_bar(0), format!("{}   0%", ".".repeat(20)));
        assert_eq!(progress_bar(40), format!("{}{}  40%", "#".repeat(8), ".".repeat(12)));
        assert_eq!(progress_bar(100), format!("{} 100%", "#".repeat(20)));
    }

    #[test]
    fn inventory_view_reports_empty_state() {
        let mut page = PageState::new(sample::inventory());
        page.set_search_query("scalpel");
        let view = InventoryView::from_page(&page);
        assert!(view.rows.is_empty());
        assert_eq!(
            view.empty_message.as_deref(),
            Some("No items match your search \"scalpel\"")
        );
        assert_eq!(view.counts.in_stock, 6);
    }

    #[test]
    fn delivered_rows_drop_eta() {
        let row = DeliveryRow::from(&sample::deliveries()[2]);
        assert_eq!(row.status, "delivered");
        assert_eq!(row.progress, 100);
        assert_eq!(row.eta, None);

        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("eta").is_none());
        assert_eq!(json["createdAt"], "2023-07-18");
    }

    #[test]
    fn unknown_status_renders_as_unknown() {
        let record = sample::deliveries()[0].with_status(DeliveryStatus::from("held"));
        let row = DeliveryRow::from(&record);
        assert_eq!(row.status, "held");
        assert_eq!(row.label, "Unknown");
        assert_eq!(row.progress, 0);
    }

    #[test]
    fn deliveries_text_lists_visible_only() {
        let mut page = PageState::new(sample::deliveries());
        page.set_active_filter(DeliveryTab::Delivered);
        let text = deliveries_text(&page);
        assert!(text.starts_with("Tab: delivered  |  All 6  Active 4  Delivered 2"));
        assert!(text.contains("Delivery #DEL-003"));
        assert!(text.contains("Delivery #DEL-006"));
        assert!(!text.contains("DEL-001"));
        assert!(!text.contains("ETA:"));
    }

    #[test]
    fn inventory_text_shows_labels() {
        let mut page = PageState::new(sample::inventory());
        page.set_active_filter(InventoryFilter::LowStock);
        let text = inventory_text(&page);
        assert!(text.contains("Infusion Sets"));
        assert!(text.contains("Low Stock"));
        assert!(text.contains("updated Jul 10, 2023"));
    }
}
