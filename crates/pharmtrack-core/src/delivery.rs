//! Delivery records and progress estimation
//!
//! Provides:
//! - [`DeliveryRecord`]: one shipment to a destination
//! - [`DeliveryStatus`]: the stored, externally assigned shipment stage
//! - [`estimate_progress`]: status to a cosmetic completion percentage
//! - [`DeliveryTab`] and [`DeliveryCounts`]: page tabs and their badges
//!
//! Statuses outside the four known stages are kept verbatim as
//! [`DeliveryStatus::Unrecognized`]. They estimate to `0`, pass only the
//! `all` tab, and are logged as anomalies.

use crate::error::CatalogError;
use crate::facets::Faceted;
use crate::query::Queryable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shipment stage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryStatus {
    /// Created, not yet dispatched
    Pending,
    /// On the road
    InTransit,
    /// Received at destination
    Delivered,
    /// Dispatched but behind schedule
    Delayed,
    /// Any other value received from a data source
    Unrecognized(String),
}

impl DeliveryStatus {
    /// The four defined stages
    pub const KNOWN: [Self; 4] = [Self::Pending, Self::InTransit, Self::Delivered, Self::Delayed];

    /// Wire name (`in-transit`); unrecognized values are returned verbatim
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in-transit",
            Self::Delivered => "delivered",
            Self::Delayed => "delayed",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Human label shown on the status chip
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Delayed => "Delayed",
            Self::Unrecognized(_) => "Unknown",
        }
    }

    /// Check if this is one of the four defined stages
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Check if the shipment is still underway (`pending`, `in-transit`, `delayed`)
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::InTransit | Self::Delayed)
    }

    /// Check if the shipment has arrived
    #[inline]
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl From<String> for DeliveryStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "in-transit" => Self::InTransit,
            "delivered" => Self::Delivered,
            "delayed" => Self::Delayed,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<&str> for DeliveryStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<DeliveryStatus> for String {
    fn from(status: DeliveryStatus) -> Self {
        match status {
            DeliveryStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate completion percentage from status
///
/// `delayed` sits below `in-transit` on purpose: a delayed shipment is not
/// treated as further along. Unrecognized statuses yield `0`.
#[must_use]
pub fn estimate_progress(status: &DeliveryStatus) -> u8 {
    match status {
        DeliveryStatus::Pending => 10,
        DeliveryStatus::InTransit => 60,
        DeliveryStatus::Delayed => 40,
        DeliveryStatus::Delivered => 100,
        DeliveryStatus::Unrecognized(raw) => {
            tracing::warn!(status = %raw, "unrecognized delivery status, progress defaults to 0");
            0
        }
    }
}

/// One shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    /// Unique identifier (`DEL-001`)
    pub id: String,
    /// Free-text address
    pub destination: String,
    /// Item names on the shipment; duplicates allowed
    pub items: Vec<String>,
    /// Total unit count
    pub quantity: u32,
    /// Stored shipment stage
    pub status: DeliveryStatus,
    /// Expected arrival date
    #[serde(with = "crate::dates")]
    pub estimated_arrival: NaiveDate,
    /// Date the delivery was created
    #[serde(with = "crate::dates")]
    pub created_at: NaiveDate,
}

impl DeliveryRecord {
    /// Create a record
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        destination: impl Into<String>,
        items: Vec<String>,
        quantity: u32,
        status: DeliveryStatus,
        estimated_arrival: NaiveDate,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            items,
            quantity,
            status,
            estimated_arrival,
            created_at,
        }
    }

    /// Derived progress percentage
    #[inline]
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        estimate_progress(&self.status)
    }

    /// Check if the card should show an ETA
    #[inline]
    #[must_use]
    pub fn shows_eta(&self) -> bool {
        !self.status.is_delivered()
    }

    /// Copy of this record moved to a new stage
    #[must_use]
    pub fn with_status(&self, status: DeliveryStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Tabs on the deliveries page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryTab {
    /// No narrowing
    #[default]
    All,
    /// `pending`, `in-transit` or `delayed`
    Active,
    /// `delivered` only
    Delivered,
}

impl DeliveryTab {
    /// Every tab, in display order
    pub const VARIANTS: [Self; 3] = [Self::All, Self::Active, Self::Delivered];

    /// Kebab-case name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Delivered => "delivered",
        }
    }

    /// Check if a status passes this tab
    #[inline]
    #[must_use]
    pub fn admits(&self, status: &DeliveryStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status.is_active(),
            Self::Delivered => status.is_delivered(),
        }
    }
}

impl fmt::Display for DeliveryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryTab {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| CatalogError::unknown_filter("delivery", s))
    }
}

impl Queryable for DeliveryRecord {
    type Filter = DeliveryTab;
    const COLLECTION: &'static str = "deliveries";
    const NOUN: &'static str = "deliveries";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.items.len());
        fields.push(self.id.as_str());
        fields.push(self.destination.as_str());
        fields.extend(self.items.iter().map(String::as_str));
        fields
    }

    fn matches_filter(&self, tab: DeliveryTab) -> bool {
        tab.admits(&self.status)
    }
}

/// Badge counts on the deliveries page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryCounts {
    /// Size of the base collection
    pub all: usize,
    /// Records passing the `active` tab
    pub active: usize,
    /// Records passing the `delivered` tab
    pub delivered: usize,
}

impl DeliveryCounts {
    /// Badge for a given tab
    #[must_use]
    pub fn get(&self, tab: DeliveryTab) -> usize {
        match tab {
            DeliveryTab::All => self.all,
            DeliveryTab::Active => self.active,
            DeliveryTab::Delivered => self.delivered,
        }
    }

    /// Records counted in `all` but in neither category bucket
    #[inline]
    #[must_use]
    pub fn unclassified(&self) -> usize {
        self.all.saturating_sub(self.active + self.delivered)
    }
}

impl Faceted for DeliveryRecord {
    type Counts = DeliveryCounts;

    fn facet_counts(records: &[Self]) -> DeliveryCounts {
        let mut counts = DeliveryCounts {
            all: records.len(),
            ..DeliveryCounts::default()
        };

        for record in records {
            if DeliveryTab::Active.admits(&record.status) {
                counts.active += 1;
            } else if DeliveryTab::Delivered.admits(&record.status) {
                counts.delivered += 1;
            } else {
                tracing::warn!(
                    id = %record.id,
                    status = %record.status,
                    "delivery with unrecognized status excluded from tab counts"
                );
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::counts;
    use crate::query::filter;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, d).unwrap()
    }

    fn shipment(id: &str, status: DeliveryStatus, items: &[&str]) -> DeliveryRecord {
        DeliveryRecord::new(
            id,
            "City Hospital, 123 Medical Ave, New York",
            items.iter().map(|s| (*s).to_string()).collect(),
            12,
            status,
            day(25),
            day(22),
        )
    }

    fn one_of_each() -> Vec<DeliveryRecord> {
        vec![
            shipment("DEL-001", DeliveryStatus::Pending, &["Glucose Meters"]),
            shipment("DEL-002", DeliveryStatus::InTransit, &["ECG Monitors"]),
            shipment("DEL-003", DeliveryStatus::Delivered, &["Infusion Sets"]),
            shipment("DEL-004", DeliveryStatus::Delayed, &["Defibrillators"]),
        ]
    }

    #[test]
    fn progress_mapping_is_literal() {
        assert_eq!(estimate_progress(&DeliveryStatus::Pending), 10);
        assert_eq!(estimate_progress(&DeliveryStatus::InTransit), 60);
        assert_eq!(estimate_progress(&DeliveryStatus::Delayed), 40);
        assert_eq!(estimate_progress(&DeliveryStatus::Delivered), 100);
    }

    #[test]
    fn unrecognized_status_estimates_zero() {
        assert_eq!(estimate_progress(&DeliveryStatus::from("returned")), 0);
    }

    #[test]
    fn status_parses_known_and_keeps_unknown_verbatim() {
        assert_eq!(DeliveryStatus::from("in-transit"), DeliveryStatus::InTransit);
        let odd = DeliveryStatus::from("In-Transit");
        assert_eq!(odd, DeliveryStatus::Unrecognized("In-Transit".to_string()));
        assert_eq!(odd.as_str(), "In-Transit");
        assert_eq!(odd.label(), "Unknown");
        assert!(!odd.is_known());
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&DeliveryStatus::InTransit).unwrap();
        assert_eq!(json, "\"in-transit\"");
        let back: DeliveryStatus = serde_json::from_str("\"lost\"").unwrap();
        assert_eq!(String::from(back), "lost");
    }

    #[test]
    fn active_tab_keeps_three_non_delivered() {
        let visible = filter(&one_of_each(), "", DeliveryTab::Active);
        let ids: Vec<_> = visible.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["DEL-001", "DEL-002", "DEL-004"]);
    }

    #[test]
    fn counts_for_one_of_each() {
        let c = counts(&one_of_each());
        assert_eq!(c, DeliveryCounts { all: 4, active: 3, delivered: 1 });
        assert_eq!(c.unclassified(), 0);
        assert_eq!(c.get(DeliveryTab::Delivered), 1);
    }

    #[test]
    fn unrecognized_status_only_in_all() {
        let mut records = one_of_each();
        records.push(shipment("DEL-005", DeliveryStatus::from("returned"), &["Probes"]));

        let c = counts(&records);
        assert_eq!(c.all, 5);
        assert_eq!(c.active + c.delivered, 4);
        assert_eq!(c.unclassified(), 1);

        assert_eq!(filter(&records, "", DeliveryTab::All).len(), 5);
        assert!(filter(&records, "probes", DeliveryTab::Active).is_empty());
        assert!(filter(&records, "probes", DeliveryTab::Delivered).is_empty());
    }

    #[test]
    fn search_matches_any_item() {
        let records = vec![shipment(
            "DEL-003",
            DeliveryStatus::Delivered,
            &["Insulin Pumps", "Infusion Sets", "Glucose Meters"],
        )];
        assert_eq!(filter(&records, "INFUSION", DeliveryTab::All).len(), 1);
        assert_eq!(filter(&records, "new york", DeliveryTab::All).len(), 1);
        assert_eq!(filter(&records, "del-003", DeliveryTab::Delivered).len(), 1);
        assert!(filter(&records, "oxygen", DeliveryTab::All).is_empty());
    }

    #[test]
    fn eta_hidden_once_delivered() {
        let record = shipment("DEL-001", DeliveryStatus::InTransit, &[]);
        assert!(record.shows_eta());
        assert!(!record.with_status(DeliveryStatus::Delivered).shows_eta());
        assert_eq!(record.progress_percent(), 60);
    }

    #[test]
    fn tab_names_parse() {
        assert_eq!("active".parse::<DeliveryTab>().unwrap(), DeliveryTab::Active);
        assert!("pending".parse::<DeliveryTab>().is_err());
    }

    fn known_status() -> impl Strategy<Value = DeliveryStatus> {
        prop::sample::select(DeliveryStatus::KNOWN.to_vec())
    }

    proptest! {
        #[test]
        fn prop_progress_is_bounded(status in known_status()) {
            let p = estimate_progress(&status);
            prop_assert!(p > 0 && p <= 100);
        }

        #[test]
        fn prop_known_statuses_partition_all(statuses in prop::collection::vec(known_status(), 0..40)) {
            let records: Vec<_> = statuses
                .into_iter()
                .enumerate()
                .map(|(i, s)| shipment(&format!("DEL-{i:03}"), s, &[]))
                .collect();
            let c = counts(&records);
            prop_assert_eq!(c.active + c.delivered, c.all);
        }
    }
}
