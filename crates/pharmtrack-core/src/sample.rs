//! Built-in sample collections
//!
//! Eight instruments and six deliveries used when no dataset file is given.
//! Each call returns a fresh owned collection.

use crate::delivery::{DeliveryRecord, DeliveryStatus};
use crate::inventory::InventoryRecord;
use chrono::NaiveDate;

fn july(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 7, day).unwrap_or(NaiveDate::MIN)
}

/// Sample instrument inventory
#[must_use]
pub fn inventory() -> Vec<InventoryRecord> {
    vec![
        InventoryRecord::new("INV-001", "Glucose Meters", "Diagnostic", 45, 20, "Warehouse A-1", july(15)),
        InventoryRecord::new("INV-002", "Insulin Pump", "Therapeutic", 18, 15, "Warehouse B-3", july(18)),
        InventoryRecord::new("INV-003", "Blood Pressure Monitors", "Diagnostic", 32, 25, "Warehouse A-2", july(20)),
        InventoryRecord::new("INV-004", "Infusion Sets", "Therapeutic", 5, 30, "Warehouse C-1", july(10)),
        InventoryRecord::new("INV-005", "Oxygen Concentrator", "Respiratory", 0, 10, "Warehouse D-2", july(5)),
        InventoryRecord::new("INV-006", "ECG Monitors", "Diagnostic", 12, 8, "Warehouse B-1", july(22)),
        InventoryRecord::new("INV-007", "Surgical Instruments", "Surgical", 84, 50, "Warehouse A-3", july(17)),
        InventoryRecord::new("INV-008", "Defibrillators", "Emergency", 7, 5, "Warehouse D-1", july(21)),
    ]
}

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// Sample shipments
#[must_use]
pub fn deliveries() -> Vec<DeliveryRecord> {
    vec![
        DeliveryRecord::new(
            "DEL-001",
            "City Hospital, 123 Medical Ave, New York",
            items(&["Glucose Meters", "ECG Monitors"]),
            12,
            DeliveryStatus::InTransit,
            july(25),
            july(22),
        ),
        DeliveryRecord::new(
            "DEL-002",
            "Westside Clinic, 456 Health St, Boston",
            items(&["Blood Pressure Monitors", "Surgical Instruments"]),
            8,
            DeliveryStatus::Pending,
            july(28),
            july(21),
        ),
        DeliveryRecord::new(
            "DEL-003",
            "County Medical Center, 789 Care Rd, Chicago",
            items(&["Insulin Pumps", "Infusion Sets", "Glucose Meters"]),
            15,
            DeliveryStatus::Delivered,
            july(20),
            july(18),
        ),
        DeliveryRecord::new(
            "DEL-004",
            "Memorial Hospital, 234 Recovery Ln, Los Angeles",
            items(&["Defibrillators", "ECG Monitors"]),
            6,
            DeliveryStatus::Delayed,
            july(27),
            july(19),
        ),
        DeliveryRecord::new(
            "DEL-005",
            "University Medical, 567 Research Blvd, Seattle",
            items(&["Oxygen Concentrators", "Blood Pressure Monitors"]),
            10,
            DeliveryStatus::InTransit,
            july(26),
            july(22),
        ),
        DeliveryRecord::new(
            "DEL-006",
            "Community Health, 890 Wellness Way, Denver",
            items(&["Surgical Instruments", "Glucose Meters"]),
            14,
            DeliveryStatus::Delivered,
            july(21),
            july(17),
        ),
    ]
}
