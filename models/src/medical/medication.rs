use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeVariant, HasBadge};
use crate::identifiers::Identifier;

labelled_enum! {
    MedicationStatus {
        Available => "Available",
        LowStock => "Low Stock",
        OutOfStock => "Out of Stock",
        Expired => "Expired",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: Identifier,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    /// Units on hand.
    pub stock: u32,
    /// Status as recorded by the pharmacy; independent of `stock`.
    pub status: MedicationStatus,
    pub price: f64,
    pub last_updated: NaiveDate,
}

impl Medication {
    pub fn inventory_value(&self) -> f64 {
        f64::from(self.stock) * self.price
    }
}

impl HasBadge for Medication {
    fn badge(&self) -> Badge {
        let variant = match self.status {
            MedicationStatus::Available => BadgeVariant::Success,
            MedicationStatus::LowStock => BadgeVariant::Warning,
            MedicationStatus::OutOfStock => BadgeVariant::Destructive,
            MedicationStatus::Expired => BadgeVariant::Secondary,
        };
        Badge::new(self.status.as_str(), variant)
    }
}
