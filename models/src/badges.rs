// models/src/badges.rs
use serde::{Deserialize, Serialize};

/// Visual treatment of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Warning,
    Destructive,
    Secondary,
    Primary,
    Accent,
    /// Fallback for labels without a dedicated colour.
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: &str, variant: BadgeVariant) -> Self {
        Badge {
            label: label.to_string(),
            variant,
        }
    }

    pub fn outline(label: &str) -> Self {
        Badge::new(label, BadgeVariant::Outline)
    }
}

/// Records that render with a status badge in their list view.
pub trait HasBadge {
    fn badge(&self) -> Badge;
}
