//! Status badge styling via lookup tables. One table per status domain,
//! each with an explicit fallback row for unrecognized keys, replacing the
//! per-screen switch statements of the original screens.

use serde::Serialize;

use crate::theme;

/// Display styling for one status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

pub const FALLBACK_BADGE: BadgeStyle = BadgeStyle {
    label: "Unknown",
    color: theme::GRAY_500,
    background: theme::GRAY_100,
};

/// Order, reservation, and staff statuses share one badge domain.
const STATUS_BADGES: &[(&str, BadgeStyle)] = &[
    (
        "pending",
        BadgeStyle {
            label: "Pending",
            color: theme::AMBER_500,
            background: theme::AMBER_100,
        },
    ),
    (
        "preparing",
        BadgeStyle {
            label: "Preparing",
            color: theme::BLUE_500,
            background: theme::BLUE_100,
        },
    ),
    (
        "ready",
        BadgeStyle {
            label: "Ready",
            color: theme::GREEN_600,
            background: theme::GREEN_100,
        },
    ),
    (
        "completed",
        BadgeStyle {
            label: "Completed",
            color: theme::GREEN_600,
            background: theme::GREEN_100,
        },
    ),
    (
        "cancelled",
        BadgeStyle {
            label: "Cancelled",
            color: theme::RED_600,
            background: theme::RED_100,
        },
    ),
    (
        "confirmed",
        BadgeStyle {
            label: "Confirmed",
            color: theme::GREEN_600,
            background: theme::GREEN_100,
        },
    ),
    (
        "active",
        BadgeStyle {
            label: "Active",
            color: theme::BLUE_500,
            background: theme::BLUE_100,
        },
    ),
];

/// Floor-plan table statuses.
const TABLE_BADGES: &[(&str, BadgeStyle)] = &[
    (
        "available",
        BadgeStyle {
            label: "Available",
            color: theme::GREEN_600,
            background: theme::GREEN_100,
        },
    ),
    (
        "occupied",
        BadgeStyle {
            label: "Occupied",
            color: theme::RED_600,
            background: theme::RED_100,
        },
    ),
    (
        "reserved",
        BadgeStyle {
            label: "Reserved",
            color: theme::AMBER_500,
            background: theme::AMBER_100,
        },
    ),
];

/// Inventory stock statuses.
const STOCK_BADGES: &[(&str, BadgeStyle)] = &[
    (
        "critical",
        BadgeStyle {
            label: "Critical",
            color: theme::RED_600,
            background: theme::RED_100,
        },
    ),
    (
        "low",
        BadgeStyle {
            label: "Low Stock",
            color: theme::AMBER_500,
            background: theme::AMBER_100,
        },
    ),
    (
        "good",
        BadgeStyle {
            label: "In Stock",
            color: theme::GREEN_600,
            background: theme::GREEN_100,
        },
    ),
];

fn lookup(table: &'static [(&str, BadgeStyle)], key: &str) -> &'static BadgeStyle {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, style)| style)
        .unwrap_or(&FALLBACK_BADGE)
}

pub fn status_badge(key: &str) -> &'static BadgeStyle {
    lookup(STATUS_BADGES, key)
}

pub fn table_badge(key: &str) -> &'static BadgeStyle {
    lookup(TABLE_BADGES, key)
}

pub fn stock_badge(key: &str) -> &'static BadgeStyle {
    lookup(STOCK_BADGES, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lookup() {
        assert_eq!(status_badge("preparing").label, "Preparing");
        assert_eq!(status_badge("ready").color, theme::GREEN_600);
        assert_eq!(stock_badge("low").label, "Low Stock");
        assert_eq!(table_badge("occupied").color, theme::RED_600);
    }

    #[test]
    fn test_unrecognized_key_falls_back() {
        assert_eq!(status_badge("vaporized").label, "Unknown");
        assert_eq!(table_badge("").label, "Unknown");
        assert_eq!(stock_badge("surplus").color, theme::GRAY_500);
    }
}
