//! Staff screen — roster with schedule / performance / time-card tabs.
//! The tabs switch presentation, not membership, so their segments are
//! catch-alls over the full roster.

use serde::{Deserialize, Serialize};

use dineops_core::DineOpsResult;
use dineops_segmentation::{Segment, SegmentSetBuilder, SegmentedView};

use crate::badge::{self, BadgeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    Active,
    Inactive,
}

impl StaffStatus {
    pub fn as_key(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Inactive => "inactive",
        }
    }

    pub fn badge(&self) -> &'static BadgeStyle {
        badge::status_badge(self.as_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Morning,
    Evening,
    FullDay,
    Night,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub status: StaffStatus,
    pub shift: Shift,
    pub hours_this_week: u32,
    pub clocked_in: bool,
    pub clock_in_time: Option<String>,
    pub avatar: String,
}

/// One row of today's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSlot {
    pub time: String,
    pub staff: Vec<String>,
    pub shift: Shift,
}

/// One row of the weekly performance table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffPerformance {
    pub name: String,
    pub rating: f64,
    pub orders_completed: u32,
    pub avg_time: String,
}

pub fn view_mode_segments() -> Vec<Segment<StaffMember>> {
    SegmentSetBuilder::new()
        .view_mode("schedule", "Schedule")
        .view_mode("performance", "Performance")
        .view_mode("timecard", "Time Cards")
        .build()
}

pub fn staff_view(staff: Vec<StaffMember>) -> DineOpsResult<SegmentedView<StaffMember>> {
    SegmentedView::new(staff, view_mode_segments(), "schedule")
}

pub fn clocked_in_count(staff: &[&StaffMember]) -> usize {
    staff.iter().filter(|s| s.clocked_in).count()
}

pub fn total_hours(staff: &[&StaffMember]) -> u32 {
    staff.iter().map(|s| s.hours_this_week).sum()
}

pub fn sample_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: 1,
            name: "Alice Johnson".to_string(),
            role: "Head Chef".to_string(),
            phone: "+1 234-567-8900".to_string(),
            email: "alice@restaurant.com".to_string(),
            status: StaffStatus::Active,
            shift: Shift::Morning,
            hours_this_week: 38,
            clocked_in: true,
            clock_in_time: Some("6:00 AM".to_string()),
            avatar: "AJ".to_string(),
        },
        StaffMember {
            id: 2,
            name: "Bob Martinez".to_string(),
            role: "Server".to_string(),
            phone: "+1 234-567-8901".to_string(),
            email: "bob@restaurant.com".to_string(),
            status: StaffStatus::Active,
            shift: Shift::Evening,
            hours_this_week: 32,
            clocked_in: true,
            clock_in_time: Some("4:00 PM".to_string()),
            avatar: "BM".to_string(),
        },
        StaffMember {
            id: 3,
            name: "Carol Smith".to_string(),
            role: "Manager".to_string(),
            phone: "+1 234-567-8902".to_string(),
            email: "carol@restaurant.com".to_string(),
            status: StaffStatus::Active,
            shift: Shift::FullDay,
            hours_this_week: 45,
            clocked_in: false,
            clock_in_time: None,
            avatar: "CS".to_string(),
        },
        StaffMember {
            id: 4,
            name: "David Chen".to_string(),
            role: "Kitchen Assistant".to_string(),
            phone: "+1 234-567-8903".to_string(),
            email: "david@restaurant.com".to_string(),
            status: StaffStatus::Active,
            shift: Shift::Morning,
            hours_this_week: 28,
            clocked_in: true,
            clock_in_time: Some("7:00 AM".to_string()),
            avatar: "DC".to_string(),
        },
    ]
}

pub fn sample_schedule() -> Vec<ShiftSlot> {
    vec![
        ShiftSlot {
            time: "6:00 AM - 2:00 PM".to_string(),
            staff: vec!["Alice Johnson".to_string(), "David Chen".to_string()],
            shift: Shift::Morning,
        },
        ShiftSlot {
            time: "2:00 PM - 10:00 PM".to_string(),
            staff: vec!["Bob Martinez".to_string(), "Carol Smith".to_string()],
            shift: Shift::Evening,
        },
        ShiftSlot {
            time: "10:00 PM - 6:00 AM".to_string(),
            staff: vec!["Night Staff".to_string()],
            shift: Shift::Night,
        },
    ]
}

pub fn sample_performance() -> Vec<StaffPerformance> {
    vec![
        StaffPerformance {
            name: "Alice Johnson".to_string(),
            rating: 4.8,
            orders_completed: 156,
            avg_time: "12 min".to_string(),
        },
        StaffPerformance {
            name: "Bob Martinez".to_string(),
            rating: 4.6,
            orders_completed: 89,
            avg_time: "8 min".to_string(),
        },
        StaffPerformance {
            name: "Carol Smith".to_string(),
            rating: 4.9,
            orders_completed: 45,
            avg_time: "15 min".to_string(),
        },
        StaffPerformance {
            name: "David Chen".to_string(),
            rating: 4.5,
            orders_completed: 134,
            avg_time: "10 min".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dineops_segmentation::AggregateScope;

    #[test]
    fn test_view_modes_show_full_roster() {
        let mut view = staff_view(sample_staff()).unwrap();
        for key in ["schedule", "performance", "timecard"] {
            view.select_segment(key).unwrap();
            assert_eq!(view.filtered_view().len(), 4, "tab {key}");
        }
    }

    #[test]
    fn test_roster_aggregates() {
        let view = staff_view(sample_staff()).unwrap();
        let clocked_in = view.aggregate(AggregateScope::All, |staff| clocked_in_count(staff));
        assert_eq!(clocked_in, 3);
        let hours = view.aggregate(AggregateScope::All, |staff| total_hours(staff));
        assert_eq!(hours, 38 + 32 + 45 + 28);
    }

    #[test]
    fn test_staff_badge_wiring() {
        assert_eq!(StaffStatus::Active.badge().label, "Active");
        // Inactive is not a badge-table entry; it falls back.
        assert_eq!(StaffStatus::Inactive.badge().label, "Unknown");
    }
}
