//! Reservations screen — floor plan tables plus bookings split into
//! today / upcoming tabs.

use serde::{Deserialize, Serialize};

use dineops_core::DineOpsResult;
use dineops_segmentation::{Segment, SegmentSetBuilder, SegmentedView};

use crate::badge::{self, BadgeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

impl TableStatus {
    pub fn as_key(&self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
        }
    }

    pub fn badge(&self) -> &'static BadgeStyle {
        badge::table_badge(self.as_key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub number: u32,
    pub seats: u32,
    pub status: TableStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
}

impl ReservationStatus {
    pub fn as_key(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
        }
    }

    pub fn badge(&self) -> &'static BadgeStyle {
        badge::status_badge(self.as_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationDay {
    Today,
    Tomorrow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub day: ReservationDay,
    pub time: String,
    pub guests: u32,
    pub table: Option<u32>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

/// Today vs. upcoming bookings, as the original screen splits them.
pub fn reservation_segments() -> Vec<Segment<Reservation>> {
    SegmentSetBuilder::new()
        .all("All Reservations")
        .segment("today", "Today", |r: &Reservation| {
            r.day == ReservationDay::Today
        })
        .segment("upcoming", "Upcoming", |r: &Reservation| {
            r.day != ReservationDay::Today
        })
        .build()
}

pub fn reservations_view(
    reservations: Vec<Reservation>,
) -> DineOpsResult<SegmentedView<Reservation>> {
    SegmentedView::new(reservations, reservation_segments(), "today")
}

/// Header figure: free tables on the floor plan.
pub fn available_tables(tables: &[DiningTable]) -> usize {
    tables
        .iter()
        .filter(|t| t.status == TableStatus::Available)
        .count()
}

pub fn sample_tables() -> Vec<DiningTable> {
    let layout = [
        (1, 2, TableStatus::Available),
        (2, 4, TableStatus::Occupied),
        (3, 2, TableStatus::Reserved),
        (4, 6, TableStatus::Available),
        (5, 4, TableStatus::Occupied),
        (6, 8, TableStatus::Available),
        (7, 2, TableStatus::Available),
        (8, 4, TableStatus::Reserved),
    ];
    layout
        .into_iter()
        .map(|(number, seats, status)| DiningTable {
            number,
            seats,
            status,
        })
        .collect()
}

pub fn sample_reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: "R001".to_string(),
            customer_name: "Emma Thompson".to_string(),
            phone: "+1 234-567-8900".to_string(),
            day: ReservationDay::Today,
            time: "7:00 PM".to_string(),
            guests: 4,
            table: Some(3),
            status: ReservationStatus::Confirmed,
            notes: Some("Birthday celebration".to_string()),
        },
        Reservation {
            id: "R002".to_string(),
            customer_name: "James Rodriguez".to_string(),
            phone: "+1 234-567-8901".to_string(),
            day: ReservationDay::Today,
            time: "7:30 PM".to_string(),
            guests: 2,
            table: Some(8),
            status: ReservationStatus::Confirmed,
            notes: Some("Window seat preferred".to_string()),
        },
        Reservation {
            id: "R003".to_string(),
            customer_name: "Lisa Chen".to_string(),
            phone: "+1 234-567-8902".to_string(),
            day: ReservationDay::Today,
            time: "8:00 PM".to_string(),
            guests: 6,
            table: None,
            status: ReservationStatus::Pending,
            notes: Some("Business dinner".to_string()),
        },
        Reservation {
            id: "R004".to_string(),
            customer_name: "Michael Brown".to_string(),
            phone: "+1 234-567-8903".to_string(),
            day: ReservationDay::Tomorrow,
            time: "6:00 PM".to_string(),
            guests: 3,
            table: None,
            status: ReservationStatus::Pending,
            notes: None,
        },
    ]
}
