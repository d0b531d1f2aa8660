use crate::error::DashboardError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tabled::Tabled;

pub const CLIENT_ID_RANGE: RangeInclusive<u8> = 1..=10;
pub const WORKERS_REQUIRED_RANGE: RangeInclusive<u32> = 5..=50;
pub const CATEGORY_ID_RANGE: RangeInclusive<u8> = 1..=8;
pub const HOURLY_RATE_RANGE: RangeInclusive<u32> = 120..=350;
pub const CONTRACT_VALUE_RANGE: RangeInclusive<u64> = 50_000..=2_000_000;
/// Days added to `start_date` to obtain `end_date`.
pub const DURATION_DAYS_RANGE: RangeInclusive<i64> = 30..=365;
pub const CREATED_WINDOW_MONTHS: u32 = 6;
pub const START_WINDOW_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum City {
    Mumbai,
    Pune,
    Aurangabad,
    Nashik,
    Goa,
}

impl City {
    pub const ALL: [City; 5] = [
        City::Mumbai,
        City::Pune,
        City::Aurangabad,
        City::Nashik,
        City::Goa,
    ];

    pub fn label(self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::Pune => "Pune",
            City::Aurangabad => "Aurangabad",
            City::Nashik => "Nashik",
            City::Goa => "Goa",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for City {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        City::ALL
            .into_iter()
            .find(|city| city.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown city '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Completed,
    Pending,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Active,
        ContractStatus::Completed,
        ContractStatus::Pending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContractStatus::Active => "Active",
            ContractStatus::Completed => "Completed",
            ContractStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContractStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ContractStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown status '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Day,
    Night,
    Rotational,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Day, Shift::Night, Shift::Rotational];

    pub fn label(self) -> &'static str {
        match self {
            Shift::Day => "Day",
            Shift::Night => "Night",
            Shift::Rotational => "Rotational",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One synthetic labor-staffing contract.
///
/// Column names follow the dashboard table headers so CSV exports and
/// console previews line up with what users see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct ContractRecord {
    #[serde(rename = "Contract ID")]
    #[tabled(rename = "Contract ID")]
    pub contract_id: u32,
    #[serde(rename = "Client ID")]
    #[tabled(rename = "Client ID")]
    pub client_id: u8,
    #[serde(rename = "Created Date")]
    #[tabled(rename = "Created Date")]
    pub created_date: NaiveDate,
    #[serde(rename = "Start Date")]
    #[tabled(rename = "Start Date")]
    pub start_date: NaiveDate,
    #[serde(rename = "End Date")]
    #[tabled(rename = "End Date")]
    pub end_date: NaiveDate,
    #[serde(rename = "Workers Required")]
    #[tabled(rename = "Workers Required")]
    pub workers_required: u32,
    #[serde(rename = "Category ID")]
    #[tabled(rename = "Category ID")]
    pub category_id: u8,
    #[serde(rename = "Hourly Rate")]
    #[tabled(rename = "Hourly Rate")]
    pub hourly_rate: u32,
    #[serde(rename = "Contract Value")]
    #[tabled(rename = "Contract Value")]
    pub contract_value: u64,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: ContractStatus,
    #[serde(rename = "City")]
    #[tabled(rename = "City")]
    pub city: City,
    #[serde(rename = "Shift")]
    #[tabled(rename = "Shift")]
    pub shift: Shift,
}

impl ContractRecord {
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// One bar of a per-category distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct CategoryCount {
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub label: String,
    #[serde(rename = "Contracts")]
    #[tabled(rename = "Contracts")]
    pub count: usize,
}

/// Headline metric as shown on the dashboard tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct KpiRow {
    #[serde(rename = "Metric")]
    #[tabled(rename = "Metric")]
    pub metric: &'static str,
    #[serde(rename = "Value")]
    #[tabled(rename = "Value")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_parses_case_insensitively() {
        assert_eq!("mumbai".parse::<City>().unwrap(), City::Mumbai);
        assert_eq!(" Goa ".parse::<City>().unwrap(), City::Goa);
        assert!(matches!(
            "Delhi".parse::<City>(),
            Err(DashboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn status_parses_and_rejects_unknown() {
        assert_eq!(
            "COMPLETED".parse::<ContractStatus>().unwrap(),
            ContractStatus::Completed
        );
        assert!("Cancelled".parse::<ContractStatus>().is_err());
    }

    #[test]
    fn labels_match_display() {
        for city in City::ALL {
            assert_eq!(city.to_string(), city.label());
        }
        for shift in Shift::ALL {
            assert_eq!(shift.to_string(), shift.label());
        }
    }
}
