use crate::error::Result;
use crate::types::{City, ContractRecord, ContractStatus};
use std::collections::BTreeSet;

/// Multiselect-style filter: a record is in scope only if both its city and
/// its status are selected. Selecting nothing on either axis matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    pub cities: BTreeSet<City>,
    pub statuses: BTreeSet<ContractStatus>,
}

impl FilterSet {
    pub fn new(
        cities: impl IntoIterator<Item = City>,
        statuses: impl IntoIterator<Item = ContractStatus>,
    ) -> Self {
        Self {
            cities: cities.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
        }
    }

    pub fn all() -> Self {
        Self::new(City::ALL, ContractStatus::ALL)
    }

    /// Build a filter from user-entered names. Unknown names are rejected.
    pub fn parse<S: AsRef<str>>(cities: &[S], statuses: &[S]) -> Result<Self> {
        Ok(Self {
            cities: Self::parse_cities(cities)?,
            statuses: Self::parse_statuses(statuses)?,
        })
    }

    pub fn parse_cities<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<City>> {
        names.iter().map(|c| c.as_ref().parse::<City>()).collect()
    }

    pub fn parse_statuses<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<ContractStatus>> {
        names
            .iter()
            .map(|s| s.as_ref().parse::<ContractStatus>())
            .collect()
    }

    pub fn matches(&self, record: &ContractRecord) -> bool {
        self.cities.contains(&record.city) && self.statuses.contains(&record.status)
    }

    pub fn city_labels(&self) -> Vec<&'static str> {
        self.cities.iter().map(|c| c.label()).collect()
    }

    pub fn status_labels(&self) -> Vec<&'static str> {
        self.statuses.iter().map(|s| s.label()).collect()
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::new([City::Mumbai, City::Pune], [ContractStatus::Active])
    }
}

/// Keep the records selected by `filters`, preserving their order.
pub fn filter_records(records: &[ContractRecord], filters: &FilterSet) -> Vec<ContractRecord> {
    records
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect()
}
