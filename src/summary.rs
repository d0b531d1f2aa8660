use crate::error::{DashboardError, Result};
use crate::types::{CategoryCount, City, ContractRecord, ContractStatus, KpiRow};
use crate::util::{format_currency, format_int, truncated_mean, CURRENCY_SYMBOL, NO_DATA};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Aggregate view over a (usually filtered) set of contracts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_contracts: usize,
    pub total_workers_required: u64,
    /// `None` when there are no records to average over.
    pub avg_hourly_rate: Option<u32>,
    pub total_contract_value: u64,
    /// In order of first appearance.
    pub distinct_cities: Vec<City>,
    pub active_count: usize,
}

impl Summary {
    /// The average hourly rate, or `EmptyInput` when nothing was summarized.
    pub fn require_avg_hourly_rate(&self) -> Result<u32> {
        self.avg_hourly_rate.ok_or(DashboardError::EmptyInput)
    }

    pub fn is_empty(&self) -> bool {
        self.total_contracts == 0
    }

    /// The four headline tiles, formatted for display.
    pub fn kpis(&self) -> Vec<KpiRow> {
        let avg = match self.avg_hourly_rate {
            Some(rate) => format!("{} {}", CURRENCY_SYMBOL, rate),
            None => NO_DATA.to_string(),
        };
        vec![
            KpiRow {
                metric: "Total Contracts",
                value: self.total_contracts.to_string(),
            },
            KpiRow {
                metric: "Total Workers Required",
                value: self.total_workers_required.to_string(),
            },
            KpiRow {
                metric: "Avg Hourly Rate",
                value: avg,
            },
            KpiRow {
                metric: "Total Contract Value",
                value: format!("{} {}", CURRENCY_SYMBOL, format_int(self.total_contract_value)),
            },
        ]
    }

    pub fn cities_covered(&self) -> String {
        self.distinct_cities
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn total_value_display(&self) -> String {
        format_currency(self.total_contract_value)
    }
}

pub fn summarize(records: &[ContractRecord]) -> Summary {
    let mut distinct_cities: Vec<City> = Vec::new();
    for r in records {
        if !distinct_cities.contains(&r.city) {
            distinct_cities.push(r.city);
        }
    }
    let rates: Vec<u32> = records.iter().map(|r| r.hourly_rate).collect();

    Summary {
        total_contracts: records.len(),
        total_workers_required: records.iter().map(|r| u64::from(r.workers_required)).sum(),
        avg_hourly_rate: truncated_mean(&rates),
        total_contract_value: records.iter().map(|r| r.contract_value).sum(),
        distinct_cities,
        active_count: records
            .iter()
            .filter(|r| r.status == ContractStatus::Active)
            .count(),
    }
}

/// Contracts per city, most frequent first.
pub fn count_by_city(records: &[ContractRecord]) -> Vec<CategoryCount> {
    value_counts(records.iter().map(|r| r.city), City::label)
}

/// Contracts per status, most frequent first.
pub fn count_by_status(records: &[ContractRecord]) -> Vec<CategoryCount> {
    value_counts(records.iter().map(|r| r.status), ContractStatus::label)
}

// Ties fall back to the key's natural ordering so output is stable.
fn value_counts<K, I>(keys: I, label: fn(K) -> &'static str) -> Vec<CategoryCount>
where
    K: Copy + Eq + Hash + Ord,
    I: Iterator<Item = K>,
{
    let mut map: HashMap<K, usize> = HashMap::new();
    for key in keys {
        *map.entry(key).or_default() += 1;
    }
    let mut counts: Vec<(K, usize)> = map.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
        .into_iter()
        .map(|(key, count)| CategoryCount {
            label: label(key).to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::record;

    #[test]
    fn empty_input_yields_zeroes_and_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_contracts, 0);
        assert_eq!(summary.total_workers_required, 0);
        assert_eq!(summary.total_contract_value, 0);
        assert!(summary.distinct_cities.is_empty());
        assert_eq!(summary.avg_hourly_rate, None);
        assert!(matches!(
            summary.require_avg_hourly_rate(),
            Err(DashboardError::EmptyInput)
        ));
    }

    #[test]
    fn averages_hourly_rate() {
        let records = vec![
            record(1, City::Mumbai, ContractStatus::Active, 120),
            record(2, City::Pune, ContractStatus::Active, 200),
            record(3, City::Mumbai, ContractStatus::Completed, 280),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.avg_hourly_rate, Some(200));
        assert_eq!(summary.require_avg_hourly_rate().unwrap(), 200);
        assert_eq!(summary.total_contracts, 3);
        assert_eq!(summary.total_workers_required, 30);
        assert_eq!(summary.total_contract_value, 300_000);
        assert_eq!(summary.distinct_cities, vec![City::Mumbai, City::Pune]);
        assert_eq!(summary.active_count, 2);
    }

    #[test]
    fn distinct_cities_follow_first_appearance() {
        let records = vec![
            record(1, City::Goa, ContractStatus::Pending, 150),
            record(2, City::Mumbai, ContractStatus::Pending, 150),
            record(3, City::Goa, ContractStatus::Pending, 150),
        ];
        assert_eq!(summarize(&records).cities_covered(), "Goa, Mumbai");
    }

    #[test]
    fn value_counts_sort_by_frequency_then_canonical_order() {
        let records = vec![
            record(1, City::Pune, ContractStatus::Pending, 150),
            record(2, City::Goa, ContractStatus::Active, 150),
            record(3, City::Goa, ContractStatus::Completed, 150),
            record(4, City::Mumbai, ContractStatus::Active, 150),
        ];
        let by_city = count_by_city(&records);
        let labels: Vec<&str> = by_city.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Goa", "Mumbai", "Pune"]);
        assert_eq!(by_city[0].count, 2);

        let by_status = count_by_status(&records);
        assert_eq!(by_status[0].label, "Active");
        assert_eq!(by_status[0].count, 2);
        assert_eq!(by_status.len(), 3);
    }

    #[test]
    fn kpis_render_no_data_for_empty_average() {
        let kpis = summarize(&[]).kpis();
        assert_eq!(kpis[2].value, NO_DATA);
        assert_eq!(kpis[3].value, "₹ 0");
    }
}
