//! Synthetic contract generation.
//!
//! Every field is drawn independently from a uniform distribution over its
//! documented range. The random source and the reference date are passed in
//! so callers (and tests) control reproducibility.
use crate::error::{DashboardError, Result};
use crate::types::{
    City, ContractRecord, ContractStatus, Shift, CATEGORY_ID_RANGE, CLIENT_ID_RANGE,
    CONTRACT_VALUE_RANGE, CREATED_WINDOW_MONTHS, DURATION_DAYS_RANGE, HOURLY_RATE_RANGE,
    START_WINDOW_MONTHS, WORKERS_REQUIRED_RANGE,
};
use chrono::{Duration, Months, NaiveDate};
use rand::Rng;
use tracing::debug;

/// Generate `n` contracts with ids `1..=n`.
///
/// Fails with `InvalidArgument` when `n` is zero.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<ContractRecord>> {
    if n == 0 {
        return Err(DashboardError::InvalidArgument(
            "number of contracts must be positive".to_string(),
        ));
    }
    let contract_id_max = u32::try_from(n).map_err(|_| {
        DashboardError::InvalidArgument(format!("number of contracts {n} is too large"))
    })?;

    let created_window = DateWindow::trailing(today, CREATED_WINDOW_MONTHS)?;
    let start_window = DateWindow::trailing(today, START_WINDOW_MONTHS)?;

    let records: Vec<ContractRecord> = (1..=contract_id_max)
        .map(|contract_id| {
            let start_date = start_window.sample(rng);
            let end_date = start_date + Duration::days(rng.random_range(DURATION_DAYS_RANGE));
            ContractRecord {
                contract_id,
                client_id: rng.random_range(CLIENT_ID_RANGE),
                created_date: created_window.sample(rng),
                start_date,
                end_date,
                workers_required: rng.random_range(WORKERS_REQUIRED_RANGE),
                category_id: rng.random_range(CATEGORY_ID_RANGE),
                hourly_rate: rng.random_range(HOURLY_RATE_RANGE),
                contract_value: rng.random_range(CONTRACT_VALUE_RANGE),
                status: pick(&ContractStatus::ALL, rng),
                city: pick(&City::ALL, rng),
                shift: pick(&Shift::ALL, rng),
            }
        })
        .collect();

    debug!(count = records.len(), %today, "generated contract batch");
    Ok(records)
}

/// Inclusive range of calendar days ending at a reference date.
#[derive(Debug, Clone, Copy)]
struct DateWindow {
    first: NaiveDate,
    span_days: i64,
}

impl DateWindow {
    fn trailing(today: NaiveDate, months: u32) -> Result<Self> {
        let first = today.checked_sub_months(Months::new(months)).ok_or_else(|| {
            DashboardError::InvalidArgument(format!("{today} minus {months} months is out of range"))
        })?;
        Ok(Self {
            first,
            span_days: (today - first).num_days(),
        })
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        self.first + Duration::days(rng.random_range(0..=self.span_days))
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(values: &[T], rng: &mut R) -> T {
    values[rng.random_range(0..values.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn rejects_zero_contracts() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(0, today(), &mut rng).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidArgument(_)));
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let records = generate(250, today(), &mut rng).unwrap();
        assert_eq!(records.len(), 250);
        let ids: Vec<u32> = records.iter().map(|r| r.contract_id).collect();
        assert_eq!(ids, (1..=250).collect::<Vec<_>>());
    }

    #[test]
    fn fields_stay_within_their_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = today();
        let created_floor = today.checked_sub_months(Months::new(6)).unwrap();
        let start_floor = today.checked_sub_months(Months::new(12)).unwrap();

        for record in generate(1000, today, &mut rng).unwrap() {
            assert!(CLIENT_ID_RANGE.contains(&record.client_id));
            assert!(WORKERS_REQUIRED_RANGE.contains(&record.workers_required));
            assert!(CATEGORY_ID_RANGE.contains(&record.category_id));
            assert!(HOURLY_RATE_RANGE.contains(&record.hourly_rate));
            assert!(CONTRACT_VALUE_RANGE.contains(&record.contract_value));
            assert!(record.created_date >= created_floor && record.created_date <= today);
            assert!(record.start_date >= start_floor && record.start_date <= today);
            assert!(record.end_date > record.start_date);
            assert!(DURATION_DAYS_RANGE.contains(&record.duration_days()));
        }
    }

    #[test]
    fn enumerated_fields_cover_every_value() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = generate(600, today(), &mut rng).unwrap();
        let cities: HashSet<City> = records.iter().map(|r| r.city).collect();
        let statuses: HashSet<ContractStatus> = records.iter().map(|r| r.status).collect();
        let shifts: HashSet<Shift> = records.iter().map(|r| r.shift).collect();
        assert_eq!(cities.len(), City::ALL.len());
        assert_eq!(statuses.len(), ContractStatus::ALL.len());
        assert_eq!(shifts.len(), Shift::ALL.len());
    }

    #[test]
    fn same_seed_reproduces_the_batch() {
        let a = generate(50, today(), &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(50, today(), &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn accepts_sizes_outside_the_slider_range() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(generate(1, today(), &mut rng).unwrap().len(), 1);
        assert_eq!(generate(1337, today(), &mut rng).unwrap().len(), 1337);
    }
}
