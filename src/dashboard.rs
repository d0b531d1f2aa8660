//! One full render pass: generate, filter, summarize, format.
//!
//! Nothing is cached between passes; every parameter change reruns the whole
//! pipeline against a fresh batch.
use crate::error::{DashboardError, Result};
use crate::filter::{filter_records, FilterSet};
use crate::generator::generate;
use crate::report::format_report;
use crate::summary::{count_by_city, count_by_status, summarize, Summary};
use crate::types::{CategoryCount, ContractRecord};
use chrono::NaiveDateTime;
use rand::Rng;
use tracing::{info, warn};

pub const MIN_CONTRACTS: usize = 50;
pub const MAX_CONTRACTS: usize = 1000;
pub const CONTRACT_STEP: usize = 50;
pub const DEFAULT_CONTRACTS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardParams {
    pub num_contracts: usize,
    pub filters: FilterSet,
}

impl DashboardParams {
    pub fn validate(&self) -> Result<()> {
        if self.num_contracts == 0 {
            return Err(DashboardError::InvalidArgument(
                "number of contracts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            num_contracts: DEFAULT_CONTRACTS,
            filters: FilterSet::default(),
        }
    }
}

/// Everything the presentation layer needs for one pass.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub generated: usize,
    pub records: Vec<ContractRecord>,
    pub summary: Summary,
    pub by_city: Vec<CategoryCount>,
    pub by_status: Vec<CategoryCount>,
    pub report: String,
}

pub fn render<R: Rng + ?Sized>(
    params: &DashboardParams,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<DashboardView> {
    params.validate()?;

    let all = generate(params.num_contracts, now.date(), rng)?;
    let records = filter_records(&all, &params.filters);
    info!(
        generated = all.len(),
        matched = records.len(),
        cities = ?params.filters.city_labels(),
        statuses = ?params.filters.status_labels(),
        "rendered dashboard"
    );
    if records.is_empty() {
        warn!("no contracts match the current filters");
    }

    let summary = summarize(&records);
    let report = format_report(&summary, now);
    Ok(DashboardView {
        generated: all.len(),
        by_city: count_by_city(&records),
        by_status: count_by_status(&records),
        records,
        summary,
        report,
    })
}
