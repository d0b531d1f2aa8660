//! Synthetic labor-contract dashboard: generate a batch of contracts, filter
//! by city and status, summarize, and export a text report.
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod generator;
pub mod output;
pub mod report;
pub mod summary;
pub mod telemetry;
pub mod types;
pub mod util;

pub use dashboard::{render, DashboardParams, DashboardView};
pub use error::{DashboardError, Result};
pub use filter::{filter_records, FilterSet};
pub use generator::generate;
pub use report::{format_report, REPORT_FILE_NAME};
pub use summary::{count_by_city, count_by_status, summarize, Summary};
pub use types::{City, ContractRecord, ContractStatus, Shift};
