//! Plain-text analytics report offered as a download.
use crate::summary::Summary;
use crate::util::{CURRENCY_SYMBOL, NO_DATA};
use chrono::NaiveDateTime;
use std::fmt::Write;

pub const REPORT_FILE_NAME: &str = "Labor_Supply_Chain_Report.txt";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TITLE: &str = "LABOR SUPPLY CHAIN ANALYTICS REPORT";
const RULE: &str = "----------------------------------";
const FOOTER: &str = "\
TECHNICAL ACHIEVEMENTS
- Advanced SQL logic (CTEs, JOINs, Window Functions)
- Predictive-style workforce analysis
- KPI-driven contract intelligence
- Scalable data architecture
";

/// Render the fixed-layout report. An empty summary still produces every
/// line; the average shows `N/A`.
pub fn format_report(summary: &Summary, generated_at: NaiveDateTime) -> String {
    let avg = match summary.avg_hourly_rate {
        Some(rate) => format!("{}{}", CURRENCY_SYMBOL, rate),
        None => NO_DATA.to_string(),
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Generated On: {}", generated_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Contracts: {}", summary.total_contracts);
    let _ = writeln!(out, "Total Workers Required: {}", summary.total_workers_required);
    let _ = writeln!(out, "Average Hourly Rate: {avg}");
    let _ = writeln!(out, "Total Contract Value: {}", summary.total_value_display());
    let _ = writeln!(out);
    let _ = writeln!(out, "Cities Covered: {}", summary.cities_covered());
    let _ = writeln!(out, "Active Contracts: {}", summary.active_count);
    let _ = writeln!(out);
    out.push_str(FOOTER);
    out
}
