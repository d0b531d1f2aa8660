use crate::error::Result;
use crate::report::REPORT_FILE_NAME;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = rows.len(), "wrote csv export");
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    info!(path = %path.display(), "wrote json export");
    Ok(())
}

/// Save the report text under its download file name inside `dir`.
pub fn write_report(dir: &Path, text: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILE_NAME);
    std::fs::write(&path, text)?;
    info!(path = %path.display(), bytes = text.len(), "wrote report");
    Ok(path)
}

/// Markdown table of the first `max_rows` rows, or `(no rows)`.
pub fn render_table<T>(rows: &[T], max_rows: usize) -> String
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(slice).with(Style::markdown()).to_string()
}

pub fn preview_table<T>(title: &str, note: Option<&str>, rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    println!("{}", title);
    if let Some(n) = note {
        println!("({})", n);
    }
    println!();
    println!("{}\n", render_table(rows, max_rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryCount;
    use tempfile::TempDir;

    fn counts() -> Vec<CategoryCount> {
        vec![
            CategoryCount {
                label: "Mumbai".to_string(),
                count: 4,
            },
            CategoryCount {
                label: "Pune".to_string(),
                count: 1,
            },
        ]
    }

    #[test]
    fn render_table_limits_rows() {
        let table = render_table(&counts(), 1);
        assert!(table.contains("Category"));
        assert!(table.contains("Mumbai"));
        assert!(!table.contains("Pune"));
    }

    #[test]
    fn render_table_reports_empty() {
        assert_eq!(render_table::<CategoryCount>(&[], 5), "(no rows)");
    }

    #[test]
    fn write_report_uses_download_name() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_report(dir.path(), "hello\n").expect("report written");
        assert_eq!(path.file_name().unwrap(), REPORT_FILE_NAME);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn csv_export_uses_column_headers() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("counts.csv");
        write_csv(&path, &counts()).expect("csv written");
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.starts_with("Category,Contracts\n"));
        assert!(body.contains("Mumbai,4\n"));
    }
}
