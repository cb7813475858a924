//! Query result rendering
//!
//! ```text
//! ----------------
//! | directorName |
//! ================
//! | Tim Burton   |
//! ----------------
//! ```

use std::fmt;
use std::str::FromStr;

use crate::errors::Result;
use crate::ontology::QueryTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(format!(
                "unknown format '{}' (expected table, json or yaml)",
                other
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Render a result table in the requested format
pub fn render(table: &QueryTable, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(table)),
        ReportFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&table.records())?)),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(&table.records())?),
    }
}

/// Fixed-width ASCII table, one line per row, newline terminated
pub fn render_table(table: &QueryTable) -> String {
    let header: Vec<&str> = table.columns().iter().map(String::as_str).collect();
    let rows: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.as_deref().unwrap_or("")).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let total_width = widths.iter().sum::<usize>() + 3 * widths.len() + 1;
    let divider = |c: char| c.to_string().repeat(total_width);

    let mut out = String::new();
    out.push_str(&divider('-'));
    out.push('\n');
    out.push_str(&format_row(&header, &widths));
    out.push_str(&divider('='));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out.push_str(&divider('-'));
    out.push('\n');
    out
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        line.push_str(&format!("| {:<width$} ", cell, width = *width));
    }
    line.push_str("|\n");
    line
}
