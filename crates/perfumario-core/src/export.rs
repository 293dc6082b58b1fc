//! Inventory report rendering.
//!
//! The HTML output is a self-contained A4 print document; hosts hand it to
//! their PDF printer. JSON and Markdown carry the same grouped rows.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Perfume, StockStatus};
use crate::util::escape_html;

/// Shown when a perfume references a brand that is not loaded
pub const MISSING_BRAND_LABEL: &str = "Brand not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "pdf" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            other => Err(Error::InvalidInput(format!("unknown export format '{other}'"))),
        }
    }
}

/// One perfume row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub stock: u32,
    pub status: String,
}

/// Perfumes sharing a gender label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportGroup {
    pub label: String,
    pub perfumes: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub groups: Vec<ReportGroup>,
}

impl InventoryReport {
    /// Group perfumes by gender label; groups and rows are sorted by name.
    #[must_use]
    pub fn build(
        perfumes: &[Perfume],
        brand_names: &HashMap<String, String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let mut grouped: BTreeMap<&str, Vec<ReportRow>> = BTreeMap::new();
        for perfume in perfumes {
            let status = perfume.stock_status();
            grouped
                .entry(perfume.gender.label())
                .or_default()
                .push(ReportRow {
                    id: perfume.id.clone(),
                    name: perfume.name.clone(),
                    brand: brand_names
                        .get(&perfume.brand_id)
                        .map_or_else(|| MISSING_BRAND_LABEL.to_string(), Clone::clone),
                    stock: perfume.stock,
                    status: status.label().to_string(),
                });
        }

        let groups = grouped
            .into_iter()
            .map(|(label, mut rows)| {
                rows.sort_by_cached_key(|row| row.name.to_lowercase());
                ReportGroup {
                    label: label.to_string(),
                    perfumes: rows,
                }
            })
            .collect();

        Self {
            generated_at,
            total: perfumes.len(),
            groups,
        }
    }

    fn generated_label(&self) -> String {
        self.generated_at.format("%B %-d, %Y").to_string()
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Html => Ok(self.render_html()),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Markdown => Ok(self.render_markdown()),
        }
    }

    #[must_use]
    pub fn render_markdown(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "# Perfume Inventory");
        let _ = writeln!(output);
        let _ = writeln!(output, "Generated on {}", self.generated_label());

        for group in &self.groups {
            let _ = writeln!(output);
            let _ = writeln!(output, "## {} ({} perfumes)", group.label, group.perfumes.len());
            let _ = writeln!(output);
            let _ = writeln!(output, "| Perfume | Brand | Status |");
            let _ = writeln!(output, "| --- | --- | --- |");
            for row in &group.perfumes {
                let _ = writeln!(
                    output,
                    "| {} | {} | {} |",
                    markdown_cell(&row.name),
                    markdown_cell(&row.brand),
                    row.status
                );
            }
        }

        output
    }

    #[must_use]
    pub fn render_html(&self) -> String {
        let mut sections = String::new();
        for group in &self.groups {
            let label = escape_html(&group.label);
            let initial = label.chars().next().unwrap_or('?');
            let _ = write!(
                sections,
                r#"<div class="gender-section"><h2 class="gender-title"><span class="gender-icon">{initial}</span>{label} ({count} perfumes)</h2><table class="perfumes-table"><thead><tr><th>Perfume</th><th>Brand</th><th>Status</th></tr></thead><tbody>"#,
                count = group.perfumes.len(),
            );
            for row in &group.perfumes {
                let _ = write!(
                    sections,
                    r#"<tr><td class="perfume-name">{}</td><td class="brand-name">{}</td><td><span class="status-chip {}">{}</span></td></tr>"#,
                    escape_html(&row.name),
                    escape_html(&row.brand),
                    StockStatus::from_stock(row.stock).css_class(),
                    escape_html(&row.status),
                );
            }
            sections.push_str("</tbody></table></div>");
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Perfume Inventory</title>
<style>{REPORT_CSS}</style>
</head>
<body>
<div class="container">
<div class="header"><h1>Perfume Inventory</h1><p>Full catalog report</p></div>
<div class="content">{sections}</div>
<div class="footer"><p>Generated on <span class="date">{date}</span></p><p>Perfumario inventory management</p></div>
</div>
</body>
</html>
"#,
            date = escape_html(&self.generated_label()),
        )
    }
}

fn markdown_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

const REPORT_CSS: &str = "\
*{margin:0;padding:0;box-sizing:border-box}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;line-height:1.6;color:#333;background:#f8fafc;padding:20px}\
.container{max-width:1200px;margin:0 auto;background:white;border-radius:12px;overflow:hidden}\
.header{background:linear-gradient(135deg,#7c3aed 0%,#5b21b6 100%);color:white;padding:30px;text-align:center}\
.header h1{font-size:2.5rem;font-weight:700}\
.content{padding:30px}\
.gender-section{margin-bottom:40px;break-inside:avoid}\
.gender-title{font-size:1.5rem;font-weight:600;color:#1e293b;margin-bottom:20px;padding-bottom:10px;border-bottom:3px solid #7c3aed;display:flex;align-items:center;gap:10px}\
.gender-icon{width:24px;height:24px;background:#7c3aed;border-radius:50%;display:flex;align-items:center;justify-content:center;color:white;font-size:12px;font-weight:bold}\
.perfumes-table{width:100%;border-collapse:collapse}\
.perfumes-table thead{display:table-header-group}\
.perfumes-table th{background:#f8fafc;color:#475569;font-weight:600;padding:15px 12px;text-align:left;border-bottom:2px solid #e2e8f0;text-transform:uppercase}\
.perfumes-table td{padding:15px 12px;border-bottom:1px solid #f1f5f9}\
.perfumes-table tbody tr{break-inside:avoid}\
.perfume-name{font-weight:600;color:#1e293b}\
.brand-name{color:#64748b}\
.status-chip{display:inline-block;padding:6px 12px;border-radius:20px;font-size:0.8rem;font-weight:600;text-transform:uppercase}\
.status-available{background:#dcfce7;color:#166534}\
.status-out{background:#fee2e2;color:#991b1b}\
.footer{background:#f8fafc;padding:20px 30px;text-align:center;color:#64748b;border-top:1px solid #e2e8f0}\
.footer .date{font-weight:600;color:#7c3aed}\
@page{size:A4;margin:1cm}\
@media print{body{background:white;padding:0}}";

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("perfumario-inventory-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Gender;

    fn perfume(id: &str, name: &str, gender: Gender, brand_id: &str, stock: u32) -> Perfume {
        Perfume {
            id: id.to_string(),
            name: name.to_string(),
            gender,
            brand_id: brand_id.to_string(),
            stock,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample_report() -> InventoryReport {
        let perfumes = vec![
            perfume("1", "Sauvage", Gender::Male, "b1", 3),
            perfume("2", "J'adore", Gender::Female, "b1", 0),
            perfume("3", "Aventus", Gender::Male, "b9", 1),
            perfume("4", "Santal <33>", Gender::Unisex, "b2", 2),
        ];
        let brands = HashMap::from([
            ("b1".to_string(), "Dior".to_string()),
            ("b2".to_string(), "Le Labo & Co".to_string()),
        ]);
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        InventoryReport::build(&perfumes, &brands, generated_at)
    }

    #[test]
    fn groups_sorted_by_label_and_rows_by_name() {
        let report = sample_report();
        let labels: Vec<&str> = report.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Female", "Male", "Unisex"]);

        let male: Vec<&str> = report.groups[1]
            .perfumes
            .iter()
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(male, vec!["Aventus", "Sauvage"]);
        assert_eq!(report.groups[1].perfumes[0].brand, MISSING_BRAND_LABEL);
        assert_eq!(report.groups[0].perfumes[0].status, "Out of stock");
        assert_eq!(report.total, 4);
    }

    #[test]
    fn html_escapes_interpolated_text() {
        let html = sample_report().render_html();
        assert!(html.contains("Santal &lt;33&gt;"));
        assert!(html.contains("Le Labo &amp; Co"));
        assert!(html.contains("J&#39;adore"));
        assert!(html.contains(r#"<span class="status-chip status-out">Out of stock</span>"#));
        assert!(html.contains("Male (2 perfumes)"));
        assert!(html.contains("March 5, 2024"));
        assert!(html.contains("size:A4"));
    }

    #[test]
    fn markdown_lists_groups() {
        let markdown = sample_report().render_markdown();
        assert!(markdown.contains("## Unisex (1 perfumes)"));
        assert!(markdown.contains("| Sauvage | Dior | Available |"));
    }

    #[test]
    fn json_contains_rows() {
        let json = sample_report().render(ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["groups"][0]["label"], "Female");
        assert_eq!(value["groups"][0]["perfumes"][0]["stock"], 0);
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Html, 123),
            "perfumario-inventory-123.html"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "perfumario-inventory-456.md"
        );
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
    }
}
