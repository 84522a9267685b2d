use common::config::{ReportConfig, ReportFormat, ReportStyle};
use serde::Serialize;
use std::fmt::Write;

use crate::{
    error::RfmError,
    model::{ModelId, RankedRecord},
    pipeline::PipelineOutcome,
    segments::{CustomerSegment, SegmentCount, SegmentSummary},
};

#[derive(Debug, Serialize)]
struct CategoryPreview<'a> {
    category: &'a str,
    scores: &'a [f64],
}

#[derive(Debug, Serialize)]
struct StoreRow<'a> {
    customer_id: ModelId,
    recency: i64,
    frequency: i64,
    monetary: f64,
    rfm_score: u32,
    segment: CustomerSegment,
    top_recommendations: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(tag = "style", rename_all = "lowercase")]
enum ReportDocument<'a> {
    Preview {
        customers: &'a [RankedRecord],
        adjusted_recommendations: Vec<CategoryPreview<'a>>,
    },
    Store {
        customers: Vec<StoreRow<'a>>,
        segment_counts: &'a [SegmentCount],
        segment_analysis: &'a [SegmentSummary],
    },
}

/// Renders the outcome the way `config` asks for; the caller prints it.
pub fn render(outcome: &PipelineOutcome, config: &ReportConfig) -> Result<String, RfmError> {
    match config.format {
        ReportFormat::Text => match config.style {
            ReportStyle::Preview => render_preview_text(outcome, config),
            ReportStyle::Store => render_store_text(outcome, config),
        },
        ReportFormat::Json => {
            let document = build_document(outcome, config);
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

fn head<T>(items: &[T], rows: usize) -> &[T] {
    &items[..rows.min(items.len())]
}

fn build_document<'a>(outcome: &'a PipelineOutcome, config: &ReportConfig) -> ReportDocument<'a> {
    let customers = head(&outcome.table.rows, config.head_rows);
    match config.style {
        ReportStyle::Preview => ReportDocument::Preview {
            customers,
            adjusted_recommendations: outcome
                .adjusted
                .iter()
                .map(|c| CategoryPreview {
                    category: &c.category,
                    scores: head(&c.scores, config.preview_recommendations),
                })
                .collect(),
        },
        ReportStyle::Store => ReportDocument::Store {
            customers: customers
                .iter()
                .enumerate()
                .map(|(idx, row)| StoreRow {
                    customer_id: row.customer.customer_id,
                    recency: row.customer.recency,
                    frequency: row.customer.frequency,
                    monetary: row.customer.monetary,
                    rfm_score: row.rfm_score(),
                    segment: outcome.segments[idx],
                    top_recommendations: outcome
                        .top_recommendations
                        .get(idx)
                        .map(Vec::as_slice)
                        .unwrap_or(&[]),
                })
                .collect(),
            segment_counts: &outcome.segment_counts,
            segment_analysis: &outcome.segment_analysis,
        },
    }
}

/// Right-aligned columns sized to their widest cell.
fn write_table(out: &mut String, headers: &[&str], rows: &[Vec<String>]) -> std::fmt::Result {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    writeln!(out, "{}", line(headers.to_vec()))?;
    for row in rows {
        writeln!(out, "{}", line(row.iter().map(String::as_str).collect()))?;
    }
    Ok(())
}

fn format_scores(scores: &[f64]) -> String {
    let values: Vec<String> = scores.iter().map(|s| format!("{s:.8}")).collect();
    format!("[{}]", values.join(" "))
}

fn render_preview_text(outcome: &PipelineOutcome, config: &ReportConfig) -> Result<String, RfmError> {
    let mut out = String::new();

    let rows: Vec<Vec<String>> = head(&outcome.table.rows, config.head_rows)
        .iter()
        .map(|row| {
            vec![
                row.customer.customer_id.to_string(),
                row.customer.recency.to_string(),
                row.customer.frequency.to_string(),
                row.customer.monetary.to_string(),
                row.ranks.recency.to_string(),
                row.ranks.frequency.to_string(),
                row.ranks.monetary.to_string(),
                row.rfm_score().to_string(),
            ]
        })
        .collect();
    write_table(
        &mut out,
        &[
            "CustomerID",
            "Recency",
            "Frequency",
            "Monetary",
            "R_rank",
            "F_rank",
            "M_rank",
            "RFM_Score",
        ],
        &rows,
    )?;

    writeln!(
        out,
        "\nAdjusted Recommendations (first {}):",
        config.preview_recommendations
    )?;
    match outcome.adjusted.as_slice() {
        [single] => writeln!(
            out,
            "{}",
            format_scores(head(&single.scores, config.preview_recommendations))
        )?,
        many => {
            for category in many {
                writeln!(
                    out,
                    "{}: {}",
                    category.category,
                    format_scores(head(&category.scores, config.preview_recommendations))
                )?;
            }
        }
    }

    Ok(out)
}

fn render_store_text(outcome: &PipelineOutcome, config: &ReportConfig) -> Result<String, RfmError> {
    let mut out = String::new();

    writeln!(out, "Sample Customer Data:")?;
    let rows: Vec<Vec<String>> = head(&outcome.table.rows, config.head_rows)
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let top = outcome
                .top_recommendations
                .get(idx)
                .map_or_else(String::new, |names| names.join(", "));
            vec![
                row.customer.customer_id.to_string(),
                row.customer.recency.to_string(),
                row.customer.frequency.to_string(),
                row.customer.monetary.to_string(),
                row.rfm_score().to_string(),
                format!("[{top}]"),
            ]
        })
        .collect();
    write_table(
        &mut out,
        &[
            "CustomerID",
            "Recency",
            "Frequency",
            "Monetary",
            "RFM_Score",
            "TopRecommendations",
        ],
        &rows,
    )?;

    writeln!(out, "\nCustomer Segments:")?;
    let counts: Vec<Vec<String>> = outcome
        .segment_counts
        .iter()
        .map(|c| vec![c.segment.to_string(), c.customers.to_string()])
        .collect();
    write_table(&mut out, &["CustomerSegment", "count"], &counts)?;

    writeln!(out, "\nSegment Analysis:")?;
    let analysis: Vec<Vec<String>> = outcome
        .segment_analysis
        .iter()
        .map(|s| {
            vec![
                s.segment.to_string(),
                format!("{:.2}", s.mean_recency),
                format!("{:.2}", s.mean_frequency),
                format!("{:.2}", s.mean_monetary),
            ]
        })
        .collect();
    write_table(
        &mut out,
        &["CustomerSegment", "Recency", "Frequency", "Monetary"],
        &analysis,
    )?;

    Ok(out)
}
