//! Order validation and the single-pass artifact pipeline.

use crate::document::{paginate, DocumentMeta, Page, RenderedLabel};
use crate::error::OrderError;
use crate::export::{expand, to_csv, ExportRow};
use crate::geometry::resolve;
use crate::layout::layout;
use crate::model::{color_preset, font_preset, LabelSpec, Order};
use crate::scene::render;
use crate::summary::{ArtifactLinks, DeliverySummary, LabelSummary};
use crate::svg::sheet_svg;

/// Everything the engine produces for one order. Computed once, replayable:
/// downstream delivery can retry without touching the engine again.
#[derive(Clone, Debug)]
pub struct OrderArtifacts {
    pub ref_id: String,
    pub rows: Vec<ExportRow>,
    pub total_units: u32,
    pub labels: Vec<RenderedLabel>,
    pub meta: DocumentMeta,
    pub pages: Vec<Page>,
    pub csv: String,
    pub sheet: String,
    pub summary: DeliverySummary,
}

/// Run one label through the geometry/layout/render pipeline.
pub fn render_label(spec: &LabelSpec) -> RenderedLabel {
    let geometry = resolve(spec);
    let runs = layout(spec, &geometry);
    RenderedLabel {
        scene: render(
            &geometry,
            &runs,
            color_preset(spec.color.as_deref()),
            font_preset(spec.font.as_deref()),
        ),
        summary: LabelSummary::from_spec(spec),
    }
}

/// Validate and process one order. `timestamp` and `submitted_on` are the
/// machine and human forms of the submission time, supplied by the caller so
/// the engine stays a pure function of its inputs.
pub fn process(
    order: &Order,
    timestamp: &str,
    submitted_on: &str,
) -> Result<OrderArtifacts, OrderError> {
    let ref_id = order
        .ref_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(OrderError::MissingRefId)?
        .to_string();
    let specs = order
        .labels
        .as_deref()
        .filter(|l| !l.is_empty())
        .ok_or(OrderError::NoLabels)?;

    let (rows, total_units) = expand(specs);
    let labels: Vec<RenderedLabel> = specs.iter().map(render_label).collect();

    let meta = DocumentMeta {
        ref_id: ref_id.clone(),
        submitted_on: submitted_on.to_string(),
        contact: contact_line(order),
        total_units,
    };
    let csv = to_csv(&ref_id, &rows);
    let sheet = sheet_svg(&meta, &labels);
    let pages = paginate(&labels);

    let stem = artifact_stem(&ref_id);
    let summary = DeliverySummary {
        ref_id: ref_id.clone(),
        contact_name: order.contact_name.clone(),
        contact_email: order.contact_email.clone(),
        timestamp: timestamp.to_string(),
        submitted_on: submitted_on.to_string(),
        total_units,
        label_count: specs.len(),
        labels: labels.iter().map(|l| l.summary.clone()).collect(),
        artifacts: ArtifactLinks {
            export: format!("{stem}-labels.csv"),
            sheet: format!("{stem}-labels.svg"),
            document: format!("{stem}-labels.pdf"),
        },
    };

    Ok(OrderArtifacts {
        ref_id,
        rows,
        total_units,
        labels,
        meta,
        pages,
        csv,
        sheet,
        summary,
    })
}

fn contact_line(order: &Order) -> Option<String> {
    let name = order.contact_name.as_deref().filter(|s| !s.is_empty());
    let email = order.contact_email.as_deref().filter(|s| !s.is_empty());
    match (name, email) {
        (Some(n), Some(e)) => Some(format!("{n} <{e}>")),
        (Some(n), None) => Some(n.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    }
}

/// Reference ids become file name stems; anything outside `[A-Za-z0-9._-]`
/// is replaced.
pub fn artifact_stem(ref_id: &str) -> String {
    ref_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}
