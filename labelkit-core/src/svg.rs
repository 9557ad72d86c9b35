//! Markup backend: emits scenes and the label sheet as SVG documents.

use std::fmt::Write;

use crate::document::{
    block_height, DocumentMeta, RenderedLabel, BLOCK_GAP, DOC_TITLE, HEADER_HEIGHT, PAGE_MARGIN,
    PAGE_WIDTH, PANEL_LINE_HEIGHT, PANEL_OFFSET_X, TRAILER_HEIGHT,
};
use crate::layout::TextAnchor;
use crate::scene::{Primitive, Scene};

const OUTLINE_WIDTH: f64 = 1.0;

/// Escape the XML-significant characters before embedding text in markup.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn anchor_str(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn push_primitive(out: &mut String, p: &Primitive) {
    match p {
        Primitive::Frame {
            width,
            height,
            corner_radius,
            fill,
            stroke,
        } => {
            let stroke_attr = match stroke {
                Some(color) => format!(" stroke=\"{color}\" stroke-width=\"{OUTLINE_WIDTH}\""),
                None => String::new(),
            };
            let _ = writeln!(
                out,
                "<rect x=\"0\" y=\"0\" width=\"{width:.2}\" height=\"{height:.2}\" rx=\"{corner_radius:.2}\" fill=\"{fill}\"{stroke_attr}/>"
            );
        }
        Primitive::Cutout {
            cx,
            cy,
            radius,
            fill,
            stroke,
        } => {
            let _ = writeln!(
                out,
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{radius:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{OUTLINE_WIDTH}\"/>"
            );
        }
        Primitive::Notch { x, y, size, fill } => {
            let _ = writeln!(
                out,
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{size:.2}\" height=\"{size:.2}\" fill=\"{fill}\"/>"
            );
        }
        Primitive::Text {
            x,
            y,
            content,
            font_size,
            family,
            anchor,
            fill,
        } => {
            let _ = writeln!(
                out,
                "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"{}\" font-family=\"{}\" font-size=\"{font_size:.2}\" fill=\"{fill}\">{}</text>",
                anchor_str(*anchor),
                xml_escape(family),
                xml_escape(content)
            );
        }
    }
}

/// One label as a standalone SVG document.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0:.2}\" height=\"{1:.2}\" viewBox=\"0 0 {0:.2} {1:.2}\">",
        scene.width, scene.height
    );
    for p in &scene.primitives {
        push_primitive(&mut out, p);
    }
    out.push_str("</svg>\n");
    out
}

/// One label block: the scene group plus its info panel column. Scene groups
/// carry a deterministic per-document id.
fn push_block(out: &mut String, label: &RenderedLabel, index: usize, x: f64, y: f64) {
    let _ = writeln!(
        out,
        "<g id=\"label-{}\" transform=\"translate({x:.2},{y:.2})\">",
        index + 1
    );
    for p in &label.scene.primitives {
        push_primitive(out, p);
    }
    out.push_str("</g>\n");
    let panel_x = x + PANEL_OFFSET_X;
    for (i, line) in label.summary.panel_lines().iter().enumerate() {
        let size = if i == 0 { 14.0 } else { 12.0 };
        let fill = if i == 0 { "#111" } else { "#555" };
        let _ = writeln!(
            out,
            "<text x=\"{panel_x:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"{size}\" fill=\"{fill}\">{}</text>",
            y + (i as f64 + 1.0) * PANEL_LINE_HEIGHT,
            xml_escape(line)
        );
    }
}

fn push_header(out: &mut String, meta: &DocumentMeta) {
    let left = PAGE_MARGIN;
    let _ = writeln!(
        out,
        "<text x=\"{left:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"20\" fill=\"#111\">{}</text>",
        PAGE_MARGIN + 20.0,
        DOC_TITLE
    );
    let mut lines = vec![
        format!("Reference ID: {}", meta.ref_id),
        format!("Submitted: {}", meta.submitted_on),
    ];
    if let Some(contact) = &meta.contact {
        lines.push(contact.clone());
    }
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(
            out,
            "<text x=\"{left:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\" fill=\"#555\">{}</text>",
            PAGE_MARGIN + 40.0 + i as f64 * 16.0,
            xml_escape(line)
        );
    }
}

/// The complete sheet: header, every label block in order, and the trailing
/// total-units line, as one continuous SVG document.
pub fn sheet_svg(meta: &DocumentMeta, labels: &[RenderedLabel]) -> String {
    let blocks_height: f64 = labels
        .iter()
        .map(|l| block_height(&l.scene) + BLOCK_GAP)
        .sum();
    let total_height = PAGE_MARGIN + HEADER_HEIGHT + blocks_height + TRAILER_HEIGHT + PAGE_MARGIN;

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0:.2}\" height=\"{1:.2}\" viewBox=\"0 0 {0:.2} {1:.2}\">",
        PAGE_WIDTH, total_height
    );
    out.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    push_header(&mut out, meta);

    let mut cursor = PAGE_MARGIN + HEADER_HEIGHT;
    for (index, label) in labels.iter().enumerate() {
        push_block(&mut out, label, index, PAGE_MARGIN, cursor);
        cursor += block_height(&label.scene) + BLOCK_GAP;
    }
    let _ = writeln!(
        out,
        "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"14\" fill=\"#111\">Total units: {}</text>",
        PAGE_MARGIN,
        cursor + PANEL_LINE_HEIGHT,
        meta.total_units
    );
    out.push_str("</svg>\n");
    out
}
