//! Print-document backend: draws the paginated label pages into a PDF.
//!
//! Scenes are drawn directly with content-stream operators; text uses the
//! standard base fonts, so the document needs no embedded resources. The SVG
//! sheet remains the typographically exact artifact; this document is the
//! print-ready proof.

use labelkit_core::document::{
    DocumentMeta, Page, DOC_TITLE, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH, PANEL_LINE_HEIGHT,
    PANEL_OFFSET_X,
};
use labelkit_core::layout::TextAnchor;
use labelkit_core::order::OrderArtifacts;
use labelkit_core::scene::{Primitive, Scene};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const FONT_SANS: Name = Name(b"F1");
const FONT_SERIF: Name = Name(b"F2");
const FONT_MONO: Name = Name(b"F3");

/// Cubic Bezier circle-arc constant.
const ARC_K: f64 = 0.552_284_749_831;
const OUTLINE_WIDTH: f32 = 1.0;

const INK_DARK: (f32, f32, f32) = (0.07, 0.07, 0.07);
const INK_GRAY: (f32, f32, f32) = (0.33, 0.33, 0.33);
/// Average glyph advance as a fraction of the font size, for anchoring.
const GLYPH_ADVANCE: f64 = 0.5;

/// Build the complete multi-page PDF for an order.
pub fn document(artifacts: &OrderArtifacts) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let sans_id = alloc.bump();
    let serif_id = alloc.bump();
    let mono_id = alloc.bump();
    let page_refs: Vec<(Ref, Ref)> = artifacts
        .pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    {
        let mut pages = pdf.pages(page_tree_id);
        pages.kids(page_refs.iter().map(|(page_id, _)| *page_id));
        pages.count(page_refs.len() as i32);
    }
    pdf.type1_font(sans_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(serif_id).base_font(Name(b"Times-Roman"));
    pdf.type1_font(mono_id).base_font(Name(b"Courier"));

    for (i, (page, (page_id, content_id))) in
        artifacts.pages.iter().zip(&page_refs).enumerate()
    {
        let content = page_content(artifacts, page, i == 0);
        {
            let mut p = pdf.page(*page_id);
            p.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH as f32, PAGE_HEIGHT as f32));
            p.parent(page_tree_id);
            p.contents(*content_id);
            let mut resources = p.resources();
            let mut fonts = resources.fonts();
            fonts.pair(FONT_SANS, sans_id);
            fonts.pair(FONT_SERIF, serif_id);
            fonts.pair(FONT_MONO, mono_id);
        }
        pdf.stream(*content_id, &content.finish());
    }
    pdf.finish()
}

fn page_content(artifacts: &OrderArtifacts, page: &Page, first_page: bool) -> Content {
    let mut c = Content::new();
    if first_page {
        draw_header(&mut c, &artifacts.meta);
    }
    for block in &page.blocks {
        let label = &artifacts.labels[block.index];
        draw_scene(&mut c, &label.scene, block.x, block.y);
        let panel_x = block.x + PANEL_OFFSET_X;
        for (i, line) in label.summary.panel_lines().iter().enumerate() {
            let (size, ink) = if i == 0 { (14.0, INK_DARK) } else { (12.0, INK_GRAY) };
            show_text(
                &mut c,
                FONT_SANS,
                size,
                panel_x,
                block.y + (i as f64 + 1.0) * PANEL_LINE_HEIGHT,
                line,
                TextAnchor::Start,
                ink,
            );
        }
    }
    if let Some(trailer_y) = page.trailer_y {
        show_text(
            &mut c,
            FONT_SANS,
            14.0,
            PAGE_MARGIN,
            trailer_y + PANEL_LINE_HEIGHT,
            &format!("Total units: {}", artifacts.meta.total_units),
            TextAnchor::Start,
            INK_DARK,
        );
    }
    c
}

fn draw_header(c: &mut Content, meta: &DocumentMeta) {
    show_text(
        c,
        FONT_SANS,
        20.0,
        PAGE_MARGIN,
        PAGE_MARGIN + 20.0,
        DOC_TITLE,
        TextAnchor::Start,
        INK_DARK,
    );
    let mut lines = vec![
        format!("Reference ID: {}", meta.ref_id),
        format!("Submitted: {}", meta.submitted_on),
    ];
    if let Some(contact) = &meta.contact {
        lines.push(contact.clone());
    }
    for (i, line) in lines.iter().enumerate() {
        show_text(
            c,
            FONT_SANS,
            12.0,
            PAGE_MARGIN,
            PAGE_MARGIN + 40.0 + i as f64 * 16.0,
            line,
            TextAnchor::Start,
            INK_GRAY,
        );
    }
}

/// Draw one scene with its top-left corner at (dx, dy) in design space.
fn draw_scene(c: &mut Content, scene: &Scene, dx: f64, dy: f64) {
    for p in &scene.primitives {
        match p {
            Primitive::Frame {
                width,
                height,
                corner_radius,
                fill,
                stroke,
            } => {
                set_fill(c, fill);
                rounded_rect(c, dx, dy, *width, *height, *corner_radius);
                match stroke {
                    Some(color) => {
                        set_stroke(c, color);
                        c.fill_nonzero_and_stroke();
                    }
                    None => {
                        c.fill_nonzero();
                    }
                }
            }
            Primitive::Cutout {
                cx,
                cy,
                radius,
                fill,
                stroke,
            } => {
                set_fill(c, fill);
                set_stroke(c, stroke);
                circle(c, dx + cx, dy + cy, *radius);
                c.fill_nonzero_and_stroke();
            }
            Primitive::Notch { x, y, size, fill } => {
                set_fill(c, fill);
                c.rect(
                    (dx + x) as f32,
                    (PAGE_HEIGHT - (dy + y) - size) as f32,
                    *size as f32,
                    *size as f32,
                );
                c.fill_nonzero();
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
                set_fill(c, fill);
                text_raw(c, font_for(family), *font_size, dx + x, dy + y, content, *anchor);
            }
        }
    }
}

fn font_for(family: &str) -> Name<'static> {
    if family.contains("monospace") {
        FONT_MONO
    } else if family.contains("serif") && !family.contains("sans-serif") {
        FONT_SERIF
    } else {
        FONT_SANS
    }
}

#[allow(clippy::too_many_arguments)]
fn show_text(
    c: &mut Content,
    font: Name,
    size: f64,
    x: f64,
    y: f64,
    text: &str,
    anchor: TextAnchor,
    ink: (f32, f32, f32),
) {
    c.set_fill_rgb(ink.0, ink.1, ink.2);
    text_raw(c, font, size, x, y, text, anchor);
}

/// Emit a text run with the fill color already set. Anchoring uses an
/// average-advance width estimate, matching how the markup backend's
/// text-anchor behaves closely enough for a proof document.
fn text_raw(c: &mut Content, font: Name, size: f64, x: f64, y: f64, text: &str, anchor: TextAnchor) {
    let width = GLYPH_ADVANCE * size * text.chars().count() as f64;
    let x = match anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - width / 2.0,
        TextAnchor::End => x - width,
    };
    let bytes = latin1_bytes(text);
    c.begin_text();
    c.set_font(font, size as f32);
    c.next_line(x as f32, (PAGE_HEIGHT - y) as f32);
    c.show(Str(&bytes));
    c.end_text();
}

/// Lossy Latin-1 projection for the base-font encoding.
fn latin1_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| {
            let code = ch as u32;
            if code <= 0xff { code as u8 } else { b'?' }
        })
        .collect()
}

fn set_fill(c: &mut Content, hex: &str) {
    let (r, g, b) = rgb(hex);
    c.set_fill_rgb(r, g, b);
}

fn set_stroke(c: &mut Content, hex: &str) {
    let (r, g, b) = rgb(hex);
    c.set_stroke_rgb(r, g, b);
    c.set_line_width(OUTLINE_WIDTH);
}

fn rgb(hex: &str) -> (f32, f32, f32) {
    let h = hex.trim_start_matches('#');
    if h.len() < 6 {
        return (0.0, 0.0, 0.0);
    }
    let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).unwrap_or(0) as f32 / 255.0;
    (channel(0), channel(2), channel(4))
}

/// Rectangle with an optional corner radius, given by its design-space
/// top-left corner.
fn rounded_rect(c: &mut Content, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let x0 = x as f32;
    let y0 = (PAGE_HEIGHT - y - h) as f32;
    if r <= 0.0 {
        c.rect(x0, y0, w as f32, h as f32);
        return;
    }
    let (x1, y1) = ((x + w) as f32, (PAGE_HEIGHT - y) as f32);
    let (r, k) = (r as f32, (ARC_K * r) as f32);
    c.move_to(x0 + r, y0);
    c.line_to(x1 - r, y0);
    c.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
    c.line_to(x1, y1 - r);
    c.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    c.line_to(x0 + r, y1);
    c.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
    c.line_to(x0, y0 + r);
    c.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
    c.close_path();
}

fn circle(c: &mut Content, cx: f64, cy: f64, radius: f64) {
    let (cx, cy) = (cx as f32, (PAGE_HEIGHT - cy) as f32);
    let r = radius as f32;
    let k = (ARC_K * radius) as f32;
    c.move_to(cx + r, cy);
    c.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    c.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    c.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    c.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    c.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelkit_core::model::Order;
    use labelkit_core::order::process;

    fn artifacts() -> OrderArtifacts {
        let order: Order = serde_json::from_str(
            r#"{"refId": "R-1", "labels": [
                {"var1": "ACME", "corners": "rounded", "notch": "all"},
                {"var1": "B", "color": "white-black"},
                {"var1": "C"}, {"var1": "D"}
            ]}"#,
        )
        .unwrap();
        process(&order, "2026-08-06T09:30:00Z", "August 6, 2026").unwrap()
    }

    #[test]
    fn document_is_a_multi_page_pdf() {
        let a = artifacts();
        assert!(a.pages.len() > 1);
        let bytes = document(&a);
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|w| w == b"/Kids"));
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(rgb("#ffffff"), (1.0, 1.0, 1.0));
        assert_eq!(rgb("#000000"), (0.0, 0.0, 0.0));
        let (r, g, b) = rgb("#2e7d32");
        assert!(r > 0.17 && r < 0.19);
        assert!(g > 0.48 && g < 0.50);
        assert!(b > 0.19 && b < 0.20);
        assert_eq!(rgb("bogus"), (0.0, 0.0, 0.0));
    }

    #[test]
    fn base_fonts_cover_the_families() {
        assert_eq!(font_for("Calibri, sans-serif").0, b"F1");
        assert_eq!(font_for("Georgia, serif").0, b"F2");
        assert_eq!(font_for("Courier New, monospace").0, b"F3");
    }
}
