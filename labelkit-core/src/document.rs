//! Print document layout: places rendered labels onto letter pages.

use crate::scene::Scene;
use crate::summary::LabelSummary;

/// Letter page, in design units (points).
pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;
pub const PAGE_MARGIN: f64 = 50.0;
/// Vertical space available to label blocks on one page.
pub const CONTENT_HEIGHT: f64 = 720.0;

pub const DOC_TITLE: &str = "Saved Labels Summary";

/// First-page header block (title, reference, date, contact).
pub const HEADER_HEIGHT: f64 = 96.0;
/// Gap between consecutive label blocks.
pub const BLOCK_GAP: f64 = 24.0;
/// Info panel column offset from the content left edge.
pub const PANEL_OFFSET_X: f64 = 300.0;
pub const PANEL_LINE_HEIGHT: f64 = 16.0;
/// Space reserved for the trailing total-units line.
pub const TRAILER_HEIGHT: f64 = 24.0;

/// One label's scene plus its summary metadata, in label-list order.
#[derive(Clone, Debug)]
pub struct RenderedLabel {
    pub scene: Scene,
    pub summary: LabelSummary,
}

/// A label block placed on a page; `index` points into the rendered list.
#[derive(Clone, Copy, Debug)]
pub struct PlacedLabel {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Page {
    pub blocks: Vec<PlacedLabel>,
    /// y of the total-units trailer when it lands on this page.
    pub trailer_y: Option<f64>,
}

/// Document header fields shared by the markup and print backends.
#[derive(Clone, Debug)]
pub struct DocumentMeta {
    pub ref_id: String,
    pub submitted_on: String,
    pub contact: Option<String>,
    pub total_units: u32,
}

/// Height of one label block: the scene and its info panel side by side.
pub fn block_height(scene: &Scene) -> f64 {
    scene.height.max(7.0 * PANEL_LINE_HEIGHT)
}

/// Assign each label to a page, starting a new page whenever the next block
/// would overflow the remaining vertical space. The first page also carries
/// the document header; the trailer goes after the last block.
pub fn paginate(labels: &[RenderedLabel]) -> Vec<Page> {
    let bottom = PAGE_MARGIN + CONTENT_HEIGHT;
    let mut pages = vec![Page::default()];
    let mut cursor = PAGE_MARGIN + HEADER_HEIGHT;
    for (index, label) in labels.iter().enumerate() {
        let height = block_height(&label.scene);
        let page = pages.last().unwrap();
        if cursor + height > bottom && !page.blocks.is_empty() {
            pages.push(Page::default());
            cursor = PAGE_MARGIN;
        }
        pages.last_mut().unwrap().blocks.push(PlacedLabel {
            index,
            x: PAGE_MARGIN,
            y: cursor,
        });
        cursor += height + BLOCK_GAP;
    }
    if cursor + TRAILER_HEIGHT > bottom {
        pages.push(Page::default());
        cursor = PAGE_MARGIN;
    }
    pages.last_mut().unwrap().trailer_y = Some(cursor);
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve;
    use crate::model::{color_preset, font_preset, LabelSpec};
    use crate::scene::render;
    use crate::summary::LabelSummary;

    fn rendered(count: usize) -> Vec<RenderedLabel> {
        let spec = LabelSpec::default();
        let scene = render(
            &resolve(&spec),
            &[],
            color_preset(None),
            font_preset(None),
        );
        (0..count)
            .map(|_| RenderedLabel {
                scene: scene.clone(),
                summary: LabelSummary::from_spec(&spec),
            })
            .collect()
    }

    #[test]
    fn single_label_fits_one_page() {
        let pages = paginate(&rendered(1));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].blocks.len(), 1);
        assert!(pages[0].trailer_y.is_some());
    }

    #[test]
    fn overflow_starts_a_new_page() {
        // Standard scenes are 273 high + gap; two fit under the first-page
        // header, the third spills over.
        let pages = paginate(&rendered(3));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].blocks.len(), 2);
        assert_eq!(pages[1].blocks.len(), 1);
        assert!(pages[0].trailer_y.is_none());
        assert!(pages[1].trailer_y.is_some());
        // Later pages start at the top margin.
        assert_eq!(pages[1].blocks[0].y, PAGE_MARGIN);
    }

    #[test]
    fn blocks_keep_label_order() {
        let pages = paginate(&rendered(5));
        let order: Vec<usize> = pages
            .iter()
            .flat_map(|p| p.blocks.iter().map(|b| b.index))
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
