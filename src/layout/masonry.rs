//! Masonry placement: greedy shortest-column packing at fixed column width

use std::cmp::Ordering;

use crate::io::configuration::{
    MASONRY_COLUMNS_DESKTOP, MASONRY_COLUMNS_MOBILE, MASONRY_PADDING_DESKTOP,
    MASONRY_PADDING_MOBILE,
};
use crate::layout::{DeviceClass, ImageDims, PlacedRect};

/// Place every image into the currently shortest column
///
/// Column heights start at the top padding. Each image takes the full column
/// width, scales its height by its aspect ratio, and advances the chosen
/// column by the placed height plus padding. Greedy and O(n * cols), not
/// globally optimal, but deterministic for a given input order.
pub fn place(dims: &[ImageDims], canvas_w: f32, device: DeviceClass) -> Vec<PlacedRect> {
    let (columns, padding) = match device {
        DeviceClass::Desktop => (MASONRY_COLUMNS_DESKTOP, MASONRY_PADDING_DESKTOP),
        DeviceClass::Mobile => (MASONRY_COLUMNS_MOBILE, MASONRY_PADDING_MOBILE),
    };

    let column_width = (canvas_w - padding * (columns as f32 + 1.0)) / columns as f32;
    let mut column_heights = vec![padding; columns];

    let mut placed = Vec::with_capacity(dims.len());
    for (index, entry) in dims.iter().enumerate() {
        let column = shortest_column(&column_heights);
        let height = column_width * entry.aspect();
        let y = column_heights.get(column).copied().unwrap_or(padding);

        placed.push(PlacedRect {
            x: padding + column as f32 * (column_width + padding),
            y,
            width: column_width,
            height,
            rotation_deg: 0.0,
            image_index: index,
        });

        if let Some(running) = column_heights.get_mut(column) {
            *running += height + padding;
        }
    }
    placed
}

// Ties resolve to the lowest column index via first-minimum semantics
fn shortest_column(heights: &[f32]) -> usize {
    heights
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map_or(0, |(index, _)| index)
}
