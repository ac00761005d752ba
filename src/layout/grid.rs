//! Grid placement: banded row/column tables, per-cell jitter, draw-order sort

use std::cmp::Ordering;

use rand::{Rng, rngs::StdRng};

use crate::io::configuration::{
    GRID_JITTER_X_FRACTION, GRID_JITTER_Y_FRACTION, GRID_MAX_ROTATION_DEG, GRID_PADDING_DESKTOP,
    GRID_PADDING_MOBILE, GRID_TOP_MARGIN_FRACTION_DESKTOP, GRID_TOP_MARGIN_FRACTION_MOBILE,
};
use crate::layout::{DeviceClass, ImageDims, PlacedRect};

/// Ordered (max count, rows, cols) bands for desktop canvases
const DESKTOP_BANDS: [(usize, usize, usize); 5] =
    [(3, 1, 3), (6, 2, 3), (8, 2, 4), (9, 3, 3), (12, 3, 4)];

/// Ordered (max count, rows, cols) bands for mobile canvases
const MOBILE_BANDS: [(usize, usize, usize); 4] = [(2, 2, 1), (4, 2, 2), (6, 3, 2), (8, 4, 2)];

/// Grid dimensions for an image count, as (rows, cols)
///
/// Counts beyond the banded tables fall back to a near-square grid on
/// desktop and a fixed two-column grid on mobile.
pub fn grid_dims(count: usize, device: DeviceClass) -> (usize, usize) {
    let bands: &[(usize, usize, usize)] = match device {
        DeviceClass::Desktop => &DESKTOP_BANDS,
        DeviceClass::Mobile => &MOBILE_BANDS,
    };

    for &(max_count, rows, cols) in bands {
        if count <= max_count {
            return (rows, cols);
        }
    }

    match device {
        DeviceClass::Desktop => {
            let cols = (count as f64).sqrt().ceil() as usize;
            (count.div_ceil(cols), cols)
        }
        DeviceClass::Mobile => (count.div_ceil(2), 2),
    }
}

/// Place every image into a jittered grid cell
///
/// Each image lands at `(index / cols, index % cols)` in input order, with a
/// small random offset and rotation per cell. The result is re-sorted by y
/// ascending so lower rows draw first and jittered overlaps layer correctly.
pub fn place(
    dims: &[ImageDims],
    canvas_w: f32,
    canvas_h: f32,
    device: DeviceClass,
    rng: &mut StdRng,
) -> Vec<PlacedRect> {
    let (rows, cols) = grid_dims(dims.len(), device);
    let (padding, top_margin_fraction) = match device {
        DeviceClass::Desktop => (GRID_PADDING_DESKTOP, GRID_TOP_MARGIN_FRACTION_DESKTOP),
        DeviceClass::Mobile => (GRID_PADDING_MOBILE, GRID_TOP_MARGIN_FRACTION_MOBILE),
    };

    let top_margin = canvas_h * top_margin_fraction;
    let cell_w = (canvas_w - padding * (cols as f32 + 1.0)) / cols as f32;
    let cell_h = (canvas_h - top_margin - padding * (rows as f32 + 1.0)) / rows as f32;

    let mut placed = Vec::with_capacity(dims.len());
    for index in 0..dims.len() {
        let row = index / cols;
        let col = index % cols;

        let jitter_x = (rng.random::<f32>() - 0.5) * padding * GRID_JITTER_X_FRACTION;
        let jitter_y = rng.random::<f32>() * padding * GRID_JITTER_Y_FRACTION;
        let rotation_deg = (rng.random::<f32>() - 0.5) * 2.0 * GRID_MAX_ROTATION_DEG;

        placed.push(PlacedRect {
            x: padding + col as f32 * (cell_w + padding) + jitter_x,
            y: top_margin + row as f32 * (cell_h + padding) + jitter_y,
            width: cell_w,
            height: cell_h,
            rotation_deg,
            image_index: index,
        });
    }

    // Lower rows must draw first so jittered neighbors occlude correctly
    placed.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));
    placed
}
