//! Random scatter placement: rejection sampling under a separation constraint

use rand::{Rng, rngs::StdRng};

use crate::io::configuration::{
    SCATTER_MAX_ATTEMPTS, SCATTER_MAX_ROTATION_DEG_DESKTOP, SCATTER_MAX_ROTATION_DEG_MOBILE,
    SCATTER_MIN_DISTANCE_DESKTOP, SCATTER_MIN_DISTANCE_MOBILE, SCATTER_MIN_SIZE_DESKTOP,
    SCATTER_MIN_SIZE_MOBILE, SCATTER_PADDING_DESKTOP, SCATTER_PADDING_MOBILE,
    SCATTER_SIZE_RANGE_DESKTOP, SCATTER_SIZE_RANGE_MOBILE,
};
use crate::layout::{DeviceClass, ImageDims, PlacedRect};

struct ScatterParams {
    padding: f32,
    min_distance: f32,
    min_size: f32,
    size_range: f32,
    max_rotation_deg: f32,
}

const fn params(device: DeviceClass) -> ScatterParams {
    match device {
        DeviceClass::Desktop => ScatterParams {
            padding: SCATTER_PADDING_DESKTOP,
            min_distance: SCATTER_MIN_DISTANCE_DESKTOP,
            min_size: SCATTER_MIN_SIZE_DESKTOP,
            size_range: SCATTER_SIZE_RANGE_DESKTOP,
            max_rotation_deg: SCATTER_MAX_ROTATION_DEG_DESKTOP,
        },
        DeviceClass::Mobile => ScatterParams {
            padding: SCATTER_PADDING_MOBILE,
            min_distance: SCATTER_MIN_DISTANCE_MOBILE,
            min_size: SCATTER_MIN_SIZE_MOBILE,
            size_range: SCATTER_SIZE_RANGE_MOBILE,
            max_rotation_deg: SCATTER_MAX_ROTATION_DEG_MOBILE,
        },
    }
}

/// Scatter images across the canvas without crowding
///
/// Each image gets up to 50 trials of a random size and position inside the
/// margins. A trial is accepted when its center keeps at least
/// `max(width, height) + min_distance` from the center of every placement
/// accepted so far; the separation is circular, so corners may still touch.
/// Images whose trials all fail are dropped from the layout without error.
pub fn place(
    dims: &[ImageDims],
    canvas_w: f32,
    canvas_h: f32,
    device: DeviceClass,
    rng: &mut StdRng,
) -> Vec<PlacedRect> {
    let params = params(device);

    let mut placed: Vec<PlacedRect> = Vec::with_capacity(dims.len());
    for (index, entry) in dims.iter().enumerate() {
        let mut accepted = None;

        for _ in 0..SCATTER_MAX_ATTEMPTS {
            let width = params.min_size + rng.random::<f32>() * params.size_range;
            let height = width * entry.aspect();

            // A candidate too large for the margins counts as a failed trial
            let room_x = canvas_w - width - params.padding * 2.0;
            let room_y = canvas_h - height - params.padding * 2.0;
            if room_x <= 0.0 || room_y <= 0.0 {
                continue;
            }

            let x = params.padding + rng.random::<f32>() * room_x;
            let y = params.padding + rng.random::<f32>() * room_y;

            let reach = width.max(height) + params.min_distance;
            let separated = placed.iter().all(|other| {
                let dx = (x + width / 2.0) - (other.x + other.width / 2.0);
                let dy = (y + height / 2.0) - (other.y + other.height / 2.0);
                dx.hypot(dy) >= reach
            });

            if separated {
                accepted = Some((x, y, width, height));
                break;
            }
        }

        if let Some((x, y, width, height)) = accepted {
            let rotation_deg = (rng.random::<f32>() - 0.5) * 2.0 * params.max_rotation_deg;
            placed.push(PlacedRect {
                x,
                y,
                width,
                height,
                rotation_deg,
                image_index: index,
            });
        } else {
            log::debug!(
                "no position found for image {index} after {SCATTER_MAX_ATTEMPTS} attempts, dropping it"
            );
        }
    }
    placed
}
