//! Background layer beneath the collage
//!
//! The solid color fill is unconditional. A configured image is drawn on top
//! of it at a fixed subtle opacity, either as one centered cover-fit draw or
//! as a repeating tile under a diagonal shade.

use crate::config::{BackgroundConfig, BackgroundMode};
use crate::geometry::fit::{FitMode, fit_aspect};
use crate::geometry::path::RoundedRect;
use crate::io::configuration::{BACKGROUND_IMAGE_OPACITY, TILED_SHADE_MAX_ALPHA};
use crate::render::painter::{Painter, Transform};

/// Paint the background layer onto a freshly cleared surface
pub fn draw_background(painter: &mut Painter<'_>, config: &BackgroundConfig<'_>) {
    painter.fill(config.color.with_alpha(1.0));

    let Some(source) = config.image else {
        return;
    };
    if source.width() == 0 || source.height() == 0 {
        log::warn!("background image has zero dimension, skipping it");
        return;
    }

    match config.mode {
        BackgroundMode::Cover => {
            let canvas_w = painter.width() as f32;
            let canvas_h = painter.height() as f32;
            let fit = fit_aspect(
                source.width() as f32,
                source.height() as f32,
                canvas_w,
                canvas_h,
                FitMode::Cover,
            );
            let clip = RoundedRect::new(0.0, 0.0, canvas_w, canvas_h, 0.0);
            painter.draw_image(
                source.data(),
                &fit,
                (0.0, 0.0),
                &clip,
                BACKGROUND_IMAGE_OPACITY,
                &Transform::IDENTITY,
            );
        }
        BackgroundMode::Tiled => {
            painter.tile_image(source.data(), BACKGROUND_IMAGE_OPACITY);
            painter.diagonal_shade(TILED_SHADE_MAX_ALPHA);
        }
    }
}
