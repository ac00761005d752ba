//! Pixel-level painter primitives over an RGBA surface
//!
//! Every primitive evaluates shape coverage per pixel from the rounded-rect
//! signed distance, maps surface pixels through an explicit inverse
//! transform, and source-over blends the result. Rotation therefore costs no
//! intermediate buffers and leaves no global state behind.

use image::{Rgba, RgbaImage};

use crate::geometry::fit::FittedBox;
use crate::geometry::path::RoundedRect;
use crate::io::configuration::ANTIALIAS_FEATHER;

/// Rotation about a fixed pivot, applied per primitive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    cos: f32,
    sin: f32,
    pivot_x: f32,
    pivot_y: f32,
}

impl Transform {
    /// The do-nothing transform
    pub const IDENTITY: Self = Self {
        cos: 1.0,
        sin: 0.0,
        pivot_x: 0.0,
        pivot_y: 0.0,
    };

    /// Rotation by `degrees` about `(pivot_x, pivot_y)`
    pub fn rotation_about(degrees: f32, pivot_x: f32, pivot_y: f32) -> Self {
        let radians = degrees.to_radians();
        Self {
            cos: radians.cos(),
            sin: radians.sin(),
            pivot_x,
            pivot_y,
        }
    }

    /// Map a local point onto the surface
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let dx = x - self.pivot_x;
        let dy = y - self.pivot_y;
        (
            self.cos.mul_add(dx, -self.sin * dy) + self.pivot_x,
            self.sin.mul_add(dx, self.cos * dy) + self.pivot_y,
        )
    }

    /// Map a surface point back into local coordinates
    pub fn invert(&self, x: f32, y: f32) -> (f32, f32) {
        let dx = x - self.pivot_x;
        let dy = y - self.pivot_y;
        (
            self.cos.mul_add(dx, self.sin * dy) + self.pivot_x,
            (-self.sin).mul_add(dx, self.cos * dy) + self.pivot_y,
        )
    }
}

/// How a filled shape resolves its color at each point
#[derive(Clone, Copy, Debug)]
pub enum FillStyle {
    /// One color everywhere
    Solid(Rgba<u8>),
    /// Linear blend from the shape's top edge to its bottom edge
    VerticalGradient {
        /// Color at the top edge
        top: Rgba<u8>,
        /// Color at the bottom edge
        bottom: Rgba<u8>,
    },
}

/// Immutable paint record for one primitive draw
#[derive(Clone, Copy, Debug)]
pub struct Paint {
    /// Fill color or gradient
    pub style: FillStyle,
    /// Edge falloff width in pixels
    pub feather: f32,
}

impl Paint {
    /// Solid fill with ordinary anti-aliasing
    pub const fn solid(color: Rgba<u8>) -> Self {
        Self {
            style: FillStyle::Solid(color),
            feather: ANTIALIAS_FEATHER,
        }
    }

    /// Top-to-bottom gradient fill with ordinary anti-aliasing
    pub const fn vertical_gradient(top: Rgba<u8>, bottom: Rgba<u8>) -> Self {
        Self {
            style: FillStyle::VerticalGradient { top, bottom },
            feather: ANTIALIAS_FEATHER,
        }
    }

    fn color_at(&self, rect: &RoundedRect, ly: f32) -> Rgba<u8> {
        match self.style {
            FillStyle::Solid(color) => color,
            FillStyle::VerticalGradient { top, bottom } => {
                let t = if rect.h > 0.0 {
                    ((ly - rect.y) / rect.h).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let mix = |a: u8, b: u8| (f32::from(b) - f32::from(a)).mul_add(t, f32::from(a));
                Rgba([
                    mix(top.0[0], bottom.0[0]).round() as u8,
                    mix(top.0[1], bottom.0[1]).round() as u8,
                    mix(top.0[2], bottom.0[2]).round() as u8,
                    mix(top.0[3], bottom.0[3]).round() as u8,
                ])
            }
        }
    }
}

/// Mutable view over the output raster for the duration of one run
pub struct Painter<'a> {
    surface: &'a mut RgbaImage,
}

impl<'a> Painter<'a> {
    /// Wrap a surface for drawing
    pub fn new(surface: &'a mut RgbaImage) -> Self {
        Self { surface }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Replace every pixel with an opaque color
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.surface.pixels_mut() {
            *pixel = color;
        }
    }

    /// Fill a rounded rectangle under a transform
    pub fn fill_rounded_rect(&mut self, rect: &RoundedRect, paint: &Paint, transform: &Transform) {
        let Some((x0, y0, x1, y1)) = self.region_bounds(rect, paint.feather + 1.0, transform)
        else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = transform.invert(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = rect.coverage(lx, ly, paint.feather);
                if coverage > 0.0 {
                    let color = paint.color_at(rect, ly);
                    self.blend_pixel(px, py, color, coverage);
                }
            }
        }
    }

    /// Soft drop shadow beneath a rounded rectangle
    ///
    /// The shadow shape is the rectangle shifted down by `offset_y`, filled
    /// with black at `alpha` and feathered over twice the blur radius.
    pub fn shadow_rounded_rect(
        &mut self,
        rect: &RoundedRect,
        blur: f32,
        offset_y: f32,
        alpha: f32,
        transform: &Transform,
    ) {
        if alpha <= 0.0 {
            return;
        }
        let shadow = rect.translate(0.0, offset_y);
        let feather = (blur * 2.0).max(ANTIALIAS_FEATHER);
        let Some((x0, y0, x1, y1)) = self.region_bounds(&shadow, feather + 1.0, transform) else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = transform.invert(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = shadow.coverage(lx, ly, feather);
                if coverage > 0.0 {
                    self.blend_pixel(px, py, Rgba([0, 0, 0, 255]), coverage * alpha);
                }
            }
        }
    }

    /// Stroke the boundary of a rounded rectangle with a centered band
    pub fn stroke_rounded_rect(
        &mut self,
        rect: &RoundedRect,
        width: f32,
        color: Rgba<u8>,
        transform: &Transform,
    ) {
        if width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let Some((x0, y0, x1, y1)) = self.region_bounds(rect, half + 1.0, transform) else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = transform.invert(px as f32 + 0.5, py as f32 + 0.5);
                let band = half - rect.signed_distance(lx, ly).abs();
                let coverage = (band + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(px, py, color, coverage);
                }
            }
        }
    }

    /// Draw fitted source pixels through a rounded-rect clip
    ///
    /// `fit` positions the content relative to `origin` (normally the clip
    /// rectangle's corner); pixels outside the fitted content, such as the
    /// contain-mode shortfall, are left untouched.
    pub fn draw_image(
        &mut self,
        source: &RgbaImage,
        fit: &FittedBox,
        origin: (f32, f32),
        clip: &RoundedRect,
        opacity: f32,
        transform: &Transform,
    ) {
        if fit.draw_w <= 0.0 || fit.draw_h <= 0.0 || source.width() == 0 || source.height() == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.region_bounds(clip, 1.0, transform) else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = transform.invert(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = clip.coverage(lx, ly, ANTIALIAS_FEATHER);
                if coverage <= 0.0 {
                    continue;
                }

                let u = (lx - origin.0 - fit.offset_x) / fit.draw_w;
                let v = (ly - origin.1 - fit.offset_y) / fit.draw_h;
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }

                let sample = sample_bilinear(
                    source,
                    u * source.width() as f32,
                    v * source.height() as f32,
                );
                self.blend_pixel(px, py, sample, coverage * opacity);
            }
        }
    }

    /// Radial darkening over a clip region, transparent center to `edge_alpha`
    pub fn vignette(
        &mut self,
        clip: &RoundedRect,
        radius: f32,
        edge_alpha: f32,
        transform: &Transform,
    ) {
        if radius <= 0.0 || edge_alpha <= 0.0 {
            return;
        }
        let (cx, cy) = clip.center();
        let Some((x0, y0, x1, y1)) = self.region_bounds(clip, 1.0, transform) else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = transform.invert(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = clip.coverage(lx, ly, ANTIALIAS_FEATHER);
                if coverage <= 0.0 {
                    continue;
                }
                let t = ((lx - cx).hypot(ly - cy) / radius).min(1.0);
                if t > 0.0 {
                    self.blend_pixel(px, py, Rgba([0, 0, 0, 255]), coverage * edge_alpha * t);
                }
            }
        }
    }

    /// Repeat source pixels 1:1 across the whole surface at an opacity
    pub fn tile_image(&mut self, source: &RgbaImage, opacity: f32) {
        if source.width() == 0 || source.height() == 0 || opacity <= 0.0 {
            return;
        }
        for py in 0..self.height() {
            for px in 0..self.width() {
                let sample = *source.get_pixel(px % source.width(), py % source.height());
                self.blend_pixel(px, py, sample, opacity);
            }
        }
    }

    /// Diagonal darkening, transparent top-left to `max_alpha` bottom-right
    pub fn diagonal_shade(&mut self, max_alpha: f32) {
        if max_alpha <= 0.0 {
            return;
        }
        let span_x = (self.width().max(2) - 1) as f32;
        let span_y = (self.height().max(2) - 1) as f32;
        for py in 0..self.height() {
            for px in 0..self.width() {
                let t = (px as f32 / span_x + py as f32 / span_y) / 2.0;
                self.blend_pixel(px, py, Rgba([0, 0, 0, 255]), max_alpha * t);
            }
        }
    }

    // Conservative integer pixel bounds of a rect (plus margin) under a transform
    fn region_bounds(
        &self,
        rect: &RoundedRect,
        margin: f32,
        transform: &Transform,
    ) -> Option<(u32, u32, u32, u32)> {
        let corners = [
            (rect.x - margin, rect.y - margin),
            (rect.x + rect.w + margin, rect.y - margin),
            (rect.x - margin, rect.y + rect.h + margin),
            (rect.x + rect.w + margin, rect.y + rect.h + margin),
        ];

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for (x, y) in corners {
            let (tx, ty) = transform.apply(x, y);
            min_x = min_x.min(tx);
            min_y = min_y.min(ty);
            max_x = max_x.max(tx);
            max_y = max_y.max(ty);
        }

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    // Source-over blend at `coverage`, honoring the source alpha channel
    fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
        let alpha = (f32::from(color.0[3]) / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let Some(dst) = self.surface.get_pixel_mut_checked(x, y) else {
            return;
        };

        for channel in 0..3 {
            let blended = alpha.mul_add(
                f32::from(color.0[channel]),
                (1.0 - alpha) * f32::from(dst.0[channel]),
            );
            dst.0[channel] = blended.round().clamp(0.0, 255.0) as u8;
        }
        let dst_alpha = f32::from(dst.0[3]) / 255.0;
        let out_alpha = (1.0 - alpha).mul_add(dst_alpha, alpha);
        dst.0[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

// Bilinear sample at source pixel coordinates, clamping at the borders
fn sample_bilinear(source: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let max_x = source.width() - 1;
    let max_y = source.height() - 1;

    let fx = (x - 0.5).max(0.0);
    let fy = (y - 0.5).max(0.0);
    let x0 = (fx.floor() as u32).min(max_x);
    let y0 = (fy.floor() as u32).min(max_y);
    let x1 = (x0 + 1).min(max_x);
    let y1 = (y0 + 1).min(max_y);
    let tx = fx - fx.floor();
    let ty = fy - fy.floor();

    let p00 = source.get_pixel(x0, y0);
    let p10 = source.get_pixel(x1, y0);
    let p01 = source.get_pixel(x0, y1);
    let p11 = source.get_pixel(x1, y1);

    let mut out = [0u8; 4];
    for channel in 0..4 {
        let top = (f32::from(p10.0[channel]) - f32::from(p00.0[channel]))
            .mul_add(tx, f32::from(p00.0[channel]));
        let bottom = (f32::from(p11.0[channel]) - f32::from(p01.0[channel]))
            .mul_add(tx, f32::from(p01.0[channel]));
        out[channel] = (bottom - top).mul_add(ty, top).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}
