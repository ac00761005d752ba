//! Aspect-ratio preserving fits between a content rectangle and a target box
//!
//! Cover mode scales content to fill the box, centering the overflow on the
//! long axis. Contain mode scales content to sit inside the box, centering
//! the shortfall. Both preserve the content ratio exactly.

/// How content is scaled relative to the box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitMode {
    /// Scale to fill the box, cropping overflow
    Cover,
    /// Scale to fit inside the box, leaving uncovered margins
    Contain,
}

/// Dimensions and placement of fitted content relative to the box origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FittedBox {
    /// Scaled content width
    pub draw_w: f32,
    /// Scaled content height
    pub draw_h: f32,
    /// Horizontal offset from the box origin (negative when overflowing)
    pub offset_x: f32,
    /// Vertical offset from the box origin (negative when overflowing)
    pub offset_y: f32,
}

/// Fit content dimensions into a box while preserving their ratio
///
/// The fit-width versus fit-height branch is chosen by comparing the content
/// ratio to the box ratio. Non-positive inputs yield the zero box; callers
/// are expected to filter degenerate images beforehand.
pub fn fit_aspect(content_w: f32, content_h: f32, box_w: f32, box_h: f32, mode: FitMode) -> FittedBox {
    if content_w <= 0.0 || content_h <= 0.0 || box_w <= 0.0 || box_h <= 0.0 {
        return FittedBox::default();
    }

    let content_ratio = content_w / content_h;
    let box_ratio = box_w / box_h;

    let fit_width = match mode {
        // Wider content than box: covering needs full height, containing full width
        FitMode::Cover => content_ratio <= box_ratio,
        FitMode::Contain => content_ratio >= box_ratio,
    };

    let (draw_w, draw_h) = if fit_width {
        (box_w, box_w / content_ratio)
    } else {
        (box_h * content_ratio, box_h)
    };

    FittedBox {
        draw_w,
        draw_h,
        offset_x: (box_w - draw_w) / 2.0,
        offset_y: (box_h - draw_h) / 2.0,
    }
}
