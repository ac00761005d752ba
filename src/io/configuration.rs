//! Layout and rendering constants plus runtime defaults

// Grid strategy spacing
/// Gap between grid cells on desktop canvases
pub const GRID_PADDING_DESKTOP: f32 = 60.0;
/// Gap between grid cells on mobile canvases
pub const GRID_PADDING_MOBILE: f32 = 30.0;
/// Header zone reserved above the grid, as a fraction of canvas height
pub const GRID_TOP_MARGIN_FRACTION_DESKTOP: f32 = 0.12;
/// Header zone reserved above the grid on mobile, as a fraction of canvas height
pub const GRID_TOP_MARGIN_FRACTION_MOBILE: f32 = 0.15;
/// Horizontal jitter per grid cell, as a fraction of the padding (centered)
pub const GRID_JITTER_X_FRACTION: f32 = 0.3;
/// Downward jitter per grid cell, as a fraction of the padding
pub const GRID_JITTER_Y_FRACTION: f32 = 0.15;
/// Maximum grid cell rotation in degrees, either direction
pub const GRID_MAX_ROTATION_DEG: f32 = 1.0;

// Masonry strategy spacing
/// Gap between masonry columns and items on desktop canvases
pub const MASONRY_PADDING_DESKTOP: f32 = 40.0;
/// Gap between masonry columns and items on mobile canvases
pub const MASONRY_PADDING_MOBILE: f32 = 20.0;
/// Masonry column count on desktop canvases
pub const MASONRY_COLUMNS_DESKTOP: usize = 4;
/// Masonry column count on mobile canvases
pub const MASONRY_COLUMNS_MOBILE: usize = 2;

// Random-scatter strategy
/// Canvas margin kept clear of scattered images on desktop canvases
pub const SCATTER_PADDING_DESKTOP: f32 = 40.0;
/// Canvas margin kept clear of scattered images on mobile canvases
pub const SCATTER_PADDING_MOBILE: f32 = 20.0;
/// Extra center-to-center separation beyond the candidate size, desktop
pub const SCATTER_MIN_DISTANCE_DESKTOP: f32 = 100.0;
/// Extra center-to-center separation beyond the candidate size, mobile
pub const SCATTER_MIN_DISTANCE_MOBILE: f32 = 50.0;
/// Smallest scattered image width on desktop canvases
pub const SCATTER_MIN_SIZE_DESKTOP: f32 = 300.0;
/// Smallest scattered image width on mobile canvases
pub const SCATTER_MIN_SIZE_MOBILE: f32 = 150.0;
/// Width range above the minimum for scattered images, desktop
pub const SCATTER_SIZE_RANGE_DESKTOP: f32 = 300.0;
/// Width range above the minimum for scattered images, mobile
pub const SCATTER_SIZE_RANGE_MOBILE: f32 = 150.0;
/// Maximum scattered image rotation in degrees on desktop canvases
pub const SCATTER_MAX_ROTATION_DEG_DESKTOP: f32 = 3.0;
/// Maximum scattered image rotation in degrees on mobile canvases
pub const SCATTER_MAX_ROTATION_DEG_MOBILE: f32 = 5.0;
/// Placement trials per image before it is dropped from the layout
pub const SCATTER_MAX_ATTEMPTS: usize = 50;

// Cell rendering
/// Cell corner radius as a fraction of the smaller cell dimension
pub const CELL_CORNER_FRACTION: f32 = 0.1;
/// Drop shadow opacity
pub const SHADOW_ALPHA: f32 = 0.25;
/// Drop shadow blur as a fraction of the strategy padding
pub const SHADOW_BLUR_FRACTION: f32 = 0.4;
/// Vertical shadow offset as a fraction of the blur
pub const SHADOW_OFFSET_FRACTION: f32 = 0.3;
/// Vignette darkness at the cell edge
pub const VIGNETTE_EDGE_ALPHA: f32 = 0.12;
/// Vignette radius as a fraction of the cell width
pub const VIGNETTE_RADIUS_FRACTION: f32 = 0.8;
/// Brightness delta between the ends of a gradient frame fill
pub const FRAME_GRADIENT_DELTA: i16 = 24;
/// Edge falloff width for anti-aliased coverage, in pixels
pub const ANTIALIAS_FEATHER: f32 = 1.0;

// Background compositing
/// Opacity of a background image so it never competes with the collage
pub const BACKGROUND_IMAGE_OPACITY: f32 = 0.15;
/// Darkness at the bottom-right end of the tiled background shade
pub const TILED_SHADE_MAX_ALPHA: f32 = 0.35;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default frame opacity
pub const DEFAULT_FRAME_OPACITY: f32 = 0.85;
/// Default border width around each image, in pixels
pub const DEFAULT_BORDER_WIDTH: u32 = 8;
/// Default frame and background color
pub const DEFAULT_COLOR_HEX: &str = "#ffffff";
/// Default output filename
pub const DEFAULT_OUTPUT: &str = "wallpaper.png";
