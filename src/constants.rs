//! Global constants for the Iron Instruction viewer

/// Viewport width used when none is configured
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 640.0;

/// Simulated frame interval when settling animations
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Upper bound on frames advanced while waiting for animations to settle
pub const MAX_SETTLE_FRAMES: usize = 1000;

/// Longest accepted open/close transition
pub const MAX_ANIMATION_TIME_MS: u64 = 10_000;

/// Plate increment that computed target weights are rounded up to
pub const WEIGHT_INCREMENT_KG: f64 = 2.5;

/// Sentinel used by the backend for "no value" in numeric set fields
pub const UNSET: i32 = -1;

/// Font size of the program title
pub const TITLE_FONT_SIZE: f32 = 22.0;

/// Font size of list captions ("Days", "Exercises")
pub const CAPTION_FONT_SIZE: f32 = 15.0;

/// Gap between the program header and the week list
pub const HEADER_SPACING: f32 = 16.0;
