//! Centralized constants for iron_ui
//!
//! Magic numbers shared by several widgets live here.

use crate::layout::Padding;

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across most widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Font size for section headings
pub const HEADING_FONT_SIZE: f32 = 16.0;

/// Approximate character width as a ratio of font size
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in Column/Row
pub const DEFAULT_SPACING: f32 = 8.0;

// =============================================================================
// Accordion
// =============================================================================

/// Height of a section header (the part that stays visible when closed)
pub const ACCORDION_HEADER_HEIGHT: f32 = 40.0;

/// Gap between the heading text and the chevron
pub const ACCORDION_HEADING_MARGIN: f32 = 48.0;

/// Chevron indicator size (square)
pub const ACCORDION_CHEVRON_SIZE: f32 = 20.0;

/// Thickness of the heading underline
pub const ACCORDION_UNDERLINE_THICKNESS: f32 = 1.5;

/// Vertical gap below each section
pub const ACCORDION_SECTION_SPACING: f32 = 8.0;

/// Padding around the header row
pub const ACCORDION_HEADER_PADDING: Padding = Padding::symmetric(0.0, 4.0);

/// Gap between header extras and the disclosure
pub const ACCORDION_EXTRAS_MARGIN: f32 = 12.0;

/// Default open/close transition length in milliseconds
pub const DEFAULT_ANIMATION_TIME_MS: u64 = 200;

/// Chevron rotation of an open section, in degrees
pub const CHEVRON_OPEN_DEGREES: f32 = -180.0;

/// Chevron rotation of a closed section, in degrees
pub const CHEVRON_CLOSED_DEGREES: f32 = 0.0;

/// Added to the measured container width to absorb fractional pixel rounding
pub const WIDTH_ROUNDING_PX: f32 = 1.0;

/// Characters used for instance scope keys
pub const SCOPE_ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Length of an instance scope key
pub const SCOPE_LEN: usize = 6;
