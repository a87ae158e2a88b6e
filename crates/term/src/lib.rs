//! Terminal rendering module.
//!
//! This is a small rendering layer that turns per-cell tile content into
//! plain text. It intentionally avoids widget/layout frameworks and instead
//! resolves every cell to a single character that can be written to any
//! terminal backend.
//!
//! Goals:
//! - Keep the world/simulation crates free of rendering concerns
//! - Make every quality tier a pure, table-driven lookup
//! - Produce deterministic string output for tests and headless use

pub mod compose;
pub mod glyph;
pub mod viewport;

pub use gridatlas_types as types;

pub use compose::{render_grid_to_string, ResolvedCell, TileCompositor};
pub use glyph::{
    render_pixel_grid, PixelGrid, ASCII_BLOCK_GLYPHS, ASCII_GLYPHS, SHADE_GLYPHS, TELETEXT_GLYPHS,
};
pub use viewport::{ViewBounds, Viewport};
