//! Placeholder icon generator for the SpectreScope browser extension.
//!
//! Renders a blue scope with a translucent lens at 16, 48 and 128 pixels and
//! writes them as PNG files into an existing `icons/` directory.

#[cfg(feature = "render")]
pub mod draw;
pub mod icon_gen;
pub mod manifest_json;
