//! Deterministic gradient avatars.
//!
//! An input string (username, user id, ...) is hashed, mapped onto a named
//! palette ("vibe"), and expanded into a background color plus four blurred
//! radial gradients. The same input always produces the same avatar.

pub mod avatar;
pub mod config;
pub mod error;
pub mod hash;
pub mod palette;
pub mod render;

pub use avatar::{generate_avatar_data, vibe_for_input, AvatarData, GradientCircle};
pub use config::RenderSettings;
pub use error::{AvatarError, Result};
pub use hash::hash_string;
pub use palette::{Palette, PaletteCatalog};
pub use render::DEFAULT_SIZE;

/// Render the avatar for `input` as an SVG document.
pub fn generate_avatar_svg(
    catalog: &PaletteCatalog,
    input: &str,
    vibe: Option<&str>,
    size: u32,
) -> Result<String> {
    let data = generate_avatar_data(catalog, input, vibe)?;
    Ok(render::render_svg(input, &data, size))
}

/// Render the avatar for `input` as a `data:image/svg+xml` URI.
pub fn generate_avatar_data_url(
    catalog: &PaletteCatalog,
    input: &str,
    vibe: Option<&str>,
    size: u32,
) -> Result<String> {
    let svg = generate_avatar_svg(catalog, input, vibe, size)?;
    Ok(render::render_data_url(&svg))
}

/// Render the avatar for `input` as a CSS `background-image` value.
pub fn generate_css_gradient(
    catalog: &PaletteCatalog,
    input: &str,
    vibe: Option<&str>,
) -> Result<String> {
    let palette = avatar::resolve_vibe(catalog, input, vibe)?;
    Ok(render::render_css_gradient(palette, hash_string(input)))
}
