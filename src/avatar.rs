use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::hash::hash_string;
use crate::palette::{Palette, PaletteCatalog};

pub const GRADIENT_COUNT: usize = 4;
/// Offset between consecutive per-circle seeds.
pub const SEED_STEP: u64 = 1234;

/// One radial color blend layer, in a 0-100 percentage space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientCircle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: String,
}

impl GradientCircle {
    /// Derive a circle from its seed. Centers sit 30-69 units from (50, 50)
    /// and may fall outside the canvas.
    pub fn from_seed(seed: u64, palette: &Palette) -> Self {
        let angle = (seed % 360) as f64 * (PI / 180.0);
        let distance = (30 + seed % 40) as f64;
        Self {
            cx: 50.0 + angle.cos() * distance,
            cy: 50.0 + angle.sin() * distance,
            r: (50 + seed % 30) as f64,
            color: palette.color_for(seed).to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarData {
    pub bg_color: String,
    /// Paint order, back to front.
    pub gradients: Vec<GradientCircle>,
    pub vibe: String,
}

/// Seed for circle `index`: `hash + index * 1234`, never wrapping.
pub fn circle_seed(hash: u32, index: usize) -> u64 {
    u64::from(hash) + index as u64 * SEED_STEP
}

/// The vibe an input maps to when no override is given.
pub fn vibe_for_input<'a>(catalog: &'a PaletteCatalog, input: &str) -> &'a Palette {
    catalog.select(hash_string(input))
}

/// Resolve the palette for `input`, honouring an explicit override.
pub fn resolve_vibe<'a>(
    catalog: &'a PaletteCatalog,
    input: &str,
    vibe: Option<&str>,
) -> Result<&'a Palette> {
    match vibe {
        Some(name) => catalog.lookup(name),
        None => Ok(vibe_for_input(catalog, input)),
    }
}

/// Derive the background color and the four gradient circles for `input`.
///
/// An override naming a vibe missing from `catalog` fails with
/// [`AvatarError::UnknownVibe`](crate::AvatarError::UnknownVibe).
pub fn generate_avatar_data(
    catalog: &PaletteCatalog,
    input: &str,
    vibe: Option<&str>,
) -> Result<AvatarData> {
    let palette = resolve_vibe(catalog, input, vibe)?;
    let hash = hash_string(input);
    Ok(build_avatar_data(palette, hash))
}

/// Parameterize from an already computed hash and palette.
pub fn build_avatar_data(palette: &Palette, hash: u32) -> AvatarData {
    let gradients = (0..GRADIENT_COUNT)
        .map(|i| {
            let seed = circle_seed(hash, i);
            let circle = GradientCircle::from_seed(seed, palette);
            trace!(
                index = i,
                seed,
                cx = circle.cx,
                cy = circle.cy,
                r = circle.r,
                "gradient circle"
            );
            circle
        })
        .collect();

    debug!(vibe = %palette.name(), hash, "generated avatar data");

    AvatarData {
        bg_color: palette.color_for(u64::from(hash)).to_string(),
        gradients,
        vibe: palette.name().to_string(),
    }
}
