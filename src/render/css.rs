use crate::avatar::{circle_seed, GRADIENT_COUNT};
use crate::palette::Palette;

/// Render a CSS `background-image` value of four stacked radial gradients.
///
/// Positions and sizes use their own mapping (`x = 20 + s % 60`,
/// `y = 20 + 7s % 60`, `size = 40 + s % 40`) rather than the circles of
/// [`AvatarData`](crate::AvatarData). Only the palette and hash are shared with
/// the SVG rendering, so the two layouts do not match.
pub fn render_css_gradient(palette: &Palette, hash: u32) -> String {
    (0..GRADIENT_COUNT)
        .map(|i| {
            let seed = circle_seed(hash, i);
            let x = 20 + seed % 60;
            let y = 20 + (seed * 7) % 60;
            let size = 40 + seed % 40;
            format!(
                "radial-gradient(circle at {x}% {y}%, {color}, transparent {size}%)",
                color = palette.color_for(seed),
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
