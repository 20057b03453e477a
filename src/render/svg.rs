use crate::avatar::AvatarData;

/// Default edge length in pixels.
pub const DEFAULT_SIZE: u32 = 200;

/// Blur applied to the gradient layers.
const BLUR_STD_DEVIATION: u32 = 8;

/// Element id suffix for `input`: ASCII letters and digits only.
pub fn svg_id(input: &str) -> String {
    input.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Render `data` as a standalone SVG document of `size` x `size` pixels.
///
/// `input` only feeds the element ids, so several avatars can share a page.
pub fn render_svg(input: &str, data: &AvatarData, size: u32) -> String {
    let id = svg_id(input);

    let gradient_defs = data
        .gradients
        .iter()
        .enumerate()
        .map(|(i, g)| {
            format!(
                "    <radialGradient id=\"g{i}-{id}\" cx=\"{cx}%\" cy=\"{cy}%\" r=\"{r}%\">\n      \
                 <stop offset=\"0%\" style=\"stop-color:{color};stop-opacity:0.9\" />\n      \
                 <stop offset=\"100%\" style=\"stop-color:{color};stop-opacity:0\" />\n    \
                 </radialGradient>",
                cx = g.cx,
                cy = g.cy,
                r = g.r,
                color = g.color,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rects = (0..data.gradients.len())
        .map(|i| {
            format!("    <rect width=\"{size}\" height=\"{size}\" fill=\"url(#g{i}-{id})\" />")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<svg width=\"{size}\" height=\"{size}\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
         <defs>\n    \
         <filter id=\"blur-{id}\">\n      \
         <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{BLUR_STD_DEVIATION}\" />\n    \
         </filter>\n\
         {gradient_defs}\n  \
         </defs>\n  \
         <rect width=\"{size}\" height=\"{size}\" fill=\"{bg}\" />\n  \
         <g filter=\"url(#blur-{id})\">\n\
         {rects}\n  \
         </g>\n\
         </svg>",
        bg = data.bg_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::generate_avatar_data;
    use crate::palette::PaletteCatalog;

    fn render(input: &str) -> String {
        let data = generate_avatar_data(PaletteCatalog::vibes(), input, None).unwrap();
        render_svg(input, &data, DEFAULT_SIZE)
    }

    #[test]
    fn strips_non_alphanumerics_from_ids() {
        assert_eq!(svg_id("jane.doe@example.com"), "janedoeexamplecom");
        assert_eq!(svg_id("Zoë_42!"), "Zo42");
        assert_eq!(svg_id(""), "");
    }

    #[test]
    fn document_structure() {
        let svg = render("jane.doe@example.com");
        assert!(svg.starts_with(
            "<svg width=\"200\" height=\"200\" xmlns=\"http://www.w3.org/2000/svg\">\n  <defs>\n"
        ));
        assert!(svg.ends_with("  </g>\n</svg>"));
        assert_eq!(svg.matches("<radialGradient ").count(), 4);
        assert_eq!(svg.matches("fill=\"url(#g").count(), 4);
        assert_eq!(svg.matches("<rect ").count(), 5);
        assert_eq!(svg.matches("<filter id=\"blur-janedoeexamplecom\">").count(), 1);
        assert!(svg.contains("<g filter=\"url(#blur-janedoeexamplecom)\">"));
    }

    #[test]
    fn empty_input_gradient_markup() {
        let svg = render("");
        assert!(svg.contains(
            "    <radialGradient id=\"g0-\" cx=\"80%\" cy=\"50%\" r=\"50%\">\n      \
             <stop offset=\"0%\" style=\"stop-color:#06b6d4;stop-opacity:0.9\" />\n      \
             <stop offset=\"100%\" style=\"stop-color:#06b6d4;stop-opacity:0\" />\n    \
             </radialGradient>"
        ));
        assert!(svg.contains("  <rect width=\"200\" height=\"200\" fill=\"#06b6d4\" />\n"));
        assert!(svg.contains("    <rect width=\"200\" height=\"200\" fill=\"url(#g3-)\" />\n"));
    }

    #[test]
    fn size_is_applied_everywhere() {
        let data = generate_avatar_data(PaletteCatalog::vibes(), "bob", None).unwrap();
        let svg = render_svg("bob", &data, 64);
        assert!(svg.starts_with("<svg width=\"64\" height=\"64\""));
        assert_eq!(svg.matches("width=\"64\" height=\"64\"").count(), 6);
    }
}
