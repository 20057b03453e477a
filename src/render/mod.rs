//! Formatters that turn avatar parameters into markup.

pub mod css;
pub mod data_url;
pub mod svg;

pub use css::render_css_gradient;
pub use data_url::render_data_url;
pub use svg::{render_svg, svg_id, DEFAULT_SIZE};
