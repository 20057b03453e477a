const SVG_DATA_PREFIX: &str = "data:image/svg+xml,";

/// Characters `urlencoding` escapes but `encodeURIComponent` keeps literal.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode `text` with the `encodeURIComponent` character set.
///
/// A literal `%` is encoded as `%25`, so restoring the marks cannot touch
/// anything but escapes produced for those marks.
pub fn encode_uri_component(text: &str) -> String {
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

/// Wrap an SVG document as a percent-encoded `data:` URI for `<img src>`.
pub fn render_data_url(svg: &str) -> String {
    format!("{SVG_DATA_PREFIX}{}", encode_uri_component(svg))
}
