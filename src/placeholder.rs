use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Colour of the neutral placeholder box
pub const BOX_COLOR: &str = "#CCC";

/// An empty SVG of the given size with a solid background
pub fn box_svg(width: u32, height: u32, color: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="background:{color}"/>"#
    )
}

/// Base64 encodes an SVG document into a `data:` URI
pub fn svg_data_uri(svg: &str) -> String {
    ["data:image/svg+xml;base64,", &STANDARD.encode(svg)].join("")
}

/// Wraps already base64 encoded JPEG data in a `data:` URI
pub fn jpeg_data_uri(base64_jpeg: &str) -> String {
    ["data:image/jpeg;base64,", base64_jpeg].join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_svg() {
        assert_eq!(
            box_svg(400, 300, BOX_COLOR),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" style="background:#CCC"/>"#
        );
    }

    #[test]
    fn test_svg_data_uri_decodes_back() {
        let svg = box_svg(1, 1, "#000");
        let uri = svg_data_uri(&svg);
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), svg.as_bytes());
    }

    #[test]
    fn test_jpeg_data_uri() {
        assert_eq!(jpeg_data_uri("/9j/4AAQ"), "data:image/jpeg;base64,/9j/4AAQ");
    }
}
