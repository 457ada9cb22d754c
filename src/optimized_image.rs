use indexmap::IndexMap;
use itertools::Itertools;

use crate::placeholder::{box_svg, jpeg_data_uri, svg_data_uri, BOX_COLOR};

lazy_static::lazy_static! {
    // Only hex colours are allowed into the placeholder SVG's style attribute
    static ref HEX_COLOR: regex::Regex =
        regex::Regex::new("^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
}

/// The result of optimizing one image: the URL of every generated variant and the
/// data needed to build placeholders for it.
///
/// Produced elsewhere and only read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizedImage {
    /// Size label (the width in pixels) to URL, in the primary format
    pub optimized_image_urls: IndexMap<String, String>,
    /// Size label to URL for the WebP variants. Empty when none were generated.
    #[serde(rename = "optimizedWebPImageUrls")]
    pub optimized_web_p_image_urls: IndexMap<String, String>,
    pub placeholder_width: u32,
    pub placeholder_height: u32,
    /// Dominant colours, most dominant first
    pub color_palette: Vec<String>,
    /// Base64 encoded JPEG of a tiny blurred version of the image
    pub placeholder: String,
    /// SVG silhouette of the image
    pub placeholder_svg: String,
}

impl OptimizedImage {
    pub fn new(
        optimized_image_urls: IndexMap<String, String>,
        placeholder_width: u32,
        placeholder_height: u32,
    ) -> Self {
        Self {
            optimized_image_urls,
            placeholder_width,
            placeholder_height,
            ..Self::default()
        }
    }

    pub fn with_web_p_image_urls(&self, optimized_web_p_image_urls: IndexMap<String, String>) -> Self {
        Self {
            optimized_web_p_image_urls,
            ..self.clone()
        }
    }

    pub fn with_color_palette(&self, color_palette: Vec<String>) -> Self {
        Self {
            color_palette,
            ..self.clone()
        }
    }

    pub fn with_placeholder(&self, placeholder: String) -> Self {
        Self {
            placeholder,
            ..self.clone()
        }
    }

    pub fn with_placeholder_svg(&self, placeholder_svg: String) -> Self {
        Self {
            placeholder_svg,
            ..self.clone()
        }
    }

    /// Builds a `srcset` value such as `a400.jpg 400w, a800.jpg 800w`
    pub fn srcset_from_urls(urls: &IndexMap<String, String>) -> String {
        urls.iter()
            .map(|(size, url)| format!("{url} {size}w"))
            .join(", ")
    }

    /// The first URL in the primary format, conventionally the smallest
    pub fn first_url(&self) -> Option<&str> {
        self.optimized_image_urls.values().next().map(String::as_str)
    }

    pub fn has_web_p(&self) -> bool {
        !self.optimized_web_p_image_urls.is_empty()
    }

    /// The most dominant colour, if it is a valid hex colour
    pub fn dominant_color(&self) -> Option<&str> {
        self.color_palette
            .first()
            .map(String::as_str)
            .filter(|color| HEX_COLOR.is_match(color))
    }

    /// A solid box, `color` or neutral grey
    pub fn placeholder_box(&self, width: u32, height: u32, color: Option<&str>) -> String {
        svg_data_uri(&box_svg(width, height, color.unwrap_or(BOX_COLOR)))
    }

    /// The blurred preview, or a grey box of the placeholder size if there is none
    pub fn placeholder_image(&self) -> String {
        if self.placeholder.is_empty() {
            debug!("No placeholder image, falling back to a box");
            self.placeholder_box(self.placeholder_width, self.placeholder_height, None)
        } else {
            jpeg_data_uri(&self.placeholder)
        }
    }

    /// The silhouette, or a grey box of the placeholder size if there is none
    pub fn placeholder_silhouette(&self) -> String {
        if self.placeholder_svg.is_empty() {
            debug!("No placeholder silhouette, falling back to a box");
            self.placeholder_box(self.placeholder_width, self.placeholder_height, None)
        } else {
            svg_data_uri(&self.placeholder_svg)
        }
    }
}
