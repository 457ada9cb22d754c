use maud::Markup;

use crate::attrs::{void_element, Attrs};
use crate::optimized_image::OptimizedImage;
use crate::tag::Tag;

/// `<link rel="preload" as="image">` so the browser starts on the image before it reaches
/// the `<img>`
#[derive(Debug, Clone)]
pub struct LinkPreloadTag {
    attrs: Attrs,
}

impl LinkPreloadTag {
    pub fn new(optimized_image: &OptimizedImage) -> Self {
        Self {
            attrs: Attrs::from([
                ("rel", "preload".to_owned()),
                ("as", "image".to_owned()),
                (
                    "href",
                    optimized_image.first_url().unwrap_or_default().to_owned(),
                ),
                (
                    "imagesrcset",
                    OptimizedImage::srcset_from_urls(&optimized_image.optimized_image_urls),
                ),
                ("imagesizes", "100vw".to_owned()),
            ]),
        }
    }

    #[must_use]
    pub fn merge_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.attrs.merge(attrs);
        self
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }
}

impl Tag for LinkPreloadTag {
    fn render(&self) -> Markup {
        void_element("link", &self.attrs)
    }
}

crate::tag::impl_tag_display!(LinkPreloadTag);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_preload() {
        let image = OptimizedImage::new(
            [("400", "a400.jpg"), ("800", "a800.jpg")]
                .iter()
                .map(|(size, url)| (size.to_string(), url.to_string()))
                .collect(),
            400,
            300,
        );
        let tag = LinkPreloadTag::new(&image).merge_attrs([("imagesizes", "50vw")]);
        assert_eq!(
            tag.to_string(),
            r#"<link rel="preload" as="image" href="a400.jpg" imagesrcset="a400.jpg 400w, a800.jpg 800w" imagesizes="50vw"/>"#
        );
    }

    #[test]
    fn test_link_preload_without_urls() {
        let tag = LinkPreloadTag::new(&OptimizedImage::default());
        assert_eq!(
            tag.to_html_string(),
            r#"<link rel="preload" as="image" imagesizes="100vw"/>"#
        );
    }
}
