use maud::Markup;

use crate::attrs::{void_element, Attrs};
use crate::modes::{Loading, Placeholder};
use crate::optimized_image::OptimizedImage;
use crate::tag::lazy::{swap_lazy_load_attrs, warn_unknown_modes};
use crate::tag::Tag;

/// A single responsive `<img>` carrying the primary format's `srcset`
#[derive(Debug, Clone)]
pub struct ImgTag {
    optimized_image: OptimizedImage,
    loading: Loading,
    placeholder: Placeholder,
    attrs: Attrs,
}

impl ImgTag {
    pub fn new(optimized_image: OptimizedImage) -> Self {
        let attrs = Attrs::from([
            ("class", String::new()),
            ("style", String::new()),
            ("width", optimized_image.placeholder_width.to_string()),
            ("height", optimized_image.placeholder_height.to_string()),
            (
                "src",
                optimized_image.first_url().unwrap_or_default().to_owned(),
            ),
            (
                "srcset",
                OptimizedImage::srcset_from_urls(&optimized_image.optimized_image_urls),
            ),
            ("sizes", "100vw".to_owned()),
            ("loading", String::new()),
        ]);
        Self {
            optimized_image,
            loading: Loading::default(),
            placeholder: Placeholder::default(),
            attrs,
        }
    }

    #[must_use]
    pub fn with_loading(mut self, loading: impl Into<Loading>) -> Self {
        self.loading = loading.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<Placeholder>) -> Self {
        self.placeholder = placeholder.into();
        self
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

impl Tag for ImgTag {
    fn render(&self) -> Markup {
        warn_unknown_modes(&self.loading, &self.placeholder);
        let attrs = swap_lazy_load_attrs(
            &self.loading,
            &self.placeholder,
            &self.optimized_image,
            self.attrs.clone(),
        );
        void_element("img", &attrs)
    }
}

crate::tag::impl_tag_display!(ImgTag);

impl From<OptimizedImage> for ImgTag {
    fn from(optimized_image: OptimizedImage) -> Self {
        Self::new(optimized_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> OptimizedImage {
        serde_json::from_str(
            r#"{
                "optimizedImageUrls": {"400": "a400.jpg", "800": "a800.jpg"},
                "placeholderWidth": 400,
                "placeholderHeight": 300,
                "placeholder": "/9j/4AAQ"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_eager_img() {
        let html = ImgTag::new(image())
            .merge_attrs([("alt", "A robot")])
            .to_html_string();
        assert_eq!(
            html,
            r#"<img width="400" height="300" src="a400.jpg" srcset="a400.jpg 400w, a800.jpg 800w" sizes="100vw" alt="A robot"/>"#
        );
    }

    #[test]
    fn test_unknown_modes_render_eagerly() {
        let _ = env_logger::builder().is_test(true).try_init();
        let tag = ImgTag::new(image())
            .with_loading("whenever")
            .with_placeholder("blurhash");
        assert_eq!(tag.to_html_string(), ImgTag::new(image()).to_html_string());
    }

    #[test]
    fn test_lazy_sizes_img_with_image_placeholder() {
        let html = ImgTag::new(image())
            .with_loading(Loading::LazySizes)
            .with_placeholder("image")
            .to_html_string();
        assert!(html.contains(r#"class="lazyload""#));
        assert!(html.contains(r#"src="data:image/jpeg;base64,/9j/4AAQ""#));
        assert!(html.contains(r#"data-src="a400.jpg""#));
        assert!(html.contains(r#"data-sizes="100vw""#));
        assert!(!html.contains(" sizes="));
        // lazysizes leaves native lazy loading alone
        assert!(!html.contains("loading="));
    }
}
