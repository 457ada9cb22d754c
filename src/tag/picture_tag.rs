use maud::{Markup, PreEscaped};

use crate::attrs::{element, void_element, Attrs};
use crate::modes::{Loading, Placeholder};
use crate::optimized_image::OptimizedImage;
use crate::tag::lazy::{swap_lazy_load_attrs, warn_unknown_modes};
use crate::tag::Tag;

/// Builds a `<picture>` with a `<source>` per format (and per art direction crop) and a
/// fallback `<img>`.
///
/// ```
/// use picture_tag::{OptimizedImage, PictureTag, Tag};
///
/// let image: OptimizedImage = serde_json::from_str(
///     r#"{"optimizedImageUrls": {"400": "a400.jpg"}, "placeholderWidth": 400, "placeholderHeight": 300}"#,
/// )
/// .unwrap();
/// let markup = PictureTag::new(image)
///     .merge_img_attrs([("alt", "A robot")])
///     .render();
/// assert!(markup.into_string().contains(r#"alt="A robot""#));
/// ```
#[derive(Debug, Clone)]
pub struct PictureTag {
    optimized_image: OptimizedImage,
    loading: Loading,
    placeholder: Placeholder,
    picture_attrs: Attrs,
    srcset_attrs: Vec<Attrs>,
    img_attrs: Attrs,
}

impl PictureTag {
    pub fn new(optimized_image: OptimizedImage) -> Self {
        let img_attrs = Attrs::from([
            ("class", String::new()),
            ("style", String::new()),
            ("width", optimized_image.placeholder_width.to_string()),
            ("height", optimized_image.placeholder_height.to_string()),
            (
                "src",
                optimized_image.first_url().unwrap_or_default().to_owned(),
            ),
            ("loading", String::new()),
        ]);
        let mut tag = Self {
            optimized_image,
            loading: Loading::default(),
            placeholder: Placeholder::default(),
            picture_attrs: Attrs::new(),
            srcset_attrs: Vec::new(),
            img_attrs,
        };
        let srcset_attrs = source_attrs(&tag.optimized_image, Attrs::new());
        tag.srcset_attrs.extend(srcset_attrs);
        tag
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

    /// Merge attributes into the `<picture>`
    #[must_use]
    pub fn merge_picture_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.picture_attrs.merge(attrs);
        self
    }

    /// Merge attributes into every `<source>` added so far. Sources added afterwards by
    /// [`PictureTag::add_art_direction`] are not affected.
    #[must_use]
    pub fn merge_srcset_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        let attrs = attrs.into();
        for srcset_attrs in &mut self.srcset_attrs {
            srcset_attrs.merge(attrs.clone());
        }
        self
    }

    /// Merge attributes into the `<img>`
    #[must_use]
    pub fn merge_img_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.img_attrs.merge(attrs);
        self
    }

    /// Add `<source>`s for a differently cropped image, typically with a `media` query in
    /// `srcset_attrs` saying when to use it
    #[must_use]
    pub fn add_art_direction(
        mut self,
        optimized_image: &OptimizedImage,
        srcset_attrs: impl Into<Attrs>,
    ) -> Self {
        let sources = source_attrs(optimized_image, srcset_attrs.into());
        self.srcset_attrs.extend(sources);
        self
    }

    pub fn optimized_image(&self) -> &OptimizedImage {
        &self.optimized_image
    }

    pub fn loading(&self) -> &Loading {
        &self.loading
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    pub fn picture_attrs(&self) -> &Attrs {
        &self.picture_attrs
    }

    pub fn srcset_attrs(&self) -> &[Attrs] {
        &self.srcset_attrs
    }

    pub fn img_attrs(&self) -> &Attrs {
        &self.img_attrs
    }

    fn lazy(&self, attrs: &Attrs) -> Attrs {
        swap_lazy_load_attrs(
            &self.loading,
            &self.placeholder,
            &self.optimized_image,
            attrs.clone(),
        )
    }
}

impl Tag for PictureTag {
    fn render(&self) -> Markup {
        warn_unknown_modes(&self.loading, &self.placeholder);

        let mut content = String::new();
        for attrs in &self.srcset_attrs {
            content.push_str(&void_element("source", &self.lazy(attrs)).0);
        }
        content.push_str(&void_element("img", &self.lazy(&self.img_attrs)).0);

        debug!(
            "Rendered <picture> with {} sources, loading {}",
            self.srcset_attrs.len(),
            self.loading
        );
        element("picture", &self.picture_attrs, &PreEscaped(content))
    }
}

crate::tag::impl_tag_display!(PictureTag);

impl From<OptimizedImage> for PictureTag {
    fn from(optimized_image: OptimizedImage) -> Self {
        Self::new(optimized_image)
    }
}

/// The `<source>` attributes for an image: a WebP one if there are WebP variants, then one
/// for the primary format. `overrides` is merged on top of each.
fn source_attrs(optimized_image: &OptimizedImage, overrides: Attrs) -> Vec<Attrs> {
    let width = optimized_image.placeholder_width.to_string();
    let height = optimized_image.placeholder_height.to_string();
    let mut sources = Vec::with_capacity(2);

    if optimized_image.has_web_p() {
        sources.push(
            Attrs::from([
                ("media", String::new()),
                (
                    "srcset",
                    OptimizedImage::srcset_from_urls(&optimized_image.optimized_web_p_image_urls),
                ),
                ("type", "image/webp".to_owned()),
                ("sizes", "100vw".to_owned()),
                ("width", width.clone()),
                ("height", height.clone()),
            ])
            .merged(overrides.clone()),
        );
    }
    sources.push(
        Attrs::from([
            ("media", String::new()),
            (
                "srcset",
                OptimizedImage::srcset_from_urls(&optimized_image.optimized_image_urls),
            ),
            ("sizes", "100vw".to_owned()),
            ("width", width),
            ("height", height),
        ])
        .merged(overrides),
    );
    debug!("Derived {} <source> attribute sets", sources.len());
    sources
}
