//! Rewrites an element's attributes so a lazy loading runtime (the browser itself or
//! lazysizes) swaps the real image in later.

use crate::attrs::Attrs;
use crate::modes::{Loading, Placeholder};
use crate::optimized_image::OptimizedImage;

/// Marker class lazysizes looks for
pub const LAZYLOAD_CLASS: &str = "lazyload";

/// The placeholder `src` for an element of the given size
pub fn lazy_load_src(
    optimized_image: &OptimizedImage,
    placeholder: &Placeholder,
    width: u32,
    height: u32,
) -> String {
    match placeholder {
        Placeholder::Image => optimized_image.placeholder_image(),
        Placeholder::Silhouette => optimized_image.placeholder_silhouette(),
        Placeholder::Color => {
            optimized_image.placeholder_box(width, height, optimized_image.dominant_color())
        }
        Placeholder::Box | Placeholder::Unknown(_) => {
            optimized_image.placeholder_box(width, height, None)
        }
    }
}

/// Logs the modes that will fall back to eager loading or a box placeholder
pub fn warn_unknown_modes(loading: &Loading, placeholder: &Placeholder) {
    if let Loading::Unknown(loading) = loading {
        warn!("Unrecognised loading scheme {:?}, rendering eagerly", loading);
    }
    if let Placeholder::Unknown(placeholder) = placeholder {
        warn!("Unrecognised placeholder {:?}, using a box", placeholder);
    }
}

fn dimension(attrs: &Attrs, name: &str, fallback: u32) -> u32 {
    attrs
        .get(name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}

/// Swap `src`/`srcset` for placeholders, keeping the real values in `data-*` attributes.
/// Does nothing unless `loading` is one of the lazy schemes.
pub fn swap_lazy_load_attrs(
    loading: &Loading,
    placeholder: &Placeholder,
    optimized_image: &OptimizedImage,
    mut attrs: Attrs,
) -> Attrs {
    if !loading.is_lazy() {
        return attrs;
    }
    let width = dimension(&attrs, "width", optimized_image.placeholder_width);
    let height = dimension(&attrs, "height", optimized_image.placeholder_height);
    let placeholder_src = lazy_load_src(optimized_image, placeholder, width, height);

    if let Some(class) = attrs.get("class") {
        let class = [class, LAZYLOAD_CLASS].join(" ").trim().to_owned();
        attrs.set("class", class);
    }
    if let Some(style) = attrs.get("style") {
        if !attrs.is_empty_value("src") {
            let background =
                format!("background-image:url({placeholder_src}); background-size: cover;");
            let style = match style.trim().trim_end_matches(';').trim_end() {
                "" => background,
                style => [style, &background].join("; "),
            };
            attrs.set("style", style);
        }
    }
    if matches!(loading, Loading::Lazy | Loading::LazySizesFallback) && attrs.contains("loading") {
        attrs.set("loading", "lazy");
    }
    // lazysizes works out `sizes` itself
    if matches!(loading, Loading::LazySizes | Loading::LazySizesFallback)
        && !attrs.is_empty_value("sizes")
    {
        let sizes = attrs.get("sizes").unwrap_or_default().to_owned();
        attrs.set("data-sizes", sizes);
        attrs.set("sizes", "");
    }
    for name in ["srcset", "src"] {
        if !attrs.is_empty_value(name) {
            let value = attrs.get(name).unwrap_or_default().to_owned();
            attrs.set(["data-", name].join(""), value);
            attrs.set(name, placeholder_src.clone());
        }
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::{box_svg, svg_data_uri};

    fn image() -> OptimizedImage {
        OptimizedImage::new(
            [("400", "a400.jpg")]
                .iter()
                .map(|(size, url)| (size.to_string(), url.to_string()))
                .collect(),
            400,
            300,
        )
        .with_color_palette(vec!["#102030".to_owned()])
    }

    fn img_attrs() -> Attrs {
        Attrs::from([
            ("class", ""),
            ("style", ""),
            ("width", "400"),
            ("height", "300"),
            ("src", "a400.jpg"),
            ("loading", ""),
        ])
    }

    #[test]
    fn test_eager_and_unknown_are_untouched() {
        for loading in [Loading::Eager, Loading::from("whenever")] {
            let attrs = swap_lazy_load_attrs(&loading, &Placeholder::Box, &image(), img_attrs());
            assert_eq!(attrs, img_attrs());
        }
    }

    #[test]
    fn test_lazy_moves_src_and_marks_class() {
        let attrs = swap_lazy_load_attrs(&Loading::Lazy, &Placeholder::Box, &image(), img_attrs());
        let placeholder = svg_data_uri(&box_svg(400, 300, "#CCC"));
        assert_eq!(attrs.get("data-src"), Some("a400.jpg"));
        assert_eq!(attrs.get("src"), Some(placeholder.as_str()));
        assert_eq!(attrs.get("class"), Some("lazyload"));
        assert_eq!(attrs.get("loading"), Some("lazy"));
        assert!(attrs
            .get("style")
            .unwrap()
            .starts_with("background-image:url(data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_lazy_sizes_moves_srcset_and_sizes() {
        let attrs = Attrs::from([
            ("media", ""),
            ("srcset", "a400.jpg 400w"),
            ("sizes", "100vw"),
            ("width", "400"),
            ("height", "300"),
        ]);
        let attrs = swap_lazy_load_attrs(&Loading::LazySizes, &Placeholder::Box, &image(), attrs);
        assert_eq!(attrs.get("data-srcset"), Some("a400.jpg 400w"));
        assert_eq!(attrs.get("data-sizes"), Some("100vw"));
        assert!(attrs.is_empty_value("sizes"));
        assert!(attrs.get("srcset").unwrap().starts_with("data:image/svg+xml"));
        assert!(!attrs.contains("class"));
        assert!(!attrs.contains("loading"));
    }

    #[test]
    fn test_existing_style_is_kept_separate() {
        for style in ["color:red", "color:red;", " color:red ; "] {
            let attrs = img_attrs().merged([("style", style)]);
            let attrs = swap_lazy_load_attrs(&Loading::Lazy, &Placeholder::Box, &image(), attrs);
            let style = attrs.get("style").unwrap();
            assert!(style.starts_with("color:red; background-image:url(data:image/svg+xml;base64,"));
            assert!(style.ends_with("background-size: cover;"));
        }
    }

    #[test]
    fn test_native_lazy_keeps_sizes() {
        let attrs = Attrs::from([("srcset", "a400.jpg 400w"), ("sizes", "100vw")]);
        let attrs = swap_lazy_load_attrs(&Loading::Lazy, &Placeholder::Box, &image(), attrs);
        assert_eq!(attrs.get("sizes"), Some("100vw"));
        assert!(!attrs.contains("data-sizes"));
    }

    #[test]
    fn test_existing_class_is_appended_to() {
        let attrs = img_attrs().merged([("class", "hero")]);
        let attrs =
            swap_lazy_load_attrs(&Loading::LazySizesFallback, &Placeholder::Box, &image(), attrs);
        assert_eq!(attrs.get("class"), Some("hero lazyload"));
        assert_eq!(attrs.get("loading"), Some("lazy"));
    }

    #[test]
    fn test_placeholder_is_sized_to_the_element() {
        let attrs = img_attrs().merged([("width", "40"), ("height", "auto")]);
        let attrs = swap_lazy_load_attrs(&Loading::Lazy, &Placeholder::Color, &image(), attrs);
        assert_eq!(
            attrs.get("src"),
            Some(svg_data_uri(&box_svg(40, 300, "#102030")).as_str())
        );
    }

    #[test]
    fn test_unknown_placeholder_is_a_box() {
        assert_eq!(
            lazy_load_src(&image(), &Placeholder::from("blurhash"), 10, 10),
            lazy_load_src(&image(), &Placeholder::Box, 10, 10)
        );
    }
}
