pub mod img_tag;
pub(crate) mod lazy;
pub mod link_preload_tag;
pub mod picture_tag;

pub use maud::Markup;
use maud::PreEscaped;

/// Something that renders to a fragment of trusted HTML
pub trait Tag {
    /// Render the tag. The result is already escaped and must be emitted verbatim.
    fn render(&self) -> Markup {
        PreEscaped(String::new())
    }

    fn to_html_string(&self) -> String {
        self.render().into_string()
    }
}

/// Implements `Display` and `maud::Render` for a `Tag` in terms of `Tag::render`
macro_rules! impl_tag_display {
    ($tag:ty) => {
        impl std::fmt::Display for $tag {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::tag::Tag::render(self).0)
            }
        }

        impl maud::Render for $tag {
            fn render(&self) -> maud::Markup {
                $crate::tag::Tag::render(self)
            }
        }
    };
}
pub(crate) use impl_tag_display;
