#![warn(clippy::all)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod attrs;
pub mod error;
pub mod modes;
pub mod optimized_image;
pub mod options;
pub mod placeholder;
pub mod tag;

pub use crate::attrs::Attrs;
pub use crate::modes::{Loading, Placeholder};
pub use crate::optimized_image::OptimizedImage;
pub use crate::tag::img_tag::ImgTag;
pub use crate::tag::link_preload_tag::LinkPreloadTag;
pub use crate::tag::picture_tag::PictureTag;
pub use crate::tag::{Markup, Tag};

use crate::error::AppError;
use crate::options::{Attr, Options, TagKind};

use std::fs::read_to_string;
use std::path::Path;

/// Reads an optimized image descriptor from a JSON file
pub fn load_optimized_image(path: &Path) -> Result<OptimizedImage, AppError> {
    debug!("Reading descriptor {}", path.to_string_lossy());
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| AppError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

fn to_attrs(attrs: &[Attr]) -> Attrs {
    attrs
        .iter()
        .map(|Attr(name, value)| (name.as_str(), value.as_str()))
        .collect()
}

/// Builds and renders the tag the options describe
pub fn render_tag(options: &Options) -> Result<Markup, AppError> {
    let optimized_image = load_optimized_image(&options.descriptor)?;

    let markup = match options.tag {
        TagKind::Picture => {
            let mut tag = PictureTag::new(optimized_image)
                .with_loading(options.loading.clone())
                .with_placeholder(options.placeholder.clone())
                .merge_picture_attrs(to_attrs(&options.picture_attrs));
            for art_direction in &options.art_directions {
                let optimized_image = load_optimized_image(&art_direction.path)?;
                tag = tag.add_art_direction(
                    &optimized_image,
                    [("media", art_direction.media.as_str())],
                );
            }
            tag.merge_srcset_attrs(to_attrs(&options.srcset_attrs))
                .merge_img_attrs(to_attrs(&options.img_attrs))
                .render()
        }
        TagKind::Img => ImgTag::new(optimized_image)
            .with_loading(options.loading.clone())
            .with_placeholder(options.placeholder.clone())
            .merge_attrs(to_attrs(&options.img_attrs))
            .render(),
        TagKind::LinkPreload => LinkPreloadTag::new(&optimized_image)
            .merge_attrs(to_attrs(&options.img_attrs))
            .render(),
    };
    Ok(markup)
}
