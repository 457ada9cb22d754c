use structopt::StructOpt;

use std::path::PathBuf;

use crate::error::AppError;
use crate::modes::{Loading, Placeholder};

/// A single `name=value` attribute
#[derive(Debug, PartialEq, Clone)]
pub struct Attr(pub String, pub String);

impl std::str::FromStr for Attr {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok(Self(name.trim().to_owned(), value.to_owned()))
            }
            _ => Err(AppError::InvalidAttribute {
                input: s.to_owned(),
            }),
        }
    }
}

/// An art direction crop: `media=path/to/descriptor.json`
#[derive(Debug, PartialEq, Clone)]
pub struct ArtDirection {
    pub media: String,
    pub path: PathBuf,
}

impl std::str::FromStr for ArtDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((media, path)) if !path.is_empty() => Ok(Self {
                media: media.trim().to_owned(),
                path: PathBuf::from(path),
            }),
            _ => Err(AppError::InvalidArtDirection {
                input: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum TagKind {
    #[default]
    Picture,
    Img,
    LinkPreload,
}

impl std::str::FromStr for TagKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "picture" => Ok(Self::Picture),
            "img" => Ok(Self::Img),
            "link-preload" => Ok(Self::LinkPreload),
            _ => Err(AppError::UnknownTagKind {
                input: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "picture-tag",
    about = "Render responsive image markup from an optimized image descriptor"
)]
pub struct Options {
    /// The path to the optimized image descriptor (JSON)
    #[structopt(parse(from_os_str))]
    pub descriptor: PathBuf,

    /// The tag to render: picture, img or link-preload
    #[structopt(short = "t", long = "tag", default_value = "picture")]
    pub tag: TagKind,

    /// The loading scheme: eager, lazy, lazySizes or lazySizesFallback
    #[structopt(short = "l", long = "loading", default_value = "eager")]
    pub loading: Loading,

    /// The lazy loading placeholder: box, color, image or silhouette
    #[structopt(short = "p", long = "placeholder", default_value = "box")]
    pub placeholder: Placeholder,

    /// An attribute for the <picture>, as name=value
    #[structopt(long = "picture-attr", number_of_values = 1)]
    pub picture_attrs: Vec<Attr>,

    /// An attribute for every <source>, as name=value
    #[structopt(long = "srcset-attr", number_of_values = 1)]
    pub srcset_attrs: Vec<Attr>,

    /// An attribute for the <img> (or the <link> of link-preload), as name=value
    #[structopt(long = "img-attr", number_of_values = 1)]
    pub img_attrs: Vec<Attr>,

    /// An extra crop used when a media query matches, as media=path/to/descriptor.json
    #[structopt(long = "art-direction", number_of_values = 1)]
    pub art_directions: Vec<ArtDirection>,
}
