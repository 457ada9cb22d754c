use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The loading scheme a tag is rendered with
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loading {
    #[default]
    Eager,
    /// Native browser lazy loading
    Lazy,
    /// [lazysizes](https://github.com/aFarkas/lazysizes) driven loading
    LazySizes,
    /// lazysizes with native lazy loading as a fallback
    LazySizesFallback,
    /// Anything else. Renders the same as `Eager`.
    Unknown(String),
}

impl Loading {
    /// Whether the lazy-load attribute rewrite applies
    pub fn is_lazy(&self) -> bool {
        matches!(
            self,
            Loading::Lazy | Loading::LazySizes | Loading::LazySizesFallback
        )
    }
}

impl From<&str> for Loading {
    fn from(value: &str) -> Self {
        match value {
            "eager" => Loading::Eager,
            "lazy" => Loading::Lazy,
            "lazySizes" => Loading::LazySizes,
            "lazySizesFallback" => Loading::LazySizesFallback,
            other => Loading::Unknown(other.to_owned()),
        }
    }
}

impl FromStr for Loading {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Loading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loading::Eager => f.write_str("eager"),
            Loading::Lazy => f.write_str("lazy"),
            Loading::LazySizes => f.write_str("lazySizes"),
            Loading::LazySizesFallback => f.write_str("lazySizesFallback"),
            Loading::Unknown(value) => f.write_str(value),
        }
    }
}

/// The kind of image shown in place of the real one until it is lazy loaded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Placeholder {
    #[default]
    Box,
    /// A box filled with the image's dominant colour
    Color,
    /// A tiny blurred preview
    Image,
    Silhouette,
    /// Anything else. Renders the same as `Box`.
    Unknown(String),
}

impl From<&str> for Placeholder {
    fn from(value: &str) -> Self {
        match value {
            "box" => Placeholder::Box,
            "color" => Placeholder::Color,
            "image" => Placeholder::Image,
            "silhouette" => Placeholder::Silhouette,
            other => Placeholder::Unknown(other.to_owned()),
        }
    }
}

impl FromStr for Placeholder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Box => f.write_str("box"),
            Placeholder::Color => f.write_str("color"),
            Placeholder::Image => f.write_str("image"),
            Placeholder::Silhouette => f.write_str("silhouette"),
            Placeholder::Unknown(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_from_str() {
        assert_eq!(Loading::from("lazySizesFallback"), Loading::LazySizesFallback);
        assert_eq!(
            Loading::from("lazysizes"),
            Loading::Unknown("lazysizes".to_owned())
        );
        assert_eq!("lazy".parse::<Loading>(), Ok(Loading::Lazy));
    }

    #[test]
    fn test_unknown_loading_is_not_lazy() {
        assert!(!Loading::from("sometimes").is_lazy());
        assert!(!Loading::Eager.is_lazy());
        assert!(Loading::LazySizes.is_lazy());
    }

    #[test]
    fn test_display_round_trips_the_name() {
        assert_eq!(Loading::LazySizes.to_string(), "lazySizes");
        assert_eq!(Placeholder::Silhouette.to_string(), "silhouette");
        assert_eq!(Placeholder::from("blurhash").to_string(), "blurhash");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Loading::default(), Loading::Eager);
        assert_eq!(Placeholder::default(), Placeholder::Box);
    }
}
