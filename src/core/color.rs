//! Ball colors and the level palette.
//!
//! Level data names colors with string tags (`"blue"`, `"red"`). The
//! engine interns tags into compact `ColorId`s against the level's
//! declared palette. Balls of the same color are interchangeable; a ball
//! has no identity beyond its color.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Interned ball color.
///
/// Meaningful only relative to the [`Palette`] that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(pub u8);

impl ColorId {
    /// Create a new color ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// A level's declared color list.
///
/// Maps string tags to [`ColorId`] and back. Built once from the level's
/// `colors` array; resolving a tag outside the palette fails rather than
/// extending it.
///
/// ## Example
///
/// ```
/// use tubesort::core::Palette;
///
/// let palette = Palette::from_tags(["blue", "red"]);
///
/// let blue = palette.resolve("blue").unwrap();
/// assert_eq!(palette.tag(blue), Some("blue"));
/// assert!(palette.resolve("chartreuse").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Palette {
    tags: Vec<String>,
    by_tag: FxHashMap<String, ColorId>,
}

impl Palette {
    /// Build a palette from color tags, in declaration order.
    ///
    /// Duplicate tags collapse to the first occurrence. Panics past 256
    /// distinct tags; level validation rejects oversized palettes before
    /// any palette is built, so this only trips on a crate-internal
    /// misuse.
    #[must_use]
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut palette = Self::default();
        for tag in tags {
            let tag = tag.into();
            if palette.by_tag.contains_key(&tag) {
                continue;
            }
            assert!(palette.tags.len() <= u8::MAX as usize, "At most 256 colors supported");
            let id = ColorId::new(palette.tags.len() as u8);
            palette.by_tag.insert(tag.clone(), id);
            palette.tags.push(tag);
        }
        palette
    }

    /// Resolve a color tag to its interned ID.
    #[must_use]
    pub fn resolve(&self, tag: &str) -> Option<ColorId> {
        self.by_tag.get(tag).copied()
    }

    /// Get the tag for an interned color.
    #[must_use]
    pub fn tag(&self, id: ColorId) -> Option<&str> {
        self.tags.get(id.raw() as usize).map(String::as_str)
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if the palette declares no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let palette = Palette::from_tags(["blue", "red", "green"]);

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.resolve("blue"), Some(ColorId::new(0)));
        assert_eq!(palette.resolve("green"), Some(ColorId::new(2)));
        assert_eq!(palette.resolve("mauve"), None);
    }

    #[test]
    fn test_tag_round_trip() {
        let palette = Palette::from_tags(["blue", "red"]);

        let red = palette.resolve("red").unwrap();
        assert_eq!(palette.tag(red), Some("red"));
        assert_eq!(palette.tag(ColorId::new(9)), None);
    }

    #[test]
    fn test_duplicates_collapse() {
        let palette = Palette::from_tags(["blue", "blue", "red"]);

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.resolve("red"), Some(ColorId::new(1)));
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::from_tags(Vec::<String>::new());
        assert!(palette.is_empty());
        assert_eq!(palette.resolve("blue"), None);
    }
}
