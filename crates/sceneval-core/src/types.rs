//! Spatial and common types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in scene space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Extents of an element along each axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Name of the first negative or non-finite extent, if any
    pub fn invalid_axis(&self) -> Option<&'static str> {
        [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
        .map(|(name, _)| name)
    }
}

/// Output resolution in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Full HD, the reference resolution for complexity scoring
    pub const FULL_HD: Self = Self {
        width: 1920,
        height: 1080,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True when either axis is smaller than the corresponding axis of `min`
    pub fn is_below(&self, min: &Resolution) -> bool {
        self.width < min.width || self.height < min.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_below() {
        let min = Resolution::FULL_HD;
        assert!(Resolution::new(1280, 720).is_below(&min));
        assert!(Resolution::new(3840, 720).is_below(&min));
        assert!(!Resolution::new(1920, 1080).is_below(&min));
        assert!(!Resolution::new(3840, 2160).is_below(&min));
    }

    #[test]
    fn test_resolution_display_and_pixels() {
        let res = Resolution::new(1920, 1080);
        assert_eq!(res.to_string(), "1920x1080");
        assert_eq!(res.pixel_count(), 2_073_600);
    }

    #[test]
    fn test_dimensions_invalid_axis() {
        assert_eq!(Dimensions::new(1.0, 2.0, 0.0).invalid_axis(), None);
        assert_eq!(Dimensions::new(1.0, -2.0, 0.0).invalid_axis(), Some("height"));
        assert_eq!(Dimensions::new(f64::NAN, 1.0, 1.0).invalid_axis(), Some("width"));
    }
}
