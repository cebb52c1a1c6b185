//! Bounding box structure for defining extents

use geo_types::{coord, Rect};

use crate::projection::errors::{ProjkitError, ProjkitResult};

/// An axis-aligned extent in some coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub left: f64,
    /// Minimum Y coordinate
    pub bottom: f64,
    /// Maximum X coordinate
    pub right: f64,
    /// Maximum Y coordinate
    pub top: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        BoundingBox { left, bottom, right, top }
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> ProjkitResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(ProjkitError::InvalidArgument(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let mut values = [0.0; 4];
        for (value, (part, name)) in values.iter_mut().zip(parts.iter().zip(["min_x", "min_y", "max_x", "max_y"])) {
            *value = part.trim().parse::<f64>()
                .map_err(|_| ProjkitError::TypeError(format!("Invalid {} value: {}", name, part.trim())))?;
        }

        Ok(BoundingBox::from(values))
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Check if this bounding box fully contains another one
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.left <= other.left && self.right >= other.right &&
            self.bottom <= other.bottom && self.top >= other.top
    }

    /// Check whether the box has zero width or height
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Get the bounds as a (left, bottom, right, top) tuple
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.left, self.bottom, self.right, self.top)
    }

    /// Get the bounds as a geo rectangle
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.left, y: self.bottom },
            coord! { x: self.right, y: self.top },
        )
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(values: [f64; 4]) -> Self {
        BoundingBox::new(values[0], values[1], values[2], values[3])
    }
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from((left, bottom, right, top): (f64, f64, f64, f64)) -> Self {
        BoundingBox::new(left, bottom, right, top)
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.left, bbox.bottom, bbox.right, bbox.top]
    }
}
