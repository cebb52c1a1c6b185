//! Point set structure for batches of coordinates

use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Two parallel coordinate sequences of shape (2, N)
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointSet {
    /// Create a point set from two parallel sequences
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> ProjkitResult<Self> {
        if xs.len() != ys.len() {
            return Err(ProjkitError::InvalidArgument(format!(
                "pts must be of shape (2, N), got rows of length {} and {}",
                xs.len(), ys.len()
            )));
        }

        Ok(PointSet { xs, ys })
    }

    /// Create a point set from a row-major array, which must have exactly two rows
    pub fn from_rows(rows: &[Vec<f64>]) -> ProjkitResult<Self> {
        match rows {
            [xs, ys] => PointSet::new(xs.clone(), ys.clone()),
            _ => Err(ProjkitError::InvalidArgument(format!(
                "pts must be of shape (2, N), got {} rows", rows.len()
            ))),
        }
    }

    /// Create a point set from (x, y) pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let (xs, ys) = pairs.iter().copied().unzip();
        PointSet { xs, ys }
    }

    /// Parse a point set from a string (format: "x,y;x,y;...")
    pub fn from_string(points_str: &str) -> ProjkitResult<Self> {
        let mut pairs = Vec::new();

        for pair in points_str.split(';').filter(|p| !p.trim().is_empty()) {
            let parts: Vec<&str> = pair.split(',').collect();
            if parts.len() != 2 {
                return Err(ProjkitError::InvalidArgument(format!(
                    "Point must be in format 'x,y': {}", pair
                )));
            }

            let x = parts[0].trim().parse::<f64>()
                .map_err(|_| ProjkitError::TypeError(format!("Invalid x coordinate: {}", parts[0].trim())))?;
            let y = parts[1].trim().parse::<f64>()
                .map_err(|_| ProjkitError::TypeError(format!("Invalid y coordinate: {}", parts[1].trim())))?;
            pairs.push((x, y));
        }

        Ok(PointSet::from_pairs(&pairs))
    }

    /// X coordinates (easting or longitude, latitude for lat/lon sets)
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Y coordinates (northing or latitude, longitude for lat/lon sets)
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if the set holds no points
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over (x, y) pairs
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Swap the two rows, e.g. (lon, lat) into (lat, lon)
    pub fn swapped(self) -> Self {
        PointSet { xs: self.ys, ys: self.xs }
    }

    /// Round every coordinate to the given number of decimals
    pub fn rounded(self, decimals: u32) -> Self {
        PointSet {
            xs: self.xs.into_iter().map(|v| round_to(v, decimals)).collect(),
            ys: self.ys.into_iter().map(|v| round_to(v, decimals)).collect(),
        }
    }
}

/// Round a value to a number of decimal places
///
/// Values that cannot be scaled without overflowing are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
