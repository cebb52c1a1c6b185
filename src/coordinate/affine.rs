//! Affine transform mapping grid indices to CRS coordinates

use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Six-parameter affine transform
///
/// Maps a pixel (col, row) to `x = a * col + b * row + c` and
/// `y = d * col + e * row + f`. For north-up rasters `b` and `d` are zero
/// and `e` is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        AffineTransform { a, b, c, d, e, f }
    }

    /// Create a transform from GDAL geotransform coefficients
    ///
    /// # Arguments
    /// * `geotransform` - [origin_x, pixel_width, row_rotation, origin_y, col_rotation, pixel_height]
    pub fn from_gdal(geotransform: [f64; 6]) -> Self {
        let [c, a, b, f, d, e] = geotransform;
        AffineTransform { a, b, c, d, e, f }
    }

    /// Parse a transform from a string (format: "a,b,c,d,e,f")
    pub fn from_string(transform_str: &str) -> ProjkitResult<Self> {
        let values: Vec<f64> = transform_str.split(',')
            .map(|part| part.trim().parse::<f64>()
                .map_err(|_| ProjkitError::TypeError(format!("Invalid affine coefficient: {}", part.trim()))))
            .collect::<ProjkitResult<_>>()?;

        match values.as_slice() {
            &[a, b, c, d, e, f] => Ok(AffineTransform::new(a, b, c, d, e, f)),
            _ => Err(ProjkitError::InvalidArgument(
                "Affine transform must have 6 comma-separated values".to_string())),
        }
    }

    /// X resolution (pixel width)
    pub fn xres(&self) -> f64 {
        self.a
    }

    /// Y resolution (pixel height, typically negative)
    pub fn yres(&self) -> f64 {
        self.e
    }

    /// X coordinate of the grid origin
    pub fn xoff(&self) -> f64 {
        self.c
    }

    /// Y coordinate of the grid origin
    pub fn yoff(&self) -> f64 {
        self.f
    }

    /// Map a grid position to CRS coordinates
    pub fn apply(&self, col: f64, row: f64) -> (f64, f64) {
        (
            self.a * col + self.b * row + self.c,
            self.d * col + self.e * row + self.f,
        )
    }
}
