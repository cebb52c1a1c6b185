//! CRS comparison

use log::debug;

use crate::coordinate::Crs;
use crate::projection::errors::ProjkitResult;

/// Check whether two CRS descriptors are exactly the same
///
/// Both descriptors are normalized first, so "epsg:4326" and "EPSG:4326"
/// match, as do PROJ strings differing only in whitespace or a trailing
/// "+type=crs". Descriptors that are numerically equivalent but written
/// differently (an EPSG code and the matching PROJ string) do not match.
pub fn compare_proj(crs1: &Crs, crs2: &Crs) -> bool {
    let same = crs1.canonical() == crs2.canonical();
    debug!("Comparing {} with {}: {}", crs1, crs2, if same { "same" } else { "different" });
    same
}

/// Compare two CRS descriptors given as text
///
/// Fails with an invalid-argument error if either text is not a
/// recognized descriptor.
pub fn compare_proj_str(crs1: &str, crs2: &str) -> ProjkitResult<bool> {
    let crs1 = Crs::from_string(crs1)?;
    let crs2 = Crs::from_string(crs2)?;
    Ok(compare_proj(&crs1, &crs2))
}
