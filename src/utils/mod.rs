//! Utility modules for common functionality
//!
//! This module provides the bounds, alignment and reprojection helpers.

pub mod bounds_utils;
pub mod alignment_utils;
pub mod reprojection_utils;
#[cfg(test)]
mod tests;
