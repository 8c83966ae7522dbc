//! Circle quality scoring
//!
//! The drawn shape is approximated by the union of disks centered on the dot,
//! one per move sample, with the sample's distance as radius. Quality compares
//! the horizontal extent of that union with the diameter of the target circle.
//! It is a cheap proxy, not a comparison of the traced path itself.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::Point;

/// Accumulated union of disks, tracked as its bounding box
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Silhouette {
    bounds: Option<(DVec2, DVec2)>,
    disks: usize,
}

impl Silhouette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the disk of `radius` centered at `center`
    pub fn add_disk(&mut self, center: Point, radius: f64) {
        let r = DVec2::splat(radius.abs());
        let (lo, hi) = (center - r, center + r);
        self.bounds = Some(match self.bounds {
            Some((min, max)) => (min.min(lo), max.max(hi)),
            None => (lo, hi),
        });
        self.disks += 1;
    }

    /// Bounding box as (min, max), `None` while empty
    pub fn bounding_box(&self) -> Option<(DVec2, DVec2)> {
        self.bounds
    }

    /// Width of the bounding box (0 when empty)
    pub fn width(&self) -> f64 {
        self.bounds.map(|(min, max)| max.x - min.x).unwrap_or(0.0)
    }

    /// Number of disks added
    pub fn len(&self) -> usize {
        self.disks
    }

    pub fn is_empty(&self) -> bool {
        self.disks == 0
    }

    pub fn clear(&mut self) {
        self.bounds = None;
        self.disks = 0;
    }
}

/// Quality of the silhouette against a circle of `target_radius`, in [0, 1]
pub fn quality_score(silhouette: &Silhouette, target_radius: f64) -> f64 {
    if silhouette.is_empty() || target_radius <= 0.0 {
        return 0.0;
    }
    let user_perimeter = silhouette.width() * PI;
    let expected_perimeter = 2.0 * target_radius * PI;

    let quality = 1.0 - (user_perimeter - expected_perimeter).abs() / expected_perimeter;
    quality.max(0.0)
}

/// How close a live radius is to the target, as an unclamped percentage
///
/// 100 means on the target circle. Values above 100 never occur; values below
/// 0 do once the error exceeds the target radius.
#[inline]
pub fn color_percentage(current_radius: f64, target_radius: f64) -> f64 {
    let error = (current_radius - target_radius).abs();
    (1.0 - error / target_radius) * 100.0
}
