/// Machining policy thresholds.
///
/// Every numeric limit the engine consults lives here so shop policy is
/// tuned in one place rather than inside individual checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Minimum material between features (mm).
    pub min_wall_thickness: f64,
    /// Smallest machinable hole diameter (mm).
    pub min_hole_diameter: f64,
    /// Depth/diameter ratio beyond which drilling needs special tooling.
    pub max_hole_depth_ratio: f64,
    /// Smallest machinable fillet radius (mm).
    pub min_fillet_radius: f64,
    /// Fillet radius cap as a fraction of the smallest part dimension.
    pub max_fillet_radius_ratio: f64,
    /// Smallest stock dimension that clamps stably (mm).
    pub min_part_dimension: f64,
    /// Aspect ratio beyond which thin stock risks chatter.
    pub max_aspect_ratio: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_wall_thickness: 2.0,
            min_hole_diameter: 1.0,
            max_hole_depth_ratio: 10.0,
            min_fillet_radius: 0.5,
            max_fillet_radius_ratio: 0.5,
            min_part_dimension: 10.0,
            max_aspect_ratio: 20.0,
        }
    }
}

impl Limits {
    /// Minimum clearance from a hole wall to the nearest stock edge.
    ///
    /// Edge clearance is a warning while pairwise hole interference is an
    /// error. The asymmetry is shop policy, not an oversight.
    pub fn min_edge_distance(&self, hole_diameter: f64) -> f64 {
        hole_diameter.max(self.min_wall_thickness)
    }
}
