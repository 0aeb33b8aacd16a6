use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;
use crate::features::{Fillet, Hole, MIN_FILLET_RADIUS, MIN_HOLE_DIAMETER};

/// Smallest stock dimension that clamps stably on the machine bed.
pub const MIN_DIMENSION: f64 = 10.0;
/// Largest stock dimension the machine envelope accepts.
pub const MAX_DIMENSION: f64 = 1000.0;

/// Base shape of a part. Only rectangular stock is supported today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Box,
}

/// Overall stock dimensions, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Construct dimensions, rejecting anything outside the machine envelope.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, SchemaError> {
        for (axis, value) in [("length", length), ("width", width), ("height", height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(SchemaError::DimensionOutOfRange {
                    axis,
                    value,
                    min: MIN_DIMENSION,
                    max: MAX_DIMENSION,
                });
            }
        }
        Ok(Self {
            length,
            width,
            height,
        })
    }

    pub fn smallest(&self) -> f64 {
        self.length.min(self.width).min(self.height)
    }

    pub fn largest(&self) -> f64 {
        self.length.max(self.width).max(self.height)
    }

    /// Largest ratio between any two dimensions.
    pub fn max_aspect_ratio(&self) -> f64 {
        self.largest() / self.smallest()
    }
}

/// Complete description of a manufacturable part.
///
/// A `PartSpec` is constructed once — either directly via `new` or by
/// merging interpreted intent with caller corrections — and is read-only
/// afterwards. A correction produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    #[serde(default)]
    pub shape: Shape,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub fillets: Vec<Fillet>,
    #[serde(default)]
    pub material: Option<String>,
}

impl PartSpec {
    /// Construct a part specification, checking every static constraint.
    pub fn new(
        shape: Shape,
        dimensions: Dimensions,
        holes: Vec<Hole>,
        fillets: Vec<Fillet>,
        material: Option<String>,
    ) -> Result<Self, SchemaError> {
        let spec = Self {
            shape,
            dimensions,
            holes,
            fillets,
            material,
        };
        spec.check_schema()?;
        Ok(spec)
    }

    /// Re-run the static schema checks.
    ///
    /// Specs built through `new` always pass; specs that arrived via
    /// deserialization go through this before the rules engine sees them.
    pub fn check_schema(&self) -> Result<(), SchemaError> {
        Dimensions::new(
            self.dimensions.length,
            self.dimensions.width,
            self.dimensions.height,
        )?;

        for (index, hole) in self.holes.iter().enumerate() {
            if hole.diameter <= 0.0 {
                return Err(SchemaError::NonPositiveHoleDiameter {
                    diameter: hole.diameter,
                });
            }
            if hole.diameter < MIN_HOLE_DIAMETER {
                return Err(SchemaError::HoleDiameterTooSmall {
                    diameter: hole.diameter,
                    min: MIN_HOLE_DIAMETER,
                });
            }
            if hole.depth <= 0.0 {
                return Err(SchemaError::NonPositiveHoleDepth { depth: hole.depth });
            }

            let half_length = self.dimensions.length / 2.0;
            let half_width = self.dimensions.width / 2.0;
            if hole.position.x.abs() > half_length {
                return Err(SchemaError::HoleOutsideLength {
                    index,
                    x: hole.position.x,
                    half_length,
                });
            }
            if hole.position.y.abs() > half_width {
                return Err(SchemaError::HoleOutsideWidth {
                    index,
                    y: hole.position.y,
                    half_width,
                });
            }
            if hole.depth > self.dimensions.height {
                return Err(SchemaError::HoleDeeperThanPart {
                    index,
                    depth: hole.depth,
                    height: self.dimensions.height,
                });
            }
        }

        for fillet in &self.fillets {
            if fillet.radius <= 0.0 {
                return Err(SchemaError::NonPositiveFilletRadius {
                    radius: fillet.radius,
                });
            }
            if fillet.radius < MIN_FILLET_RADIUS {
                return Err(SchemaError::FilletRadiusTooSmall {
                    radius: fillet.radius,
                    min: MIN_FILLET_RADIUS,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Position;

    #[test]
    fn dimensions_reject_out_of_range() {
        assert!(Dimensions::new(9.9, 50.0, 50.0).is_err());
        assert!(Dimensions::new(50.0, 50.0, 1000.1).is_err());
        assert!(Dimensions::new(10.0, 10.0, 10.0).is_ok());
        assert!(Dimensions::new(1000.0, 1000.0, 1000.0).is_ok());
    }

    #[test]
    fn hole_rejects_small_diameter() {
        let err = Hole::centered(0.5, 10.0).unwrap_err();
        assert!(matches!(err, SchemaError::HoleDiameterTooSmall { .. }));
    }

    #[test]
    fn part_rejects_hole_outside_bounds() {
        let dims = Dimensions::new(100.0, 50.0, 30.0).unwrap();
        let hole = Hole::new(5.0, 10.0, Position::new(60.0, 0.0, 0.0)).unwrap();
        let err = PartSpec::new(Shape::Box, dims, vec![hole], Vec::new(), None).unwrap_err();
        assert!(matches!(err, SchemaError::HoleOutsideLength { index: 0, .. }));
    }

    #[test]
    fn part_rejects_hole_deeper_than_stock() {
        let dims = Dimensions::new(100.0, 50.0, 30.0).unwrap();
        let hole = Hole::centered(5.0, 31.0).unwrap();
        let err = PartSpec::new(Shape::Box, dims, vec![hole], Vec::new(), None).unwrap_err();
        assert!(matches!(err, SchemaError::HoleDeeperThanPart { .. }));
    }

    #[test]
    fn serde_round_trip_with_defaults() {
        let json = r#"{
            "dimensions": { "length": 100.0, "width": 50.0, "height": 30.0 },
            "holes": [{ "diameter": 10.0, "depth": 20.0 }],
            "fillets": [{ "radius": 2.0, "edges": "top" }]
        }"#;
        let spec: PartSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.shape, Shape::Box);
        assert_eq!(spec.holes[0].position, Position::default());
        assert_eq!(spec.fillets[0].edges, crate::EdgeSet::Top);
        assert!(spec.check_schema().is_ok());

        let back = serde_json::to_string(&spec).unwrap();
        let again: PartSpec = serde_json::from_str(&back).unwrap();
        assert_eq!(spec, again);
    }
}
