use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

/// Smallest hole diameter the shop can drill.
pub const MIN_HOLE_DIAMETER: f64 = 1.0;
/// Smallest fillet radius the shop tooling can cut.
pub const MIN_FILLET_RADIUS: f64 = 0.5;

/// Offset from the part center, in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A drilled hole. Diameter and depth are in millimeters; the position is
/// the hole center on the top face, relative to the part center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub diameter: f64,
    pub depth: f64,
    #[serde(default)]
    pub position: Position,
}

impl Hole {
    /// Construct a hole, rejecting statically unmachinable parameters.
    pub fn new(diameter: f64, depth: f64, position: Position) -> Result<Self, SchemaError> {
        if diameter <= 0.0 {
            return Err(SchemaError::NonPositiveHoleDiameter { diameter });
        }
        if diameter < MIN_HOLE_DIAMETER {
            return Err(SchemaError::HoleDiameterTooSmall {
                diameter,
                min: MIN_HOLE_DIAMETER,
            });
        }
        if depth <= 0.0 {
            return Err(SchemaError::NonPositiveHoleDepth { depth });
        }
        Ok(Self {
            diameter,
            depth,
            position,
        })
    }

    /// Hole center at the part center.
    pub fn centered(diameter: f64, depth: f64) -> Result<Self, SchemaError> {
        Self::new(diameter, depth, Position::default())
    }
}

/// Which edges of the part a fillet applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSet {
    #[default]
    All,
    Top,
    Bottom,
}

/// A rounded edge transition. Radius is in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fillet {
    pub radius: f64,
    #[serde(default)]
    pub edges: EdgeSet,
}

impl Fillet {
    /// Construct a fillet, rejecting statically unmachinable parameters.
    pub fn new(radius: f64, edges: EdgeSet) -> Result<Self, SchemaError> {
        if radius <= 0.0 {
            return Err(SchemaError::NonPositiveFilletRadius { radius });
        }
        if radius < MIN_FILLET_RADIUS {
            return Err(SchemaError::FilletRadiusTooSmall {
                radius,
                min: MIN_FILLET_RADIUS,
            });
        }
        Ok(Self { radius, edges })
    }
}
