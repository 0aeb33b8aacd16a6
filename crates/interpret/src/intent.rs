//! Intent schemas: the partial part description an extractor pulls out of
//! freeform text. Every field is optional; anything the caller must still
//! supply lands in `missing_information`. Extractors never fabricate
//! values that were not in the input.

use serde::{Deserialize, Serialize};

use part_types::{Position, Shape};

/// Dimensions mentioned in the text, in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionsIntent {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A hole mentioned in the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoleIntent {
    pub diameter: Option<f64>,
    pub depth: Option<f64>,
    /// Freeform location description ("center", "near the left edge").
    pub location: Option<String>,
    /// Concrete position, when supplied as a caller correction.
    pub position: Option<Position>,
}

/// A fillet mentioned in the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilletIntent {
    pub radius: Option<f64>,
    /// Freeform location description ("all edges", "top").
    pub location: Option<String>,
}

/// Structured intent extracted from a natural-language description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartIntent {
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub dimensions: Option<DimensionsIntent>,
    #[serde(default)]
    pub holes: Vec<HoleIntent>,
    #[serde(default)]
    pub fillets: Vec<FilletIntent>,
    #[serde(default)]
    pub material: Option<String>,
    /// Critical information the caller must still supply.
    #[serde(default)]
    pub missing_information: Vec<String>,
}

impl PartIntent {
    /// The minimal intent an extractor degrades to when its mechanism
    /// fails: no content, only a description of what went wrong.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            missing_information: vec![
                reason.into(),
                "Please provide a clearer description".to_string(),
            ],
            ..Self::default()
        }
    }

    /// Overlay caller corrections on top of this intent.
    ///
    /// Correction fields win wherever both sides have a value; hole and
    /// fillet lists are replaced wholesale when the correction supplies
    /// any. Produces a new intent, leaving both inputs untouched.
    pub fn overlay(&self, corrections: &PartIntent) -> PartIntent {
        let dimensions = match (self.dimensions, corrections.dimensions) {
            (Some(base), Some(fix)) => Some(DimensionsIntent {
                length: fix.length.or(base.length),
                width: fix.width.or(base.width),
                height: fix.height.or(base.height),
            }),
            (base, fix) => fix.or(base),
        };

        PartIntent {
            shape: corrections.shape.or(self.shape),
            dimensions,
            holes: if corrections.holes.is_empty() {
                self.holes.clone()
            } else {
                corrections.holes.clone()
            },
            fillets: if corrections.fillets.is_empty() {
                self.fillets.clone()
            } else {
                corrections.fillets.clone()
            },
            material: corrections
                .material
                .clone()
                .or_else(|| self.material.clone()),
            missing_information: Vec::new(),
        }
    }
}
