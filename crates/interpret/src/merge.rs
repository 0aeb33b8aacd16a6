//! Turning a (possibly gappy) intent into a concrete part specification.

use part_types::{Dimensions, EdgeSet, Fillet, Hole, PartSpec, SchemaError, Shape};

use crate::intent::PartIntent;

/// Default material when neither intent nor corrections name one.
const DEFAULT_MATERIAL: &str = "aluminum";

/// Why an intent could not become a part.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MergeError {
    /// Required values are still missing after corrections were applied.
    #[error("incomplete specification, missing: {}", missing.join(", "))]
    Incomplete { missing: Vec<String> },

    /// The merged values violate the part schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Build a `PartSpec` from interpreted intent plus caller corrections.
///
/// Corrections override intent field by field. Holes default to the part
/// center when no position was given; fillet edge sets come from the
/// location description. Anything still missing is reported in one pass
/// so the caller can build corrective UI.
pub fn merge_intent(intent: &PartIntent, corrections: &PartIntent) -> Result<PartSpec, MergeError> {
    let merged = intent.overlay(corrections);
    let mut missing: Vec<String> = merged.missing_information.clone();

    let dims = merged.dimensions.unwrap_or_default();
    for (axis, value) in [
        ("length", dims.length),
        ("width", dims.width),
        ("height", dims.height),
    ] {
        if value.is_none() {
            missing.push(format!("dimension: {axis}"));
        }
    }

    for (i, hole) in merged.holes.iter().enumerate() {
        if hole.diameter.is_none() {
            missing.push(format!("hole {i}: diameter"));
        }
        if hole.depth.is_none() {
            missing.push(format!("hole {i}: depth"));
        }
    }

    for (i, fillet) in merged.fillets.iter().enumerate() {
        if fillet.radius.is_none() {
            missing.push(format!("fillet {i}: radius"));
        }
    }

    if !missing.is_empty() {
        return Err(MergeError::Incomplete { missing });
    }

    let dimensions = Dimensions::new(
        dims.length.unwrap_or_default(),
        dims.width.unwrap_or_default(),
        dims.height.unwrap_or_default(),
    )?;

    let holes = merged
        .holes
        .iter()
        .map(|h| {
            Hole::new(
                h.diameter.unwrap_or_default(),
                h.depth.unwrap_or_default(),
                h.position.unwrap_or_default(),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let fillets = merged
        .fillets
        .iter()
        .map(|f| {
            Fillet::new(
                f.radius.unwrap_or_default(),
                edge_set_from_location(f.location.as_deref()),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let spec = PartSpec::new(
        merged.shape.unwrap_or(Shape::Box),
        dimensions,
        holes,
        fillets,
        Some(merged.material.unwrap_or_else(|| DEFAULT_MATERIAL.to_string())),
    )?;
    Ok(spec)
}

/// Map a freeform fillet location description onto an edge set.
fn edge_set_from_location(location: Option<&str>) -> EdgeSet {
    match location.map(str::to_ascii_lowercase).as_deref() {
        Some(loc) if loc.contains("top") => EdgeSet::Top,
        Some(loc) if loc.contains("bottom") => EdgeSet::Bottom,
        _ => EdgeSet::All,
    }
}