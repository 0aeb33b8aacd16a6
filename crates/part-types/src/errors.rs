/// Schema-level violations: the specification is malformed before any
/// manufacturing rule is consulted. Raised at construction time and by
/// `PartSpec::check_schema` for specs that arrived via deserialization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("{axis} = {value}mm is outside the allowed range {min}-{max}mm")]
    DimensionOutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("hole diameter must be positive, got {diameter}mm")]
    NonPositiveHoleDiameter { diameter: f64 },

    #[error("hole diameter {diameter}mm is below the {min}mm machining minimum")]
    HoleDiameterTooSmall { diameter: f64, min: f64 },

    #[error("hole depth must be positive, got {depth}mm")]
    NonPositiveHoleDepth { depth: f64 },

    #[error("fillet radius must be positive, got {radius}mm")]
    NonPositiveFilletRadius { radius: f64 },

    #[error("fillet radius {radius}mm is below the {min}mm machining minimum")]
    FilletRadiusTooSmall { radius: f64, min: f64 },

    #[error("hole {index} at x={x}mm extends past the part length bounds (±{half_length}mm)")]
    HoleOutsideLength {
        index: usize,
        x: f64,
        half_length: f64,
    },

    #[error("hole {index} at y={y}mm extends past the part width bounds (±{half_width}mm)")]
    HoleOutsideWidth {
        index: usize,
        y: f64,
        half_width: f64,
    },

    #[error("hole {index} depth {depth}mm exceeds part height {height}mm")]
    HoleDeeperThanPart {
        index: usize,
        depth: f64,
        height: f64,
    },
}
