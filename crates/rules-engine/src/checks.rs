//! The individual manufacturability checks.
//!
//! Each check appends findings to the shared error/warning accumulators
//! and never short-circuits: the engine reports every problem in one pass.

use part_types::PartSpec;

use crate::limits::Limits;
use crate::verdict::{CheckKind, Finding, Subject};

pub(crate) fn check_dimensions(
    part: &PartSpec,
    limits: &Limits,
    errors: &mut Vec<Finding>,
    warnings: &mut Vec<Finding>,
) {
    let dims = &part.dimensions;

    if dims.length < limits.min_part_dimension
        || dims.width < limits.min_part_dimension
        || dims.height < limits.min_part_dimension
    {
        errors.push(Finding::new(
            CheckKind::Dimensions,
            Subject::Part,
            format!(
                "Part dimensions too small: {}x{}x{}mm. Minimum {}mm required for stable CNC machining.",
                dims.length, dims.width, dims.height, limits.min_part_dimension,
            ),
        ));
    }

    let max_aspect_ratio = dims.max_aspect_ratio();
    if max_aspect_ratio > limits.max_aspect_ratio {
        warnings.push(Finding::new(
            CheckKind::Dimensions,
            Subject::Part,
            format!(
                "High aspect ratio ({max_aspect_ratio:.1}:1) may cause stability issues during machining."
            ),
        ));
    }
}

pub(crate) fn check_holes(
    part: &PartSpec,
    limits: &Limits,
    errors: &mut Vec<Finding>,
    warnings: &mut Vec<Finding>,
) {
    for (i, hole) in part.holes.iter().enumerate() {
        let subject = Subject::Hole { index: i };

        if hole.diameter < limits.min_hole_diameter {
            errors.push(Finding::new(
                CheckKind::HoleGeometry,
                subject,
                format!(
                    "Hole {i}: Diameter {}mm is below minimum {}mm",
                    hole.diameter, limits.min_hole_diameter,
                ),
            ));
        }

        let depth_ratio = hole.depth / hole.diameter;
        if depth_ratio > limits.max_hole_depth_ratio {
            warnings.push(Finding::new(
                CheckKind::HoleGeometry,
                subject,
                format!(
                    "Hole {i}: Depth-to-diameter ratio {depth_ratio:.1} exceeds recommended maximum {}. May require special tooling.",
                    limits.max_hole_depth_ratio,
                ),
            ));
        }

        let edge_distance_x = part.dimensions.length / 2.0 - hole.position.x.abs();
        let edge_distance_y = part.dimensions.width / 2.0 - hole.position.y.abs();
        let min_edge_distance = limits.min_edge_distance(hole.diameter);

        if edge_distance_x < min_edge_distance {
            warnings.push(Finding::new(
                CheckKind::HoleGeometry,
                subject,
                format!(
                    "Hole {i}: Too close to edge (x-axis). Minimum {min_edge_distance}mm recommended."
                ),
            ));
        }
        if edge_distance_y < min_edge_distance {
            warnings.push(Finding::new(
                CheckKind::HoleGeometry,
                subject,
                format!(
                    "Hole {i}: Too close to edge (y-axis). Minimum {min_edge_distance}mm recommended."
                ),
            ));
        }
    }
}

pub(crate) fn check_fillets(part: &PartSpec, limits: &Limits, errors: &mut Vec<Finding>) {
    let smallest_dim = part.dimensions.smallest();
    let max_fillet = smallest_dim * limits.max_fillet_radius_ratio;

    for (i, fillet) in part.fillets.iter().enumerate() {
        let subject = Subject::Fillet { index: i };

        if fillet.radius < limits.min_fillet_radius {
            errors.push(Finding::new(
                CheckKind::FilletGeometry,
                subject,
                format!(
                    "Fillet {i}: Radius {}mm is below minimum {}mm",
                    fillet.radius, limits.min_fillet_radius,
                ),
            ));
        }

        // Strictly greater: a fillet of exactly half the smallest dimension
        // is still machinable.
        if fillet.radius > max_fillet {
            errors.push(Finding::new(
                CheckKind::FilletGeometry,
                subject,
                format!(
                    "Fillet {i}: Radius {}mm exceeds maximum {max_fillet:.1}mm ({:.0}% of smallest dimension {smallest_dim}mm)",
                    fillet.radius,
                    limits.max_fillet_radius_ratio * 100.0,
                ),
            ));
        }
    }
}

pub(crate) fn check_hole_interference(
    part: &PartSpec,
    limits: &Limits,
    errors: &mut Vec<Finding>,
) {
    for (i, a) in part.holes.iter().enumerate() {
        for (j, b) in part.holes.iter().enumerate().skip(i + 1) {
            let dx = a.position.x - b.position.x;
            let dy = a.position.y - b.position.y;
            let distance = (dx * dx + dy * dy).sqrt();

            // Hole walls must keep at least one wall thickness of material.
            let min_distance = (a.diameter + b.diameter) / 2.0 + limits.min_wall_thickness;

            if distance < min_distance {
                errors.push(Finding::new(
                    CheckKind::HoleInterference,
                    Subject::HolePair { first: i, second: j },
                    format!(
                        "Holes {i} and {j} are too close ({distance:.1}mm). Minimum separation {min_distance:.1}mm required."
                    ),
                ));
            }
        }
    }
}

pub(crate) fn check_wall_thickness(part: &PartSpec, limits: &Limits, warnings: &mut Vec<Finding>) {
    for (i, hole) in part.holes.iter().enumerate() {
        let remaining = part.dimensions.height - hole.depth;
        if remaining < limits.min_wall_thickness {
            warnings.push(Finding::new(
                CheckKind::WallThickness,
                Subject::Hole { index: i },
                format!(
                    "Hole {i}: Remaining material thickness {remaining:.1}mm is below recommended {}mm",
                    limits.min_wall_thickness,
                ),
            ));
        }
    }
}
