//! Part fixture constructors shared across scenario tests.

use part_types::{Dimensions, EdgeSet, Fillet, Hole, PartSpec, Position, Shape};

/// Featureless aluminum stock.
pub fn box_part(length: f64, width: f64, height: f64) -> PartSpec {
    PartSpec {
        shape: Shape::Box,
        dimensions: Dimensions {
            length,
            width,
            height,
        },
        holes: Vec::new(),
        fillets: Vec::new(),
        material: Some("aluminum".to_string()),
    }
}

/// A hole at (x, y) on the top face.
pub fn hole_at(diameter: f64, depth: f64, x: f64, y: f64) -> Hole {
    Hole {
        diameter,
        depth,
        position: Position::new(x, y, 0.0),
    }
}

/// A fillet over every edge.
pub fn fillet_all(radius: f64) -> Fillet {
    Fillet {
        radius,
        edges: EdgeSet::All,
    }
}

/// Stock with a list of holes.
pub fn part_with_holes(length: f64, width: f64, height: f64, holes: Vec<Hole>) -> PartSpec {
    PartSpec {
        holes,
        ..box_part(length, width, height)
    }
}
