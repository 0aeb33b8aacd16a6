//! Minimal STEP AP203 writer for rectangular stock.
//!
//! Emits an ISO-10303-21 file with the part's corner points and one
//! cylindrical surface record per hole. Geometry content is a function of
//! the part alone; only the header timestamp varies between runs.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Utc;
use part_types::{PartSpec, Shape};

use crate::errors::BuildError;
use crate::traits::PartBuilder;

/// STEP file builder for box stock.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepBuilder;

impl StepBuilder {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, part: &PartSpec, filename: &str) -> String {
        let dims = &part.dimensions;
        let (hl, hw, hh) = (dims.length / 2.0, dims.width / 2.0, dims.height / 2.0);
        let stamp = Utc::now().format("%Y-%m-%dT%H:%M:%S");
        let material = part.material.as_deref().unwrap_or("unspecified");

        let mut out = String::new();
        out.push_str("ISO-10303-21;\n");
        out.push_str("HEADER;\n");
        let _ = writeln!(
            out,
            "FILE_DESCRIPTION(('CNC part: {material} box {}x{}x{}mm'),'2;1');",
            dims.length, dims.width, dims.height,
        );
        let _ = writeln!(
            out,
            "FILE_NAME('{filename}','{stamp}',(''),(''),'part-forge','part-forge','');"
        );
        out.push_str("FILE_SCHEMA(('CONFIG_CONTROL_DESIGN'));\n");
        out.push_str("ENDSEC;\n");
        out.push_str("DATA;\n");

        let mut id = 0u32;
        let mut next = || {
            id += 1;
            id
        };

        // Eight corner points of the stock, centered on the origin.
        for z in [-hh, hh] {
            for (x, y) in [(-hl, -hw), (hl, -hw), (hl, hw), (-hl, hw)] {
                let n = next();
                let _ = writeln!(out, "#{n}=CARTESIAN_POINT('',({x:.4},{y:.4},{z:.4}));");
            }
        }

        // One axis placement + cylindrical surface per hole, measured from
        // the top face downward.
        for hole in &part.holes {
            let center = next();
            let _ = writeln!(
                out,
                "#{center}=CARTESIAN_POINT('hole center',({:.4},{:.4},{hh:.4}));",
                hole.position.x, hole.position.y,
            );
            let axis = next();
            let _ = writeln!(
                out,
                "#{axis}=AXIS2_PLACEMENT_3D('',#{center},$,$);"
            );
            let surface = next();
            let _ = writeln!(
                out,
                "#{surface}=CYLINDRICAL_SURFACE('hole d={} depth={}',#{axis},{:.4});",
                hole.diameter,
                hole.depth,
                hole.diameter / 2.0,
            );
        }

        out.push_str("ENDSEC;\n");
        out.push_str("END-ISO-10303-21;\n");
        out
    }
}

impl PartBuilder for StepBuilder {
    fn check_geometry(&self, part: &PartSpec) -> Result<(), BuildError> {
        match part.shape {
            Shape::Box => {}
        }
        let dims = &part.dimensions;
        if dims.length <= 0.0 || dims.width <= 0.0 || dims.height <= 0.0 {
            return Err(BuildError::MissingGeometry {
                what: "positive length, width and height".to_string(),
            });
        }
        for (i, hole) in part.holes.iter().enumerate() {
            if hole.diameter <= 0.0 || hole.depth <= 0.0 {
                return Err(BuildError::MissingGeometry {
                    what: format!("hole {i} diameter and depth"),
                });
            }
        }
        Ok(())
    }

    fn build(&self, part: &PartSpec, path: &Path) -> Result<(), BuildError> {
        self.check_geometry(part)?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "part.step".to_string());
        let contents = self.render(part, &filename);

        fs::write(path, contents)
            .map_err(|e| BuildError::ExportFailed(format!("{}: {e}", path.display())))
    }

    fn extension(&self) -> &'static str {
        "step"
    }
}
