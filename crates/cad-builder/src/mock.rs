//! MockBuilder — recording test double for the geometry builder seam.
//!
//! Lets orchestrator tests verify that rejected parts never reach the
//! builder, and lets them script build failures deterministically.

use std::path::Path;
use std::sync::Mutex;

use part_types::{PartSpec, Shape};

use crate::errors::BuildError;
use crate::traits::PartBuilder;

/// Recording test double. Writes a one-line placeholder artifact on
/// success; fails with the scripted error when one is set.
#[derive(Debug, Default)]
pub struct MockBuilder {
    calls: Mutex<Vec<PartSpec>>,
    fail_with: Option<BuildError>,
}

impl MockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder that fails every `build` call with the given error.
    pub fn failing(error: BuildError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    /// Number of times `build` was invoked.
    pub fn build_count(&self) -> usize {
        self.calls.lock().expect("mock lock poisoned").len()
    }

    /// The part most recently passed to `build`.
    pub fn last_part(&self) -> Option<PartSpec> {
        self.calls.lock().expect("mock lock poisoned").last().cloned()
    }
}

impl PartBuilder for MockBuilder {
    fn check_geometry(&self, part: &PartSpec) -> Result<(), BuildError> {
        match part.shape {
            Shape::Box => Ok(()),
        }
    }

    fn build(&self, part: &PartSpec, path: &Path) -> Result<(), BuildError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(part.clone());

        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }

        std::fs::write(path, "mock artifact\n")
            .map_err(|e| BuildError::ExportFailed(format!("{}: {e}", path.display())))
    }

    fn extension(&self) -> &'static str {
        "step"
    }
}
