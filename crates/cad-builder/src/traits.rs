use std::path::Path;

use part_types::PartSpec;

use crate::errors::BuildError;

/// Geometry builder capability.
///
/// One operation set, variant implementations: `StepBuilder` writes real
/// STEP text, `MockBuilder` is a recording test double. The orchestrator
/// selects an implementation at construction time and talks only to this
/// trait.
pub trait PartBuilder: Send + Sync {
    /// Verify the builder can realize this part before doing any work.
    fn check_geometry(&self, part: &PartSpec) -> Result<(), BuildError>;

    /// Construct the part geometry and write the artifact to `path`.
    fn build(&self, part: &PartSpec, path: &Path) -> Result<(), BuildError>;

    /// File extension of artifacts this builder produces, without the dot.
    fn extension(&self) -> &'static str;
}

/// Shared builders are builders too. Lets a test hold onto a mock after
/// handing the orchestrator its own handle.
impl<B: PartBuilder + ?Sized> PartBuilder for std::sync::Arc<B> {
    fn check_geometry(&self, part: &PartSpec) -> Result<(), BuildError> {
        (**self).check_geometry(part)
    }

    fn build(&self, part: &PartSpec, path: &Path) -> Result<(), BuildError> {
        (**self).build(part, path)
    }

    fn extension(&self) -> &'static str {
        (**self).extension()
    }
}
