mod checks;
pub mod limits;
pub mod verdict;

pub use limits::Limits;
pub use verdict::{CheckKind, Finding, Subject, Verdict};

use part_types::PartSpec;
use tracing::{info, instrument};

/// The manufacturability rules engine.
///
/// A pure function from part specification to verdict: no I/O, no clock,
/// no shared state. A single engine value may be shared across threads;
/// every `check` call builds fresh accumulators.
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    limits: Limits,
}

impl RulesEngine {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Run every check against the part and collect all findings.
    ///
    /// Checks run unconditionally — an early error never suppresses later
    /// findings, so the caller sees the full picture in one pass.
    #[instrument(skip(self, part))]
    pub fn check(&self, part: &PartSpec) -> Verdict {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        checks::check_dimensions(part, &self.limits, &mut errors, &mut warnings);
        checks::check_holes(part, &self.limits, &mut errors, &mut warnings);
        checks::check_fillets(part, &self.limits, &mut errors);
        checks::check_hole_interference(part, &self.limits, &mut errors);
        checks::check_wall_thickness(part, &self.limits, &mut warnings);

        let valid = errors.is_empty();
        info!(
            valid,
            error_count = errors.len(),
            warning_count = warnings.len(),
            "manufacturability check complete"
        );

        Verdict {
            valid,
            errors,
            warnings,
        }
    }
}
