use std::fmt;

use serde::{Deserialize, Serialize};

/// Which manufacturability check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    /// Stock dimensions and aspect ratio.
    Dimensions,
    /// Per-hole diameter, depth ratio, and edge clearance.
    HoleGeometry,
    /// Per-fillet radius bounds.
    FilletGeometry,
    /// Pairwise hole center spacing.
    HoleInterference,
    /// Residual material under each hole.
    WallThickness,
}

/// What a finding is about, by input index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Subject {
    Part,
    Hole { index: usize },
    Fillet { index: usize },
    HolePair { first: usize, second: usize },
}

/// A single manufacturability finding. Severity is carried by which list
/// of the verdict it lands in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub check: CheckKind,
    pub subject: Subject,
    pub message: String,
}

impl Finding {
    pub fn new(check: CheckKind, subject: Subject, message: impl Into<String>) -> Self {
        Self {
            check,
            subject,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of checking one part. Errors block generation; warnings are
/// advisory and travel with the success message.
///
/// Ordering is contractual: findings appear in check order (dimensions,
/// holes, fillets, interference, wall thickness), then in input index
/// order within a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl Verdict {
    /// The ordered human-readable error messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|f| f.message.clone()).collect()
    }

    /// The ordered human-readable warning messages.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|f| f.message.clone()).collect()
    }

    /// Errors produced by a specific check.
    pub fn errors_of(&self, check: CheckKind) -> Vec<&Finding> {
        self.errors.iter().filter(|f| f.check == check).collect()
    }

    /// Warnings produced by a specific check.
    pub fn warnings_of(&self, check: CheckKind) -> Vec<&Finding> {
        self.warnings.iter().filter(|f| f.check == check).collect()
    }
}
