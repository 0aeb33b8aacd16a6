use crate::intent::PartIntent;

/// Failures at the interpretation boundary.
///
/// Configuration problems (missing credentials, unreachable setup) are
/// kept apart from extraction problems so operators see them distinctly;
/// only extraction failures are ever degraded away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpretError {
    #[error("interpreter not configured: {0}")]
    Configuration(String),

    #[error("intent extraction failed: {0}")]
    Extraction(String),
}

/// Intent extraction capability.
///
/// Implementations wrap whatever backend does the actual language work.
/// Construct the (possibly expensive) extractor once at process start and
/// inject it where requests are handled; there is no global instance.
pub trait IntentExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<PartIntent, InterpretError>;
}

/// What the best-effort layer produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// The extractor ran; gaps, if any, are in `missing_information`.
    Extracted(PartIntent),
    /// The extraction mechanism itself failed; the intent carries only a
    /// description of the failure.
    Degraded(PartIntent),
}

impl ExtractionOutcome {
    pub fn intent(&self) -> &PartIntent {
        match self {
            ExtractionOutcome::Extracted(intent) | ExtractionOutcome::Degraded(intent) => intent,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ExtractionOutcome::Degraded(_))
    }
}

/// Best-effort wrapper around an extractor.
///
/// Extraction failures become a fallback intent rather than crossing the
/// service boundary; configuration failures still propagate because a
/// misconfigured interpreter must be visible to operators, not papered
/// over with "please rephrase".
pub struct BestEffort<E> {
    inner: E,
}

impl<E: IntentExtractor> BestEffort<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn extract(&self, text: &str) -> Result<ExtractionOutcome, InterpretError> {
        match self.inner.extract(text) {
            Ok(intent) => Ok(ExtractionOutcome::Extracted(intent)),
            Err(InterpretError::Extraction(reason)) => Ok(ExtractionOutcome::Degraded(
                PartIntent::fallback(format!("Failed to parse description: {reason}")),
            )),
            Err(err @ InterpretError::Configuration(_)) => Err(err),
        }
    }
}
