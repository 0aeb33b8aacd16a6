//! Assertion helpers with diagnostic output.
//!
//! Every failure carries the full verdict or outcome so a failing scenario
//! is debuggable from the test log alone.

use generation::{GenerationOutcome, Status};
use rules_engine::Verdict;

/// Unified error type for the scenario harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

fn fail(detail: String) -> HarnessError {
    HarnessError::AssertionFailed { detail }
}

/// Assert a verdict is valid with no findings at all.
pub fn assert_clean(verdict: &Verdict, ctx: &str) -> Result<(), HarnessError> {
    if verdict.valid && verdict.errors.is_empty() && verdict.warnings.is_empty() {
        Ok(())
    } else {
        Err(fail(format!("[{ctx}] expected clean verdict, got {verdict:?}")))
    }
}

/// Assert a verdict is invalid and some error message contains `needle`.
pub fn assert_error_containing(
    verdict: &Verdict,
    needle: &str,
    ctx: &str,
) -> Result<(), HarnessError> {
    if verdict.valid {
        return Err(fail(format!("[{ctx}] expected invalid verdict, got {verdict:?}")));
    }
    if verdict.errors.iter().any(|f| f.message.contains(needle)) {
        Ok(())
    } else {
        Err(fail(format!(
            "[{ctx}] no error contains {needle:?}; errors: {:?}",
            verdict.error_messages(),
        )))
    }
}

/// Assert a verdict is valid but carries a warning containing `needle`.
pub fn assert_warning_containing(
    verdict: &Verdict,
    needle: &str,
    ctx: &str,
) -> Result<(), HarnessError> {
    if !verdict.valid {
        return Err(fail(format!("[{ctx}] expected valid verdict, got {verdict:?}")));
    }
    if verdict.warnings.iter().any(|f| f.message.contains(needle)) {
        Ok(())
    } else {
        Err(fail(format!(
            "[{ctx}] no warning contains {needle:?}; warnings: {:?}",
            verdict.warning_messages(),
        )))
    }
}

/// Assert a generation outcome succeeded and its artifact exists on disk
/// with the expected extension.
pub fn assert_exported(
    outcome: &GenerationOutcome,
    extension: &str,
    ctx: &str,
) -> Result<(), HarnessError> {
    if outcome.status != Status::Success {
        return Err(fail(format!("[{ctx}] expected success, got {outcome:?}")));
    }
    let Some(path) = &outcome.artifact else {
        return Err(fail(format!("[{ctx}] success outcome without artifact: {outcome:?}")));
    };
    if path.extension().and_then(|e| e.to_str()) != Some(extension) {
        return Err(fail(format!(
            "[{ctx}] artifact {} does not end in .{extension}",
            path.display(),
        )));
    }
    if !path.exists() {
        return Err(fail(format!("[{ctx}] artifact {} not on disk", path.display())));
    }
    Ok(())
}

/// Assert a generation outcome failed and its message contains `needle`.
pub fn assert_rejected(
    outcome: &GenerationOutcome,
    needle: &str,
    ctx: &str,
) -> Result<(), HarnessError> {
    if outcome.status != Status::Error {
        return Err(fail(format!("[{ctx}] expected error, got {outcome:?}")));
    }
    if outcome.artifact.is_some() {
        return Err(fail(format!("[{ctx}] error outcome with artifact: {outcome:?}")));
    }
    if outcome.message.contains(needle) {
        Ok(())
    } else {
        Err(fail(format!(
            "[{ctx}] message {:?} does not contain {needle:?}",
            outcome.message,
        )))
    }
}
