pub mod naming;
pub mod outcome;

pub use outcome::{GenerationOutcome, RequestState, Status};

use std::fs;
use std::path::PathBuf;

use cad_builder::PartBuilder;
use part_types::PartSpec;
use rules_engine::RulesEngine;
use tracing::{debug, info, instrument, warn};

/// Failure to set up the generation service itself.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The generation orchestrator.
///
/// Sequences validation, geometry build, and export for one part at a
/// time, and maps engine verdicts onto caller-facing outcomes. Holds no
/// per-request state; a single service is shared across requests.
pub struct GenerationService {
    output_dir: PathBuf,
    builder: Box<dyn PartBuilder>,
    engine: RulesEngine,
}

impl GenerationService {
    /// Create the service, ensuring the output directory exists.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        builder: Box<dyn PartBuilder>,
        engine: RulesEngine,
    ) -> Result<Self, SetupError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| SetupError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self {
            output_dir,
            builder,
            engine,
        })
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Generate an artifact with a collision-free generated filename.
    #[instrument(skip(self, part))]
    pub fn generate(&self, part: &PartSpec) -> GenerationOutcome {
        let filename = naming::artifact_filename(self.builder.extension());
        self.run(part, filename)
    }

    /// Generate an artifact with a caller-chosen file stem.
    ///
    /// The extension is appended when missing. Stems that could escape
    /// the output directory are rejected outright.
    #[instrument(skip(self, part))]
    pub fn generate_named(&self, part: &PartSpec, stem: &str) -> GenerationOutcome {
        let Some(stem) = naming::sanitize_stem(stem) else {
            warn!(stem, "rejected artifact name");
            return GenerationOutcome::error(format!("Invalid artifact name: {stem:?}"));
        };

        let extension = self.builder.extension();
        let suffix = format!(".{extension}");
        let filename = if stem.ends_with(&suffix) {
            stem.to_string()
        } else {
            format!("{stem}{suffix}")
        };
        self.run(part, filename)
    }

    fn run(&self, part: &PartSpec, filename: String) -> GenerationOutcome {
        let mut state = RequestState::Received;
        debug!(state = ?state, "request received");

        state = RequestState::Validating;
        if let Err(schema) = part.check_schema() {
            state = RequestState::Rejected;
            warn!(state = ?state, %schema, "schema violation");
            return GenerationOutcome::error(format!("Invalid part specification: {schema}"));
        }

        let verdict = self.engine.check(part);
        if !verdict.valid {
            state = RequestState::Rejected;
            warn!(state = ?state, errors = verdict.errors.len(), "part rejected");
            return GenerationOutcome::error(format!(
                "Validation failed: {}",
                verdict.error_messages().join("; "),
            ));
        }

        state = RequestState::Building;
        debug!(state = ?state, filename = %filename, "building geometry");

        if let Err(build) = self.builder.check_geometry(part) {
            state = RequestState::BuildFailed;
            warn!(state = ?state, %build, "geometry check failed");
            return GenerationOutcome::error(build.to_string());
        }

        let path = self.output_dir.join(filename);
        if let Err(build) = self.builder.build(part, &path) {
            state = RequestState::BuildFailed;
            warn!(state = ?state, %build, "build failed");
            return GenerationOutcome::error(build.to_string());
        }

        state = RequestState::Exported;
        info!(
            state = ?state,
            path = %path.display(),
            warnings = verdict.warnings.len(),
            "part generated"
        );

        let mut message = String::from("Part generated successfully");
        if !verdict.warnings.is_empty() {
            message.push_str(&format!(
                ". Warnings: {}",
                verdict.warning_messages().join("; "),
            ));
        }
        GenerationOutcome::success(path, message)
    }
}
