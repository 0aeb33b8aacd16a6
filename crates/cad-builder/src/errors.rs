/// Failures while turning a validated part into an artifact file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unsupported shape: {shape}")]
    UnsupportedShape { shape: String },

    #[error("missing geometry parameter: {what}")]
    MissingGeometry { what: String },

    #[error("export failed: {0}")]
    ExportFailed(String),
}
