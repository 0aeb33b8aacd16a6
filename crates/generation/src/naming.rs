//! Artifact file naming.
//!
//! Multiple generation requests may run concurrently against one output
//! directory, so generated names carry a uuid suffix on top of the
//! timestamp. Caller-chosen stems are confined to a single path segment.

use chrono::Utc;
use uuid::Uuid;

/// A collision-free artifact filename: `part_<utc stamp>_<suffix>.<ext>`.
pub fn artifact_filename(extension: &str) -> String {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("part_{stamp}_{}.{extension}", &suffix[..8])
}

/// Validate a caller-supplied file stem.
///
/// Rejects anything that could escape the output directory: path
/// separators, parent references, empty or dot-only names.
pub fn sanitize_stem(stem: &str) -> Option<&str> {
    let trimmed = stem.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || trimmed.contains('\0')
    {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_do_not_collide() {
        let a = artifact_filename("step");
        let b = artifact_filename("step");
        assert_ne!(a, b);
        assert!(a.starts_with("part_"));
        assert!(a.ends_with(".step"));
    }

    #[test]
    fn stems_with_traversal_are_rejected() {
        assert!(sanitize_stem("bracket_v2").is_some());
        assert!(sanitize_stem("  spaced  ").is_some());
        assert!(sanitize_stem("").is_none());
        assert!(sanitize_stem("..").is_none());
        assert!(sanitize_stem("../etc/passwd").is_none());
        assert!(sanitize_stem("a/b").is_none());
        assert!(sanitize_stem("a\\b").is_none());
    }
}
