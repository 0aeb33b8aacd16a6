use std::sync::Arc;

use cad_builder::{BuildError, MockBuilder, PartBuilder, StepBuilder};
use generation::{GenerationService, Status};
use part_types::{Dimensions, Hole, PartSpec, Position, Shape};
use rules_engine::RulesEngine;

fn valid_part() -> PartSpec {
    PartSpec {
        shape: Shape::Box,
        dimensions: Dimensions {
            length: 100.0,
            width: 100.0,
            height: 50.0,
        },
        holes: vec![Hole {
            diameter: 20.0,
            depth: 30.0,
            position: Position::default(),
        }],
        fillets: Vec::new(),
        material: Some("aluminum".to_string()),
    }
}

fn interfering_part() -> PartSpec {
    PartSpec {
        shape: Shape::Box,
        dimensions: Dimensions {
            length: 50.0,
            width: 50.0,
            height: 25.0,
        },
        holes: vec![
            Hole {
                diameter: 15.0,
                depth: 20.0,
                position: Position::default(),
            },
            Hole {
                diameter: 15.0,
                depth: 20.0,
                position: Position::new(5.0, 0.0, 0.0),
            },
        ],
        fillets: Vec::new(),
        material: None,
    }
}

fn service_with(builder: Box<dyn PartBuilder>, dir: &std::path::Path) -> GenerationService {
    GenerationService::new(dir, builder, RulesEngine::default()).unwrap()
}

#[test]
fn valid_part_exports_an_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_with(Box::new(StepBuilder::new()), dir.path());

    let outcome = service.generate(&valid_part());

    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.message, "Part generated successfully");
    let artifact = outcome.artifact.unwrap();
    assert!(artifact.exists());
    assert_eq!(artifact.extension().unwrap(), "step");
}

#[test]
fn rejected_part_never_reaches_the_builder() {
    let dir = tempfile::tempdir().unwrap();
    let mock = Arc::new(MockBuilder::new());
    let service = service_with(Box::new(Arc::clone(&mock)), dir.path());

    let outcome = service.generate(&interfering_part());

    assert_eq!(outcome.status, Status::Error);
    assert!(outcome.message.starts_with("Validation failed: "));
    assert!(outcome.message.contains("too close"));
    assert!(outcome.artifact.is_none());
    assert_eq!(mock.build_count(), 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn warnings_ride_along_on_success() {
    // depth/diameter = 60/5 = 12: warning only.
    let mut part = valid_part();
    part.dimensions.height = 70.0;
    part.holes = vec![Hole {
        diameter: 5.0,
        depth: 60.0,
        position: Position::default(),
    }];

    let dir = tempfile::tempdir().unwrap();
    let service = service_with(Box::new(StepBuilder::new()), dir.path());
    let outcome = service.generate(&part);

    assert_eq!(outcome.status, Status::Success);
    assert!(outcome.message.contains("Warnings: "));
    assert!(outcome.message.contains("special tooling"));
}

#[test]
fn build_failure_propagates_without_retry() {
    let dir = tempfile::tempdir().unwrap();
    let mock = Arc::new(MockBuilder::failing(BuildError::ExportFailed(
        "disk full".to_string(),
    )));
    let service = service_with(Box::new(Arc::clone(&mock)), dir.path());

    let outcome = service.generate(&valid_part());

    assert_eq!(outcome.status, Status::Error);
    assert!(outcome.message.contains("disk full"));
    assert!(outcome.artifact.is_none());
    // Exactly one attempt.
    assert_eq!(mock.build_count(), 1);
}

#[test]
fn schema_violation_is_rejected_before_the_engine() {
    // Deserialized spec with a hole deeper than the stock: a schema
    // violation, not a manufacturing one.
    let mut part = valid_part();
    part.holes[0].depth = 500.0;

    let dir = tempfile::tempdir().unwrap();
    let service = service_with(Box::new(StepBuilder::new()), dir.path());
    let outcome = service.generate(&part);

    assert_eq!(outcome.status, Status::Error);
    assert!(outcome.message.starts_with("Invalid part specification:"));
}

#[test]
fn named_generation_uses_the_given_stem() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_with(Box::new(StepBuilder::new()), dir.path());

    let outcome = service.generate_named(&valid_part(), "bracket_v2");

    assert_eq!(outcome.status, Status::Success);
    let artifact = outcome.artifact.unwrap();
    assert_eq!(artifact.file_name().unwrap(), "bracket_v2.step");
    assert!(artifact.exists());
}

#[test]
fn named_generation_rejects_traversal_stems() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_with(Box::new(StepBuilder::new()), dir.path());

    let outcome = service.generate_named(&valid_part(), "../escape");

    assert_eq!(outcome.status, Status::Error);
    assert!(outcome.message.contains("Invalid artifact name"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn generated_filenames_are_unique_across_requests() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_with(Box::new(StepBuilder::new()), dir.path());

    let first = service.generate(&valid_part());
    let second = service.generate(&valid_part());

    assert_ne!(first.artifact.unwrap(), second.artifact.unwrap());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}
