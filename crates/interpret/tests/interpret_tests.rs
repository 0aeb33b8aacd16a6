use interpret::{
    merge_intent, BestEffort, DimensionsIntent, ExtractionOutcome, FilletIntent, HoleIntent,
    IntentExtractor, InterpretError, MergeError, PartIntent,
};
use part_types::{EdgeSet, Position, Shape};

/// Scripted extractor: returns a fixed result regardless of input text.
/// Stands in for the real language backend, which never fabricates values
/// either.
struct Scripted(Result<PartIntent, InterpretError>);

impl IntentExtractor for Scripted {
    fn extract(&self, _text: &str) -> Result<PartIntent, InterpretError> {
        self.0.clone()
    }
}

fn full_intent() -> PartIntent {
    PartIntent {
        shape: Some(Shape::Box),
        dimensions: Some(DimensionsIntent {
            length: Some(100.0),
            width: Some(50.0),
            height: Some(30.0),
        }),
        holes: vec![HoleIntent {
            diameter: Some(10.0),
            depth: Some(20.0),
            location: Some("center".to_string()),
            position: None,
        }],
        fillets: vec![FilletIntent {
            radius: Some(2.0),
            location: Some("top edges".to_string()),
        }],
        material: None,
        missing_information: Vec::new(),
    }
}

// ── Best-Effort Extraction ───────────────────────────────────────────────

#[test]
fn successful_extraction_passes_through() {
    let extractor = BestEffort::new(Scripted(Ok(full_intent())));
    let outcome = extractor.extract("a 100x50x30 plate").unwrap();

    assert!(!outcome.is_degraded());
    assert_eq!(outcome.intent(), &full_intent());
}

#[test]
fn extraction_with_gaps_is_not_degraded() {
    let mut intent = full_intent();
    intent.dimensions = None;
    intent.missing_information.push("dimensions".to_string());

    let extractor = BestEffort::new(Scripted(Ok(intent)));
    let outcome = extractor.extract("a plate with a hole").unwrap();

    // Gaps are a successful extraction, not a mechanism failure.
    assert!(matches!(outcome, ExtractionOutcome::Extracted(_)));
    assert!(!outcome.intent().missing_information.is_empty());
}

#[test]
fn mechanism_failure_degrades_to_fallback_intent() {
    let extractor = BestEffort::new(Scripted(Err(InterpretError::Extraction(
        "malformed model output".to_string(),
    ))));
    let outcome = extractor.extract("gibberish").unwrap();

    assert!(outcome.is_degraded());
    let intent = outcome.intent();
    assert_eq!(intent.shape, None);
    assert!(intent.holes.is_empty());
    assert!(intent.missing_information[0].contains("malformed model output"));
    assert_eq!(intent.missing_information.len(), 2);
}

#[test]
fn configuration_failure_is_never_degraded() {
    let extractor = BestEffort::new(Scripted(Err(InterpretError::Configuration(
        "API key not set".to_string(),
    ))));
    let err = extractor.extract("anything").unwrap_err();

    assert!(matches!(err, InterpretError::Configuration(_)));
}

// ── Overlay & Merge ──────────────────────────────────────────────────────

#[test]
fn corrections_override_intent_fields() {
    let corrections = PartIntent {
        dimensions: Some(DimensionsIntent {
            length: None,
            width: Some(60.0),
            height: None,
        }),
        material: Some("steel".to_string()),
        ..PartIntent::default()
    };

    let merged = full_intent().overlay(&corrections);
    let dims = merged.dimensions.unwrap();
    assert_eq!(dims.length, Some(100.0));
    assert_eq!(dims.width, Some(60.0));
    assert_eq!(merged.material.as_deref(), Some("steel"));
    // Untouched lists survive.
    assert_eq!(merged.holes.len(), 1);
}

#[test]
fn merge_produces_a_valid_part_spec() {
    let spec = merge_intent(&full_intent(), &PartIntent::default()).unwrap();

    assert_eq!(spec.shape, Shape::Box);
    assert_eq!(spec.dimensions.length, 100.0);
    assert_eq!(spec.holes.len(), 1);
    // No concrete position given: hole defaults to the part center.
    assert_eq!(spec.holes[0].position, Position::default());
    assert_eq!(spec.fillets[0].edges, EdgeSet::Top);
    assert_eq!(spec.material.as_deref(), Some("aluminum"));
}

#[test]
fn merge_reports_every_missing_value_at_once() {
    let intent = PartIntent {
        holes: vec![HoleIntent::default()],
        ..PartIntent::default()
    };

    let err = merge_intent(&intent, &PartIntent::default()).unwrap_err();
    let MergeError::Incomplete { missing } = err else {
        panic!("expected Incomplete, got {err:?}");
    };
    assert_eq!(
        missing,
        vec![
            "dimension: length",
            "dimension: width",
            "dimension: height",
            "hole 0: diameter",
            "hole 0: depth",
        ]
    );
}

#[test]
fn correction_position_lands_in_the_spec() {
    let corrections = PartIntent {
        holes: vec![HoleIntent {
            diameter: Some(8.0),
            depth: Some(15.0),
            location: None,
            position: Some(Position::new(20.0, -10.0, 0.0)),
        }],
        ..PartIntent::default()
    };

    let spec = merge_intent(&full_intent(), &corrections).unwrap();
    assert_eq!(spec.holes.len(), 1);
    assert_eq!(spec.holes[0].position, Position::new(20.0, -10.0, 0.0));
}

#[test]
fn merged_schema_violations_surface_as_schema_errors() {
    let mut intent = full_intent();
    intent.dimensions = Some(DimensionsIntent {
        length: Some(5.0),
        width: Some(50.0),
        height: Some(30.0),
    });

    let err = merge_intent(&intent, &PartIntent::default()).unwrap_err();
    assert!(matches!(err, MergeError::Schema(_)));
}

#[test]
fn intent_payload_deserializes_with_defaults() {
    let json = r#"{
        "shape": "box",
        "dimensions": { "length": 100.0, "width": 50.0, "height": 30.0 },
        "holes": [{ "diameter": 10.0, "depth": 20.0, "location": "center" }]
    }"#;
    let intent: PartIntent = serde_json::from_str(json).unwrap();

    assert_eq!(intent.shape, Some(Shape::Box));
    assert!(intent.fillets.is_empty());
    assert!(intent.missing_information.is_empty());
    assert!(merge_intent(&intent, &PartIntent::default()).is_ok());
}
