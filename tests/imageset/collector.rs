//! Integration tests for collecting construction errors.

use imageset_errors_rs::{ImageSetError, ImageSetErrorKind, ImageSetErrors};

use crate::common::{init_logger, plane, planes, TestPlane};

#[test]
fn test_collector_starts_empty() {
    let errors: ImageSetErrors<TestPlane> = ImageSetErrors::new();

    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
    assert_eq!(errors.into_result(42), Ok(42), "No errors should pass the value through");
}

#[test]
fn test_collector_keeps_every_error_in_order() {
    init_logger();

    let mut errors = ImageSetErrors::new();
    errors.record_duplicate("DNA", "dup", ["A01"], planes(2));
    errors.record_missing("GFP", "No image", ["A02"]);
    errors.record_duplicate("DNA", "dup", ["A03"], planes(3));

    let kinds: Vec<_> = errors.iter().map(ImageSetError::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ImageSetErrorKind::DuplicateKey,
            ImageSetErrorKind::Missing,
            ImageSetErrorKind::DuplicateKey,
        ]
    );

    let counts: Vec<_> = errors.duplicates().map(|d| d.conflict_count()).collect();
    assert_eq!(counts, vec![2, 3], "Only duplicate-key errors should be listed");
}

#[test]
fn test_collector_filters_by_channel() {
    let mut errors = ImageSetErrors::new();
    errors.record_duplicate("DNA", "dup", ["A01"], vec![plane("a.tif"), plane("b.tif")]);
    errors.record_missing("GFP", "No image", ["A01"]);
    errors.record_missing("GFP", "No image", ["A02"]);

    assert_eq!(errors.for_channel("GFP").count(), 2);
    assert_eq!(errors.for_channel("DNA").count(), 1);
    assert_eq!(errors.for_channel("Actin").count(), 0);
}

#[test]
fn test_collector_into_result_returns_all_errors() {
    init_logger();

    let mut errors = ImageSetErrors::new();
    errors.record_duplicate("DNA", "dup", ["A01"], planes(2));
    errors.record_missing("GFP", "No image", ["A01"]);

    let failed = errors.into_result(()).unwrap_err();

    assert_eq!(failed.len(), 2, "Every recorded error should be reported");
    assert_eq!(
        failed.to_string(),
        "2 image-set construction error(s)\n  \
         channel DNA: dup (key [A01]), 2 conflicting descriptors\n  \
         channel GFP: No image (key [A01])"
    );
}

#[test]
fn test_collector_from_iterator_and_into_iterator() {
    let errors: ImageSetErrors<TestPlane> = vec![
        ImageSetError::missing("GFP", "No image", ["A01"]),
        ImageSetError::duplicate("DNA", "dup", ["A02"], planes(2)),
    ]
    .into_iter()
    .collect();

    assert_eq!((&errors).into_iter().count(), 2);

    let channels: Vec<String> = errors
        .into_iter()
        .map(|e| e.channel_name().to_string())
        .collect();
    assert_eq!(channels, vec!["GFP", "DNA"]);
}

#[test]
fn test_collector_serializes_as_list() {
    let mut errors: ImageSetErrors<TestPlane> = ImageSetErrors::default();
    errors.record_missing("GFP", "No image", ["A01"]);

    let json = serde_json::to_value(&errors).unwrap();

    assert!(json.is_array(), "Collection should serialize as a JSON array");
    assert_eq!(json[0]["kind"], "missing");
}
