//! Integration tests for sharing construction errors across threads.

use std::sync::Arc;
use std::thread;

use imageset_errors_rs::{DuplicateKeyError, ImageSetError, ImageSetErrors};

use crate::common::{assert_same_instances, planes, TestPlane};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_errors_are_send_and_sync() {
    assert_send_sync::<DuplicateKeyError<TestPlane>>();
    assert_send_sync::<ImageSetError<TestPlane>>();
    assert_send_sync::<ImageSetErrors<TestPlane>>();
}

#[test]
fn test_concurrent_readers_see_same_descriptors() {
    let supplied = planes(4);
    let error = DuplicateKeyError::new("DNA", "dup", ["A01"], supplied.clone());

    let seen: Vec<Vec<Arc<TestPlane>>> = thread::scope(|scope| {
        let readers: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| error.conflicting_descriptors().to_vec()))
            .collect();
        readers
            .into_iter()
            .map(|reader| reader.join().expect("Reader thread panicked"))
            .collect()
    });

    assert_eq!(seen.len(), 8, "Every reader should report back");
    for descriptors in &seen {
        assert_same_instances(descriptors, &supplied);
    }
    assert_eq!(error.channel_name(), "DNA");
}

#[test]
fn test_error_moves_to_another_thread() {
    let supplied = planes(2);
    let error: ImageSetError<TestPlane> =
        ImageSetError::duplicate("DNA", "dup", ["A01"], supplied.clone());

    let count = thread::spawn(move || {
        error
            .as_duplicate()
            .map(DuplicateKeyError::conflict_count)
            .unwrap_or(0)
    })
    .join()
    .expect("Worker thread panicked");

    assert_eq!(count, 2);
}
