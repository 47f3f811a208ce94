// Chunk: docs/chunks/string_builder - Growable byte builder with positional formatted insert

//! Integration tests for realistic editing sequences.
//!
//! These tests verify that content, length and terminator stay in sync
//! through mixed insert, append, delete and resize patterns.

use pretty_assertions::assert_eq;
use scribe_builder::{ResizeFlags, StringBuilder};

#[test]
fn insert_word_into_greeting() {
    let mut builder = StringBuilder::from_bytes(b"Hello, World!").unwrap();

    builder.insert(6, b" Beautiful").unwrap();

    assert_eq!(builder.as_bytes(), b"Hello, Beautiful World!");
    assert_eq!(builder.len(), 23);
}

#[test]
fn insert_word_after_space() {
    let mut builder = StringBuilder::from_bytes(b"Hello, World!").unwrap();

    builder.insert(7, b"Beautiful ").unwrap();

    assert_eq!(builder.as_bytes(), b"Hello, Beautiful World!");
    assert_eq!(builder.len(), 23);
}

#[test]
fn delete_word_from_greeting() {
    let mut builder = StringBuilder::from_bytes(b"Hello, Beautiful World!").unwrap();

    builder.delete(6, 10);

    assert_eq!(builder.as_bytes(), b"Hello, World!");
    assert_eq!(builder.len(), 13);
}

#[test]
fn append_pieces_then_trim_front() {
    let mut builder = StringBuilder::new();

    builder.append(b"Hello").unwrap();
    builder.append(b", World!").unwrap();
    builder.append(b"").unwrap();
    assert_eq!(builder.as_bytes(), b"Hello, World!");

    builder.delete(0, 7);
    assert_eq!(builder.as_bytes(), b"World!");
    assert_eq!(builder.as_bytes_with_nul(), b"World!\0");
}

#[test]
fn build_table_with_formatted_rows() {
    let mut builder = StringBuilder::new();
    let rows = [("alpha", 1), ("beta", 22), ("gamma", 333)];

    for (name, value) in rows {
        builder
            .append_fmt(format_args!("{:<6}|{:>4}\n", name, value))
            .unwrap();
    }
    // Header goes in front once the rows are known.
    builder.insert_fmt(0, format_args!("{:<6}|{:>4}\n", "name", "n")).unwrap();

    assert_eq!(
        builder.to_string(),
        "name  |   n\nalpha |   1\nbeta  |  22\ngamma | 333\n"
    );
}

#[test]
fn insert_into_middle_repeatedly() {
    let mut builder = StringBuilder::from_bytes(b"[]").unwrap();

    for digit in (0..10).rev() {
        builder.insert_fmt(1, format_args!("{}", digit)).unwrap();
    }

    assert_eq!(builder.as_bytes(), b"[0123456789]");
}

#[test]
fn insert_past_end_behaves_as_append() {
    let mut inserted = StringBuilder::from_bytes(b"abc").unwrap();
    let mut appended = inserted.clone();

    inserted.insert(inserted.len() + 100, b"xyz").unwrap();
    appended.append(b"xyz").unwrap();

    assert_eq!(inserted.as_bytes(), appended.as_bytes());
    assert_eq!(inserted.capacity(), appended.capacity());
}

#[test]
fn delete_with_huge_count_truncates() {
    let mut builder = StringBuilder::from_bytes(b"Hello, Beautiful World!").unwrap();

    builder.delete(6, usize::MAX);

    assert_eq!(builder.as_bytes(), b"Hello,");
}

#[test]
fn delete_range_inclusive_bounds() {
    let mut builder = StringBuilder::from_bytes(b"0123456789").unwrap();

    builder.delete_range(2, 4);
    assert_eq!(builder.as_bytes(), b"0156789");

    builder.delete_range(0, 0);
    assert_eq!(builder.as_bytes(), b"156789");

    builder.delete_range(3, usize::MAX);
    assert_eq!(builder.as_bytes(), b"156");
}

#[test]
fn delete_everything_then_rebuild() {
    let mut builder = StringBuilder::from_bytes(b"temporary").unwrap();

    builder.delete(0, builder.len());
    assert!(builder.is_empty());
    assert_eq!(builder.as_bytes_with_nul(), b"\0");

    builder.append(b"fresh").unwrap();
    assert_eq!(builder.as_bytes(), b"fresh");
}

#[test]
fn truncated_append_reports_full_length() {
    let mut builder = StringBuilder::from_bytes(b"id:").unwrap();

    let written = builder
        .append_fmt_bounded(5, format_args!("{}", 1234567))
        .unwrap();

    assert_eq!(written, 7);
    assert_eq!(builder.as_bytes(), b"id:1234");
}

#[test]
fn bounded_append_that_fits() {
    let mut builder = StringBuilder::new();

    let written = builder.append_bounded(16, b"short").unwrap();

    assert_eq!(written, 5);
    assert_eq!(builder.as_bytes(), b"short");
}

#[test]
fn resize_content_only_keeps_scratch() {
    let mut builder = StringBuilder::from_bytes(b"Hello, World!").unwrap();
    let scratch = builder.scratch_capacity();

    builder.resize(5, ResizeFlags::CONTENT | ResizeFlags::FORCE).unwrap();

    assert_eq!(builder.as_bytes(), b"Hell");
    assert_eq!(builder.capacity(), 5);
    assert_eq!(builder.scratch_capacity(), scratch);
}

#[test]
fn clear_is_idempotent() {
    let mut builder = StringBuilder::from_bytes(&[b'q'; 5000]).unwrap();

    for _ in 0..3 {
        builder.clear().unwrap();
        assert_eq!(builder.len(), 0);
        assert_eq!(builder.capacity(), 64);
        assert_eq!(builder.scratch_capacity(), 64);
    }
}

#[test]
fn shrink_to_fit_twice_is_noop() {
    let mut builder = StringBuilder::from_bytes(b"Hello, World!").unwrap();

    builder.shrink_to_fit().unwrap();
    let capacity = builder.capacity();
    let scratch = builder.scratch_capacity();
    builder.shrink_to_fit().unwrap();

    assert_eq!(capacity, 14);
    assert_eq!(scratch, 64);
    assert_eq!(builder.capacity(), capacity);
    assert_eq!(builder.scratch_capacity(), scratch);
    assert_eq!(builder.as_bytes(), b"Hello, World!");
}

#[test]
fn duplicate_is_independent() {
    let mut original = StringBuilder::from_bytes(b"shared start").unwrap();
    let copy = original.clone();

    original.delete(0, 7);

    assert_eq!(original.as_bytes(), b"start");
    assert_eq!(copy.as_bytes(), b"shared start");
}

#[test]
fn copy_from_overwrites_target() {
    let source = StringBuilder::from_bytes(&[b'a'; 300]).unwrap();
    let mut target = StringBuilder::from_bytes(b"something else").unwrap();

    target.copy_from(&source).unwrap();

    assert_eq!(target.as_bytes(), source.as_bytes());
    assert_eq!(target.len(), source.len());
    assert_eq!(target.capacity(), source.capacity());
    assert_eq!(target.scratch_capacity(), source.scratch_capacity());
}

#[test]
fn dropping_absent_builder_is_noop() {
    let builder: Option<StringBuilder> = None;
    drop(builder);
}
