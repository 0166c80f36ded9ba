/*!
 * Tests for the segment model and SRT document synthesis
 */

use subsmith::subtitle_processor::{format_timestamp, render_srt, write_srt, Segment};

use crate::common;

/// Timestamp formatting of the zero origin
#[test]
fn test_format_timestamp_withZero_shouldRenderOrigin() {
    assert_eq!(format_timestamp(0.0), "00:00:00,000");
}

/// Negative inputs clamp to zero instead of underflowing
#[test]
fn test_format_timestamp_withNegativeInput_shouldClampToZero() {
    assert_eq!(format_timestamp(-5.0), "00:00:00,000");
    assert_eq!(format_timestamp(-0.001), "00:00:00,000");
}

/// Fractional seconds floor into the millisecond field
#[test]
fn test_format_timestamp_withFractionalSeconds_shouldFloorMillis() {
    assert_eq!(format_timestamp(3661.5), "01:01:01,500");
    assert_eq!(format_timestamp(0.9999), "00:00:00,999");
    assert_eq!(format_timestamp(1.25), "00:00:01,250");
}

/// Hours are not capped at 24
#[test]
fn test_format_timestamp_withLargeValue_shouldNotCapHours() {
    assert_eq!(format_timestamp(90000.0), "25:00:00,000");
    assert_eq!(format_timestamp(108000.0), "30:00:00,000");
}

/// Exact document bytes for a two-segment sequence
#[test]
fn test_render_srt_withTwoSegments_shouldMatchExactDocument() {
    let document = render_srt(&common::sample_segments());
    assert_eq!(
        document,
        "1\n00:00:00,000 --> 00:00:01,000\na\n\n2\n00:00:01,000 --> 00:00:02,000\nb\n"
    );
}

/// Empty input renders the empty string, not a lone newline
#[test]
fn test_render_srt_withEmptyInput_shouldRenderEmptyString() {
    assert_eq!(render_srt(&[]), "");
}

/// Exactly one trailing newline, no blank line at the end
#[test]
fn test_render_srt_withSegments_shouldEndWithSingleNewline() {
    let document = render_srt(&common::sample_segments());
    assert!(document.ends_with("b\n"));
    assert!(!document.ends_with("\n\n"));
}

/// Segment text is trimmed of surrounding whitespace only
#[test]
fn test_render_srt_withPaddedText_shouldTrimSurroundingWhitespace() {
    let segments = vec![Segment::new(0.0, 1.0, "  hello\nworld \n")];
    let document = render_srt(&segments);
    assert_eq!(document, "1\n00:00:00,000 --> 00:00:01,000\nhello\nworld\n");
}

/// A segment with end < start renders as-is instead of failing
#[test]
fn test_render_srt_withEndBeforeStart_shouldRenderAsIs() {
    let segments = vec![Segment::new(2.0, 1.0, "backwards")];
    let document = render_srt(&segments);
    assert!(document.contains("00:00:02,000 --> 00:00:01,000"));
}

/// Block order matches input order for any sequence
#[test]
fn test_render_srt_withManySegments_shouldPreserveOrder() {
    let segments: Vec<Segment> = (0..10)
        .map(|i| Segment::new(i as f64, i as f64 + 1.0, format!("line{}", i)))
        .collect();
    let document = render_srt(&segments);

    let mut last_position = 0;
    for i in 0..10 {
        let needle = format!("line{}", i);
        let position = document.find(&needle).expect("segment text missing");
        assert!(position >= last_position, "segment {} out of order", i);
        last_position = position;
    }
}

/// with_text replaces text, keeps timing, and leaves the source untouched
#[test]
fn test_segment_with_text_shouldCopyTimingAndReplaceText() {
    let original = Segment::new(1.5, 3.25, "bonjour");
    let translated = original.with_text("hello");

    assert_eq!(translated.start, 1.5);
    assert_eq!(translated.end, 3.25);
    assert_eq!(translated.text, "hello");
    assert_eq!(original.text, "bonjour");
}

/// Segments are plain values with structural equality
#[test]
fn test_segment_equality_withSameFields_shouldBeEqual() {
    let a = Segment::new(0.0, 1.0, "x");
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, Segment::new(0.0, 1.0, "y"));
}

/// write_srt persists the rendered document
#[test]
fn test_write_srt_withSegments_shouldPersistDocument() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("out.srt");

    write_srt(&common::sample_segments(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, render_srt(&common::sample_segments()));
}
