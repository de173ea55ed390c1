//! Warnings raised while resolving.
//!
//! The warning log is process-wide, so these tests live apart from the
//! property tests, which fill it with random input.

use wombat_common::warning::{recorded_warnings, set_warnings_enabled};
use wombat_style::{
    AttributeSource, CssColorResolver, CssFontResolver, MergedAttributeView, StyleRecord, map_style,
};

#[test]
fn test_skipped_input_is_reported() {
    set_warnings_enabled(false);
    let view = MergedAttributeView::from_sources(&[AttributeSource::from_declarations(
        "padding: 3em; list-style-image: url(dot.png); list-style-type: lower-greek",
    )]);
    let mut record = StyleRecord::default();
    map_style(&view, &CssColorResolver, &CssFontResolver::default(), &mut record);
    assert_eq!(record.padding_top, None);
    assert_eq!(record.list_style, None);

    let warnings = recorded_warnings();
    assert!(warnings.iter().any(|w| w.contains("'em'")));
    assert!(warnings.iter().any(|w| w.contains("list-style-image")));
    assert!(warnings.iter().any(|w| w.contains("lower-greek")));
}
