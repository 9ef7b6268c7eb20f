use super::*;

#[test]
fn spans_render_as_ranges() {
    let span = Span::new(10, 20);
    assert_eq!(span.to_string(), "10..20");
    assert_eq!(format!("{span:?}"), "10..20");
}

#[test]
fn dummy_span_is_default() {
    assert_eq!(Span::DUMMY, Span::default());
    assert_eq!(Span::DUMMY, Span::new(0, 0));
}
