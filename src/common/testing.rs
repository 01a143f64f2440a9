//! Markup checks shared by the renderer tests.

/// Asserts the markup parses as XML with a single `<svg>` root element.
pub fn assert_single_svg_root(markup: &str) {
    let document = roxmltree::Document::parse(markup)
        .unwrap_or_else(|err| panic!("malformed markup ({err}) in {markup}"));
    assert_eq!(
        document.root_element().tag_name().name(),
        "svg",
        "expected a single <svg> root in {markup}"
    );
}

/// Asserts an HTML fragment parses as XML, returning its top-level element names.
pub fn assert_balanced(markup: &str) -> Vec<String> {
    let wrapped = format!("<fragment>{markup}</fragment>");
    let document = roxmltree::Document::parse(&wrapped)
        .unwrap_or_else(|err| panic!("malformed markup ({err}) in {markup}"));

    document
        .root_element()
        .children()
        .filter(|node| node.is_element())
        .map(|node| node.tag_name().name().to_string())
        .collect()
}

#[test]
fn well_formed_markup_passes() {
    assert_single_svg_root(r#"<svg width="1"><g><!-- x --><rect x="0" /></g></svg>"#);
    assert_eq!(assert_balanced("<style>a {}</style><span>b</span>"), vec!["style", "span"]);
}

#[test]
#[should_panic]
fn unclosed_markup_fails() {
    assert_single_svg_root("<svg><g></svg>");
}

#[test]
#[should_panic]
fn bare_entity_fails() {
    assert_single_svg_root("<svg><text>H&<b></text></svg>");
}

#[test]
#[should_panic]
fn second_root_fails() {
    assert_single_svg_root("<svg></svg><svg></svg>");
}

#[test]
#[should_panic]
fn non_svg_root_fails() {
    assert_single_svg_root("<span></span>");
}
