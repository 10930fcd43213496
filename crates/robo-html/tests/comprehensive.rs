//! Comprehensive tests for robo-html
//!
//! Parsing edge cases that matter for form and link extraction.

use robo_html::{HtmlParser, parse};

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("");
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
}

#[test]
fn test_parse_text_only() {
    let doc = parse("Hello World");
    let body = doc.elements_by_tag_name(&["body"])[0];
    assert_eq!(doc.text_content(body), "Hello World");
}

#[test]
fn test_parse_self_closing_tags() {
    let html = r#"<br><hr><img src="test.png"><input type="text">"#;
    let doc = parse(html);
    assert_eq!(doc.elements_by_tag_name(&["br", "hr", "img", "input"]).len(), 4);
}

#[test]
fn test_parse_malformed_html() {
    // HTML5 parser should handle malformed HTML gracefully
    let html = r#"
        <div>
            <p>Unclosed paragraph
            <span>Unclosed span
        </div>
        <p>Another paragraph without closing
    "#;

    let doc = parse(html);
    assert_eq!(doc.elements_by_tag_name(&["p"]).len(), 2);
}

#[test]
fn test_parse_entities() {
    let doc = parse(r#"<p>&lt;tag&gt; &amp; &quot;quotes&quot;</p>"#);
    let p = doc.elements_by_tag_name(&["p"])[0];
    assert_eq!(doc.text_content(p), r#"<tag> & "quotes""#);
}

#[test]
fn test_parse_unicode() {
    let doc = parse("<p>Hello 世界! Ñoño</p>");
    let p = doc.elements_by_tag_name(&["p"])[0];
    assert_eq!(doc.text_content(p), "Hello 世界! Ñoño");
}

#[test]
fn test_parse_bytes_lossy() {
    let bytes = b"<p>ok\xff</p>";
    let doc = HtmlParser::new().parse_bytes(bytes, "http://example.com/");
    let p = doc.elements_by_tag_name(&["p"])[0];
    assert_eq!(doc.url(), "http://example.com/");
    assert!(doc.text_content(p).starts_with("ok"));
}

// ============================================================================
// FORM MARKUP
// ============================================================================

#[test]
fn test_textarea_whitespace_preserved() {
    let doc = parse("<form><textarea name=t>  two spaces</textarea></form>");
    let textarea = doc.elements_by_tag_name(&["textarea"])[0];
    assert_eq!(doc.text_content(textarea), "  two spaces");
}

#[test]
fn test_nested_form_dropped() {
    // The HTML5 tree builder ignores a <form> start tag inside an open form
    let doc = parse("<form id=a><form id=b><input name=x></form></form>");
    assert_eq!(doc.elements_by_tag_name(&["form"]).len(), 1);
}

#[test]
fn test_boolean_attributes_present() {
    let doc = parse("<input type=checkbox name=c CHECKED disabled>");
    let input = doc.elements_by_tag_name(&["input"])[0];
    let elem = doc.element(input).unwrap();
    assert!(elem.has_attr("checked"));
    assert!(elem.has_attr("disabled"));
    assert_eq!(elem.attr("checked"), Some(""));
}

#[test]
fn test_options_inside_select() {
    let doc = parse(
        r#"<select name="carlist" multiple>
            <option value="volvo">Volvo</option>
            <optgroup label="Swedish"><option>Saab</option></optgroup>
        </select>"#,
    );
    let select = doc.elements_by_tag_name(&["select"])[0];
    let options = doc.find_all(select, |_, e| e.is("option"));
    assert_eq!(options.len(), 2);
    assert_eq!(doc.text_content(options[1]), "Saab");
}
