//! Form model tests
//!
//! Builds forms from real markup and checks values, grouping, submit
//! resolution and serialization.

use robo_forms::{
    Field, FieldValue, Form, FormEnctype, FormError, FormMethod, Payload, PayloadChannel,
};
use robo_html::parse;

fn form(html: &str) -> Form {
    Form::from_document(&parse(html)).unwrap()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_post_form_serializes_to_body() {
    let form = form(r#"<form method="post" action="/post/"><input name="deacon" value="john"/></form>"#);
    let submission = form.submission(None).unwrap();

    assert_eq!(submission.method, FormMethod::Post);
    assert_eq!(submission.action, "/post/");
    assert_eq!(submission.payload.data(), pairs(&[("deacon", "john")]));

    let args = submission.payload.to_request_arguments(submission.method);
    assert!(args.params.is_empty());
    assert_eq!(args.data, pairs(&[("deacon", "john")]));
}

#[test]
fn test_multi_select_emits_each_selected_option() {
    let form = form(
        r#"<form><select name="carlist" multiple>
            <option value="volvo">Volvo</option>
            <option value="saab" selected>Saab</option>
            <option value="audi" selected>Audi</option>
        </select></form>"#,
    );
    let payload = form.serialize(None).unwrap();

    assert_eq!(payload.data(), pairs(&[("carlist", "saab"), ("carlist", "audi")]));
    assert_eq!(
        form.get_field("carlist").unwrap().value(),
        FieldValue::from(["saab", "audi"])
    );
}

#[test]
fn test_radio_group_value_flips() {
    let mut form = form(
        r#"<form>
            <input type="radio" name="sex" value="male" checked>
            <input type="radio" name="sex" value="female">
        </form>"#,
    );
    assert_eq!(form.get_field("sex").unwrap().value(), FieldValue::from("male"));

    form.set_field_value("sex", "female").unwrap();

    let group = form.get_field("sex").unwrap().as_radio().unwrap();
    let checked: Vec<bool> = group.options().iter().map(|o| o.checked).collect();
    assert_eq!(checked, vec![false, true]);
    assert_eq!(form.serialize(None).unwrap().data(), pairs(&[("sex", "female")]));
}

#[test]
fn test_missing_action_is_empty() {
    let form = form(r#"<form><input name="q"></form>"#);
    assert_eq!(form.action(), "");
    assert_eq!(form.method(), FormMethod::Get);
    assert_eq!(form.submission(None).unwrap().action, "");
}

// ============================================================================
// FIELD VALUES
// ============================================================================

#[test]
fn test_single_select_value() {
    let form = form(
        r#"<form><select name="car">
            <option value="volvo">Volvo</option>
            <option selected>  My  Saab </option>
            <option value="audi" selected>Audi</option>
        </select></form>"#,
    );
    let select = form.get_field("car").unwrap().as_select().unwrap();

    // Text fallback is whitespace-normalized; first `selected` wins
    assert_eq!(select.value_options(), vec!["volvo", "My Saab", "audi"]);
    assert_eq!(form.get_field("car").unwrap().value(), FieldValue::from("My Saab"));
    assert_eq!(form.serialize(None).unwrap().data(), pairs(&[("car", "My Saab")]));
}

#[test]
fn test_select_without_selection_emits_nothing() {
    let mut form = form(r#"<form><select name="car"><option>a</option><option>b</option></select></form>"#);
    assert_eq!(form.get_field("car").unwrap().value(), FieldValue::Empty);
    assert!(form.serialize(None).unwrap().is_empty());

    form.set_field_value("car", "b").unwrap();
    assert_eq!(form.serialize(None).unwrap().data(), pairs(&[("car", "b")]));
}

#[test]
fn test_multi_select_never_scalar() {
    let mut form = form(
        r#"<form><select name="c" multiple><option>a</option><option selected>b</option></select></form>"#,
    );
    assert_eq!(form.get_field("c").unwrap().value(), FieldValue::from(["b"]));

    form.set_field_value("c", "a").unwrap();
    assert_eq!(form.get_field("c").unwrap().value(), FieldValue::from(["a"]));

    form.set_field_value("c", FieldValue::Empty).unwrap();
    assert!(form.serialize(None).unwrap().is_empty());
}

#[test]
fn test_textarea_and_defaults() {
    let form = form(
        r#"<form>
            <input name="plain">
            <input type="password" name="pw" value="secret">
            <textarea name="bio">Hello
world</textarea>
        </form>"#,
    );
    let payload = form.serialize(None).unwrap();
    assert_eq!(payload.get("plain"), Some(""));
    assert_eq!(payload.get("pw"), Some("secret"));
    assert_eq!(payload.get("bio"), Some("Hello\nworld"));
}

#[test]
fn test_checkbox_default_value_is_on() {
    let form = form(r#"<form><input type="checkbox" name="agree" checked></form>"#);
    assert_eq!(form.serialize(None).unwrap().data(), pairs(&[("agree", "on")]));
}

// ============================================================================
// CHECKBOX GROUPS
// ============================================================================

#[test]
fn test_checkbox_toggle_reflected() {
    let mut form = form(
        r#"<form>
            <input type="checkbox" name="car" value="volvo" checked>
            <input type="text" name="between">
            <input type="checkbox" name="car" value="saab">
        </form>"#,
    );
    let before = form.serialize(None).unwrap();
    assert_eq!(before.get_all("car"), vec!["volvo"]);

    let group = form.get_field_mut("car").unwrap().as_checkbox_mut().unwrap();
    group.set_checked("saab", true).unwrap();
    group.set_checked("volvo", false).unwrap();

    // The group sits where its first box was
    let after = form.serialize(None).unwrap();
    assert_eq!(after.data(), pairs(&[("car", "saab"), ("between", "")]));
}

#[test]
fn test_checkbox_group_set_value() {
    let mut form = form(
        r#"<form>
            <input type="checkbox" name="c" value="a">
            <input type="checkbox" name="c" value="b">
            <input type="checkbox" name="c" value="d">
        </form>"#,
    );
    form.set_field_value("c", ["d", "a"]).unwrap();
    assert_eq!(form.serialize(None).unwrap().get_all("c"), vec!["a", "d"]);

    let err = form.set_field_value("c", ["z"]).unwrap_err();
    assert!(matches!(err, FormError::InvalidValue { .. }));
    // Failed set leaves state untouched
    assert_eq!(form.serialize(None).unwrap().get_all("c"), vec!["a", "d"]);
}

// ============================================================================
// INVALID VALUES
// ============================================================================

#[test]
fn test_radio_rejects_unknown_and_multiple() {
    let mut form = form(
        r#"<form><input type="radio" name="r" value="x"><input type="radio" name="r" value="y"></form>"#,
    );
    assert!(matches!(
        form.set_field_value("r", "nope"),
        Err(FormError::InvalidValue { .. })
    ));
    assert!(matches!(
        form.set_field_value("r", ["x", "y"]),
        Err(FormError::InvalidValue { .. })
    ));
    assert_eq!(form.get_field("r").unwrap().value(), FieldValue::Empty);
}

#[test]
fn test_select_rejects_unknown_and_multiple() {
    let mut form = form(r#"<form><select name="s"><option>a</option></select></form>"#);
    assert!(matches!(
        form.set_field_value("s", "b"),
        Err(FormError::InvalidValue { .. })
    ));
    assert!(matches!(
        form.set_field_value("s", ["a"]),
        Err(FormError::InvalidValue { .. })
    ));
}

#[test]
fn test_text_rejects_multiple() {
    let mut form = form(r#"<form><input name="q"></form>"#);
    assert!(matches!(
        form.set_field_value("q", ["a", "b"]),
        Err(FormError::InvalidValue { .. })
    ));
}

#[test]
fn test_unknown_field_name() {
    let mut form = form(r#"<form><input name="q"></form>"#);
    assert_eq!(form.get_field("nope"), Err(FormError::NotFound("nope".into())));
    assert_eq!(
        form.set_field_value("nope", "x"),
        Err(FormError::NotFound("nope".into()))
    );
}

// ============================================================================
// SUBMIT CONTROLS
// ============================================================================

const TWO_SUBMITS: &str = r#"<form action="/default" method="get">
    <input name="q" value="rust">
    <input type="submit" name="go" value="Search">
    <button name="lucky" value="1" formaction="/lucky" formmethod="post">Lucky</button>
</form>"#;

#[test]
fn test_ambiguous_submit() {
    let form = form(TWO_SUBMITS);
    assert_eq!(form.serialize(None), Err(FormError::AmbiguousSubmit { count: 2 }));
}

#[test]
fn test_designated_submit_omits_other() {
    let form = form(TWO_SUBMITS);
    let go = form.field_id("go").unwrap();
    let lucky = form.field_id("lucky").unwrap();

    let payload = form.serialize(Some(go)).unwrap();
    assert_eq!(payload.data(), pairs(&[("q", "rust"), ("go", "Search")]));

    let submission = form.submission(Some(lucky)).unwrap();
    assert_eq!(submission.payload.data(), pairs(&[("q", "rust"), ("lucky", "1")]));
    assert_eq!(submission.method, FormMethod::Post);
    assert_eq!(submission.action, "/lucky");

    // Overrides only apply to the control that carries them
    let submission = form.submission(Some(go)).unwrap();
    assert_eq!(submission.method, FormMethod::Get);
    assert_eq!(submission.action, "/default");
}

#[test]
fn test_invalid_submit() {
    let form = form(TWO_SUBMITS);
    let q = form.field_id("q").unwrap();
    assert_eq!(form.serialize(Some(q)), Err(FormError::InvalidSubmit));

    let other = self::form(r#"<p></p><form><input type="submit" name="x"></form>"#);
    let foreign = other.field_id("x").unwrap();
    assert_eq!(form.serialize(Some(foreign)), Err(FormError::InvalidSubmit));
}

#[test]
fn test_submit_from_same_layout_document_rejected() {
    let page = |n: &str| {
        format!(
            r#"<form><input type="submit" name="x" value="{n}1"><input type="submit" name="y" value="{n}2"></form>"#
        )
    };
    let a = form(&page("A"));
    let b = form(&page("B"));

    let a_y = a.field_id("y").unwrap();
    assert_eq!(b.serialize(Some(a_y)), Err(FormError::InvalidSubmit));
    assert!(b.field(a_y).is_none());
    assert!(b.tags(a_y).is_empty());

    // A clone is the same form, so its handles stay valid
    let copy = b.clone();
    let b_y = b.field_id("y").unwrap();
    assert_eq!(
        copy.serialize(Some(b_y)).unwrap().data(),
        pairs(&[("y", "B2")])
    );
}

#[test]
fn test_single_submit_is_implicit() {
    let form = form(r#"<form><input name="a" value="1"><input type="submit" name="s" value="Go"></form>"#);
    assert_eq!(
        form.serialize(None).unwrap().data(),
        pairs(&[("a", "1"), ("s", "Go")])
    );
}

#[test]
fn test_non_submitting_buttons() {
    let form = form(
        r#"<form>
            <input type="reset" name="r">
            <input type="button" name="b">
            <button type="button" name="bb">x</button>
            <button type="reset" name="br">y</button>
            <input name="a" value="1">
        </form>"#,
    );
    assert!(form.submit_controls().is_empty());
    assert_eq!(form.serialize(None).unwrap().data(), pairs(&[("a", "1")]));
}

#[test]
fn test_button_without_type_submits() {
    let form = form(r#"<form><button name="go" value="yes">Go</button></form>"#);
    assert_eq!(form.submit_controls().len(), 1);
    assert_eq!(form.serialize(None).unwrap().data(), pairs(&[("go", "yes")]));
}

#[test]
fn test_formenctype_override() {
    let form = form(
        r#"<form enctype="text/plain"><button name="up" formenctype="multipart/form-data">Up</button></form>"#,
    );
    assert_eq!(form.enctype(), FormEnctype::TextPlain);
    assert_eq!(form.submission(None).unwrap().enctype, FormEnctype::Multipart);
}

// ============================================================================
// PARTICIPATION
// ============================================================================

#[test]
fn test_disabled_fields_excluded() {
    let form = form(
        r#"<form>
            <input name="a" value="1" disabled>
            <fieldset disabled>
                <legend><input name="in_legend" value="2"></legend>
                <input name="b" value="3">
            </fieldset>
            <input type="checkbox" name="c" value="x" checked disabled>
            <input type="checkbox" name="c" value="y" checked>
            <input name="d" value="4">
        </form>"#,
    );
    let payload = form.serialize(None).unwrap();
    assert_eq!(
        payload.data(),
        pairs(&[("in_legend", "2"), ("c", "y"), ("d", "4")])
    );
    assert!(form.get_field("b").unwrap().is_disabled());
}

#[test]
fn test_unnamed_input_never_serialized() {
    let form = form(r#"<form><input value="x"><input name="" value="y"><input name="z" value="1"></form>"#);
    assert_eq!(form.len(), 3);
    assert_eq!(form.serialize(None).unwrap().data(), pairs(&[("z", "1")]));
}

#[test]
fn test_file_fields_use_files_channel() {
    let mut form = form(
        r#"<form method="post" enctype="multipart/form-data">
            <input name="title" value="doc">
            <input type="file" name="upload">
        </form>"#,
    );
    let field = form.get_field("upload").unwrap();
    assert_eq!(field.channel(), PayloadChannel::Files);

    form.set_field_value("upload", "/tmp/report.pdf").unwrap();
    let payload = form.serialize(None).unwrap();
    assert_eq!(payload.data(), pairs(&[("title", "doc")]));
    assert_eq!(payload.files(), pairs(&[("upload", "/tmp/report.pdf")]));

    let args = payload.to_request_arguments(FormMethod::Post);
    assert_eq!(args.files.len(), 1);
    assert!(!args.data.iter().any(|(k, _)| k == "upload"));
}

#[test]
fn test_empty_file_field_sends_empty_part() {
    let form = form(r#"<form><input type="file" name="f"></form>"#);
    assert_eq!(form.serialize(None).unwrap().files(), pairs(&[("f", "")]));
}

#[test]
fn test_document_order_preserved() {
    let form = form(
        r#"<form>
            <input name="z" value="1">
            <select name="a"><option selected>2</option></select>
            <textarea name="m">3</textarea>
            <input type="hidden" name="b" value="4">
        </form>"#,
    );
    let payload = form.serialize(None).unwrap();
    let keys: Vec<&str> = payload.data().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["z", "a", "m", "b"]);
    assert_eq!(form.keys(), keys);
}

#[test]
fn test_serialize_idempotent() {
    let form = form(TWO_SUBMITS);
    let go = form.field_id("go");
    let first: Payload = form.serialize(go).unwrap();
    let second = form.serialize(go).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// FORM SCOPE
// ============================================================================

#[test]
fn test_external_fields_by_form_attribute() {
    let doc = parse(
        r#"<input name="before" form="signup" value="0">
        <form id="signup" name="signup-form">
            <input name="inside" value="1">
            <input name="elsewhere" form="other" value="x">
        </form>
        <input name="after" form="signup" value="2">
        <input name="by_name" form="signup-form" value="3">
        <input name="stray" value="4">"#,
    );
    let form = Form::from_document(&doc).unwrap();
    assert_eq!(form.keys(), vec!["before", "inside", "after", "by_name"]);
}

#[test]
fn test_form_not_found_and_ambiguous() {
    assert_eq!(
        Form::from_document(&parse("<p>no forms</p>")),
        Err(FormError::FormNotFound)
    );
    assert_eq!(
        Form::from_document(&parse("<form></form><form></form>")),
        Err(FormError::AmbiguousForm { count: 2 })
    );

    let doc = parse("<form id=a></form><form id=b></form>");
    let forms = Form::all_from_document(&doc).unwrap();
    let ids: Vec<_> = forms.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec![Some("a"), Some("b")]);
}

#[test]
fn test_unrecognized_type_fails_form() {
    assert_eq!(
        Form::from_document(&parse(r#"<form><input type="hologram" name="h"></form>"#)),
        Err(FormError::UnrecognizedFieldType("hologram".into()))
    );
}

#[test]
fn test_field_for_tag_returns_group() {
    let doc = parse(
        r#"<form><input type="radio" name="r" value="1"><input type="radio" name="r" value="2"></form>"#,
    );
    let form = Form::from_document(&doc).unwrap();
    let second = doc.elements_by_tag_name(&["input"])[1];

    let field = form.field_for_tag(second).unwrap();
    assert!(matches!(field, Field::Radio(_)));
    assert_eq!(field.as_radio().unwrap().options().len(), 2);

    let by_value = form.find_field(|tag| tag.attr("value") == Some("2")).unwrap();
    assert_eq!(by_value, field);
}

#[test]
fn test_form_outlives_document() {
    let mut form = {
        let doc = parse(r#"<form><input name="q" value="old"></form>"#);
        Form::from_document(&doc).unwrap()
    };
    form.set_field_value("q", "new").unwrap();
    assert_eq!(form.serialize(None).unwrap().get("q"), Some("new"));
}

// ============================================================================
// LABELS AND DISPLAY
// ============================================================================

#[test]
fn test_labels_resolved() {
    let form = form(
        r#"<form>
            <label for="user">User name</label>
            <input id="user" name="user">
            <label><input type="checkbox" name="remember"> Remember me</label>
            <input name="search" aria-label="Search box">
            <input type="hidden" name="token" id="tok"><label for="tok">Token</label>
        </form>"#,
    );
    assert_eq!(form.get_field("user").unwrap().label(), "User name");
    assert_eq!(form.get_field("search").unwrap().label(), "Search box");
    assert_eq!(
        form.get_field("remember").unwrap().as_checkbox().unwrap().options()[0].label,
        "Remember me"
    );
    assert_eq!(form.get_field("token").unwrap().label(), "");
}

#[test]
fn test_summary_table() {
    let form = form(
        r#"<form method="post" action="/post/">
            <input name="deacon" value="john">
            <input type="hidden" name="csrf" value="abc">
        </form>"#,
    );
    let text = form.to_string();
    assert!(text.starts_with("Form Object:\n      .action: \"/post/\"\n      .method: POST\n"));
    assert!(text.contains("| Tag Type"));
    assert!(text.contains("deacon"));
    assert!(!text.contains("csrf"));
    assert!(form.summary(true).contains("csrf"));
}

#[test]
fn test_summary_only_hidden_or_empty() {
    let hidden = form(r#"<form><input type="hidden" name="t" value="1"></form>"#);
    assert!(hidden.to_string().contains("Only hidden fields present in the form"));

    let empty = form("<form></form>");
    assert!(empty.to_string().contains("No fields present in the form"));
}
