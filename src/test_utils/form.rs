use scraper::{ElementRef, Html, Selector};

use super::html::collect_text;

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_endpoint = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_endpoint, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_endpoint:?}"
    );
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str, type_: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        input_type, type_,
        "want input {name} with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );

    input
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    must_get_input(form, name, type_);
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = must_get_input(form, name, type_);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input {name} with value \"{value}\", got {input_value:?}"
    );
}

/// Assert that the form has a required select called `name` offering
/// exactly `options` (by value, ignoring an empty placeholder) with
/// `selected` chosen.
#[track_caller]
pub(crate) fn assert_form_select(
    form: &ElementRef<'_>,
    name: &str,
    options: &[&str],
    selected: Option<&str>,
) {
    let select_selector = Selector::parse(&format!("select[name=\"{name}\"]")).unwrap();
    let select = form
        .select(&select_selector)
        .next()
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));
    assert!(
        select.value().attr("required").is_some(),
        "want select with name {name} to have the required attribute but got none"
    );

    let option_selector = Selector::parse("option").unwrap();
    let got_options: Vec<_> = select
        .select(&option_selector)
        .filter_map(|option| option.value().attr("value"))
        .filter(|value| !value.is_empty())
        .collect();
    assert_eq!(got_options, options);

    let got_selected = select
        .select(&option_selector)
        .find(|option| option.value().attr("selected").is_some())
        .and_then(|option| option.value().attr("value"));
    assert_eq!(
        got_selected, selected,
        "want {selected:?} selected in {name}, got {got_selected:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    assert_eq!(text, collect_text(&submit_button));
}
