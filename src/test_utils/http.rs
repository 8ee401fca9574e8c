use axum::{
    body::Body,
    http::{StatusCode, header::LOCATION},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status(response: &Response<Body>, want: StatusCode) {
    assert_eq!(
        response.status(),
        want,
        "want status {want}, got {}",
        response.status()
    );
}

#[track_caller]
pub(crate) fn assert_html_content_type(response: &Response<Body>) {
    assert_eq!(
        get_header(response, "content-type"),
        "text/html; charset=utf-8"
    );
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    response
        .headers()
        .get(header_name)
        .unwrap_or_else(|| panic!("Headers missing {header_name}"))
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(get_header(response, "hx-redirect"), endpoint);
}

#[track_caller]
pub(crate) fn assert_redirect(response: &Response<Body>, endpoint: &str) {
    assert!(
        response.status().is_redirection(),
        "want a redirect, got {}",
        response.status()
    );
    assert_eq!(get_header(response, LOCATION.as_str()), endpoint);
}
