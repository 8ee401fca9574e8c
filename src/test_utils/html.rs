use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text content of `element`.
pub(crate) fn collect_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join("").trim().to_owned()
}

/// The trimmed text of every element in `html` matching `selector`.
#[track_caller]
pub(crate) fn select_all_text(html: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();

    html.select(&selector)
        .map(|element| collect_text(&element))
        .collect()
}
