use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn response_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The IDs of the transaction cards inside the element matching `container`, in page order.
#[track_caller]
pub(crate) fn transaction_card_ids(html: &Html, container: &str) -> Vec<String> {
    let selector = Selector::parse(&format!("{container} li[data-transaction-id]")).unwrap();

    html.select(&selector)
        .map(|li| {
            li.value()
                .attr("data-transaction-id")
                .expect("card missing data-transaction-id")
                .to_owned()
        })
        .collect()
}
