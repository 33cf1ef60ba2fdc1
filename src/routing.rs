//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, filter_transactions_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::FILTER_TRANSACTIONS_API,
            post(filter_transactions_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod router_tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::Html;

    use crate::{
        AppState, DashboardConfig, build_router, endpoints,
        test_utils::transaction_card_ids,
        transaction::{LoadOutcome, NO_MATCH_MESSAGE},
    };

    fn get_test_server() -> TestServer {
        let state = AppState::new(&DashboardConfig::default());
        let app = build_router(state);

        TestServer::new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn dashboard_page_renders() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_eq!(transaction_card_ids(&html, "#transactions"), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn add_then_list_transactions() {
        let server = get_test_server();

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("amount", "50")])
            .await
            .assert_status_see_other();
        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        let transactions = response.json::<serde_json::Value>();
        let transactions = transactions.as_array().unwrap();
        assert_eq!(transactions.len(), 4);
        assert_eq!(transactions[3]["id"], 4);
        assert_eq!(transactions[3]["amount"], 50.0);
    }

    #[tokio::test]
    async fn filter_form_round_trip() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FILTER_TRANSACTIONS_API)
            .form(&[("start", "2019-01-01"), ("end", "2020-12-31")])
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        assert_eq!(transaction_card_ids(&html, "#filter-results"), vec!["1", "2"]);

        let page = server.get(endpoints::DASHBOARD_VIEW).await;
        let html = Html::parse_document(&page.text());
        assert_eq!(transaction_card_ids(&html, "#filter-results"), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn filter_with_empty_date_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FILTER_TRANSACTIONS_API)
            .form(&[("start", ""), ("end", "2020-12-31")])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!response.text().contains(NO_MATCH_MESSAGE));
    }

    #[tokio::test]
    async fn filter_after_failed_load_uses_seed() {
        let config = DashboardConfig {
            past_transactions: Vec::new(),
            fetch_delay: Duration::from_millis(1),
            ..Default::default()
        };
        let state = AppState::new(&config);
        let server = TestServer::new(build_router(state.clone()))
            .expect("Could not create test server.");

        let outcome = state.start_initial_load(&config).await.unwrap();
        let response = server
            .post(endpoints::FILTER_TRANSACTIONS_API)
            .form(&[("start", "2018-01-01"), ("end", "2018-12-31")])
            .await;

        assert_eq!(outcome, LoadOutcome::Failed);
        let html = Html::parse_fragment(&response.text());
        assert_eq!(transaction_card_ids(&html, "#filter-results"), vec!["3"]);
    }

    #[tokio::test]
    async fn internal_error_page_is_served() {
        let server = get_test_server();

        let response = server.get(endpoints::INTERNAL_ERROR_VIEW).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status_not_found();
    }
}
