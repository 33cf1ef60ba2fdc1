//! Defines the route handler and view for the dashboard page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    dashboard::{Dashboard, DashboardState},
    endpoints,
    html::{
        ALERT_CONTAINER_ID, BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, SECTION_HEADING_STYLE, base,
        loading_spinner,
    },
    transaction::{FILTER_RESULTS_ID, filter_results_view, format_date, transaction_list_view},
};

fn filter_form(dashboard: &Dashboard) -> Markup {
    let selected_range = dashboard.selected_range();

    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            h3 class=(SECTION_HEADING_STYLE) { "Filter Transactions by Date" }

            form
                hx-post=(endpoints::FILTER_TRANSACTIONS_API)
                hx-target={ "#" (FILTER_RESULTS_ID) }
                hx-swap="outerHTML"
                hx-target-error={ "#" (ALERT_CONTAINER_ID) }
                class="w-full space-y-4"
            {
                div
                {
                    label for="start" class=(FORM_LABEL_STYLE) { "Select initial date:" }

                    input
                        name="start"
                        id="start"
                        type="date"
                        value=(format_date(selected_range.start))
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="end" class=(FORM_LABEL_STYLE) { "Select end date:" }

                    input
                        name="end"
                        id="end"
                        type="date"
                        value=(format_date(selected_range.end))
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter by Date" }
            }
        }
    }
}

fn add_transaction_form() -> Markup {
    let spinner = loading_spinner();

    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            h3 class=(SECTION_HEADING_STYLE) { "Add New Transaction" }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error={ "#" (ALERT_CONTAINER_ID) }
                class="w-full space-y-4"
            {
                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Transaction Amount:" }

                    input
                        name="amount"
                        id="amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Add Transaction"
                }
            }
        }
    }
}

fn dashboard_view(dashboard: &Dashboard) -> Markup {
    let content = html! {
        header class="py-4 text-center text-gray-900 dark:text-white"
        {
            h2 class="text-2xl font-semibold" { "Payment Transaction Dashboard" }
        }

        div class=(PAGE_CONTAINER_STYLE)
        {
            section id="transactions" class="w-full max-w-md"
            {
                h3 class=(SECTION_HEADING_STYLE) { "Transaction List:" }

                (transaction_list_view(dashboard.transactions()))
            }

            (filter_form(dashboard))

            (filter_results_view(dashboard.filter_result()))

            (add_transaction_form())
        }
    };

    base("Dashboard", &content)
}

/// Renders the dashboard page.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let dashboard = state.lock()?;

    Ok(dashboard_view(&dashboard).into_response())
}
