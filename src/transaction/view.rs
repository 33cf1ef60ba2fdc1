//! HTML views for lists of transactions and date filter results.

use maud::{Markup, html};

use crate::{
    dashboard::FilterResult,
    html::{CARD_STYLE, SECTION_HEADING_STYLE, format_amount},
    transaction::{Transaction, format_date, format_iso_date},
};

/// The ID of the element holding the date filter results.
pub const FILTER_RESULTS_ID: &str = "filter-results";

/// The message shown when a date filter matches nothing.
pub const NO_MATCH_MESSAGE: &str = "No matching transactions found";

fn transaction_card(transaction: &Transaction) -> Markup {
    html! {
        li class=(CARD_STYLE) data-transaction-id=(transaction.id)
        {
            p { strong { "Id:" } " " (transaction.id) }
            p { strong { "Amount:" } " " (format_amount(transaction.amount)) }
            p { strong { "Date:" } " " (format_iso_date(transaction.date)) }
        }
    }
}

/// A list with one card per transaction.
pub fn transaction_list_view(transactions: &[Transaction]) -> Markup {
    html! {
        ul class="w-full"
        {
            @for transaction in transactions {
                (transaction_card(transaction))
            }
        }
    }
}

/// The section showing the result of the last date filter.
///
/// Renders an empty placeholder when no filter has been run, so HTMX has an
/// element to swap the first result into.
pub fn filter_results_view(filter_result: Option<&FilterResult>) -> Markup {
    html! {
        section id=(FILTER_RESULTS_ID) class="w-full max-w-md"
        {
            @if let Some(result) = filter_result {
                @if result.transactions.is_empty() {
                    p { (NO_MATCH_MESSAGE) }
                } @else {
                    h3 class=(SECTION_HEADING_STYLE)
                    {
                        "Filtered Transactions between "
                        (format_date(result.range.start))
                        " and "
                        (format_date(result.range.end))
                        ":"
                    }

                    (transaction_list_view(&result.transactions))
                }
            }
        }
    }
}
