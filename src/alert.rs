//! Alerts for displaying error messages to users.
//!
//! Alerts are HTML fragments that HTMX swaps into the page's alert container.

use maud::{Markup, html};

use crate::html::ALERT_CONTAINER_ID;

/// An error message with a short summary and optional details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/alerts/
        html! {
            div
                class="flex items-start p-4 mb-4 border rounded-lg text-red-800 \
                    border-red-300 bg-red-50 dark:bg-gray-800 dark:text-red-400 \
                    dark:border-red-800"
                role="alert"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="mt-1 text-sm" { (self.details) }
                    }
                }

                button
                    type="button"
                    class="ms-3 -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex items-center justify-center h-8 w-8"
                    aria-label="Close"
                    onclick="this.parentElement.remove()"
                {
                    "×"
                }
            }
        }
    }
}

/// An out-of-band swap that empties the alert container.
///
/// Append it to a successful fragment response so alerts from an earlier
/// failed request do not linger.
pub fn clear_alerts() -> Markup {
    html! {
        div id=(ALERT_CONTAINER_ID) hx-swap-oob="innerHTML" {}
    }
}
