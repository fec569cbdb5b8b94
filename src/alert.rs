//! Alerts for telling the user why an action failed.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element defined in [crate::html::base].

use axum::response::Html;
use maud::{Markup, html};

/// An alert message to show to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action failed, with extra details on how to fix it.
    Error { message: String, details: String },
    /// The action failed.
    ErrorSimple { message: String },
}

impl Alert {
    fn message(&self) -> &str {
        match self {
            Alert::Error { message, .. } | Alert::ErrorSimple { message } => message,
        }
    }

    fn details(&self) -> Option<&str> {
        match self {
            Alert::Error { details, .. } => Some(details),
            Alert::ErrorSimple { .. } => None,
        }
    }

    fn markup(&self) -> Markup {
        html! {
            div
                role="alert"
                class="flex items-start p-4 mb-4 text-red-800 border border-red-300 rounded-lg
                    bg-red-50 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (self.message()) }

                    @if let Some(details) = self.details().filter(|details| !details.is_empty()) {
                        p class="mt-1 text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Fechar"
                    class="ms-4 text-sm font-semibold"
                    onclick="document.getElementById('alert-container').classList.add('hidden')"
                {
                    "×"
                }
            }
        }
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Html<String> {
        Html(self.markup().into_string())
    }
}
