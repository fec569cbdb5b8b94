use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, Month, Weekday, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::navigation::NavBar;

// Link styles
pub const LINK_STYLE: &str = "text-green-600 hover:text-green-500 \
    dark:text-green-500 dark:hover:text-green-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-green-500 \
    dark:bg-green-600 disabled:bg-green-700 hover:enabled:bg-green-600 \
    hover:bg-green-600 hover:enabled:dark:bg-green-700 text-white rounded-lg";

pub const BUTTON_SECONDARY_STYLE: &str = "px-4 py-2 text-sm font-medium \
    text-gray-900 bg-white rounded-lg border border-gray-200 hover:bg-gray-100 \
    dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 \
    dark:hover:text-white dark:hover:bg-gray-700";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded-lg text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-green-600 focus:border-green-600 \
    focus:dark:border-green-500 focus:dark:ring-green-500";

// Card styles
pub const CARD_STYLE: &str = "bg-white rounded-lg shadow p-6 dark:bg-gray-800";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col gap-6 p-6 lg:ml-64 text-gray-900 dark:text-white";

const TAILWIND_URL: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4.1.11";
const HTMX_URL: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";
const HTMX_RESPONSE_TARGETS_URL: &str =
    "https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4/dist/response-targets.min.js";
/// The ECharts build used by pages that render charts.
pub const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - FinanceiroApp" }

                script src=(TAILWIND_URL) {}
                script src=(HTMX_URL) {}
                script src=(HTMX_RESPONSE_TARGETS_URL) {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }

                script
                {
                    (PreEscaped(r#"
                    document.addEventListener("htmx:afterSwap", (event) => {
                        if (event.detail.target.id === "alert-container") {
                            event.detail.target.classList.remove("hidden");
                        }
                    });
                    "#))
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for htmx swaps of failed form submissions
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// Wrap `content` with the side menu and the page container, highlighting
/// the menu entry for `active_endpoint`.
pub fn page(
    title: &str,
    active_endpoint: &str,
    head_elements: &[HeadElement],
    content: &Markup,
) -> Markup {
    let nav_bar = NavBar::new(active_endpoint).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            (content)
        }
    };

    base(title, head_elements, &content)
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-green-600 dark:text-green-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-green-600
                            hover:bg-green-800 focus:ring-4 focus:outline-hidden
                            focus:ring-green-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-green-900 my-4"
                    {
                        "Voltar para o painel"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Format the whole part of an amount with dots between groups of thousands.
fn format_thousands(whole: i64) -> String {
    static FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    // Zero is hardcoded as "0" by numfmt, and so are small numbers without
    // separators, so only large amounts go through the formatter.
    if whole < 1000 {
        return whole.to_string();
    }

    let formatter = FMT.get_or_init(|| {
        Formatter::currency("")
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(0)))
    });

    match formatter {
        Some(formatter) => formatter.fmt_string(whole as f64).replace(',', "."),
        None => whole.to_string(),
    }
}

/// Format `number` as Brazilian reais, e.g. "R$ 1.234,56" or "-R$ 12,30".
pub fn format_currency(number: f64) -> String {
    let total_cents = (number.abs() * 100.0).round() as i64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let sign = if number < 0.0 && total_cents != 0 {
        "-"
    } else {
        ""
    };

    format!("{sign}R$ {},{cents:02}", format_thousands(whole))
}

/// Format a percentage with one decimal place and a decimal comma, e.g. "12,5%".
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%").replace('.', ",")
}

/// Format a date the way Brazilians write it, e.g. "31/12/2025".
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Format a date in full, e.g. "domingo, 18 de outubro de 2026".
pub fn format_long_date(date: Date) -> String {
    let weekday = match date.weekday() {
        Weekday::Monday => "segunda-feira",
        Weekday::Tuesday => "terça-feira",
        Weekday::Wednesday => "quarta-feira",
        Weekday::Thursday => "quinta-feira",
        Weekday::Friday => "sexta-feira",
        Weekday::Saturday => "sábado",
        Weekday::Sunday => "domingo",
    };
    let month = match date.month() {
        Month::January => "janeiro",
        Month::February => "fevereiro",
        Month::March => "março",
        Month::April => "abril",
        Month::May => "maio",
        Month::June => "junho",
        Month::July => "julho",
        Month::August => "agosto",
        Month::September => "setembro",
        Month::October => "outubro",
        Month::November => "novembro",
        Month::December => "dezembro",
    };

    format!("{weekday}, {} de {month} de {}", date.day(), date.year())
}

/// Shorten `text` to at most `max_len` user-visible characters, ending with
/// an ellipsis when anything was cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max_len).collect();

    if graphemes.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

/// The colour scheme of a summary card's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Info,
}

impl Tone {
    /// Positive for values at or above zero, negative otherwise.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    fn text_style(self) -> &'static str {
        match self {
            Tone::Positive => "text-green-600 dark:text-green-400",
            Tone::Negative => "text-red-600 dark:text-red-400",
            Tone::Neutral => "text-gray-900 dark:text-white",
            Tone::Info => "text-blue-600 dark:text-blue-400",
        }
    }
}

/// A card with a title, a large value and an optional line of detail.
pub fn summary_card(title: &str, value: &str, tone: Tone, detail: Option<&str>) -> Markup {
    html! {
        div class=(CARD_STYLE) data-card=(title)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p class={ "mt-2 text-2xl font-bold " (tone.text_style()) } { (value) }

            @if let Some(detail) = detail {
                p class="mt-1 text-xs text-gray-500 dark:text-gray-400" { (detail) }
            }
        }
    }
}

/// A horizontal bar filled to `percent`, clamped to 0..=100.
pub fn progress_bar(percent: f64, completed: bool) -> Markup {
    let width = percent.clamp(0.0, 100.0);
    let fill = if completed {
        "bg-green-500"
    } else {
        "bg-blue-500"
    };

    html! {
        div
            class="w-full h-2 bg-gray-200 rounded-full dark:bg-gray-700"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=(format!("{width:.0}"))
        {
            div
                class={ "h-2 rounded-full " (fill) }
                style=(format!("width: {width:.1}%"))
            {}
        }
    }
}

/// An overlay dialog. The close button navigates to `close_url`.
pub fn modal(title: &str, close_url: &str, content: &Markup) -> Markup {
    html! {
        div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50"
        {
            div
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                class="w-full max-w-md bg-white rounded-lg shadow-lg dark:bg-gray-800"
            {
                div class="flex items-center justify-between p-6 border-b dark:border-gray-700"
                {
                    h2 id="modal-title" class="text-lg font-semibold" { (title) }
                    a href=(close_url) aria-label="Fechar" class="text-gray-400 hover:text-gray-600"
                    {
                        "×"
                    }
                }

                div class="p-6" { (content) }
            }
        }
    }
}

/// A muted message shown in place of an empty list.
pub fn empty_state(message: &str) -> Markup {
    html! {
        p class="py-8 text-center text-gray-500 dark:text-gray-400" data-empty-state
        {
            (message)
        }
    }
}

/// A link with green text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE)
        {
          (text)
        }
    )
}
