//! Markup for the CDBs page.

use maud::{Markup, html};
use time::Date;

use crate::{
    cdb::{Cdb, RateType},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, Tone, empty_state, format_currency, format_date, format_percent,
        loading_spinner, modal, page, progress_bar, summary_card,
    },
    metrics::{PortfolioSummary, estimated_value},
    view_state::ViewMode,
};

pub(super) struct CdbsViewData<'a> {
    pub cdbs: &'a [Cdb],
    pub summary: PortfolioSummary,
    pub mode: ViewMode,
    pub today: Date,
}

fn cdb_card(cdb: &Cdb, today: Date) -> Markup {
    let estimate = estimated_value(cdb, today);

    html! {
        li class="p-4 bg-gray-50 rounded-lg hover:bg-gray-100 dark:bg-gray-700 dark:hover:bg-gray-600"
            data-cdb-id=(cdb.id)
        {
            div class="flex justify-between items-start mb-3"
            {
                div
                {
                    h3 class="font-bold text-lg" { (cdb.name) }
                    p class="text-sm text-gray-600 dark:text-gray-300"
                    {
                        (cdb.bank) " • " (cdb.benchmark_rate) "% do CDI • " (cdb.rate_type.label())
                    }
                    p class="text-xs text-gray-500 dark:text-gray-400"
                    {
                        (format_date(cdb.start_date)) " - " (format_date(cdb.maturity_date))
                    }
                }

                div class="text-right"
                {
                    p class="text-lg font-bold text-green-600" data-current-value
                    {
                        (format_currency(estimate.current_value))
                    }
                    p class="text-sm text-gray-600 dark:text-gray-300"
                    {
                        "Investido: " (format_currency(cdb.invested_amount))
                    }
                    p class="text-sm text-green-600"
                    {
                        "Rendimento: " (format_currency(estimate.gain))
                    }
                }
            }

            div class="mt-3"
            {
                div class="flex justify-between text-xs text-gray-500 dark:text-gray-400 mb-1"
                {
                    span { "Progresso do investimento" }
                    span { (format_percent(estimate.percent_complete)) }
                }

                (progress_bar(estimate.percent_complete, false))
            }
        }
    }
}

pub(super) fn create_cdb_form(today: Date, close_url: &str) -> Markup {
    html! {
        form
            hx-post=(endpoints::CDBS_API)
            hx-target-error="#alert-container"
            hx-disabled-elt="find button[type=submit]"
            hx-indicator="#indicator"
            class="space-y-4"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Nome do CDB" }
                input
                    type="text"
                    name="name"
                    id="name"
                    placeholder="Ex: CDB Banco do Brasil"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="bank" class=(FORM_LABEL_STYLE) { "Banco" }
                input
                    type="text"
                    name="bank"
                    id="bank"
                    placeholder="Ex: Banco do Brasil"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="invested_amount" class=(FORM_LABEL_STYLE) { "Valor Investido" }
                input
                    type="number"
                    name="invested_amount"
                    id="invested_amount"
                    step="0.01"
                    min="0"
                    placeholder="0,00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="benchmark_rate" class=(FORM_LABEL_STYLE) { "Taxa (% do CDI)" }
                input
                    type="number"
                    name="benchmark_rate"
                    id="benchmark_rate"
                    step="0.01"
                    min="0"
                    placeholder="Ex: 120 (para 120% do CDI)"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="rate_type" class=(FORM_LABEL_STYLE) { "Tipo" }
                select name="rate_type" id="rate_type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for rate_type in RateType::ALL {
                        option value=(rate_type.as_str()) selected[rate_type == RateType::FixedRate]
                        {
                            (rate_type.label())
                        }
                    }
                }
            }

            div class="grid grid-cols-2 gap-4"
            {
                div
                {
                    label for="start_date" class=(FORM_LABEL_STYLE) { "Data de Início" }
                    input
                        type="date"
                        name="start_date"
                        id="start_date"
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="maturity_date" class=(FORM_LABEL_STYLE) { "Data de Vencimento" }
                    input
                        type="date"
                        name="maturity_date"
                        id="maturity_date"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div class="flex gap-3 pt-2"
            {
                a href=(close_url) class={ (BUTTON_SECONDARY_STYLE) " flex-1 text-center" } { "Cancelar" }

                button type="submit" id="indicator" class={ (BUTTON_PRIMARY_STYLE) " flex-1" }
                {
                    span class="htmx-indicator" { (loading_spinner()) }
                    "Adicionar"
                }
            }
        }
    }
}

pub(super) fn cdbs_view(data: CdbsViewData<'_>) -> Markup {
    let CdbsViewData {
        cdbs,
        summary,
        mode,
        today,
    } = data;

    let create_url = mode.open_create().href(endpoints::CDBS_VIEW);
    let close_url = mode.cancel().href(endpoints::CDBS_VIEW);
    let gain_detail = format!("+{}", format_percent(summary.gain_percent()));

    let content = html! {
        header class="flex justify-between items-center"
        {
            div
            {
                h1 class="text-3xl font-bold" { "Investimentos CDB" }
                p class="text-gray-500 dark:text-gray-400"
                {
                    "Acompanhe seus Certificados de Depósito Bancário"
                }
            }

            a href=(create_url) class=(BUTTON_PRIMARY_STYLE) { "+ Novo CDB" }
        }

        section class="grid grid-cols-1 md:grid-cols-3 gap-6"
        {
            (summary_card("Total Investido", &format_currency(summary.invested), Tone::Info, None))
            (summary_card("Rendimento Total", &format_currency(summary.gain), Tone::Positive, Some(&gain_detail)))
            (summary_card("Investimentos", &summary.count.to_string(), Tone::Neutral, None))
        }

        section class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-4" { "Seus CDBs (" (cdbs.len()) ")" }

            @if cdbs.is_empty() {
                (empty_state("Nenhum CDB encontrado. Adicione seus investimentos para acompanhar o rendimento."))
            } @else {
                ul class="space-y-4"
                {
                    @for cdb in cdbs {
                        (cdb_card(cdb, today))
                    }
                }
            }
        }

        @if mode.is_creating() {
            (modal("Novo CDB", &close_url, &create_cdb_form(today, &close_url)))
        }
    };

    page("CDBs", endpoints::CDBS_VIEW, &[], &content)
}
