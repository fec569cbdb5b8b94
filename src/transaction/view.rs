//! Markup for the transactions page.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, Tone, empty_state, format_currency, format_date,
        loading_spinner, modal, page, summary_card, truncate_text,
    },
    metrics::{KindTotals, TransactionFilter},
    transaction::{CATEGORIES, Transaction, TransactionKind},
    view_state::ViewMode,
};

/// Longer descriptions are cut short in lists, the full text is in the tooltip.
const DESCRIPTION_MAX_LEN: usize = 60;

/// Everything needed to render the transactions page.
pub(super) struct TransactionsViewData<'a> {
    pub transactions: &'a [Transaction],
    pub totals: KindTotals,
    pub filter: &'a TransactionFilter,
    pub mode: ViewMode,
    pub today: Date,
}

/// A single transaction as a row with a coloured dot and signed amount.
pub fn transaction_list_item(transaction: &Transaction) -> Markup {
    let (dot_style, amount_style, sign) = match transaction.kind {
        TransactionKind::Income => ("bg-green-500", "text-green-600 dark:text-green-400", "+"),
        TransactionKind::Expense => ("bg-red-500", "text-red-600 dark:text-red-400", "-"),
    };

    html! {
        li
            class="flex justify-between items-center p-4 bg-gray-50 rounded-lg
                hover:bg-gray-100 dark:bg-gray-700 dark:hover:bg-gray-600"
            data-transaction-id=(transaction.id)
        {
            div class="flex items-center gap-4"
            {
                span class={ "w-3 h-3 rounded-full " (dot_style) } title=(transaction.kind.label()) {}

                div
                {
                    p class="font-medium" title=(transaction.description)
                    {
                        (truncate_text(&transaction.description, DESCRIPTION_MAX_LEN))
                    }
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        (transaction.category) " • " (format_date(transaction.date))
                    }
                }
            }

            span class={ "font-bold text-lg " (amount_style) }
            {
                (sign) (format_currency(transaction.amount))
            }
        }
    }
}

fn filter_form(filter: &TransactionFilter) -> Markup {
    let selected_kind = filter.kind;
    let selected_category = filter.category.as_deref();

    html! {
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            class={ (CARD_STYLE) " flex flex-wrap gap-4 items-end" }
            role="search"
        {
            div class="flex-1 min-w-64"
            {
                label for="search" class=(FORM_LABEL_STYLE) { "Buscar" }
                input
                    type="search"
                    name="search"
                    id="search"
                    placeholder="Buscar por descrição..."
                    value=[filter.text.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="kind-filter" class=(FORM_LABEL_STYLE) { "Tipo" }
                select name="kind" id="kind-filter" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_kind.is_none()] { "Todos os tipos" }
                    option
                        value=(TransactionKind::Income.as_str())
                        selected[selected_kind == Some(TransactionKind::Income)]
                    {
                        "Receitas"
                    }
                    option
                        value=(TransactionKind::Expense.as_str())
                        selected[selected_kind == Some(TransactionKind::Expense)]
                    {
                        "Despesas"
                    }
                }
            }

            div
            {
                label for="category-filter" class=(FORM_LABEL_STYLE) { "Categoria" }
                select name="category" id="category-filter" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_category.is_none()] { "Todas as categorias" }

                    @for category in CATEGORIES {
                        option value=(category) selected[selected_category == Some(category)]
                        {
                            (category)
                        }
                    }
                }
            }

            button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Filtrar" }
        }
    }
}

/// The form for creating a transaction, shown inside a modal.
pub(super) fn create_transaction_form(today: Date, close_url: &str) -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target-error="#alert-container"
            hx-disabled-elt="find button[type=submit]"
            hx-indicator="#indicator"
            class="space-y-4"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Descrição" }
                input
                    type="text"
                    name="description"
                    id="description"
                    placeholder="Ex: Compra no supermercado"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Valor" }
                input
                    type="number"
                    name="amount"
                    id="amount"
                    step="0.01"
                    min="0"
                    placeholder="0,00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="kind" class=(FORM_LABEL_STYLE) { "Tipo" }
                select name="kind" id="kind" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(TransactionKind::Expense.as_str()) selected { "Despesa" }
                    option value=(TransactionKind::Income.as_str()) { "Receita" }
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Categoria" }
                select name="category" id="category" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Selecione uma categoria" }

                    @for category in CATEGORIES {
                        option value=(category) { (category) }
                    }
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Data" }
                input
                    type="date"
                    name="date"
                    id="date"
                    value=(today)
                    class=(FORM_TEXT_INPUT_STYLE);
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

pub(super) fn transactions_view(data: TransactionsViewData<'_>) -> Markup {
    let TransactionsViewData {
        transactions,
        totals,
        filter,
        mode,
        today,
    } = data;

    let income_detail = format!("{} transações", totals.income_count);
    let expense_detail = format!("{} transações", totals.expense_count);
    let create_url = mode.open_create().href(endpoints::TRANSACTIONS_VIEW);
    let close_url = mode.cancel().href(endpoints::TRANSACTIONS_VIEW);

    let content = html! {
        header class="flex justify-between items-center"
        {
            div
            {
                h1 class="text-3xl font-bold" { "Transações" }
                p class="text-gray-500 dark:text-gray-400"
                {
                    "Gerencie todas as suas receitas e despesas"
                }
            }

            a href=(create_url) class=(BUTTON_PRIMARY_STYLE) { "+ Nova Transação" }
        }

        section class="grid grid-cols-1 md:grid-cols-3 gap-6"
        {
            (summary_card("Receitas", &format_currency(totals.income), Tone::Positive, Some(&income_detail)))
            (summary_card("Despesas", &format_currency(totals.expense), Tone::Negative, Some(&expense_detail)))
            (summary_card(
                "Saldo",
                &format_currency(totals.balance()),
                if totals.balance() >= 0.0 { Tone::Info } else { Tone::Negative },
                None
            ))
        }

        (filter_form(filter))

        section class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-4"
            {
                (transactions.len()) " transações encontradas"
            }

            @if transactions.is_empty() {
                (empty_state("Nenhuma transação encontrada. Ajuste os filtros ou adicione uma nova transação."))
            } @else {
                ul class="space-y-3"
                {
                    @for transaction in transactions {
                        (transaction_list_item(transaction))
                    }
                }
            }
        }

        @if mode.is_creating() {
            (modal("Nova Transação", &close_url, &create_transaction_form(today, &close_url)))
        }
    };

    page("Transações", endpoints::TRANSACTIONS_VIEW, &[], &content)
}
