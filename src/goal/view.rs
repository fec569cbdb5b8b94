//! Markup for the goals page.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, Tone, empty_state, format_currency, format_date,
        format_percent, loading_spinner, modal, page, progress_bar, summary_card,
    },
    goal::{Goal, GoalCategory},
    metrics::{DeadlineStatus, GoalSummary, goal_progress},
    view_state::ViewMode,
};

pub(super) struct GoalsViewData<'a> {
    pub goals: &'a [Goal],
    pub summary: GoalSummary,
    pub mode: ViewMode,
    pub today: Date,
}

fn deadline_style(status: DeadlineStatus) -> &'static str {
    match status {
        DeadlineStatus::Overdue(_) => "text-red-500",
        DeadlineStatus::DueSoon(_) => "text-orange-500",
        DeadlineStatus::OnTime(_) => "text-gray-500",
    }
}

fn amount_editor(goal: &Goal, close_url: &str) -> Markup {
    let endpoint = format_endpoint(endpoints::GOAL_CURRENT_AMOUNT, goal.id);

    html! {
        form
            hx-put=(endpoint)
            hx-target-error="#alert-container"
            hx-disabled-elt="find button[type=submit]"
            class="flex flex-wrap items-center gap-2"
        {
            label for={ "current-amount-" (goal.id) } class="text-sm font-medium"
            {
                "Atualizar valor:"
            }
            input
                type="number"
                name="current_amount"
                id={ "current-amount-" (goal.id) }
                step="0.01"
                value=(goal.current_amount)
                autofocus
                class={ (FORM_TEXT_INPUT_STYLE) " w-32" };

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Salvar" }
            a href=(close_url) class=(BUTTON_SECONDARY_STYLE) { "Cancelar" }
        }
    }
}

fn goal_card(goal: &Goal, mode: ViewMode, today: Date) -> Markup {
    let progress = goal_progress(goal);
    let status = DeadlineStatus::new(goal.deadline, today);
    let edit_url = mode.begin_edit(goal.id).href(endpoints::GOALS_VIEW);
    let close_url = mode.cancel().href(endpoints::GOALS_VIEW);
    let is_editing = mode.editing_id() == Some(goal.id);
    let percent_style = if progress.completed {
        "text-green-600"
    } else {
        "text-gray-600 dark:text-gray-300"
    };
    let container_style = if progress.completed {
        "bg-green-50 border-green-200 dark:bg-green-950 dark:border-green-800"
    } else {
        "bg-gray-50 border-gray-200 dark:bg-gray-700 dark:border-gray-600"
    };

    html! {
        li class={ "p-4 rounded-lg border-2 " (container_style) } data-goal-id=(goal.id)
        {
            div class="flex justify-between items-start mb-3"
            {
                div class="flex items-start gap-3"
                {
                    span class="text-2xl" title=(goal.category.label()) { (goal.category.icon()) }

                    div
                    {
                        h3 class="font-bold text-lg flex items-center gap-2"
                        {
                            (goal.name)
                            @if progress.completed {
                                span title="Meta concluída" data-trophy { "🏆" }
                            }
                        }

                        @if let Some(description) = &goal.description {
                            p class="text-sm text-gray-600 dark:text-gray-300 mb-1" { (description) }
                        }

                        p class="text-xs text-gray-500 dark:text-gray-400"
                        {
                            "Criada em " (format_date(goal.created_on))
                            " • Prazo: " (format_date(goal.deadline))
                            @if !progress.completed {
                                span class={ "ml-2 " (deadline_style(status)) } data-deadline
                                {
                                    "(" (status.label()) ")"
                                }
                            }
                        }
                    }
                }

                div class="text-right"
                {
                    p class="text-lg font-bold"
                    {
                        (format_currency(goal.current_amount)) " / " (format_currency(goal.target_amount))
                    }
                    p class={ "text-sm font-medium " (percent_style) }
                    {
                        (format_percent(progress.percent)) " concluído"
                    }
                }
            }

            div class="mb-3" { (progress_bar(progress.percent, progress.completed)) }

            @if !progress.completed {
                div class="flex flex-wrap items-center gap-4"
                {
                    @if is_editing {
                        (amount_editor(goal, &close_url))
                    } @else {
                        a href=(edit_url) class=(LINK_STYLE) { "Atualizar valor" }
                    }

                    span class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Faltam " (format_currency(goal.remaining()))
                    }
                }
            }
        }
    }
}

pub(super) fn create_goal_form(close_url: &str) -> Markup {
    html! {
        form
            hx-post=(endpoints::GOALS_API)
            hx-target-error="#alert-container"
            hx-disabled-elt="find button[type=submit]"
            hx-indicator="#indicator"
            class="space-y-4"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Nome da Meta" }
                input
                    type="text"
                    name="name"
                    id="name"
                    placeholder="Ex: Viagem para Europa"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Descrição (opcional)" }
                input
                    type="text"
                    name="description"
                    id="description"
                    placeholder="Descreva sua meta..."
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="target_amount" class=(FORM_LABEL_STYLE) { "Valor da Meta" }
                input
                    type="number"
                    name="target_amount"
                    id="target_amount"
                    step="0.01"
                    min="0"
                    placeholder="0,00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="current_amount" class=(FORM_LABEL_STYLE) { "Valor Atual (opcional)" }
                input
                    type="number"
                    name="current_amount"
                    id="current_amount"
                    step="0.01"
                    value="0"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Categoria" }
                select name="category" id="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in GoalCategory::ALL {
                        option value=(category.as_str()) selected[category == GoalCategory::Savings]
                        {
                            (category.icon()) " " (category.label())
                        }
                    }
                }
            }

            div
            {
                label for="deadline" class=(FORM_LABEL_STYLE) { "Data Limite" }
                input
                    type="date"
                    name="deadline"
                    id="deadline"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-3 pt-2"
            {
                a href=(close_url) class={ (BUTTON_SECONDARY_STYLE) " flex-1 text-center" } { "Cancelar" }

                button type="submit" id="indicator" class={ (BUTTON_PRIMARY_STYLE) " flex-1" }
                {
                    span class="htmx-indicator" { (loading_spinner()) }
                    "Criar Meta"
                }
            }
        }
    }
}

pub(super) fn goals_view(data: GoalsViewData<'_>) -> Markup {
    let GoalsViewData {
        goals,
        summary,
        mode,
        today,
    } = data;

    let create_url = mode.open_create().href(endpoints::GOALS_VIEW);
    let close_url = mode.cancel().href(endpoints::GOALS_VIEW);

    let content = html! {
        header class="flex justify-between items-center"
        {
            div
            {
                h1 class="text-3xl font-bold" { "Metas Financeiras" }
                p class="text-gray-500 dark:text-gray-400"
                {
                    "Acompanhe o progresso dos seus objetivos financeiros"
                }
            }

            a href=(create_url) class=(BUTTON_PRIMARY_STYLE) { "+ Nova Meta" }
        }

        section class="grid grid-cols-1 md:grid-cols-4 gap-6"
        {
            (summary_card("Metas Ativas", &summary.active.to_string(), Tone::Positive, None))
            (summary_card("Concluídas", &summary.completed.to_string(), Tone::Info, None))
            (summary_card("Total Objetivos", &format_currency(summary.total_target), Tone::Neutral, None))
            (summary_card("Economizado", &format_currency(summary.total_saved), Tone::Positive, None))
        }

        section class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-4" { "Suas Metas (" (goals.len()) ")" }

            @if goals.is_empty() {
                (empty_state("Nenhuma meta encontrada. Defina seus objetivos financeiros para começar."))
            } @else {
                ul class="space-y-4"
                {
                    @for goal in goals {
                        (goal_card(goal, mode, today))
                    }
                }
            }
        }

        @if mode.is_creating() {
            (modal("Nova Meta Financeira", &close_url, &create_goal_form(&close_url)))
        }
    };

    page("Metas", endpoints::GOALS_VIEW, &[], &content)
}
