//! The ranking of expense categories shown under the report charts.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency, format_percent},
    metrics::CategoryTotal,
    report::charts::category_colour,
};

/// Renders expense categories from largest to smallest with their share of `total_expense`.
///
/// Renders nothing when there are no expenses.
pub(super) fn category_ranking_table(totals: &[CategoryTotal], total_expense: f64) -> Markup {
    if totals.is_empty() {
        return html! {};
    }

    html! {
        section
        {
            h2 class="text-lg font-semibold mb-4" { "Ranking de Despesas por Categoria" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" id="category-ranking"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Total" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Participação" }
                        }
                    }

                    tbody
                    {
                        @for (index, total) in totals.iter().enumerate() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (index + 1) }
                                th scope="row" class={ (TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white" }
                                {
                                    span class="inline-flex items-center gap-3"
                                    {
                                        span
                                            class="w-4 h-4 rounded-full"
                                            style={ "background-color: " (category_colour(index)) }
                                        {}
                                        (total.category)
                                    }
                                }
                                td class={ (TABLE_CELL_STYLE) " text-right font-bold" }
                                {
                                    (format_currency(total.total))
                                }
                                td class={ (TABLE_CELL_STYLE) " text-right" }
                                {
                                    (format_percent(total.share_of(total_expense)))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
