//! Chart generation and rendering for the reports page.
//!
//! This module creates ECharts visualizations for the selected period:
//! - **Monthly chart**: income and expenses side by side for each month
//! - **Category chart**: the share of expenses taken by each category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Label,
        Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    html::HeadElement,
    metrics::{CategoryTotal, MonthBucket},
};

/// The colours given to categories, in ranking order.
pub(super) const CATEGORY_COLOURS: [&str; 8] = [
    "#10B981", "#3B82F6", "#EF4444", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
];

const INCOME_COLOUR: &str = "#10B981";
const EXPENSE_COLOUR: &str = "#EF4444";

/// The colour of the category ranked at `index`, repeating after the last colour.
pub(super) fn category_colour(index: usize) -> &'static str {
    CATEGORY_COLOURS[index % CATEGORY_COLOURS.len()]
}

/// A report chart with its HTML container ID and ECharts configuration.
pub(super) struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// The container for `chart`, or a placeholder when there is nothing to plot.
pub(super) fn chart_container(chart: Option<&ReportChart>, empty_message: &str) -> Markup {
    html!(
        @match chart {
            Some(chart) => {
                div
                    id=(chart.id)
                    class="min-h-[300px] rounded"
                {}
            }
            None => {
                p class="py-8 text-center text-gray-500 dark:text-gray-400" data-empty-state
                {
                    (empty_message)
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the report charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[&ReportChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Income against expenses for each month, oldest month first.
pub(super) fn monthly_chart(buckets: &[MonthBucket]) -> Chart {
    let labels: Vec<String> = buckets.iter().map(MonthBucket::short_label).collect();
    let income: Vec<f64> = buckets.iter().map(|bucket| bucket.income).collect();
    let expenses: Vec<f64> = buckets.iter().map(|bucket| bucket.expense).collect();

    Chart::new()
        .tooltip(month_tooltip())
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(40)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(short_currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Receitas")
                .item_style(ItemStyle::new().color(INCOME_COLOUR))
                .data(income),
        )
        .series(
            Bar::new()
                .name("Despesas")
                .item_style(ItemStyle::new().color(EXPENSE_COLOUR))
                .data(expenses),
        )
}

/// Expenses by category as slices of a pie, in ranking order.
pub(super) fn category_chart(totals: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = totals
        .iter()
        .map(|total| (total.total, total.category.as_str()))
        .collect();
    let colours: Vec<Color> = (0..totals.len())
        .map(|index| Color::from(category_colour(index)))
        .collect();

    Chart::new()
        .color(colours)
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .series(
            Pie::new()
                .name("Despesas")
                .radius("70%")
                .label(Label::new().formatter("{b} {d}%"))
                .data(data),
        )
}

fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('pt-BR', {
              style: 'currency',
              currency: 'BRL'
            });
            return currencyFormatter.format(number);",
    )
}

/// Axis labels abbreviate thousands, e.g. "R$ 1.5k".
fn short_currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "if (number >= 1000) {
                return 'R$ ' + (number / 1000).toFixed(1) + 'k';
            }
            return new Intl.NumberFormat('pt-BR', {
              style: 'currency',
              currency: 'BRL'
            }).format(number);",
    )
}

/// Shows the month under the pointer by name, e.g. "Mar 2025", and both totals.
fn month_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
        .formatter(JsFunction::new_with_args(
            "params",
            "const names = ['Jan', 'Fev', 'Mar', 'Abr', 'Mai', 'Jun',
                'Jul', 'Ago', 'Set', 'Out', 'Nov', 'Dez'];
            const currencyFormatter = new Intl.NumberFormat('pt-BR', {
              style: 'currency',
              currency: 'BRL'
            });
            const [month, year] = params[0].axisValue.split('/');
            let text = names[parseInt(month, 10) - 1] + ' 20' + year;
            for (const item of params) {
                text += '<br/>' + item.marker + item.seriesName + ': '
                    + currencyFormatter.format(item.value);
            }
            return text;",
        ))
}
