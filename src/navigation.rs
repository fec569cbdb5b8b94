//! This file defines the templates and a convenience function for creating the side menu.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the side menu.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    icon: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center gap-3 px-3 py-2 rounded-lg bg-green-50 text-green-700 \
            border-r-2 border-green-500 dark:bg-green-900/30 dark:text-green-300"
        } else {
            "flex items-center gap-3 px-3 py-2 rounded-lg text-gray-600 \
            hover:bg-gray-50 dark:text-gray-300 dark:hover:bg-gray-800"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                span aria-hidden="true" { (self.icon) }
                span class="font-medium" { (self.title) }
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the side menu.
    ///
    /// If a link matches `active_endpoint` exactly, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let link = |url, title, icon| Link {
            url,
            title,
            icon,
            is_current: active_endpoint == url,
        };

        let links = vec![
            link(endpoints::DASHBOARD_VIEW, "Dashboard", "▦"),
            link(endpoints::TRANSACTIONS_VIEW, "Transações", "⇅"),
            link(endpoints::CDBS_VIEW, "CDBs", "↗"),
            link(endpoints::GOALS_VIEW, "Metas", "◎"),
            link(endpoints::REPORTS_VIEW, "Relatórios", "▥"),
        ];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            aside
                class="lg:fixed lg:inset-y-0 lg:left-0 w-full lg:w-64 bg-white
                    shadow-lg dark:bg-gray-900 dark:border-gray-700"
            {
                div class="p-6 border-b dark:border-gray-700"
                {
                    a href=(endpoints::DASHBOARD_VIEW) class="flex items-center gap-3"
                    {
                        div
                            class="w-10 h-10 bg-green-500 rounded-full flex
                                items-center justify-center text-white font-bold"
                        {
                            "↗"
                        }

                        div
                        {
                            h1 class="text-lg font-bold text-gray-900 dark:text-white"
                            {
                                "FinanceiroApp"
                            }
                            p class="text-sm text-gray-500 dark:text-gray-400"
                            {
                                "Suas finanças sob controle"
                            }
                        }
                    }
                }

                nav class="p-4" aria-label="Principal"
                {
                    h2
                        class="text-xs font-semibold text-gray-400 uppercase
                            tracking-wider mb-3"
                    {
                        "Navegação"
                    }

                    ul class="space-y-2"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}
