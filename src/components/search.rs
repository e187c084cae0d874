use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::api;
use crate::components::common::Card;
use crate::state::{show_notification, use_campaigns, NotificationType, DEFAULT_PAGE_SIZE};

/// Date picker plus the two actions that start from it: searching campaigns
/// and triggering bulk report generation. Both are no-ops without a date.
#[component]
pub fn SearchCard() -> Element {
    let store = use_campaigns();
    let mut dates = use_signal(Vec::<NaiveDate>::new);

    // Available dates load once on mount
    use_effect(move || {
        spawn(async move {
            match api::campaigns::available_dates().await.into_result() {
                Ok(found) => dates.set(found.dates),
                Err(e) => tracing::error!("failed to load available dates: {}", e),
            }
        });
    });

    let on_select = move |e: FormEvent| {
        let mut selected_date = store.selected_date;
        selected_date.set(NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d").ok());
    };

    let on_search = move |_| {
        if let Some(date) = *store.selected_date.read() {
            spawn(async move {
                store.search(date, 1, DEFAULT_PAGE_SIZE).await;
            });
        }
    };

    let on_generate = move |_| {
        let Some(date) = *store.selected_date.read() else {
            return;
        };
        spawn(async move {
            let mut store = store;
            store.generating_reports.set(true);
            match api::reports::generate_reports(date).await.into_result() {
                Ok(outcome) => {
                    show_notification(&outcome.message, NotificationType::Success);
                    // refresh so the status column picks up the new reports
                    store.search(date, 1, DEFAULT_PAGE_SIZE).await;
                }
                Err(e) => {
                    show_notification(
                        &format!("No se pudieron generar los reportes: {}", e),
                        NotificationType::Error,
                    );
                }
            }
            store.generating_reports.set(false);
        });
    };

    rsx! {
        Card { class: "search-card".to_string(),
            div { class: "search-row",
                select {
                    class: "date-select",
                    onchange: on_select,
                    option { value: "", "Fechas disponibles" }
                    for date in dates.read().iter() {
                        option {
                            value: "{date}",
                            selected: *store.selected_date.read() == Some(*date),
                            "{date}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    title: "Buscar",
                    onclick: on_search,
                    "Buscar"
                }
                button {
                    class: "btn btn-secondary",
                    disabled: *store.generating_reports.read(),
                    onclick: on_generate,
                    if *store.generating_reports.read() { "Generando..." } else { "Generar reportes" }
                }
            }
        }
    }
}
