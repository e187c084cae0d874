use dioxus::prelude::*;

use crate::components::common::{Card, LoadingSpinner};
use crate::models::{Campaign, ReportState};
use crate::state::{show_notification, use_campaigns, NotificationType};

const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 30, 50];

/// Paged table over the store's current search results, with a per-row
/// report download action.
#[component]
pub fn CampaignTable() -> Element {
    let store = use_campaigns();
    let pagination = *store.pagination.read();

    // Page changes re-run the current search; without a selected date there
    // is nothing to search, so they do nothing.
    let go_to = move |page: u32, page_size: u32| {
        if let Some(date) = *store.selected_date.read() {
            spawn(async move {
                store.search(date, page, page_size).await;
            });
        }
    };

    rsx! {
        Card { class: "table-card".to_string(),
            if *store.loading.read() {
                LoadingSpinner {}
            } else {
                table { class: "campaign-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Nombre" }
                            th { "Fecha" }
                            th { "Estado" }
                            th { "Descripción" }
                            th { "Acciones" }
                        }
                    }
                    tbody {
                        if store.campaigns.read().is_empty() {
                            tr {
                                td { class: "empty-row", colspan: "6", "Sin resultados" }
                            }
                        }
                        for campaign in store.campaigns.read().iter() {
                            CampaignRow {
                                key: "{campaign.id}",
                                campaign: campaign.clone(),
                            }
                        }
                    }
                }

                div { class: "table-footer",
                    span { class: "table-total", "Total {pagination.total} campañas" }
                    div { class: "pager",
                        button {
                            class: "pager-button",
                            disabled: pagination.page <= 1,
                            onclick: move |_| go_to(pagination.page - 1, pagination.page_size),
                            "\u{2039}"
                        }
                        span { class: "pager-label",
                            "Página {pagination.page} de {pagination.total_pages}"
                        }
                        button {
                            class: "pager-button",
                            disabled: pagination.page >= pagination.total_pages,
                            onclick: move |_| go_to(pagination.page + 1, pagination.page_size),
                            "\u{203A}"
                        }
                        select {
                            class: "page-size-select",
                            onchange: move |e| {
                                if let Ok(size) = e.value().parse::<u32>() {
                                    go_to(1, size);
                                }
                            },
                            for size in PAGE_SIZE_OPTIONS {
                                option {
                                    value: "{size}",
                                    selected: pagination.page_size == size,
                                    "{size} / página"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CampaignRow(campaign: Campaign) -> Element {
    let store = use_campaigns();
    let campaign_id = campaign.id;
    let mut is_checking = use_signal(|| false);

    let description = campaign.description.clone().unwrap_or_default();

    // Poll the report status first; only a completed report with a file path
    // is worth downloading.
    let handle_download = move |_| {
        is_checking.set(true);
        spawn(async move {
            match store.check_report_status(campaign_id).await.into_result() {
                Ok(status) => match status.file_path {
                    Some(path) if status.state == ReportState::Completed => {
                        store.download_report(&path).await;
                    }
                    _ => {
                        show_notification(
                            &format!(
                                "El reporte aún no está disponible ({})",
                                status.state.display_name()
                            ),
                            NotificationType::Info,
                        );
                    }
                },
                Err(e) => {
                    show_notification(
                        &format!("No se pudo consultar el estado del reporte: {}", e),
                        NotificationType::Error,
                    );
                }
            }
            is_checking.set(false);
        });
    };

    rsx! {
        tr {
            td { "{campaign.id}" }
            td { "{campaign.name}" }
            td { "{campaign.date}" }
            td {
                span { class: "tag tag-{status_color(&campaign.status)}", "{campaign.status}" }
            }
            td { "{description}" }
            td {
                button {
                    class: "link-button",
                    disabled: *is_checking.read(),
                    onclick: handle_download,
                    if *is_checking.read() { "Consultando..." } else { "Descargar reporte" }
                }
            }
        }
    }
}

/// Display color for a campaign/report status tag.
fn status_color(estado: &str) -> &'static str {
    match estado {
        "PENDIENTE" => "gold",
        "EN PROCESO" => "orange",
        "COMPLETADO" => "blue",
        _ => "green",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_mapping() {
        assert_eq!(status_color("PENDIENTE"), "gold");
        assert_eq!(status_color("EN PROCESO"), "orange");
        assert_eq!(status_color("COMPLETADO"), "blue");
        assert_eq!(status_color("ERROR"), "green");
    }

    #[test]
    fn test_status_color_is_total() {
        // anything unrecognized falls back to green
        assert_eq!(status_color(""), "green");
        assert_eq!(status_color("PAUSADO"), "green");
        assert_eq!(status_color("completado"), "green");
    }
}
