use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::api::{self, ApiResponse};
use crate::files;
use crate::models::{Campaign, CampaignPage, ReportStatus};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination snapshot of the last successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl Pagination {
    pub fn from_page(page: &CampaignPage) -> Self {
        Pagination {
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// Shared campaign/report state. One instance is created at the app root and
/// handed to components through context; signals make it cheap to copy into
/// event handlers.
///
/// `loading` and `generating_reports` are independent: a search never touches
/// the generation flag and vice versa, so the two controls spin on their own.
#[derive(Clone, Copy)]
pub struct CampaignStore {
    pub campaigns: Signal<Vec<Campaign>>,
    pub pagination: Signal<Pagination>,
    pub selected_date: Signal<Option<NaiveDate>>,
    pub loading: Signal<bool>,
    pub generating_reports: Signal<bool>,
}

/// Grab the store provided by the app root.
pub fn use_campaigns() -> CampaignStore {
    use_context::<CampaignStore>()
}

impl CampaignStore {
    /// Must be called from a component scope; the app root owns the signals.
    pub fn new() -> Self {
        CampaignStore {
            campaigns: Signal::new(Vec::new()),
            pagination: Signal::new(Pagination::default()),
            selected_date: Signal::new(None),
            loading: Signal::new(false),
            generating_reports: Signal::new(false),
        }
    }

    /// Fetch one page of campaigns for `date`. On success the list and the
    /// pagination snapshot are replaced together from the same response; on
    /// failure the previous state stays and the error is only logged. The
    /// loading flag clears on every path.
    pub async fn search(mut self, date: NaiveDate, page: u32, page_size: u32) {
        self.loading.set(true);

        match api::campaigns::search_campaigns(date, page, page_size).await.into_result() {
            Ok(found) => {
                self.pagination.set(Pagination::from_page(&found));
                self.campaigns.set(found.items);
            }
            Err(e) => {
                tracing::error!("campaign search for {} failed: {}", date, e);
            }
        }

        self.loading.set(false);
    }

    /// Poll the report status of a single campaign. The envelope is handed
    /// back untouched; nothing is cached locally.
    pub async fn check_report_status(self, campaign_id: i64) -> ApiResponse<ReportStatus> {
        api::reports::report_status(campaign_id).await
    }

    /// Fetch the report file behind `file_path` and save it locally, named by
    /// the path's last segment. Failures are logged, never surfaced.
    pub async fn download_report(self, file_path: &str) {
        match api::reports::download_report(file_path).await.into_result() {
            Ok(body) => {
                let name = files::file_name_from_path(file_path);
                if let Err(e) = files::save_file(name, &body) {
                    tracing::error!("failed to save report {}: {}", name, e);
                }
            }
            Err(e) => {
                tracing::error!("report download for {} failed: {}", file_path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Campaign;

    fn sample_page() -> CampaignPage {
        CampaignPage {
            items: vec![Campaign {
                id: 1,
                name: "Promo enero".to_string(),
                date: "2024-01-01".to_string(),
                status: "PENDIENTE".to_string(),
                description: None,
            }],
            total: 25,
            page: 1,
            page_size: 10,
            total_pages: 3,
        }
    }

    #[test]
    fn test_initial_pagination_snapshot() {
        let pagination = Pagination::default();
        assert_eq!(pagination.total, 0);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(pagination.total_pages, 0);
    }

    #[test]
    fn test_pagination_snapshot_mirrors_response() {
        let page = sample_page();
        let pagination = Pagination::from_page(&page);
        assert_eq!(pagination.total, 25);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
        assert_eq!(pagination.total_pages, 3);
    }

    #[test]
    fn test_page_window_stays_below_total() {
        let pagination = Pagination::from_page(&sample_page());
        // a non-empty page always starts before the end of the result set
        assert!(u64::from(pagination.page_size) * u64::from(pagination.page - 1) <= pagination.total);
    }
}
