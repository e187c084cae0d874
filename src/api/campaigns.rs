use chrono::NaiveDate;

use crate::api::{api_client, ApiResponse};
use crate::models::{AvailableDates, CampaignPage};

pub async fn available_dates() -> ApiResponse<AvailableDates> {
    api_client().get("/campania/fechas", Vec::new(), false).await
}

pub async fn search_campaigns(date: NaiveDate, page: u32, page_size: u32) -> ApiResponse<CampaignPage> {
    let params = vec![
        ("fecha", date.to_string()),
        ("page", page.to_string()),
        ("page_size", page_size.to_string()),
    ];
    api_client().get("/campania/list/", params, false).await
}
