use bytes::Bytes;
use chrono::NaiveDate;

use crate::api::{api_client, ApiResponse};
use crate::models::{ReportResponse, ReportStatus};

/// Trigger bulk report generation for every campaign on the given date.
pub async fn generate_reports(date: NaiveDate) -> ApiResponse<ReportResponse> {
    api_client()
        .get("/reporte", vec![("fecha", date.to_string())], false)
        .await
}

pub async fn report_status(campaign_id: i64) -> ApiResponse<ReportStatus> {
    api_client()
        .get(&format!("/reporte/status/{}", campaign_id), Vec::new(), false)
        .await
}

/// Fetch a generated report file by the server-side path the status endpoint
/// handed out.
pub async fn download_report(file_path: &str) -> ApiResponse<Bytes> {
    api_client()
        .get_bytes("/reports/download", vec![("path", file_path.to_string())], true)
        .await
}

// Superseded by the status + download pair above; some deployments still
// expose these routes.
#[allow(dead_code)]
pub async fn download_campaign_report(campaign_id: i64) -> ApiResponse<Bytes> {
    api_client()
        .get_bytes(&format!("/reports/campaign/{}", campaign_id), Vec::new(), true)
        .await
}

#[allow(dead_code)]
pub async fn generate_reports_by_date(date: NaiveDate) -> ApiResponse<Bytes> {
    api_client()
        .get_bytes("/reports/generate-by-date", vec![("fecha", date.to_string())], true)
        .await
}
