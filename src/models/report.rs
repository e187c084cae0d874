use serde::{Deserialize, Serialize};

/// Generation state of a per-campaign report. Upper-case Spanish on the wire;
/// older backend rows carry capitalized forms, hence the aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportState {
    #[serde(rename = "PENDIENTE", alias = "Pendiente")]
    Pending,
    #[serde(rename = "EN PROCESO", alias = "En proceso")]
    InProgress,
    #[serde(rename = "COMPLETADO", alias = "Completado")]
    Completed,
    #[serde(rename = "ERROR", alias = "Error")]
    Error,
}

impl ReportState {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportState::Pending => "PENDIENTE",
            ReportState::InProgress => "EN PROCESO",
            ReportState::Completed => "COMPLETADO",
            ReportState::Error => "ERROR",
        }
    }
}

/// Status row for a single campaign's report. `file_path` is only set once
/// the report reaches `Completed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportStatus {
    #[serde(rename = "id_campana")]
    pub campaign_id: i64,
    #[serde(rename = "estado")]
    pub state: ReportState,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "ruta_archivo", default)]
    pub file_path: Option<String>,
}

/// Response of the bulk `GET /reporte` trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "campanias", default)]
    pub campaigns: Vec<ReportCampaignSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportCampaignSummary {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "estado")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completed_status() {
        let body = r#"{"id_campana": 5, "estado": "COMPLETADO",
                       "fecha": "2024-01-01", "ruta_archivo": "/out/5.csv"}"#;

        let status: ReportStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.campaign_id, 5);
        assert_eq!(status.state, ReportState::Completed);
        assert_eq!(status.file_path.as_deref(), Some("/out/5.csv"));
    }

    #[test]
    fn test_parse_pending_status_without_path() {
        let body = r#"{"id_campana": 9, "estado": "PENDIENTE", "fecha": "2024-01-01",
                       "ruta_archivo": null}"#;

        let status: ReportStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.state, ReportState::Pending);
        assert!(status.file_path.is_none());
    }

    #[test]
    fn test_parse_capitalized_legacy_state() {
        // rows written by the old generator
        let body = r#"{"id_campana": 2, "estado": "Completado", "fecha": "2024-01-01",
                       "ruta_archivo": "/out/2.csv"}"#;

        let status: ReportStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.state, ReportState::Completed);
    }

    #[test]
    fn test_state_roundtrips_upper_case() {
        let json = serde_json::to_string(&ReportState::InProgress).unwrap();
        assert_eq!(json, "\"EN PROCESO\"");
    }

    #[test]
    fn test_parse_report_response() {
        let body = r#"{"mensaje": "ok", "campanias": [
            {"id": 1, "nombre": "Promo", "estado": "EN PROCESO"}
        ]}"#;

        let response: ReportResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.message, "ok");
        assert_eq!(response.campaigns.len(), 1);
        assert_eq!(response.campaigns[0].status, "EN PROCESO");
    }
}
