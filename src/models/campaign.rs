use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A marketing campaign as the backend reports it. Read-only on this side;
/// the wire format uses Spanish field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// One page of campaign search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignPage {
    pub items: Vec<Campaign>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Response of `GET /campania/fechas`: the dates a search can target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableDates {
    #[serde(rename = "fechas")]
    pub dates: Vec<NaiveDate>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_campaign_page() {
        let body = r#"{
            "items": [
                {"id": 1, "nombre": "Promo enero", "fecha": "2024-01-01", "estado": "PENDIENTE"}
            ],
            "total": 25,
            "page": 1,
            "page_size": 10,
            "total_pages": 3
        }"#;

        let page: CampaignPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 1);
        assert_eq!(page.items[0].name, "Promo enero");
        assert_eq!(page.items[0].status, "PENDIENTE");
        assert!(page.items[0].description.is_none());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_parse_campaign_with_description() {
        let body = r#"{"id": 7, "nombre": "SMS masivo", "fecha": "2024-02-02",
                       "estado": "COMPLETADO", "descripcion": "Envio nocturno"}"#;

        let campaign: Campaign = serde_json::from_str(body).unwrap();
        assert_eq!(campaign.description.as_deref(), Some("Envio nocturno"));
    }

    #[test]
    fn test_parse_available_dates() {
        let body = r#"{"fechas": ["2024-01-01", "2024-02-02"], "total": 2}"#;

        let dates: AvailableDates = serde_json::from_str(body).unwrap();
        assert_eq!(dates.total, 2);
        assert_eq!(dates.dates[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(dates.dates[1].to_string(), "2024-02-02");
    }
}
