//! JSON backup of a user's links.

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::dto::link::LinkItem;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No links to export")]
    Empty,
    #[error("Failed to serialize links: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// `linknote-backup-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("linknote-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Pretty-printed JSON array of the links, exactly as the API returned them.
///
/// # Errors
///
/// Returns [`ExportError::Empty`] when there is nothing to export.
pub fn export_json(links: &[LinkItem]) -> Result<String, ExportError> {
    if links.is_empty() {
        return Err(ExportError::Empty);
    }
    Ok(serde_json::to_string_pretty(links)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(export_file_name(date), "linknote-backup-2025-01-09.json");
    }

    #[test]
    fn test_export_json_refuses_empty() {
        assert!(matches!(export_json(&[]), Err(ExportError::Empty)));
    }

    #[test]
    fn test_export_json_is_pretty_array() {
        let link = LinkItem {
            id: 3,
            user_id: 1,
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            description: None,
            category: Some("misc".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = export_json(std::slice::from_ref(&link)).unwrap();

        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"title\": \"Example\""));
        let parsed: Vec<LinkItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![link]);
    }
}
