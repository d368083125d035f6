use contracts::shared::page_config::{AdminConfig, RequestHeaders};

use crate::shared::api_utils::{api_url, CONFIG_PATH};
use crate::shared::requests::RequestsService;

/// Fetch and parse the admin-panel descriptor
pub async fn fetch_admin_config(requests: RequestsService) -> Result<AdminConfig, String> {
    let raw = requests
        .get(&api_url(CONFIG_PATH), &RequestHeaders::new())
        .await?;
    serde_json::from_value(raw).map_err(|e| format!("Failed to parse configuration: {}", e))
}
