//! Загрузка и проверка JSON-описания админ-панели.

use contracts::shared::page_config::AdminConfig;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use super::error::AppError;

/// Read the descriptor from disk.
///
/// Returns the raw JSON (sent to the client as is, unknown keys kept) together
/// with its typed form.
pub async fn read_descriptor(path: &Path) -> Result<(Value, AdminConfig), AppError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    parse_descriptor(&contents)
}

pub fn parse_descriptor(contents: &str) -> Result<(Value, AdminConfig), AppError> {
    let raw: Value = serde_json::from_str(contents)?;
    let config: AdminConfig = serde_json::from_value(raw.clone())?;
    Ok((raw, config))
}

/// Problems that do not stop the server but leave a page unusable
pub fn validate(config: &AdminConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.pages.is_empty() {
        warnings.push("No pages defined".to_string());
    }

    let mut seen = HashSet::new();
    for page in &config.pages {
        if !seen.insert(page.id.as_str()) {
            warnings.push(format!("Duplicate page id '{}'", page.id));
        }

        let get_all = match page.get_all_method() {
            Ok(m) => m,
            Err(e) => {
                warnings.push(format!("Page '{}': {}", page.id, e));
                continue;
            }
        };

        if let Err(e) = get_all.display_fields() {
            warnings.push(format!("Page '{}': {}", page.id, e));
        }

        if let Some(delete) = &page.methods.delete {
            if let Err(e) = delete.url() {
                warnings.push(format!("Page '{}': {}", page.id, e));
            }
        }
    }

    warnings
}

/// Startup check: a missing file is only reported, a broken one stops the server
pub async fn check_on_startup(path: &Path) -> anyhow::Result<()> {
    match read_descriptor(path).await {
        Ok((_, config)) => {
            tracing::info!(
                "Admin config '{}' loaded: {} page(s)",
                config.name,
                config.pages.len()
            );
            for warning in validate(&config) {
                tracing::warn!("{}", warning);
            }
            Ok(())
        }
        Err(AppError::ConfigNotFound(p)) => {
            tracing::warn!("Admin config not found at {}, /config.json will fail until it exists", p);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("{e}")),
    }
}
