use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::shared::admin_descriptor::{read_descriptor, validate};
use crate::shared::error::AppError;
use crate::AppState;

/// GET /config.json
///
/// Файл читается при каждом запросе: правки описания видны без перезапуска.
pub async fn get_admin_config(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let (raw, config) = read_descriptor(&state.admin_config_path).await?;
    for warning in validate(&config) {
        tracing::debug!("{}", warning);
    }
    Ok(Json(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn state_for(path: PathBuf) -> State<AppState> {
        State(AppState {
            admin_config_path: Arc::new(path),
        })
    }

    #[tokio::test]
    async fn test_serves_descriptor() {
        let path = std::env::temp_dir().join("handler_admin_config_ok.json");
        std::fs::write(&path, r#"{ "name": "Panel", "pages": [], "custom": 1 }"#).unwrap();

        let Json(body) = get_admin_config(state_for(path.clone())).await.unwrap();
        assert_eq!(body["name"], "Panel");
        assert_eq!(body["custom"], 1);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_parse_error_is_500() {
        let path = std::env::temp_dir().join("handler_admin_config_bad.json");
        std::fs::write(&path, "{ broken").unwrap();

        let err = get_admin_config(state_for(path.clone())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let path = std::env::temp_dir().join("handler_admin_config_missing.json");
        let _ = std::fs::remove_file(&path);

        let err = get_admin_config(state_for(path)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
