use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Screen the page shell should show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewState {
    #[default]
    Get,
    Post,
    Put,
    CustomActions,
}

impl ViewState {
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Get => "List",
            ViewState::Post => "New item",
            ViewState::Put => "Edit item",
            ViewState::CustomActions => "Custom actions",
        }
    }
}

/// Transition emitted by the list view to its parent shell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub state: ViewState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl StateChange {
    pub fn new_item() -> Self {
        Self { state: ViewState::Post, data: None }
    }

    pub fn edit(row: Value) -> Self {
        Self { state: ViewState::Put, data: Some(row) }
    }

    pub fn custom_actions(row: Value) -> Self {
        Self { state: ViewState::CustomActions, data: Some(row) }
    }

    pub fn back_to_list() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let change = StateChange::edit(json!({ "id": 1 }));
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({ "state": "put", "data": { "id": 1 } })
        );
        assert_eq!(
            serde_json::to_value(StateChange::new_item()).unwrap(),
            json!({ "state": "post" })
        );
        assert_eq!(
            serde_json::to_value(StateChange::custom_actions(json!({}))).unwrap()["state"],
            json!("customActions")
        );
    }

    #[test]
    fn test_back_to_list() {
        let change = StateChange::back_to_list();
        assert_eq!(change.state, ViewState::Get);
        assert!(change.data.is_none());
    }
}
