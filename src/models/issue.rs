//! Issue resolution models.
//!
//! Rendered issues carry everything a merchant-facing UI needs: a title, a
//! severity-tagged impact, pre-rendered HTML detail and a list of actions.
//! Built-in user input actions describe a dialog (title, callout, message and
//! a form of input fields) whose answers are sent back with `triggeraction`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::int64;

/// How complex built-in actions are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserInputActionRenderingOption {
    /// Render them as redirects to Merchant Center (API default)
    RedirectToMerchantCenter,
    /// Render them as `builtinUserInputAction`, triggerable with `triggeraction`
    BuiltInUserInputActions,
}

/// Body of `renderaccountissues` / `renderproductissues`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderIssuesRequestPayload {
    /// `PRE_RENDERED_HTML` by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_option: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_input_action_option: Option<UserInputActionRenderingOption>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
    #[default]
    #[serde(other)]
    SeverityUnspecified,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakdownRegion {
    pub code: String,
    pub name: String,
}

/// Impact shared by a group of regions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Breakdown {
    pub regions: Vec<BreakdownRegion>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Impact {
    pub message: String,
    pub severity: Severity,
    pub breakdowns: Vec<Breakdown>,
}

/// Text with an optional tooltip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextWithTooltip {
    pub simple_value: Option<String>,
    pub simple_tooltip_value: Option<String>,
    pub tooltip_icon_style: Option<String>,
}

impl TextWithTooltip {
    pub fn text(&self) -> &str {
        self.simple_value.as_deref().unwrap_or("")
    }
}

/// Highlighted message shown at the top of a dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Callout {
    pub style_hint: Option<String>,
    pub full_message: TextWithTooltip,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextInput {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub additional_info: Option<TextWithTooltip>,
    pub format_info: Option<String>,
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceInputOption {
    pub id: String,
    pub label: TextWithTooltip,
    pub additional_input: Option<Box<InputField>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceInput {
    pub options: Vec<ChoiceInputOption>,
}

/// One field of an action dialog's form. Exactly one input kind is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputField {
    pub id: String,
    pub label: TextWithTooltip,
    pub required: bool,
    pub text_input: Option<TextInput>,
    pub choice_input: Option<ChoiceInput>,
    pub checkbox_input: Option<Value>,
}

/// One way of completing an action (e.g. "I fixed it" vs "I disagree").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionFlow {
    pub id: String,
    pub label: String,
    pub inputs: Vec<InputField>,
    pub dialog_title: String,
    pub dialog_message: Option<TextWithTooltip>,
    pub dialog_callout: Option<Callout>,
    pub dialog_button_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuiltInUserInputAction {
    /// Opaque context echoed back in `triggeraction`
    pub action_context: String,
    pub flows: Vec<ActionFlow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalAction {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: String,
}

/// Why an action is unavailable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reason {
    pub message: String,
    pub detail: Option<String>,
    pub action: Option<Box<Action>>,
}

/// A troubleshooting action. At most one action kind is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    pub builtin_simple_action: Option<Value>,
    pub external_action: Option<ExternalAction>,
    pub builtin_user_input_action: Option<BuiltInUserInputAction>,
    pub button_label: String,
    pub is_available: bool,
    pub reasons: Vec<Reason>,
}

impl Action {
    /// Available and startable with `triggeraction`.
    pub fn is_triggerable(&self) -> bool {
        self.is_available && self.builtin_user_input_action.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderedIssue {
    pub title: String,
    pub impact: Impact,
    pub prerendered_content: Option<String>,
    pub prerendered_out_of_court_dispute_settlement: Option<String>,
    pub actions: Vec<Action>,
}

impl RenderedIssue {
    pub fn triggerable_actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.is_triggerable())
    }

    pub fn has_triggerable_action(&self) -> bool {
        self.actions.iter().any(Action::is_triggerable)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderIssuesResponse {
    pub rendered_issues: Vec<RenderedIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputValue {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceInputValue {
    pub choice_input_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxInputValue {
    pub value: bool,
}

/// Answer to one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub input_field_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_input_value: Option<TextInputValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_input_value: Option<ChoiceInputValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox_input_value: Option<CheckboxInputValue>,
}

impl InputValue {
    pub fn text(field_id: &str, value: String) -> Self {
        Self {
            input_field_id: field_id.to_string(),
            text_input_value: Some(TextInputValue { value }),
            choice_input_value: None,
            checkbox_input_value: None,
        }
    }

    pub fn choice(field_id: &str, option_id: &str) -> Self {
        Self {
            input_field_id: field_id.to_string(),
            text_input_value: None,
            choice_input_value: Some(ChoiceInputValue {
                choice_input_option_id: option_id.to_string(),
            }),
            checkbox_input_value: None,
        }
    }

    pub fn checked(field_id: &str) -> Self {
        Self {
            input_field_id: field_id.to_string(),
            text_input_value: None,
            choice_input_value: None,
            checkbox_input_value: Some(CheckboxInputValue { value: true }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionInput {
    pub action_flow_id: String,
    pub input_values: Vec<InputValue>,
}

/// Body of `triggeraction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerActionPayload {
    pub action_context: String,
    pub action_input: ActionInput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerActionResponse {
    pub message: String,
}

/// Product counts per status for one reporting context and country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductStats {
    #[serde(with = "int64::option")]
    pub active_count: Option<i64>,
    #[serde(with = "int64::option")]
    pub pending_count: Option<i64>,
    #[serde(with = "int64::option")]
    pub disapproved_count: Option<i64>,
    #[serde(with = "int64::option")]
    pub expiring_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregateProductStatus {
    pub name: String,
    pub reporting_context: Option<String>,
    pub country: Option<String>,
    pub stats: Option<ProductStats>,
    pub item_level_issues: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_severity_maps_to_unspecified() {
        let impact: Impact = serde_json::from_value(json!({"severity": "CRITICAL_NEW"})).unwrap();
        assert_eq!(impact.severity, Severity::SeverityUnspecified);
    }

    #[test]
    fn triggerable_requires_availability_and_user_input() {
        let issue: RenderedIssue = serde_json::from_value(json!({
            "title": "Misrepresentation",
            "actions": [
                {"buttonLabel": "Learn more", "isAvailable": true,
                 "externalAction": {"uri": "https://x"}},
                {"buttonLabel": "Request review", "isAvailable": false,
                 "builtinUserInputAction": {"actionContext": "ctx", "flows": []}},
                {"buttonLabel": "Request review", "isAvailable": true,
                 "builtinUserInputAction": {"actionContext": "ctx", "flows": []}}
            ]
        }))
        .unwrap();
        assert_eq!(issue.triggerable_actions().count(), 1);
        assert!(issue.has_triggerable_action());
    }

    #[test]
    fn trigger_payload_shape() {
        let payload = TriggerActionPayload {
            action_context: "ctx".into(),
            action_input: ActionInput {
                action_flow_id: "flow1".into(),
                input_values: vec![InputValue::checked("confirm")],
            },
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "actionContext": "ctx",
                "actionInput": {
                    "actionFlowId": "flow1",
                    "inputValues": [
                        {"inputFieldId": "confirm", "checkboxInputValue": {"value": true}}
                    ]
                }
            })
        );
    }
}
