//! The interactive trigger-action workflow, driven by scripted answers.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use common::{ACCOUNT_ID, MockApi};
use merchant_api_samples::error::AppError;
use merchant_api_samples::issues::{
    ScriptedPrompter, TriggerOutcome, trigger_action_for_account_issue,
};
use merchant_api_samples::services::issue_resolution::Locale;

const RENDER: &str = "/issueresolution/v1/accounts/123:renderaccountissues";
const TRIGGER: &str = "/issueresolution/v1/accounts/123:triggeraction";

fn text(value: &str) -> Value {
    json!({ "simpleValue": value })
}

fn informational_issue() -> Value {
    json!({
        "title": "Misrepresentation",
        "impact": { "message": "Your products are limited", "severity": "ERROR" },
        "actions": [
            { "buttonLabel": "Learn more", "isAvailable": true,
              "externalAction": {
                  "type": "REVIEW_ACCOUNT_ISSUE_IN_MERCHANT_CENTER",
                  "uri": "https://merchants.google.com"
              } }
        ]
    })
}

fn actionable_issue(first_field_required: bool) -> Value {
    json!({
        "title": "Verify your business",
        "impact": { "message": "Free listings are paused", "severity": "ERROR" },
        "actions": [
            { "buttonLabel": "Request review", "isAvailable": false, "builtinSimpleAction": {} },
            {
                "buttonLabel": "Request review",
                "isAvailable": true,
                "builtinUserInputAction": {
                    "actionContext": "ctx-42",
                    "flows": [
                        {
                            "id": "flow-simple",
                            "label": "Without explanation",
                            "dialogTitle": "Request review"
                        },
                        {
                            "id": "flow-full",
                            "label": "With explanation",
                            "dialogTitle": "Tell us what changed",
                            "dialogMessage": text("We will review your account again."),
                            "inputs": [
                                {
                                    "id": "confirm",
                                    "label": text("I fixed the issue"),
                                    "required": first_field_required,
                                    "checkboxInput": {}
                                },
                                {
                                    "id": "reason",
                                    "label": text("What did you change?"),
                                    "choiceInput": { "options": [
                                        { "id": "policy", "label": text("Updated my policies") },
                                        { "id": "site", "label": text("Updated my site") }
                                    ] }
                                },
                                {
                                    "id": "details",
                                    "label": text("Details"),
                                    "textInput": { "type": "GENERIC_SHORT_TEXT" }
                                }
                            ]
                        }
                    ]
                }
            }
        ]
    })
}

fn locale() -> Locale {
    Locale::new("en_GB", "Europe/Zurich")
}

async fn trigger(
    mock: &MockApi,
    prompter: &mut ScriptedPrompter,
) -> Result<TriggerOutcome, AppError> {
    trigger_action_for_account_issue(&mock.client(), ACCOUNT_ID, &locale(), prompter).await
}

#[tokio::test]
async fn nothing_to_trigger_when_no_issue_has_a_built_in_action() {
    let mock = MockApi::start().await;
    mock.on(Method::POST, RENDER, json!({ "renderedIssues": [informational_issue()] }));

    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let outcome = trigger(&mock, &mut prompter).await.unwrap();

    assert!(matches!(outcome, TriggerOutcome::NothingToTrigger));
    assert!(mock.requests_to(TRIGGER).is_empty());

    let render = &mock.requests_to(RENDER)[0];
    assert_eq!(render.json()["userInputActionOption"], "BUILT_IN_USER_INPUT_ACTIONS");
    assert_eq!(render.query_pairs().get("languageCode").map(String::as_str), Some("en_GB"));
    assert_eq!(render.query_pairs().get("timeZone").map(String::as_str), Some("Europe/Zurich"));
}

#[tokio::test]
async fn answers_are_sent_with_the_action_context_and_flow() {
    let mock = MockApi::start().await;
    mock.on(
        Method::POST,
        RENDER,
        json!({ "renderedIssues": [informational_issue(), actionable_issue(true)] }),
    );
    mock.on(Method::POST, TRIGGER, json!({ "message": "Review requested" }));

    // issue 0 of the triggerable ones, flow 1, confirm, second option, free text
    let mut prompter = ScriptedPrompter::from_list("0,1,true,1,New return policy");
    let outcome = trigger(&mock, &mut prompter).await.unwrap();

    let TriggerOutcome::Triggered { payload, response } = outcome else {
        panic!("action was not triggered");
    };
    assert_eq!(response.message, "Review requested");
    assert_eq!(payload.action_context, "ctx-42");
    assert_eq!(payload.action_input.action_flow_id, "flow-full");
    assert_eq!(prompter.remaining(), 0);

    let sent = mock.requests_to(TRIGGER)[0].json();
    assert_eq!(sent["actionContext"], "ctx-42");
    assert_eq!(
        sent["actionInput"]["inputValues"],
        json!([
            { "inputFieldId": "confirm", "checkboxInputValue": { "value": true } },
            { "inputFieldId": "reason", "choiceInputValue": { "choiceInputOptionId": "site" } },
            { "inputFieldId": "details", "textInputValue": { "value": "New return policy" } }
        ])
    );
    assert_eq!(
        mock.requests_to(TRIGGER)[0].query_pairs().get("languageCode").map(String::as_str),
        Some("en_GB")
    );
}

#[tokio::test]
async fn invalid_selections_are_asked_again() {
    let mock = MockApi::start().await;
    mock.on(Method::POST, RENDER, json!({ "renderedIssues": [actionable_issue(false)] }));
    mock.on(Method::POST, TRIGGER, json!({ "message": "ok" }));

    let mut prompter = ScriptedPrompter::from_list("7,x,0,0");
    let outcome = trigger(&mock, &mut prompter).await.unwrap();

    let TriggerOutcome::Triggered { payload, .. } = outcome else {
        panic!("action was not triggered");
    };
    assert_eq!(payload.action_input.action_flow_id, "flow-simple");
    assert!(payload.action_input.input_values.is_empty());
}

#[tokio::test]
async fn unconfirmed_required_checkbox_aborts_before_sending() {
    let mock = MockApi::start().await;
    mock.on(Method::POST, RENDER, json!({ "renderedIssues": [actionable_issue(true)] }));

    let mut prompter = ScriptedPrompter::from_list("0,1,no");
    let outcome = trigger(&mock, &mut prompter).await.unwrap();

    match outcome {
        TriggerOutcome::Aborted { field_id } => assert_eq!(field_id, "confirm"),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(mock.requests_to(TRIGGER).is_empty());
}

#[tokio::test]
async fn limited_access_surfaces_as_permission_denied() {
    let mock = MockApi::start().await;
    mock.on(Method::POST, RENDER, json!({ "renderedIssues": [actionable_issue(false)] }));
    mock.fail(
        Method::POST,
        TRIGGER,
        StatusCode::FORBIDDEN,
        "PERMISSION_DENIED",
        "The caller does not have access to triggerAction",
    );

    let mut prompter = ScriptedPrompter::from_list("0,0");
    let err = trigger(&mock, &mut prompter)
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());
    assert!(matches!(err, AppError::Api { status: 403, .. }));
}
