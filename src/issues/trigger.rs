//! Interactive resolution of account issues through built-in actions.
//!
//! # Process
//!
//! 1. Render the account's issues with `BUILT_IN_USER_INPUT_ACTIONS`
//! 2. Keep issues that have an available built-in user input action
//! 3. Let the user pick the issue, then the action, then the flow
//!    (a single candidate is picked automatically)
//! 4. Show the flow's dialog: title, callout, message
//! 5. Collect the form inputs (checkbox, choice, text)
//! 6. Send `triggeraction` with the action context, flow id and inputs
//!
//! A required checkbox left unconfirmed stops the flow before any request
//! is sent.

use crate::client::MerchantClient;
use crate::error::Result;
use crate::models::issue::{
    ActionFlow, ActionInput, InputField, InputValue, RenderIssuesRequestPayload, RenderedIssue,
    TriggerActionPayload, TriggerActionResponse, UserInputActionRenderingOption,
};
use crate::services::issue_resolution::{self, Locale};

use super::prompt::Prompter;

/// How the decision tree ended.
#[derive(Debug)]
pub enum TriggerOutcome {
    /// No issue had an action that can be started through the API
    NothingToTrigger,
    /// A required field was not filled in; no request was sent
    Aborted { field_id: String },
    Triggered {
        payload: TriggerActionPayload,
        response: TriggerActionResponse,
    },
}

const RULE: &str = "-----------------------------------------------------------------";

pub async fn trigger_action_for_account_issue(
    client: &MerchantClient,
    account_id: &str,
    locale: &Locale,
    prompter: &mut dyn Prompter,
) -> Result<TriggerOutcome> {
    let payload = RenderIssuesRequestPayload {
        content_option: None,
        user_input_action_option: Some(UserInputActionRenderingOption::BuiltInUserInputActions),
    };

    println!("Sending RenderAccountIssues request");
    let response =
        issue_resolution::render_account_issues(client, account_id, locale, &payload).await?;
    println!("{}", RULE);
    println!("Summary: ");
    println!("{} issues found for the account", response.rendered_issues.len());

    let issues: Vec<&RenderedIssue> = response
        .rendered_issues
        .iter()
        .filter(|issue| issue.has_triggerable_action())
        .collect();
    if issues.is_empty() {
        println!("There is currently no issue that has a triggerable action");
        return Ok(TriggerOutcome::NothingToTrigger);
    }
    println!(
        "{} issues have an action that could be started with the `triggerAction` method:",
        issues.len()
    );

    // Issue
    let titles: Vec<String> = issues.iter().map(|i| i.title.clone()).collect();
    let issue = issues[prompter.choose("issue", &titles)?];
    println!("You selected '{}' issue.", issue.title);

    // Action
    let actions: Vec<_> = issue.triggerable_actions().collect();
    let action = if actions.len() == 1 {
        println!(
            "There is only one action '{}' that can be triggered.",
            actions[0].button_label
        );
        actions[0]
    } else {
        let labels: Vec<String> = actions.iter().map(|a| a.button_label.clone()).collect();
        let action = actions[prompter.choose("action", &labels)?];
        println!("You selected '{}' action.", action.button_label);
        action
    };

    let Some(user_input) = action.builtin_user_input_action.as_ref() else {
        return Ok(TriggerOutcome::NothingToTrigger);
    };

    // Flow
    let flow = match user_input.flows.as_slice() {
        [] => return Ok(TriggerOutcome::NothingToTrigger),
        [only] => only,
        flows => {
            println!(
                "For the '{}' there are {} flows available:",
                action.button_label,
                flows.len()
            );
            let labels: Vec<String> = flows.iter().map(|f| f.label.clone()).collect();
            let flow = &flows[prompter.choose("flow", &labels)?];
            println!("You selected '{}' flow", flow.label);
            flow
        }
    };

    show_dialog(flow);

    let input_values = match collect_inputs(flow, prompter)? {
        Ok(values) => values,
        Err(field_id) => return Ok(TriggerOutcome::Aborted { field_id }),
    };

    let payload = TriggerActionPayload {
        action_context: user_input.action_context.clone(),
        action_input: ActionInput {
            action_flow_id: flow.id.clone(),
            input_values,
        },
    };

    println!("{}", RULE);
    println!("Calling `triggerAction` with request: ");
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response =
        issue_resolution::trigger_action(client, account_id, &locale.language_code, &payload)
            .await?;
    println!("The full response:");
    println!("{}", response.message);

    Ok(TriggerOutcome::Triggered { payload, response })
}

fn show_dialog(flow: &ActionFlow) {
    println!();
    println!("Additional content to display to the merchant (as a dialog):");
    println!("{}", flow.dialog_title);
    if let Some(callout) = &flow.dialog_callout {
        println!("{}", callout.full_message.text());
    }
    if let Some(message) = &flow.dialog_message {
        println!("{}", message.text());
    }
}

/// Ask for every input of the flow.
///
/// The inner `Err` carries the id of a required field that was not filled in.
fn collect_inputs(
    flow: &ActionFlow,
    prompter: &mut dyn Prompter,
) -> Result<std::result::Result<Vec<InputValue>, String>> {
    let mut values = Vec::new();
    if flow.inputs.is_empty() {
        return Ok(Ok(values));
    }

    println!();
    println!("User input form:");
    for field in &flow.inputs {
        print!("field [{}]: {}", field.id, field.label.text());
        if field.required {
            print!(" (required)");
        }

        match collect_input(field, prompter)? {
            Some(value) => values.push(value),
            None if field.required => {
                println!("The action can not be triggered without a required value");
                return Ok(Err(field.id.clone()));
            }
            None => {}
        }
        println!();
    }

    Ok(Ok(values))
}

fn collect_input(field: &InputField, prompter: &mut dyn Prompter) -> Result<Option<InputValue>> {
    if field.checkbox_input.is_some() {
        println!(" [checkbox]");
        if prompter.confirm(" Enter 'true' to confirm")? {
            return Ok(Some(InputValue::checked(&field.id)));
        }
        println!("Wrong value");
        Ok(None)
    } else if let Some(choice) = &field.choice_input {
        println!(" [select]");
        let labels: Vec<String> = choice
            .options
            .iter()
            .map(|o| format!("{} [{}]", o.label.text(), o.id))
            .collect();
        if labels.is_empty() {
            return Ok(None);
        }
        let option = &choice.options[prompter.choose("option", &labels)?];
        println!("You selected '{}'", option.label.text());
        Ok(Some(InputValue::choice(&field.id, &option.id)))
    } else if field.text_input.is_some() {
        println!(" [text]");
        let text = prompter.text(" Enter the text")?;
        Ok(Some(InputValue::text(&field.id, text)))
    } else {
        println!();
        Ok(None)
    }
}
