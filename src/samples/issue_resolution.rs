//! Rendered account and product issues, aggregate statuses and the
//! interactive trigger-action workflow.

use crate::error::Result;
use crate::issues::{
    Prompter, ScriptedPrompter, TerminalPrompter, TriggerOutcome, print_issue,
    trigger_action_for_account_issue,
};
use crate::models::issue::RenderIssuesRequestPayload;
use crate::services::issue_resolution::{self, Locale};

use super::{Registry, SampleContext};

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "issueresolution.v1.render_account_issues",
        "Render the account's issues as text (-p language_code, -p time_zone)",
        render_account_issues
    );
    sample!(
        registry,
        "issueresolution.v1.render_product_issues",
        "Render one product's issues as text (-p product_id)",
        render_product_issues
    );
    sample!(
        registry,
        "issueresolution.v1.list_aggregate_product_statuses",
        "Product counts per reporting context for a country (-p country)",
        list_aggregate_product_statuses
    );
    sample!(
        registry,
        "issueresolution.v1.trigger_action_for_account_issue",
        "Pick an account issue and start its built-in action \
         (-p answers=0,1,true for unattended runs)",
        trigger_action
    );
    Ok(())
}

fn locale(ctx: &SampleContext) -> Locale {
    Locale::new(
        ctx.param_or("language_code", "en_GB"),
        ctx.param_or("time_zone", "Europe/Zurich"),
    )
}

async fn render_account_issues(ctx: &SampleContext) -> Result<()> {
    let response = issue_resolution::render_account_issues(
        &ctx.client,
        ctx.account_id(),
        &locale(ctx),
        &RenderIssuesRequestPayload::default(),
    )
    .await?;
    println!("{} issues found for the account", response.rendered_issues.len());
    for issue in &response.rendered_issues {
        print_issue(issue);
    }
    Ok(())
}

async fn render_product_issues(ctx: &SampleContext) -> Result<()> {
    let product_id = ctx.param("product_id")?;
    let response = issue_resolution::render_product_issues(
        &ctx.client,
        ctx.account_id(),
        product_id,
        &locale(ctx),
        &RenderIssuesRequestPayload::default(),
    )
    .await?;
    println!(
        "{} issues found for product {}",
        response.rendered_issues.len(),
        product_id
    );
    for issue in &response.rendered_issues {
        print_issue(issue);
    }
    Ok(())
}

async fn list_aggregate_product_statuses(ctx: &SampleContext) -> Result<()> {
    let filter = format!("country = \"{}\"", ctx.param_or("country", "US"));
    let statuses = issue_resolution::list_aggregate_product_statuses(
        &ctx.client,
        ctx.account_id(),
        Some(&filter),
    )
    .await?;
    for status in &statuses {
        let stats = status.stats.clone().unwrap_or_default();
        println!(
            "{} / {}: active {}, pending {}, disapproved {}, expiring {}, {} issue(s)",
            status.reporting_context.as_deref().unwrap_or("-"),
            status.country.as_deref().unwrap_or("-"),
            stats.active_count.unwrap_or(0),
            stats.pending_count.unwrap_or(0),
            stats.disapproved_count.unwrap_or(0),
            stats.expiring_count.unwrap_or(0),
            status.item_level_issues.len()
        );
    }
    println!("The following count of aggregate statuses were returned: {}", statuses.len());
    Ok(())
}

async fn trigger_action(ctx: &SampleContext) -> Result<()> {
    let mut prompter: Box<dyn Prompter> = match ctx.param("answers") {
        Ok(answers) => Box::new(ScriptedPrompter::from_list(answers)),
        Err(_) => Box::new(TerminalPrompter),
    };

    let result = trigger_action_for_account_issue(
        &ctx.client,
        ctx.account_id(),
        &locale(ctx),
        prompter.as_mut(),
    )
    .await;
    match result {
        Ok(TriggerOutcome::Aborted { field_id }) => {
            tracing::warn!("Action not triggered, field '{}' was left empty", field_id);
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(err) if err.is_permission_denied() => {
            println!("The access to the `triggerAction` method is currently limited.");
            println!(
                "Ask your Google contact to enable it for your Merchant Center account, \
                 or start the action from the Merchant Center UI."
            );
            Err(err)
        }
        Err(err) => Err(err),
    }
}
