//! Accounts, users, account issues, regions, account services and
//! relationships.

use std::collections::BTreeMap;

use crate::batch::fan_out;
use crate::client::names;
use crate::error::{AppError, Result};
use crate::models::account::{Account, AccountIssue, PostalCodeArea, PostalCodeRange, Region};
use crate::models::common::TimeZone;
use crate::services::accounts;

use super::{Registry, SampleContext, print_json};

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "accounts.accounts.v1.get_account",
        "Get the merchant's account",
        get_account
    );
    sample!(
        registry,
        "accounts.accounts.v1.get_account_by_alias",
        "Get a sub-account by the alias its provider knows it by (-p provider_id, -p alias)",
        get_account_by_alias
    );
    sample!(
        registry,
        "accounts.accounts.v1.list_accounts",
        "List every accessible account",
        list_accounts
    );
    sample!(
        registry,
        "accounts.accounts.v1.filter_accounts",
        "List accounts matching a filter (-p filter)",
        filter_accounts
    );
    sample!(
        registry,
        "accounts.accounts.v1.list_sub_accounts",
        "List the sub-accounts of an advanced account",
        list_sub_accounts
    );
    sample!(
        registry,
        "accounts.accounts.v1.create_sub_account",
        "Create a sub-account under the merchant's advanced account",
        create_sub_account
    );
    sample!(
        registry,
        "accounts.accounts.v1.delete_account",
        "Delete an account and everything in it (-p account_id)",
        delete_account
    );
    sample!(registry, "accounts.users.v1.list_users", "List the users of the account", list_users);
    sample!(
        registry,
        "accounts.users.v1.get_user",
        "Get one user (-p email, default me)",
        get_user
    );
    sample!(
        registry,
        "accounts.users.v1.create_user",
        "Invite a user as admin and performance reporter (-p email)",
        create_user
    );
    sample!(
        registry,
        "accounts.users.v1.update_user",
        "Change a user's access rights (-p email, -p access_right)",
        update_user
    );
    sample!(registry, "accounts.users.v1.delete_user", "Remove a user (-p email)", delete_user);
    sample!(
        registry,
        "accounts.accountissues.v1.list_account_issues",
        "List account-level issues",
        list_account_issues
    );
    sample!(
        registry,
        "accounts.accountissues.v1.list_advanced_account_issues_async",
        "List the issues of every sub-account concurrently",
        list_advanced_account_issues
    );
    sample!(
        registry,
        "accounts.regions.v1.list_regions",
        "List the account's regions",
        list_regions
    );
    sample!(
        registry,
        "accounts.regions.v1.create_region",
        "Create a New York postal code region (-p region_id)",
        create_region
    );
    sample!(
        registry,
        "accounts.regions.v1.delete_region",
        "Delete a region (-p region_id)",
        delete_region
    );
    sample!(
        registry,
        "accounts.accountservices.v1.list_account_services",
        "List the services linked to the account",
        list_account_services
    );
    sample!(
        registry,
        "accounts.accountservices.v1.get_account_service",
        "Get one account service (-p service_id)",
        get_account_service
    );
    sample!(
        registry,
        "accounts.accountservices.v1.propose_account_service",
        "Propose account aggregation by a provider (-p provider_id)",
        propose_account_service
    );
    sample!(
        registry,
        "accounts.accountservices.v1.approve_account_service",
        "Approve a proposed service (-p service_id)",
        approve_account_service
    );
    sample!(
        registry,
        "accounts.accountservices.v1.reject_account_service",
        "Reject a proposed service (-p service_id)",
        reject_account_service
    );
    sample!(
        registry,
        "accounts.accountservices.v1.delete_account_service",
        "Delete an account service (-p service_id)",
        delete_account_service
    );
    sample!(
        registry,
        "accounts.accountrelationships.v1.list_account_relationships",
        "List the account's relationships",
        list_relationships
    );
    sample!(
        registry,
        "accounts.accountrelationships.v1.get_account_relationship",
        "Get one relationship (-p relationship_id)",
        get_relationship
    );
    sample!(
        registry,
        "accounts.accountrelationships.v1.update_account_relationship",
        "Set the alias of a relationship (-p relationship_id, -p alias)",
        update_relationship
    );
    Ok(())
}

async fn get_account(ctx: &SampleContext) -> Result<()> {
    let account = accounts::get_account(&ctx.client, ctx.account_id()).await?;
    print_json("Retrieved Account below", &account)?;
    Ok(())
}

/// Sub-accounts can be addressed as `{provider}~{alias}`.
async fn get_account_by_alias(ctx: &SampleContext) -> Result<()> {
    let provider_id = ctx.param_or("provider_id", ctx.account_id());
    let alias = ctx.param_or("alias", "alias");
    let account = accounts::get_account(&ctx.client, &format!("{}~{}", provider_id, alias)).await?;
    print_json("Retrieved Account below", &account)?;
    Ok(())
}

async fn list_accounts(ctx: &SampleContext) -> Result<()> {
    let accounts = accounts::list_accounts(&ctx.client, None).await?;
    print_account_list(&accounts);
    Ok(())
}

async fn filter_accounts(ctx: &SampleContext) -> Result<()> {
    let default_filter = format!(
        "accountName = \"*store*\" AND relationship(providerId = {})",
        ctx.account_id()
    );
    let filter = ctx.param_or("filter", &default_filter);
    let accounts = accounts::list_accounts(&ctx.client, Some(filter)).await?;
    print_account_list(&accounts);
    Ok(())
}

async fn list_sub_accounts(ctx: &SampleContext) -> Result<()> {
    let accounts = accounts::list_sub_accounts(&ctx.client, ctx.account_id()).await?;
    print_account_list(&accounts);
    Ok(())
}

fn print_account_list(accounts: &[Account]) {
    for account in accounts {
        println!(
            "{} ({})",
            account.account_name,
            account.name.as_deref().unwrap_or("<unnamed>")
        );
    }
    println!("The following count of accounts were returned: {}", accounts.len());
}

async fn create_sub_account(ctx: &SampleContext) -> Result<()> {
    let account = Account {
        account_name: ctx.param_or("account_name", "Demo Business").to_string(),
        adult_content: Some(false),
        time_zone: Some(TimeZone {
            id: ctx.param_or("time_zone", "America/New_York").to_string(),
        }),
        language_code: Some(ctx.param_or("language_code", "en-US").to_string()),
        ..Default::default()
    };
    let created = accounts::create_sub_account(&ctx.client, ctx.account_id(), account).await?;
    print_json("Created sub-account below", &created)?;
    Ok(())
}

async fn delete_account(ctx: &SampleContext) -> Result<()> {
    let account_id = ctx.param("account_id")?;
    let force = ctx.param_or("force", "true") == "true";
    accounts::delete_account(&ctx.client, account_id, force).await?;
    println!("Delete successful.");
    Ok(())
}

// Users

async fn list_users(ctx: &SampleContext) -> Result<()> {
    let users = accounts::list_users(&ctx.client, ctx.account_id()).await?;
    for user in &users {
        println!(
            "{} [{}] {}",
            user.name.as_deref().unwrap_or("<unnamed>"),
            user.state.as_deref().unwrap_or("-"),
            user.access_rights.join(", ")
        );
    }
    println!("The following count of users were returned: {}", users.len());
    Ok(())
}

async fn get_user(ctx: &SampleContext) -> Result<()> {
    let email = ctx.param_or("email", "me");
    let user = accounts::get_user(&ctx.client, ctx.account_id(), email).await?;
    print_json("Retrieved User below", &user)?;
    Ok(())
}

async fn create_user(ctx: &SampleContext) -> Result<()> {
    let email = ctx.param("email")?;
    let user = accounts::create_user(
        &ctx.client,
        ctx.account_id(),
        email,
        &["ADMIN", "PERFORMANCE_REPORTING"],
    )
    .await?;
    print_json("Created User below", &user)?;
    Ok(())
}

async fn update_user(ctx: &SampleContext) -> Result<()> {
    let email = ctx.param("email")?;
    let right = ctx.param_or("access_right", "ADMIN");
    let user = accounts::update_user(&ctx.client, ctx.account_id(), email, &[right]).await?;
    print_json("Updated User below", &user)?;
    Ok(())
}

async fn delete_user(ctx: &SampleContext) -> Result<()> {
    let email = ctx.param("email")?;
    accounts::delete_user(&ctx.client, ctx.account_id(), email).await?;
    println!("Delete successful.");
    Ok(())
}

// Account issues

async fn list_account_issues(ctx: &SampleContext) -> Result<()> {
    let issues = accounts::list_account_issues(
        &ctx.client,
        ctx.account_id(),
        ctx.param_or("language_code", "en-US"),
        ctx.param_or("time_zone", "America/Los_Angeles"),
    )
    .await?;
    print_issues(&issues);
    println!("The following count of account issues were returned: {}", issues.len());
    Ok(())
}

/// # Process
///
/// 1. List the sub-accounts of the advanced account
/// 2. Request every sub-account's issues at once
/// 3. Print the issues per sub-account; any failed request fails the sample
async fn list_advanced_account_issues(ctx: &SampleContext) -> Result<()> {
    let sub_accounts = accounts::list_sub_accounts(&ctx.client, ctx.account_id()).await?;
    println!("Found {} sub-account(s)", sub_accounts.len());

    let ids: Vec<String> = sub_accounts
        .iter()
        .filter_map(|a| a.name.as_deref())
        .map(|name| names::id_of(name).to_string())
        .collect();

    let language_code = ctx.param_or("language_code", "en-US");
    let time_zone = ctx.param_or("time_zone", "America/Los_Angeles");
    let outcome = fan_out(ids.iter().map(|id| async move {
        let issues =
            accounts::list_account_issues(&ctx.client, id, language_code, time_zone).await?;
        Ok::<_, AppError>((names::account(id), issues))
    }))
    .await;

    let results = outcome.report(|(name, issues)| format!("{}: {} issue(s)", name, issues.len()))?;
    let by_account: BTreeMap<String, Vec<AccountIssue>> = results.into_iter().collect();
    for (name, issues) in &by_account {
        println!("Issues for {}:", name);
        print_issues(issues);
    }
    Ok(())
}

fn print_issues(issues: &[AccountIssue]) {
    for issue in issues {
        println!(
            "  [{}] {} ({})",
            issue.severity.as_deref().unwrap_or("-"),
            issue.title,
            issue.name
        );
    }
}

// Regions

async fn list_regions(ctx: &SampleContext) -> Result<()> {
    let regions = accounts::list_regions(&ctx.client, ctx.account_id()).await?;
    for region in &regions {
        println!(
            "{} ({})",
            region.display_name.as_deref().unwrap_or("-"),
            region.name.as_deref().unwrap_or("<unnamed>")
        );
    }
    println!("The following count of regions were returned: {}", regions.len());
    Ok(())
}

async fn create_region(ctx: &SampleContext) -> Result<()> {
    let region_id = ctx.param_or("region_id", "123456AB");
    let region = Region {
        display_name: Some("New York".to_string()),
        postal_code_area: Some(PostalCodeArea {
            region_code: "US".to_string(),
            postal_codes: vec![PostalCodeRange {
                begin: "10001".to_string(),
                end: Some("10282".to_string()),
            }],
        }),
        ..Default::default()
    };
    let created = accounts::create_region(&ctx.client, ctx.account_id(), region_id, &region).await?;
    print_json("Created Region below", &created)?;
    Ok(())
}

async fn delete_region(ctx: &SampleContext) -> Result<()> {
    let region_id = ctx.param("region_id")?;
    accounts::delete_region(&ctx.client, ctx.account_id(), region_id).await?;
    println!("Delete successful.");
    Ok(())
}

// Account services and relationships

async fn list_account_services(ctx: &SampleContext) -> Result<()> {
    let services = accounts::list_account_services(&ctx.client, ctx.account_id()).await?;
    for service in &services {
        println!(
            "{} ({})",
            service.name.as_deref().unwrap_or("<unnamed>"),
            service.provider_display_name.as_deref().unwrap_or("-")
        );
    }
    println!("The following count of account services were returned: {}", services.len());
    Ok(())
}

async fn get_account_service(ctx: &SampleContext) -> Result<()> {
    let service_id = ctx.param("service_id")?;
    let service = accounts::get_account_service(&ctx.client, ctx.account_id(), service_id).await?;
    print_json("Retrieved Account Service below", &service)?;
    Ok(())
}

async fn propose_account_service(ctx: &SampleContext) -> Result<()> {
    let provider_id = ctx.param("provider_id")?;
    let service =
        accounts::propose_account_service(&ctx.client, ctx.account_id(), provider_id).await?;
    print_json("Proposed Account Service below", &service)?;
    Ok(())
}

async fn approve_account_service(ctx: &SampleContext) -> Result<()> {
    let service_id = ctx.param("service_id")?;
    let response =
        accounts::approve_account_service(&ctx.client, ctx.account_id(), service_id).await?;
    print_json("Approved Account Service below", &response)?;
    Ok(())
}

async fn reject_account_service(ctx: &SampleContext) -> Result<()> {
    let service_id = ctx.param("service_id")?;
    let response =
        accounts::reject_account_service(&ctx.client, ctx.account_id(), service_id).await?;
    print_json("Rejected Account Service below", &response)?;
    Ok(())
}

async fn delete_account_service(ctx: &SampleContext) -> Result<()> {
    let service_id = ctx.param("service_id")?;
    accounts::delete_account_service(&ctx.client, ctx.account_id(), service_id).await?;
    println!("Delete successful.");
    Ok(())
}

async fn list_relationships(ctx: &SampleContext) -> Result<()> {
    let relationships = accounts::list_relationships(&ctx.client, ctx.account_id()).await?;
    for relationship in &relationships {
        println!(
            "{} alias {}",
            relationship.name.as_deref().unwrap_or("<unnamed>"),
            relationship.account_id_alias.as_deref().unwrap_or("-")
        );
    }
    println!(
        "The following count of account relationships were returned: {}",
        relationships.len()
    );
    Ok(())
}

async fn get_relationship(ctx: &SampleContext) -> Result<()> {
    let relationship_id = ctx.param("relationship_id")?;
    let relationship =
        accounts::get_relationship(&ctx.client, ctx.account_id(), relationship_id).await?;
    print_json("Retrieved Account Relationship below", &relationship)?;
    Ok(())
}

async fn update_relationship(ctx: &SampleContext) -> Result<()> {
    let relationship_id = ctx.param("relationship_id")?;
    let alias = ctx.param_or("alias", "alias");
    let relationship =
        accounts::update_relationship_alias(&ctx.client, ctx.account_id(), relationship_id, alias)
            .await?;
    print_json("Updated Account Relationship below", &relationship)?;
    Ok(())
}
