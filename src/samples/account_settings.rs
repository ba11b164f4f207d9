//! Per-account settings: business info and identity, homepage, programs,
//! shipping, terms of service, return policies, email preferences, autofeed,
//! automatic improvements, checkout, Google Business Profile, local feed
//! partnership, omnichannel and developer registration.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::names;
use crate::error::Result;
use crate::models::common::Price;
use crate::models::settings::{
    AutofeedSettings, AutomaticImprovements, BusinessIdentity, BusinessInfo, CheckoutSettings,
    DeliveryTime, EmailPreferences, Homepage, IdentityAttribute, ImageImprovements,
    ImageImprovementsSettings, InventoryVerification, ItemUpdates, ItemUpdatesSettings, Named,
    OmnichannelSetting, OnlineReturnPolicy, PostalAddress, Program, RateGroup, ReturnPolicyKind,
    ReviewedUri, ShippingImprovements, ShippingService, ShippingSettings, ShippingValue,
    TermsOfServiceAgreementState, UriSettings,
};
use crate::services::account_settings::{self as settings, setting_name};

use super::{Registry, SampleContext, print_json};

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "accounts.businessinfos.v1.get_business_info",
        "Get the business info",
        get_business_info
    );
    sample!(
        registry,
        "accounts.businessinfos.v1.update_business_info",
        "Update the business address",
        update_business_info
    );
    sample!(
        registry,
        "accounts.businessidentities.v1.get_business_identity",
        "Get the business identity attributes",
        get_business_identity
    );
    sample!(
        registry,
        "accounts.businessidentities.v1.update_business_identity",
        "Declare the business as a small business",
        update_business_identity
    );
    sample!(registry, "accounts.homepages.v1.get_homepage", "Get the homepage", get_homepage);
    sample!(
        registry,
        "accounts.homepages.v1.update_homepage",
        "Set the homepage URI (-p uri)",
        update_homepage
    );
    sample!(registry, "accounts.homepages.v1.claim_homepage", "Claim the homepage", claim_homepage);
    sample!(
        registry,
        "accounts.homepages.v1.unclaim_homepage",
        "Unclaim the homepage",
        unclaim_homepage
    );
    sample!(
        registry,
        "accounts.programs.v1.list_programs",
        "List the account's programs",
        list_programs
    );
    sample!(
        registry,
        "accounts.programs.v1.get_program",
        "Get one program (-p program, default free-listings)",
        get_program
    );
    sample!(
        registry,
        "accounts.programs.v1.enable_program",
        "Enable a program (-p program, default free-listings)",
        enable_program
    );
    sample!(
        registry,
        "accounts.programs.v1.disable_program",
        "Disable a program (-p program, default free-listings)",
        disable_program
    );
    sample!(
        registry,
        "accounts.shippingsettings.v1.get_shipping_settings",
        "Get the shipping settings",
        get_shipping_settings
    );
    sample!(
        registry,
        "accounts.shippingsettings.v1.insert_shipping_settings",
        "Replace the shipping settings with one Canadian postal service",
        insert_shipping_settings
    );
    sample!(
        registry,
        "accounts.termsofservices.v1.retrieve_latest_terms_of_service",
        "Latest Merchant Center terms of service (-p region_code)",
        retrieve_latest_terms_of_service
    );
    sample!(
        registry,
        "accounts.termsofservices.v1.get_terms_of_service",
        "Get one terms of service version (-p version)",
        get_terms_of_service
    );
    sample!(
        registry,
        "accounts.termsofservices.v1.accept_terms_of_service",
        "Accept a terms of service version (-p version, -p region_code)",
        accept_terms_of_service
    );
    sample!(
        registry,
        "accounts.termsofservices.v1.get_terms_of_service_agreement_state",
        "Agreement state for a region (-p identifier, default MERCHANT_CENTER-US)",
        get_agreement_state
    );
    sample!(
        registry,
        "accounts.termsofservices.v1.retrieve_for_application_terms_of_service_agreement_state",
        "Agreement state relevant to the calling application",
        retrieve_agreement_state_for_application
    );
    sample!(
        registry,
        "accounts.onlinereturnpolicy.v1.list_online_return_policies",
        "List the online return policies",
        list_return_policies
    );
    sample!(
        registry,
        "accounts.onlinereturnpolicy.v1.get_online_return_policy",
        "Get one return policy (-p return_policy_id)",
        get_return_policy
    );
    sample!(
        registry,
        "accounts.onlinereturnpolicy.v1.create_online_return_policy",
        "Create a US lifetime return policy",
        create_return_policy
    );
    sample!(
        registry,
        "accounts.onlinereturnpolicy.v1.update_online_return_policy",
        "Replace a return policy (-p return_policy_id)",
        update_return_policy
    );
    sample!(
        registry,
        "accounts.onlinereturnpolicy.v1.delete_online_return_policy",
        "Delete a return policy (-p return_policy_id)",
        delete_return_policy
    );
    sample!(
        registry,
        "accounts.emailpreferences.v1.get_email_preferences",
        "Get the email preferences of a user (-p email, default me)",
        get_email_preferences
    );
    sample!(
        registry,
        "accounts.emailpreferences.v1.update_email_preferences",
        "Opt a user in to news and tips (-p email, default me)",
        update_email_preferences
    );
    sample!(
        registry,
        "accounts.autofeedsettings.v1.get_autofeed_settings",
        "Get the autofeed settings",
        get_autofeed_settings
    );
    sample!(
        registry,
        "accounts.autofeedsettings.v1.update_autofeed_settings",
        "Turn autofeed product crawling off",
        update_autofeed_settings
    );
    sample!(
        registry,
        "accounts.automaticimprovements.v1.get_automatic_improvements",
        "Get the automatic improvements settings",
        get_automatic_improvements
    );
    sample!(
        registry,
        "accounts.automaticimprovements.v1.update_automatic_improvements",
        "Allow every automatic item, image and shipping improvement",
        update_automatic_improvements
    );
    sample!(
        registry,
        "accounts.checkoutsettings.v1.create_checkout_settings",
        "Create checkout settings for Shopping ads",
        create_checkout_settings
    );
    sample!(
        registry,
        "accounts.checkoutsettings.v1.get_checkout_settings",
        "Get the checkout settings",
        get_checkout_settings
    );
    sample!(
        registry,
        "accounts.checkoutsettings.v1.update_checkout_settings",
        "Set the checkout URI template (-p checkout_uri)",
        update_checkout_settings
    );
    sample!(
        registry,
        "accounts.checkoutsettings.v1.delete_checkout_settings",
        "Delete the checkout settings",
        delete_checkout_settings
    );
    sample!(
        registry,
        "accounts.gbpaccounts.v1.list_gbp_accounts",
        "List the Google Business Profile accounts available for linking",
        list_gbp_accounts
    );
    sample!(
        registry,
        "accounts.gbpaccounts.v1.link_gbp_account",
        "Link a Google Business Profile account (-p gbp_email or gmbEmail)",
        link_gbp_account
    );
    sample!(
        registry,
        "accounts.lfpproviders.v1.find_lfp_providers",
        "Find local feed partnership providers (-p region_code)",
        find_lfp_providers
    );
    sample!(
        registry,
        "accounts.lfpproviders.v1.link_lfp_provider",
        "Link a local feed partnership provider (-p region_code, -p lfp_provider_id)",
        link_lfp_provider
    );
    sample!(
        registry,
        "accounts.omnichannelsettings.v1.list_omnichannel_settings",
        "List the omnichannel settings",
        list_omnichannel_settings
    );
    sample!(
        registry,
        "accounts.omnichannelsettings.v1.get_omnichannel_setting",
        "Get the omnichannel setting of a region (-p region_code)",
        get_omnichannel_setting
    );
    sample!(
        registry,
        "accounts.omnichannelsettings.v1.create_omnichannel_setting",
        "Create a GHLSF omnichannel setting (-p region_code)",
        create_omnichannel_setting
    );
    sample!(
        registry,
        "accounts.omnichannelsettings.v1.update_omnichannel_setting",
        "Set the inventory verification contact (-p region_code, -p contact, -p email)",
        update_omnichannel_setting
    );
    sample!(
        registry,
        "accounts.omnichannelsettings.v1.request_inventory_verification",
        "Request inventory verification (-p region_code)",
        request_inventory_verification
    );
    sample!(
        registry,
        "accounts.developerregistration.v1.register_gcp",
        "Register the calling GCP project (-p developer_email)",
        register_gcp
    );
    Ok(())
}

async fn show_setting<T>(ctx: &SampleContext, setting: &str, heading: &str) -> Result<()>
where
    T: DeserializeOwned + Serialize,
{
    let name = setting_name(ctx.account_id(), setting);
    let resource: T = settings::get_setting(&ctx.client, &name).await?;
    print_json(heading, &resource)
}

async fn patch_setting<T>(
    ctx: &SampleContext,
    resource: T,
    mask: &[&str],
    heading: &str,
) -> Result<()>
where
    T: Named + Serialize + DeserializeOwned,
{
    let updated = settings::update_setting(&ctx.client, &resource, mask).await?;
    print_json(heading, &updated)
}

// Business info and identity

async fn get_business_info(ctx: &SampleContext) -> Result<()> {
    show_setting::<BusinessInfo>(ctx, "businessInfo", "Retrieved BusinessInfo below").await
}

async fn update_business_info(ctx: &SampleContext) -> Result<()> {
    let info = BusinessInfo {
        name: Some(setting_name(ctx.account_id(), "businessInfo")),
        address: Some(PostalAddress {
            language_code: Some("en".to_string()),
            postal_code: Some("C1107".to_string()),
            address_lines: vec![
                "Av. Alicia Moreau de Justo 350, Cdad. Autónoma de Buenos Aires, Argentina"
                    .to_string(),
            ],
            ..Default::default()
        }),
        ..Default::default()
    };
    patch_setting(ctx, info, &["address"], "Updated BusinessInfo below").await
}

async fn get_business_identity(ctx: &SampleContext) -> Result<()> {
    show_setting::<BusinessIdentity>(ctx, "businessIdentity", "Retrieved BusinessIdentity below")
        .await
}

async fn update_business_identity(ctx: &SampleContext) -> Result<()> {
    let identity = BusinessIdentity {
        name: Some(setting_name(ctx.account_id(), "businessIdentity")),
        small_business: Some(IdentityAttribute::declared()),
        ..Default::default()
    };
    patch_setting(ctx, identity, &["small_business"], "Updated BusinessIdentity below").await
}

// Homepage

async fn get_homepage(ctx: &SampleContext) -> Result<()> {
    show_setting::<Homepage>(ctx, "homepage", "Retrieved Homepage below").await
}

async fn update_homepage(ctx: &SampleContext) -> Result<()> {
    let homepage = Homepage {
        name: Some(setting_name(ctx.account_id(), "homepage")),
        uri: Some(ctx.param_or("uri", "https://example.com").to_string()),
        ..Default::default()
    };
    patch_setting(ctx, homepage, &["uri"], "Updated Homepage below").await
}

async fn claim_homepage(ctx: &SampleContext) -> Result<()> {
    let homepage = settings::claim_homepage(&ctx.client, ctx.account_id()).await?;
    print_json("Retrieved Homepage below", &homepage)
}

async fn unclaim_homepage(ctx: &SampleContext) -> Result<()> {
    let homepage = settings::unclaim_homepage(&ctx.client, ctx.account_id()).await?;
    print_json("Unclaimed Homepage below", &homepage)
}

// Programs

async fn list_programs(ctx: &SampleContext) -> Result<()> {
    let programs = settings::list_programs(&ctx.client, ctx.account_id()).await?;
    for program in &programs {
        println!(
            "{} [{}]",
            program.name.as_deref().unwrap_or("<unnamed>"),
            program.state.as_deref().unwrap_or("-")
        );
    }
    println!("The following count of programs were returned: {}", programs.len());
    Ok(())
}

async fn get_program(ctx: &SampleContext) -> Result<()> {
    let name = settings::program_name(ctx.account_id(), ctx.param_or("program", "free-listings"));
    let program: Program = settings::get_setting(&ctx.client, &name).await?;
    print_json("Retrieved Program below", &program)
}

async fn enable_program(ctx: &SampleContext) -> Result<()> {
    let program = settings::enable_program(
        &ctx.client,
        ctx.account_id(),
        ctx.param_or("program", "free-listings"),
    )
    .await?;
    print_json("Updated Program Participation below", &program)
}

async fn disable_program(ctx: &SampleContext) -> Result<()> {
    let program = settings::disable_program(
        &ctx.client,
        ctx.account_id(),
        ctx.param_or("program", "free-listings"),
    )
    .await?;
    print_json("Updated Program Participation below", &program)
}

// Shipping settings

async fn get_shipping_settings(ctx: &SampleContext) -> Result<()> {
    show_setting::<ShippingSettings>(ctx, "shippingSettings", "Retrieved ShippingSettings below")
        .await
}

/// One Canadian postal service charging 5.4% on oversized and perishable items.
fn canadian_postal_service() -> ShippingService {
    ShippingService {
        service_name: "Canadian Postal Service".to_string(),
        active: true,
        delivery_countries: vec!["CA".to_string()],
        currency_code: "CAD".to_string(),
        delivery_time: Some(DeliveryTime {
            min_transit_days: 0,
            max_transit_days: 3,
            min_handling_days: 0,
            max_handling_days: 3,
        }),
        rate_groups: vec![RateGroup {
            applicable_shipping_labels: vec!["Oversized".to_string(), "Perishable".to_string()],
            single_value: Some(ShippingValue {
                price_percentage: Some("5.4".to_string()),
                ..Default::default()
            }),
            name: Some("Oversized and Perishable items".to_string()),
        }],
        shipment_type: Some("DELIVERY".to_string()),
        minimum_order_value: Some(Price::micros(10_000_000, "CAD")),
        ..Default::default()
    }
}

/// The first insert only returns an etag; send it back (`-p etag=...`) to
/// store the settings.
async fn insert_shipping_settings(ctx: &SampleContext) -> Result<()> {
    let request = ShippingSettings {
        services: vec![canadian_postal_service()],
        etag: ctx.param_or("etag", "").to_string(),
        ..Default::default()
    };
    let inserted =
        settings::insert_shipping_settings(&ctx.client, ctx.account_id(), &request).await?;
    println!(
        "Inserted ShippingSettings name: {}",
        inserted.name.as_deref().unwrap_or("<unnamed>")
    );
    print_json("Inserted ShippingSettings below", &inserted)
}

// Terms of service

async fn retrieve_latest_terms_of_service(ctx: &SampleContext) -> Result<()> {
    let tos = settings::retrieve_latest_terms_of_service(
        &ctx.client,
        ctx.param_or("region_code", "US"),
        ctx.param_or("kind", "MERCHANT_CENTER"),
    )
    .await?;
    print_json("Retrieved latest TermsOfService below", &tos)
}

async fn get_terms_of_service(ctx: &SampleContext) -> Result<()> {
    let tos = settings::get_terms_of_service(&ctx.client, ctx.param("version")?).await?;
    print_json("Retrieved TermsOfService below", &tos)
}

async fn accept_terms_of_service(ctx: &SampleContext) -> Result<()> {
    let version = ctx.param("version")?;
    settings::accept_terms_of_service(
        &ctx.client,
        version,
        ctx.account_id(),
        ctx.param_or("region_code", "US"),
    )
    .await?;
    println!("Accepted terms of service version {}", version);
    Ok(())
}

fn print_agreement_state(state: &TermsOfServiceAgreementState) -> Result<()> {
    match (&state.accepted, &state.required) {
        (Some(accepted), _) => println!(
            "Accepted {} by {}",
            accepted.terms_of_service.as_deref().unwrap_or("-"),
            accepted.accepted_by.as_deref().unwrap_or("-")
        ),
        (None, Some(required)) => println!(
            "Acceptance required: {}",
            required.terms_of_service.as_deref().unwrap_or("-")
        ),
        (None, None) => {}
    }
    print_json("Retrieved TermsOfServiceAgreementState below", state)
}

async fn get_agreement_state(ctx: &SampleContext) -> Result<()> {
    let state = settings::get_agreement_state(
        &ctx.client,
        ctx.account_id(),
        ctx.param_or("identifier", "MERCHANT_CENTER-US"),
    )
    .await?;
    print_agreement_state(&state)
}

async fn retrieve_agreement_state_for_application(ctx: &SampleContext) -> Result<()> {
    let state =
        settings::retrieve_agreement_state_for_application(&ctx.client, ctx.account_id()).await?;
    print_agreement_state(&state)
}

// Online return policies

fn return_policy(process_refund_days: u32) -> OnlineReturnPolicy {
    OnlineReturnPolicy {
        label: "US Return Policy".to_string(),
        return_policy_uri: Some("https://www.google.com/returnpolicy-sample".to_string()),
        countries: vec!["US".to_string()],
        policy: Some(ReturnPolicyKind {
            kind: "LIFETIME_RETURNS".to_string(),
            days: None,
        }),
        item_conditions: vec!["NEW".to_string()],
        return_methods: vec!["IN_STORE".to_string()],
        process_refund_days: Some(process_refund_days),
        ..Default::default()
    }
}

async fn list_return_policies(ctx: &SampleContext) -> Result<()> {
    let policies = settings::list_return_policies(&ctx.client, ctx.account_id()).await?;
    for policy in &policies {
        println!(
            "{} ({})",
            policy.name.as_deref().unwrap_or("<unnamed>"),
            policy.label
        );
    }
    println!("The following count of return policies were returned: {}", policies.len());
    Ok(())
}

async fn get_return_policy(ctx: &SampleContext) -> Result<()> {
    let policy_id = ctx.param("return_policy_id")?;
    let policy = settings::get_return_policy(&ctx.client, ctx.account_id(), policy_id).await?;
    print_json("Retrieved OnlineReturnPolicy below", &policy)
}

async fn create_return_policy(ctx: &SampleContext) -> Result<()> {
    let policy =
        settings::create_return_policy(&ctx.client, ctx.account_id(), &return_policy(10)).await?;
    print_json("Created OnlineReturnPolicy below", &policy)
}

async fn update_return_policy(ctx: &SampleContext) -> Result<()> {
    let name = settings::return_policy_name(ctx.account_id(), ctx.param("return_policy_id")?);
    let policy = OnlineReturnPolicy {
        name: Some(name),
        ..return_policy(15)
    };
    patch_setting(ctx, policy, &["*"], "Updated OnlineReturnPolicy below").await
}

async fn delete_return_policy(ctx: &SampleContext) -> Result<()> {
    let policy_id = ctx.param("return_policy_id")?;
    settings::delete_return_policy(&ctx.client, ctx.account_id(), policy_id).await?;
    println!("Delete successful.");
    Ok(())
}

// Email preferences

fn email_preferences_name(ctx: &SampleContext) -> String {
    format!(
        "{}/emailPreferences",
        names::user(ctx.account_id(), ctx.param_or("email", "me"))
    )
}

async fn get_email_preferences(ctx: &SampleContext) -> Result<()> {
    let preferences: EmailPreferences =
        settings::get_setting(&ctx.client, &email_preferences_name(ctx)).await?;
    print_json("Retrieved EmailPreferences below", &preferences)
}

async fn update_email_preferences(ctx: &SampleContext) -> Result<()> {
    let preferences = EmailPreferences {
        name: Some(email_preferences_name(ctx)),
        news_and_tips: Some("OPTED_IN".to_string()),
    };
    patch_setting(ctx, preferences, &["news_and_tips"], "Updated EmailPreferences below").await
}

// Autofeed and automatic improvements

async fn get_autofeed_settings(ctx: &SampleContext) -> Result<()> {
    show_setting::<AutofeedSettings>(ctx, "autofeedSettings", "Retrieved AutofeedSettings below")
        .await
}

async fn update_autofeed_settings(ctx: &SampleContext) -> Result<()> {
    let autofeed = AutofeedSettings {
        name: Some(setting_name(ctx.account_id(), "autofeedSettings")),
        enable_products: false,
        ..Default::default()
    };
    patch_setting(ctx, autofeed, &["*"], "Updated AutofeedSettings below").await
}

async fn get_automatic_improvements(ctx: &SampleContext) -> Result<()> {
    show_setting::<AutomaticImprovements>(
        ctx,
        "automaticImprovements",
        "Retrieved AutomaticImprovements below",
    )
    .await
}

async fn update_automatic_improvements(ctx: &SampleContext) -> Result<()> {
    let improvements = AutomaticImprovements {
        name: Some(setting_name(ctx.account_id(), "automaticImprovements")),
        item_updates: Some(ItemUpdates {
            account_item_updates_settings: Some(ItemUpdatesSettings {
                allow_price_updates: true,
                allow_availability_updates: true,
                allow_strict_availability_updates: true,
                allow_condition_updates: true,
            }),
        }),
        image_improvements: Some(ImageImprovements {
            account_image_improvements_settings: Some(ImageImprovementsSettings {
                allow_automatic_image_improvements: true,
            }),
        }),
        shipping_improvements: Some(ShippingImprovements {
            allow_shipping_improvements: true,
        }),
        ..Default::default()
    };
    patch_setting(ctx, improvements, &["*"], "Updated AutomaticImprovements below").await
}

// Checkout settings

async fn create_checkout_settings(ctx: &SampleContext) -> Result<()> {
    let checkout = CheckoutSettings {
        name: Some(settings::checkout_settings_name(ctx.account_id())),
        eligible_destinations: vec!["SHOPPING_ADS".to_string()],
        ..Default::default()
    };
    let created =
        settings::create_checkout_settings(&ctx.client, ctx.account_id(), &checkout).await?;
    print_json("Created Checkout Settings below", &created)
}

async fn get_checkout_settings(ctx: &SampleContext) -> Result<()> {
    let name = settings::checkout_settings_name(ctx.account_id());
    let checkout: CheckoutSettings = settings::get_setting(&ctx.client, &name).await?;
    print_json("Retrieved Checkout Settings below", &checkout)
}

async fn update_checkout_settings(ctx: &SampleContext) -> Result<()> {
    let uri = ctx.param_or("checkout_uri", "https://myshopify.com/cart/1234:1");
    let checkout = CheckoutSettings {
        name: Some(settings::checkout_settings_name(ctx.account_id())),
        uri_settings: Some(UriSettings {
            checkout_uri_template: Some(uri.to_string()),
            ..Default::default()
        }),
        eligible_destinations: vec!["SHOPPING_ADS".to_string()],
        ..Default::default()
    };
    patch_setting(
        ctx,
        checkout,
        &["uri_settings", "eligible_destinations"],
        "Updated Checkout Settings below",
    )
    .await
}

async fn delete_checkout_settings(ctx: &SampleContext) -> Result<()> {
    settings::delete_checkout_settings(&ctx.client, ctx.account_id()).await?;
    println!("Delete successful.");
    Ok(())
}

// Google Business Profile and local feed partnership

async fn list_gbp_accounts(ctx: &SampleContext) -> Result<()> {
    let accounts = settings::list_gbp_accounts(&ctx.client, ctx.account_id()).await?;
    for account in &accounts {
        println!(
            "{} ({}, {} listing(s))",
            account.gbp_account_name.as_deref().unwrap_or("-"),
            account.name.as_deref().unwrap_or("<unnamed>"),
            account.listing_count.unwrap_or(0)
        );
    }
    println!("The following count of GBP accounts were returned: {}", accounts.len());
    Ok(())
}

async fn link_gbp_account(ctx: &SampleContext) -> Result<()> {
    let email = match ctx.merchant.gmb_email.as_deref() {
        Some(email) if !ctx.has_param("gbp_email") => email,
        _ => ctx.param("gbp_email")?,
    };
    let response = settings::link_gbp_account(&ctx.client, ctx.account_id(), email).await?;
    print_json("Linked GBP account below", &response)
}

async fn find_lfp_providers(ctx: &SampleContext) -> Result<()> {
    let region_code = ctx.param("region_code")?;
    let providers =
        settings::find_lfp_providers(&ctx.client, ctx.account_id(), region_code).await?;
    for provider in &providers {
        println!(
            "{} ({})",
            provider.display_name.as_deref().unwrap_or("-"),
            provider.name.as_deref().unwrap_or("<unnamed>")
        );
    }
    println!("The following count of LFP providers were returned: {}", providers.len());
    Ok(())
}

async fn link_lfp_provider(ctx: &SampleContext) -> Result<()> {
    let provider_name = format!(
        "{}/lfpProviders/{}",
        settings::omnichannel_setting_name(ctx.account_id(), ctx.param("region_code")?),
        ctx.param("lfp_provider_id")?
    );
    let external_account_id = ctx.param_or("external_account_id", ctx.account_id());
    settings::link_lfp_provider(&ctx.client, &provider_name, external_account_id).await?;
    println!("Linked {}", provider_name);
    Ok(())
}

// Omnichannel settings

async fn list_omnichannel_settings(ctx: &SampleContext) -> Result<()> {
    let all = settings::list_omnichannel_settings(&ctx.client, ctx.account_id()).await?;
    for setting in &all {
        println!(
            "{} [{}]",
            setting.region_code,
            setting.lsf_type.as_deref().unwrap_or("-")
        );
    }
    println!("The following count of omnichannel settings were returned: {}", all.len());
    Ok(())
}

async fn get_omnichannel_setting(ctx: &SampleContext) -> Result<()> {
    let name = settings::omnichannel_setting_name(ctx.account_id(), ctx.param("region_code")?);
    let setting: OmnichannelSetting = settings::get_setting(&ctx.client, &name).await?;
    print_json("Retrieved Omnichannel Setting below", &setting)
}

async fn create_omnichannel_setting(ctx: &SampleContext) -> Result<()> {
    let setting = OmnichannelSetting {
        region_code: ctx.param("region_code")?.to_string(),
        lsf_type: Some("GHLSF".to_string()),
        in_stock: Some(ReviewedUri::default()),
        ..Default::default()
    };
    let created =
        settings::create_omnichannel_setting(&ctx.client, ctx.account_id(), &setting).await?;
    print_json("Created Omnichannel Setting below", &created)
}

async fn update_omnichannel_setting(ctx: &SampleContext) -> Result<()> {
    let region_code = ctx.param("region_code")?;
    let setting = OmnichannelSetting {
        name: Some(settings::omnichannel_setting_name(ctx.account_id(), region_code)),
        region_code: region_code.to_string(),
        inventory_verification: Some(InventoryVerification {
            contact: Some(ctx.param("contact")?.to_string()),
            contact_email: Some(ctx.param("email")?.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    patch_setting(
        ctx,
        setting,
        &["inventory_verification"],
        "Updated Omnichannel Setting below",
    )
    .await
}

async fn request_inventory_verification(ctx: &SampleContext) -> Result<()> {
    let response = settings::request_inventory_verification(
        &ctx.client,
        ctx.account_id(),
        ctx.param("region_code")?,
    )
    .await?;
    print_json("Requested inventory verification below", &response)
}

// Developer registration

async fn register_gcp(ctx: &SampleContext) -> Result<()> {
    let registration =
        settings::register_gcp(&ctx.client, ctx.account_id(), ctx.param("developer_email")?)
            .await?;
    print_json("Registered GCP project below", &registration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipping_service_carries_typed_rates() {
        let json = serde_json::to_value(canadian_postal_service()).unwrap();
        assert_eq!(json["rateGroups"][0]["singleValue"]["pricePercentage"], "5.4");
        assert_eq!(json["minimumOrderValue"]["amountMicros"], "10000000");
        assert_eq!(json["deliveryTime"]["maxHandlingDays"], 3);
    }

    #[test]
    fn lifetime_return_policy_has_no_days() {
        let json = serde_json::to_value(return_policy(10)).unwrap();
        assert_eq!(json["policy"], serde_json::json!({ "type": "LIFETIME_RETURNS" }));
        assert_eq!(json["processRefundDays"], 10);
    }
}
