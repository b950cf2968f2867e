use chrono::NaiveDate;
use clap::Args;
use std::sync::Arc;

use crate::infra::{demo_actor, demo_workspace, seed_workspace};
use echo_crm::error::AppError;
use echo_crm::listings::agreements::{
    AgreementInput, AgreementService, AgreementStatus, AgreementTerms, AgreementType,
};
use echo_crm::listings::copy::{CopyRequest, CopyService, ListingCopyData};
use echo_crm::listings::domain::{
    ContactId, ListingClassification, ListingGrade, ListingId, ListingType, PropertyType, UserId,
};
use echo_crm::listings::memory::{MemoryActivityLog, MemoryCrmStore, StaticActorProvider};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the agreement lifecycle portion of the demo.
    #[arg(long)]
    pub(crate) copy_only: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(MemoryCrmStore::new());
    seed_workspace(&store);

    let workspace = demo_workspace();
    let listing = ListingId("lst-demo-001".to_string());

    println!("=== ECHO CRM demo ===");
    println!();

    let copy_service = CopyService::new(store.clone());
    let request = CopyRequest {
        classification: ListingClassification {
            listing_type: ListingType::Sell,
            listing_grade: Some(ListingGrade::A),
            property_type: Some(PropertyType::Condo),
        },
        data: demo_listing_data(),
    };
    let rendered = copy_service.resolve_and_render(&workspace, &request)?;

    println!("-- Marketing copy via template '{}' --", rendered.template_name);
    println!("{}", rendered.content);
    println!();

    if args.copy_only {
        return Ok(());
    }

    let activity = Arc::new(MemoryActivityLog::default());
    let agreements = AgreementService::new(
        store.clone(),
        Arc::new(StaticActorProvider::authenticated(demo_actor())),
        store.clone(),
        activity.clone(),
    );

    println!("-- Agreement lifecycle on {} --", listing.0);
    let exclusive = agreements.create(AgreementInput {
        workspace_id: workspace.clone(),
        listing_id: listing.clone(),
        agreement_type: AgreementType::ExclusiveAgent,
        terms: AgreementTerms {
            seller_contact_id: Some(ContactId("ct-owner".to_string())),
            assigned_agent_id: Some(UserId("usr-demo-agent".to_string())),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            end_date: NaiveDate::from_ymd_opt(2027, 2, 28),
            commission_rate: Some(3.0),
            ..AgreementTerms::default()
        },
    })?;
    println!(
        "created {} ({}) -> exclusive flag: {}",
        exclusive.id.0,
        exclusive.agreement_type.label(),
        store.exclusive_flag(&listing)
    );

    let renewed = agreements.renew(&exclusive.id, &listing, AgreementTerms::default())?;
    println!(
        "renewed into {} (renewal #{}) -> exclusive flag: {}",
        renewed.id.0,
        renewed.renewal_count,
        store.exclusive_flag(&listing)
    );

    agreements.transition(&renewed.id, AgreementStatus::Cancelled)?;
    println!(
        "cancelled {} -> exclusive flag: {}",
        renewed.id.0,
        store.exclusive_flag(&listing)
    );
    println!();

    println!("-- Current agreements --");
    for view in agreements.list(&listing)? {
        println!(
            "{} {} {} (by {})",
            view.agreement.id.0,
            view.agreement.agreement_type.label(),
            view.agreement.status.label(),
            view.created_by_name.unwrap_or_else(|| "unknown".to_string()),
        );
    }
    println!();

    println!("-- Activity timeline --");
    for entry in activity.entries() {
        println!("[{}] {}", entry.action_type, entry.description);
    }

    Ok(())
}

fn demo_listing_data() -> ListingCopyData {
    ListingCopyData {
        listing_type: ListingType::Sell,
        project_name_en: Some("The Line Asoke".to_string()),
        listing_name: Some("LN-1204".to_string()),
        zone: Some("Asoke".to_string()),
        bts_station: Some("Asok".to_string()),
        mrt_station: Some("Sukhumvit".to_string()),
        property_type: Some(PropertyType::Condo),
        bedrooms: Some(2),
        bathrooms: Some(2),
        size_sqm: Some(68.5),
        parking_slots: Some(1),
        asking_price: Some(12_500_000),
        price_remark: Some("(negotiable)".to_string()),
        agent_first_name: Some("Demo".to_string()),
        agent_last_name: Some("Agent".to_string()),
        agent_phone: Some("081-234-5678".to_string()),
        ..ListingCopyData::default()
    }
}
