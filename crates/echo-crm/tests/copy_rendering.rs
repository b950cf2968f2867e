//! Integration tests for marketing-copy resolution and rendering.
//!
//! Scenarios exercise the public resolver facade end to end: cascade
//! precedence, default fallback, tag substitution, and signature handling.

use std::sync::Arc;

use echo_crm::listings::copy::{
    CopyError, CopyRequest, CopyService, CopyTemplate, ListingCopyData,
};
use echo_crm::listings::domain::{
    ListingClassification, ListingGrade, ListingType, PropertyType, TemplateId, WorkspaceId,
};
use echo_crm::listings::memory::MemoryCrmStore;

fn workspace() -> WorkspaceId {
    WorkspaceId("ws-echo".to_string())
}

fn template(
    name: &str,
    listing_type: Option<ListingType>,
    grade: Option<ListingGrade>,
    property: Option<PropertyType>,
    content: &str,
    is_default: bool,
) -> CopyTemplate {
    CopyTemplate {
        id: TemplateId(format!("tpl-{name}")),
        workspace_id: workspace(),
        name: name.to_string(),
        listing_type,
        listing_grade: grade,
        property_type: property,
        content: content.to_string(),
        is_default,
    }
}

fn classification(
    listing_type: ListingType,
    grade: Option<ListingGrade>,
    property: Option<PropertyType>,
) -> ListingClassification {
    ListingClassification {
        listing_type,
        listing_grade: grade,
        property_type: property,
    }
}

fn condo_data() -> ListingCopyData {
    ListingCopyData {
        listing_type: ListingType::Sell,
        project_name_en: Some("Rhythm Rangnam".to_string()),
        listing_name: Some("RR-0815".to_string()),
        zone: Some("Victory Monument".to_string()),
        bts_station: Some("Victory Monument".to_string()),
        property_type: Some(PropertyType::Condo),
        bedrooms: Some(1),
        bathrooms: Some(1),
        size_sqm: Some(35.0),
        asking_price: Some(6_900_000),
        agent_first_name: Some("Ploy".to_string()),
        agent_phone: Some("089-555-1234".to_string()),
        ..ListingCopyData::default()
    }
}

fn build_service(templates: Vec<CopyTemplate>) -> (CopyService<MemoryCrmStore>, Arc<MemoryCrmStore>) {
    let store = Arc::new(MemoryCrmStore::new());
    for template in templates {
        store.put_template(template);
    }
    (CopyService::new(store.clone()), store)
}

#[test]
fn exact_match_template_wins_over_workspace_default() {
    let (service, _) = build_service(vec![
        template("default", None, None, None, "default copy", true),
        template(
            "sell-a-condo",
            Some(ListingType::Sell),
            Some(ListingGrade::A),
            Some(PropertyType::Condo),
            "Premium {{Listing Name}} at {{Project Name (Eng)}}",
            false,
        ),
    ]);

    let rendered = service
        .resolve_and_render(
            &workspace(),
            &CopyRequest {
                classification: classification(
                    ListingType::Sell,
                    Some(ListingGrade::A),
                    Some(PropertyType::Condo),
                ),
                data: condo_data(),
            },
        )
        .expect("renders");

    assert_eq!(rendered.template_name, "sell-a-condo");
    assert_eq!(rendered.content, "Premium RR-0815 at Rhythm Rangnam");
}

#[test]
fn unmatched_listing_falls_back_to_default_template() {
    let (service, _) = build_service(vec![
        template("default", None, None, None, "Contact us about {{Listing Name}}", true),
        template(
            "sell-a-condo",
            Some(ListingType::Sell),
            Some(ListingGrade::A),
            Some(PropertyType::Condo),
            "never used",
            false,
        ),
    ]);

    let rendered = service
        .resolve_and_render(
            &workspace(),
            &CopyRequest {
                classification: classification(
                    ListingType::Rent,
                    Some(ListingGrade::B),
                    Some(PropertyType::Land),
                ),
                data: condo_data(),
            },
        )
        .expect("default renders");

    assert_eq!(rendered.template_name, "default");
    assert_eq!(rendered.content, "Contact us about RR-0815");
}

#[test]
fn empty_workspace_reports_no_matching_template() {
    let (service, _) = build_service(Vec::new());

    let err = service
        .resolve_and_render(
            &workspace(),
            &CopyRequest {
                classification: classification(ListingType::Sell, None, None),
                data: condo_data(),
            },
        )
        .expect_err("nothing configured");

    assert!(matches!(err, CopyError::NoMatchingTemplate));
}

#[test]
fn rendered_output_contains_no_residual_tags() {
    let content = "{{Listing Type}}: {{Listing Name}} | {{Bed}} bed {{Bath}} bath | \
                   {{Sqm.}} sqm | {{Asking Price}} THB | {{BTS/MRT}} | {{Agent Name}} \
                   {{Agent Phone}} | floor {{Floor}} parking {{Parking}}{{Price Remark}}";
    let (service, _) = build_service(vec![template(
        "full",
        Some(ListingType::Sell),
        None,
        None,
        content,
        false,
    )]);

    let rendered = service
        .resolve_and_render(
            &workspace(),
            &CopyRequest {
                classification: classification(ListingType::Sell, None, None),
                data: condo_data(),
            },
        )
        .expect("renders");

    assert!(!rendered.content.contains("{{"));
    assert!(rendered.content.contains("Sale: RR-0815"));
    assert!(rendered.content.contains("6,900,000 THB"));
    assert!(rendered.content.contains("Victory Monument |"));
    assert!(rendered.content.contains("Ploy 089-555-1234"));
    assert!(rendered.content.contains("floor - parking 0"));
}

#[test]
fn brand_signature_is_separated_by_blank_line() {
    let (service, store) = build_service(vec![template(
        "plain",
        Some(ListingType::Sell),
        None,
        None,
        "{{Listing Name}}",
        false,
    )]);
    store.set_signature(workspace(), "ECHO Estates\nLine: @echoestates".to_string());

    let rendered = service
        .resolve_and_render(
            &workspace(),
            &CopyRequest {
                classification: classification(ListingType::Sell, None, None),
                data: condo_data(),
            },
        )
        .expect("renders");

    assert_eq!(
        rendered.content,
        "RR-0815\n\nECHO Estates\nLine: @echoestates"
    );
}

#[test]
fn grade_only_template_is_reachable_without_property_type() {
    let (service, _) = build_service(vec![template(
        "grade-b",
        None,
        Some(ListingGrade::B),
        None,
        "Grade B stock",
        false,
    )]);

    let rendered = service
        .resolve_and_render(
            &workspace(),
            &CopyRequest {
                classification: classification(ListingType::Rent, Some(ListingGrade::B), None),
                data: condo_data(),
            },
        )
        .expect("grade-only match");

    assert_eq!(rendered.template_name, "grade-b");
}

#[test]
fn templates_from_other_workspaces_never_match() {
    let store = Arc::new(MemoryCrmStore::new());
    store.put_template(CopyTemplate {
        id: TemplateId("tpl-foreign".to_string()),
        workspace_id: WorkspaceId("ws-other".to_string()),
        name: "foreign".to_string(),
        listing_type: Some(ListingType::Sell),
        listing_grade: None,
        property_type: None,
        content: "foreign copy".to_string(),
        is_default: false,
    });
    let service = CopyService::new(store);

    let err = service
        .resolve(&workspace(), &classification(ListingType::Sell, None, None))
        .expect_err("foreign workspace is invisible");
    assert!(matches!(err, CopyError::NoMatchingTemplate));
}
