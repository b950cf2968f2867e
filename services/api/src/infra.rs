use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use echo_crm::listings::copy::CopyTemplate;
use echo_crm::listings::domain::{
    Actor, ContactId, ListingGrade, ListingType, PropertyType, TemplateId, UserId, WorkspaceId,
};
use echo_crm::listings::memory::MemoryCrmStore;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn demo_workspace() -> WorkspaceId {
    WorkspaceId("ws-echo-demo".to_string())
}

pub(crate) fn demo_actor() -> Actor {
    Actor {
        user_id: UserId("usr-demo-agent".to_string()),
        display_name: "Demo Agent".to_string(),
    }
}

/// Seeds the store with a workable demo workspace: two copy templates, a
/// brand signature, and directory entries for the demo parties.
pub(crate) fn seed_workspace(store: &MemoryCrmStore) {
    let workspace = demo_workspace();

    store.put_template(CopyTemplate {
        id: TemplateId("tpl-sell-a-condo".to_string()),
        workspace_id: workspace.clone(),
        name: "Sell / Grade A / Condo".to_string(),
        listing_type: Some(ListingType::Sell),
        listing_grade: Some(ListingGrade::A),
        property_type: Some(PropertyType::Condo),
        content: "🔥 For {{Listing Type}}: {{Project Name (Eng)}} ({{Zone}})\n\
                  {{Bed}} bed / {{Bath}} bath, {{Sqm.}} sqm, near {{BTS/MRT}}\n\
                  Asking {{Asking Price}} THB {{Price Remark}}\n\
                  Contact {{Agent Name}} {{Agent Phone}}"
            .to_string(),
        is_default: false,
    });
    store.put_template(CopyTemplate {
        id: TemplateId("tpl-default".to_string()),
        workspace_id: workspace.clone(),
        name: "Workspace default".to_string(),
        listing_type: None,
        listing_grade: None,
        property_type: None,
        content: "{{Listing Name}} | {{Property Type}} in {{Zone}}, contact {{Agent Name}}"
            .to_string(),
        is_default: true,
    });
    store.set_signature(workspace, "ECHO Estates | Line @echoestates".to_string());

    store.put_user(demo_actor().user_id, demo_actor().display_name);
    store.put_contact(ContactId("ct-owner".to_string()), "Khun Anan".to_string());
    store.put_contact(ContactId("ct-buyer".to_string()), "Khun Malee".to_string());
}
