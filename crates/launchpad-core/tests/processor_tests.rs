mod common;

use common::{checklist, create_test_processor};
use launchpad_core::{
    mark_site_live, DeploymentError, PageDocument, Section, SiteStatus, StepCatalog,
};

fn deployment_page(steps: &str) -> PageDocument {
    PageDocument::new("deployment")
        .with_section(Section::new("deployment_checklist").with_field("steps", steps))
        .with_section(
            Section::new("installation")
                .with_field("deployment_engineer", "Alex Moreau")
                .with_field("start_date", "2024-05-01")
                .with_field("target_date", "2024-05-20"),
        )
        .with_section(Section::new("testing").with_field("notes", "[]"))
}

#[test]
fn test_full_deployment_flow() {
    let (_temp_dir, mut processor) = create_test_processor();
    let site = processor
        .registry_mut()
        .create_site("Riverside", SiteStatus::ProcurementDone)
        .expect("Failed to create site");

    // Page creation seeds the default checklist
    let page = processor.on_create(deployment_page(""));
    let seeded = page
        .field_value("deployment_checklist", "steps")
        .expect("steps should be seeded");
    assert_eq!(seeded, StepCatalog::standard().default_steps_json());

    // Going live is refused until every step is done
    let err = mark_site_live(processor.registry(), site.id).unwrap_err();
    assert!(matches!(err, DeploymentError::NotDeployed { .. }));

    let partial_page =
        deployment_page(&checklist(["completed", "in_progress", "pending", "pending"]));
    let partial = processor
        .on_update(partial_page, site.id)
        .expect("Partial update should pass");
    assert_eq!(partial.progress, Some(25));
    assert_eq!(
        processor.registry().get_site(site.id).unwrap().unwrap().status,
        SiteStatus::ProcurementDone
    );

    let done = processor
        .on_update(deployment_page(&checklist(["completed"; 4])), site.id)
        .expect("Final update should pass");
    assert!(done.site_deployed);
    assert_eq!(
        done.document.field_value("installation", "progress"),
        Some("100")
    );
    assert_eq!(
        processor.registry().get_site(site.id).unwrap().unwrap().status,
        SiteStatus::Deployed
    );

    let before = mark_site_live(processor.registry(), site.id).expect("Site should go live");
    assert_eq!(before.status, SiteStatus::Deployed);
    assert_eq!(
        processor.registry().get_site(site.id).unwrap().unwrap().status,
        SiteStatus::Live
    );
}

#[test]
fn test_completed_checklist_for_unknown_site_warns() {
    let (_temp_dir, processor) = create_test_processor();

    let outcome = processor
        .on_update(deployment_page(&checklist(["completed"; 4])), 404)
        .expect("Update should still pass");
    assert!(!outcome.site_deployed);
    assert_eq!(
        outcome.warning.map(|w| w.to_string()),
        Some("Error updating status of site 404: Site with ID 404 not found".to_string())
    );
}

#[test]
fn test_rejected_update_leaves_site_untouched() {
    let (_temp_dir, mut processor) = create_test_processor();
    let site = processor
        .registry_mut()
        .create_site("Airport", SiteStatus::Approved)
        .unwrap();

    let mut page = deployment_page(&checklist(["completed"; 4]));
    page.section_mut("installation")
        .unwrap()
        .upsert_field("progress", "140");

    let err = processor.on_update(page, site.id).unwrap_err();
    assert_eq!(err.to_string(), "progress must be between 0 and 100");
    assert_eq!(
        processor.registry().get_site(site.id).unwrap().unwrap().status,
        SiteStatus::Approved
    );
}

#[test]
fn test_page_json_round_trip_keeps_unknown_attributes() {
    let (_temp_dir, processor) = create_test_processor();
    let raw = serde_json::json!({
        "page_name": "deployment",
        "page_id": 31,
        "sections": [
            {
                "section_name": "deployment_checklist",
                "order": 1,
                "fields": [{ "field_name": "steps", "field_value": "", "field_type": "json" }]
            },
            {
                "section_name": "installation",
                "fields": [{ "field_name": "deployment_engineer", "field_value": "Kim" }]
            }
        ]
    });

    let page: PageDocument = serde_json::from_value(raw).unwrap();
    let page = processor.on_create(page);
    let outcome = processor.on_update(page, 1).unwrap();
    let out = serde_json::to_value(&outcome.document).unwrap();

    assert_eq!(out["page_id"], 31);
    assert_eq!(out["sections"][0]["order"], 1);
    assert_eq!(out["sections"][0]["fields"][0]["field_type"], "json");
    assert_eq!(out["sections"][1]["fields"][1]["field_name"], "progress");
    assert_eq!(out["sections"][1]["fields"][1]["field_value"], "0");
}
