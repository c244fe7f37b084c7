use launchpad_core::{Database, DeploymentPageProcessor, ProcessorBuilder};
use tempfile::TempDir;

/// Helper function to create a processor backed by a fresh database
pub fn create_test_processor() -> (TempDir, DeploymentPageProcessor<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let processor = ProcessorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create processor");
    (temp_dir, processor)
}

/// Serialized standard checklist with the given statuses in catalog order
pub fn checklist(statuses: [&str; 4]) -> String {
    let catalog = launchpad_core::StepCatalog::standard();
    let steps: Vec<serde_json::Value> = catalog
        .steps()
        .iter()
        .zip(statuses)
        .map(|(step, status)| {
            serde_json::json!({
                "id": step.id,
                "name": step.name,
                "status": status,
                "estimatedHours": step.estimated_hours,
                "deliveryReceipt": "DR-0001",
            })
        })
        .collect();
    serde_json::Value::Array(steps).to_string()
}
