use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Helper struct holding a temporary database for one test
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary directory"),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("cli_test.db")
    }

    /// Command with --no-color and the test database preset
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("launchpad").expect("Failed to find launchpad binary");
        cmd.arg("--no-color")
            .arg("--database-file")
            .arg(self.db_path());
        cmd
    }

    fn write_page(&self, name: &str, page: &Value) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, page.to_string()).expect("Failed to write page");
        path
    }
}

fn steps(statuses: [&str; 4]) -> String {
    let ids = [
        ("hardware_delivery", "Hardware Delivery", 4),
        ("software_installation", "Software Installation", 8),
        ("network_setup", "Network Setup", 6),
        ("system_testing", "System Testing", 4),
    ];
    let list: Vec<Value> = ids
        .iter()
        .zip(statuses)
        .map(|((id, name, hours), status)| {
            json!({
                "id": id,
                "name": name,
                "status": status,
                "estimatedHours": hours,
                "deliveryReceipt": "DR-88",
            })
        })
        .collect();
    Value::Array(list).to_string()
}

fn deployment_page(steps: &str) -> Value {
    json!({
        "page_name": "deployment",
        "sections": [
            {
                "section_name": "deployment_checklist",
                "fields": [{ "field_name": "steps", "field_value": steps }]
            },
            {
                "section_name": "installation",
                "fields": [
                    { "field_name": "deployment_engineer", "field_value": "Jo Lindqvist" },
                    { "field_name": "start_date", "field_value": "2024-04-01" },
                    { "field_name": "target_date", "field_value": "2024-04-10" }
                ]
            },
            {
                "section_name": "testing",
                "fields": [{
                    "field_name": "notes",
                    "field_value": "[{\"id\":\"n1\",\"author\":\"Jo\",\"content\":\"Scanners paired\",\"timestamp\":\"2024-04-03T14:00:00Z\"}]"
                }]
            }
        ]
    })
}

fn output_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be a JSON page")
}

fn progress_of(page: &Value) -> Option<&str> {
    page["sections"][1]["fields"]
        .as_array()?
        .iter()
        .find(|f| f["field_name"] == "progress")?
        .get("field_value")?
        .as_str()
}

fn add_site(env: &TestEnv, name: &str, status: &str) {
    env.cmd()
        .args(["site", "add", name, "--status", status])
        .assert()
        .success();
}

fn page_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_add_and_show_site() {
    let env = TestEnv::new();

    env.cmd()
        .args(["site", "add", "Harbor Mall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Harbor Mall"))
        .stdout(predicate::str::contains("- Status: Created"));

    env.cmd()
        .args(["site", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Harbor Mall"));
}

#[test]
fn test_cli_list_sites() {
    let env = TestEnv::new();

    env.cmd()
        .args(["site", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sites found."));

    add_site(&env, "North", "approved");
    add_site(&env, "South", "procurement_done");

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("- **North** (ID: 1): approved"))
        .stdout(predicate::str::contains("- **South** (ID: 2): procurement_done"));
}

#[test]
fn test_cli_add_site_rejects_unknown_status() {
    let env = TestEnv::new();

    env.cmd()
        .args(["site", "add", "North", "--status", "finished"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid site status: finished"));
}

#[test]
fn test_cli_show_missing_site() {
    let env = TestEnv::new();

    env.cmd()
        .args(["site", "show", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Site with ID 9 not found"));
}

#[test]
fn test_cli_page_create_seeds_checklist() {
    let env = TestEnv::new();
    let page = env.write_page("new.json", &deployment_page(""));

    let output = env
        .cmd()
        .args(["page", "create", page_arg(&page)])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc = output_json(&output);
    let seeded = doc["sections"][0]["fields"][0]["field_value"]
        .as_str()
        .unwrap();
    let seeded: Value = serde_json::from_str(seeded).unwrap();
    assert_eq!(seeded.as_array().unwrap().len(), 4);
    assert_eq!(seeded[0]["id"], "hardware_delivery");
    assert_eq!(seeded[0]["status"], "pending");
}

#[test]
fn test_cli_page_create_reads_stdin() {
    let env = TestEnv::new();

    env.cmd()
        .args(["page", "create", "-"])
        .write_stdin(deployment_page("[]").to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("software_installation"));
}

#[test]
fn test_cli_page_update_records_progress() {
    let env = TestEnv::new();
    add_site(&env, "Riverside", "procurement_done");
    let page = env.write_page(
        "half.json",
        &deployment_page(&steps(["completed", "completed", "in_progress", "pending"])),
    );

    let output = env
        .cmd()
        .args(["page", "update", page_arg(&page), "--site", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(progress_of(&output_json(&output)), Some("50"));

    env.cmd()
        .args(["site", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Status: procurement_done"));
}

#[test]
fn test_cli_completed_deployment_then_go_live() {
    let env = TestEnv::new();
    add_site(&env, "Riverside", "procurement_done");

    env.cmd()
        .args(["site", "go-live", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Current site status: procurement_done. Required status: deployed",
        ));

    let page = env.write_page("done.json", &deployment_page(&steps(["completed"; 4])));
    let output = env
        .cmd()
        .args(["page", "update", page_arg(&page), "--site", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(progress_of(&output_json(&output)), Some("100"));

    env.cmd()
        .args(["site", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Status: deployed"));

    env.cmd()
        .args(["site", "go-live", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Site 1 (Riverside) is now live"));
}

#[test]
fn test_cli_page_update_warns_for_unknown_site() {
    let env = TestEnv::new();
    let page = env.write_page("done.json", &deployment_page(&steps(["completed"; 4])));

    env.cmd()
        .args(["page", "update", page_arg(&page), "--site", "12"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error updating status of site 12: Site with ID 12 not found",
        ));
}

#[test]
fn test_cli_page_update_rejects_skipped_step() {
    let env = TestEnv::new();
    add_site(&env, "Riverside", "approved");
    let page = env.write_page(
        "skip.json",
        &deployment_page(&steps(["pending", "pending", "in_progress", "pending"])),
    );

    env.cmd()
        .args(["page", "update", page_arg(&page), "--site", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Cannot mark 'Network Setup' as in_progress before 'Hardware Delivery' is completed",
        ));
}

#[test]
fn test_cli_page_update_rejects_bad_engineer_name() {
    let env = TestEnv::new();
    let mut page = deployment_page(&steps(["pending"; 4]));
    page["sections"][1]["fields"][0]["field_value"] = json!("x".repeat(256));
    let page = env.write_page("long.json", &page);

    env.cmd()
        .args(["page", "update", page_arg(&page), "--site", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "deployment_engineer must be 255 characters or less",
        ));
}

#[test]
fn test_cli_page_report() {
    let env = TestEnv::new();
    let page = env.write_page(
        "report.json",
        &deployment_page(&steps(["completed", "completed", "completed", "in_progress"])),
    );

    env.cmd()
        .args(["page", "report", page_arg(&page)])
        .assert()
        .success()
        .stdout(predicate::str::contains("3/4 steps completed (75%)"))
        .stdout(predicate::str::contains("### System Testing (➤ In Progress)"))
        .stdout(predicate::str::contains("- **Jo** (2024-04-03T14:00:00Z): Scanners paired"));
}

#[test]
fn test_cli_steps_uses_custom_catalog() {
    let env = TestEnv::new();

    env.cmd()
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. `hardware_delivery` Hardware Delivery (4h), receipt required",
        ));

    let catalog = env.dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"[{"id":"survey","name":"Survey","estimatedHours":1},{"id":"install","name":"Install","estimatedHours":3}]"#,
    )
    .unwrap();

    env.cmd()
        .arg("--catalog")
        .arg(&catalog)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. `install` Install (3h)"))
        .stdout(predicate::str::contains("hardware_delivery").not());
}

#[test]
fn test_cli_non_deployment_page_passes_through() {
    let env = TestEnv::new();
    let page = env.write_page(
        "other.json",
        &json!({ "page_name": "site_study", "sections": [], "survey_id": 5 }),
    );

    let output = env
        .cmd()
        .args(["page", "update", page_arg(&page), "--site", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc = output_json(&output);
    assert_eq!(doc["page_name"], "site_study");
    assert_eq!(doc["survey_id"], 5);
}
