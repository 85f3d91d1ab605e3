//! Scanning group lifecycle against the real API
//!
//! **IMPORTANT**: these tests create and delete groups in the organization
//! the keys belong to.

use super::{AcceptanceContext, test_resource_name};

#[test]
#[cfg_attr(not(feature = "acceptance-tests"), ignore)]
fn test_group_basic_lifecycle() {
    let ctx = AcceptanceContext::new();
    let name = test_resource_name();

    let file = ctx.write_group_file(&format!(
        "name: {name}\ndescription: acceptance test group\nis_enabled: true\n\
         filter:\n  query: \"service:{name}\"\nproduct_list: [logs, DD_EVENTS]\n"
    ));
    ctx.run_success(&["create", "-f", file.to_str().unwrap()]);
    let id = ctx.managed_id().expect("create should record the group id");

    let out = ctx.run_success(&["--format", "json", "read"]);
    let read: serde_json::Value = serde_json::from_str(&out).unwrap();
    let attributes = &read["data"]["attributes"];
    assert_eq!(read["data"]["id"], id.as_str());
    assert_eq!(attributes["name"], name.as_str());
    assert_eq!(attributes["is_enabled"], true);
    assert_eq!(attributes["filter"][0]["query"], format!("service:{}", name));
    assert_eq!(attributes["product_list"], serde_json::json!(["logs", "events"]));

    // Update sends the complete attribute set
    let file = ctx.write_group_file(&format!(
        "name: {name}-updated\nis_enabled: false\nfilter:\n  query: \"service:{name}\"\n"
    ));
    ctx.run_success(&["update", "-f", file.to_str().unwrap()]);

    let out = ctx.run_success(&["--format", "json", "read"]);
    let read: serde_json::Value = serde_json::from_str(&out).unwrap();
    let attributes = &read["data"]["attributes"];
    assert_eq!(attributes["name"], format!("{}-updated", name));
    assert!(attributes.get("product_list").is_none());

    ctx.run_success(&["delete", "--yes"]);
    assert!(ctx.managed_id().is_none());
    ctx.assert_destroyed(&id);
}

#[test]
#[cfg_attr(not(feature = "acceptance-tests"), ignore)]
fn test_group_import() {
    let owner = AcceptanceContext::new();
    let name = test_resource_name();

    let file = owner.write_group_file(&format!(
        "name: {name}\nfilter:\n  query: \"service:{name}\"\nproduct_list: [apm]\n"
    ));
    owner.run_success(&["create", "-f", file.to_str().unwrap()]);
    let id = owner.managed_id().expect("create should record the group id");

    let importer = AcceptanceContext::new();
    importer.run_success(&["import", &id]);
    assert_eq!(importer.managed_id().as_deref(), Some(id.as_str()));

    // Only one context may delete; the other would find the group gone
    std::fs::remove_file(importer.state_path()).unwrap();

    owner.run_success(&["delete", "--yes"]);
    owner.assert_destroyed(&id);
}

#[test]
#[cfg_attr(not(feature = "acceptance-tests"), ignore)]
fn test_import_unknown_group_fails() {
    let ctx = AcceptanceContext::new();
    let stderr = ctx.run_failure(&["import", "00000000-0000-0000-0000-000000000000"]);
    assert!(stderr.contains("Cannot import non-existent remote object"));
}
