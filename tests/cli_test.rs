//! Command-line behavior that needs no live server.

mod common;

use common::GavelTest;
use serde_json::Value;

/// Nothing listens on port 1, so requests fail fast with a refused connection.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn seller(gavel: &GavelTest, email: Option<&str>) {
    let mut yaml = format!("api:\n  base_url: {UNREACHABLE}\nsession:\n  role: seller\n");
    if let Some(email) = email {
        yaml.push_str(&format!("  email: {email}\n"));
    }
    gavel.write_config(&yaml);
}

#[test]
fn test_resources_json_lists_catalogue() {
    let gavel = GavelTest::new();
    let output: Value =
        serde_json::from_str(&gavel.run_success(&["resources", "--json"])).unwrap();
    let resources = output.as_array().unwrap();
    assert_eq!(resources.len(), 15);

    let withdrawals = resources
        .iter()
        .find(|r| r["name"] == "withdrawals")
        .unwrap();
    assert_eq!(withdrawals["paging"], "client");
    assert_eq!(
        withdrawals["statuses"],
        serde_json::json!(["pending", "processing", "completed", "rejected"])
    );

    let orders = resources.iter().find(|r| r["name"] == "orders").unwrap();
    assert_eq!(orders["paging"], "server");
    assert_eq!(orders["statuses"], serde_json::json!([]));

    let sellers = resources.iter().find(|r| r["name"] == "sellers").unwrap();
    assert_eq!(sellers["paging"], "server");
    assert_eq!(
        sellers["statuses"],
        serde_json::json!(["active", "pending_approval", "suspended"])
    );
    for name in ["deposits", "inventory"] {
        assert!(resources.iter().any(|r| r["name"] == name), "{name}");
    }
}

#[test]
fn test_resources_table() {
    let gavel = GavelTest::new();
    let stdout = gavel.run_success(&["resources"]);
    assert!(stdout.contains("seller-history"));
    assert!(stdout.contains("/api/product-feedback/seller/{email}"));
    assert!(stdout.contains("15 resource(s)"));
}

#[test]
fn test_unknown_resource_is_rejected() {
    let gavel = GavelTest::new();
    let stderr = gavel.run_failure(&["ls", "bids"]);
    assert!(stderr.contains("Invalid resource"), "{stderr}");
    assert!(stderr.contains("withdrawals"), "{stderr}");
}

#[test]
fn test_set_status_validates_before_any_request() {
    let gavel = GavelTest::new();
    gavel.write_config(&format!("api:\n  base_url: {UNREACHABLE}\n"));

    let stderr = gavel.run_failure(&["set-status", "withdrawals", "w1", "refunded"]);
    assert!(
        stderr.contains("invalid status 'refunded' for withdrawals"),
        "{stderr}"
    );
    assert!(
        stderr.contains("pending, processing, completed, rejected"),
        "{stderr}"
    );

    let stderr = gavel.run_failure(&["set-status", "contacts", "c1", "pending"]);
    assert!(
        stderr.contains("contacts does not support status updates"),
        "{stderr}"
    );
}

#[test]
fn test_ls_reports_unreachable_server() {
    let gavel = GavelTest::new();
    let stderr = gavel.run_failure(&[
        "ls",
        "withdrawals",
        "--api-url",
        UNREACHABLE,
        "--timeout",
        "2",
    ]);
    assert!(stderr.contains("Failed to fetch withdrawals"), "{stderr}");
}

#[test]
fn test_seller_cannot_list_admin_resources() {
    let gavel = GavelTest::new();
    seller(&gavel, Some("seller@example.com"));

    let stderr = gavel.run_failure(&["ls", "customers"]);
    assert!(
        stderr.contains("customers is not available to the seller role"),
        "{stderr}"
    );

    let stderr = gavel.run_failure(&["dashboard", "--resource", "reports"]);
    assert!(
        stderr.contains("reports is not available to the seller role"),
        "{stderr}"
    );
}

#[test]
fn test_product_feedback_needs_email() {
    let gavel = GavelTest::new();
    seller(&gavel, None);

    let stderr = gavel.run_failure(&["ls", "product-feedback"]);
    assert!(stderr.contains("session has no email"), "{stderr}");
}

#[test]
fn test_profile_update_needs_email() {
    let gavel = GavelTest::new();
    gavel.write_config(&format!("api:\n  base_url: {UNREACHABLE}\n"));

    let stderr = gavel.run_failure(&["profile", "update", "--city", "Lagos"]);
    assert!(stderr.contains("session has no email"), "{stderr}");
}

#[test]
fn test_invalid_page_is_rejected_by_parser() {
    let gavel = GavelTest::new();
    let stderr = gavel.run_failure(&["ls", "orders", "--page", "0"]);
    assert!(stderr.contains("--page"), "{stderr}");
}
