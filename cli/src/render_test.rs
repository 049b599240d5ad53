use super::*;
use descriptor::{Role, transform};
use serde_json::json;

fn viewer_products() -> UiResponse {
    let raw = json!({
        "products": [{"id": "p1", "name": "Widget", "category": "Electronics", "price": 9.99, "stock": 5}],
        "permissions": ["view"],
        "ui_elements": ["table"],
        "timestamp": "2024-01-01T00:00:00Z",
    });
    transform(&raw, Role::Viewer, "/api/products")
}

#[test]
fn viewer_plan_lists_only_the_table() {
    let text = render_plan(&viewer_products(), false);
    assert!(text.starts_with("layout: minimal-layout  theme: blue/minimal  role: viewer\n"));
    assert!(text.contains("nav: 📦 Products -> /api/products *"));
    assert!(!text.contains("Categories"));
    assert!(text.contains("[main]\n   1 products-table ProductTable (1 rows; columns: name, category, price, stock; actions: view)"));
    assert!(!text.contains("add-product-form"));
}

#[test]
fn embedded_plan_omits_navigation() {
    let text = render_plan(&viewer_products(), true);
    assert!(!text.contains("nav:"));
    assert!(text.contains("[main]"));
}

#[test]
fn admin_plan_puts_dashboard_first() {
    let raw = json!({
        "products": [],
        "admin_insights": {"total_products": 0, "system_health": "good"},
        "permissions": ["view", "add", "delete", "admin"],
    });
    let text = render_plan(&transform(&raw, Role::Admin, "/api/products"), true);
    let dashboard = text.find("admin-dashboard").expect("dashboard listed");
    let table = text.find("products-table").expect("table listed");
    assert!(dashboard < table);
    assert!(text.contains("health: good"));
    assert!(text.contains("add-product-form ProductForm (4 fields; submit POST /api/products)"));
}

#[test]
fn empty_main_reports_generated_count() {
    let text = render_plan(&transform(&json!(null), Role::Viewer, "/unknown"), false);
    assert!(text.contains("(no main components; 0 generated for viewer)"));
}
