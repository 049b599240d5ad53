//! Plain-text rendering of a transformed descriptor.
//!
//! Prints the same plan the browser draws: sections in order, each component
//! with its resolved view and a one-line summary of its props.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use descriptor::resolve::generic_title;
use descriptor::{LayoutPlan, PlacedComponent, ResolvedComponent, Section, UiResponse};

/// Text plan of `response`; `embedded` limits output to the `main` section.
pub fn render_plan(response: &UiResponse, embedded: bool) -> String {
    let ui = &response.ui_config;
    let plan = LayoutPlan::build(ui);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "layout: {}  theme: {}/{}  role: {}",
        ui.layout, ui.theme.color, ui.theme.style, ui.user_role
    );
    if !ui.permissions.is_empty() {
        let _ = writeln!(out, "permissions: {}", ui.permissions.join(", "));
    }
    if !embedded {
        for item in &ui.navigation {
            let marker = if item.active { " *" } else { "" };
            let _ = writeln!(out, "nav: {} -> {}{marker}", item.label, item.endpoint);
        }
    }

    let sections: &[Section] = if embedded { &[Section::Main] } else { &Section::ALL };
    for section in sections {
        let placed = plan.section(*section);
        if placed.is_empty() {
            continue;
        }
        let _ = writeln!(out, "[{}]", section.as_str());
        for component in placed {
            let _ = writeln!(out, "  {}", component_line(component));
        }
    }
    if plan.main.is_empty() {
        let _ = writeln!(
            out,
            "(no main components; {} generated for {})",
            plan.total(),
            ui.user_role
        );
    }
    if let Some(reasoning) = &response.metadata.ai_reasoning {
        let _ = writeln!(out, "reasoning: {reasoning}");
    }
    out
}

/// `order id View (summary)` for one placed component.
pub fn component_line(placed: &PlacedComponent) -> String {
    let summary = summarize(&placed.view);
    let base = format!("{:>2} {} {}", placed.order, placed.id, placed.view.name());
    if summary.is_empty() {
        base
    } else {
        format!("{base} ({summary})")
    }
}

fn summarize(view: &ResolvedComponent) -> String {
    match view {
        ResolvedComponent::ProductTable(table) => format!(
            "{} rows; columns: {}; actions: {}",
            table.data.len(),
            table.columns.join(", "),
            if table.actions.is_empty() { "none".to_owned() } else { table.actions.join(", ") }
        ),
        ResolvedComponent::ProductForm(form) => format!(
            "{} fields; submit {} {}",
            form.fields.len(),
            form.submit_method,
            form.submit_endpoint
        ),
        ResolvedComponent::CategoryAnalytics(analytics) => format!(
            "{} categories; metrics: {}",
            analytics.data.len(),
            analytics.metrics.join(", ")
        ),
        ResolvedComponent::AdminDashboard(dashboard) => format!(
            "widgets: {}; health: {}",
            dashboard.widgets.join(", "),
            dashboard.insights.system_health.as_deref().unwrap_or("unknown")
        ),
        ResolvedComponent::Navigation => String::new(),
        ResolvedComponent::Generic { kind, .. } => generic_title(kind),
        ResolvedComponent::Unknown(raw) => format!(
            "unknown type `{}`",
            raw.get("type").and_then(serde_json::Value::as_str).unwrap_or("?")
        ),
    }
}
