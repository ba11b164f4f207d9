//! Plain-text rendering of issues for a terminal.
//!
//! # Layout
//!
//! ```text
//! | <title, coloured by severity>
//! | <impact message>
//! | breakdown:
//! |     | Germany, Austria
//! |     | - Your products are not shown
//! |
//! | details(HTML):
//! | <prerendered content>
//! |
//! | available actions:
//! | Request review (complex action, ... flows: 'I fixed it', 'I disagree')
//! ```

use std::fmt::Write;

use console::style;

use crate::models::issue::{Action, RenderedIssue, Severity};

/// Render one issue. Colours are dropped when the output is not a terminal.
pub fn render_issue(issue: &RenderedIssue) -> String {
    let mut out = String::new();

    // Severity is shown by colour: error red, warning orange, info blue
    let title = match issue.impact.severity {
        Severity::Error => style(&issue.title).red().bold(),
        Severity::Warning => style(&issue.title).yellow().bold(),
        _ => style(&issue.title).blue().bold(),
    };
    let _ = writeln!(out, "| {}", title);

    if !issue.impact.message.is_empty() {
        let _ = writeln!(out, "| {}", issue.impact.message);
        if !issue.impact.breakdowns.is_empty() {
            let _ = writeln!(out, "| breakdown:");
            for breakdown in &issue.impact.breakdowns {
                let regions = breakdown
                    .regions
                    .iter()
                    .map(|r| r.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(out, "|     | {}", regions);
                for detail in &breakdown.details {
                    let _ = writeln!(out, "|     | - {}", detail);
                }
            }
        }
    }

    let _ = writeln!(out, "| ");
    let _ = writeln!(out, "| details(HTML): ");
    let _ = writeln!(out, "| {}", issue.prerendered_content.as_deref().unwrap_or(""));

    if let Some(settlement) = &issue.prerendered_out_of_court_dispute_settlement {
        let _ = writeln!(out, "| ");
        let _ = writeln!(out, "| out-of-court dispute settlement(HTML): ");
        let _ = writeln!(out, "| {}", settlement);
    }

    if issue.actions.iter().any(|a| a.is_available) {
        let _ = writeln!(out, "| ");
        let _ = writeln!(out, "| available actions: ");
        for action in &issue.actions {
            let _ = writeln!(out, "| {}{}", action.button_label, describe_action(action));
        }
    }

    out
}

/// Suffix naming what kind of action this is.
fn describe_action(action: &Action) -> String {
    if let Some(external) = action.external_action.as_ref().filter(|e| !e.uri.is_empty()) {
        format!(" (redirect: {})", external.uri)
    } else if action.builtin_simple_action.is_some() {
        " (simple Built-In functionality)".to_string()
    } else if let Some(input) = &action.builtin_user_input_action {
        let flows = input
            .flows
            .iter()
            .map(|f| format!("'{}'", f.label))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            " (complex action, requires a dialog with user input form, offers different flows: {})",
            flows
        )
    } else {
        String::new()
    }
}

pub fn print_issue(issue: &RenderedIssue) {
    print!("{}", render_issue(issue));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue() -> RenderedIssue {
        serde_json::from_value(json!({
            "title": "Misrepresentation of self or products",
            "impact": {
                "message": "Your products are not showing",
                "severity": "ERROR",
                "breakdowns": [{
                    "regions": [
                        {"code": "DE", "name": "Germany"},
                        {"code": "AT", "name": "Austria"}
                    ],
                    "details": ["Products are disapproved"]
                }]
            },
            "prerenderedContent": "<p>Fix it</p>",
            "actions": [
                {"buttonLabel": "Learn more", "isAvailable": true,
                 "externalAction": {"type": "EXTERNAL_LINK", "uri": "https://support.example"}},
                {"buttonLabel": "Request review", "isAvailable": true,
                 "builtinUserInputAction": {"actionContext": "ctx", "flows": [
                    {"id": "f1", "label": "I fixed it"}, {"id": "f2", "label": "I disagree"}]}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn renders_breakdown_and_actions() {
        console::set_colors_enabled(false);
        let text = render_issue(&issue());
        assert!(text.starts_with("| Misrepresentation of self or products\n"));
        assert!(text.contains("|     | Germany, Austria\n"));
        assert!(text.contains("|     | - Products are disapproved\n"));
        assert!(text.contains("| Learn more (redirect: https://support.example)"));
        assert!(text.contains("offers different flows: 'I fixed it', 'I disagree')"));
        assert!(!text.contains("out-of-court"));
    }

    #[test]
    fn no_actions_section_when_none_available() {
        console::set_colors_enabled(false);
        let mut issue = issue();
        for action in &mut issue.actions {
            action.is_available = false;
        }
        assert!(!render_issue(&issue).contains("available actions"));
    }
}
