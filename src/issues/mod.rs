//! Rendering and interactive resolution of Merchant Center issues.

pub mod prompt;
pub mod render;
pub mod trigger;

pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use render::{print_issue, render_issue};
pub use trigger::{TriggerOutcome, trigger_action_for_account_issue};
