//! Domain layer: core entities and the reply formatter.

pub mod compose_state;
pub mod content;
pub mod events;
pub mod formatter;
pub mod language;
pub mod message;
pub mod shell_state;
pub mod transcript;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
