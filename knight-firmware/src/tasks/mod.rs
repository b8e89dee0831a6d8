// Task-Modul: Enthält alle Embassy Tasks
//
// Aktuell nur der Pattern-Task, der die LED-Bank animiert.
// Die Schleife selbst liegt in knight-core (Feature `embassy`).

pub mod pattern;

// Re-export Tasks für einfachen Import
pub use pattern::{PATTERN_STOP, pattern_task};
