// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von knight-core (inkl. async Pattern-Schleife)
pub use knight_core::{
    DutyWriter, LedError, PatternConfig, PatternError, PatternKind, StopSignal, pattern_logic,
};
