//! Knight Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Konfiguration und Pure Functions
//! für das Knight-Rider Lauflicht mit Atem-Effekt.

#![no_std]

pub mod envelope;
pub mod logic;
#[cfg(feature = "embassy")]
pub mod runner;
pub mod sweep;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use envelope::{Envelope, ease_sine, scale_duty};
pub use logic::{KnightRider, clear_all, write_frame};
#[cfg(feature = "embassy")]
pub use runner::{StopSignal, pattern_logic};
pub use sweep::{Direction, SweepState, sweep_frame};
pub use traits::{DutyWriter, LedError, PatternError, PolarityWriter};
pub use types::{
    ConfigError, DecayProfile, EnvelopeConfig, MAX_DUTY_BITS, PatternConfig, PatternKind,
    Polarity,
};
