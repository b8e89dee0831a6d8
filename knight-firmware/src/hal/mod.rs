// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter dem DutyWriter-Trait
// aus knight-core, um die Pattern-Logik testbar zu halten.

pub mod duty_writer;

pub use duty_writer::{LedcDutyWriter, SetupError, configure_timer};
