//! Sweep-Zustand und Frame-Berechnung ("Knight Rider")
//!
//! Der Kopf läuft zwischen dem ersten und letzten Ausgang hin und her,
//! die Nachbarn leuchten mit abfallender Helligkeit nach.

use crate::envelope::scale_duty;
use crate::types::DecayProfile;

/// Laufrichtung des Sweep-Kopfes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
}

/// Position und Richtung des Sweep-Kopfes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepState {
    index: usize,
    direction: Direction,
}

impl SweepState {
    /// Startzustand: Index 0, Richtung vorwärts
    pub const fn new() -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Einen Schritt weiter über `len` Ausgänge (Ping-Pong)
    ///
    /// Bei `len <= 1` bleibt der Index immer 0.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use knight_core::SweepState;
    /// let mut sweep = SweepState::new();
    /// let mut seen = [0; 6];
    /// for slot in seen.iter_mut() {
    ///     *slot = sweep.index();
    ///     sweep.advance(3);
    /// }
    /// assert_eq!(seen, [0, 1, 2, 1, 0, 1]);
    /// ```
    pub fn advance(&mut self, len: usize) {
        if len <= 1 {
            self.index = 0;
            return;
        }

        self.index = match self.direction {
            Direction::Forward => self.index + 1,
            Direction::Backward => self.index.saturating_sub(1),
        };

        if self.index >= len - 1 {
            self.index = len - 1;
            self.direction = Direction::Backward;
        } else if self.index == 0 {
            self.direction = Direction::Forward;
        }
    }
}

impl Default for SweepState {
    fn default() -> Self {
        Self::new()
    }
}

/// Berechnet die Duty-Werte aller `N` Ausgänge für einen Kopf bei `head`
///
/// Der Kopf bekommt `base`, die Nachbarn im Abstand `s` bekommen
/// `base * tail_decay^s` (gerundet). Nachbarn außerhalb von `0..N`
/// werden übersprungen, alle anderen Ausgänge sind 0.
///
/// # Beispiele
///
/// ```
/// # use knight_core::{DecayProfile, sweep_frame};
/// let decay = DecayProfile { tail_decay: 0.45, segments: 2 };
/// assert_eq!(sweep_frame::<3>(4000, 0, &decay), [4000, 1800, 810]);
/// ```
pub fn sweep_frame<const N: usize>(base: u32, head: usize, decay: &DecayProfile) -> [u32; N] {
    let mut frame = [0u32; N];
    if head >= N {
        return frame;
    }

    frame[head] = base;
    for s in 1..=decay.segments.min(N) {
        let factor = libm::powf(decay.tail_decay, s as f32);
        let duty = scale_duty(base, factor);

        if let Some(left) = head.checked_sub(s) {
            frame[left] = duty;
        }
        if let Some(right) = frame.get_mut(head + s) {
            *right = duty;
        }
    }
    frame
}
