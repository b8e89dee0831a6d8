//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{ConfigError, Polarity};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Peripheral hat den Duty-Wert abgelehnt
    WriteFailed,
    /// Kanal-Index existiert nicht
    ChannelOutOfRange,
}

/// Fehler-Typ für die Pattern-Schleife
///
/// Beide Varianten sind fatal: der Pattern-Task endet, es gibt kein Retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    Config(ConfigError),
    Led(LedError),
}

impl From<ConfigError> for PatternError {
    fn from(e: ConfigError) -> Self {
        PatternError::Config(e)
    }
}

impl From<LedError> for PatternError {
    fn from(e: LedError) -> Self {
        PatternError::Led(e)
    }
}

/// Trait für PWM-Zugriff auf eine Bank von LEDs
///
/// # Implementierungen
/// - **Production:** LedcDutyWriter (ESP32 LEDC Peripheral)
/// - **Testing:** MockDutyWriter (in-memory Mock)
pub trait DutyWriter {
    /// Setzt den Duty-Wert (0..=MAX_DUTY) für einen Kanal
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_duty(&mut self, channel: usize, duty: u32) -> Result<(), LedError>;
}

impl<W: DutyWriter + ?Sized> DutyWriter for &mut W {
    fn set_duty(&mut self, channel: usize, duty: u32) -> Result<(), LedError> {
        (**self).set_duty(channel, duty)
    }
}

// ============================================================================
// Polaritäts-Wrapper
// ============================================================================

/// Wrapper der die Polarität vor dem eigentlichen Writer anwendet
///
/// Die Pattern-Logik rechnet immer active-high, bei `ActiveLow`
/// schreibt dieser Wrapper `max_duty - duty`.
pub struct PolarityWriter<W> {
    inner: W,
    polarity: Polarity,
    max_duty: u32,
}

impl<W: DutyWriter> PolarityWriter<W> {
    pub fn new(inner: W, polarity: Polarity, max_duty: u32) -> Self {
        Self {
            inner,
            polarity,
            max_duty,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: DutyWriter> DutyWriter for PolarityWriter<W> {
    fn set_duty(&mut self, channel: usize, duty: u32) -> Result<(), LedError> {
        let duty = duty.min(self.max_duty);
        let duty = match self.polarity {
            Polarity::ActiveHigh => duty,
            Polarity::ActiveLow => self.max_duty - duty,
        };
        self.inner.set_duty(channel, duty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastWrite(Option<(usize, u32)>);

    impl DutyWriter for LastWrite {
        fn set_duty(&mut self, channel: usize, duty: u32) -> Result<(), LedError> {
            self.0 = Some((channel, duty));
            Ok(())
        }
    }

    #[test]
    fn test_active_high_passes_through() {
        let mut writer = PolarityWriter::new(LastWrite(None), Polarity::ActiveHigh, 8191);
        writer.set_duty(2, 1234).unwrap();
        assert_eq!(writer.into_inner().0, Some((2, 1234)));
    }

    #[test]
    fn test_active_low_inverts() {
        let mut writer = PolarityWriter::new(LastWrite(None), Polarity::ActiveLow, 8191);
        writer.set_duty(0, 0).unwrap();
        assert_eq!(writer.inner.0, Some((0, 8191)));
        writer.set_duty(1, 8191).unwrap();
        assert_eq!(writer.inner.0, Some((1, 0)));
        writer.set_duty(1, 191).unwrap();
        assert_eq!(writer.inner.0, Some((1, 8000)));
    }

    #[test]
    fn test_duty_clamped_to_max() {
        let mut writer = PolarityWriter::new(LastWrite(None), Polarity::ActiveLow, 255);
        writer.set_duty(0, 1000).unwrap();
        assert_eq!(writer.into_inner().0, Some((0, 0)));
    }

    #[test]
    fn test_config_error_converts() {
        let e: PatternError = ConfigError::ZeroPeriod.into();
        assert_eq!(e, PatternError::Config(ConfigError::ZeroPeriod));
        let e: PatternError = LedError::WriteFailed.into();
        assert_eq!(e, PatternError::Led(LedError::WriteFailed));
    }
}
