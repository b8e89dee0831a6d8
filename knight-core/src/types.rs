//! Core Types für die Pattern-Steuerung
//!
//! Konfiguration und Fehler-Typen ohne Hardware-Dependencies

/// Höchste unterstützte Duty-Auflösung in Bits
pub const MAX_DUTY_BITS: u8 = 20;

/// Auswahl des Lauflicht-Musters
///
/// Nur `KnightRider` ist ausimplementiert. `BinaryCounter` und
/// `RandomBlink` schalten alle Ausgänge aus und beenden den Task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternKind {
    KnightRider,
    BinaryCounter,
    RandomBlink,
}

impl PatternKind {
    /// Anzeigename für Logs
    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::KnightRider => "Knight Rider",
            PatternKind::BinaryCounter => "Binary Counter",
            PatternKind::RandomBlink => "Random Blink",
        }
    }
}

impl core::convert::TryFrom<&str> for PatternKind {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "knight" => Ok(Self::KnightRider),
            "binary" => Ok(Self::BinaryCounter),
            "random" => Ok(Self::RandomBlink),
            _ => Err(()),
        }
    }
}

/// Polarität der LED-Ausgänge
///
/// Bei `ActiveLow` leuchtet die LED wenn der Pin LOW ist, der Duty-Wert
/// wird deshalb vor dem Schreiben invertiert (`MAX_DUTY - duty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl core::convert::TryFrom<&str> for Polarity {
    type Error = ();

    /// Wert von LED_ACTIVE_LOW: "1"/"true" → active-low, "0"/"false" → active-high
    fn try_from(flag: &str) -> Result<Self, Self::Error> {
        match flag {
            "1" | "true" => Ok(Self::ActiveLow),
            "0" | "false" => Ok(Self::ActiveHigh),
            _ => Err(()),
        }
    }
}

/// Parameter der Atem-Hüllkurve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvelopeConfig {
    /// Dauer eines kompletten Atemzugs (0 → 1 → 0) in Millisekunden
    pub period_ms: u32,
    /// Nomineller Tick in Millisekunden (nur informativ)
    pub tick_ms: u32,
}

/// Abfall der Helligkeit hinter dem Sweep-Kopf
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecayProfile {
    /// Multiplikator pro Schritt Abstand vom Kopf (0.0..=1.0)
    pub tail_decay: f32,
    /// Anzahl nachleuchtender Segmente pro Seite
    pub segments: usize,
}

/// Komplette Pattern-Konfiguration
///
/// Wird beim Start einmal erstellt und an den Pattern-Task übergeben.
/// Die Anzahl der Ausgänge ist kein Feld, sondern der Const-Parameter
/// `N` von [`crate::KnightRider`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternConfig {
    pub kind: PatternKind,
    pub envelope: EnvelopeConfig,
    /// Wartezeit zwischen zwei Sweep-Schritten in Millisekunden
    pub step_delay_ms: u32,
    pub decay: DecayProfile,
    /// PWM-Auflösung in Bits (13 → MAX_DUTY = 8191)
    pub duty_bits: u8,
    pub polarity: Polarity,
}

impl PatternConfig {
    /// Referenz-Konfiguration: 1.6 s Atemzug, 150 ms pro Schritt,
    /// 2 Segmente mit Faktor 0.45, 13 Bit, active-high
    pub const DEFAULT: Self = Self {
        kind: PatternKind::KnightRider,
        envelope: EnvelopeConfig {
            period_ms: 1600,
            tick_ms: 16,
        },
        step_delay_ms: 150,
        decay: DecayProfile {
            tail_decay: 0.45,
            segments: 2,
        },
        duty_bits: 13,
        polarity: Polarity::ActiveHigh,
    };

    /// Größter Duty-Wert für die konfigurierte Auflösung
    ///
    /// Liefert 0 für eine ungültige Auflösung.
    pub const fn max_duty(&self) -> u32 {
        if self.duty_bits == 0 || self.duty_bits > MAX_DUTY_BITS {
            0
        } else {
            (1u32 << self.duty_bits) - 1
        }
    }

    /// Prüft die Konfiguration für `outputs` Ausgänge
    ///
    /// Muss vor dem Start der Schleife aufgerufen werden,
    /// [`crate::KnightRider::new`] macht das automatisch.
    pub fn validate(&self, outputs: usize) -> Result<(), ConfigError> {
        if outputs == 0 {
            return Err(ConfigError::NoOutputs);
        }
        if self.envelope.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.max_duty() == 0 {
            return Err(ConfigError::InvalidResolution);
        }
        // NaN fällt hier ebenfalls raus
        if !(0.0..=1.0).contains(&self.decay.tail_decay) {
            return Err(ConfigError::InvalidDecay);
        }
        Ok(())
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Fehler-Typen
// ============================================================================

/// Fehler-Typ für ungültige Konfiguration
///
/// Wird vor dem Start der Pattern-Schleife erkannt und ist fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Keine Ausgänge (N = 0)
    NoOutputs,
    /// Periode der Hüllkurve ist 0 ms
    ZeroPeriod,
    /// Auflösung ergibt MAX_DUTY = 0 oder ist größer als [`MAX_DUTY_BITS`]
    InvalidResolution,
    /// `tail_decay` liegt nicht in 0.0..=1.0
    InvalidDecay,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PatternConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PatternConfig {{ kind: {}, period: {}ms, step: {}ms, decay: {}x{}, bits: {}, polarity: {} }}",
            self.kind.name(),
            self.envelope.period_ms,
            self.step_delay_ms,
            self.decay.tail_decay,
            self.decay.segments,
            self.duty_bits,
            self.polarity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_duty_is_13_bit() {
        assert_eq!(PatternConfig::DEFAULT.max_duty(), 8191);
    }

    #[test]
    fn test_max_duty_invalid_bits() {
        let mut config = PatternConfig::DEFAULT;
        config.duty_bits = 0;
        assert_eq!(config.max_duty(), 0);
        config.duty_bits = MAX_DUTY_BITS + 1;
        assert_eq!(config.max_duty(), 0);
    }

    #[test]
    fn test_validate_default() {
        assert_eq!(PatternConfig::DEFAULT.validate(3), Ok(()));
        assert_eq!(PatternConfig::DEFAULT.validate(1), Ok(()));
    }

    #[test]
    fn test_validate_rejects_no_outputs() {
        assert_eq!(
            PatternConfig::DEFAULT.validate(0),
            Err(ConfigError::NoOutputs)
        );
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let mut config = PatternConfig::DEFAULT;
        config.envelope.period_ms = 0;
        assert_eq!(config.validate(3), Err(ConfigError::ZeroPeriod));
    }

    #[test]
    fn test_validate_rejects_bad_decay() {
        let mut config = PatternConfig::DEFAULT;
        config.decay.tail_decay = 1.5;
        assert_eq!(config.validate(3), Err(ConfigError::InvalidDecay));
        config.decay.tail_decay = f32::NAN;
        assert_eq!(config.validate(3), Err(ConfigError::InvalidDecay));
    }

    #[test]
    fn test_pattern_kind_try_from() {
        assert_eq!(PatternKind::try_from("knight"), Ok(PatternKind::KnightRider));
        assert_eq!(PatternKind::try_from("binary"), Ok(PatternKind::BinaryCounter));
        assert_eq!(PatternKind::try_from("random"), Ok(PatternKind::RandomBlink));
        assert_eq!(PatternKind::try_from("disco"), Err(()));
    }

    #[test]
    fn test_polarity_try_from() {
        assert_eq!(Polarity::try_from("1"), Ok(Polarity::ActiveLow));
        assert_eq!(Polarity::try_from("true"), Ok(Polarity::ActiveLow));
        assert_eq!(Polarity::try_from("0"), Ok(Polarity::ActiveHigh));
        assert_eq!(Polarity::try_from("false"), Ok(Polarity::ActiveHigh));
        // Tippfehler werden nicht stillschweigend als active-high gelesen
        assert_eq!(Polarity::try_from("yes"), Err(()));
        assert_eq!(Polarity::try_from("TRUE"), Err(()));
    }
}
