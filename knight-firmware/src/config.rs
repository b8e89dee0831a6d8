// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use defmt::warn;
use knight_core::{DecayProfile, EnvelopeConfig, PatternConfig, PatternKind, Polarity};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pins der LEDs (in Sweep-Reihenfolge)
/// Zuordnung im Task: LED 0 → GPIO2, LED 1 → GPIO4, LED 2 → GPIO5
pub const LED_GPIO_PINS: [u8; LED_COUNT] = [2, 4, 5];

/// Anzahl der LEDs (= LEDC-Kanäle)
pub const LED_COUNT: usize = 3;

// ============================================================================
// LEDC (PWM) Konfiguration
// ============================================================================

/// PWM-Frequenz in Hz
/// 5 kHz ist flimmerfrei und erlaubt 13 Bit bei 80 MHz APB-Takt
pub const LEDC_FREQ_HZ: u32 = 5_000;

/// Duty-Auflösung in Bits (13 Bit → 0..=8191)
pub const LEDC_DUTY_BITS: u8 = 13;

// ============================================================================
// Pattern Konfiguration
// ============================================================================

/// Dauer eines Atemzugs in Millisekunden
pub const BREATH_PERIOD_MS: u32 = 1600;

/// Nomineller Animations-Tick in Millisekunden (nur informativ)
pub const TICK_MS: u32 = 16;

/// Wartezeit zwischen zwei Sweep-Schritten in Millisekunden
/// Langsam genug, damit man das Lauflicht wandern sieht
pub const STEP_DELAY_MS: u32 = 150;

/// Helligkeits-Faktor pro Segment Abstand vom Sweep-Kopf
pub const TAIL_DECAY: f32 = 0.45;

/// Nachleuchtende Segmente pro Seite
pub const TAIL_SEGMENTS: usize = 2;

/// Pattern-Auswahl ("knight", "binary", "random")
/// Wird zur Build-Zeit aus der Environment Variable LED_PATTERN geladen
/// Setze diese in .env file (siehe .env.example), Default: knight
pub const LED_PATTERN: Option<&str> = option_env!("LED_PATTERN");

/// Active-Low Verdrahtung ("1"/"true", "0"/"false")
/// Wird zur Build-Zeit aus der Environment Variable LED_ACTIVE_LOW geladen
/// Setze diese in .env file (siehe .env.example), Default: active-high
pub const LED_ACTIVE_LOW: Option<&str> = option_env!("LED_ACTIVE_LOW");

/// Baut die Pattern-Konfiguration aus den Konstanten oben
///
/// Unbekannte Werte fallen mit Warnung auf die Defaults zurück
/// (LED_PATTERN → Knight Rider, LED_ACTIVE_LOW → active-high).
pub fn pattern_config() -> PatternConfig {
    let kind = match LED_PATTERN {
        None => PatternKind::KnightRider,
        Some(name) => PatternKind::try_from(name).unwrap_or_else(|_| {
            warn!("Config: unknown LED_PATTERN '{}', using knight", name);
            PatternKind::KnightRider
        }),
    };

    let polarity = match LED_ACTIVE_LOW {
        None => Polarity::ActiveHigh,
        Some(flag) => Polarity::try_from(flag).unwrap_or_else(|_| {
            warn!("Config: unknown LED_ACTIVE_LOW '{}', using active-high", flag);
            Polarity::ActiveHigh
        }),
    };

    PatternConfig {
        kind,
        envelope: EnvelopeConfig {
            period_ms: BREATH_PERIOD_MS,
            tick_ms: TICK_MS,
        },
        step_delay_ms: STEP_DELAY_MS,
        decay: DecayProfile {
            tail_decay: TAIL_DECAY,
            segments: TAIL_SEGMENTS,
        },
        duty_bits: LEDC_DUTY_BITS,
        polarity,
    }
}
