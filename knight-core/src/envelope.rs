//! Atem-Hüllkurve
//!
//! Reine Funktion der Zeit: 0 → 1 → 0 einmal pro Periode.

use core::f32::consts::PI;

use crate::types::EnvelopeConfig;

/// Sinus-Easing über eine Periode (raised cosine)
///
/// `t01` ist die Phase in 0.0..1.0. Bei 0.0 ist der Wert 0, bei 0.5 ist er 1.
#[inline]
pub fn ease_sine(t01: f32) -> f32 {
    0.5 * (1.0 - libm::cosf(2.0 * PI * t01))
}

/// Helligkeits-Hüllkurve mit fester Periode
///
/// # Beispiele
///
/// ```
/// # use knight_core::Envelope;
/// let envelope = Envelope::new(1600).unwrap();
/// assert_eq!(envelope.brightness(0), 0.0);
/// assert_eq!(envelope.duty(800, 8191), 8191);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    period_ms: u32,
}

impl Envelope {
    /// Liefert `None` für eine Periode von 0 ms
    pub const fn new(period_ms: u32) -> Option<Self> {
        if period_ms == 0 {
            None
        } else {
            Some(Self { period_ms })
        }
    }

    /// Für eine Konfiguration, die `PatternConfig::validate` schon bestanden hat
    ///
    /// `validate` lehnt `period_ms == 0` ab, eine zweite Prüfung ist hier unnötig.
    pub(crate) const fn from_validated(config: &EnvelopeConfig) -> Self {
        Self {
            period_ms: config.period_ms,
        }
    }

    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Phase in 0.0..1.0 zum Zeitpunkt `t_ms`
    pub fn phase(&self, t_ms: u64) -> f32 {
        let period = u64::from(self.period_ms);
        (t_ms % period) as f32 / period as f32
    }

    /// Normierte Helligkeit in 0.0..=1.0
    pub fn brightness(&self, t_ms: u64) -> f32 {
        ease_sine(self.phase(t_ms)).clamp(0.0, 1.0)
    }

    /// Helligkeit skaliert auf 0..=max_duty, auf ganze Zahlen gerundet
    pub fn duty(&self, t_ms: u64, max_duty: u32) -> u32 {
        scale_duty(max_duty, self.brightness(t_ms))
    }
}

/// Skaliert einen Duty-Wert mit `factor` und rundet auf die nächste ganze Zahl
///
/// Das Ergebnis ist nie größer als `duty`, solange `factor <= 1.0`.
#[inline]
pub fn scale_duty(duty: u32, factor: f32) -> u32 {
    let scaled = libm::roundf(duty as f32 * factor) as u32;
    scaled.min(duty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: u32 = 1600;

    fn envelope() -> Envelope {
        Envelope::new(PERIOD).unwrap()
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(Envelope::new(0).is_none());
    }

    #[test]
    fn test_period_from_config() {
        let config = EnvelopeConfig {
            period_ms: PERIOD,
            tick_ms: 16,
        };
        assert_eq!(Envelope::from_validated(&config).period_ms(), PERIOD);
        assert_eq!(envelope().period_ms(), PERIOD);
    }

    #[test]
    fn test_starts_dark() {
        assert_eq!(envelope().brightness(0), 0.0);
        assert_eq!(envelope().duty(0, 8191), 0);
    }

    #[test]
    fn test_peak_at_half_period() {
        let b = envelope().brightness(u64::from(PERIOD / 2));
        assert!((b - 1.0).abs() < 1e-6);
        assert_eq!(envelope().duty(u64::from(PERIOD / 2), 8191), 8191);
    }

    #[test]
    fn test_quarter_period_is_half_bright() {
        let b = envelope().brightness(u64::from(PERIOD / 4));
        assert!((b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bounded() {
        let e = envelope();
        for t in 0..(2 * u64::from(PERIOD)) {
            let b = e.brightness(t);
            assert!((0.0..=1.0).contains(&b), "t={} b={}", t, b);
        }
    }

    #[test]
    fn test_periodic() {
        let e = envelope();
        for t in (0..u64::from(PERIOD)).step_by(7) {
            assert_eq!(e.brightness(t), e.brightness(t + u64::from(PERIOD)));
            assert_eq!(e.brightness(t), e.brightness(t + 1000 * u64::from(PERIOD)));
        }
    }

    #[test]
    fn test_idempotent() {
        let e = envelope();
        assert_eq!(e.brightness(1234), e.brightness(1234));
    }

    #[test]
    fn test_rises_then_falls() {
        let e = envelope();
        assert!(e.brightness(200) < e.brightness(400));
        assert!(e.brightness(400) < e.brightness(800));
        assert!(e.brightness(1200) < e.brightness(800));
    }

    #[test]
    fn test_scale_duty_rounds_to_nearest() {
        assert_eq!(scale_duty(8191, 0.45), 3686);
        assert_eq!(scale_duty(4000, 0.45), 1800);
        assert_eq!(scale_duty(4000, 0.45 * 0.45), 810);
        assert_eq!(scale_duty(0, 0.45), 0);
    }
}
