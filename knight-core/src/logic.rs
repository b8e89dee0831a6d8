//! Pure Business Logic Functions
//!
//! Pattern-Logik ohne Hardware-Dependencies (testbar!)

use crate::envelope::Envelope;
use crate::sweep::{SweepState, sweep_frame};
use crate::traits::{DutyWriter, LedError};
use crate::types::{ConfigError, DecayProfile, PatternConfig};

/// Knight-Rider Lauflicht mit Atem-Hüllkurve über `N` Ausgänge
///
/// Ein Aufruf von [`KnightRider::step`] entspricht einem Tick der
/// Pattern-Schleife: Frame berechnen, alle Ausgänge schreiben, dann
/// den Sweep-Kopf weiterbewegen.
///
/// # Beispiele
///
/// ```
/// # use knight_core::{KnightRider, PatternConfig};
/// let pattern = KnightRider::<3>::new(&PatternConfig::DEFAULT).unwrap();
/// // Halbe Periode: volle Helligkeit, Kopf bei 0
/// assert_eq!(pattern.frame(800), [8191, 3686, 1659]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KnightRider<const N: usize> {
    envelope: Envelope,
    decay: DecayProfile,
    max_duty: u32,
    sweep: SweepState,
}

impl<const N: usize> KnightRider<N> {
    /// Erstellt das Pattern nach Prüfung der Konfiguration
    pub fn new(config: &PatternConfig) -> Result<Self, ConfigError> {
        // Einzige Prüfung: validate() lehnt auch period_ms == 0 ab
        config.validate(N)?;

        Ok(Self {
            envelope: Envelope::from_validated(&config.envelope),
            decay: config.decay,
            max_duty: config.max_duty(),
            sweep: SweepState::new(),
        })
    }

    pub const fn sweep(&self) -> SweepState {
        self.sweep
    }

    pub const fn max_duty(&self) -> u32 {
        self.max_duty
    }

    /// Duty-Werte aller Ausgänge für `elapsed_ms` seit Pattern-Start
    ///
    /// Verändert keinen Zustand.
    pub fn frame(&self, elapsed_ms: u64) -> [u32; N] {
        let base = self.envelope.duty(elapsed_ms, self.max_duty);
        sweep_frame::<N>(base, self.sweep.index(), &self.decay)
    }

    /// Ein Tick: Frame schreiben, danach Sweep weiterbewegen
    ///
    /// # Fehlerbehandlung
    /// Bei einem Schreibfehler wird abgebrochen und der Sweep bleibt stehen.
    /// Bereits geschriebene Ausgänge werden nicht zurückgesetzt.
    pub fn step<W: DutyWriter>(
        &mut self,
        elapsed_ms: u64,
        writer: &mut W,
    ) -> Result<[u32; N], LedError> {
        let frame = self.frame(elapsed_ms);
        write_frame(writer, &frame)?;
        self.sweep.advance(N);
        Ok(frame)
    }
}

/// Schreibt einen kompletten Frame, Kanal für Kanal
pub fn write_frame<W: DutyWriter>(writer: &mut W, frame: &[u32]) -> Result<(), LedError> {
    for (channel, &duty) in frame.iter().enumerate() {
        writer.set_duty(channel, duty)?;
    }
    Ok(())
}

/// Schaltet alle `outputs` Ausgänge aus (Duty 0)
pub fn clear_all<W: DutyWriter>(writer: &mut W, outputs: usize) -> Result<(), LedError> {
    for channel in 0..outputs {
        writer.set_duty(channel, 0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_DUTY_BITS;

    struct Recorder {
        duties: [u32; 4],
        writes: usize,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                duties: [u32::MAX; 4],
                writes: 0,
            }
        }
    }

    impl DutyWriter for Recorder {
        fn set_duty(&mut self, channel: usize, duty: u32) -> Result<(), LedError> {
            let slot = self
                .duties
                .get_mut(channel)
                .ok_or(LedError::ChannelOutOfRange)?;
            *slot = duty;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_new_rejects_zero_outputs() {
        let result = KnightRider::<0>::new(&PatternConfig::DEFAULT);
        assert_eq!(result.err(), Some(ConfigError::NoOutputs));
    }

    #[test]
    fn test_new_rejects_bad_resolution() {
        let mut config = PatternConfig::DEFAULT;
        config.duty_bits = MAX_DUTY_BITS + 4;
        let result = KnightRider::<3>::new(&config);
        assert_eq!(result.err(), Some(ConfigError::InvalidResolution));
    }

    #[test]
    fn test_new_takes_duty_range_from_config() {
        let pattern = KnightRider::<3>::new(&PatternConfig::DEFAULT).unwrap();
        assert_eq!(pattern.max_duty(), 8191);

        let mut config = PatternConfig::DEFAULT;
        config.duty_bits = 8;
        let pattern = KnightRider::<3>::new(&config).unwrap();
        assert_eq!(pattern.max_duty(), 255);
        assert_eq!(pattern.frame(800), [255, 115, 52]);
    }

    #[test]
    fn test_new_rejects_zero_period() {
        let mut config = PatternConfig::DEFAULT;
        config.envelope.period_ms = 0;
        let result = KnightRider::<3>::new(&config);
        assert_eq!(result.err(), Some(ConfigError::ZeroPeriod));
    }

    #[test]
    fn test_frame_is_dark_at_start() {
        let pattern = KnightRider::<3>::new(&PatternConfig::DEFAULT).unwrap();
        assert_eq!(pattern.frame(0), [0, 0, 0]);
    }

    #[test]
    fn test_step_writes_every_output_then_advances() {
        let mut pattern = KnightRider::<3>::new(&PatternConfig::DEFAULT).unwrap();
        let mut recorder = Recorder::new();

        let frame = pattern.step(800, &mut recorder).unwrap();

        assert_eq!(recorder.writes, 3);
        assert_eq!(&recorder.duties[..3], &frame);
        assert_eq!(pattern.sweep().index(), 1);
    }

    #[test]
    fn test_step_uses_snapshot_before_advance() {
        let mut pattern = KnightRider::<3>::new(&PatternConfig::DEFAULT).unwrap();
        let mut recorder = Recorder::new();

        pattern.step(0, &mut recorder).unwrap();
        let frame = pattern.step(800, &mut recorder).unwrap();

        assert_eq!(frame, [3686, 8191, 3686]);
    }

    #[test]
    fn test_clear_all() {
        let mut recorder = Recorder::new();
        clear_all(&mut recorder, 3).unwrap();
        assert_eq!(recorder.duties, [0, 0, 0, u32::MAX]);
        assert_eq!(recorder.writes, 3);
    }

    #[test]
    fn test_clear_all_propagates_error() {
        let mut recorder = Recorder::new();
        assert_eq!(
            clear_all(&mut recorder, 5),
            Err(LedError::ChannelOutOfRange)
        );
    }
}
