//! Pattern-Schleife (async, embassy)
//!
//! Nur mit Feature `embassy`. Zeitquelle und Wartezeit kommen aus
//! `embassy-time`, das Beenden läuft über ein `embassy-sync` Signal.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};

use crate::logic::{KnightRider, clear_all};
use crate::traits::{DutyWriter, PatternError, PolarityWriter};
use crate::types::{PatternConfig, PatternKind};

/// Signal zum Beenden der Pattern-Schleife
/// CriticalSectionRawMutex, damit auch ISRs oder andere Executoren stoppen können
pub type StopSignal = Signal<CriticalSectionRawMutex, ()>;

/// Pattern Logic - Business Logic ohne Hardware-Abhängigkeit
///
/// Diese Funktion wählt das konfigurierte Pattern und führt es aus:
/// - Knight Rider: Endlos-Schleife bis `stop` signalisiert wird
/// - Binary Counter / Random Blink: alle LEDs aus, dann Ende
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: DutyWriter` ermöglicht:
/// - Real Hardware (LedcDutyWriter) im Production-Code
/// - Mock Implementation (MockDutyWriter) in Tests
///
/// # Parameter
/// - `writer`: Duty Writer für `N` Kanäle (Hardware oder Mock)
/// - `config`: Pattern-Konfiguration (wird vor dem ersten Schreiben geprüft)
/// - `stop`: Signal für geordnetes Beenden, wird einmal pro Tick geprüft
///
/// # Fehlerbehandlung
/// Konfigurations- und Schreibfehler beenden die Schleife sofort.
/// Die LEDs behalten dabei den zuletzt geschriebenen Wert.
pub async fn pattern_logic<W: DutyWriter, const N: usize>(
    writer: W,
    config: PatternConfig,
    stop: &StopSignal,
) -> Result<(), PatternError> {
    config.validate(N)?;

    // Polarität einmal hier anwenden, die Logik rechnet immer active-high
    let mut writer = PolarityWriter::new(writer, config.polarity, config.max_duty());

    #[cfg(feature = "defmt")]
    defmt::info!("Pattern: {}", config.kind.name());

    match config.kind {
        PatternKind::KnightRider => knight_rider_loop::<_, N>(&mut writer, &config, stop).await,
        PatternKind::BinaryCounter | PatternKind::RandomBlink => {
            clear_all(&mut writer, N)?;
            Ok(())
        }
    }
}

/// Knight-Rider Schleife: Tick schreiben, dann warten oder stoppen
async fn knight_rider_loop<W: DutyWriter, const N: usize>(
    writer: &mut W,
    config: &PatternConfig,
    stop: &StopSignal,
) -> Result<(), PatternError> {
    let mut pattern = KnightRider::<N>::new(config)?;
    let step_delay = Duration::from_millis(u64::from(config.step_delay_ms));
    let start = Instant::now();

    loop {
        let elapsed_ms = start.elapsed().as_millis();
        pattern.step(elapsed_ms, writer)?;

        // Async Delay: gibt CPU an andere Tasks zurück, Stop bricht die Wartezeit ab
        if let Either::Second(()) = select(Timer::after(step_delay), stop.wait()).await {
            #[cfg(feature = "defmt")]
            defmt::info!("Pattern: stop requested at {}ms", elapsed_ms);
            return Ok(());
        }
    }
}
