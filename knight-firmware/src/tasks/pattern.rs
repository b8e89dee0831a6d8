// Pattern Task - Steuert die LED-Bank über das LEDC Peripheral
use defmt::{Debug2Format, error, info};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed, channel, timer};

use crate::config::{LED_COUNT, LED_GPIO_PINS, LEDC_FREQ_HZ};
use crate::hal::{LedcDutyWriter, configure_timer};
use crate::{PatternConfig, StopSignal, pattern_logic};

/// Stop-Signal für den laufenden Pattern-Task
///
/// Wird einmal pro Tick geprüft (während der Wartezeit). Nach `signal(())`
/// endet der Task nach dem aktuellen Tick, die LEDs behalten ihren Wert.
pub static PATTERN_STOP: StopSignal = StopSignal::new();

/// Pattern Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die LEDC-Initialisierung und ruft dann
/// die testbare `pattern_logic()` Funktion auf.
///
/// # Parameter
/// - `ledc_peripheral`: LEDC Peripheral
/// - `gpio2`, `gpio4`, `gpio5`: LED-Pins in Sweep-Reihenfolge
/// - `config`: Pattern-Konfiguration (siehe `config::pattern_config()`)
#[embassy_executor::task]
pub async fn pattern_task(
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    gpio2: esp_hal::peripherals::GPIO2<'static>,
    gpio4: esp_hal::peripherals::GPIO4<'static>,
    gpio5: esp_hal::peripherals::GPIO5<'static>,
    config: PatternConfig,
) {
    let mut ledc = Ledc::new(ledc_peripheral);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut lstimer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    if let Err(e) = configure_timer(&mut lstimer, config.duty_bits, LEDC_FREQ_HZ) {
        error!("LEDC: timer setup failed: {}", Debug2Format(&e));
        return;
    }

    let channels = [
        ledc.channel(channel::Number::Channel0, gpio2),
        ledc.channel(channel::Number::Channel1, gpio4),
        ledc.channel(channel::Number::Channel2, gpio5),
    ];

    let writer = match LedcDutyWriter::<LED_COUNT>::new(channels, &lstimer) {
        Ok(writer) => writer,
        Err(e) => {
            error!("LEDC: channel setup failed: {}", Debug2Format(&e));
            return;
        }
    };

    info!(
        "LEDC: {} channels on GPIO {} @ {}Hz, {} bit",
        LED_COUNT, LED_GPIO_PINS, LEDC_FREQ_HZ, config.duty_bits
    );

    // Business Logic aufrufen (Fehler sind fatal, kein Retry)
    match pattern_logic::<_, LED_COUNT>(writer, config, &PATTERN_STOP).await {
        Ok(()) => info!("Pattern: task finished"),
        Err(e) => error!("Pattern: fatal error: {}", e),
    }
}
