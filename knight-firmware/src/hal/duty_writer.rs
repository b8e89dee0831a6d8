// LEDC Duty Writer - PWM-Ausgabe über das LEDC Peripheral
//
// Implementiert den DutyWriter-Trait aus knight-core für echte Hardware.
// Mock-Implementierung für Host-Tests: knight-tests/tests/pattern_tests.rs

use esp_hal::gpio::DriveMode;
use esp_hal::ledc::channel::{self, Channel, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, Timer, TimerIFace};
use esp_hal::ledc::LowSpeed;
use esp_hal::time::Rate;
use knight_core::{DutyWriter, LedError};

/// Fehler beim Einrichten von LEDC-Timer oder Kanälen
///
/// Tritt nur beim Start auf, danach läuft das Pattern ohne Setup-Fehler.
#[derive(Debug)]
pub enum SetupError {
    /// Auflösung wird vom LEDC dieses Chips nicht unterstützt
    UnsupportedResolution(u8),
    Timer(timer::Error),
    Channel(channel::Error),
}

impl From<timer::Error> for SetupError {
    fn from(e: timer::Error) -> Self {
        SetupError::Timer(e)
    }
}

impl From<channel::Error> for SetupError {
    fn from(e: channel::Error) -> Self {
        SetupError::Channel(e)
    }
}

/// Übersetzt die Auflösung in Bits in den LEDC-Duty-Typ
///
/// Der ESP32-C6 LEDC kann maximal 14 Bit.
fn duty_resolution(bits: u8) -> Option<timer::config::Duty> {
    use timer::config::Duty;

    let duty = match bits {
        1 => Duty::Duty1Bit,
        2 => Duty::Duty2Bit,
        3 => Duty::Duty3Bit,
        4 => Duty::Duty4Bit,
        5 => Duty::Duty5Bit,
        6 => Duty::Duty6Bit,
        7 => Duty::Duty7Bit,
        8 => Duty::Duty8Bit,
        9 => Duty::Duty9Bit,
        10 => Duty::Duty10Bit,
        11 => Duty::Duty11Bit,
        12 => Duty::Duty12Bit,
        13 => Duty::Duty13Bit,
        14 => Duty::Duty14Bit,
        _ => return None,
    };
    Some(duty)
}

/// Konfiguriert einen Low-Speed Timer mit APB-Takt
///
/// # Parameter
/// - `timer`: LEDC Timer (z.B. Timer0)
/// - `duty_bits`: Auflösung in Bits (z.B. 13)
/// - `freq_hz`: PWM-Frequenz in Hz (z.B. 5000)
pub fn configure_timer(
    timer: &mut Timer<'_, LowSpeed>,
    duty_bits: u8,
    freq_hz: u32,
) -> Result<(), SetupError> {
    let duty = duty_resolution(duty_bits).ok_or(SetupError::UnsupportedResolution(duty_bits))?;

    timer.configure(timer::config::Config {
        duty,
        clock_source: timer::LSClockSource::APBClk,
        frequency: Rate::from_hz(freq_hz),
    })?;
    Ok(())
}

/// Real Hardware Duty Writer
///
/// Hält `N` LEDC-Kanäle, Kanal-Index = Position im Array.
/// Schreibt Roh-Duty-Werte (0..=MAX_DUTY) direkt ins Register.
pub struct LedcDutyWriter<'a, const N: usize> {
    channels: [Channel<'a, LowSpeed>; N],
}

impl<'a, const N: usize> LedcDutyWriter<'a, N> {
    /// Erstellt einen neuen LedcDutyWriter
    ///
    /// Bindet alle Kanäle an `timer` und startet sie mit Duty 0.
    ///
    /// # Parameter
    /// - `channels`: LEDC-Kanäle in Sweep-Reihenfolge
    /// - `timer`: bereits konfigurierter Timer (siehe [`configure_timer`])
    pub fn new(
        mut channels: [Channel<'a, LowSpeed>; N],
        timer: &'a Timer<'a, LowSpeed>,
    ) -> Result<Self, SetupError> {
        for ch in channels.iter_mut() {
            ch.configure(channel::config::Config {
                timer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })?;
        }

        Ok(Self { channels })
    }
}

impl<'a, const N: usize> DutyWriter for LedcDutyWriter<'a, N> {
    fn set_duty(&mut self, channel: usize, duty: u32) -> Result<(), LedError> {
        let ch = self
            .channels
            .get(channel)
            .ok_or(LedError::ChannelOutOfRange)?;
        ch.set_duty_hw(duty);
        Ok(())
    }
}
