//! Build-time configuration of the controller.
//!
//! There is no runtime configuration: the two potentiometers and the stop
//! button are the only inputs, everything else is fixed here.

/// Step clock tick rate. One tick advances the step counter by one.
pub const STEP_TICK_HZ: u32 = 100;

/// Milliseconds of delay shown on the display per unit of `pot2`.
pub const DELAY_MS_PER_STEP: u16 = (1_000 / STEP_TICK_HZ) as u16;

/// PWM carrier frequency in Hz.
pub const PWM_FREQUENCY_HZ: u32 = 1_000;

/// Duty value that keeps the output active for the whole PWM period.
pub const PWM_FULL_SCALE: u32 = 1_000;

/// Largest duty value representable in the 10-bit coarse/fine split.
pub const DUTY_MAX: u16 = 0x3ff;

/// Conversions run at 8-bit resolution, shifted into the 10-bit pot range.
pub const SAMPLE_SHIFT: u8 = 2;

/// Value of `pot2` before the first conversion of channel B completes.
pub const POT2_STARTUP: u16 = 1;

/// Spaces printed after a value so a shorter number erases a longer one.
pub const PADDING: &str = "     ";

/// Glyph matrix of a character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharSize {
    Dots5x8,
    Dots5x10,
}

/// Character display geometry passed to `Lcd::begin`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    pub columns: u8,
    pub rows: u8,
    pub char_size: CharSize,
}

pub const LCD_GEOMETRY: Geometry = Geometry {
    columns: 16,
    rows: 2,
    char_size: CharSize::Dots5x8,
};
