use crate::config::Geometry;
use crate::sampler::Channel;

#[cfg(feature = "firmware")]
mod adc;
#[cfg(feature = "firmware")]
mod button;
#[cfg(feature = "firmware")]
mod helper;
#[cfg(feature = "firmware")]
mod lcd;
#[cfg(feature = "firmware")]
mod timers;

#[cfg(feature = "firmware")]
pub use adc::{AdcConfig, AdcTrigger};
#[cfg(feature = "firmware")]
pub use button::StopButton;
#[cfg(feature = "firmware")]
pub use helper::*;
#[cfg(feature = "firmware")]
pub use lcd::IliError;
#[cfg(feature = "firmware")]
pub use timers::{init_pwm, StepTimer};

/// Character display.
pub trait Lcd {
    type Error;
    fn begin(&mut self, geometry: Geometry) -> Result<(), Self::Error>;
    fn home(&mut self) -> Result<(), Self::Error>;
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error>;
    fn clear(&mut self) -> Result<(), Self::Error>;
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Interrupt-side half of the analog converter.
pub trait AnalogInput {
    /// Result of the conversion that just completed.
    fn read_result(&mut self) -> u8;
    /// Channel sampled by the next conversion.
    fn select_channel(&mut self, channel: Channel);
}

/// Foreground half of the analog converter.
pub trait ConversionTrigger {
    fn start_conversion(&mut self);
}
