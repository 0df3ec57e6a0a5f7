use crate::config::SAMPLE_SHIFT;
use crate::hw::AnalogInput;
use crate::state::Shared;

/// Analog input multiplexed into the converter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Max speed potentiometer
    A,
    /// Delay potentiometer
    B,
}

impl Channel {
    pub fn other(self) -> Self {
        match self {
            Channel::A => Channel::B,
            Channel::B => Channel::A,
        }
    }
}

/// Round-robins the converter between the two potentiometers.
pub struct Sampler {
    active: Channel,
}

impl Sampler {
    pub fn new() -> Self {
        Sampler { active: Channel::A }
    }

    /// Handles a conversion-complete event. The next conversion is started by
    /// the control loop.
    pub fn on_conversion_complete<ADC>(&mut self, adc: &mut ADC, shared: &Shared)
    where
        ADC: AnalogInput,
    {
        let sample = Sampler::scale(adc.read_result());
        match self.active {
            Channel::A => shared.pot1.write(sample),
            Channel::B => shared.pot2.write(sample),
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("channel {} = {=u16}", self.active, sample);

        self.active = self.active.other();
        adc.select_channel(self.active);
    }

    pub fn active(&self) -> Channel {
        self.active
    }

    fn scale(raw: u8) -> u16 {
        (raw as u16) << SAMPLE_SHIFT
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Sampler::new()
    }
}
