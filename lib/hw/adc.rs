use stm32g0xx_hal::analog::adc::Adc as HalAdc;
use stm32g0xx_hal::hal::adc::Channel as AdcChannel;
use stm32g0xx_hal::hal::blocking::delay::DelayUs;
use stm32g0xx_hal::rcc::Rcc;
use stm32g0xx_hal::stm32g0::stm32g070::{ADC, RCC};

use crate::hw::{AnalogInput, ConversionTrigger};
use crate::sampler::Channel;

pub struct AdcConfig<A, B> {
    speed: A,
    delay: B,
}

impl<A, B> AdcConfig<A, B>
where
    A: AdcChannel<HalAdc, ID = u8>,
    B: AdcChannel<HalAdc, ID = u8>,
{
    pub fn new(speed: A, delay: B) -> Self {
        AdcConfig { speed, delay }
    }
}

/// Software-started single conversions of two inputs, end of conversion
/// raises the ADC interrupt.
pub struct Adc<A, B> {
    adc: ADC,
    channels: [u8; 2],
    _inputs: (A, B),
}

impl<A, B> Adc<A, B>
where
    A: AdcChannel<HalAdc, ID = u8>,
    B: AdcChannel<HalAdc, ID = u8>,
{
    pub fn new<D>(pac_adc: ADC, config: AdcConfig<A, B>, rcc: &mut Rcc, delay: &mut D) -> Self
    where
        D: DelayUs<u8>,
    {
        Adc::<A, B>::enable_clock_and_reset(rcc);
        let mut adc = Adc {
            adc: pac_adc,
            channels: [A::channel(), B::channel()],
            _inputs: (config.speed, config.delay),
        };
        adc.disable();
        adc.enable_vreg(delay);
        adc.calibrate();
        adc.enable();
        adc.configure();
        adc
    }

    /// Splits into the foreground trigger and the interrupt-side converter.
    pub fn split(self) -> (AdcTrigger, AdcConverter<A, B>) {
        (
            AdcTrigger { _private: () },
            AdcConverter {
                adc: self.adc,
                channels: self.channels,
                _inputs: self._inputs,
            },
        )
    }

    fn configure(&mut self) {
        self.adc.cfgr1.write(|w| unsafe {
            // Software trigger
            w.exten().bits(0b00);
            // Right alignment
            w.align().clear_bit();
            // 8-bit resolution
            w.res().bits(0b10);
            // Single conversion
            w.cont().clear_bit()
        });
        // 79.5 cycles, pots are high impedance sources
        self.adc.smpr.write(|w| unsafe { w.smp1().bits(0b110) });
        select(&self.adc, self.channels[0]);
        // End of conversion interrupt
        self.adc.ier.write(|w| w.eocie().set_bit());
    }

    fn enable_clock_and_reset(_: &mut Rcc) {
        let rcc = unsafe { &(*RCC::ptr()) };
        rcc.apbenr2.modify(|_, w| w.adcen().set_bit());
        rcc.apbrstr2.modify(|_, w| w.adcrst().set_bit());
        rcc.apbrstr2.modify(|_, w| w.adcrst().clear_bit());
    }

    fn enable_vreg<D: DelayUs<u8>>(&mut self, delay: &mut D) {
        self.adc.cr.modify(|_, w| w.advregen().set_bit());
        // Max starting time declared by stm32g070 datasheet is 20 us
        delay.delay_us(20);
    }

    fn enable(&mut self) {
        self.adc.isr.write(|w| w.adrdy().set_bit());
        self.adc.cr.modify(|_, w| w.aden().set_bit());
        while self.adc.isr.read().adrdy().bit_is_clear() {}
    }

    fn disable(&mut self) {
        let cr = self.adc.cr.read();
        if cr.aden().bit_is_clear() {
            return;
        }
        if cr.adstart().bit_is_set() {
            self.adc.cr.modify(|_, w| w.adstp().set_bit());
        }
        self.adc.cr.modify(|_, w| w.addis().set_bit());
        while self.adc.cr.read().aden().bit_is_set() {}
        self.adc.isr.write(|w| w.adrdy().set_bit());
    }

    fn calibrate(&mut self) {
        self.adc.cr.modify(|_, w| w.adcal().set_bit());
        while self.adc.isr.read().eocal().bit_is_clear() {}
        self.adc.isr.write(|w| w.eocal().set_bit());
    }
}

fn select(adc: &ADC, channel: u8) {
    adc.isr.write(|w| w.ccrdy().set_bit());
    adc.chselr().write(|w| unsafe { w.chsel().bits(1 << channel) });
    // The channel configuration must be applied before the next start
    while adc.isr.read().ccrdy().bit_is_clear() {}
}

/// Starts conversions from the foreground loop.
pub struct AdcTrigger {
    _private: (),
}

impl ConversionTrigger for AdcTrigger {
    fn start_conversion(&mut self) {
        // Only ADSTART is touched here, the interrupt never writes CR
        let adc = unsafe { &(*ADC::ptr()) };
        adc.cr.modify(|_, w| w.adstart().set_bit());
    }
}

/// Reads results and switches channels from the ADC interrupt.
pub struct AdcConverter<A, B> {
    adc: ADC,
    channels: [u8; 2],
    _inputs: (A, B),
}

impl<A, B> AdcConverter<A, B> {
    pub fn unpend(&mut self) {
        self.adc.isr.write(|w| {
            w.eoc().set_bit();
            w.eos().set_bit()
        });
    }
}

impl<A, B> AnalogInput for AdcConverter<A, B> {
    fn read_result(&mut self) -> u8 {
        self.adc.dr.read().data().bits() as u8
    }

    fn select_channel(&mut self, channel: Channel) {
        let id = match channel {
            Channel::A => self.channels[0],
            Channel::B => self.channels[1],
        };
        select(&self.adc, id);
    }
}
