//! Foreground control loop.
//!
//! Each call to [`Controller::poll`] is one iteration of the loop. Stopping is
//! a mode of the same loop rather than a nested wait, so every iteration goes
//! through the same entry point.

use core::num::NonZeroU16;

use embedded_hal::digital::v2::OutputPin;
use embedded_hal::PwmPin;

use crate::display::Display;
use crate::duty::{duty, DutyOutput};
use crate::error::{Error, Result};
use crate::hw::{ConversionTrigger, Lcd};
use crate::state::Shared;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Running,
    /// Output halted, `saved_step` is restored on resume.
    Stopped { saved_step: u16 },
}

pub struct Controller<LCD, LED, PWM, ADC> {
    display: Display<LCD>,
    indicator: LED,
    output: DutyOutput<PWM>,
    trigger: ADC,
    mode: Mode,
    zero_divisor_faults: u32,
}

impl<LCD, LCDER, LED, PWM, ADC> Controller<LCD, LED, PWM, ADC>
where
    LCD: Lcd<Error = LCDER>,
    LED: OutputPin,
    PWM: PwmPin<Duty = u16>,
    ADC: ConversionTrigger,
{
    pub fn new(display: Display<LCD>, indicator: LED, pwm: PWM, trigger: ADC) -> Self {
        Controller {
            display,
            indicator,
            output: DutyOutput::new(pwm),
            trigger,
            mode: Mode::Running,
            zero_divisor_faults: 0,
        }
    }

    pub fn poll(&mut self, shared: &Shared) -> Result<(), LCDER> {
        if self.mode == Mode::Running {
            self.run(shared)?;
        }
        if let Mode::Stopped { saved_step } = self.mode {
            self.hold(shared, saved_step)?;
        }
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Iterations that found `pot2 == 0` and divided by 1 instead.
    pub fn zero_divisor_faults(&self) -> u32 {
        self.zero_divisor_faults
    }

    pub fn display(&self) -> &Display<LCD> {
        &self.display
    }

    pub fn indicator(&self) -> &LED {
        &self.indicator
    }

    pub fn output(&self) -> &DutyOutput<PWM> {
        &self.output
    }

    pub fn trigger(&self) -> &ADC {
        &self.trigger
    }

    fn run(&mut self, shared: &Shared) -> Result<(), LCDER> {
        self.trigger.start_conversion();

        let inputs = shared.snapshot();
        let divisor = self.divisor(inputs.pot2);
        self.output.write(duty(inputs.pot1, divisor, inputs.step));
        self.display.status(inputs.pot1, inputs.pot2)?;

        if shared.stop.read() {
            let saved_step = shared.step.read();
            self.display.clear()?;
            self.mode = Mode::Stopped { saved_step };
            #[cfg(feature = "defmt")]
            defmt::info!("stopped at step {=u16}", saved_step);
        }
        Ok(())
    }

    fn hold(&mut self, shared: &Shared, saved_step: u16) -> Result<(), LCDER> {
        if shared.stop.read() {
            shared.step.write(0);
            self.indicator.set_high().map_err(|_| Error::Indicator)?;
            self.display.stopped()?;
            self.output.off();
        } else {
            self.indicator.set_low().map_err(|_| Error::Indicator)?;
            shared.step.write(saved_step);
            self.mode = Mode::Running;
            #[cfg(feature = "defmt")]
            defmt::info!("resumed at step {=u16}", saved_step);
        }
        Ok(())
    }

    fn divisor(&mut self, pot2: u16) -> NonZeroU16 {
        match NonZeroU16::new(pot2) {
            Some(divisor) => divisor,
            None => {
                self.zero_divisor_faults = self.zero_divisor_faults.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "pot2 is 0, dividing by 1 ({=u32} faults)",
                    self.zero_divisor_faults
                );
                NonZeroU16::MIN
            }
        }
    }
}
