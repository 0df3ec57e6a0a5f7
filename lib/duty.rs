//! Duty cycle computation and PWM output.
//!
//! `duty ~= step * pot1 / pot2`, evaluated as a fixed-point pipeline whose
//! scale shrinks as `pot1` grows:
//!
//! | `pot1`        | scale  |
//! |---------------|--------|
//! | `0..100`      | 10000  |
//! | `100..300`    | 100    |
//! | `300..`       | 10     |
//!
//! Intermediates are 32 bits wide, so no product wraps. The quantization of
//! each range is kept as is: a larger `pot1` gets a coarser step value.

use core::num::NonZeroU16;

use embedded_hal::PwmPin;

use crate::config::{DUTY_MAX, PWM_FULL_SCALE};

const LOW_RANGE_END: u16 = 100;
const MID_RANGE_END: u16 = 300;

/// 10-bit PWM duty value, split into an 8-bit coarse and a 2-bit fine part.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duty(u16);

impl Duty {
    pub const OFF: Duty = Duty(0);

    pub fn new(value: u16) -> Self {
        Duty(value.min(DUTY_MAX))
    }

    pub fn from_parts(coarse: u8, fine: u8) -> Self {
        Duty(((coarse as u16) << 2) | (fine as u16 & 0x3))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn coarse(self) -> u8 {
        (self.0 >> 2) as u8
    }

    pub fn fine(self) -> u8 {
        (self.0 & 0x3) as u8
    }
}

fn scale(pot1: u16) -> u32 {
    if pot1 < LOW_RANGE_END {
        10_000
    } else if pot1 < MID_RANGE_END {
        100
    } else {
        10
    }
}

pub fn duty(pot1: u16, pot2: NonZeroU16, step: u16) -> Duty {
    let scale = scale(pot1);
    let step_value = pot1 as u32 * scale / pot2.get() as u32;
    let value = step as u32 * step_value / scale;
    Duty::new(value.min(DUTY_MAX as u32) as u16)
}

/// Writes duty values to a PWM channel, `PWM_FULL_SCALE` being 100 %.
pub struct DutyOutput<P> {
    pin: P,
}

impl<P> DutyOutput<P>
where
    P: PwmPin<Duty = u16>,
{
    pub fn new(mut pin: P) -> Self {
        pin.set_duty(0);
        pin.enable();
        DutyOutput { pin }
    }

    pub fn write(&mut self, duty: Duty) {
        let value = Duty::from_parts(duty.coarse(), duty.fine()).value() as u32;
        let max = self.pin.get_max_duty() as u32;
        let counts = value.min(PWM_FULL_SCALE) * max / PWM_FULL_SCALE;
        self.pin.set_duty(counts as u16);
    }

    pub fn off(&mut self) {
        self.pin.set_duty(0);
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
