use stm32g0xx_hal::hal::timer::CountDown;
use stm32g0xx_hal::hal::PwmPin as PwmPinTrait;
use stm32g0xx_hal::rcc::Rcc;
use stm32g0xx_hal::stm32g0::stm32g070::{TIM3, TIM6};
use stm32g0xx_hal::time::Hertz;
use stm32g0xx_hal::timer::pwm::{PwmExt, PwmPin};
use stm32g0xx_hal::timer::{Channel1, Timer, TimerExt};

use crate::hw::helper::PwmOutputPin;

/// Periodic interrupt driving the step clock.
pub struct StepTimer {
    timer: Timer<TIM6>,
    freq: Hertz,
}

impl StepTimer {
    pub fn new(pac_tim: TIM6, freq: Hertz, rcc: &mut Rcc) -> Self {
        StepTimer {
            timer: pac_tim.timer(rcc),
            freq,
        }
    }

    pub fn start(&mut self) {
        self.timer.clear_irq();
        self.timer.listen();
        self.timer.start(self.freq);
    }

    pub fn unpend(&mut self) {
        self.timer.clear_irq();
    }
}

/// Motor PWM on TIM3 channel 1. Returned disabled with a zero duty.
pub fn init_pwm(
    pac_tim: TIM3,
    pin: PwmOutputPin,
    freq: Hertz,
    rcc: &mut Rcc,
) -> PwmPin<TIM3, Channel1> {
    let pwm = pac_tim.pwm(freq, rcc);
    let mut channel = pwm.bind_pin(pin);
    channel.set_duty(0);
    channel
}
