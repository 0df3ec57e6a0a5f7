use stm32g0xx_hal::exti::{Event, ExtiExt};
use stm32g0xx_hal::gpio::SignalEdge;
use stm32g0xx_hal::stm32g0::stm32g070::EXTI;

use crate::hw::helper::StopInput;

/// Stop button raising EXTI4_15 on every press.
pub struct StopButton {
    _pin: StopInput,
    exti: EXTI,
}

impl StopButton {
    pub fn new(pin: StopInput, mut exti: EXTI) -> Self {
        let pin = pin.listen(SignalEdge::Falling, &mut exti);
        StopButton { _pin: pin, exti }
    }

    pub fn unpend(&mut self) {
        self.exti.unpend(Event::GPIO13);
    }
}
