use crate::state::Shared;

/// Advances the step counter once per timer tick, wrapping at `pot2`.
pub struct StepClock {
    zero_modulus_faults: u32,
}

impl StepClock {
    pub fn new() -> Self {
        StepClock {
            zero_modulus_faults: 0,
        }
    }

    pub fn tick(&mut self, shared: &Shared) {
        let modulus = shared.pot2.read();
        let mut step = shared.step.read().saturating_add(1);

        if modulus == 0 {
            // Treated as a modulus of 1
            self.zero_modulus_faults = self.zero_modulus_faults.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "pot2 is 0, step held at 0 ({=u32} faults)",
                self.zero_modulus_faults
            );
            step = 0;
        } else if step >= modulus {
            step = 0;
        }

        shared.step.write(step);
    }

    /// Ticks that found `pot2 == 0`.
    pub fn zero_modulus_faults(&self) -> u32 {
        self.zero_modulus_faults
    }
}

impl Default for StepClock {
    fn default() -> Self {
        StepClock::new()
    }
}
