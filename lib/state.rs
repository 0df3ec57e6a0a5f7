//! State shared between the interrupt handlers and the foreground loop.
//!
//! Every variable has a single writing context. Cells only expose `read` and
//! `write`, which map to one atomic load or store, so a reader never observes
//! a half-written value. No compare-and-swap is needed, which keeps this
//! usable on Cortex-M0+.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use crate::config::POT2_STARTUP;

/// 16-bit value written from one context and read from others.
pub struct Cell(AtomicU16);

impl Cell {
    pub const fn new(value: u16) -> Self {
        Cell(AtomicU16::new(value))
    }

    #[inline]
    pub fn read(&self) -> u16 {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn write(&self, value: u16) {
        self.0.store(value, Ordering::Release)
    }
}

/// Boolean latch with the same access rules as [`Cell`].
pub struct Flag(AtomicBool);

impl Flag {
    pub const fn new(value: bool) -> Self {
        Flag(AtomicBool::new(value))
    }

    #[inline]
    pub fn read(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn write(&self, value: bool) {
        self.0.store(value, Ordering::Release)
    }

    /// Flips the latch and returns the new value.
    ///
    /// Must only be called from the flag's single writing context.
    pub fn toggle(&self) -> bool {
        let value = !self.read();
        self.write(value);
        value
    }
}

/// Inputs of one duty computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub pot1: u16,
    pub pot2: u16,
    pub step: u16,
}

pub struct Shared {
    /// Max speed, written by the sampler.
    pub pot1: Cell,
    /// Step modulus and delay, written by the sampler.
    pub pot2: Cell,
    /// Written by the step clock, overridden by the control loop while stopped.
    pub step: Cell,
    /// Written by the stop toggle.
    pub stop: Flag,
}

impl Shared {
    pub const fn new() -> Self {
        Shared {
            pot1: Cell::new(0),
            pot2: Cell::new(POT2_STARTUP),
            step: Cell::new(0),
            stop: Flag::new(false),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pot1: self.pot1.read(),
            pot2: self.pot2.read(),
            step: self.step.read(),
        }
    }
}

impl Default for Shared {
    fn default() -> Self {
        Shared::new()
    }
}
