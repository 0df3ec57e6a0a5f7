#![no_std]

#[cfg(feature = "firmware")]
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "firmware")]
use defmt_rtt as _; // global logger
#[cfg(feature = "firmware")]
use panic_probe as _;

pub mod clock;
pub mod config;
pub mod control;
pub mod display;
pub mod duty;
pub mod error;
pub mod hw;
pub mod sampler;
pub mod state;
pub mod stop;

#[cfg(feature = "firmware")]
static UPTIME_MS: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "firmware")]
defmt::timestamp!("{=u32}", UPTIME_MS.load(Ordering::Relaxed));

/// Advances the log timestamp by one step tick. Called from the step timer
/// interrupt only.
#[cfg(feature = "firmware")]
pub fn advance_uptime() {
    let step_ms = 1_000 / config::STEP_TICK_HZ;
    let now = UPTIME_MS.load(Ordering::Relaxed);
    UPTIME_MS.store(now.wrapping_add(step_ms), Ordering::Relaxed);
}
