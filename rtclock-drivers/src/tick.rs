//! One-second tick task for embassy-based boards
//!
//! Replaces the hardware timer interrupt when the board runs an embassy
//! executor. Spawn it from the firmware's own `#[embassy_executor::task]`
//! wrapper with the clock's `static`.

use embassy_time::{Duration, Ticker};
use rtclock_core::SharedClock;

/// Tick interval
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Advance `clock` once per second, forever
pub async fn tick_task(clock: &'static SharedClock) -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("Tick task started");

    let mut ticker = Ticker::every(TICK_INTERVAL);

    loop {
        ticker.next().await;

        let applied = clock.on_tick();
        #[cfg(feature = "defmt")]
        defmt::trace!("tick applied: {=bool}", applied);
        #[cfg(not(feature = "defmt"))]
        let _ = applied;
    }
}
