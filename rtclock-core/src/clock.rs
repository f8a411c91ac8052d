//! Clock runner
//!
//! Ties the session state machine to the setup sequencer, the shared time
//! state and the display multiplexer:
//!
//! ```text
//! Boot ──init──► Setup ──prompts done──► Running ──reset key──► Setup ...
//! ```
//!
//! The tick handler runs independently and only ever touches the
//! [`SharedClock`].

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::input::drain;
use crate::multiplex::Multiplexer;
use crate::panel::Panel;
use crate::setup::SetupSequencer;
use crate::state::{Event, State};
use crate::time::{SharedClock, TimeState};
use crate::traits::{CharDisplay, DigitSelect, Keypad, SegmentBus};

/// The foreground side of the clock
pub struct Clock<'a, K, L, B, S, D> {
    shared: &'a SharedClock,
    panel: Panel<K, L, B, S, D>,
    config: ClockConfig,
    state: State,
    sessions: u32,
}

impl<'a, K, L, B, S, D> Clock<'a, K, L, B, S, D>
where
    K: Keypad,
    L: CharDisplay,
    B: SegmentBus,
    S: DigitSelect,
    D: DelayNs,
{
    /// Create a clock after validating the configuration
    pub fn new(
        shared: &'a SharedClock,
        panel: Panel<K, L, B, S, D>,
        config: ClockConfig,
    ) -> Result<Self, ClockError> {
        config.validate()?;

        Ok(Self {
            shared,
            panel,
            config,
            state: State::Boot,
            sessions: 0,
        })
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of setup sessions started so far
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn panel(&self) -> &Panel<K, L, B, S, D> {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel<K, L, B, S, D> {
        &mut self.panel
    }

    /// Give the peripherals back
    pub fn into_panel(self) -> Panel<K, L, B, S, D> {
        self.panel
    }

    /// Initialize the peripherals and enter setup
    ///
    /// Does nothing once the clock has left `Boot`.
    pub fn init(&mut self) -> Result<(), ClockError> {
        if self.state != State::Boot {
            return Ok(());
        }

        self.panel.lcd.init()?;
        self.panel.segments.init()?;
        self.panel.select.init()?;
        self.panel.select.release()?;

        info!("peripherals initialized");
        self.apply(Event::BootComplete);
        Ok(())
    }

    /// Run one session: setup prompts, then the display loop until the
    /// reset key
    ///
    /// Returns the time the session started from.
    pub fn run_session(&mut self) -> Result<TimeState, ClockError> {
        self.init()?;

        self.sessions = self.sessions.wrapping_add(1);
        info!("session {=u32}: setup", self.sessions);

        let start = SetupSequencer::new(&self.config).run(&mut self.panel)?;
        self.shared.publish(start);
        self.apply(Event::SetupComplete);

        let mut mux = Multiplexer::new(&self.config, &start);
        mux.run(self.shared, &mut self.panel)?;
        self.apply(Event::ResetRequested);

        // The reset key may still be down
        drain(&mut self.panel.keypad);
        Ok(start)
    }

    /// Run sessions forever
    ///
    /// Only returns if a peripheral fails.
    pub fn run(&mut self) -> Result<Infallible, ClockError> {
        loop {
            self.run_session()?;
        }
    }

    fn apply(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next != self.state {
            debug!("state {} -> {} on {}", self.state, next, event);
        }
        self.state = next;

        if self.state.ticks_allowed(self.config.gate_ticks_during_setup) {
            if !self.shared.is_ticking() {
                trace!("ticks resumed");
                self.shared.resume_ticks();
            }
        } else if self.shared.is_ticking() {
            trace!("ticks suspended");
            self.shared.suspend_ticks();
        }
    }
}
