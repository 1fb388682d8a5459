// File: contact-form/core/src/time_display.rs
// Purpose: Writes the current epoch milliseconds into a text slot once a second

use std::rc::Rc;
use std::time::Duration;

use crate::dom::{Document, Element, Locator};
use crate::error::MountError;
use crate::schedule::{Clock, Scheduler};

/// Element id of the time output slot
pub const TIME_SLOT_ID: &str = "currentTime";

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct TimeDisplay<E, C> {
    slot: E,
    clock: Rc<C>,
}

impl<E: Element, C: Clock + 'static> TimeDisplay<E, C> {
    pub fn new(slot: E, clock: C) -> Self {
        Self {
            slot,
            clock: Rc::new(clock),
        }
    }

    pub fn locate<D>(doc: &D, clock: C) -> Result<Self, MountError>
    where
        D: Document<Element = E>,
    {
        Ok(Self::new(doc.require(&Locator::Id(TIME_SLOT_ID))?, clock))
    }

    pub fn render(&self) {
        self.slot.set_text(&self.clock.now_millis().to_string());
    }

    /// Render now, then on every tick for the life of the page
    pub fn start(self, scheduler: &dyn Scheduler) {
        self.render();
        scheduler.schedule_repeating(TICK_INTERVAL, Box::new(move || self.render()));
    }
}
