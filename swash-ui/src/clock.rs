//! Live clock on the dashboard

use gloo_timers::callback::Interval;

use crate::dom;

pub const CLOCK_ELEMENT_ID: &str = "dashboard-clock";

const TICK_MS: u32 = 1_000;

/// Tick every second if the page has a clock element
pub fn start() {
    if !tick() {
        return;
    }
    Interval::new(TICK_MS, || {
        tick();
    })
    .forget();
}

/// Write the local time into the clock; false when there is no clock
fn tick() -> bool {
    let Some(clock) = dom::document().and_then(|doc| doc.get_element_by_id(CLOCK_ELEMENT_ID)) else {
        return false;
    };

    let now = js_sys::Date::new_0();
    let time: String = now.to_locale_time_string("default").into();
    clock.set_text_content(Some(&time));
    true
}
