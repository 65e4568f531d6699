// SPDX-License-Identifier: MPL-2.0

//! Live clock and scrolling banner on the MFD.
//!
//! Connects to the first supported joystick, shows the host's current
//! local time on the clock line and scrolls a banner across line 1 until
//! interrupted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example mfd_clock -- "SOME BANNER TEXT"
//! ```

use std::env;
use std::thread;
use std::time::Duration;

use chrono::Local;
use x52pro::text::{REPLACE_MISSING, ScrollOptions, Scroller, Unmapped, to_codepage};
use x52pro::{Device, Led, LedState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let banner = env::args()
        .nth(1)
        .unwrap_or_else(|| "HELLO FROM X52PRO".to_string());

    let mut device = Device::new();
    if !device.connect() {
        eprintln!("no supported joystick found");
        std::process::exit(1);
    }

    if device.capabilities().tri_state_leds {
        device.set_led(Led::A, LedState::Green)?;
    }
    device.set_mfd_brightness(80)?;

    let text = to_codepage(&banner, Unmapped::Substitute(REPLACE_MISSING));
    let mut scroller = Scroller::new(
        &text,
        b"",
        b"",
        ScrollOptions {
            from_offscreen: true,
            to_offscreen: true,
            left_to_right: false,
        },
    )?;

    loop {
        let now = Local::now();
        device.set_time(now.fixed_offset())?;
        device.set_mfd_text(1, &scroller.frame())?;
        device.commit()?;

        scroller.scroll();
        thread::sleep(Duration::from_millis(500));
    }
}
