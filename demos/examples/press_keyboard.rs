// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard activation.
//!
//! Shows that `Enter` always presses, while the space bar only presses when
//! `disable_spacebar_click` is off.
//!
//! Run:
//! - `cargo run -p understory_demos --example press_keyboard`

use understory_press::handlers::PressedStatesOptions;
use understory_press::state::PressedStates;
use understory_press::types::{Key, KeyboardEvent};

fn run(disable_spacebar_click: bool) {
    let mut press = PressedStates::new(
        PressedStatesOptions::new().disable_spacebar_click(disable_spacebar_click),
    );
    println!("== disable_spacebar_click={disable_spacebar_click} ==");
    for key in [" ", "Enter"] {
        let event = KeyboardEvent::new(Key::from_dom(key));
        let down = press.on_key_down(&event);
        println!("  keydown {key:?}: {down:?}  pressed={}", press.pressed());
        let up = press.on_key_up(&event);
        println!("  keyup   {key:?}: {up:?}  pressed={}", press.pressed());
    }
}

fn main() {
    run(false);
    run(true);

    let options = PressedStatesOptions::new().disable_spacebar_click(true);
    let mut press = PressedStates::new(options);
    let space = KeyboardEvent::new(Key::Space);
    let enter = KeyboardEvent::new(Key::Enter);
    assert!(press.on_key_down(&space).is_none());
    assert!(press.on_key_down(&enter).is_some());
    assert!(press.pressed());
}
