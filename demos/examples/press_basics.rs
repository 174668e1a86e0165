// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press state basics.
//!
//! This example drives a tracker with pointer and touch input the way a host
//! would: forward each event, and re-render when a transition is reported.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example press_basics`

use std::cell::Cell;

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_press::handlers::{PressHandlers, PressedStatesOptions};
use understory_press::state::PressedStates;
use understory_press::types::{PointerButton, PointerEvent, PressEvent, TouchEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let clicks = Cell::new(0_u32);
    let clicks = &clicks;
    // Rebuilt on every render, like props of a component.
    let options = move || {
        let bump = move |_: &PointerEvent| clicks.set(clicks.get() + 1);
        let handlers = PressHandlers::new().on_pointer_up(bump);
        PressedStatesOptions::new().handlers(handlers)
    };

    let mut press = PressedStates::new(options());
    let mut renders = 1;

    let at = Point::new(12.0, 8.0);
    let primary = PointerEvent::new(PointerButton::Primary).at(at);
    let secondary = PointerEvent::new(PointerButton::Secondary);
    let touch = TouchEvent::new(7, Point::new(5.0, 5.0));

    let input = [
        PressEvent::PointerDown(&secondary),
        PressEvent::PointerDown(&primary),
        PressEvent::PointerUp(&primary),
        PressEvent::TouchStart(&touch),
        PressEvent::TouchMove(&touch),
        PressEvent::TouchEnd(&touch),
    ];

    println!("== Dispatch ==");
    for event in input {
        let transition = press.handle(event);
        println!(
            "  {:<12} -> {:?}  pressed={}",
            event.kind().name(),
            transition,
            press.pressed()
        );
        if transition.is_some() {
            press.sync(options());
            renders += 1;
        }
    }

    let pointer_ups = clicks.get();
    println!("== Summary ==");
    println!("  renders={renders} pointer_ups={pointer_ups}");
    assert!(!press.pressed());
    assert_eq!(renders, 5);
    assert_eq!(clicks.get(), 1);
}
