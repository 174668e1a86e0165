// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_press::handlers::{PressHandlers, PressedStatesOptions};
use understory_press::state::PressedStates;
use understory_press::types::{
    Key, KeyboardEvent, PointerButton, PointerEvent, PressEvent, TouchEvent,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Owned event payloads; borrowed into `PressEvent`s at dispatch time.
enum Input {
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerLeave(PointerEvent),
    KeyDown(KeyboardEvent),
    KeyUp(KeyboardEvent),
}

impl Input {
    fn as_event(&self) -> PressEvent<'_> {
        match self {
            Self::TouchStart(e) => PressEvent::TouchStart(e),
            Self::TouchMove(e) => PressEvent::TouchMove(e),
            Self::TouchEnd(e) => PressEvent::TouchEnd(e),
            Self::PointerDown(e) => PressEvent::PointerDown(e),
            Self::PointerUp(e) => PressEvent::PointerUp(e),
            Self::PointerLeave(e) => PressEvent::PointerLeave(e),
            Self::KeyDown(e) => PressEvent::KeyDown(e),
            Self::KeyUp(e) => PressEvent::KeyUp(e),
        }
    }
}

fn gen_inputs(count: usize) -> Vec<Input> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let r = rng.next_u64();
        let pos = Point::new(((r >> 8) & 0xff) as f64, ((r >> 16) & 0xff) as f64);
        let touch = TouchEvent::new((r >> 32) & 3, pos);
        let button = PointerButton::from_dom(((r >> 24) & 3) as i16);
        let pointer = PointerEvent::new(button).at(pos);
        let key = KeyboardEvent::new(Key::from_dom(match (r >> 40) & 3 {
            0 => "Enter",
            1 => " ",
            2 => "Tab",
            _ => "a",
        }));
        out.push(match r % 8 {
            0 => Input::TouchStart(touch),
            1 => Input::TouchMove(touch),
            2 => Input::TouchEnd(touch),
            3 => Input::PointerDown(pointer),
            4 => Input::PointerUp(pointer),
            5 => Input::PointerLeave(pointer),
            6 => Input::KeyDown(key),
            _ => Input::KeyUp(key),
        });
    }
    out
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[1_000usize, 10_000] {
        let inputs = gen_inputs(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("no_handlers_n{}", n), |b| {
            b.iter_batched(
                PressedStates::default,
                |mut press| {
                    let mut transitions = 0_usize;
                    for input in &inputs {
                        if press.handle(input.as_event()).is_some() {
                            transitions += 1;
                        }
                    }
                    black_box(transitions);
                },
                BatchSize::SmallInput,
            )
        });

        let calls = Cell::new(0_u64);
        group.bench_function(format!("all_handlers_n{}", n), |b| {
            b.iter_batched(
                || {
                    let bump = || calls.set(calls.get() + 1);
                    PressedStates::new(
                        PressedStatesOptions::new().handlers(
                            PressHandlers::new()
                                .on_touch_start(move |_| bump())
                                .on_touch_move(move |_| bump())
                                .on_touch_end(move |_| bump())
                                .on_pointer_down(move |_| bump())
                                .on_pointer_up(move |_| bump())
                                .on_pointer_leave(move |_| bump())
                                .on_key_down(move |_| bump())
                                .on_key_up(move |_| bump()),
                        ),
                    )
                },
                |mut press| {
                    for input in &inputs {
                        black_box(press.handle(input.as_event()));
                    }
                },
                BatchSize::SmallInput,
            )
        });
        black_box(calls.get());
    }
    group.finish();
}

fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync");
    group.bench_function("sync_per_render", |b| {
        let mut press = PressedStates::default();
        b.iter(|| {
            press.sync(
                PressedStatesOptions::new()
                    .disable_spacebar_click(true)
                    .handlers(PressHandlers::new().on_pointer_up(|e| {
                        black_box(e.position);
                    })),
            );
            black_box(press.pressed());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_sync);
criterion_main!(benches);
