#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use droplet_core::PointerInput;
use droplet_runtime::ButtonConfig;
use droplet_web::dom::{AMOUNT_ATTRIBUTE, BUTTON_ID};
use droplet_web::{DeterministicClock, StaticDom, mount};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    MouseDown(u16),
    MouseUp(u16),
    MouseLeave(u16),
    TouchStart(u16),
    TouchEnd(u16),
    TouchCancel(u16),
    /// Frame after `gap` ms; `gap` may be zero.
    Frame(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let dom = StaticDom::water_button().with_attribute(BUTTON_ID, AMOUNT_ATTRIBUTE, "1");
    let Ok(mut button) = mount(&dom, DeterministicClock::new(), ButtonConfig::default()) else {
        return;
    };

    let mut t = 0u64;
    for op in ops.iter().take(512) {
        let (input, gap) = match *op {
            Op::MouseDown(g) => (PointerInput::MouseDown, g),
            Op::MouseUp(g) => (PointerInput::MouseUp, g),
            Op::MouseLeave(g) => (PointerInput::MouseLeave, g),
            Op::TouchStart(g) => (PointerInput::TouchStart, g),
            Op::TouchEnd(g) => (PointerInput::TouchEnd, g),
            Op::TouchCancel(g) => (PointerInput::TouchCancel, g),
            Op::Frame(g) => {
                t += u64::from(g);
                button.frame(Duration::from_millis(t));
                continue;
            }
        };
        t += u64::from(gap);
        button.dispatch(input, Duration::from_millis(t));

        let level = button.level();
        assert!((3.0..=92.0).contains(&level), "level {level} out of bounds");
    }

    // Release and drain: the button must come to rest at DEFAULT.
    t += 10_000;
    button.dispatch(PointerInput::MouseUp, Duration::from_millis(t));
    let mut frames = 0;
    while button.wants_frame() {
        t += 16;
        button.frame(Duration::from_millis(t));
        frames += 1;
        assert!(frames < 100_000, "animation never settled");
    }
    assert!(button.phase().is_idle());
    assert_eq!(button.level(), 65.0);
});
