#![forbid(unsafe_code)]

//! Property-based invariant tests for the mounted water button.
//!
//! 1. Idempotent settle: after any gesture sequence, once the button is idle
//!    and no frame is pending, the level is exactly DEFAULT
//! 2. Every level write stays within [MAX, MIN]
//! 3. Without an amount, no sequence issues a request
//! 4. Every issued request is balanced by a completed gesture: at most one
//!    increment per click-classified lift
//! 5. Whenever no animation is in flight, the level is exactly MAX, DEFAULT,
//!    or MIN

use core::time::Duration;

use droplet_core::{CounterAction, LevelBounds, PointerInput};
use droplet_runtime::ButtonConfig;
use droplet_web::dom::{AMOUNT_ATTRIBUTE, BUTTON_ID};
use droplet_web::{DeterministicClock, StaticDom, WebButton, mount};
use proptest::prelude::*;

const FRAME_MS: u64 = 16;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Step {
    Input(PointerInput, u64),
    Frames(u8),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (prop::sample::select(PointerInput::ALL.to_vec()), 0u64..400)
            .prop_map(|(input, gap)| Step::Input(input, gap)),
        2 => (0u8..120).prop_map(Step::Frames),
    ]
}

fn steps_strategy() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(step_strategy(), 0..40)
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn mounted(amount: Option<&str>) -> WebButton {
    let mut dom = StaticDom::water_button();
    if let Some(a) = amount {
        dom = dom.with_attribute(BUTTON_ID, AMOUNT_ATTRIBUTE, a);
    }
    mount(&dom, DeterministicClock::new(), ButtonConfig::default()).unwrap()
}

/// Replay `steps`, then lift and let every animation finish.
fn replay(b: &mut WebButton, steps: &[Step]) -> u64 {
    let mut t = 0u64;
    for step in steps {
        match *step {
            Step::Input(input, gap) => {
                t += gap;
                b.dispatch(input, Duration::from_millis(t));
            }
            Step::Frames(n) => {
                for _ in 0..n {
                    t += FRAME_MS;
                    b.frame(Duration::from_millis(t));
                }
            }
        }
    }

    t += 1_000;
    b.dispatch(PointerInput::MouseUp, Duration::from_millis(t));
    while b.wants_frame() {
        t += FRAME_MS;
        b.frame(Duration::from_millis(t));
    }
    t
}

// ═══════════════════════════════════════════════════════════════════════
// 1–2. Idempotent settle, bounded writes
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn any_sequence_settles_at_default(steps in steps_strategy()) {
        let mut b = mounted(Some("10"));
        replay(&mut b, &steps);

        prop_assert!(b.phase().is_idle(), "phase {:?}", b.phase());
        prop_assert!(!b.button().is_animating());
        prop_assert_eq!(b.level(), 65.0);
        prop_assert_eq!(b.surface().value(), Some(65.0));
        for &w in b.surface().writes() {
            prop_assert!((3.0..=92.0).contains(&w), "write {} out of range", w);
        }
    }

    #[test]
    fn settling_twice_changes_nothing(steps in steps_strategy()) {
        let mut b = mounted(Some("10"));
        let t = replay(&mut b, &steps);
        let writes = b.surface().writes().len();

        b.dispatch(PointerInput::MouseUp, Duration::from_millis(t + 5_000));
        b.dispatch(PointerInput::MouseLeave, Duration::from_millis(t + 6_000));
        prop_assert_eq!(b.frame(Duration::from_millis(t + 7_000)), None);
        prop_assert_eq!(b.surface().writes().len(), writes);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3–4. Notifications
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn disabled_notifications_never_issue(steps in steps_strategy()) {
        let mut b = mounted(None);
        replay(&mut b, &steps);
        prop_assert!(b.drain_requests().is_empty());
    }

    #[test]
    fn increments_never_exceed_presses(steps in steps_strategy()) {
        let presses = steps
            .iter()
            .filter(|s| matches!(s, Step::Input(PointerInput::MouseDown | PointerInput::TouchStart, _)))
            .count();
        let mut b = mounted(Some("10"));
        replay(&mut b, &steps);

        let requests = b.drain_requests();
        let increments = requests
            .iter()
            .filter(|r| r.action == CounterAction::Increment)
            .count();
        let decrements = requests.len() - increments;
        prop_assert!(increments <= presses);
        prop_assert!(decrements <= presses);
        for r in &requests {
            prop_assert_eq!(r.amount.as_str(), "10");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Resting levels
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn idle_animator_rests_on_a_named_level(steps in steps_strategy()) {
        let bounds = LevelBounds::default();
        let mut b = mounted(Some("10"));
        let mut t = 0u64;
        for step in &steps {
            match *step {
                Step::Input(input, gap) => {
                    t += gap;
                    b.dispatch(input, Duration::from_millis(t));
                }
                Step::Frames(n) => {
                    for _ in 0..n {
                        t += FRAME_MS;
                        b.frame(Duration::from_millis(t));
                    }
                }
            }
            if !b.button().is_animating() {
                prop_assert!(
                    bounds.rest_level(b.level()).is_some(),
                    "at rest on {} after {:?}",
                    b.level(),
                    step
                );
            }
        }
    }
}
