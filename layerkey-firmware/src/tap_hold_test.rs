use super::*;

fn ev(row: u8, column: u8, is_down: bool, time: u64) -> TimedScanKey {
    TimedScanKey(ScanKey::new(row, column, is_down), time)
}

fn pending_at(policy: InterruptPolicy, time: u64) -> TapHold<2, 3> {
    let settings = Settings::new()
        .with_tapping_term(200)
        .with_interrupt_policy(policy);
    let mut th = TapHold::new(&settings);
    th.key_down(0, 0, time);
    th.start(0, 0);
    th
}

#[test]
fn release_within_term_is_tap() {
    let mut th = pending_at(InterruptPolicy::AnyPress, 1000);
    assert_eq!(th.deadline(), Some(1200));
    assert_eq!(th.evaluate(), None);

    th.enqueue(ev(0, 0, false, 1100));
    assert_eq!(th.evaluate(), Some(Resolution::Tap));

    assert_eq!(th.finish(Phase::TapFired), Some((0, 0)));
    assert_eq!(th.pending(), None);
    assert_eq!(th.phase(0, 0), Phase::TapFired);
    assert_eq!(th.evaluate(), None);
}

#[test]
fn release_after_term_is_hold() {
    let mut th = pending_at(InterruptPolicy::AnyPress, 1000);
    th.enqueue(ev(0, 0, false, 1200));
    assert_eq!(th.evaluate(), Some(Resolution::Hold));
}

#[test]
fn interrupt_wins_the_race_with_the_timer() {
    let mut th = pending_at(InterruptPolicy::AnyPress, 1000);
    th.enqueue(ev(1, 2, true, 1199));
    th.enqueue(ev(0, 0, false, 1250));
    assert_eq!(th.evaluate(), Some(Resolution::Hold));
}

#[test]
fn press_release_policy() {
    let mut th = pending_at(InterruptPolicy::PressRelease, 1000);

    th.enqueue(ev(1, 2, true, 1050));
    assert_eq!(th.evaluate(), None);

    // a key held before the pending key does not count
    th.enqueue(ev(1, 1, false, 1060));
    assert_eq!(th.evaluate(), None);

    th.enqueue(ev(1, 2, false, 1080));
    assert_eq!(th.evaluate(), Some(Resolution::Hold));

    let mut th = pending_at(InterruptPolicy::PressRelease, 1000);
    th.enqueue(ev(1, 2, true, 1050));
    th.enqueue(ev(0, 0, false, 1100));
    assert_eq!(th.evaluate(), Some(Resolution::Tap));
}

#[test]
fn tap_count() {
    let settings = Settings::new().with_tapping_term(200);
    let mut th = TapHold::<2, 3>::new(&settings);

    assert_eq!(th.key_down(0, 0, 1000).taps, 0);
    assert_eq!(th.key_up(0, 0, 1100).taps, 1);
    assert_eq!(th.key_down(0, 0, 1150).taps, 1);
    assert_eq!(th.key_up(0, 0, 1200).taps, 2);

    // too slow to re-press
    assert_eq!(th.key_down(0, 0, 1400).taps, 0);
    assert_eq!(th.key_up(0, 0, 1450).taps, 1);

    // another key resets the streak
    th.key_down(1, 1, 1460);
    assert_eq!(th.tap_record(0, 0).taps, 0);
    th.key_up(1, 1, 1470);

    // interrupted while held
    th.key_down(0, 0, 1500);
    th.key_down(1, 2, 1510);
    assert!(th.tap_record(0, 0).interrupted);
    assert_eq!(
        th.key_up(0, 0, 1520),
        TapRecord {
            taps: 0,
            interrupted: true
        }
    );
}

#[test]
fn hold_release_is_not_a_tap() {
    let settings = Settings::new();
    let mut th = TapHold::<2, 3>::new(&settings);

    th.key_down(0, 0, 10);
    th.start(0, 0);
    th.finish(Phase::HoldFired);
    assert_eq!(th.key_up(0, 0, 20).taps, 0);
}

#[test]
fn queue_and_clear() {
    let mut th = pending_at(InterruptPolicy::AnyPress, 0);
    for i in 0..QUEUE_SIZE as u64 {
        assert!(th.enqueue(ev(1, 1, i % 2 == 0, i)));
    }
    assert!(th.is_queue_full());
    assert!(!th.enqueue(ev(1, 1, true, 99)));

    assert_eq!(th.pop_front(), Some(ev(1, 1, true, 0)));

    th.clear();
    assert_eq!(th.pending(), None);
    assert_eq!(th.pop_front(), None);
    assert_eq!(th.phase(0, 0), Phase::Idle);
    assert_eq!(th.phase(9, 9), Phase::Idle);
}
