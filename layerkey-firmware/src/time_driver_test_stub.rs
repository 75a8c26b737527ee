extern crate std;

use core::{cell::Cell, task::Waker};
use embassy_time_driver::{AlarmHandle, Driver};
use embassy_time_queue_driver::TimerQueue;

/// A simulated clock. Time only moves when a test sets it or when a timer is scheduled, in which
/// case it jumps straight to the timer's expiry.
struct TestTimeDriver;

impl Driver for TestTimeDriver {
    fn now(&self) -> u64 {
        NOW.with(Cell::get)
    }

    unsafe fn allocate_alarm(&self) -> Option<AlarmHandle> {
        None
    }

    fn set_alarm_callback(&self, _alarm: AlarmHandle, _callback: fn(*mut ()), _ctx: *mut ()) {}

    fn set_alarm(&self, _alarm: AlarmHandle, _timestamp: u64) -> bool {
        false
    }
}

struct TestTimerQueue;

impl TimerQueue for TestTimerQueue {
    fn schedule_wake(&'static self, at: u64, waker: &Waker) {
        NOW.with(|now| {
            if at > now.get() {
                now.set(at);
            }
        });

        waker.wake_by_ref();
    }
}

std::thread_local! {
    static NOW: Cell<u64> = const { Cell::new(0) };
}

embassy_time_driver::time_driver_impl!(static TIME_DRIVER: TestTimeDriver = TestTimeDriver);
embassy_time_queue_driver::timer_queue_impl!(static TIMER_QUEUE: TestTimerQueue = TestTimerQueue);

/// Set the clock for the current test thread, in milliseconds.
pub fn set_time(ms: u64) {
    NOW.with(|now| now.set(embassy_time::Instant::from_millis(ms).as_ticks()));
}
