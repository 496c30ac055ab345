// src/timer.rs
//
// Repeating timers driven by an external clock. Nothing here sleeps or spawns:
// the owner feeds the current time into `due` and gets back the handles whose
// interval elapsed, one entry per elapsed interval.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    /// Starts a timer that fires every `every` from the current clock time.
    fn schedule_repeating(&mut self, every: Duration) -> TimerHandle;

    /// Stops a timer. Cancelling an unknown or already cancelled handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);

    /// Advances the clock to `now` and returns the fired handles in firing order.
    fn due(&mut self, now: Duration) -> Vec<TimerHandle>;

    /// Earliest instant at which some live timer will fire.
    fn next_due(&self) -> Option<Duration>;

    fn live_count(&self) -> usize;
}

#[derive(Debug, Clone)]
struct Interval {
    handle: TimerHandle,
    every: Duration,
    next_at: Duration,
}

#[derive(Debug, Default)]
pub struct IntervalClock {
    now: Duration,
    next_id: u64,
    intervals: Vec<Interval>,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.intervals.iter().any(|i| i.handle == handle)
    }
}

impl Scheduler for IntervalClock {
    fn schedule_repeating(&mut self, every: Duration) -> TimerHandle {
        let every = every.max(Duration::from_millis(1));
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.intervals.push(Interval {
            handle,
            every,
            next_at: self.now + every,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }

    fn due(&mut self, now: Duration) -> Vec<TimerHandle> {
        // egui time never goes backwards, but a stale caller must not rewind us
        if now > self.now {
            self.now = now;
        }

        let mut fired: Vec<(Duration, TimerHandle)> = Vec::new();
        for interval in &mut self.intervals {
            while interval.next_at <= self.now {
                fired.push((interval.next_at, interval.handle));
                interval.next_at += interval.every;
            }
        }
        fired.sort_by_key(|(at, _)| *at);
        fired.into_iter().map(|(_, h)| h).collect()
    }

    fn next_due(&self) -> Option<Duration> {
        self.intervals.iter().map(|i| i.next_at).min()
    }

    fn live_count(&self) -> usize {
        self.intervals.len()
    }
}
