//! Single-threaded event queue driven by a manual clock

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::events::{Event, Timer};

#[derive(Debug)]
struct Entry {
    due: Duration,
    seq: u64,
    timer: Timer,
    event: Event,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the heap pops the earliest (due, seq) first
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

/// Pending timers keyed by simulated time.
///
/// Time only moves when the owner calls [`Scheduler::pop_due`] or
/// [`Scheduler::set_now`]; events due at the same instant fire in the order
/// they were scheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward. Never moves it backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn schedule(&mut self, timer: Timer, after: Duration, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due: self.now + after,
            seq,
            timer,
            event,
        });
    }

    /// Drop every pending event owned by `timer`. Returns how many were dropped.
    pub fn cancel(&mut self, timer: Timer) -> usize {
        let before = self.queue.len();
        self.queue.retain(|entry| entry.timer != timer);
        before - self.queue.len()
    }

    /// Pop the next event due at or before `until`, moving the clock to its due time
    pub fn pop_due(&mut self, until: Duration) -> Option<Event> {
        if self.queue.peek()?.due > until {
            return None;
        }
        let entry = self.queue.pop()?;
        self.set_now(entry.due);
        Some(entry.event)
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|entry| entry.due)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn pending_for(&self, timer: Timer) -> usize {
        self.queue.iter().filter(|entry| entry.timer == timer).count()
    }
}
