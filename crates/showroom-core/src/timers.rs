//! Deterministic one-shot timers fired from the frame tick.
//!
//! Deadlines are measured on the caller's clock (`Duration` since an arbitrary
//! origin). Nothing fires on its own: `drain_due` hands back every action whose
//! deadline has passed, in deadline order, ties broken by scheduling order.

use std::time::Duration;

#[derive(Clone, Debug)]
struct Pending<A> {
    deadline: Duration,
    action: A,
}

#[derive(Clone, Debug)]
pub struct TimerQueue<A> {
    pending: Vec<Pending<A>>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Duration, action: A) {
        // insert after equal deadlines to keep scheduling order
        let at = self.pending.partition_point(|p| p.deadline <= deadline);
        self.pending.insert(at, Pending { deadline, action });
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn drain_due(&mut self, now: Duration) -> Vec<A> {
        let due = self.pending.partition_point(|p| p.deadline <= now);
        self.pending.drain(..due).map(|p| p.action).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
