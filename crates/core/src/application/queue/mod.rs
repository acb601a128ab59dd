// Queue - a single named FIFO with its own monitor

#[cfg(test)]
mod tests;

use crate::domain::{Item, QueueName, QueueStats};
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Everything guarded by the queue lock
#[derive(Default)]
struct QueueState {
    items: VecDeque<Item>,
    waiters: usize,
    pushed_total: u64,
    popped_total: u64,
}

impl QueueState {
    fn take_front(&mut self) -> Option<Item> {
        let item = self.items.pop_front();
        if item.is_some() {
            self.popped_total += 1;
        }
        item
    }
}

/// Thread-safe FIFO queue with timeout-bounded blocking pop.
///
/// `items` is only touched while `state` is locked. Blocking pops park on
/// `available`, which releases the lock for the duration of the wait.
pub struct Queue {
    state: Mutex<QueueState>,
    available: Condvar,
    created_at_ms: i64,
}

impl Queue {
    pub fn new(created_at_ms: i64) -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            available: Condvar::new(),
            created_at_ms,
        }
    }

    /// Append an item and wake one blocked popper (if any).
    ///
    /// Returns the length observed under the same lock as the append.
    pub fn push(&self, item: Item) -> usize {
        let mut state = self.state.lock();
        state.items.push_back(item);
        state.pushed_total += 1;
        let length = state.items.len();
        drop(state);

        self.available.notify_one();
        length
    }

    /// Remove the front item, or `None` if the queue is empty
    pub fn pop(&self) -> Option<Item> {
        self.state.lock().take_front()
    }

    /// Remove the front item, waiting up to `timeout_ms` for one.
    ///
    /// Returns immediately when an item is present or `timeout_ms <= 0`.
    /// The deadline is fixed on entry: wakes that find the queue already
    /// drained by another consumer keep waiting only for what is left.
    pub fn pop_with_timeout(&self, timeout_ms: i64) -> Option<Item> {
        let mut state = self.state.lock();
        if let Some(item) = state.take_front() {
            return Some(item);
        }
        if timeout_ms <= 0 {
            return None;
        }

        let deadline = deadline_after(timeout_ms);
        state.waiters += 1;

        let item = loop {
            match deadline {
                Some(deadline) => {
                    if self.available.wait_until(&mut state, deadline).timed_out() {
                        // An item may have landed between the timeout and relock
                        break state.take_front();
                    }
                }
                None => self.available.wait(&mut state),
            }

            if let Some(item) = state.take_front() {
                break Some(item);
            }
        };

        state.waiters -= 1;
        item
    }

    /// Front item without removing it
    pub fn peek(&self) -> Option<Item> {
        self.state.lock().items.front().cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all items, returning how many were discarded.
    ///
    /// Parked poppers are left waiting for the next push or their deadline.
    pub fn clear(&self) -> usize {
        let mut state = self.state.lock();
        std::mem::take(&mut state.items).len()
    }

    /// Number of callers currently parked in `pop_with_timeout`
    pub fn waiters(&self) -> usize {
        self.state.lock().waiters
    }

    pub fn stats(&self, name: &str) -> QueueStats {
        let state = self.state.lock();
        QueueStats {
            name: QueueName::from(name),
            length: state.items.len(),
            waiters: state.waiters,
            pushed_total: state.pushed_total,
            popped_total: state.popped_total,
            created_at_ms: self.created_at_ms,
        }
    }
}

/// Absolute deadline for a wait, or `None` if it lies beyond what `Instant` can represent
fn deadline_after(timeout_ms: i64) -> Option<Instant> {
    Instant::now().checked_add(Duration::from_millis(timeout_ms.unsigned_abs()))
}
