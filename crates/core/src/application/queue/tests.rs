//! Tests for the single-queue monitor.

use super::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn item(s: &str) -> Item {
    s.to_string()
}

/// Spin until `count` poppers are parked on the queue
fn wait_for_waiters(queue: &Queue, count: usize) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while queue.waiters() < count {
        assert!(Instant::now() < deadline, "waiters never parked");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn test_fifo_order() {
    let queue = Queue::new(0);

    queue.push(item("a"));
    queue.push(item("b"));
    queue.push(item("c"));

    assert_eq!(queue.pop().as_deref(), Some("a"));
    assert_eq!(queue.pop().as_deref(), Some("b"));
    assert_eq!(queue.pop().as_deref(), Some("c"));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_push_then_pop_no_loss() {
    let queue = Queue::new(0);

    queue.push(item("only"));
    assert_eq!(queue.pop().as_deref(), Some("only"));
}

#[test]
fn test_peek_does_not_remove() {
    let queue = Queue::new(0);
    assert_eq!(queue.peek(), None);

    queue.push(item("first"));
    queue.push(item("second"));

    assert_eq!(queue.peek().as_deref(), Some("first"));
    assert_eq!(queue.peek().as_deref(), Some("first"));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_clear_is_idempotent() {
    let queue = Queue::new(0);
    queue.push(item("1"));
    queue.push(item("2"));

    assert_eq!(queue.clear(), 2);
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);

    assert_eq!(queue.clear(), 0);
    assert_eq!(queue.len(), 0);

    // Queue is still usable afterwards
    queue.push(item("3"));
    assert_eq!(queue.pop().as_deref(), Some("3"));
}

#[test]
fn test_pop_with_timeout_returns_present_item_immediately() {
    let queue = Queue::new(0);
    queue.push(item("ready"));

    let start = Instant::now();
    assert_eq!(queue.pop_with_timeout(5_000).as_deref(), Some("ready"));
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn test_pop_with_timeout_non_positive_does_not_wait() {
    let queue = Queue::new(0);

    let start = Instant::now();
    assert_eq!(queue.pop_with_timeout(0), None);
    assert_eq!(queue.pop_with_timeout(-100), None);
    assert!(start.elapsed() < Duration::from_millis(50));
    assert_eq!(queue.waiters(), 0);
}

#[test]
fn test_pop_with_timeout_expires_after_full_wait() {
    let queue = Queue::new(0);

    let start = Instant::now();
    assert_eq!(queue.pop_with_timeout(50), None);
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert_eq!(queue.waiters(), 0);
}

#[test]
fn test_pop_with_timeout_wakes_on_push() {
    let queue = Arc::new(Queue::new(0));

    let waiter = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let start = Instant::now();
            let popped = queue.pop_with_timeout(5_000);
            (popped, start.elapsed())
        })
    };

    thread::sleep(Duration::from_millis(10));
    queue.push(item("x"));

    let (popped, elapsed) = waiter.join().unwrap();
    assert_eq!(popped.as_deref(), Some("x"));
    assert!(elapsed < Duration::from_millis(2_500), "took {:?}", elapsed);
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_exactly_one_waiter_claims_single_push() {
    let queue = Arc::new(Queue::new(0));

    let waiters: Vec<_> = (0..2)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.pop_with_timeout(500))
        })
        .collect();

    wait_for_waiters(&queue, 2);
    queue.push(item("once"));

    let results: Vec<Option<Item>> = waiters.into_iter().map(|h| h.join().unwrap()).collect();
    let claimed: Vec<_> = results.iter().flatten().collect();

    assert_eq!(claimed, vec![&item("once")]);
    assert_eq!(results.iter().filter(|r| r.is_none()).count(), 1);
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_wake_without_item_keeps_original_deadline() {
    let queue = Arc::new(Queue::new(0));

    let waiter = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let start = Instant::now();
            let popped = queue.pop_with_timeout(300);
            (popped, start.elapsed())
        })
    };

    wait_for_waiters(&queue, 1);
    thread::sleep(Duration::from_millis(200));

    // Signal a push but claim the item before the waiter can relock
    {
        let mut state = queue.state.lock();
        state.items.push_back(item("stolen"));
        queue.available.notify_one();
        assert_eq!(state.take_front().as_deref(), Some("stolen"));
    }

    let (popped, elapsed) = waiter.join().unwrap();
    assert_eq!(popped, None);
    assert!(elapsed >= Duration::from_millis(300));
    // A timer restarted on wake would run until ~500ms
    assert!(elapsed < Duration::from_millis(480), "deadline extended: {:?}", elapsed);
}

#[test]
fn test_spurious_notify_does_not_extend_wait() {
    let queue = Arc::new(Queue::new(0));

    let waiter = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let start = Instant::now();
            let popped = queue.pop_with_timeout(200);
            (popped, start.elapsed())
        })
    };

    wait_for_waiters(&queue, 1);
    for _ in 0..10 {
        queue.available.notify_all();
        thread::sleep(Duration::from_millis(15));
    }

    let (popped, elapsed) = waiter.join().unwrap();
    assert_eq!(popped, None);
    assert!(elapsed >= Duration::from_millis(200));
    assert!(elapsed < Duration::from_millis(1_000), "deadline extended: {:?}", elapsed);
}

#[test]
fn test_clear_does_not_wake_waiters() {
    let queue = Arc::new(Queue::new(0));

    let waiter = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.pop_with_timeout(2_000))
    };

    wait_for_waiters(&queue, 1);
    queue.clear();
    thread::sleep(Duration::from_millis(20));
    assert_eq!(queue.waiters(), 1);

    queue.push(item("after-clear"));
    assert_eq!(waiter.join().unwrap().as_deref(), Some("after-clear"));
}

#[test]
fn test_many_waiters_each_claim_one_push() {
    let queue = Arc::new(Queue::new(0));
    let consumers = 8;

    let handles: Vec<_> = (0..consumers)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.pop_with_timeout(5_000))
        })
        .collect();

    wait_for_waiters(&queue, consumers);
    for i in 0..consumers {
        queue.push(format!("job-{}", i));
    }

    let mut claimed: Vec<Item> = handles
        .into_iter()
        .map(|h| h.join().unwrap().expect("every waiter gets an item"))
        .collect();
    claimed.sort();
    claimed.dedup();

    assert_eq!(claimed.len(), consumers);
    assert_eq!(queue.waiters(), 0);
}

#[test]
fn test_concurrent_producers_consumers_no_loss_no_duplicates() {
    let queue = Arc::new(Queue::new(0));
    let producers = 4;
    let per_producer = 250;
    let total = producers * per_producer;
    let barrier = Arc::new(Barrier::new(producers + producers));

    let consumers: Vec<_> = (0..producers)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut got = Vec::new();
                while let Some(item) = queue.pop_with_timeout(200) {
                    got.push(item);
                }
                got
            })
        })
        .collect();

    let producer_handles: Vec<_> = (0..producers)
        .map(|p| {
            let queue = Arc::clone(&queue);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_producer {
                    queue.push(format!("{}-{}", p, i));
                }
            })
        })
        .collect();

    for handle in producer_handles {
        handle.join().unwrap();
    }

    let per_consumer: Vec<Vec<Item>> = consumers.into_iter().map(|h| h.join().unwrap()).collect();

    // Each producer's items come out in its own push order
    for consumed in &per_consumer {
        for p in 0..producers {
            let prefix = format!("{}-", p);
            let seq: Vec<usize> = consumed
                .iter()
                .filter_map(|s| s.strip_prefix(&prefix))
                .map(|n| n.parse().unwrap())
                .collect();
            assert!(seq.windows(2).all(|w| w[0] < w[1]));
        }
    }

    let mut all: Vec<Item> = per_consumer.into_iter().flatten().collect();
    assert_eq!(all.len(), total);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);

    let stats = queue.stats("load");
    assert_eq!(stats.pushed_total, total as u64);
    assert_eq!(stats.popped_total, total as u64);
}

#[test]
fn test_stats_snapshot() {
    let queue = Queue::new(42);
    queue.push(item("a"));
    queue.push(item("b"));
    queue.pop();

    let stats = queue.stats("jobs");
    assert_eq!(stats.name, "jobs");
    assert_eq!(stats.length, 1);
    assert_eq!(stats.waiters, 0);
    assert_eq!(stats.pushed_total, 2);
    assert_eq!(stats.popped_total, 1);
    assert_eq!(stats.created_at_ms, 42);
}

#[test]
fn test_huge_timeout_does_not_overflow() {
    let queue = Arc::new(Queue::new(0));

    let waiter = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.pop_with_timeout(i64::MAX))
    };

    wait_for_waiters(&queue, 1);
    queue.push(item("eventually"));
    assert_eq!(waiter.join().unwrap().as_deref(), Some("eventually"));
}

#[test]
fn test_concurrent_pushes_report_distinct_lengths() {
    let queue = Arc::new(Queue::new(0));
    let pushers = 16;
    let barrier = Arc::new(Barrier::new(pushers));

    let handles: Vec<_> = (0..pushers)
        .map(|i| {
            let queue = Arc::clone(&queue);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                queue.push(format!("p-{}", i))
            })
        })
        .collect();

    let mut lengths: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    lengths.sort();

    // Each push sees its own append and nothing later
    assert_eq!(lengths, (1..=pushers).collect::<Vec<_>>());
}
