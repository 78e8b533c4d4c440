//! Assertion helpers for supervisor event streams.

use oc_protocol::{SupervisorEvent, WaitKind};
use std::time::Duration;
use tokio::time::Instant;

/// Cycle numbers that failed, in order.
#[allow(dead_code)]
pub fn failed_cycles(events: &[SupervisorEvent]) -> Vec<u64> {
    events
        .iter()
        .filter_map(|e| match e {
            SupervisorEvent::CycleFailed { cycle, .. } => Some(*cycle),
            _ => None,
        })
        .collect()
}

/// Every sleep the loop announced, in order.
#[allow(dead_code)]
pub fn sleeps(events: &[SupervisorEvent]) -> Vec<(WaitKind, Duration)> {
    events
        .iter()
        .filter_map(|e| match e {
            SupervisorEvent::Sleeping { state, duration } => Some((*state, *duration)),
            _ => None,
        })
        .collect()
}

/// Gaps between consecutive instants.
#[allow(dead_code)]
pub fn gaps(instants: &[Instant]) -> Vec<Duration> {
    instants.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Assert the stream starts with `Started` and ends with `Stopped`.
#[allow(dead_code)]
pub fn assert_event_sequence(events: &[SupervisorEvent]) {
    if events.is_empty() {
        panic!("Event sequence is empty");
    }

    assert!(
        matches!(events[0], SupervisorEvent::Started { .. }),
        "First event should be Started, got: {:?}",
        events[0]
    );

    let last = events.last().unwrap();
    assert!(
        matches!(last, SupervisorEvent::Stopped { .. }),
        "Last event should be Stopped, got: {:?}",
        last
    );
}
