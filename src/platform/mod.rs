//! Platform abstraction layer
//!
//! Host-side plumbing shared by the browser and native entry points:
//! - Fixed-period tick timer driven by frame timestamps
//! - Event queue that keeps input and ticks in arrival order

use std::collections::VecDeque;

use crate::consts::MAX_TICKS_PER_FRAME;
use crate::sim::Direction;

/// Fixed-period timer fed with variable frame deltas
#[derive(Debug, Clone)]
pub struct FixedTimer {
    interval_ms: f64,
    accumulator: f64,
    last_time: Option<f64>,
}

impl FixedTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed an absolute timestamp (ms); returns how many ticks are due.
    ///
    /// The first call only primes the clock. Backlog beyond
    /// `MAX_TICKS_PER_FRAME` is dropped.
    pub fn advance_to(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_time.replace(now_ms) else {
            return 0;
        };
        self.advance_by((now_ms - last).max(0.0))
    }

    /// Feed a delta (ms); returns how many ticks are due
    pub fn advance_by(&mut self, dt_ms: f64) -> u32 {
        self.accumulator += dt_ms;

        let mut ticks = 0;
        while self.accumulator >= self.interval_ms && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.interval_ms;
            ticks += 1;
        }

        // Tab was hidden or the page stalled: don't try to catch up
        if self.accumulator >= self.interval_ms {
            log::debug!("Dropping {:.0} ms of tick backlog", self.accumulator);
            self.accumulator %= self.interval_ms;
        }
        ticks
    }
}

/// Something the host wants the game to process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A directional key press
    Key(Direction),
    /// One render tick elapsed
    Tick,
}

/// FIFO of host events, drained once per frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<HostEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_timestamp_only_primes() {
        let mut timer = FixedTimer::new(100.0);
        assert_eq!(timer.advance_to(5000.0), 0);
        assert_eq!(timer.advance_to(5099.0), 0);
        assert_eq!(timer.advance_to(5100.0), 1);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut timer = FixedTimer::new(100.0);
        let ticks: u32 = (0..10).map(|_| timer.advance_by(16.0)).sum();
        // 160 ms elapsed
        assert_eq!(ticks, 1);
        assert_eq!(timer.advance_by(40.0), 1);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut timer = FixedTimer::new(100.0);
        assert_eq!(timer.advance_by(10_000.0), MAX_TICKS_PER_FRAME);
        // Backlog dropped, so the next short frame doesn't burst
        assert_eq!(timer.advance_by(10.0), 0);
    }

    #[test]
    fn test_queue_preserves_arrival_order() {
        let mut queue = EventQueue::new();
        queue.push(HostEvent::Key(Direction::Left));
        queue.push(HostEvent::Tick);
        queue.push(HostEvent::Key(Direction::Up));
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.pop(), Some(HostEvent::Key(Direction::Left)));
        assert_eq!(queue.pop(), Some(HostEvent::Tick));
        assert_eq!(queue.pop(), Some(HostEvent::Key(Direction::Up)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
