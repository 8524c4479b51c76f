use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::domain::orientation::{MotionSample, OrientationSample};

/// Everything that can happen to a session outside the frame loop
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimEvent {
    Orientation(OrientationSample),
    Motion(MotionSample),
    SpawnTick,
    Teardown,
}

/// Single-threaded FIFO shared between event sources and the world.
///
/// Clones share one queue: sensor and timer callbacks hold a clone and push,
/// the world drains. Nothing is applied until the world dispatches.
#[derive(Clone, Default)]
pub struct EventChannel {
    queue: Rc<RefCell<VecDeque<SimEvent>>>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: SimEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Take all queued events, oldest first
    pub fn drain(&self) -> Vec<SimEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_queue_in_order() {
        let world_side = EventChannel::new();
        let sensor_side = world_side.clone();
        let timer_side = world_side.clone();

        sensor_side.push(SimEvent::Orientation(OrientationSample::new(0.0, 1.0, 2.0)));
        timer_side.push(SimEvent::SpawnTick);
        sensor_side.push(SimEvent::Motion(MotionSample::new(0.0, 9.81, 0.0)));

        assert_eq!(world_side.len(), 3);
        let drained = world_side.drain();
        assert_eq!(drained[1], SimEvent::SpawnTick);
        assert!(matches!(drained[0], SimEvent::Orientation(_)));
        assert!(matches!(drained[2], SimEvent::Motion(_)));
        assert!(sensor_side.is_empty());
    }
}
