//! Event bus for match signals.
//!
//! The simulation publishes what happened each frame; collaborators (health
//! tracking, UI, logging) drain the bus after stepping. Nothing in the
//! simulation consumes its own events.

use crossbeam_channel::{bounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

use pugil_common::FighterId;

/// Signals emitted while a bout advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// An attack window opened (not re-opened)
    AttackStarted {
        /// Attacking fighter
        fighter: FighterId,
    },
    /// An attack window expired and was cleared
    AttackEnded {
        /// Fighter whose window closed
        fighter: FighterId,
    },
    /// A live hitbox overlapped the opposing body this frame
    Hit {
        /// Fighter whose hitbox connected
        attacker: FighterId,
        /// Fighter whose body was struck
        defender: FighterId,
    },
}

/// Event bus for broadcasting match events to collaborators.
#[derive(Debug)]
pub struct EventBus {
    /// Sender for broadcasting events
    sender: Sender<MatchEvent>,
    /// Receiver for collecting events
    receiver: Receiver<MatchEvent>,
    /// Channel capacity
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl EventBus {
    /// Creates a new event bus with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// Publishes an event to the bus.
    pub fn publish(&self, event: MatchEvent) {
        // Non-blocking send - if full, event is dropped
        let _ = self.sender.try_send(event);
    }

    /// Drains all pending events.
    pub fn drain(&self) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Returns the number of pending events.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Returns the channel capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Creates a new sender handle for publishing events.
    #[must_use]
    pub fn sender(&self) -> Sender<MatchEvent> {
        self.sender.clone()
    }
}
