use hatch_core::{CharacterId, GrowthStage};

use crate::death::DeathCause;

/// What kind of care event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareEventKind {
    /// A new character was created.
    Born {
        /// Days until the death timestamp at creation.
        lifespan_days: u32,
    },
    /// The character was fed.
    Fed {
        /// Hit points actually gained after capping.
        recovered: u32,
        /// Whether the feed fell inside the cooldown window.
        within_cooldown: bool,
    },
    /// Favorability was raised by playing.
    Played {
        /// Requested favorability gain before capping.
        amount: u32,
    },
    /// The toilet was cleaned.
    Cleaned,
    /// A decay tick was applied.
    Decayed {
        /// The shared decrement drawn for this tick.
        amount: u32,
    },
    /// The growth stage changed, or maturity was applied again.
    Evolved {
        /// Stage before the transition.
        from: GrowthStage,
        /// Stage after the transition.
        to: GrowthStage,
    },
    /// The character died.
    Died {
        /// Why it died.
        cause: DeathCause,
    },
}

/// A record of something that happened to a character.
#[derive(Debug, Clone)]
pub struct CareEvent {
    /// Position of this event in the log, starting at 1.
    pub seq: u64,
    /// The character the event belongs to.
    pub character: CharacterId,
    /// The specific kind of event that occurred.
    pub kind: CareEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

/// Accumulates care events across a session.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<CareEvent>,
    max_events: usize,
    next_seq: u64,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
            next_seq: 0,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    /// Returns the sequence number assigned to it.
    pub fn push(
        &mut self,
        character: CharacterId,
        kind: CareEventKind,
        description: impl Into<String>,
    ) -> u64 {
        self.next_seq += 1;
        self.events.push(CareEvent {
            seq: self.next_seq,
            character,
            kind,
            description: description.into(),
        });
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
        self.next_seq
    }

    /// Return a slice of all retained events.
    pub fn events(&self) -> &[CareEvent] {
        &self.events
    }

    /// Return all events with a sequence number greater than `seq`.
    pub fn events_since(&self, seq: u64) -> Vec<&CareEvent> {
        self.events.iter().filter(|e| e.seq > seq).collect()
    }

    /// Return all events belonging to the given character.
    pub fn events_for(&self, id: CharacterId) -> Vec<&CareEvent> {
        self.events.iter().filter(|e| e.character == id).collect()
    }

    /// The most recent event, if any.
    pub fn latest(&self) -> Option<&CareEvent> {
        self.events.last()
    }

    /// Return the number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events are retained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all retained events. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_seq() {
        let mut log = EventLog::new(0);
        let id = CharacterId::new();
        assert_eq!(log.push(id, CareEventKind::Cleaned, "a"), 1);
        assert_eq!(log.push(id, CareEventKind::Cleaned, "b"), 2);
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|e| e.seq), Some(2));
    }

    #[test]
    fn max_events_trims_oldest() {
        let mut log = EventLog::new(2);
        let id = CharacterId::new();
        for i in 0..5 {
            log.push(id, CareEventKind::Decayed { amount: i }, "tick");
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].seq, 4);
        assert_eq!(log.events()[1].seq, 5);
    }

    #[test]
    fn filters_by_character() {
        let mut log = EventLog::new(0);
        let a = CharacterId::new();
        let b = CharacterId::new();
        log.push(a, CareEventKind::Cleaned, "a cleaned");
        log.push(b, CareEventKind::Played { amount: 3 }, "b played");
        log.push(
            a,
            CareEventKind::Died {
                cause: DeathCause::Exhausted,
            },
            "a died",
        );
        assert_eq!(log.events_for(a).len(), 2);
        assert_eq!(log.events_for(b).len(), 1);
    }

    #[test]
    fn events_since_skips_seen() {
        let mut log = EventLog::new(0);
        let id = CharacterId::new();
        let first = log.push(id, CareEventKind::Cleaned, "one");
        log.push(id, CareEventKind::Cleaned, "two");
        log.push(id, CareEventKind::Cleaned, "three");
        let fresh = log.events_since(first);
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].description, "two");
    }

    #[test]
    fn clear_keeps_sequence_running() {
        let mut log = EventLog::new(0);
        let id = CharacterId::new();
        log.push(id, CareEventKind::Cleaned, "x");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.push(id, CareEventKind::Cleaned, "y"), 2);
    }

    #[test]
    fn empty_queries() {
        let log = EventLog::default();
        assert!(log.events().is_empty());
        assert!(log.latest().is_none());
        assert!(log.events_for(CharacterId::new()).is_empty());
    }
}
