use super::event::Event;

/// Default number of events a queue holds
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Fixed-capacity FIFO ring of events.
///
/// One producer (the notification translator) and one consumer (the
/// application loop). Both sides go through `&mut self`, so there is no
/// locking. When the ring is full new events are dropped and counted; the
/// producer never blocks.
///
/// The ring has one slot more than `capacity`: it is empty when
/// `head == tail` and full when advancing `tail` would land on `head`.
#[derive(Debug, Clone)]
pub struct EventQueue {
    slots: Box<[Option<Event>]>,
    head: usize,
    tail: usize,
    dropped: u64,
}

impl EventQueue {
    /// Create a queue with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Create a queue that holds `capacity` events (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = capacity.max(1) + 1;
        Self {
            slots: vec![None; slots].into_boxed_slice(),
            head: 0,
            tail: 0,
            dropped: 0,
        }
    }

    /// Append an event, or drop it if the queue is full.
    ///
    /// Returns `true` if the event was queued.
    pub fn push(&mut self, event: Event) -> bool {
        let next = self.advance(self.tail);
        if next == self.head {
            self.dropped += 1;
            log::trace!("event queue full, dropped {:?}", event);
            return false;
        }
        self.slots[self.tail] = Some(event);
        self.tail = next;
        true
    }

    /// Remove the oldest event
    pub fn pop(&mut self) -> Option<Event> {
        if self.head == self.tail {
            return None;
        }
        let event = self.slots[self.head].take();
        self.head = self.advance(self.head);
        event
    }

    /// Oldest event without removing it
    pub fn peek(&self) -> Option<&Event> {
        if self.head == self.tail {
            None
        } else {
            self.slots[self.head].as_ref()
        }
    }

    pub fn has_pending(&self) -> bool {
        self.head != self.tail
    }

    pub fn is_empty(&self) -> bool {
        !self.has_pending()
    }

    pub fn len(&self) -> usize {
        (self.tail + self.slots.len() - self.head) % self.slots.len()
    }

    /// Number of events the queue holds when full
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_full(&self) -> bool {
        self.advance(self.tail) == self.head
    }

    /// Events dropped because the queue was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Discard all queued events. The drop counter is kept.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Pop events until the queue is empty
    pub fn drain(&mut self) -> Drain<'_> {
        Drain { queue: self }
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Draining iterator returned by [`EventQueue::drain`]
pub struct Drain<'a> {
    queue: &'a mut EventQueue,
}

impl Iterator for Drain<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}
