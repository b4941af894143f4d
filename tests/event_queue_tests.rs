use pixel_display::{Event, EventKind, EventQueue, Key, MouseButton};

fn sample_events(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| match i % 4 {
            0 => Event::KeyDown { key: Key(i as u32) },
            1 => Event::MouseMove {
                x: i as i32,
                y: -(i as i32),
            },
            2 => Event::MousePress {
                button: MouseButton::Right,
                x: 1,
                y: i as i32,
            },
            _ => Event::Resize {
                width: i as u32,
                height: 2 * i as u32,
            },
        })
        .collect()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_fifo_for_every_fill_level() {
    let capacity = 64;
    for n in 0..=capacity {
        let mut queue = EventQueue::with_capacity(capacity);
        let events = sample_events(n);
        for event in &events {
            assert!(queue.push(*event));
        }
        let popped: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(popped, events, "fill level {}", n);
        assert_eq!(queue.dropped(), 0);
    }
}

#[test]
fn test_interleaved_push_pop_keeps_order() {
    // Three in, two out per round: the backlog peaks at 15 events
    let mut queue = EventQueue::with_capacity(16);
    let events = sample_events(40);
    let mut popped = Vec::new();

    for chunk in events.chunks(3) {
        for event in chunk {
            assert!(queue.push(*event));
        }
        popped.extend(queue.pop());
        popped.extend(queue.pop());
    }
    popped.extend(queue.drain());

    assert_eq!(queue.dropped(), 0);
    assert_eq!(popped, events);
}

#[test]
fn test_interleaved_overflow_accounts_for_every_event() {
    let mut queue = EventQueue::with_capacity(5);
    let events = sample_events(40);
    let mut popped = Vec::new();

    for chunk in events.chunks(3) {
        for event in chunk {
            queue.push(*event);
        }
        popped.extend(queue.pop());
        popped.extend(queue.pop());
    }
    popped.extend(queue.drain());

    assert!(queue.dropped() > 0);
    assert_eq!(popped.len() as u64 + queue.dropped(), events.len() as u64);

    // Survivors keep their relative order
    let mut rest = events.iter();
    for event in &popped {
        assert!(rest.any(|e| e == event), "{:?} out of order", event);
    }
}

// ============================================================================
// Overflow
// ============================================================================

#[test]
fn test_overflow_keeps_first_capacity_events() {
    let capacity = 64;
    let mut queue = EventQueue::with_capacity(capacity);
    let events = sample_events(capacity + 1);

    for event in &events {
        queue.push(*event);
    }
    assert_eq!(queue.dropped(), 1);

    for expected in &events[..capacity] {
        assert!(queue.has_pending());
        assert_eq!(queue.pop().as_ref(), Some(expected));
    }
    assert!(!queue.has_pending());
    assert_eq!(EventKind::from(queue.pop()), EventKind::None);
}

#[test]
fn test_overflow_never_overwrites_queued_events() {
    let mut queue = EventQueue::with_capacity(3);
    let events = sample_events(3);
    for event in &events {
        queue.push(*event);
    }
    for _ in 0..100 {
        queue.push(Event::Close);
    }
    assert_eq!(queue.dropped(), 100);
    assert_eq!(queue.drain().collect::<Vec<_>>(), events);
}

#[test]
fn test_space_frees_after_pop() {
    let mut queue = EventQueue::with_capacity(2);
    queue.push(Event::Close);
    queue.push(Event::Close);
    assert!(!queue.push(Event::Close));

    queue.pop();
    assert!(queue.push(Event::MouseMove { x: 1, y: 1 }));
    assert_eq!(queue.len(), 2);
}
