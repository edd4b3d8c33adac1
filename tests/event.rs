mod tests {
    use interval_timer::{EVENT_QUEUE_DEPTH, EventQueue, TimerEvent};

    #[test]
    fn test_events_come_out_in_publish_order() {
        let queue = EventQueue::new();
        queue.publish(TimerEvent::Started { channel: 0 });
        queue.publish(TimerEvent::Finished { channel: 1 });

        assert_eq!(queue.take(), Some(TimerEvent::Started { channel: 0 }));
        assert_eq!(queue.take(), Some(TimerEvent::Finished { channel: 1 }));
        assert_eq!(queue.take(), None);
    }

    #[test]
    fn test_overflow_drops_oldest_events() {
        let queue = EventQueue::new();
        for channel in 0..EVENT_QUEUE_DEPTH + 4 {
            queue.publish(TimerEvent::Started { channel });
        }
        assert_eq!(queue.len(), EVENT_QUEUE_DEPTH);
        // The first four publishes were pushed out.
        assert_eq!(queue.take(), Some(TimerEvent::Started { channel: 4 }));
    }

    #[test]
    fn test_is_empty() {
        let queue = EventQueue::new();
        assert!(queue.is_empty());
        queue.publish(TimerEvent::ShutdownAllRequested);
        assert!(!queue.is_empty());
        queue.take();
        assert!(queue.is_empty());
    }
}
