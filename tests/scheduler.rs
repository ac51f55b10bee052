mod common;

mod tests {
    use myrtio_lamp_driver::{
        Duration, GammaWordEncoder, Instant, LampConfig, LampController, TICK_INTERVAL,
        TickScheduler,
    };

    use super::common::RecordingBus;

    fn lamp() -> LampController<RecordingBus, GammaWordEncoder<8>> {
        LampController::new(RecordingBus::new(), GammaWordEncoder::new(), &LampConfig::default())
            .init()
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(TICK_INTERVAL, Duration::from_millis(10));
    }

    #[test]
    fn test_poll_on_schedule() {
        let mut lamp = lamp();
        let mut scheduler = TickScheduler::new();

        let result = scheduler.poll(&mut lamp, Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.poll(&mut lamp, Instant::from_millis(12));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(8));
    }

    #[test]
    fn test_poll_behind_schedule() {
        let mut lamp = lamp();
        let mut scheduler = TickScheduler::new();
        scheduler.poll(&mut lamp, Instant::from_millis(0));
        scheduler.poll(&mut lamp, Instant::from_millis(10));

        let result = scheduler.poll(&mut lamp, Instant::from_millis(35));
        assert_eq!(result.next_deadline, Instant::from_millis(30));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_poll_resets_after_stall() {
        let mut lamp = lamp();
        let mut scheduler = TickScheduler::new();
        scheduler.poll(&mut lamp, Instant::from_millis(0));

        let result = scheduler.poll(&mut lamp, Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(510));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_poll_does_not_touch_bus() {
        let mut lamp = lamp();
        let before = lamp.bus().transfer_count();
        let mut scheduler = TickScheduler::with_interval(Duration::from_millis(5));
        for ms in [0u64, 5, 10, 15] {
            scheduler.poll(&mut lamp, Instant::from_millis(ms));
        }
        assert_eq!(lamp.bus().transfer_count(), before);
    }
}
