mod tests {
    use myrtio_lamp_driver::clock_divider;
    use myrtio_lamp_driver::math8::{latch_words, scale_by_level};

    #[test]
    fn test_scale_by_level() {
        assert_eq!(scale_by_level(255, 255), 255);
        assert_eq!(scale_by_level(255, 1), 1);
        assert_eq!(scale_by_level(64, 127), 31);
        assert_eq!(scale_by_level(0, 255), 0);
        assert_eq!(scale_by_level(128, 128), 64);
    }

    #[test]
    fn test_latch_words() {
        assert_eq!(latch_words(0), 0);
        assert_eq!(latch_words(1), 1);
        assert_eq!(latch_words(26), 1);
        assert_eq!(latch_words(32), 1);
        assert_eq!(latch_words(33), 2);
        assert_eq!(latch_words(65), 3);
    }

    #[test]
    fn test_clock_divider() {
        assert_eq!(clock_divider(16_000_000, 1_000_000), 8);
        assert_eq!(clock_divider(16_000_000, 2_000_000), 4);
        assert_eq!(clock_divider(16_000_000, 1_000), u8::MAX);
        assert_eq!(clock_divider(16_000_000, 0), u8::MAX);
    }
}
