mod tests {
    use myrtio_lamp_driver::GammaTable;

    #[test]
    fn test_strip_table_endpoints() {
        let table = GammaTable::STRIP;
        assert_eq!(table.get(0), 128);
        assert_eq!(table.get(1), 128);
        assert_eq!(table.get(31), 129);
        assert_eq!(table.get(128), 151);
        assert_eq!(table.get(255), 255);
    }

    #[test]
    fn test_strip_table_is_monotonic() {
        let entries = GammaTable::STRIP.as_slice();
        for pair in entries.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(entries.iter().all(|&value| value >= 128));
    }

    #[test]
    fn test_default_is_strip() {
        assert_eq!(GammaTable::default(), GammaTable::STRIP);
    }

    #[test]
    fn test_from_exponent_linear() {
        let table = GammaTable::from_exponent(1.0, 0);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(100), 100);
        assert_eq!(table.get(255), 255);
    }

    #[test]
    fn test_from_exponent_curve() {
        let table = GammaTable::from_exponent(2.5, 128);
        assert_eq!(table.get(0), 128);
        assert_eq!(table.get(255), 255);
        assert!(table.get(128) < 128 + 64);

        let entries = table.as_slice();
        for pair in entries.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_from_exponent_rejects_non_positive() {
        assert_eq!(
            GammaTable::from_exponent(0.0, 0),
            GammaTable::from_exponent(1.0, 0)
        );
    }
}
