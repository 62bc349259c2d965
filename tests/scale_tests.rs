use gpui_stacked_bar::scales::{
    average, bar_total, format_value, max_value, padded_max, ChartScale,
};

#[test]
fn test_bar_total() {
    assert_eq!(bar_total(&[100.0, 50.0]), 150.0);
    assert_eq!(bar_total(&[]), 0.0);
}

#[test]
fn test_max_value_is_largest_bar_total() {
    let data = vec![vec![100.0, 50.0], vec![80.0, 30.0]];
    assert_eq!(max_value(&data), 150.0);

    let data = vec![vec![1.0, 2.0, 3.0], vec![10.0], vec![4.0, 4.0]];
    assert_eq!(max_value(&data), 10.0);

    assert_eq!(max_value(&[]), 0.0);
}

#[test]
fn test_padded_max_examples() {
    // 150 * 1.2 = 180, already a multiple of 10
    assert_eq!(padded_max(150.0), 180.0);
    // 10 * 1.2 = 12, rounded up to 20
    assert_eq!(padded_max(10.0), 20.0);
    assert_eq!(padded_max(110.0), 140.0);
}

#[test]
fn test_padded_max_floor() {
    assert_eq!(padded_max(0.0), 10.0);
    assert_eq!(padded_max(1.0), 10.0);
    assert_eq!(padded_max(-50.0), 10.0);
    assert_eq!(padded_max(f64::NAN), 10.0);
}

#[test]
fn test_padded_max_properties() {
    let mut previous = 0.0;
    for i in 0..2000 {
        let m = i as f64 * 0.75;
        let p = padded_max(m);
        assert!(p > 0.0);
        assert_eq!(p % 10.0, 0.0, "padded_max({m}) = {p} is not a multiple of 10");
        assert!(p >= 10.0);
        assert!(p >= m * 1.2 - 1e-9, "padded_max({m}) = {p} lacks headroom");
        assert!(p >= previous, "padded_max is not monotonic at {m}");
        previous = p;
    }
}

#[test]
fn test_average() {
    let data = vec![vec![100.0, 50.0], vec![80.0, 30.0]];
    assert_eq!(average(&data), 130.0);
    assert_eq!(average(&[]), 0.0);
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(42.0), "42");
    assert_eq!(format_value(12.346), "12.35");
    assert_eq!(format_value(1234.56), "1235");
    assert_eq!(format_value(0.000123), "0.0001");
}

#[test]
fn test_vertical_scale() {
    let scale = ChartScale::vertical(200.0, 100.0);
    assert_eq!(scale.map(0.0), 100.0);
    assert_eq!(scale.map(200.0), 0.0);
    assert_eq!(scale.map(100.0), 50.0);
    assert_eq!(scale.domain(), (0.0, 200.0));
    assert_eq!(scale.range(), (100.0, 0.0));
}

#[test]
fn test_degenerate_domain_is_widened() {
    let scale = ChartScale::new_linear((5.0, 5.0), (0.0, 100.0));
    assert_eq!(scale.domain(), (4.5, 5.5));
    assert_eq!(scale.map(5.0), 50.0);
}
