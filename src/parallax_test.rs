use super::*;

#[test]
fn disabled_below_breakpoint() {
    assert!(!enabled(767.0));
    assert_eq!(transforms(767.0, 400.0, 3), None);
}

#[test]
fn enabled_at_breakpoint() {
    assert!(enabled(768.0));
    let written = transforms(768.0, 100.0, 3).expect("parallax should run at 768");
    assert_eq!(written.len(), 3);
    assert_eq!(written[0], "translateY(50px)");
    let second = written[1]
        .strip_prefix("translateY(")
        .and_then(|rest| rest.strip_suffix("px)"))
        .and_then(|num| num.parse::<f64>().ok())
        .expect("transform should carry a px offset");
    assert!((second - 60.0).abs() < 1e-9);
}

#[test]
fn speed_grows_linearly_with_index() {
    assert!((speed(0) - 0.5).abs() < 1e-12);
    assert!((speed(1) - 0.6).abs() < 1e-12);
    assert!((speed(4) - 0.9).abs() < 1e-12);
}

#[test]
fn offset_is_scroll_times_speed() {
    for index in 0..5 {
        let expected = 240.0 * (0.5 + f64::from(index) * 0.1);
        assert!((offset(240.0, index) - expected).abs() < 1e-9);
    }
}

#[test]
fn zero_scroll_is_zero_offset() {
    let written = transforms(1024.0, 0.0, 2).expect("parallax should run");
    assert_eq!(written, vec!["translateY(0px)", "translateY(0px)"]);
}

#[test]
fn no_blobs_writes_nothing() {
    assert_eq!(transforms(1024.0, 50.0, 0), Some(Vec::new()));
}
