use gtscan::{analyze, Error, WindowConfig};

fn config(window: usize, step: usize) -> WindowConfig {
    WindowConfig::new(window, step, None, None).unwrap()
}

#[test]
fn test_analyze_acgtacgtac() {
    let rows = analyze(b"ACGTACGTAC", &config(4, 2)).unwrap();
    let positions: Vec<usize> = rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 3, 5, 7]);

    // "ACGT" and "GTAC"
    assert_eq!(rows[0].gt_proportion, 0.5);
    assert_eq!(rows[0].g_to_t_ratio, Some(1.0));
    assert_eq!(rows[3].gt_proportion, 0.5);
    assert_eq!(rows[3].g_to_t_ratio, Some(1.0));
}

#[test]
fn test_analyze_window_too_large_is_empty() {
    let rows = analyze(b"ACGTACGTAC", &config(100, 25)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_analyze_all_g() {
    let rows = analyze(b"GGGG", &config(4, 1)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].gt_proportion, 1.0);
    assert_eq!(rows[0].g_to_t_ratio, None);
}

#[test]
fn test_zero_window_or_step_rejected() {
    assert!(matches!(
        WindowConfig::new(0, 1, None, None),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        WindowConfig::new(4, 0, None, None),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_inverted_bounds_rejected() {
    assert!(matches!(
        WindowConfig::new(10, 5, Some(500), Some(100)),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_start_beyond_sequence_rejected() {
    let seq = vec![b'A'; 1000];
    let cfg = WindowConfig::new(10, 5, Some(2000), None).unwrap();
    assert!(matches!(analyze(&seq, &cfg), Err(Error::InvalidParameter(_))));
}

#[test]
fn test_end_is_clamped() {
    let seq = b"ACGTACGTAC";
    let cfg = WindowConfig::new(4, 2, Some(2), Some(1000)).unwrap();
    let rows = analyze(seq, &cfg).unwrap();
    let positions: Vec<usize> = rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![3, 5, 7]);
}

#[test]
fn test_bounds_restrict_windows() {
    // windows must end at or before `end`
    let seq = b"AAAAGGGGTTTTCCCC";
    let cfg = WindowConfig::new(4, 4, Some(4), Some(12)).unwrap();
    let rows = analyze(seq, &cfg).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 5);
    assert_eq!(rows[0].g_to_t_ratio, None);
    assert_eq!(rows[1].position, 9);
    assert_eq!(rows[1].g_to_t_ratio, Some(0.0));
    assert_eq!(rows[1].gt_proportion, 1.0);
}

#[test]
fn test_one_based_bounds() {
    let cfg = WindowConfig::with_one_based_bounds(4, 2, Some(3), Some(10)).unwrap();
    assert_eq!(cfg.start(), Some(2));
    assert_eq!(cfg.end(), Some(10));

    assert!(matches!(
        WindowConfig::with_one_based_bounds(4, 2, Some(0), None),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        WindowConfig::with_one_based_bounds(4, 2, None, Some(0)),
        Err(Error::InvalidParameter(_))
    ));
    // a single-base range is valid (start == end in 1-based terms)
    assert!(WindowConfig::with_one_based_bounds(1, 1, Some(5), Some(5)).is_ok());
}

#[test]
fn test_empty_sequence_rejected() {
    assert!(matches!(
        analyze(b"", &config(1, 1)),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_rows_ordered_without_duplicates() {
    let seq: Vec<u8> = b"ACGTTGCAGGT".iter().cycle().take(503).copied().collect();
    let cfg = WindowConfig::new(37, 11, Some(13), Some(480)).unwrap();
    let rows = analyze(&seq, &cfg).unwrap();
    assert!(!rows.is_empty());
    assert!(rows.windows(2).all(|p| p[0].position < p[1].position));
    for r in &rows {
        assert!((0.0..=1.0).contains(&r.gt_proportion));
        assert!(r.position >= 14);
        assert!(r.position - 1 + 37 <= 480);
    }
    assert_eq!(rows, analyze(&seq, &cfg).unwrap());
}
