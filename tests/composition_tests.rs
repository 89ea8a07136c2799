use gtscan::{composition, BaseCounts, Error};

#[test]
fn test_composition_acgt() {
    let c = composition(b"ACGT", 0).unwrap();
    assert_eq!(c.gt_proportion, 0.5);
    assert_eq!(c.g_to_t_ratio, Some(1.0));
}

#[test]
fn test_composition_no_t_is_undefined() {
    let c = composition(b"GGGG", 0).unwrap();
    assert_eq!(c.gt_proportion, 1.0);
    assert_eq!(c.g_to_t_ratio, None);

    let c = composition(b"ACCA", 0).unwrap();
    assert_eq!(c.gt_proportion, 0.0);
    assert_eq!(c.g_to_t_ratio, None);
}

#[test]
fn test_composition_no_g() {
    let c = composition(b"TTAA", 0).unwrap();
    assert_eq!(c.gt_proportion, 0.5);
    assert_eq!(c.g_to_t_ratio, Some(0.0));
}

#[test]
fn test_composition_lowercase() {
    let upper = composition(b"GGTAC", 0).unwrap();
    let lower = composition(b"ggtac", 0).unwrap();
    let mixed = composition(b"GgTaC", 0).unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
    assert_eq!(upper.g_to_t_ratio, Some(2.0));
}

#[test]
fn test_ambiguity_codes_count_in_length() {
    // N still counts toward the window length
    let c = composition(b"GTNN", 0).unwrap();
    assert_eq!(c.gt_proportion, 0.5);
    assert_eq!(c.counts.other, 2);
}

#[test]
fn test_base_counts() {
    let counts = BaseCounts::from_bases(b"AACGTTTNx-");
    assert_eq!(
        counts,
        BaseCounts {
            a: 2,
            c: 1,
            g: 1,
            t: 3,
            other: 3
        }
    );
    assert_eq!(counts.total(), 10);
}

#[test]
fn test_proportion_is_one_only_for_pure_gt() {
    for seq in [b"GTGT", b"GGGT", b"gtTG", b"GTGA", b"GTGN", b"CCCC"] {
        let c = composition(seq, 0).unwrap();
        assert!((0.0..=1.0).contains(&c.gt_proportion));
        let pure = seq.iter().all(|b| matches!(b, b'G' | b'g' | b'T' | b't'));
        assert_eq!(c.gt_proportion == 1.0, pure, "{:?}", std::str::from_utf8(seq));
    }
}

#[test]
fn test_empty_window_is_degenerate() {
    match composition(b"", 7) {
        Err(Error::DegenerateWindow { start }) => assert_eq!(start, 7),
        other => panic!("expected DegenerateWindow, got {:?}", other),
    }
}
