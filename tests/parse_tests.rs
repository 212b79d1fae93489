use broadside::{coord_label, parse_coord, parse_placement, Orientation};

#[test]
fn test_parse_coord_valid() {
    assert_eq!(parse_coord("A1"), Some((0, 0)));
    assert_eq!(parse_coord("b7"), Some((1, 6)));
    assert_eq!(parse_coord("J10"), Some((9, 9)));
    assert_eq!(parse_coord("  c 10  "), Some((2, 9)));
}

#[test]
fn test_parse_coord_rejects() {
    for bad in ["", "A", "1A", "K1", "A0", "A11", "A01", "A1H", "AA1", "A-1", "é1", "A 1 0"] {
        assert_eq!(parse_coord(bad), None, "{:?} should not parse", bad);
    }
}

#[test]
fn test_parse_placement() {
    assert_eq!(
        parse_placement("A1H"),
        Some(((0, 0), Orientation::Horizontal))
    );
    assert_eq!(
        parse_placement(" b3 v "),
        Some(((1, 2), Orientation::Vertical))
    );
    assert_eq!(
        parse_placement("J 10 H"),
        Some(((9, 9), Orientation::Horizontal))
    );
    assert_eq!(parse_placement("A10V"), Some(((0, 9), Orientation::Vertical)));
}

#[test]
fn test_parse_placement_rejects() {
    for bad in ["A1", "A1X", "A1HV", "H", "Z1H", "A0H", "A11V", "A1 H extra"] {
        assert_eq!(parse_placement(bad), None, "{:?} should not parse", bad);
    }
}

#[test]
fn test_label_round_trip() {
    for r in 0..10 {
        for c in 0..10 {
            assert_eq!(parse_coord(&coord_label((r, c))), Some((r, c)));
        }
    }
    assert_eq!(coord_label((0, 0)), "A1");
    assert_eq!(coord_label((9, 9)), "J10");
}

#[test]
fn test_label_off_grid() {
    assert_eq!(coord_label((10, 3)), "(10, 3)");
    assert_eq!(coord_label((0, 10)), "(0, 10)");
    assert_eq!(coord_label((usize::MAX, 0)), format!("({}, 0)", usize::MAX));
    assert_eq!(parse_coord(&coord_label((10, 3))), None);
}
