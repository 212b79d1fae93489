use broadside::{BitBoard, BitBoardError, GridSet};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 10, capacity: 64 })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = GridSet::new();
    assert!(bb.is_empty());

    bb.set((1, 1)).unwrap();
    assert!(bb.get((1, 1)).unwrap());
    assert!(bb.contains((1, 1)));

    bb.clear((1, 1)).unwrap();
    assert!(!bb.get((1, 1)).unwrap());
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds_is_error_but_not_member() {
    let mut bb = GridSet::full();
    assert_eq!(
        bb.set((10, 0)).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
    assert!(bb.get((0, 10)).is_err());
    assert!(!bb.contains((0, 10)));
}

#[test]
fn test_full_and_complement() {
    let full = GridSet::full();
    assert_eq!(full.count_ones(), 100);
    assert!((!full).is_empty());

    let one = GridSet::from_cells([(9, 9)]).unwrap();
    assert_eq!((!one).count_ones(), 99);
    assert!(!(!one).contains((9, 9)));
}

#[test]
fn test_cells_are_row_major() {
    let bb = GridSet::from_cells([(3, 3), (0, 9), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(0, 1), (0, 9), (3, 3)]);
}

#[test]
fn test_set_relations() {
    let a = GridSet::from_cells([(0, 0), (0, 1)]).unwrap();
    let b = GridSet::from_cells([(0, 1), (0, 2)]).unwrap();
    let c = GridSet::from_cells([(5, 5)]).unwrap();
    assert!(!a.is_disjoint(&b));
    assert!(a.is_disjoint(&c));
    assert!((a & b).is_subset(&a));
    assert_eq!((a | b).count_ones(), 3);
}
