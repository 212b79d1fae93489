use broadside::{footprint, BoardError, Orientation, Ship, ShipType};

#[test]
fn test_new_and_cells() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 3);
    let ship = Ship::new(def, (2, 1), Orientation::Horizontal)?;
    let cells: Vec<_> = ship.cells().cells().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(ship.size(), 3);
    assert_eq!(ship.name(), "Test");
    Ok(())
}

#[test]
fn test_vertical_contains() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 4);
    let ship = Ship::new(def, (0, 0), Orientation::Vertical)?;
    for r in 0..4 {
        assert!(ship.contains((r, 0)));
    }
    assert!(!ship.contains((4, 0)));
    assert!(!ship.contains((0, 1)));
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let def = ShipType::new("Test", 5);
    assert_eq!(
        Ship::new(def, (0, 6), Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfBounds
    );
    assert_eq!(
        Ship::new(def, (6, 0), Orientation::Vertical).unwrap_err(),
        BoardError::OutOfBounds
    );
    assert!(footprint((0, 5), 5, Orientation::Horizontal).is_some());
    assert!(footprint((usize::MAX, 0), 2, Orientation::Vertical).is_none());
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 2);
    let mut ship = Ship::new(def, (1, 1), Orientation::Horizontal)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit((1, 1)));
    assert!(!ship.is_sunk());
    // repeated hit on the same cell does not count twice
    assert!(ship.register_hit((1, 1)));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit((1, 2)));
    assert!(ship.is_sunk());
    // miss
    assert!(!ship.register_hit((0, 0)));
    assert!(ship.hits().is_subset(&ship.cells()));
    Ok(())
}

#[test]
fn test_orientation_parse() {
    assert_eq!("h".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!(" V ".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert!("HV".parse::<Orientation>().is_err());
    assert!("".parse::<Orientation>().is_err());
    assert_eq!(Orientation::from_char('x'), None);
}
