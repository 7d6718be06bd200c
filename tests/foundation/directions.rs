//! Integration tests for Direction

use wayfarer_foundation::Direction;

#[test]
fn twelve_directions() {
    assert_eq!(Direction::ALL.len(), 12);
}

#[test]
fn opposite_is_an_involution() {
    for direction in Direction::ALL {
        assert_ne!(direction.opposite(), direction);
        assert_eq!(direction.opposite().opposite(), direction);
    }
}

#[test]
fn known_opposites() {
    assert_eq!(Direction::North.opposite(), Direction::South);
    assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::In.opposite(), Direction::Out);
}

#[test]
fn keywords_round_trip() {
    for direction in Direction::ALL {
        assert_eq!(Direction::from_keyword(direction.keyword()), Some(direction));
        assert_eq!(Direction::from_word(direction.name()), Some(direction));
    }
}

#[test]
fn unknown_words() {
    assert_eq!(Direction::from_keyword("north"), None);
    assert_eq!(Direction::from_word("sideways"), None);
}
