//! Integration tests for Location and WorldMap

use wayfarer_foundation::{Direction, ErrorKind};
use wayfarer_world::{Location, WorldMap};

#[test]
fn connections_are_one_way() {
    let mut map = WorldMap::new();
    let hall = map.add("hall", Location::new("Hall", "A long hall"));
    let yard = map.add("yard", Location::new("Yard", "Open sky"));
    map.link(hall, Direction::East, yard).unwrap();

    let hall_loc = map.get(hall).unwrap();
    assert!(hall_loc.has_connected_location(Direction::East));
    assert_eq!(hall_loc.connected_location(Direction::East).unwrap(), yard);

    let yard_loc = map.get(yard).unwrap();
    assert!(!yard_loc.has_connected_location(Direction::West));
    assert_eq!(
        yard_loc.connected_location(Direction::West).unwrap_err().kind,
        ErrorKind::NoConnectedLocation
    );
}

#[test]
fn relinking_replaces_the_target() {
    let mut map = WorldMap::new();
    let a = map.add("a", Location::new("A", ""));
    let b = map.add("b", Location::new("B", ""));
    let c = map.add("c", Location::new("C", ""));
    map.link(a, Direction::Up, b).unwrap();
    map.link(a, Direction::Up, c).unwrap();
    assert_eq!(map.get(a).unwrap().connected_location(Direction::Up).unwrap(), c);
    assert_eq!(map.get(a).unwrap().connections().count(), 1);
}

#[test]
fn exit_conditions() {
    let plain = Location::new("Cell", "");
    assert!(!plain.has_exit_threshold());
    assert_eq!(plain.exit_threshold().unwrap_err().kind, ErrorKind::NoExitThreshold);
    assert_eq!(plain.exit_message().unwrap_err().kind, ErrorKind::NoExitThreshold);

    let gate = Location::with_exit("Gate", "", 10, "Free at last");
    assert!(gate.has_exit_threshold());
    assert_eq!(gate.exit_threshold().unwrap(), 10);
    assert_eq!(gate.exit_message().unwrap(), "Free at last");
}
