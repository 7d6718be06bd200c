//! Integration tests for the definition parser

use std::io::{self, Read};

use wayfarer_foundation::{Direction, ErrorKind};
use wayfarer_language::{DefinitionParser, GameDefinition, parse_definition};
use wayfarer_world::{Game, Item, Location};

const CASTLE: &str = r#"
# A small castle.
game "The Castle" "A. Builder" "Find the treasure and leave"

location courtyard "Courtyard" "Grey stones underfoot"
  item lamp "An oil lamp" 1
  n hall
  e tower

location hall "Great Hall" "Banners hang from the rafters"
  item sword "A rusty sword" 3
  item coin "A gold coin" 10
  s courtyard
  d cellar

location cellar "Cellar" "It smells of old wine"
  item coin "A silver coin" 4
  u hall

location tower Tower "Wind howls through the arrow slits" 14 "You are free"
  w courtyard
"#;

fn location<'a>(def: &'a GameDefinition, id: &str) -> &'a Location {
    def.map.get(def.map.lookup(id).unwrap()).unwrap()
}

fn error_line(source: &str) -> u32 {
    let err = parse_definition(source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDefinition { .. }), "{err}");
    err.line().unwrap()
}

#[test]
fn castle_is_fully_linked() {
    let def = parse_definition(CASTLE).unwrap();
    assert_eq!(def.title, "The Castle");
    assert_eq!(def.map.len(), 4);
    assert_eq!(Some(def.initial), def.map.lookup("courtyard"));

    let courtyard = location(&def, "courtyard");
    assert_eq!(
        Some(courtyard.connected_location(Direction::East).unwrap()),
        def.map.lookup("tower")
    );

    let tower = location(&def, "tower");
    assert_eq!(tower.name(), "Tower");
    assert_eq!(tower.exit_threshold().unwrap(), 14);
    assert_eq!(tower.exit_message().unwrap(), "You are free");

    let hall = location(&def, "hall");
    let items: Vec<(&str, i64)> = hall.all_items().iter().map(|i| (i.name(), i.value())).collect();
    assert_eq!(items, vec![("sword", 3), ("coin", 10)]);
}

#[test]
fn reverse_links_are_only_what_was_declared() {
    let def = parse_definition(CASTLE).unwrap();
    let cellar = location(&def, "cellar");
    let directions: Vec<Direction> = cellar.connections().map(|(d, _)| d).collect();
    assert_eq!(directions, vec![Direction::Up]);
}

#[test]
fn two_room_scenario() {
    let def = parse_definition(r#"game "T" "A" "D" location L1 "Room" "Desc" n L2 location L2 "Hall" "Desc2""#)
        .unwrap();
    let game: Game<()> = def.into_game().unwrap();
    assert_eq!(game.report_location_name(), "Room");
    assert!(game.has_connected_location(Direction::North));
    let hall = game.current_location().connected_location(Direction::North).unwrap();
    let hall = game.location(hall).unwrap();
    assert_eq!(hall.name(), "Hall");
    assert!(!hall.has_connected_location(Direction::South));
}

#[test]
fn same_item_names_in_different_locations_are_distinct() {
    let def = parse_definition(CASTLE).unwrap();
    let gold = location(&def, "hall").items_named("coin")[0].id();
    let silver = location(&def, "cellar").items_named("coin")[0].id();
    assert_ne!(gold, silver);
    let _: &Item = location(&def, "cellar").items().get(silver).unwrap();
}

#[test]
fn dangling_links_are_dropped_or_rejected() {
    let source = "game T A D\nlocation a A A\n  n nowhere\n  s b\nlocation b B B";

    let def = DefinitionParser::new().parse(source).unwrap();
    let a = location(&def, "a");
    assert!(!a.has_connected_location(Direction::North));
    assert!(a.has_connected_location(Direction::South));

    let err = DefinitionParser::strict().parse(source).unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn error_lines() {
    assert_eq!(error_line(""), 1);
    assert_eq!(error_line("# only a comment\n"), 2);
    assert_eq!(error_line("location a A A"), 1);
    assert_eq!(error_line("game T A D\n\nplace a A A"), 3);
    assert_eq!(error_line("game T A D\nlocation a A A\n  north b"), 3);
    assert_eq!(error_line("game T A D\nlocation a A A\n  item key K"), 3);
    assert_eq!(error_line("game T A D\nlocation a A A\n  item key K 2.5"), 3);
    assert_eq!(error_line("game T A D\nlocation a A A\nlocation a B B"), 3);
    assert_eq!(error_line("game T A D\n"), 2);
}

#[test]
fn reading_from_a_reader() {
    let def = DefinitionParser::new().parse_reader(CASTLE.as_bytes()).unwrap();
    assert_eq!(def.map.len(), 4);

    struct Failing;
    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }
    let err = DefinitionParser::new().parse_reader(Failing).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
