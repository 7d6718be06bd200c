//! Whole games from short definitions

use wayfarer_foundation::{Config, ConfigKey};

use crate::play;

fn quiet() -> Config {
    Config::default()
        .with(ConfigKey::ShowEngineInfo, false)
        .with(ConfigKey::ShowGameInfo, false)
        .with(ConfigKey::AutodescribeFirstLocation, false)
        .with(ConfigKey::ShowLocationItems, false)
}

const TWO_ROOMS: &str = r#"game "T" "A" "D" location L1 "Room" "Desc" n L2 location L2 "Hall" "Desc2""#;

const ESCAPE: &str = r#"
game "Escape" "A" "D"
location cell "Cell" "Bare"
  item key "A key" 5
  n gate
location gate "Gate" "Open" 5 "You escape"
  s cell
"#;

const HOARD: &str = r#"
game "Hoard" "A" "D"
location vault "Vault" "Heavy"
  item big "A mountain of gold" 9223372036854775807
  item one "A single coin" 1
  n door
location door "Door" "Daylight" 9223372036854775807 "You carry it all out"
"#;

const COINS: &str = r#"
game "Coins" "A" "D"
location vault "Vault" "Cold"
  item coin "First coin" 1
  item coin "Second coin" 2
"#;

#[test]
fn introduction_then_one_way_corridor() {
    let (out, ended) = play(TWO_ROOMS, Config::default(), "go n\ngo s\n");
    let intro_end = "This location has no items.\n\n";
    assert!(out.contains("T\nA\nD\n\nRoom\nDesc\n\n"));
    let turns = &out[out.find(intro_end).unwrap() + intro_end.len()..];
    assert_eq!(
        turns,
        "Hall\nDesc2\n\nThis location has no items.\n\
         You cannot go that way.\n"
    );
    assert!(!ended);
}

#[test]
fn escape_ends_the_game() {
    let (out, ended) = play(ESCAPE, quiet(), "go n\ngo s\ntake key\ngo n\ninventory\n");
    assert!(ended);
    assert!(out.ends_with("You escape\n\nPlayer score: 5\nGAME OVER\n"));
    assert!(!out.contains("You are carrying"));
}

#[test]
fn escape_is_reachable_only_with_enough_value() {
    let (out, ended) = play(ESCAPE, quiet(), "go n\n");
    assert!(!ended);
    assert_eq!(out, "Gate\nOpen\n");
}

#[test]
fn hoard_at_the_value_limit() {
    let (out, ended) = play(HOARD, quiet(), "take big\ntake one\ninventory\ngo n\n");
    assert!(ended);
    assert!(out.contains("big (9223372036854775807), one (1).\nPlayer score: 9223372036854775807\n"));
    assert!(out.ends_with("You carry it all out\n\nPlayer score: 9223372036854775807\nGAME OVER\n"));
}

#[test]
fn coins_without_fifo() {
    let (out, _) = play(COINS, quiet(), "take coin\ninventory\n");
    assert_eq!(
        out,
        "There are several items with that name in this location.\n\
         You are carrying nothing.\n"
    );
}

#[test]
fn coins_with_fifo() {
    let config = quiet().with(ConfigKey::TakeAllowFifo, true);
    let (out, _) = play(COINS, config, "take coin\nexamine coin\ninventory\n");
    assert_eq!(
        out,
        "It has been taken.\n\
         coin: First coin\n\
         You are carrying the following items: coin (1).\nPlayer score: 1\n"
    );
}

#[test]
fn unknown_lines_and_end_of_input() {
    let (out, ended) = play(TWO_ROOMS, quiet(), "sing\n\nhelp me");
    assert!(out.starts_with("Pardon?\nPardon?\nThese are the available player commands:\n"));
    assert!(out.ends_with("quit|q|exit\n"));
    assert!(!ended);
}
