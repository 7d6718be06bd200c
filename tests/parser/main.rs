//! Integration tests for Layer 3: the command parser.
//!
//! Tests for player command handling:
//! - Dispatch and keywords
//! - Command execution and results
//! - Undo and bounded history

mod history;

use wayfarer_language::parse_definition;
use wayfarer_parser::Command;
use wayfarer_world::Game;

pub const MARKET: &str = r#"
game "Market" "Someone" "Buy low"
location square "Square" "Stalls everywhere"
  item coin "A copper coin" 1
  item coin "A silver coin" 2
  item apple "A red apple" 0
  n shop
location shop "Shop" "Shelves of curios"
  item lamp "A brass lamp" 7
  s square
"#;

pub fn market() -> Game<Command> {
    parse_definition(MARKET).unwrap().into_game().unwrap()
}
