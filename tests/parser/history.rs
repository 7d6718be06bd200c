//! Undo and the bounded command history

use wayfarer_foundation::{CommandKind, Config, ConfigKey};
use wayfarer_parser::{Action, Command, CommandParser};
use wayfarer_world::Game;

use crate::market;

fn run(parser: &CommandParser, game: &mut Game<Command>, line: &str) -> (bool, String) {
    let mut command = parser.parse_next_command(line).unwrap();
    let ok = parser.execute(&mut command, game).unwrap();
    let text = command.result().unwrap_or_default().to_string();
    parser.record(game, command, ok).unwrap();
    (ok, text)
}

fn with_limit(limit: i64) -> CommandParser {
    CommandParser::new(Config::default().with(ConfigKey::CommandHistorySize, limit))
}

#[test]
fn limit_keeps_the_newest_commands() {
    let parser = with_limit(2);
    let mut game = market();
    run(&parser, &mut game, "take apple");
    run(&parser, &mut game, "go n");
    run(&parser, &mut game, "take lamp");

    assert_eq!(game.executed_command_count(), 2);
    let kinds: Vec<&Action> = game.executed_commands().filter_map(Command::action).collect();
    assert!(matches!(kinds[0], Action::Go { .. }));
    assert!(matches!(kinds[1], Action::Take { item, .. } if item == "lamp"));
}

#[test]
fn successful_commands_are_kept_whatever_their_kind() {
    let parser = with_limit(5);
    let mut game = market();
    run(&parser, &mut game, "look");
    assert_eq!(game.executed_command_count(), 1);

    run(&parser, &mut game, "take lamp");
    run(&parser, &mut game, "go west");
    run(&parser, &mut game, "inventory");
    run(&parser, &mut game, "take apple");
    let kinds: Vec<CommandKind> = game.executed_commands().map(Command::kind).collect();
    assert_eq!(kinds, vec![CommandKind::Look, CommandKind::Inventory, CommandKind::Take]);
}

#[test]
fn undo_passes_over_commands_without_an_inverse() {
    let parser = with_limit(5);
    let mut game = market();
    run(&parser, &mut game, "take apple");
    run(&parser, &mut game, "look");
    run(&parser, &mut game, "examine apple");

    let (ok, text) = run(&parser, &mut game, "undo");
    assert!(ok);
    assert_eq!(text, "It has returned to this location.\n");
    assert!(game.all_inventory_items().is_empty());
    assert_eq!(game.executed_command_count(), 0);

    run(&parser, &mut game, "inventory");
    let (ok, text) = run(&parser, &mut game, "undo");
    assert!(!ok);
    assert_eq!(text, "There is nothing to undo.\n");
}

#[test]
fn zero_limit_disables_undo() {
    let parser = with_limit(0);
    let mut game = market();
    run(&parser, &mut game, "take apple");
    assert_eq!(game.executed_command_count(), 0);
    let (ok, text) = run(&parser, &mut game, "undo");
    assert!(!ok);
    assert_eq!(text, "There is nothing to undo.\n");
    assert_eq!(game.all_inventory_items().len(), 1);
}

#[test]
fn undo_walks_back_through_history() {
    let parser = with_limit(3);
    let mut game = market();
    run(&parser, &mut game, "take apple");
    run(&parser, &mut game, "go n");
    run(&parser, &mut game, "drop apple");
    assert_eq!(game.items_in_location("apple").len(), 1);

    let (ok, text) = run(&parser, &mut game, "undo");
    assert!(ok);
    assert_eq!(text, "It has returned to the inventory.\n");

    let (ok, text) = run(&parser, &mut game, "back");
    assert!(ok);
    assert!(text.starts_with("You have returned to the previous location.\nSquare\n"));
    assert_eq!(game.report_location_name(), "Square");

    let (ok, _) = run(&parser, &mut game, "u");
    assert!(ok);
    assert!(game.all_inventory_items().is_empty());
    assert_eq!(game.all_location_items().len(), 3);

    let (ok, _) = run(&parser, &mut game, "undo");
    assert!(!ok);
}

#[test]
fn undo_fails_when_the_item_moved_on() {
    let parser = with_limit(1);
    let mut game = market();
    run(&parser, &mut game, "take apple");
    // Dropping evicts the take; undo then reverses only the drop.
    run(&parser, &mut game, "drop apple");
    let (ok, _) = run(&parser, &mut game, "undo");
    assert!(ok);
    assert_eq!(game.all_inventory_items().len(), 1);
    let (ok, _) = run(&parser, &mut game, "undo");
    assert!(!ok);
}

#[test]
fn undo_of_a_take_after_losing_the_item() {
    let parser = with_limit(2);
    let mut game = market();
    run(&parser, &mut game, "take apple");

    let apple = game.all_inventory_items()[0].id();
    game.move_item_to_location(apple).unwrap();

    let (ok, text) = run(&parser, &mut game, "undo");
    assert!(!ok);
    assert_eq!(text, format!("{}\n", parser.config().text(ConfigKey::TakeUndoFailure)));
    assert_eq!(game.executed_command_count(), 0);
}
