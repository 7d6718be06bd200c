//! Integration tests for ItemRepository

use wayfarer_foundation::ErrorKind;
use wayfarer_world::{Item, ItemRepository};

#[test]
fn items_keep_insertion_order() {
    let mut repo = ItemRepository::new();
    for name in ["lamp", "key", "coin"] {
        repo.add_item(Item::new(name, "", 1)).unwrap();
    }
    let names: Vec<&str> = repo.all_items().iter().map(Item::name).collect();
    assert_eq!(names, vec!["lamp", "key", "coin"]);
}

#[test]
fn adding_the_same_item_twice_fails() {
    let mut repo = ItemRepository::new();
    let key = Item::new("key", "A key", 5);
    repo.add_item(key.clone()).unwrap();
    let err = repo.add_item(key).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ItemAlreadyInRepository);
    assert_eq!(repo.len(), 1);
}

#[test]
fn equal_names_are_distinct_items() {
    let mut repo = ItemRepository::new();
    let first = Item::new("coin", "Copper", 1);
    let second = Item::new("coin", "Copper", 1);
    assert_ne!(first.id(), second.id());
    repo.add_item(first.clone()).unwrap();
    repo.add_item(second).unwrap();

    let coins = repo.items_named("coin");
    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].id(), first.id());
    assert!(repo.items_named("Coin").is_empty());
}

#[test]
fn removing_an_absent_item_fails() {
    let mut repo = ItemRepository::new();
    let stray = Item::new("stray", "", 0);
    assert_eq!(repo.remove_item(stray.id()).unwrap_err().kind, ErrorKind::ItemNotInRepository);
    assert!(repo.get(stray.id()).is_err());
}

#[test]
fn total_value_sums_items() {
    let mut repo = ItemRepository::new();
    assert_eq!(repo.total_value(), 0);
    repo.add_item(Item::new("key", "", 5)).unwrap();
    repo.add_item(Item::new("curse", "", -2)).unwrap();
    assert_eq!(repo.total_value(), 3);
}
