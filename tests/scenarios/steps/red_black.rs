//! Red-black insertion step definitions.

use cucumber::{given, then, when};

use super::{split_keys, TreeWorld};

// --- Given steps ---

#[given("an empty red-black tree")]
async fn given_empty_rbt(world: &mut TreeWorld) {
    world.rbt.clear();
}

// --- When steps ---

#[when(expr = "I insert the keys {string}")]
async fn when_insert_keys(world: &mut TreeWorld, keys: String) {
    for key in split_keys(&keys) {
        world.rbt.insert(key.to_string()).expect("insert into red-black tree");
        world
            .rbt
            .verify()
            .unwrap_or_else(|violation| panic!("after inserting {}: {}", key, violation));
    }
}

#[when("I insert an absent key")]
async fn when_insert_absent_key(world: &mut TreeWorld) {
    world.last_error = world.rbt.insert_opt(None).err();
}

// --- Then steps ---

#[then(expr = "the colored level order is {string}")]
async fn then_colored_level_order(world: &mut TreeWorld, expected: String) {
    assert_eq!(world.rbt.to_level_order_string(), expected);
}

#[then("the red-black invariants hold")]
async fn then_invariants_hold(world: &mut TreeWorld) {
    if let Err(violation) = world.rbt.verify() {
        panic!("{}", violation);
    }
}

#[then(expr = "the tree holds {int} keys")]
async fn then_tree_holds(world: &mut TreeWorld, count: usize) {
    assert_eq!(world.rbt.len(), count);
}

#[then(expr = "the tree contains {string}")]
async fn then_tree_contains(world: &mut TreeWorld, key: String) {
    assert!(world.rbt.contains(key.as_str()), "missing key {}", key);
}

#[then(expr = "the tree does not contain {string}")]
async fn then_tree_does_not_contain(world: &mut TreeWorld, key: String) {
    assert!(!world.rbt.contains(key.as_str()), "unexpected key {}", key);
}

#[then("the insert fails with a null argument error")]
async fn then_insert_null_argument(world: &mut TreeWorld) {
    let err = world.last_error.expect("insert should have failed");
    assert!(err.is_null_argument(), "unexpected error: {}", err);
}
