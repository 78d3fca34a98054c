//! Rotation step definitions, run against the unbalanced tree.

use cucumber::{given, then, when};
use redwood::NodeLinks;

use super::{resolve, split_keys, TreeWorld};

// --- Given steps ---

#[given("an empty binary search tree")]
async fn given_empty_bst(world: &mut TreeWorld) {
    world.bst.clear();
}

#[given(expr = "the integer keys {string} are inserted")]
async fn given_integer_keys(world: &mut TreeWorld, keys: String) {
    for key in split_keys(&keys) {
        let key: i64 = key.parse().expect("integer key");
        world.bst.insert(key).expect("insert into binary search tree");
    }
}

#[given("the ids of the root and its right child are kept")]
async fn given_kept_ids(world: &mut TreeWorld) {
    let root = world.bst.root();
    world.kept_ids = (root.and_then(|r| world.bst.right(r)), root);
}

#[given("the tree is cleared")]
async fn given_tree_cleared(world: &mut TreeWorld) {
    world.bst.clear();
}

// --- When steps ---

#[when("I rotate the kept ids")]
async fn when_rotate_kept(world: &mut TreeWorld) {
    let (child, parent) = world.kept_ids;
    world.last_error = world.bst.rotate(child, parent).err();
}

#[when(expr = "I rotate {string} with {string}")]
async fn when_rotate(world: &mut TreeWorld, child: String, parent: String) {
    world.in_order_before = world.bst_in_order();
    let child = resolve(&world.bst, &child);
    let parent = resolve(&world.bst, &parent);
    world.last_error = world.bst.rotate(child, parent).err();
}

// --- Then steps ---

#[then(expr = "the level order is {string}")]
async fn then_level_order(world: &mut TreeWorld, expected: String) {
    assert_eq!(world.bst.to_level_order_string(), expected);
}

#[then("the in-order sequence is unchanged")]
async fn then_in_order_unchanged(world: &mut TreeWorld) {
    assert!(world.last_error.is_none(), "rotation failed: {:?}", world.last_error);
    assert_eq!(world.bst_in_order(), world.in_order_before);
}

#[then("the rotation fails with a null argument error")]
async fn then_rotation_null_argument(world: &mut TreeWorld) {
    let err = world.last_error.expect("rotation should have failed");
    assert!(err.is_null_argument(), "unexpected error: {}", err);
}

#[then("the rotation fails with an invalid relationship error")]
async fn then_rotation_invalid_relationship(world: &mut TreeWorld) {
    let err = world.last_error.expect("rotation should have failed");
    assert!(err.is_invalid_relationship(), "unexpected error: {}", err);
}
