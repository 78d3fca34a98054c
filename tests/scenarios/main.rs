//! Gherkin scenarios for the rotation engine and the red-black repair walk.
//!
//! Each scenario builds a tree from a fixed key sequence and compares its
//! level-order dump against the expected shape:
//!
//! ```bash
//! cargo test --test scenarios
//! ```

mod steps;

use cucumber::World;
use steps::TreeWorld;

#[tokio::main]
async fn main() {
    TreeWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/scenarios/features")
        .await;
}
