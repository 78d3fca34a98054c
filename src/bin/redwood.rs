//! redwood: insertion scenario driver
//!
//! Builds a tree from configured keys and prints its level-order dump.
//!
//! ## Configuration
//! - First argument: path to a YAML config file (optional)
//! - REDWOOD_CONFIG: path to a YAML config file (optional)
//! - REDWOOD__TREE: `red_black` (default) or `binary_search`
//! - REDWOOD__KEY_TYPE: `text` (default) or `integer`
//! - REDWOOD__KEYS: comma-separated keys, inserted in order
//! - REDWOOD__VERIFY: check red-black invariants afterwards (default: true)
//! - REDWOOD_LOG: tracing filter (default: info)

use tracing::info;

use redwood::config::Config;
use redwood::scenario;
use redwood::utils::bootstrap::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let path = std::env::args().nth(1);
    let config = Config::load(path.as_deref())?;

    let report = scenario::run(&config)?;

    info!(
        size = report.size,
        duplicates = report.duplicates,
        height = report.height,
        "tree built"
    );
    if let Some(black_height) = report.black_height {
        info!(black_height, "red-black invariants hold");
    }
    println!("{}", report.level_order);

    Ok(())
}
