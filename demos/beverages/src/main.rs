//! Beverage Procurement Example
//!
//! Finds case combinations over a beverage price list whose total lands in a
//! narrow budget window (spend between 495 and 500), with a few items forced
//! to floors or pinned to zero by purchasing rules.

use budgetfit::prelude::*;
use tracing_subscriber::EnvFilter;

/// Price list: (name, price per case).
const PRICE_LIST: &[(&str, &str)] = &[
    ("Nongfu Spring natural water 380ml x24", "24.12"),
    ("Nongfu Spring mineral water 550ml x24", "22.83"),
    ("Pocari Sweat electrolyte drink 350ml x24", "51.58"),
    ("Nongfu Spring NFC orange juice 300ml x24", "95.05"),
    ("Yeshu coconut juice 245ml x24", "64.51"),
    ("Oriental Leaf jasmine tea 500ml x15", "48.06"),
    ("Suntory sugar-free oolong tea 500ml x15", "44.15"),
    ("Vita lemon tea 250ml x24", "39.49"),
    ("Mizone lime flavor 600ml x15", "47.31"),
    ("Watsons soda water 330ml x24", "65.26"),
    ("Wong Lo Kat herbal tea 310ml x24", "44.97"),
    ("Tiandi No.1 fruit vinegar 330ml x15", "30.02"),
    ("Chunguang sugar-free coconut juice 250ml x10", "34.49"),
    ("Coca-Cola 300ml x24", "28.76"),
];

/// Print at most this many full breakdowns; after that only count.
const PRINT_LIMIT: usize = 10;

/// Stop pulling after this many solutions; the full space over 14 items is
/// far larger than anyone wants to read.
const SOLUTION_LIMIT: usize = 200;

fn build_config() -> SearchConfig {
    let mut config = SearchConfig::new().with_interval(
        "495".parse().unwrap(),
        "500".parse().unwrap(),
    );
    for (name, price) in PRICE_LIST {
        config = config.with_item(*name, price.parse().unwrap());
    }

    // Purchasing rules: jasmine tea at least 4 cases, lemon tea and coconut
    // juice at least 1, the two waters excluded from this order.
    config
        .with_constraint("Oriental Leaf jasmine tea 500ml x15", 4, 100)
        .with_constraint("Vita lemon tea 250ml x24", 1, 100)
        .with_constraint("Yeshu coconut juice 245ml x24", 1, 100)
        .with_constraint("Nongfu Spring natural water 380ml x24", 0, 0)
        .with_constraint("Nongfu Spring mineral water 550ml x24", 0, 0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = build_config();
    let mut search = session_from_config(&config).expect("valid demo configuration");
    let catalog = search.catalog().clone();

    println!("Searching for combinations totaling 495..=500 ...\n");

    let mut count = 0usize;
    let mut exhausted = true;
    while let Some(solution) = search.find_next() {
        count += 1;
        if count <= PRINT_LIMIT {
            println!("Solution {count}:");
            println!("{}\n", solution.breakdown(&catalog));
        }
        if count >= SOLUTION_LIMIT {
            exhausted = false;
            break;
        }
    }

    if count == 0 {
        println!("No combination satisfies the constraints.");
    } else {
        if count > PRINT_LIMIT {
            println!("... and {} more.", count - PRINT_LIMIT);
        }
        println!(
            "{count} combinations found{} ({} nodes explored in {:?}).",
            if exhausted { "" } else { ", more remain" },
            search.stats().nodes_popped,
            search.stats().elapsed()
        );
    }
}
