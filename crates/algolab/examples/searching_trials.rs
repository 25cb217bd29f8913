//! Run the search family over a large sorted array with a known-present
//! needle.

use algokit::prelude::*;
use algolab::prelude::*;

const ELEMENTS: usize = 1_000_000;

fn main() -> Result<(), LabError> {
    let mut results = TrialSet::new();

    results.push(
        Trial::new("linear_search")
            .elements(ELEMENTS)
            .run_search(|a, k| linear_search(a, k))?,
    );
    // sentinel_search mutates, so it runs on its own copy of the input.
    results.push(
        Trial::new("sentinel_search")
            .elements(ELEMENTS)
            .run_search(|a, k| {
                let mut owned = a.to_vec();
                sentinel_search(&mut owned, k)
            })?,
    );
    results.push(
        Trial::new("jump_search")
            .elements(ELEMENTS)
            .run_search(|a, k| jump_search(a, k))?,
    );
    results.push(
        Trial::new("binary_search")
            .elements(ELEMENTS)
            .run_search(|a, k| binary_search(a, k))?,
    );
    results.push(
        Trial::new("binary_search_recursive")
            .elements(ELEMENTS)
            .run_search(|a, k| binary_search_recursive(a, k))?,
    );

    println!("{results}");
    if let Some(best) = results.fastest() {
        println!("Fastest: {best}");
    }
    Ok(())
}
