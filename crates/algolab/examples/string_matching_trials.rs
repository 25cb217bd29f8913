//! Run the character-by-character string matcher against random text with a
//! pattern sliced out of it.

use algokit::prelude::*;
use algolab::generate;
use algolab::prelude::*;

fn main() -> Result<(), LabError> {
    let mut results = TrialSet::new();

    // A 10-character pattern in 100 characters of text, plus a larger text
    // to make the timing visible.
    results.push(
        Trial::new("find_first")
            .elements(100)
            .run_string_matching(|t, p| find_first(t, p))?,
    );
    results.push(
        Trial::new("find_first (large)")
            .elements(100_000)
            .run_string_matching(|t, p| find_first(t, p))?,
    );

    println!("{results}");

    // Show every occurrence on a small text where the answer is obvious.
    let (text, pattern, planted) = generate::embedded_pattern(40, 4, 7);
    println!("text:    {text}");
    println!("pattern: {pattern} (planted at {planted})");
    println!("matches: {:?}", find_all(&text, &pattern));

    Ok(())
}
