//! Run the brute-force family: exchange sort, integer powers, maximum
//! subarray, longest ascending run, and closest pair.

use std::time::Instant;

use algokit::prelude::*;
use algolab::generate;
use algolab::prelude::*;

fn main() -> Result<(), LabError> {
    let mut results = TrialSet::new();

    results.push(Trial::new("exchange_sort").run_sort(|a| exchange_sort(a))?);
    results.push(
        Trial::new("max_subarray_cubic")
            .elements(500)
            .run_max_subarray(|a| max_subarray_cubic(a))?,
    );
    results.push(
        Trial::new("max_subarray_quadratic")
            .elements(2_000)
            .run_max_subarray(|a| max_subarray_quadratic(a))?,
    );
    results.push(
        Trial::new("closest_pair")
            .elements(500)
            .run_closest_pair(|p| closest_pair(p))?,
    );

    println!("{results}");

    // The two exponentiation strategies agree wherever neither overflows.
    let (base, exponent) = (3u64, 30u32);
    println!(
        "power({base}, {exponent})      = {}",
        power(base, exponent)?
    );
    println!(
        "fast_power({base}, {exponent}) = {}",
        fast_power(base, exponent)?
    );
    match power(2, 64) {
        Ok(value) => println!("power(2, 64) = {value}"),
        Err(e) => println!("power(2, 64) -> {e}"),
    }
    println!();

    // Longest ascending run over random data, timed directly.
    let data = generate::uniform_ints(10_000, 42);
    let start = Instant::now();
    let run = longest_ascending_run(&data)?;
    let elapsed = start.elapsed();
    println!(
        "longest_ascending_run: start {} length {} in {:.4}(s)",
        run.start,
        run.len,
        elapsed.as_secs_f64()
    );

    Ok(())
}
