//! Run every elementary sort over the same random input and report which
//! one was fastest.

use algokit::prelude::*;
use algolab::prelude::*;

fn main() -> Result<(), LabError> {
    let mut results = TrialSet::new();

    results.push(Trial::new("insertion_sort").run_sort(|a| insertion_sort(a))?);
    results.push(Trial::new("insertion_sort_swapping").run_sort(|a| insertion_sort_swapping(a))?);
    results.push(Trial::new("insertion_sort_recursive").run_sort(|a| insertion_sort_recursive(a))?);
    results.push(Trial::new("selection_sort").run_sort(|a| selection_sort(a))?);
    results.push(Trial::new("selection_sort_recursive").run_sort(|a| selection_sort_recursive(a))?);
    results.push(Trial::new("bubble_sort").run_sort(|a| bubble_sort(a))?);
    results.push(Trial::new("bubble_sort_backward").run_sort(|a| bubble_sort_backward(a))?);
    results.push(Trial::new("exchange_sort").run_sort(|a| exchange_sort(a))?);

    println!("{results}");
    if let Some(best) = results.fastest() {
        println!("Algorithm with the best execution time:");
        println!("  {best}");
    }
    Ok(())
}
