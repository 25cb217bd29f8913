//! Exercise the recursion family: countdown, GCD, the recursive sorts, the
//! polynomial evaluators, permutation generation, and Tower of Hanoi.

use algokit::prelude::*;
use algokit::recursion::hanoi;
use algolab::prelude::*;

fn main() -> Result<(), LabError> {
    // Countdown is pure control flow; just confirm the visit count.
    let mut visits = 0u64;
    countdown(10_000, &mut |_| visits += 1);
    println!("countdown visited {visits} values\n");

    let mut results = TrialSet::new();

    results.push(Trial::new("gcd").elements(10).run_gcd(gcd)?);
    results.push(Trial::new("insertion_sort_recursive").run_sort(|a| insertion_sort_recursive(a))?);
    results.push(Trial::new("selection_sort_recursive").run_sort(|a| selection_sort_recursive(a))?);

    // Degree-2 polynomials at x = 4 keep the three evaluators comparable.
    let degree = 2;
    let x = 4.0;
    results.push(
        Trial::new("evaluate_terms")
            .elements(degree)
            .run_polynomial(x, |c, x| evaluate_terms(c, x))?,
    );
    results.push(
        Trial::new("evaluate_cached_power")
            .elements(degree)
            .run_polynomial(x, |c, x| evaluate_cached_power(c, x))?,
    );
    results.push(
        Trial::new("evaluate_horner")
            .elements(degree)
            .run_polynomial(x, |c, x| evaluate_horner(c, x))?,
    );

    println!("{results}");

    // Permutations of 1..=3 by recursive insertion.
    let n = 3;
    println!("== Permutations of 1..={n} by insertion ==");
    let all = permutations_by_insertion(n)?;
    println!("Number of permutations: {}", all.len());
    for p in &all {
        println!("{p:?}");
    }
    println!();

    // Every arrangement of four elements via the swap recursion.
    let mut items = [1, 2, 3, 4];
    let mut arrangements = 0usize;
    for_each_permutation(&mut items, &mut |_| arrangements += 1);
    println!("for_each_permutation visited {arrangements} arrangements of {items:?}\n");

    // Tower of Hanoi with three disks, pegs numbered 0..=2.
    println!("== Tower of Hanoi, 3 disks ==");
    hanoi::solve(3, 0, 2, 1, &mut |m| println!("{m}"))?;
    println!("Total moves: {}", hanoi::move_count(3)?);

    Ok(())
}
