//! The fluent trial builder and runners.
//!
//! ## Purpose
//!
//! This module provides [`Trial`], the harness entry point. A trial is
//! configured with a fluent builder (element count, seed), then handed an
//! algorithm through one of the `run_*` methods. Each runner generates
//! seeded input, times the algorithm with `Instant`, cross-checks the output
//! against an oracle, and returns a [`TrialReport`].
//!
//! ## Design notes
//!
//! * **Defaulted**: Unset parameters fall back to 10_000 elements and
//!   seed 42.
//! * **Validated**: Parameter problems (duplicates, undersized inputs)
//!   surface when a runner is invoked, not while chaining.
//! * **Timing scope**: Only the algorithm call is timed; generation and
//!   cross-checking happen outside the clock.
//!
//! ## Key concepts
//!
//! * **Cross-check or nothing**: A runner never returns a report for output
//!   that failed its oracle comparison; a wrong answer has no meaningful
//!   timing.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Trial`] via `Trial::new(name)`.
//! 2. Chain configuration methods (`.elements()`, `.seed()`).
//! 3. Invoke a runner (`.run_sort(..)`, `.run_search(..)`, ...).

// External dependencies
use std::time::{Duration, Instant};

// Internal dependencies
use crate::errors::LabError;
use crate::generate;
use crate::oracle;
use crate::report::TrialReport;
use algokit::brute_force::closest_pair::{distance, ClosestPair};
use algokit::brute_force::max_subarray::{range_sum, MaxSubarray};
use algokit::primitives::errors::AlgokitError;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of elements per trial.
const DEFAULT_ELEMENTS: usize = 10_000;

/// Default RNG seed.
const DEFAULT_SEED: u64 = 42;

/// Value range for GCD operand pairs.
const GCD_VALUE_MAX: u64 = 100;

/// Number of random polynomials evaluated per polynomial trial.
const POLYNOMIAL_CASES: usize = 10;

/// Coefficient magnitude cap for polynomial trials.
const POLYNOMIAL_COEFF_MAX: f64 = 3.0;

/// Pattern length for string matching trials.
const PATTERN_CHARS: usize = 10;

/// Relative tolerance for floating-point cross-checks.
const RELATIVE_TOLERANCE: f64 = 1e-9;

// ============================================================================
// Trial Builder
// ============================================================================

/// Fluent builder for a single self-checking, timed trial.
#[derive(Debug, Clone)]
pub struct Trial {
    name: String,
    elements: Option<usize>,
    seed: Option<u64>,
    duplicate_param: Option<&'static str>,
}

impl Trial {
    /// Create a trial named after the algorithm under test.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the number of elements (or cases) to generate.
    pub fn elements(mut self, n: usize) -> Self {
        if self.elements.is_some() {
            self.duplicate_param = Some("elements");
        }
        self.elements = Some(n);
        self
    }

    /// Set the RNG seed for reproducible input.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Resolve defaults and validate the configuration.
    fn settle(&self, min_elements: usize) -> Result<(usize, u64), LabError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(LabError::DuplicateParameter { parameter });
        }
        let n = self.elements.unwrap_or(DEFAULT_ELEMENTS);
        if n < min_elements {
            return Err(LabError::InvalidElements {
                got: n,
                min: min_elements,
            });
        }
        Ok((n, self.seed.unwrap_or(DEFAULT_SEED)))
    }

    fn report(self, elements: usize, elapsed: Duration) -> TrialReport {
        TrialReport {
            name: self.name,
            elements,
            elapsed,
        }
    }

    fn mismatch(self, detail: impl Into<String>) -> LabError {
        LabError::Mismatch {
            trial: self.name,
            detail: detail.into(),
        }
    }

    // ========================================================================
    // Runners
    // ========================================================================

    /// Time an in-place sort over random integers and cross-check against
    /// the standard library sort.
    pub fn run_sort<F>(self, sort: F) -> Result<TrialReport, LabError>
    where
        F: FnOnce(&mut [i64]),
    {
        let (n, seed) = self.settle(1)?;
        let mut data = generate::uniform_ints(n, seed);
        let expected = oracle::reference_sort(&data);

        let start = Instant::now();
        sort(&mut data);
        let elapsed = start.elapsed();

        if data != expected {
            return Err(self.mismatch("output differs from reference sort"));
        }
        Ok(self.report(n, elapsed))
    }

    /// Time a search over a sorted array for a needle known to be present;
    /// the returned index must hold the needle.
    pub fn run_search<F>(self, search: F) -> Result<TrialReport, LabError>
    where
        F: FnOnce(&[i64], &i64) -> Option<usize>,
    {
        let (n, seed) = self.settle(1)?;
        let (data, needle) = generate::sorted_with_needle(n, seed);

        let start = Instant::now();
        let found = search(&data, &needle);
        let elapsed = start.elapsed();

        match found {
            Some(i) if data.get(i) == Some(&needle) => Ok(self.report(n, elapsed)),
            Some(i) => Err(self.mismatch(format!(
                "index {i} does not hold the needle {needle}"
            ))),
            None => Err(self.mismatch(format!("needle {needle} is present but was not found"))),
        }
    }

    /// Time a GCD function over a batch of random operand pairs and
    /// cross-check every result against iterative Euclid.
    pub fn run_gcd<F>(self, gcd_fn: F) -> Result<TrialReport, LabError>
    where
        F: Fn(u64, u64) -> u64,
    {
        let (cases, seed) = self.settle(1)?;
        let pairs = generate::uniform_pairs(cases, GCD_VALUE_MAX, seed);

        let start = Instant::now();
        let results: Vec<u64> = pairs.iter().map(|&(a, b)| gcd_fn(a, b)).collect();
        let elapsed = start.elapsed();

        for (&(a, b), &got) in pairs.iter().zip(&results) {
            let want = oracle::reference_gcd(a, b);
            if got != want {
                return Err(self.mismatch(format!("gcd({a}, {b}) = {got}, expected {want}")));
            }
        }
        Ok(self.report(cases, elapsed))
    }

    /// Time a polynomial evaluator at `x` over a batch of random coefficient
    /// sets of the configured degree, cross-checking against an iterative
    /// Horner fold within relative tolerance.
    pub fn run_polynomial<F>(self, x: f64, eval: F) -> Result<TrialReport, LabError>
    where
        F: Fn(&[f64], f64) -> Result<f64, AlgokitError>,
    {
        let (degree, seed) = self.settle(1)?;
        let cases: Vec<Vec<f64>> = (0..POLYNOMIAL_CASES)
            .map(|case| {
                generate::float_coefficients(degree, POLYNOMIAL_COEFF_MAX, seed + case as u64)
            })
            .collect();

        let start = Instant::now();
        let results: Result<Vec<f64>, AlgokitError> =
            cases.iter().map(|coeffs| eval(coeffs, x)).collect();
        let elapsed = start.elapsed();
        let results = results?;

        for (coeffs, &got) in cases.iter().zip(&results) {
            let want = oracle::reference_polyval(coeffs, x);
            if !roughly_equal(got, want) {
                return Err(self.mismatch(format!(
                    "value {got} at x = {x} differs from reference {want}"
                )));
            }
        }
        Ok(self.report(degree, elapsed))
    }

    /// Time a maximum subarray routine and cross-check its sum against
    /// Kadane's scan, plus the internal consistency of the reported bounds.
    pub fn run_max_subarray<F>(self, max_subarray: F) -> Result<TrialReport, LabError>
    where
        F: FnOnce(&[i64]) -> Result<MaxSubarray, AlgokitError>,
    {
        let (n, seed) = self.settle(1)?;
        let data = generate::uniform_ints(n, seed);

        let start = Instant::now();
        let result = max_subarray(&data)?;
        let elapsed = start.elapsed();

        if result.start > result.end || result.end >= data.len() {
            return Err(self.mismatch(format!(
                "bounds [{}, {}] are not a valid range into {n} elements",
                result.start, result.end
            )));
        }
        let recomputed = range_sum(&data, result.start, result.end);
        if recomputed != result.sum {
            return Err(self.mismatch(format!(
                "reported sum {} but [{}, {}] sums to {recomputed}",
                result.sum, result.start, result.end
            )));
        }
        // reference_max_subarray_sum is total on non-empty input; n >= 1 here.
        let want = oracle::reference_max_subarray_sum(&data).unwrap_or(result.sum);
        if result.sum != want {
            return Err(self.mismatch(format!(
                "maximum sum {} differs from Kadane reference {want}",
                result.sum
            )));
        }
        Ok(self.report(n, elapsed))
    }

    /// Time a closest-pair routine over distinct random points and verify no
    /// pair is closer than the reported distance.
    pub fn run_closest_pair<F>(self, closest: F) -> Result<TrialReport, LabError>
    where
        F: FnOnce(&[(f64, f64)]) -> Result<ClosestPair<f64>, AlgokitError>,
    {
        let (n, seed) = self.settle(2)?;
        let points = generate::distinct_points(n, seed);

        let start = Instant::now();
        let result = closest(&points)?;
        let elapsed = start.elapsed();

        if result.i >= result.j || result.j >= points.len() {
            return Err(self.mismatch(format!(
                "pair indices ({}, {}) are not an ordered pair into {n} points",
                result.i, result.j
            )));
        }
        let recomputed = distance(points[result.i], points[result.j]);
        if !roughly_equal(result.distance, recomputed) {
            return Err(self.mismatch(format!(
                "reported distance {} but the pair is {recomputed} apart",
                result.distance
            )));
        }
        if !oracle::verify_closest_distance(&points, result.distance) {
            return Err(self.mismatch(format!(
                "a pair closer than the reported {} exists",
                result.distance
            )));
        }
        Ok(self.report(n, elapsed))
    }

    /// Time a string matcher against random text with a pattern sliced out
    /// of it; the match it reports must actually occur there.
    pub fn run_string_matching<F>(self, matcher: F) -> Result<TrialReport, LabError>
    where
        F: FnOnce(&str, &str) -> Option<usize>,
    {
        let (n, seed) = self.settle(PATTERN_CHARS)?;
        let (text, pattern, _) = generate::embedded_pattern(n, PATTERN_CHARS, seed);

        let start = Instant::now();
        let found = matcher(&text, &pattern);
        let elapsed = start.elapsed();

        match found {
            Some(k)
                if text
                    .as_bytes()
                    .get(k..)
                    .is_some_and(|tail| tail.starts_with(pattern.as_bytes())) =>
            {
                Ok(self.report(n, elapsed))
            }
            Some(k) => Err(self.mismatch(format!("offset {k} does not start the pattern"))),
            None => Err(self.mismatch("embedded pattern was not found")),
        }
    }
}

// ============================================================================
// Float Comparison
// ============================================================================

/// Relative floating-point comparison with an absolute floor at 1.
fn roughly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= RELATIVE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
