//! Mathematical algorithms: GCD, integer exponentiation, and polynomial
//! evaluation.

pub mod gcd;
pub mod polynomial;
pub mod power;
