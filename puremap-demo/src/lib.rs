mod fizzbuzz;

pub use fizzbuzz::{buzz_pattern, fizz_pattern, fizzbuzz, fizzbuzz_prefix};
