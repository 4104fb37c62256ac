pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::*;
