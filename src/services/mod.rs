pub mod allergy;
pub mod validation;

pub use allergy::*;
pub use validation::*;
