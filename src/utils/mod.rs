// Utility functions
pub mod currency;
pub mod date_format;
pub mod error;

pub use currency::*;
pub use error::*;
