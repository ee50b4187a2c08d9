//! Application layer
//! 
//! This layer contains:
//! - Errors: Parse, configuration and API errors

pub mod errors;
