use clap::Parser;

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::*;

/// # Errors
///
/// Will return `Err` if the parsed arguments do not validate
pub fn args_checks() -> Result<CleanArgs, String> {
    Args::parse().validate()
}
