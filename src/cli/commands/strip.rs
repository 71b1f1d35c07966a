//! Strip command implementation.

use std::io::Read as _;

use podium_lib::filter;

use crate::cli::StripArgs;
use crate::error::Result;

/// Execute the strip command.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub fn execute(args: &StripArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    println!("{}", filter::strip_markup(Some(text.trim_end_matches('\n'))));
    Ok(())
}
