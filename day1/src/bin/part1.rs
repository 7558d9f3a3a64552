use day1::sum_literal_digits;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    util::init_logging();

    let input = util::read_input_as_string()?;
    let total = sum_literal_digits(input.lines()).context("summing literal digits")?;

    println!("{total}");

    Ok(())
}
