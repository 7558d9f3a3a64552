use day1::sum_all_digits;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    util::init_logging();

    let input = util::read_input_as_string()?;
    let total = sum_all_digits(input.lines()).context("summing literal and spelled digits")?;

    println!("{total}");

    Ok(())
}
