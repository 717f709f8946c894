//! `bc-cli coverage <zip>`

use std::io::Write;

use black_cable_core::{CoverageLookup, StaticCoverageTable, ZipCode};

use super::CommandError;

/// Report availability for a ZIP code.
///
/// # Errors
///
/// Returns an error if the ZIP code is invalid or writing fails.
pub fn check(out: &mut impl Write, zip: &str) -> Result<(), CommandError> {
    check_with(out, &StaticCoverageTable::launch_area(), zip)
}

fn check_with(
    out: &mut impl Write,
    lookup: &dyn CoverageLookup,
    zip: &str,
) -> Result<(), CommandError> {
    let zip = ZipCode::parse(zip)?;
    let result = lookup.lookup_coverage(&zip);

    match (result.available, result.speed, result.price) {
        (true, Some(speed), Some(price)) => {
            writeln!(out, "{zip}: available, up to {speed} from {price}/month")?;
        }
        (true, _, _) => writeln!(out, "{zip}: available")?,
        (false, _, _) => writeln!(
            out,
            "{zip}: not available yet. Leave your details and we'll let you know."
        )?,
    }
    Ok(())
}
