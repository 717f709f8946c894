//! `bc-cli catalog`

use std::io::Write;

use black_cable_core::Catalog;

use super::CommandError;

/// List every service with its monthly price.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn list(out: &mut impl Write) -> Result<(), CommandError> {
    let catalog = Catalog::standard();
    let width = catalog.iter().map(|s| s.id.as_str().len()).max().unwrap_or(0);

    for service in &catalog {
        writeln!(
            out,
            "{:<width$}  {} - {}/month",
            service.id.as_str(),
            service.name,
            service.price,
        )?;
        writeln!(out, "{:<width$}  {}", "", service.description)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_services() {
        let mut out = Vec::new();
        list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("internet  Fiber Internet - $49.99/month"));
        assert!(text.contains("security  Smart Home Security - $29.99/month"));
        assert_eq!(text.lines().count(), 8);
    }
}
