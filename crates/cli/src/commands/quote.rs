//! `bc-cli quote <id>...`

use std::io::Write;

use black_cable_core::{BundleSelection, Catalog, ContactSummary};

use super::CommandError;

/// Build a selection from IDs in order, skipping repeats.
fn select(catalog: &Catalog, ids: &[String]) -> Result<BundleSelection, CommandError> {
    let mut selection = BundleSelection::new();
    for id in ids {
        let service = catalog
            .get(id)
            .ok_or_else(|| CommandError::UnknownService(id.clone()))?;
        if !selection.add(service.clone()) {
            tracing::warn!("{id} is already in the bundle, skipping");
        }
    }
    Ok(selection)
}

/// Price the given services and print the breakdown.
///
/// With `json`, prints the contact hand-off summary instead.
///
/// # Errors
///
/// Returns an error if an ID is unknown or writing fails.
pub fn quote(out: &mut impl Write, ids: &[String], json: bool) -> Result<(), CommandError> {
    let selection = select(&Catalog::standard(), ids)?;

    if json {
        let summary = ContactSummary::from_selection(&selection);
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    let quote = selection.quote();
    for service in selection.iter() {
        writeln!(out, "{:<24}{:>10}", service.name, service.price.to_string())?;
    }
    writeln!(out, "{:<24}{:>10}", "Subtotal", quote.display_subtotal())?;
    if let Some(label) = quote.tier.label() {
        writeln!(
            out,
            "{:<24}{:>10}",
            format!("{label} ({}% off)", quote.tier.percent()),
            format!("-{}", quote.display_discount()),
        )?;
    }
    writeln!(out, "{:<24}{:>10}", "Total / month", quote.display_total())?;
    Ok(())
}
