//! Statistics printout command

use crate::output::print_statistics;
use crate::stats::StatsStore;

/// Load the persisted statistics and print a summary
///
/// A store with no record yet prints all zeros.
///
/// # Errors
///
/// Returns an error when the store cannot be read or holds a malformed
/// record.
pub fn run_stats<S: StatsStore>(store: &mut S) -> Result<(), String> {
    let stats = store
        .load()
        .map_err(|e| format!("could not read statistics: {e}"))?
        .unwrap_or_default();

    print_statistics(&stats);
    println!();
    Ok(())
}
