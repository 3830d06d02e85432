use std::collections::HashSet;

use anyhow::{anyhow, Result};

use vaxtrack_domain::ports::Record;

/// Seed records must have positive, unique ids and satisfy their own invariants.
pub fn validate_seed_records<R: Record>(records: &[R]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        let id = record.id();
        if id.get() == 0 {
            return Err(anyhow!("{} seed contains id 0", R::COLLECTION));
        }
        if !seen.insert(id) {
            return Err(anyhow!("{} seed contains duplicate id {}", R::COLLECTION, id));
        }
        record
            .check_invariants()
            .map_err(|reason| anyhow!("{} seed record {}: {}", R::COLLECTION, id, reason))?;
    }
    Ok(())
}
