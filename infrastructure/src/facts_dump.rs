//! Debug materialization of a fact set as rule-language clauses

use casewise_domain::FactSet;
use std::io;
use std::path::Path;
use tracing::debug;

/// Write `facts` to `path`, one clause per line (`rent_paid(user).`).
///
/// The file is overwritten on every call; nothing reads it back.
pub fn write_facts(path: &Path, facts: &FactSet) -> io::Result<()> {
    std::fs::write(path, facts.to_clauses())?;
    debug!("Wrote {} facts to {}", facts.len(), path.display());
    Ok(())
}
