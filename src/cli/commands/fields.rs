//! fields command - List the built-in field names

use anyhow::Result;

use crate::core::field::GitField;

/// Print every built-in field name, one per line.
pub fn fields() -> Result<()> {
    for field in &GitField::BUILT_IN {
        println!("{}", field);
    }
    Ok(())
}
