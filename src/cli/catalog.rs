use anyhow::Result;

use crate::workout::default_catalog;

pub fn handle_catalog_command() -> Result<()> {
    let catalog = default_catalog();
    println!("{} exercises:", catalog.len());
    for entry in &catalog {
        println!("  {:<22} {}", entry.name, entry.muscle_group.as_str());
    }
    Ok(())
}
