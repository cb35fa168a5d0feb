use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::io::store;

/// Check every record in the template store, reporting skipped records.
/// Exits non-zero when any record is invalid.
pub fn validate_store() -> Result<()> {
    let config = Config::load()?;
    let contents = store::load_templates(&config.store_path)?;

    for template in &contents.templates {
        println!(
            "{} {} ({} field{})",
            "✓".green(),
            template.name,
            template.fields.len(),
            if template.fields.len() == 1 { "" } else { "s" }
        );
    }
    for issue in &contents.issues {
        println!("{} record {}: {}", "✗".red(), issue.index, issue.reason);
    }

    if contents.issues.is_empty() {
        println!(
            "{} template(s), no invalid records",
            contents.templates.len()
        );
        Ok(())
    } else {
        anyhow::bail!(
            "{} invalid record(s) in {}",
            contents.issues.len(),
            config.store_path.display()
        );
    }
}
