use anyhow::Result;
use log::{debug, warn};
use std::io;

use crate::cli::parse_fields;
use crate::config::Config;
use crate::core::classify::detect_type;
use crate::core::matcher::find_best_match;
use crate::io::output;
use crate::io::store;

/// Run the `get_tpl` command: load the store, match the supplied fields,
/// and print either the winning template name or the type report.
pub fn handle_get_tpl(raw_fields: &[String]) -> Result<()> {
    let config = Config::load()?;
    let contents = store::load_templates(&config.store_path)?;
    for issue in &contents.issues {
        warn!("skipping store record {}: {}", issue.index, issue.reason);
    }

    let input_fields = parse_fields(raw_fields);
    debug!(
        "matching {} field(s) against {} template(s)",
        input_fields.len(),
        contents.templates.len()
    );

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match find_best_match(&input_fields, &contents.templates) {
        Some(name) => output::write_match(&mut writer, name),
        None => {
            let report = input_fields
                .iter()
                .map(|(name, value)| (name.clone(), detect_type(value)))
                .collect();
            output::write_type_report(&mut writer, &report)
        }
    }
}
