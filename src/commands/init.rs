use anyhow::Result;

use crate::config::Config;

/// Starter records written by `fieldmap init`
const STARTER_TEMPLATES: &str = r#"[
  { "name": "User Data", "login": "email", "tel": "phone" },
  { "name": "Order Form", "customer": "text", "order_id": "text", "order_date": "date", "contact": "phone" },
  { "name": "Information Request", "customer_name": "text", "customer_email": "email", "feedback_date": "date", "comments": "text" },
  { "name": "Feedback", "requester_name": "text", "requester_email": "email", "request_date": "date", "message": "text" }
]
"#;

/// Create a starter template store at the configured path
pub fn init_store(force: bool) -> Result<()> {
    let config = Config::load()?;
    let store_path = config.store_path;

    if store_path.exists() && !force {
        anyhow::bail!("Template store already exists. Use --force to overwrite.");
    }

    std::fs::write(&store_path, STARTER_TEMPLATES)?;
    println!("Created template store at {}", store_path.display());

    Ok(())
}
