use clap::{Parser, Subcommand};
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[command(name = "fieldmap")]
#[command(about = "Field type detection and form template matching", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match supplied fields against the stored templates
    #[command(name = "get_tpl")]
    GetTpl {
        /// Field values as --<name>=<value>; anything else is ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Create a starter template store
    Init {
        /// Force overwrite of an existing store
        #[arg(short, long)]
        force: bool,
    },

    /// Check the template store for invalid records
    Validate,
}

/// Extract `--key=value` arguments into a field map.
///
/// Arguments without the `--` prefix or without `=` are dropped without
/// comment; the value is everything after the first `=`; a repeated key
/// keeps its last value.
pub fn parse_fields(args: &[String]) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for arg in args {
        if let Some((key, value)) = arg
            .strip_prefix("--")
            .and_then(|rest| rest.split_once('='))
        {
            if !key.is_empty() {
                fields.insert(key.to_string(), value.to_string());
            }
        }
    }
    fields
}
