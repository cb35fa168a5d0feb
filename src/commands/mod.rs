//! CLI command implementations for fieldmap operations.
//!
//! Each submodule handles one subcommand:
//! - **get_tpl**: match supplied fields against stored templates, falling
//!   back to a per-field type report
//! - **init**: create a starter template store
//! - **validate**: check the store for invalid records

pub mod get_tpl;
pub mod init;
pub mod validate;

pub use get_tpl::handle_get_tpl;
pub use init::init_store;
pub use validate::validate_store;
