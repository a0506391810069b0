pub mod config_key;
pub mod display_name;
pub mod scope;
