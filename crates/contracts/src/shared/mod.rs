pub mod indicators;
pub mod list_query;
pub mod list_settings;
pub mod selection;
