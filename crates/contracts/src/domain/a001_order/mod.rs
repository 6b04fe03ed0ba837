pub mod aggregate;
pub mod list_model;
pub mod seed;
