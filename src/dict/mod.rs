pub mod dictionary;
pub mod entity;
pub mod loader;
pub mod periodic_table;
