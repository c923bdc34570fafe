pub mod config;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod index;
pub mod model;
pub mod state;
