pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod quiz;
pub mod session;
pub mod state;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod testing;
