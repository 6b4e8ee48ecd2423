//! Infrastructure layer - database, storage wiring, and error translation.

pub mod db;
pub mod db_errors;
pub mod memory;
pub mod state;
