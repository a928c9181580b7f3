// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod filter;
#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod repository;
pub mod store;

pub use filter::*;
#[cfg(test)]
pub use memory::*;
pub use postgres::*;
pub use repository::*;
pub use store::*;
