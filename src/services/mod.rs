// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod diagnostics;
pub mod place_service;
pub mod seed_data;

pub use diagnostics::*;
pub use place_service::*;
pub use seed_data::*;
