// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod diagnostics;
pub mod place;

pub use diagnostics::*;
pub use place::*;
