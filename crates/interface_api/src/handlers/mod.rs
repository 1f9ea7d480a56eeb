//! Request handlers

pub mod analysis;
pub mod claims;
pub mod health;
pub mod images;
