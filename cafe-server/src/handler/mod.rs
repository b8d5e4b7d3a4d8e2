//! HTTP handlers for the CRUD resources

pub mod cafe;
pub mod employee;
