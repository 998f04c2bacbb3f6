//! API layer - REST routes and the in-process client

pub mod native;
pub mod rest;
