//! API layer: in-process client and REST routes

pub mod native;
pub mod rest;
