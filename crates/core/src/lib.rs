//! Core for the productstore project.
//!
//! Pure domain types and the storage contract. Nothing in this crate performs
//! I/O; concrete backends live in the `productstore` crate.

pub mod product;
pub mod storage;
