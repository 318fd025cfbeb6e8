//! Wassalni Admin library.
//!
//! This crate provides the admin panel functionality as a library,
//! allowing it to be tested and reused (e.g. by the CLI for seeding).
//!
//! # Security
//!
//! This crate has write access to the platform database, including the
//! moderation flags that gate which providers may operate. Only deploy it
//! on private, access-controlled infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
