//! Mortgage site library
//!
//! This library exposes the core functionality of the mortgage site for
//! the server binary and for testing.

pub mod app;
pub mod blocks;
pub mod config;
pub mod content;
pub mod database;
pub mod error;
pub mod routes;
pub mod services;
pub mod views;
