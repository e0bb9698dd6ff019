//! Scrapes a hotel's name, address, description and review score from a
//! booking site and stores it in SQLite behind a small HTTP API.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
