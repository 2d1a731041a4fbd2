// src/lib.rs
//! Terminal client for a portfolio-analysis service. The user's free-text
//! portfolio is posted to the service and the returned advice is rendered
//! along with a session-local count of completed analyses.

pub mod api;
pub mod controller;
pub mod error;
pub mod models;
pub mod ui;
