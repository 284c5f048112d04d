//! Invoice Analysis Relay
//!
//! This library provides the core functionality for the invoice-relay service,
//! which accepts uploaded PDF invoices, relays them to Azure Document
//! Intelligence, polls the resulting operation to completion, and projects
//! the analysis into a simplified invoice structure.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
