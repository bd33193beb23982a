//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate router calls into screen-level operations.
//! - Keep UI/FFI layers decoupled from storage and routing details.

pub mod inventory_service;
