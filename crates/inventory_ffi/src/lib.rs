//! FFI crate exposing the inventory core to the mobile UI shell.

pub mod api;
