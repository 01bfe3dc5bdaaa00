//! Request middleware: role extraction and error mapping.

pub mod error;
pub mod role;
