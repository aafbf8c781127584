//! Persistence gateway
//!
//! Plain async functions over the connection pool; all SQL lives here.

pub mod employee;
