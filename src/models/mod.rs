//! Wire and storage models

pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
