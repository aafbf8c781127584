//! Business rules over the persistence gateway

pub mod employee;
