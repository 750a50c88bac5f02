//! Salary calculations.
//!
//! Net salary is derived once, when a record is written, from the caller's
//! gross figure and the tax rate of the record's experience tier.

pub mod net_salary;

pub use net_salary::compute_net;
