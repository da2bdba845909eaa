//! Dense key code tables.
//!
//! [`CodeTableBuilder`] turns parsed capability records into a [`CodeTable`]:
//! a vector indexed directly by key code, with one [`Slot`] for every code from
//! 0 up to the highest assigned code.

pub mod builder;
pub mod code_table;

pub use builder::CodeTableBuilder;
pub use code_table::{CodeTable, Slot};
