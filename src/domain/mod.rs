//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the address book's scalar
//! values: contact names, phone numbers, and birthdays. These value objects
//! validate at construction time and prevent invalid data from being
//! represented in the system.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
