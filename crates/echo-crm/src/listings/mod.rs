pub mod agreements;
pub mod copy;
pub mod domain;
pub mod memory;
pub mod store;
