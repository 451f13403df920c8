//! Screen modules

pub mod pin_code;
