//! Network reductions

pub mod barely_connected;
