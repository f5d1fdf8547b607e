//! Common utility functions

pub mod validation;
