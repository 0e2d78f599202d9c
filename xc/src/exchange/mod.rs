//! Exchange functionals

pub mod slater;
