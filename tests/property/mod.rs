//! Property-Based Tests Module

mod set_algebra;
