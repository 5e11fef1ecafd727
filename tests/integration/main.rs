//! End-to-end registration scenarios across every crate.

mod faculty_test;
mod helpers;
mod registration_test;
mod roster_test;
mod validation_test;
