//! Registration workflow spanning course rolls and student schedules.

pub mod manager;
mod promotion;

pub use manager::RegistrationManager;
