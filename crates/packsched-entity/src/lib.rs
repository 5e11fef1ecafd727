//! # packsched-entity
//!
//! Domain entity models for PackScheduler. Every struct in this crate is a
//! value object: it validates its own fields on construction and carries no
//! roster or schedule state. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod course;
pub mod user;
