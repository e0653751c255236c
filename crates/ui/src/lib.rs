#![forbid(unsafe_code)]

pub mod controller;
pub mod messages;
pub mod vm;

pub use controller::{RaterController, RaterIntent};
