//! API handlers
//!
//! Author: hephaex@gmail.com

pub mod entities;
pub mod health;
