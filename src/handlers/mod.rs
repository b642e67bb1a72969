// src/handlers/mod.rs

pub mod health;
pub mod quiz;
pub mod quiz_result;
pub mod quiz_user;
