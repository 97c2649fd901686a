//! Entity Module

pub mod doctor;
pub mod patient;
pub mod visit;
