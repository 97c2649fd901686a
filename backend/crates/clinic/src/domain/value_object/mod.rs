//! Value Object Module

pub mod age;
pub mod blood_group;
pub mod password;
pub mod person_name;
pub mod phone_number;
pub mod required_text;

pub use kernel::id::{DoctorId, PatientId};
