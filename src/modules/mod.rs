pub mod home;
pub mod notes;
