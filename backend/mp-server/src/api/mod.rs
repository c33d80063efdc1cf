pub mod contact;
pub mod designs;
pub mod error;
