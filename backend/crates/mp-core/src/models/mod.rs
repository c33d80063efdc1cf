pub mod contact_message;
pub mod design;
