pub mod contact;
pub mod contact_response;
