pub mod contact_message;
pub mod demo_request;
