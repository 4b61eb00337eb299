pub mod contact;
pub mod demo_requests;
pub mod manifest;
pub mod root;
