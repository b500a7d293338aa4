pub mod core;
pub mod request;
