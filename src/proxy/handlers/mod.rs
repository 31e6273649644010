pub mod chat;
pub mod errors;
