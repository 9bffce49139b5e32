pub mod like;
pub mod message;
