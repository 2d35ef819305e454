pub mod docs;
pub mod health;
pub mod questions;
pub mod responses;
