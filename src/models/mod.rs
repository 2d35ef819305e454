pub mod answer;
pub mod performance;
pub mod question;
pub mod user_response;
