pub mod question_store;
pub mod seed;

pub use question_store::{QuestionProvider, QuestionStore};
