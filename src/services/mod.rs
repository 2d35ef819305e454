pub mod grading_service;
pub mod performance_service;
pub mod question_service;
