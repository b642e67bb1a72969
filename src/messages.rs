// src/messages.rs

//! Client-facing messages carried in `{"error": ...}` bodies.

pub const INVALID_SECRET_CODE: &str = "Invalid or missing secret code";
pub const INVALID_CLUB_ID: &str = "Invalid or missing ClubID";
pub const QUIZ_NOT_FOUND: &str = "Quiz not found";
pub const ACCESS_DENIED: &str = "Access denied";

pub const ERROR_CREATING_QUIZ: &str = "Error creating quiz";
pub const ERROR_FETCHING_QUIZZES: &str = "Error fetching quizzes";
pub const ERROR_FETCHING_QUIZ: &str = "Error fetching quiz";
pub const ERROR_SUBMITTING_QUIZ_RESULT: &str = "Error submitting quiz result";
pub const ERROR_FETCHING_QUIZ_RESULTS: &str = "Error fetching quiz results";
pub const ERROR_CREATING_USER: &str = "Error creating user";
