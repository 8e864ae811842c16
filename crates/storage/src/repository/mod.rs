pub mod candidate;
pub mod category;
pub mod score;
pub mod user_profile;
pub mod year;
