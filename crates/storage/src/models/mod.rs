mod candidate;
mod category;
mod score;
mod user_profile;
mod year;

pub use candidate::Candidate;
pub use category::{Category, Criterion};
pub use score::{CriterionScore, ScoreRecord};
pub use user_profile::UserProfile;
pub use year::Year;
