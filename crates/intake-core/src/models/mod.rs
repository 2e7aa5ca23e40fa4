pub mod answer;
pub mod location;
pub mod response;
pub mod submission;
