pub mod audit;
pub mod curriculum;
pub mod mentee;
pub mod mentor;
pub mod schedule;
pub mod user;
