pub mod github;
pub mod runner;
