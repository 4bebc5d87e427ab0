pub mod flags;
pub mod jobs;
pub mod pages;
pub mod ping;
