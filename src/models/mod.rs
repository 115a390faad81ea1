pub mod patch;
pub mod plan;
pub mod profile;
