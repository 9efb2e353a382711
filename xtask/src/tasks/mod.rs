pub mod tables;
pub mod tooling;
