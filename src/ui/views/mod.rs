pub mod notice;
pub mod quiz;
pub mod setup;
