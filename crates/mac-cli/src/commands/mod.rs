pub mod check;
pub mod convert;
pub mod examples;
pub mod find;
pub mod show;
