pub mod function;
pub mod home;
pub mod no_results;
pub mod practice;
