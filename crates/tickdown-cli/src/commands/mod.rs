pub mod fmt;
pub mod run;
