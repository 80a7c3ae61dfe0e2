pub mod demo;
pub mod generate;
pub mod options;
pub mod serve;
