pub mod catalog;
pub mod error;
pub mod idea;
pub mod options;
pub mod selection;
pub mod synth;

pub use error::{Result, StoryplanError};
