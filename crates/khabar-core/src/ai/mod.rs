pub mod providers;
mod summarizer;

pub use summarizer::{Summarizer, CONTENT_CHAR_LIMIT};
