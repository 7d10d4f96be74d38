mod state;
mod tag_input;

pub use state::{App, FetchStatus};
pub use tag_input::TagInput;
