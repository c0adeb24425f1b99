mod state;
mod upload;

pub use state::AppState;
pub use upload::{FILE_FIELD, UploadSubmission};
