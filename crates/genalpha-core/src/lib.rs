pub mod dictionary;
pub mod history;
pub mod preprocess;
pub mod sanitize;
pub mod settings;

pub use history::{History, MAX_HISTORY};
pub use sanitize::sanitize_api_key;
