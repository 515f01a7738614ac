mod loading;
mod session;

pub use loading::{load_reference, load_used_log};
pub use session::Session;
