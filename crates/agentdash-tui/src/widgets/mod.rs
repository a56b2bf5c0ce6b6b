//! Custom widget components

mod header;
mod session_list;
mod status_bar;

pub use header::Header;
pub use session_list::SessionList;
pub use status_bar::{StatusBar, KEY_HINTS};
