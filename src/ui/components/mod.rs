mod dialog;
mod fetch_relay;
mod save_prompt;
mod status_bar;
mod url_bar;
mod viewer;

pub use dialog::Dialog;
pub use fetch_relay::FetchRelay;
pub use save_prompt::SavePrompt;
pub use status_bar::StatusBar;
pub use url_bar::UrlBar;
pub use viewer::Viewer;
