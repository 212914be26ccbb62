use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagegrabError {
    #[error("error while handing the URL to the fetch worker")]
    ChannelError,
    #[error("error while writing a local file: {0}")]
    IOError(#[from] std::io::Error),
    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("error while driving the terminal: {0}")]
    TerminalError(#[from] tuirealm::terminal::TerminalError),
}
