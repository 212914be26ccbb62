mod components;
mod model;

pub use model::Model;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    None,
    Quit,
    UrlBlur,
    ViewerBlur,
    UrlSubmit(String),
    FetchDone(String),
    FetchFailed(String),
    ExportRequest,
    SavePathSubmit(String),
    SaveCancel,
    DialogClose,
}

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum Id {
    UrlBar,
    Viewer,
    StatusBar,
    SavePrompt,
    Dialog,
    FetchRelay,
}
