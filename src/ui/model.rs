use std::time::Duration;

use crate::error::PagegrabError;
use crate::event::{Fetcher, PagegrabEvent};
use crate::{export, fetch};

use crossbeam::channel::Sender;
use tuirealm::props::{PropPayload, PropValue, TextSpan};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::widgets::Clear;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{
    Application, AttrValue, Attribute, EventListenerCfg, Sub, SubClause, SubEventClause, Update,
};

use super::components::{Dialog, FetchRelay, SavePrompt, StatusBar, UrlBar, Viewer};
use super::{Id, Msg};

/// Which popup, if any, currently holds focus.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Overlay {
    None,
    Dialog,
    SavePrompt,
}

pub struct Model<T>
where
    T: TerminalAdapter,
{
    pub app: Application<Id, Msg, PagegrabEvent>,
    pub quit: bool,
    pub redraw: bool,
    pub terminal: TerminalBridge<T>,
    job_tx: Sender<String>,
    content: String,
    overlay: Overlay,
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new() -> Self {
        let (job_tx, job_rx) = crossbeam::channel::bounded(16);

        let mut app = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(10), 10)
                .add_port(
                    Box::new(Fetcher::new(job_rx)),
                    Duration::from_millis(10),
                    10,
                ),
        );

        assert!(app
            .mount(Id::UrlBar, Box::new(UrlBar::default()), vec![])
            .is_ok());
        assert!(app
            .mount(Id::Viewer, Box::new(Viewer::default()), vec![])
            .is_ok());
        assert!(app
            .mount(Id::StatusBar, Box::new(StatusBar::default()), vec![])
            .is_ok());
        assert!(app
            .mount(
                Id::FetchRelay,
                Box::new(FetchRelay::default()),
                vec![Sub::new(SubEventClause::Any, SubClause::Always)]
            )
            .is_ok());
        assert!(app.active(&Id::UrlBar).is_ok());

        Self {
            app,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm().expect("failed to initialize terminal"),
            job_tx,
            content: String::new(),
            overlay: Overlay::None,
        }
    }

    pub fn run(&mut self) -> Result<(), PagegrabError> {
        self.terminal.enable_raw_mode()?;
        self.terminal.enter_alternate_screen()?;

        while !self.quit {
            match self.app.tick(tuirealm::PollStrategy::Once) {
                Err(err) => {
                    eprintln!("{err}");
                    break;
                }
                Ok(messages) => {
                    if messages.len() > 0 {
                        self.redraw = true;
                        for msg in messages.into_iter() {
                            let mut msg = Some(msg);
                            while msg.is_some() {
                                msg = self.update(msg);
                            }
                        }
                    }
                }
            }

            if self.redraw {
                self.redraw = false;
                self.view();
            }
        }

        self.terminal.leave_alternate_screen()?;
        self.terminal.disable_raw_mode()?;

        Ok(())
    }

    pub fn view(&mut self) {
        assert!(self
            .terminal
            .draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Fill(1),
                        Constraint::Length(1),
                    ])
                    .split(f.area());
                self.app.view(&Id::UrlBar, f, chunks[0]);
                self.app.view(&Id::Viewer, f, chunks[1]);
                self.app.view(&Id::StatusBar, f, chunks[2]);

                match self.overlay {
                    Overlay::None => {}
                    Overlay::Dialog => {
                        let area = popup_area(f.area(), 60, 4);
                        f.render_widget(Clear, area);
                        self.app.view(&Id::Dialog, f, area);
                    }
                    Overlay::SavePrompt => {
                        let area = popup_area(f.area(), 60, 3);
                        f.render_widget(Clear, area);
                        self.app.view(&Id::SavePrompt, f, area);
                    }
                }
            })
            .is_ok());
    }

    fn show_dialog(&mut self, dialog: Dialog) {
        self.close_overlay();
        assert!(self
            .app
            .remount(Id::Dialog, Box::new(dialog), vec![])
            .is_ok());
        assert!(self.app.active(&Id::Dialog).is_ok());
        self.overlay = Overlay::Dialog;
    }

    fn open_save_prompt(&mut self) {
        assert!(self
            .app
            .remount(Id::SavePrompt, Box::new(SavePrompt::default()), vec![])
            .is_ok());
        assert!(self.app.active(&Id::SavePrompt).is_ok());
        self.overlay = Overlay::SavePrompt;
    }

    fn close_overlay(&mut self) {
        match self.overlay {
            Overlay::None => return,
            Overlay::Dialog => {
                assert!(self.app.umount(&Id::Dialog).is_ok());
            }
            Overlay::SavePrompt => {
                assert!(self.app.umount(&Id::SavePrompt).is_ok());
            }
        }
        self.overlay = Overlay::None;
        assert!(self.app.active(&Id::UrlBar).is_ok());
    }

    fn do_export(&mut self, raw_path: &str) {
        let path = export::ensure_txt_extension(raw_path);
        match export::write_export(&path, &self.content) {
            Ok(()) => self.show_dialog(Dialog::success("File exported successfully.")),
            Err(err) => self.show_dialog(Dialog::error(&format!("Failed to save file: {err}"))),
        }
    }
}

impl Update<Msg> for Model<CrosstermTerminalAdapter> {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        if let Some(msg) = msg {
            self.redraw = true;
            match msg {
                Msg::None => None,
                Msg::UrlBlur => {
                    assert!(self.app.active(&Id::Viewer).is_ok());
                    None
                }
                Msg::ViewerBlur => {
                    assert!(self.app.active(&Id::UrlBar).is_ok());
                    None
                }
                Msg::UrlSubmit(raw) => {
                    match fetch::validate_url(&raw) {
                        None => self.show_dialog(Dialog::error("Please enter a URL.")),
                        Some(url) => {
                            tracing::info!("fetching {url}");
                            if self.job_tx.send(url).is_err() {
                                self.show_dialog(Dialog::error(
                                    &PagegrabError::ChannelError.to_string(),
                                ));
                            }
                        }
                    }
                    None
                }
                Msg::FetchDone(body) => {
                    let spans = body
                        .lines()
                        .map(|line| PropValue::TextSpan(TextSpan::from(line)))
                        .collect();
                    assert!(self
                        .app
                        .attr(
                            &Id::Viewer,
                            Attribute::Text,
                            AttrValue::Payload(PropPayload::Vec(spans)),
                        )
                        .is_ok());
                    self.content = body;
                    if self.overlay == Overlay::None {
                        assert!(self.app.active(&Id::Viewer).is_ok());
                    }
                    None
                }
                Msg::FetchFailed(reason) => {
                    tracing::warn!("fetch failed: {reason}");
                    self.show_dialog(Dialog::error(&reason));
                    None
                }
                Msg::ExportRequest => {
                    if export::validate_content(&self.content) {
                        self.open_save_prompt();
                    } else {
                        self.show_dialog(Dialog::error("No content to export."));
                    }
                    None
                }
                Msg::SavePathSubmit(raw_path) => {
                    self.close_overlay();
                    let raw_path = raw_path.trim().to_string();
                    if !raw_path.is_empty() {
                        self.do_export(&raw_path);
                    }
                    None
                }
                Msg::SaveCancel | Msg::DialogClose => {
                    self.close_overlay();
                    None
                }
                Msg::Quit => {
                    self.quit = true;
                    None
                }
            }
        } else {
            None
        }
    }
}

fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
