use crate::fetch;

use crossbeam::channel::{Receiver, Sender};
use tokio::runtime::Runtime;
use tuirealm::listener::{ListenerResult, Poll};
use tuirealm::Event;

#[derive(Debug, PartialEq, Eq, Clone, PartialOrd)]
pub enum PagegrabEvent {
    FetchDone(String),
    FetchFailed(String),
}

/// Event-listener port that runs fetches off the UI thread. URLs arrive from
/// the update loop over `rx`; each one is spawned on the owned runtime and
/// the outcome comes back through `done_rx` as a user event.
pub struct Fetcher {
    rx: Receiver<String>,
    done_tx: Sender<PagegrabEvent>,
    done_rx: Receiver<PagegrabEvent>,
    runtime: Runtime,
}

impl Fetcher {
    pub fn new(rx: Receiver<String>) -> Self {
        let (done_tx, done_rx) = crossbeam::channel::bounded(16);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to initialize Tokio runtime");

        Self {
            rx,
            done_tx,
            done_rx,
            runtime,
        }
    }
}

impl Poll<PagegrabEvent> for Fetcher {
    fn poll(&mut self) -> ListenerResult<Option<Event<PagegrabEvent>>> {
        while let Ok(url) = self.rx.try_recv() {
            let tx = self.done_tx.clone();
            self.runtime.spawn(async move {
                let event = match fetch::fetch_page(&url).await {
                    Ok(body) => PagegrabEvent::FetchDone(body),
                    Err(err) => PagegrabEvent::FetchFailed(err.to_string()),
                };
                let _ = tx.send(event);
            });
        }

        match self.done_rx.try_recv() {
            Ok(event) => Ok(Some(Event::User(event))),
            Err(_) => Ok(None),
        }
    }
}
