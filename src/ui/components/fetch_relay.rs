use tui_realm_stdlib::Phantom;
use tuirealm::{Component, Event, MockComponent};

use crate::event::PagegrabEvent;
use crate::ui::Msg;

/// Hidden component subscribed to all events; turns fetch-port outcomes into
/// messages so they reach the update loop whatever has focus.
#[derive(Default, MockComponent)]
pub struct FetchRelay {
    component: Phantom,
}

impl Component<Msg, PagegrabEvent> for FetchRelay {
    fn on(&mut self, ev: Event<PagegrabEvent>) -> Option<Msg> {
        match ev {
            Event::User(PagegrabEvent::FetchDone(body)) => Some(Msg::FetchDone(body)),
            Event::User(PagegrabEvent::FetchFailed(reason)) => Some(Msg::FetchFailed(reason)),
            _ => None,
        }
    }
}
