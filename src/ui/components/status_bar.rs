use tui_realm_stdlib::Label;
use tuirealm::props::Color;
use tuirealm::{AttrValue, Attribute, Component, Event, MockComponent};

use crate::event::PagegrabEvent;
use crate::ui::Msg;

/// Key-hint line along the bottom of the screen.
#[derive(MockComponent)]
pub struct StatusBar {
    component: Label,
}

impl Default for StatusBar {
    fn default() -> Self {
        let mut component = Label::default().foreground(Color::DarkGray);
        component.attr(
            Attribute::Text,
            AttrValue::String(String::from(
                "Enter: fetch HTML | Ctrl+E: export to file | Tab: switch focus | Esc: quit",
            )),
        );
        Self { component }
    }
}

impl Component<Msg, PagegrabEvent> for StatusBar {
    fn on(&mut self, _ev: Event<PagegrabEvent>) -> Option<Msg> {
        None
    }
}
