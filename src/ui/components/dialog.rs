use tui_realm_stdlib::Paragraph;
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, BorderType, Borders, Color, PropPayload, PropValue, TextSpan};
use tuirealm::{AttrValue, Attribute, Component, Event, MockComponent};

use crate::event::PagegrabEvent;
use crate::ui::Msg;

/// Modal message box. Holds focus until dismissed with Enter or Esc.
#[derive(MockComponent)]
pub struct Dialog {
    component: Paragraph,
}

impl Dialog {
    fn new(title: &str, message: &str, color: Color) -> Self {
        let mut component = Paragraph::default()
            .borders(Borders::default().modifiers(BorderType::Rounded).color(color))
            .foreground(color)
            .title(title, Alignment::Center);
        component.attr(
            Attribute::Text,
            AttrValue::Payload(PropPayload::Vec(vec![
                PropValue::TextSpan(TextSpan::from(message)),
                PropValue::TextSpan(TextSpan::from("press Enter to dismiss").fg(Color::DarkGray)),
            ])),
        );
        Self { component }
    }

    pub fn error(message: &str) -> Self {
        Self::new("Error", message, Color::Red)
    }

    pub fn success(message: &str) -> Self {
        Self::new("Success", message, Color::Green)
    }
}

impl Component<Msg, PagegrabEvent> for Dialog {
    fn on(&mut self, ev: Event<PagegrabEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            })
            | Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => Some(Msg::DialogClose),
            _ => Some(Msg::None),
        }
    }
}
