/// Content panels reachable from the nav bar, in nav order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Home,
    About,
    Thoughts,
    Skills,
    Connect,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Home,
        Panel::About,
        Panel::Thoughts,
        Panel::Skills,
        Panel::Connect,
    ];

    /// Element id of the panel, also used as the nav button's `data-target`.
    pub fn id(self) -> &'static str {
        match self {
            Panel::Home => "home",
            Panel::About => "about",
            Panel::Thoughts => "thoughts",
            Panel::Skills => "skills",
            Panel::Connect => "connect",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

/// Quick-nav: `Digit1`..`Digit5` select panels in nav order.
#[inline]
pub fn panel_for_key_code(code: &str) -> Option<Panel> {
    match code {
        "Digit1" => Some(Panel::Home),
        "Digit2" => Some(Panel::About),
        "Digit3" => Some(Panel::Thoughts),
        "Digit4" => Some(Panel::Skills),
        "Digit5" => Some(Panel::Connect),
        _ => None,
    }
}

/// Quick-nav keys are left alone while the user is typing.
#[inline]
pub fn is_typing_target(tag_name: Option<&str>, content_editable: bool) -> bool {
    content_editable || matches!(tag_name, Some(t) if t.eq_ignore_ascii_case("input"))
}
