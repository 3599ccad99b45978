use crate::constants::LONG_CLICK_DELAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Select,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Up, Button::Down, Button::Select];

    fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Select => 2,
        }
    }
}

/// Logical input events the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    UpShort,
    UpLong,
    DownShort,
    SelectShort,
    SelectLong,
}

impl ButtonEvent {
    pub fn short(button: Button) -> Self {
        match button {
            Button::Up => ButtonEvent::UpShort,
            Button::Down => ButtonEvent::DownShort,
            Button::Select => ButtonEvent::SelectShort,
        }
    }

    /// `None` for buttons without a long-click handler.
    pub fn long(button: Button) -> Option<Self> {
        match button {
            Button::Up => Some(ButtonEvent::UpLong),
            Button::Down => None,
            Button::Select => Some(ButtonEvent::SelectLong),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Hold {
    elapsed: f32,
    long_fired: bool,
}

/// Turns raw up/down button levels into short and long clicks.
///
/// A long click fires once, while the button is still held, as soon as the
/// hold reaches the delay; the release that follows is swallowed. Buttons
/// without a long-click handler always report a short click on release.
#[derive(Debug, Clone)]
pub struct ClickRecognizer {
    long_delay: f32,
    holds: [Option<Hold>; 3],
}

impl Default for ClickRecognizer {
    fn default() -> Self {
        Self::new(LONG_CLICK_DELAY)
    }
}

impl ClickRecognizer {
    pub fn new(long_delay: f32) -> Self {
        Self {
            long_delay,
            holds: [None; 3],
        }
    }

    /// Feeds one frame's level for `button`, `dt` seconds after the last one.
    pub fn step(&mut self, button: Button, down: bool, dt: f32) -> Option<ButtonEvent> {
        let slot = &mut self.holds[button.index()];

        match (down, slot.as_mut()) {
            (true, None) => {
                *slot = Some(Hold::default());
                None
            }
            (true, Some(hold)) => {
                hold.elapsed += dt;
                if hold.long_fired || hold.elapsed < self.long_delay {
                    return None;
                }
                let long = ButtonEvent::long(button)?;
                hold.long_fired = true;
                Some(long)
            }
            (false, Some(_)) => match slot.take() {
                Some(hold) if !hold.long_fired => Some(ButtonEvent::short(button)),
                _ => None,
            },
            (false, None) => None,
        }
    }

    /// Forgets all held buttons.
    pub fn reset(&mut self) {
        self.holds = [None; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.1;

    fn hold(recognizer: &mut ClickRecognizer, button: Button, frames: usize) -> Vec<ButtonEvent> {
        let mut events = Vec::new();
        for _ in 0..frames {
            events.extend(recognizer.step(button, true, DT));
        }
        events.extend(recognizer.step(button, false, DT));
        events
    }

    #[test]
    fn quick_press_is_short_click() {
        let mut recognizer = ClickRecognizer::default();
        assert_eq!(hold(&mut recognizer, Button::Up, 2), vec![ButtonEvent::UpShort]);
        assert_eq!(hold(&mut recognizer, Button::Select, 1), vec![ButtonEvent::SelectShort]);
    }

    #[test]
    fn long_hold_fires_once_and_swallows_release() {
        let mut recognizer = ClickRecognizer::new(0.5);
        assert_eq!(hold(&mut recognizer, Button::Up, 20), vec![ButtonEvent::UpLong]);
        assert_eq!(hold(&mut recognizer, Button::Select, 8), vec![ButtonEvent::SelectLong]);
    }

    #[test]
    fn down_without_long_handler_clicks_on_release() {
        let mut recognizer = ClickRecognizer::new(0.5);
        assert_eq!(hold(&mut recognizer, Button::Down, 20), vec![ButtonEvent::DownShort]);
    }

    #[test]
    fn buttons_are_tracked_independently() {
        let mut recognizer = ClickRecognizer::new(0.5);
        assert_eq!(recognizer.step(Button::Up, true, DT), None);
        assert_eq!(recognizer.step(Button::Down, true, DT), None);
        assert_eq!(recognizer.step(Button::Down, false, DT), Some(ButtonEvent::DownShort));
        assert_eq!(recognizer.step(Button::Up, false, DT), Some(ButtonEvent::UpShort));
    }

    #[test]
    fn reset_drops_pending_holds() {
        let mut recognizer = ClickRecognizer::default();
        recognizer.step(Button::Select, true, DT);
        recognizer.reset();
        assert_eq!(recognizer.step(Button::Select, false, DT), None);
    }
}
