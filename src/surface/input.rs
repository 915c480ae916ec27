use sdl3::EventPump;
use sdl3::event::Event;
use sdl3::keyboard::Keycode;

/// Represents the input from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,   // The user has requested to quit the application.
    Grow,   // Add a batch of squares.
    Shrink, // Remove a batch of squares.
}

impl Input {
    /// Maps a key press to its input, if the key is bound.
    pub fn from_keycode(keycode: Keycode) -> Option<Self> {
        match keycode {
            Keycode::Escape => Some(Input::Quit),
            Keycode::Up => Some(Input::Grow),
            Keycode::Down => Some(Input::Shrink),
            _ => None,
        }
    }
}

/// Obtains the input from the user, draining every queued event.
pub(crate) fn get_input(pump: &mut EventPump, out: &mut Vec<Input>) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => out.push(Input::Quit),

            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(input) = Input::from_keycode(keycode) {
                    out.push(input);
                }
            }

            _ => (),
        }
    }
}
