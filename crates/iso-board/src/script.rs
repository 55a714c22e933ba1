//! Line-based event scripts used as an input source.
//!
//! ```text
//! # hover the b1 knight, then pick it up
//! move 450 350
//! down 450 350
//! frame
//! up 450 350
//! quit
//! ```

use chess_iso::{InputEvent, InputSource};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors that can occur when parsing an event script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: expected two integer coordinates after '{command}'")]
    BadCoordinates { line: usize, command: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Event(InputEvent),
    EndFrame,
}

/// An [`InputSource`] replaying a parsed script.
///
/// `frame` lines end the current batch. Once the script runs out, one last
/// batch boundary is reported so the final events get rendered, and every
/// poll after that yields [`InputEvent::Quit`].
#[derive(Debug)]
pub struct ScriptSource {
    steps: VecDeque<Step>,
    drained: bool,
}

impl ScriptSource {
    /// Parses a whole script up front.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut steps = VecDeque::new();
        for (index, raw) in script.lines().enumerate() {
            let line = index + 1;
            let text = raw.split('#').next().unwrap_or_default().trim();
            if text.is_empty() {
                continue;
            }

            let mut words = text.split_whitespace();
            let command = words.next().unwrap_or_default();
            let step = match command {
                "frame" => Step::EndFrame,
                "quit" => Step::Event(InputEvent::Quit),
                "move" | "down" | "up" => {
                    let coords: Vec<i32> = words.map(str::parse).collect::<Result<_, _>>().map_err(
                        |_| ScriptError::BadCoordinates {
                            line,
                            command: command.to_string(),
                        },
                    )?;
                    let [x, y] = coords[..] else {
                        return Err(ScriptError::BadCoordinates {
                            line,
                            command: command.to_string(),
                        });
                    };
                    Step::Event(match command {
                        "move" => InputEvent::PointerMove { x, y },
                        "down" => InputEvent::PointerDown { x, y },
                        _ => InputEvent::PointerUp { x, y },
                    })
                }
                other => {
                    return Err(ScriptError::UnknownCommand {
                        line,
                        command: other.to_string(),
                    })
                }
            };
            steps.push_back(step);
        }

        Ok(ScriptSource {
            steps,
            drained: false,
        })
    }

    /// Number of steps not yet replayed.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptSource {
    fn poll_event(&mut self) -> Option<InputEvent> {
        match self.steps.pop_front() {
            Some(Step::Event(event)) => Some(event),
            Some(Step::EndFrame) => None,
            None if self.drained => Some(InputEvent::Quit),
            None => {
                self.drained = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_comments() {
        let mut source = ScriptSource::parse(
            "# comment\nmove 1 2\n\ndown 3 4 # trailing\nframe\nup -5 6\nquit\n",
        )
        .unwrap();
        assert_eq!(source.remaining(), 5);
        assert_eq!(source.poll_event(), Some(InputEvent::PointerMove { x: 1, y: 2 }));
        assert_eq!(source.poll_event(), Some(InputEvent::PointerDown { x: 3, y: 4 }));
        assert_eq!(source.poll_event(), None);
        assert_eq!(source.poll_event(), Some(InputEvent::PointerUp { x: -5, y: 6 }));
        assert_eq!(source.poll_event(), Some(InputEvent::Quit));
    }

    #[test]
    fn end_of_script_flushes_then_quits() {
        let mut source = ScriptSource::parse("move 1 1").unwrap();
        assert_eq!(source.poll_event(), Some(InputEvent::PointerMove { x: 1, y: 1 }));
        assert_eq!(source.poll_event(), None);
        assert_eq!(source.poll_event(), Some(InputEvent::Quit));
        assert_eq!(source.poll_event(), Some(InputEvent::Quit));
    }

    #[test]
    fn rejects_unknown_command() {
        assert_eq!(
            ScriptSource::parse("move 1 1\njump 2 2").unwrap_err(),
            ScriptError::UnknownCommand {
                line: 2,
                command: "jump".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_coordinates() {
        for script in ["down 1", "down 1 2 3", "down x 2"] {
            assert!(matches!(
                ScriptSource::parse(script),
                Err(ScriptError::BadCoordinates { line: 1, .. })
            ));
        }
    }

    #[test]
    fn extreme_coordinates_replay_as_misses() {
        use chess_iso::{run_frame, Frame, FrameOutcome, GameView, ViewConfig};

        let mut source =
            ScriptSource::parse("move -2147483648 0
down 2147483647 -2147483648
").unwrap();
        let mut view = GameView::new(&ViewConfig::default());
        let mut frame = Frame::default();
        assert_eq!(run_frame(&mut view, &mut source, &mut frame), FrameOutcome::Continue);
        assert_eq!(view.hover(), None);
        assert_eq!(view.selected(), None);
        assert_eq!(frame.tiles.len(), 64);
    }
}
