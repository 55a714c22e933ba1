//! Pointer input and the per-frame event loop step.

use crate::render::Renderer;
use crate::GameView;
use std::collections::VecDeque;

/// Raw input delivered by the windowing layer, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMove { x: i32, y: i32 },
    PointerDown { x: i32, y: i32 },
    /// Ignored by the view; selection only reacts to presses.
    PointerUp { x: i32, y: i32 },
    Quit,
}

/// A source of input events polled once per frame.
pub trait InputSource {
    /// Returns the next pending event, or `None` when nothing more is
    /// queued for the current frame.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

impl InputSource for VecDeque<InputEvent> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}

/// Whether the control loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Drains pending events into `view`, then renders one frame.
///
/// Returns [`FrameOutcome::Quit`] without rendering as soon as a
/// [`InputEvent::Quit`] is polled.
pub fn run_frame<I, R>(view: &mut GameView, input: &mut I, renderer: &mut R) -> FrameOutcome
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    while let Some(event) = input.poll_event() {
        if event == InputEvent::Quit {
            tracing::debug!("quit requested");
            return FrameOutcome::Quit;
        }
        view.handle(event);
    }
    view.render(renderer);
    FrameOutcome::Continue
}
