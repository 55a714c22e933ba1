//! Hover and selection state for the interactive board.

use crate::glyph::glyph;
use crate::input::InputEvent;
use crate::projection::{IsoProjection, Point};
use crate::render::{DrawPiece, DrawTile, Frame, Renderer, TileStyle};
use crate::ViewConfig;
use chess_core::{Board, Square};
use chess_engine::generate_moves;

/// The current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece is selected; `moves` are its destinations in generation order.
    Selected { square: Square, moves: Vec<Square> },
}

/// Board, projection, and pointer-driven state for one viewport.
///
/// Hover follows pointer motion and never changes the selection. A press
/// on a piece selects it and replaces the cached destinations; a press
/// anywhere else clears the selection. The board itself never changes.
#[derive(Debug, Clone)]
pub struct GameView {
    board: Board,
    projection: IsoProjection,
    piece_lift: i32,
    hover: Option<Square>,
    selection: Selection,
}

impl GameView {
    /// Creates a view of the standard starting layout.
    pub fn new(config: &ViewConfig) -> Self {
        Self::with_board(Board::initial(), config)
    }

    /// Creates a view of an arbitrary board.
    pub fn with_board(board: Board, config: &ViewConfig) -> Self {
        GameView {
            board,
            projection: IsoProjection::new(config),
            piece_lift: config.piece_lift,
            hover: None,
            selection: Selection::Idle,
        }
    }

    /// The board being viewed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Screen mapping for the configured viewport.
    pub fn projection(&self) -> &IsoProjection {
        &self.projection
    }

    /// Square under the pointer, if any.
    pub fn hover(&self) -> Option<Square> {
        self.hover
    }

    /// Current selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected { square, .. } => Some(*square),
        }
    }

    /// Destinations of the selected piece; empty when idle.
    pub fn valid_moves(&self) -> &[Square] {
        match &self.selection {
            Selection::Idle => &[],
            Selection::Selected { moves, .. } => moves,
        }
    }

    /// Applies one input event. `Quit` is left to the control loop.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerUp { .. } | InputEvent::Quit => {}
        }
    }

    /// Updates the hover square from a pointer position.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        let hover = self.projection.screen_to_board(x, y);
        if hover != self.hover {
            tracing::trace!(?hover, x, y, "hover changed");
        }
        self.hover = hover;
    }

    /// Selects the piece under a pointer press, or clears the selection.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.select(self.projection.screen_to_board(x, y));
    }

    /// Selects `square` if it holds a piece, otherwise returns to idle.
    pub fn select(&mut self, square: Option<Square>) {
        self.selection = match square.filter(|&sq| !self.board.is_empty(sq)) {
            Some(square) => {
                let moves = generate_moves(&self.board, square);
                tracing::debug!(%square, moves = moves.len(), "selected");
                Selection::Selected { square, moves }
            }
            None => {
                if self.selection != Selection::Idle {
                    tracing::debug!("selection cleared");
                }
                Selection::Idle
            }
        };
    }

    /// Resolved fill style of `sq`: destination, then hover, then checkerboard.
    pub fn tile_style(&self, sq: Square) -> TileStyle {
        if self.valid_moves().contains(&sq) {
            TileStyle::ValidMove
        } else if self.hover == Some(sq) {
            TileStyle::Hover
        } else if sq.is_light() {
            TileStyle::Light
        } else {
            TileStyle::Dark
        }
    }

    /// True when `sq` is hovered and holds a piece.
    pub fn is_raised(&self, sq: Square) -> bool {
        self.hover == Some(sq) && !self.board.is_empty(sq)
    }

    /// Where the glyph on `sq` is drawn, lifted when hovered.
    pub fn piece_center(&self, sq: Square) -> Point {
        let center = self.projection.board_to_screen(sq);
        if self.is_raised(sq) {
            Point::new(center.x, center.y - self.piece_lift)
        } else {
            center
        }
    }

    /// Emits one frame: every tile row by row, each followed by its piece.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let tile_height = self.projection.tile_height();
        for square in Square::all() {
            renderer.draw_tile(&DrawTile {
                square,
                style: self.tile_style(square),
                outline: self.projection.outline(square),
            });

            if let Some((piece, color)) = self.board.piece_at(square) {
                let center = self.piece_center(square);
                renderer.draw_piece(&DrawPiece {
                    square,
                    piece,
                    color,
                    center,
                    raised: self.is_raised(square),
                    strokes: glyph(piece, center, tile_height),
                });
            }
        }
    }

    /// Renders one frame into a recorded [`Frame`].
    pub fn frame(&self) -> Frame {
        let mut frame = Frame::default();
        self.render(&mut frame);
        frame
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}
