//! WebAssembly bindings for the isometric chessboard.
//!
//! The browser owns the canvas and the event loop; this crate owns the
//! board, hover and selection state, and hands back draw requests.
//!
//! # Usage
//!
//! ```javascript
//! import init, { IsoBoard } from 'chess-wasm';
//!
//! await init();
//!
//! const board = new IsoBoard();
//! canvas.onmousemove = (e) => board.pointerMove(e.offsetX, e.offsetY);
//! canvas.onmousedown = (e) => board.pointerDown(e.offsetX, e.offsetY);
//!
//! function draw() {
//!   const frame = board.frame();
//!   for (const tile of frame.tiles) { /* fill tile.outline with tile.fill */ }
//!   for (const piece of frame.pieces) { /* paint piece.strokes */ }
//!   requestAnimationFrame(draw);
//! }
//! ```

use chess_core::{Board, Square};
use chess_iso::glyph::Stroke;
use chess_iso::{DrawPiece, DrawTile, GameView, Point, Renderer, ViewConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A tile with its color already resolved for the canvas.
#[derive(Serialize)]
struct CanvasTile {
    square: String,
    fill: String,
    outline: [Point; 5],
}

/// A piece glyph with its inks already resolved for the canvas.
#[derive(Serialize)]
struct CanvasPiece {
    square: String,
    letter: char,
    center: Point,
    raised: bool,
    strokes: Vec<CanvasStroke>,
}

#[derive(Serialize)]
struct CanvasStroke {
    color: String,
    #[serde(flatten)]
    stroke: Stroke,
}

#[derive(Serialize)]
struct CanvasFrame {
    background: String,
    outline: String,
    tiles: Vec<CanvasTile>,
    pieces: Vec<CanvasPiece>,
}

/// Renderer that resolves palette colors into CSS strings.
struct CanvasRenderer<'a> {
    config: &'a ViewConfig,
    frame: CanvasFrame,
}

impl Renderer for CanvasRenderer<'_> {
    fn draw_tile(&mut self, tile: &DrawTile) {
        self.frame.tiles.push(CanvasTile {
            square: tile.square.to_algebraic(),
            fill: tile.style.color(&self.config.palette).to_hex(),
            outline: tile.outline,
        });
    }

    fn draw_piece(&mut self, piece: &DrawPiece) {
        let palette = &self.config.palette;
        self.frame.pieces.push(CanvasPiece {
            square: piece.square.to_algebraic(),
            letter: piece.piece.to_fen_char(piece.color),
            center: piece.center,
            raised: piece.raised,
            strokes: piece
                .strokes
                .iter()
                .map(|s| CanvasStroke {
                    color: s.ink.resolve(piece.color, palette).to_hex(),
                    stroke: s.clone(),
                })
                .collect(),
        });
    }
}

/// An interactive isometric board driven from JavaScript.
#[wasm_bindgen]
pub struct IsoBoard {
    config: ViewConfig,
    view: GameView,
}

#[wasm_bindgen]
impl IsoBoard {
    /// Creates a board with the standard layout and default geometry.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = ViewConfig::default();
        IsoBoard {
            view: GameView::new(&config),
            config,
        }
    }

    /// Creates a board from a placement string and an optional TOML config.
    ///
    /// Returns an error if either is invalid.
    #[wasm_bindgen(js_name = fromPlacement)]
    pub fn from_placement(placement: &str, config_toml: Option<String>) -> Result<IsoBoard, JsError> {
        let board = Board::from_placement(placement).map_err(|e| JsError::new(&e.to_string()))?;
        let config = match config_toml {
            Some(toml) => {
                ViewConfig::from_toml_str(&toml).map_err(|e| JsError::new(&e.to_string()))?
            }
            None => ViewConfig::default(),
        };
        Ok(IsoBoard {
            view: GameView::with_board(board, &config),
            config,
        })
    }

    /// Handles pointer motion at canvas pixel `(x, y)`.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.view.pointer_move(x, y);
    }

    /// Handles a pointer press at canvas pixel `(x, y)`.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.view.pointer_down(x, y);
    }

    /// Returns the hovered square in algebraic notation, or null.
    pub fn hover(&self) -> Option<String> {
        self.view.hover().map(Square::to_algebraic)
    }

    /// Returns the selected square in algebraic notation, or null.
    pub fn selected(&self) -> Option<String> {
        self.view.selected().map(Square::to_algebraic)
    }

    /// Returns the destinations of the selected piece in algebraic notation.
    #[wasm_bindgen(js_name = validMoves)]
    pub fn valid_moves(&self) -> Vec<String> {
        self.view
            .valid_moves()
            .iter()
            .map(|sq| sq.to_algebraic())
            .collect()
    }

    /// Returns the piece at the given square as a FEN letter, or null.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, square: &str) -> Option<String> {
        let sq = Square::from_algebraic(square)?;
        let (piece, color) = self.view.board().piece_at(sq)?;
        Some(piece.to_fen_char(color).to_string())
    }

    /// Returns the square under canvas pixel `(x, y)`, or null.
    #[wasm_bindgen(js_name = squareAt)]
    pub fn square_at(&self, x: i32, y: i32) -> Option<String> {
        self.view
            .projection()
            .screen_to_board(x, y)
            .map(Square::to_algebraic)
    }

    /// Returns the draw requests for the current frame as a plain object.
    pub fn frame(&self) -> Result<JsValue, JsError> {
        let mut renderer = CanvasRenderer {
            config: &self.config,
            frame: CanvasFrame {
                background: self.config.palette.background.to_hex(),
                outline: self.config.palette.outline.to_hex(),
                tiles: Vec::with_capacity(64),
                pieces: Vec::with_capacity(32),
            },
        };
        self.view.render(&mut renderer);
        serde_wasm_bindgen::to_value(&renderer.frame).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Clears hover and selection.
    pub fn reset(&mut self) {
        self.view = GameView::with_board(self.view.board().clone(), &self.config);
    }
}

impl Default for IsoBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialization function called when WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Add console_error_panic_hook for better panic messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_new() {
        let board = IsoBoard::new();
        assert_eq!(board.piece_at("e1"), Some("K".to_string()));
        assert_eq!(board.piece_at("e8"), Some("k".to_string()));
        assert_eq!(board.piece_at("e4"), None);
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn select_knight() {
        let mut board = IsoBoard::new();
        // b1 is drawn at (450, 350) with the default geometry.
        assert_eq!(board.square_at(450, 350), Some("b1".to_string()));
        board.pointer_down(450, 350);
        assert_eq!(board.selected(), Some("b1".to_string()));
        assert_eq!(board.valid_moves(), vec!["a3".to_string(), "c3".to_string()]);

        board.reset();
        assert!(board.valid_moves().is_empty());
        assert_eq!(board.piece_at("b1"), Some("N".to_string()));
    }

    #[test]
    fn hover_center() {
        let mut board = IsoBoard::new();
        board.pointer_move(500, 500);
        assert_eq!(board.hover(), Some("e5".to_string()));
        board.pointer_move(0, 0);
        assert_eq!(board.hover(), None);
    }

    #[test]
    fn canvas_renderer_resolves_colors() {
        let board = IsoBoard::new();
        let mut renderer = CanvasRenderer {
            config: &board.config,
            frame: CanvasFrame {
                background: String::new(),
                outline: String::new(),
                tiles: Vec::new(),
                pieces: Vec::new(),
            },
        };
        board.view.render(&mut renderer);
        assert_eq!(renderer.frame.tiles[0].fill, "#ffffff");
        assert_eq!(renderer.frame.tiles[1].fill, "#888888");
        assert_eq!(renderer.frame.pieces[0].letter, 'R');
        assert_eq!(renderer.frame.pieces[0].strokes[0].color, "#dcdcdc");
    }

    #[test]
    fn from_placement_sparse_board() {
        let Ok(board) = IsoBoard::from_placement("8/8/8/8/8/8/8/4K3", None) else {
            panic!("valid placement rejected");
        };
        assert_eq!(board.piece_at("e1"), Some("K".to_string()));
        assert_eq!(board.piece_at("a1"), None);
    }
}
