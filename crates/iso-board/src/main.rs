//! Replays a pointer event script against the isometric chessboard and
//! prints every rendered frame.

mod script;
mod text;

use anyhow::Context;
use chess_core::Board;
use chess_iso::{run_frame, Frame, FrameOutcome, GameView, ViewConfig};
use clap::Parser;
use script::ScriptSource;
use std::io::Read;
use std::path::PathBuf;
use text::TextRenderer;

#[derive(Parser)]
#[command(name = "iso-board")]
#[command(about = "Replay pointer events against an isometric chessboard")]
struct Args {
    /// Path to the view configuration file
    #[arg(long, default_value = "iso-board.toml")]
    config: PathBuf,

    /// Event script to replay; reads stdin when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Piece placement to start from
    #[arg(long, default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")]
    placement: String,

    /// Print each frame as JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = ViewConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let board = Board::from_placement(&args.placement).context("parsing --placement")?;

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let mut input = ScriptSource::parse(&script)?;
    tracing::info!(steps = input.remaining(), "replaying script");

    let mut view = GameView::with_board(board, &config);
    let mut frames = 0usize;
    while render_frame(&mut view, &mut input, args.json)? == FrameOutcome::Continue {
        frames += 1;
    }

    tracing::info!(frames, "replay finished");
    Ok(())
}

/// Runs one frame of the control loop and prints it.
fn render_frame(
    view: &mut GameView,
    input: &mut ScriptSource,
    json: bool,
) -> anyhow::Result<FrameOutcome> {
    if json {
        let mut frame = Frame::default();
        let outcome = run_frame(view, input, &mut frame);
        if outcome == FrameOutcome::Continue {
            println!("{}", serde_json::to_string(&frame)?);
        }
        return Ok(outcome);
    }

    let mut text = TextRenderer::default();
    let outcome = run_frame(view, input, &mut text);
    if outcome == FrameOutcome::Continue {
        print!("{}", text.finish());
        match view.selected() {
            Some(square) => {
                let moves: Vec<String> = view.valid_moves().iter().map(|m| m.to_string()).collect();
                println!("selected {} -> [{}]", square, moves.join(" "));
            }
            None => println!("nothing selected"),
        }
        println!();
    }
    Ok(outcome)
}
