//! Example playing a puzzle to completion without a browser.
//!
//! This example shows how to:
//! - Build a `PuzzleConfig` and fit it into a viewport
//! - Start a `Session` with a seed and placement mode
//! - Drive drag and drop operations and print the resulting effects
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! Play a larger puzzle in snap mode with a fixed seed:
//!
//! ```sh
//! cargo run --example autoplay -- --rows 4 --cols 6 --mode snap --seed 42
//! ```
//!
//! Make some wrong drops first (logged at debug level):
//!
//! ```sh
//! RUST_LOG=debug cargo run --example autoplay -- --mistakes 5
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use jigsnap_core::{GridSize, ImageInfo, LayoutParams, PieceId, Point, PuzzleConfig, Rect, Size};
use jigsnap_game::{PlacementMode, Session};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeKind {
    Strict,
    Open,
    Snap,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of piece rows.
    #[arg(long, default_value_t = 3)]
    rows: u16,

    /// Number of piece columns.
    #[arg(long, default_value_t = 3)]
    cols: u16,

    /// Source image width in pixels.
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Source image height in pixels.
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Placement mode.
    #[arg(long, value_name = "MODE", default_value = "strict")]
    mode: ModeKind,

    /// Seed for the tray shuffle.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of deliberately wrong drops before solving.
    #[arg(long, default_value_t = 0)]
    mistakes: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid = match GridSize::new(args.rows, args.cols) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let image = ImageInfo {
        filename: "autoplay.png".to_owned(),
        width: args.width,
        height: args.height,
    };
    let mode = match args.mode {
        ModeKind::Strict => PlacementMode::StrictSlot,
        ModeKind::Open => PlacementMode::OpenSlot,
        ModeKind::Snap => PlacementMode::snap(),
    };

    let session = PuzzleConfig::uniform(grid, image)
        .map_err(|err| err.to_string())
        .and_then(|config| {
            Session::with_viewport(
                config,
                Size::new(1920.0, 1080.0),
                &LayoutParams::default(),
                mode,
            )
            .map_err(|err| err.to_string())
        });
    let mut session = match session {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    if let Err(err) = session.start(args.seed) {
        eprintln!("{err}");
        process::exit(1);
    }

    print_layout(&session);
    make_mistakes(&mut session, args.mistakes);
    solve(&mut session);
}

fn print_layout(session: &Session) {
    let layout = session.layout();
    println!("Layout:");
    println!("  board: {}x{}", layout.board_width, layout.board_height);
    println!(
        "  piece: {:.1}x{:.1}",
        layout.piece_width, layout.piece_height
    );
    println!("  scale: {:.3}", layout.scale);
    println!();

    println!("Tray:");
    let order = session
        .tray()
        .pieces()
        .map(|id| id.to_string())
        .collect::<Vec<_>>();
    println!("  {}", order.join(" "));
    println!();
}

fn board_rect(session: &Session) -> Rect {
    Rect::new(Point::new(20.0, 20.0), session.layout().board_size())
}

fn make_mistakes(session: &mut Session, count: usize) {
    let ids = session.config().grid().ids().collect::<Vec<_>>();
    if ids.len() < 2 {
        return;
    }
    let board = board_rect(session);
    for i in 0..count {
        let piece = ids[i % ids.len()];
        let wrong = ids[(i + 1) % ids.len()];
        if session.drag_start(piece, Point::ZERO).is_err() {
            continue;
        }
        let report = if session.mode().is_snap() {
            let far = session.target_position(wrong).unwrap_or(Point::ZERO);
            session.drop_at(board.origin + far, board)
        } else {
            session.drop_on_slot(wrong)
        };
        session.drag_end();
        println!("Mistake {}: {piece} -> {wrong}: {:?}", i + 1, report.outcome);
    }
    if count > 0 {
        println!();
    }
}

fn solve(session: &mut Session) {
    let board = board_rect(session);
    let in_tray = session.tray().pieces().collect::<Vec<PieceId>>();
    let on_board = session
        .config()
        .grid()
        .ids()
        .filter(|id| !in_tray.contains(id))
        .collect::<Vec<_>>();

    println!("Moves:");
    for id in in_tray.into_iter().chain(on_board) {
        if session.phase().is_complete() {
            break;
        }
        if !session.piece(id).is_some_and(|piece| piece.is_movable()) {
            continue;
        }
        if session.mode().is_open_slot() {
            clear_slot(session, id);
        }
        if session.drag_start(id, Point::ZERO).is_err() {
            continue;
        }
        let report = if session.mode().is_snap() {
            let target = session.target_position(id).unwrap_or(Point::ZERO);
            session.drop_at(board.origin + target, board)
        } else {
            session.drop_on_slot(id)
        };
        session.drag_end();
        println!(
            "  {id}: {:?} ({}/{} placed)",
            report.outcome,
            session.placed_count(),
            session.pieces().len()
        );
        for effect in &report.effects {
            log::debug!("effect: {effect:?}");
        }
        if report.completed {
            println!();
            println!("Complete.");
        }
    }
}

/// Sends whatever occupies `slot` back to the tray.
fn clear_slot(session: &mut Session, slot: PieceId) {
    let Some(occupant) = session.board().occupant(slot) else {
        return;
    };
    if occupant == slot || session.drag_start(occupant, Point::ZERO).is_err() {
        return;
    }
    let report = session.drop_on_tray();
    session.drag_end();
    println!("  {occupant}: {:?}", report.outcome);
}
