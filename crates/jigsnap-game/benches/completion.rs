//! Benchmarks for drop validation and completion detection.
//!
//! # Benchmarks
//!
//! - **`solve_strict`**: Drags and drops every piece into its own slot on a
//!   fresh strict-slot session, including the full-board completion scan after
//!   each drop.
//! - **`solve_snap`**: The same in snap mode, dropping each piece exactly on
//!   its target position.
//!
//! Grid sizes range from a small 4x4 puzzle up to 32x32 to show how the
//! completion scan scales with the piece count.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench completion
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use jigsnap_core::{GridSize, ImageInfo, LayoutParams, Point, PuzzleConfig, Rect, Size};
use jigsnap_game::{PlacementMode, Session};

const GRIDS: [u16; 3] = [4, 12, 32];

fn new_session(side: u16, mode: PlacementMode) -> Session {
    let grid = GridSize::new(side, side).unwrap();
    let image = ImageInfo {
        filename: "bench.png".to_owned(),
        width: 1600,
        height: 1600,
    };
    let config = PuzzleConfig::uniform(grid, image).unwrap();
    let mut session = Session::with_viewport(
        config,
        Size::new(4000.0, 2000.0),
        &LayoutParams::default(),
        mode,
    )
    .unwrap();
    session.start(0).unwrap();
    session
}

fn bench_solve_strict(c: &mut Criterion) {
    for side in GRIDS {
        c.bench_with_input(
            BenchmarkId::new("solve_strict", format!("{side}x{side}")),
            &side,
            |b, &side| {
                b.iter_batched(
                    || new_session(side, PlacementMode::StrictSlot),
                    |mut session| {
                        let grid = session.config().grid();
                        for id in grid.ids() {
                            session.drag_start(id, Point::ZERO).unwrap();
                            hint::black_box(session.drop_on_slot(id));
                            session.drag_end();
                        }
                        session
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_solve_snap(c: &mut Criterion) {
    for side in GRIDS {
        c.bench_with_input(
            BenchmarkId::new("solve_snap", format!("{side}x{side}")),
            &side,
            |b, &side| {
                b.iter_batched(
                    || new_session(side, PlacementMode::snap()),
                    |mut session| {
                        let board = Rect::from_size(session.layout().board_size());
                        let grid = session.config().grid();
                        for id in grid.ids() {
                            let target = session.target_position(id).unwrap();
                            session.drag_start(id, Point::ZERO).unwrap();
                            hint::black_box(session.drop_at(target, board));
                            session.drag_end();
                        }
                        session
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_solve_strict,
        bench_solve_snap
);
criterion_main!(benches);
