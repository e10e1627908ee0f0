//! Browser bindings for the Jigsnap puzzle.
//!
//! Built with `wasm-pack build --target web`. The page embeds its puzzle
//! parameters as `data-*` attributes on a `#puzzle-config` element, reads
//! them with `readPageConfig()`, and drives a `PuzzleHandle` from its drag and
//! drop listeners:
//!
//! ```js
//! import init, { PuzzleHandle, readPageConfig } from "./pkg/jigsnap_web.js";
//!
//! await init();
//! const puzzle = new PuzzleHandle(undefined, innerWidth, innerHeight);
//! puzzle.open(readPageConfig());
//! render(puzzle.view());
//! ```
//!
//! Mutating calls return `{ renderRequested, completed, dropOutcome }`.
//! Animations are pulled with `drainTransitions()`.

pub mod controller;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use self::controller::{BridgeError, PuzzleController};
