//! Inspects a puzzle configuration the way the browser would see it.
//!
//! Reads page attributes (the `data-*` names without prefix) from a JSON
//! object, validates them, and prints the layout and final piece positions for
//! a viewport.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin jigsnap-inspect -- puzzle.json
//! cargo run --bin jigsnap-inspect -- puzzle.json --viewport 1280x720 --chrome 80
//! ```
//!
//! where `puzzle.json` looks like
//!
//! ```json
//! { "rows": "3", "cols": "4", "image": "cat.jpg", "width": "1200", "height": "900" }
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    inspect::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod inspect {
    use std::{collections::BTreeMap, fs, path::PathBuf, process};

    use clap::Parser;
    use jigsnap_app::state::Settings;
    use jigsnap_core::{AssetPaths, LayoutParams, PuzzleConfig, Size, compute_layout};

    #[derive(Debug, Parser)]
    #[command(author, version, about)]
    struct Args {
        /// JSON file with the page attributes.
        path: PathBuf,

        /// Viewport size as WIDTHxHEIGHT.
        #[arg(long, value_name = "SIZE", default_value = "1920x1080", value_parser = parse_size)]
        viewport: Size,

        /// Height of page content above the puzzle.
        #[arg(long, value_name = "PX", default_value_t = 0.0)]
        chrome: f64,
    }

    fn parse_size(text: &str) -> Result<Size, String> {
        let (width, height) = text
            .split_once('x')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {text:?}"))?;
        let width = width.parse::<f64>().map_err(|err| err.to_string())?;
        let height = height.parse::<f64>().map_err(|err| err.to_string())?;
        Ok(Size::new(width, height))
    }

    pub(crate) fn main() {
        better_panic::install();
        env_logger::init();

        let args = Args::parse();
        if let Err(message) = run(&args) {
            eprintln!("{message}");
            process::exit(1);
        }
    }

    fn run(args: &Args) -> Result<(), String> {
        let text = fs::read_to_string(&args.path)
            .map_err(|err| format!("{}: {err}", args.path.display()))?;
        let attributes: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(&text).map_err(|err| format!("{}: {err}", args.path.display()))?;
        // Numbers are accepted as well as strings, as a dataset would hold them.
        let attributes = attributes
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                };
                (name, value)
            })
            .collect::<BTreeMap<_, _>>();

        let config = PuzzleConfig::from_attributes(&attributes).map_err(|err| err.to_string())?;
        let params = LayoutParams {
            chrome_height: args.chrome,
            ..Settings::default().layout_params
        };
        let image = config.image();
        let layout = compute_layout(
            (image.width, image.height),
            args.viewport,
            config.grid(),
            &params,
        )
        .map_err(|err| err.to_string())?;

        let assets = AssetPaths::default();
        println!("Image:");
        println!("  {} ({}x{})", image.filename, image.width, image.height);
        println!("  reference: {}", assets.reference_url(&image.filename));
        println!();
        println!("Layout:");
        println!(
            "  viewport: {}x{}",
            args.viewport.width, args.viewport.height
        );
        println!("  board: {}x{}", layout.board_width, layout.board_height);
        println!(
            "  piece: {:.1}x{:.1}",
            layout.piece_width, layout.piece_height
        );
        println!("  scale: {:.4}", layout.scale);
        println!();
        println!("Pieces:");
        for meta in config.pieces() {
            let target = layout.scale_point(meta.position());
            println!(
                "  {}: ({:.1}, {:.1}) {}",
                meta.id,
                target.x,
                target.y,
                assets.piece_url(meta.id)
            );
        }
        Ok(())
    }
}
