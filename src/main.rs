use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::warn;
use spline_drawer::export::{export_svg, render_svg, CanvasSize, ExportError};
use spline_drawer::{Editor, EditorConfig, Point};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Replays pointer events against a curve editor and exports the result as svg.
///
/// The script contains one event per line:
/// `down X Y`, `move X Y`, `up`, `click X Y` (down followed by up) or `undo`.
/// Blank lines and lines starting with `#` are ignored.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Event script, read from stdin if omitted
    script: Option<PathBuf>,

    /// Where to save the svg, printed to stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Canvas width
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Canvas height
    #[arg(long, default_value_t = 400.0)]
    height: f64,

    /// Manhattan distance at which a click grabs an existing point
    #[arg(long, default_value_t = 10.0)]
    pick_radius: f64,

    /// Distance at which a click inserts onto the curve instead of appending
    #[arg(long, default_value_t = 10.0)]
    insert_threshold: f64,

    /// Number of samples of the rendered curve
    #[arg(long, default_value_t = spline_drawer::periodic::DEFAULT_RESOLUTION)]
    resolution: usize,
}

enum Event {
    Down(Point),
    Move(Point),
    Up,
    Click(Point),
    Undo,
}

fn parse_point<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<Point> {
    let mut coordinate = || -> Result<f64> {
        let word = words.next().ok_or_else(|| anyhow!("missing coordinate"))?;
        word.parse()
            .with_context(|| format!("invalid coordinate {:?}", word))
    };
    let x = coordinate()?;
    let y = coordinate()?;
    Ok(Point::new(x, y))
}

fn parse_event(line: &str) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let event = match words.next() {
        Some("down") => Event::Down(parse_point(&mut words)?),
        Some("move") => Event::Move(parse_point(&mut words)?),
        Some("click") => Event::Click(parse_point(&mut words)?),
        Some("up") => Event::Up,
        Some("undo") => Event::Undo,
        Some(other) => bail!("unknown event {:?}", other),
        None => return Ok(None),
    };
    if let Some(extra) = words.next() {
        bail!("unexpected {:?} after event", extra);
    }
    Ok(Some(event))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let script = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("failed to read stdin")?;
            script
        }
    };

    let mut editor = Editor::new(EditorConfig {
        pick_radius: args.pick_radius,
        insert_threshold: args.insert_threshold,
        display_resolution: args.resolution,
        ..Default::default()
    });

    for (number, line) in script.lines().enumerate() {
        let event = parse_event(line).with_context(|| format!("line {}", number + 1))?;
        match event {
            Some(Event::Down(pos)) => {
                editor.pointer_down(pos);
            }
            Some(Event::Move(pos)) => editor.pointer_move(pos),
            Some(Event::Up) => editor.pointer_up(),
            Some(Event::Click(pos)) => {
                editor.pointer_down(pos);
                editor.pointer_up();
            }
            Some(Event::Undo) => {
                editor.undo();
            }
            None => {}
        }
    }

    let size = CanvasSize {
        width: args.width,
        height: args.height,
    };
    let result = match &args.output {
        Some(path) => export_svg(&mut editor, path, size),
        None => render_svg(&mut editor, size).map(|svg| print!("{}", svg)),
    };
    match result {
        Err(ExportError::InsufficientPoints { found }) => {
            warn!("Not saving, need at least 4 points but only {} were placed", found);
            Ok(())
        }
        Err(ExportError::NoCurve(err)) => {
            warn!("Not saving, {}", err);
            Ok(())
        }
        result => result.context("export failed"),
    }
}
