//! room-grid CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use room_grid::grid::BoundsSeed;
use room_grid::renderers::CharSet;
use room_grid::{LayoutPrinter, RenderConfig, Renderer, layout, parsers};

/// Render a room layout plan as box-drawing text.
#[derive(Parser, Debug)]
#[command(
    name = "room-grid",
    version = env!("ROOM_GRID_VERSION"),
    about = "Render a room layout plan as box-drawing text"
)]
struct Cli {
    /// Plan file (reads from stdin if not provided)
    input: Option<String>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Glyph for vertices with no junction shape
    #[arg(long = "placeholder", default_value_t = room_grid::config::DEFAULT_PLACEHOLDER)]
    placeholder: char,

    /// Strip trailing spaces from each row
    #[arg(long = "trim")]
    trim: bool,

    /// Size undeclared canvases from the tight bounds instead of including the origin
    #[arg(long = "tight")]
    tight: bool,

    /// Print vertex, edge and component counts to stderr
    #[arg(long = "stats")]
    stats: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        let charset = if self.use_ascii { CharSet::Ascii } else { CharSet::Unicode };
        let seed = if self.tight { BoundsSeed::Root } else { BoundsSeed::Origin };
        RenderConfig::new()
            .with_charset(charset)
            .with_placeholder(self.placeholder)
            .with_trim_trailing(self.trim)
            .with_bounds_seed(seed)
    }
}

fn read_input(cli: &Cli) -> room_grid::Result<String> {
    match cli.input {
        Some(ref path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> room_grid::Result<()> {
    let text = read_input(cli)?;
    let config = cli.render_config();

    let plan = parsers::parse(&text)?;
    let built = layout::build(&plan, config.bounds_seed)?;
    let root = built.descriptor.root;

    if cli.stats {
        let bounds = built.grid.compute_bounds_seeded(root, config.bounds_seed);
        eprintln!(
            "vertices: {}, edges: {}, components: {}, bounds: x {}..={}, y {}..={}",
            built.grid.reachable_count(root),
            built.grid.edge_count(root),
            built.grid.component_count(),
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
        );
    }

    let rendered = LayoutPrinter::new(config).render(&built.grid, &built.descriptor);

    match cli.output {
        Some(ref path) => fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
