use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use graph::{build_graph, input, Color, DagNode, GraphConfig, Grapher, RefIndex};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "lanegraph")]
#[command(about = "Lay out commit history as swim lanes", long_about = None)]
struct Cli {
    /// Commit list to lay out, `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,
    /// Format of the commit list
    #[arg(long, value_enum, default_value_t = InputFormat::Log)]
    format_in: InputFormat,
    /// JSON file with the refs pointing into the history
    #[arg(long)]
    refs: Option<PathBuf>,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Lane color, repeat to build the palette (overrides config)
    #[arg(long = "color")]
    colors: Vec<String>,
    /// Number of commits to lay out (overrides config)
    #[arg(short = 'n', long)]
    max_count: Option<usize>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    output: OutputFormat,
    /// More logging on stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    /// `git log --format="%H %P"` output
    Log,
    /// JSON array of `{ "id", "parentIds" }`
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One JSON object keyed by commit id
    Json,
    /// One JSON fragment per line, in history order
    Jsonl,
    /// One text line per commit
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GraphConfig::load_from_file(path)?,
        None => GraphConfig::default(),
    };
    if !cli.colors.is_empty() {
        config.colors = cli.colors.iter().map(|c| Color::from(c.as_str())).collect();
    }
    if cli.max_count.is_some() {
        config.max_count = cli.max_count;
    }
    config.validate()?;

    let mut nodes = read_nodes(&cli.input, cli.format_in)?;
    if let Some(max) = config.max_count {
        nodes.truncate(max);
    }
    let refs = match &cli.refs {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open refs {}", path.display()))?;
            input::read_refs(BufReader::new(file))?
        }
        None => RefIndex::new(),
    };
    info!(commits = nodes.len(), colors = config.colors.len(), "laying out history");

    let mut out = BufWriter::new(io::stdout().lock());
    match cli.output {
        OutputFormat::Json => {
            let graph: BTreeMap<_, _> = build_graph(&nodes, refs, config.colors)
                .into_iter()
                .collect();
            serde_json::to_writer_pretty(&mut out, &graph)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            let mut grapher = Grapher::new(config.colors, refs);
            for node in &nodes {
                serde_json::to_writer(&mut out, &grapher.proceed(node))?;
                writeln!(out)?;
            }
        }
        OutputFormat::Summary => {
            let mut grapher = Grapher::new(config.colors, refs);
            for node in &nodes {
                writeln!(out, "{}", grapher.proceed(node))?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_nodes(path: &Path, format: InputFormat) -> Result<Vec<DagNode>> {
    let mut content = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut content))
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }

    let nodes = match format {
        InputFormat::Log => input::parse_log(&content)?,
        InputFormat::Json => input::read_commits(content.as_bytes())?,
    };
    Ok(nodes)
}
