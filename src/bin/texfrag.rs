//! texfrag CLI - Render tables and figures as LaTeX fragments

#[cfg(feature = "cli")]
use anyhow::{bail, Context};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use texfrag::{
    escape_latex, render_figure_with_options, render_table_from_frame_with_options,
    render_table_with_options, DataFormat, RenderConfig, TabularData,
};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texfrag")]
#[command(version)]
#[command(about = "texfrag - Render tabular data and figures as LaTeX fragments", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// TOML file with table/frame/figure options
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Log rendering details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render a tabularx table with an explicit column list
    Table {
        #[command(flatten)]
        input: InputArgs,

        /// Table caption (underscores become spaces, title-cased)
        #[arg(long)]
        caption: String,

        /// Table label (defaults to the caption)
        #[arg(long)]
        label: Option<String>,

        /// Comma-separated columns, in output order (defaults to all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Escape LaTeX special characters in headers and cells
        #[arg(long)]
        escape: bool,
    },

    /// Render a whole frame through the booktabs converter
    Frame {
        #[command(flatten)]
        input: InputArgs,

        /// Table caption (label is derived from it)
        #[arg(long)]
        caption: String,

        /// Hide the index column
        #[arg(long)]
        no_index: bool,

        /// Use a full-width tabularx with X columns
        #[arg(long)]
        flex: bool,

        /// Decimal places for float cells
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Render a figure for each image path
    Figure {
        /// Image paths
        #[arg(required = true)]
        paths: Vec<String>,

        /// Image width (LaTeX length, e.g. 0.5\textwidth or 50%)
        #[arg(short, long)]
        width: Option<String>,
    },

    /// Escape LaTeX special characters (reads stdin if no text given)
    Escape {
        /// Text to escape
        text: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct InputArgs {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Input format (detected from the file extension by default)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Csv,
    Json,
    Yaml,
}

#[cfg(feature = "cli")]
impl From<InputFormat> for DataFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Csv => DataFormat::Csv,
            InputFormat::Json => DataFormat::Json,
            InputFormat::Yaml => DataFormat::Yaml,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config {
        Some(ref path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path))?,
        None => RenderConfig::default(),
    };

    let result = match cli.command {
        Commands::Table {
            input,
            caption,
            label,
            columns,
            escape,
        } => {
            let data = read_table(&input)?;
            let columns = if columns.is_empty() {
                data.columns().to_vec()
            } else {
                columns
            };
            let label = label.unwrap_or_else(|| caption.clone());
            let mut options = config.table;
            options.escape |= escape;
            render_table_with_options(&data, &caption, &label, columns.as_slice(), &options)?
        }

        Commands::Frame {
            input,
            caption,
            no_index,
            flex,
            precision,
        } => {
            let data = read_table(&input)?;
            let mut options = config.frame;
            if no_index {
                options.include_index = false;
            }
            options.flex_cols |= flex;
            if let Some(p) = precision {
                options.float_precision = p;
            }
            render_table_from_frame_with_options(&data, &caption, &options)
        }

        Commands::Figure { paths, width } => {
            let mut options = config.figure;
            if let Some(w) = width {
                options.width = w;
            }
            paths
                .iter()
                .map(|path| render_figure_with_options(path, &options))
                .collect::<Vec<_>>()
                .concat()
        }

        Commands::Escape { text } => {
            let text = match text {
                Some(t) => t,
                None => read_stdin()?,
            };
            escape_latex(&text)
        }
    };

    match cli.output {
        Some(path) => {
            let mut file =
                fs::File::create(&path).with_context(|| format!("cannot create '{}'", path))?;
            write!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            print!("{}", result);
            io::stdout().flush()?;
        }
    }

    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--verbose`
#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let default_level = if verbose { "texfrag=debug" } else { "texfrag=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(feature = "cli")]
fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

#[cfg(feature = "cli")]
fn read_table(args: &InputArgs) -> anyhow::Result<TabularData> {
    let format = match (args.format, args.input_file.as_deref()) {
        (Some(f), _) => DataFormat::from(f),
        (None, Some(path)) => match DataFormat::from_path(Path::new(path)) {
            Some(f) => f,
            None => bail!(
                "cannot detect the format of '{}'; pass --format csv|json|yaml",
                path
            ),
        },
        // stdin without a format: CSV
        (None, None) => DataFormat::Csv,
    };

    let content = match args.input_file {
        Some(ref path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))?
        }
        None => read_stdin()?,
    };

    Ok(TabularData::parse(&content, format)?)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texfrag --features cli");
}
