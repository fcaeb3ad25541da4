use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphcalc", version)]
struct Cli {
    /// Log pipeline diagnostics to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression.
    Eval(EvalArgs),
    /// Print the postfix form of an expression.
    Compile(CompileArgs),
    /// Write render data JSON for a graph document.
    Render(RenderArgs),
    /// Plot a graph document to SVG or PNG.
    Plot(PlotArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Expression text.
    expr: String,

    /// Variable binding, `name=value`. Repeatable.
    #[arg(long = "var", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Expression text.
    expr: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input graph document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output render data JSON.
    #[arg(long)]
    out: PathBuf,

    /// Override the document's sample count.
    #[arg(long)]
    samples: Option<usize>,
}

#[derive(Parser, Debug)]
struct PlotArgs {
    /// Input graph document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image, `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,

    /// Image width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Override the document's sample count.
    #[arg(long)]
    samples: Option<usize>,
}

fn parse_binding(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{s}'"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad value for '{name}': {e}"))?;
    Ok((name.to_owned(), value))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Compile(args) => cmd_compile(args),
        Command::Render(args) => cmd_render(args),
        Command::Plot(args) => cmd_plot(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "graphcalc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let vars: graphcalc::Bindings<'_> = args
        .vars
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();
    match graphcalc::evaluate_text(&args.expr, &vars) {
        Ok(v) => println!("{v}"),
        Err(e) => println!("undefined ({e})"),
    }
    Ok(())
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let compiled = graphcalc::compile(&args.expr);
    if let Some(err) = &compiled.error {
        let column = args
            .expr
            .get(..err.source_index)
            .map_or(0, |prefix| prefix.chars().count());
        eprintln!("{}", args.expr);
        eprintln!("{}^ {}", " ".repeat(column), err.message);
        anyhow::bail!("{err}");
    }
    println!("{}", compiled.postfix_text());
    Ok(())
}

fn load_document(path: &Path, samples: Option<usize>) -> anyhow::Result<graphcalc::GraphDocument> {
    let mut doc = graphcalc::GraphDocument::from_path(path)?;
    if samples.is_some() {
        doc.samples = samples;
    }
    doc.validate()
        .with_context(|| format!("invalid graph document '{}'", path.display()))?;
    Ok(doc)
}

fn ensure_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.in_path, args.samples)?;
    let mut session = graphcalc::GraphSession::default();
    let data = session.render_document(&doc);

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, data.to_json_string()?)
        .with_context(|| format!("write render data '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plot(args: PlotArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.in_path, args.samples)?;
    let mut session = graphcalc::GraphSession::default();
    let data = session.render_document(&doc);
    let opts = graphcalc::SvgOptions {
        width_px: args.width,
        height_px: args.height,
        ..graphcalc::SvgOptions::default()
    };

    ensure_parent(&args.out)?;
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            let svg = graphcalc::to_svg(&data, &doc.viewport, &opts)?;
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        Some("png") => {
            graphcalc::to_raster(&data, &doc.viewport, &opts)?.save_png(&args.out)?;
        }
        _ => anyhow::bail!(
            "unsupported output '{}': expected .svg or .png",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
