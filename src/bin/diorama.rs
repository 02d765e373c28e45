use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "diorama", version)]
struct Cli {
    /// Log debug detail (degraded configuration, per-file progress).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite each SVG's viewBox to tightly fit its paths.
    Normalize(NormalizeArgs),
    /// Compute layer colors, stacking, motion and frame for a scene.
    Compose(ComposeArgs),
    /// Print the built-in keyframes stylesheet.
    Keyframes(KeyframesArgs),
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Directory holding the assets.
    dir: PathBuf,

    /// File extension to process.
    #[arg(long = "ext", default_value = "svg")]
    extension: String,

    /// Descend into subdirectories.
    #[arg(long, default_value_t = false)]
    recursive: bool,

    /// Padding on each side as a fraction of the content extent.
    #[arg(long, default_value_t = diorama::DEFAULT_PADDING_RATIO)]
    padding: f64,

    /// Process files in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Report what would change without writing.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct KeyframesArgs {
    /// Output CSS path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.cmd {
        Command::Normalize(args) => cmd_normalize(args),
        Command::Compose(args) => cmd_compose(args),
        Command::Keyframes(args) => cmd_keyframes(args),
    }
}

fn cmd_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let opts = diorama::NormalizeOpts {
        extension: args.extension,
        recursive: args.recursive,
        padding_ratio: args.padding,
        parallel: args.parallel,
        dry_run: args.dry_run,
    };
    let report = diorama::normalize_dir(&args.dir, &opts)
        .with_context(|| format!("normalize assets in '{}'", args.dir.display()))?;

    let updated = report.updated().count();
    let skipped = report.skipped().count();
    let unchanged = report.files.len() - updated - skipped;
    eprintln!(
        "{} {updated} updated, {unchanged} unchanged, {skipped} skipped ({} warnings)",
        if opts.dry_run { "would normalize:" } else { "normalized:" },
        report.warnings().count()
    );
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let scene = diorama::Scene::from_path(&args.in_path)?;
    scene
        .validate()
        .with_context(|| format!("validate scene '{}'", args.in_path.display()))?;
    let composed = scene.compose();

    let json = serde_json::to_string_pretty(&composed).context("serialize composed scene")?;
    emit(args.out.as_ref(), &json)
}

fn cmd_keyframes(args: KeyframesArgs) -> anyhow::Result<()> {
    emit(args.out.as_ref(), &diorama::keyframes_css())
}

fn emit(out: Option<&PathBuf>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("write stdout")?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n").context("write stdout")?;
            }
        }
    }
    Ok(())
}
