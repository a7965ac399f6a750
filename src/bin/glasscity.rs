use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "glasscity", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one scene as SVG.
    Svg(SvgArgs),
    /// Write one scene as PNG.
    Png(PngArgs),
    /// Write the preset section/gallery scenes plus a manifest.
    Pack(PackArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// JSON scene configuration; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the scene's random stream.
    #[arg(long)]
    seed: Option<u32>,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Horizontal inset kept free of buildings.
    #[arg(long)]
    padding: Option<f64>,
}

#[derive(Args, Debug)]
struct SvgArgs {
    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Args, Debug)]
struct PngArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixel scale relative to the scene size.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Args, Debug)]
struct PackArgs {
    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Which preset seeds to render.
    #[arg(long, value_enum, default_value_t = PackSet::All)]
    set: PackSet,

    /// Also write a PNG next to every SVG.
    #[arg(long)]
    png: bool,

    /// Pixel scale for `--png`.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Generate scenes on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Thread count for `--parallel` (defaults to the number of CPUs).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    // Size, padding and palette apply to every entry; `--seed` is ignored.
    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PackSet {
    Sections,
    Gallery,
    All,
}

#[derive(serde::Serialize)]
struct ManifestEntry<'a> {
    label: &'a str,
    seed: u32,
    file: String,
    sha256: String,
    fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    png: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Pack(args) => cmd_pack(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &SceneArgs) -> anyhow::Result<glasscity::SceneConfig> {
    let mut cfg = match &args.config {
        Some(path) => glasscity::SceneConfig::read_path(path)?,
        None => glasscity::SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(width) = args.width {
        cfg.width = width;
    }
    if let Some(height) = args.height {
        cfg.height = height;
    }
    if let Some(padding) = args.padding {
        cfg.padding = padding;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_svg(path: &Path, svg: &str) -> anyhow::Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let svg = glasscity::generate_svg(&cfg)?;
    write_svg(&args.out, &svg)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let svg = glasscity::generate_svg(&cfg)?;
    let img = glasscity::rasterize_svg(&svg, args.scale)?;
    img.write_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let base = load_config(&args.scene)?;
    let entries = match args.set {
        PackSet::Sections => glasscity::section_entries(),
        PackSet::Gallery => glasscity::gallery_entries(),
        PackSet::All => {
            let mut all = glasscity::section_entries();
            all.extend(glasscity::gallery_entries());
            all
        }
    };

    let opts = glasscity::PackOpts {
        base,
        parallel: args.parallel,
        threads: args.threads,
        prefix_ids: true,
    };
    let items = glasscity::render_pack(&entries, &opts)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut manifest = Vec::with_capacity(items.len());
    for item in &items {
        let file = format!("{}.svg", item.label);
        write_svg(&args.out_dir.join(&file), &item.svg)?;

        let png = if args.png {
            let name = format!("{}.png", item.label);
            glasscity::rasterize_svg(&item.svg, args.scale)?.write_png(&args.out_dir.join(&name))?;
            Some(name)
        } else {
            None
        };

        manifest.push(ManifestEntry {
            label: &item.label,
            seed: item.seed,
            file,
            sha256: sha256_hex(item.svg.as_bytes()),
            fingerprint: item.fingerprint.to_hex(),
            png,
        });
    }

    let manifest_path = args.out_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest).context("serialize manifest")?;
    std::fs::write(&manifest_path, json)
        .with_context(|| format!("write manifest '{}'", manifest_path.display()))?;

    eprintln!("wrote {} scenes to {}", items.len(), args.out_dir.display());
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
