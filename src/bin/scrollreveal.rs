use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use scrollreveal::{
    BoundingBox, ContinuityOpts, Preset, RecordingSink, Timeline, ViewportSize, drive,
    scan_continuity, uniform_samples,
};

#[derive(Parser, Debug)]
#[command(name = "scrollreveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the property frame for one progress value.
    Frame(FrameArgs),
    /// Evaluate evenly spaced progress values over [0, 1] and dump the frames as JSON.
    Sweep(SweepArgs),
    /// Scan every phase boundary for jumps in the composed frame.
    Check(CheckArgs),
    /// Compute the contain-fit transform (and optionally a centered origin) for two boxes.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct TableArgs {
    /// Built-in phase table.
    #[arg(long, value_enum, default_value_t = PresetChoice::Refined)]
    preset: PresetChoice,

    /// Phase table JSON; overrides `--preset`.
    #[arg(long = "table")]
    table_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Global progress; values outside [0, 1] are clamped.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,

    /// Print CSS-ready strings instead of typed values.
    #[arg(long)]
    css: bool,

    /// Also print per-phase activity to stderr.
    #[arg(long)]
    explain: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Number of intervals; `steps + 1` frames are produced.
    #[arg(long, default_value_t = 20)]
    steps: u32,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Probe distance on each side of a boundary.
    #[arg(long, default_value_t = ContinuityOpts::default().epsilon)]
    epsilon: f64,

    /// Largest change across a boundary that still counts as continuous.
    #[arg(long, default_value_t = ContinuityOpts::default().tolerance)]
    tolerance: f64,

    /// Exit with an error when any discontinuity is found.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Container box as `x,y,width,height`.
    #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
    container: BoundingBox,

    /// Shape box as `x,y,width,height`.
    #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
    shape: BoundingBox,

    /// Viewport as `width,height`; prints the origin that centers the container.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<ViewportSize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Refined,
    Initial,
}

impl From<PresetChoice> for Preset {
    fn from(choice: PresetChoice) -> Self {
        match choice {
            PresetChoice::Refined => Preset::Refined,
            PresetChoice::Initial => Preset::Initial,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Check(args) => cmd_check(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn load_timeline(args: &TableArgs) -> anyhow::Result<Timeline> {
    match &args.table_path {
        Some(path) => read_table_json(path),
        None => {
            let preset = Preset::from(args.preset);
            Timeline::from_preset(preset)
                .with_context(|| format!("build preset '{}'", preset.name()))
        }
    }
}

fn read_table_json(path: &Path) -> anyhow::Result<Timeline> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open phase table '{}'", path.display()))?;
    let timeline = Timeline::from_json_str(&s)
        .with_context(|| format!("load phase table '{}'", path.display()))?;
    Ok(timeline)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.table)?;
    let frame = timeline.evaluate(args.progress);

    if args.explain {
        eprintln!("phases at progress {}:", frame.progress);
        for r in timeline.explain(args.progress) {
            let local = r.local.map_or_else(|| "-".to_owned(), |l| format!("{l:.4}"));
            eprintln!(
                "  {:<16} {:?} local={local} writes={}",
                r.name,
                r.activity,
                r.writes.len()
            );
        }
    }

    let out = if args.css {
        serde_json::to_string_pretty(&frame.to_css_map())?
    } else {
        serde_json::to_string_pretty(&frame)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.table)?;
    let mut sink = RecordingSink::new();
    let n = drive(&timeline, uniform_samples(args.steps), &mut sink)?;
    let frames = sink.into_frames();

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            serde_json::to_writer_pretty(f, &frames)
                .with_context(|| format!("write frames '{}'", path.display()))?;
            eprintln!("wrote {n} frames to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&frames)?),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.table)?;
    let opts = ContinuityOpts {
        epsilon: args.epsilon,
        tolerance: args.tolerance,
    };
    let found = scan_continuity(timeline.table(), opts);
    println!("{}", serde_json::to_string_pretty(&found)?);

    if found.is_empty() {
        eprintln!(
            "no discontinuities across {} boundaries",
            timeline.table().boundaries().len()
        );
        return Ok(());
    }

    for d in &found {
        eprintln!("  {} jumps by {:.6} at {}", d.key, d.jump, d.at);
    }
    if args.strict {
        anyhow::bail!("{} discontinuities found", found.len());
    }
    Ok(())
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let fit = scrollreveal::fit_contain(args.container, args.shape)?;
    let mut out = serde_json::json!({
        "fit": fit,
        "svg_transform": fit.to_svg(),
    });
    if let Some(viewport) = args.viewport {
        let origin = scrollreveal::center_origin(args.container, viewport);
        out["origin"] = serde_json::to_value(origin)?;
        out["css_origin"] = serde_json::Value::String(origin.to_css());
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got '{s}'"));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number '{part}': {e}"))?;
    }
    Ok(out)
}

fn parse_bbox(s: &str) -> Result<BoundingBox, String> {
    let [x, y, width, height] = parse_numbers::<4>(s)?;
    Ok(BoundingBox::new(x, y, width, height))
}

fn parse_viewport(s: &str) -> Result<ViewportSize, String> {
    let [width, height] = parse_numbers::<2>(s)?;
    Ok(ViewportSize { width, height })
}
