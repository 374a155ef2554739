use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use purikura::{BoothSession, TemplateId, catalog, encode};

#[derive(Parser, Debug)]
#[command(name = "purikura", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a single photo slot as a PNG.
    Slot(SlotArgs),
    /// Assemble finished print sheet(s) from photos.
    Sheet(SheetArgs),
}

#[derive(Parser, Debug)]
struct SlotArgs {
    /// Input photo (any raster format the engine can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Template id (strip, square_frame, id_grid, card).
    #[arg(long, default_value = "strip")]
    template: String,

    /// Background preset id from the catalog.
    #[arg(long, default_value = "bg-white")]
    background: String,

    /// Disable the beauty filter.
    #[arg(long, default_value_t = false)]
    no_lighting: bool,

    /// Disable the soft-glow bloom.
    #[arg(long, default_value_t = false)]
    no_glow: bool,

    /// Film grain intensity (0..1).
    #[arg(long, default_value_t = 0.08)]
    grain: f32,
}

#[derive(Parser, Debug)]
struct SheetArgs {
    /// Input photos, one per slot; fewer than the template needs are reused.
    #[arg(long = "in", required = true)]
    in_paths: Vec<PathBuf>,

    /// Output path stem; sheets are written as `<stem>_N.png`.
    #[arg(long)]
    out: PathBuf,

    /// Template id (strip, square_frame, id_grid, card).
    #[arg(long, default_value = "strip")]
    template: String,

    /// Name printed on sheets that carry a name field.
    #[arg(long, default_value = "PURI USER")]
    name: String,

    /// Location printed on sheets that carry a location field.
    #[arg(long, default_value = "TOKYO")]
    location: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Slot(args) => cmd_slot(args),
        Command::Sheet(args) => cmd_sheet(args),
    }
}

fn parse_template(s: &str) -> anyhow::Result<TemplateId> {
    serde_json::from_value(serde_json::Value::String(s.to_owned()))
        .with_context(|| format!("unknown template '{s}'"))
}

fn today_stamp() -> String {
    // '25 . 08 . 07 — the analog booth imprint format.
    let now = chrono::Local::now();
    now.format("'%y . %m . %d").to_string()
}

fn session_for(template: &str) -> anyhow::Result<BoothSession> {
    let mut session = BoothSession::new(parse_template(template)?);
    session.set_date_text(today_stamp());
    Ok(session)
}

fn cmd_slot(args: SlotArgs) -> anyhow::Result<()> {
    let mut session = session_for(&args.template)?;

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read photo '{}'", args.in_path.display()))?;
    session.set_photo(0, purikura::decode_image(&bytes)?);

    let background = catalog::builtin_backgrounds()
        .into_iter()
        .find(|b| b.id == args.background)
        .with_context(|| format!("unknown background '{}'", args.background))?;
    session.set_background(Some(background));

    session.filters_mut().lighting = !args.no_lighting;
    session.filters_mut().soft_glow = !args.no_glow;
    session.filters_mut().grain = args.grain.clamp(0.0, 1.0);

    let surface = session.render_slot(0)?;
    write_png(&args.out, &encode::to_png(&surface)?)
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let mut session = session_for(&args.template)?;

    for (i, path) in args.in_paths.iter().enumerate() {
        let bytes =
            std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
        session.set_photo(i, purikura::decode_image(&bytes)?);
    }

    session.metadata_mut().name = args.name;
    session.metadata_mut().location = args.location;
    session.metadata_mut().date_text = chrono::Local::now().format("%Y-%m-%d").to_string();

    let sheets = session.assemble_sheets()?;
    for (i, sheet) in sheets.iter().enumerate() {
        let mut path = args.out.clone();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sheet".to_owned());
        path.set_file_name(format!("{stem}_{i}.png"));
        write_png(&path, &encode::to_png(sheet)?)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn write_png(path: &PathBuf, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
