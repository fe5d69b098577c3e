use rubberband_core::{
    bind,
    config::Config,
    init,
    pos2,
    scene::{NodeId, Scene, SceneSpec},
    ui::{self, scopes, Settings},
    Options, PointerButton, PointerEvent, Pos2,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON scene description (built-in demo scene if omitted)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Select nested elements, not just direct children of the container
    #[arg(short, long, default_value_t = false)]
    deep: bool,

    /// Replay a drag headlessly: "x,y x,y ...". Presses at the first
    /// point, moves through the rest and releases at the last.
    #[arg(long)]
    replay: Option<String>,

    /// Log filter directive, overrides RUBBERBAND_LOG
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    // Setup
    init();
    let args = Args::parse();

    let config = Config::load().context("Failed to load configuration")?;
    init_logging(args.log.as_deref().unwrap_or(&config.log_filter))?;
    let deep = args.deep || config.deep;

    let scene = match &args.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("Failed to load scene from {}", path.display()))?,
        None => Scene::from_spec(&SceneSpec::demo()),
    };
    info!(deep, "Scene ready");

    match args.replay {
        Some(script) => {
            let points = parse_points(&script)?;
            replay(scene, deep, &points)
        }
        None => {
            let settings = host_settings(Settings::load(deep), deep);
            ui::run_selection_ui(scene, settings).context("Selection window failed")
        }
    }
}

/// `--deep` and `RUBBERBAND_DEEP` switch deep mode on over saved settings.
fn host_settings(mut saved: Settings, deep: bool) -> Settings {
    if deep {
        saved.deep = true;
    }
    saved
}

fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter '{}'", filter))?;

    let std_logger = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(std_logger)
        .with(filter)
        .try_init()
        .context("Failed to install logger")
}

/// Drives a selector through a scripted drag, printing every callback.
fn replay(mut scene: Scene, deep: bool, points: &[Pos2]) -> Result<()> {
    let (first, rest) = points.split_first().context("Replay needs at least one point")?;
    let last = rest.last().unwrap_or(first);

    let mut step = 0usize;
    let options = Options::<Scene>::default()
        .with_deep(deep)
        .with_callback(move |scene: &mut Scene, selected: &[NodeId], all: &[NodeId]| {
            step += 1;
            println!(
                "{:>3}: selected [{}] of [{}]",
                step,
                scene.labels(selected).join(", "),
                scene.labels(all).join(", ")
            );
        });

    let mut selector = bind(&scene, scene.root(), options).context("Failed to bind selector")?;
    let container = scene.rect(scene.root());

    let mut events = vec![PointerEvent::Press {
        button: PointerButton::Primary,
        position: *first,
    }];
    events.extend(rest.iter().map(|p| PointerEvent::Move { position: *p }));
    events.push(PointerEvent::Release { position: *last });

    if !container.contains(*first) {
        println!("Press at ({}, {}) is outside the container; nothing selected", first.x, first.y);
    }

    for event in events {
        for scope in scopes(container, event.position()) {
            debug!(?scope, ?event, "dispatch");
            selector.dispatch(&mut scene, *scope, event);
        }
    }

    selector.destroy();
    Ok(())
}

/// Parses "x,y x,y ..." into points.
fn parse_points(script: &str) -> Result<Vec<Pos2>> {
    let mut points = Vec::new();
    for token in script.split_whitespace() {
        let Some((x, y)) = token.split_once(',') else {
            bail!("Expected 'x,y', got '{}'", token);
        };
        let x: f32 = x.trim().parse().with_context(|| format!("Invalid x in '{}'", token))?;
        let y: f32 = y.trim().parse().with_context(|| format!("Invalid y in '{}'", token))?;
        points.push(pos2(x, y));
    }
    if points.is_empty() {
        bail!("Replay script is empty");
    }
    Ok(points)
}
