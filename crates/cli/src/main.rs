use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use ufo::api::{
    bearing, monotonicity_breaks, sweep, sweep_par, validate_radius, RunOutcome, SimState,
    Trajectory,
};

mod config;
mod export;
mod provenance;

use config::GeomArgs;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Series-approximated navigation: traces and precision sweeps")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log debug events from the search and sweep
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the minimal series term count for each radius and write the table
    Sweep {
        #[command(flatten)]
        geom: GeomArgs,
        /// Comma-separated acceptance radii (default 2,4,...,20)
        #[arg(long, value_delimiter = ',')]
        radii: Option<Vec<f64>>,
        /// Search radii on the rayon pool
        #[arg(long)]
        parallel: bool,
        #[arg(long, default_value = "result/data.txt")]
        out: PathBuf,
    },
    /// Step one trajectory at a fixed precision and write its positions
    Trace {
        #[command(flatten)]
        geom: GeomArgs,
        /// Series term count used for every step
        #[arg(long, default_value_t = 10)]
        precision: usize,
        /// Acceptance radius around the target
        #[arg(long, default_value_t = 20.0)]
        radius: f64,
        #[arg(long, default_value = "result/trace.csv")]
        out: PathBuf,
    },
    /// Turn a sweep table into scatter-plot data for an external renderer
    Figure {
        #[arg(long, default_value = "result/data.txt")]
        from: PathBuf,
        #[arg(long, default_value = "result/plot.json")]
        out: PathBuf,
    },
    /// Print the provenance block for the resolved configuration
    Report {
        #[command(flatten)]
        geom: GeomArgs,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Sweep {
            geom,
            radii,
            parallel,
            out,
        } => run_sweep(&geom, radii.as_deref(), parallel, out, cmd.tag),
        Action::Trace {
            geom,
            precision,
            radius,
            out,
        } => trace(&geom, precision, radius, out, cmd.tag),
        Action::Figure { from, out } => figure(from, out, cmd.tag),
        Action::Report { geom } => report(&geom, cmd.tag),
    }
}

fn run_sweep(
    geom: &GeomArgs,
    radii: Option<&[f64]>,
    parallel: bool,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    let cfg = config::resolve(geom, radii)?;
    tracing::info!(
        radii = cfg.radii.len(),
        ceiling = cfg.search.precision_ceiling,
        parallel,
        tag = ?tag,
        "sweep"
    );
    let table = if parallel {
        sweep_par(&cfg.sim, cfg.search, &cfg.radii)
    } else {
        sweep(&cfg.sim, cfg.search, &cfg.radii)
    };
    for rec in &table {
        tracing::info!(
            radius = rec.radius,
            min_precision = rec.min_precision,
            saturated = rec.saturated,
            "row"
        );
    }
    let breaks = monotonicity_breaks(&table);
    for (lo, hi) in &breaks {
        tracing::warn!(
            radius_lo = lo.radius,
            precision_lo = lo.min_precision,
            radius_hi = hi.radius,
            precision_hi = hi.min_precision,
            "larger radius needs more precision"
        );
    }

    export::write_table(&out, &table)?;
    let mut params = cfg.params();
    params["parallel"] = json!(parallel);
    params["monotonicity_breaks"] = json!(breaks.len());
    provenance::write_sidecar(&out, Payload::new(params, tag))?;
    Ok(())
}

fn trace(
    geom: &GeomArgs,
    precision: usize,
    radius: f64,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    let cfg = config::resolve(geom, None)?;
    validate_radius(radius).context("invalid --radius")?;
    anyhow::ensure!(precision >= 1, "--precision must be at least 1");

    let theta = bearing(cfg.sim.start, cfg.sim.end);
    let states: Vec<SimState> =
        Trajectory::with_bearing(cfg.sim, theta, precision, radius).collect();
    let last = states.last().copied().unwrap_or_else(|| SimState::at_start(&cfg.sim));
    let outcome = RunOutcome::from(last);
    tracing::info!(
        precision,
        radius,
        bearing = theta,
        steps = outcome.steps,
        reached = outcome.reached,
        stop = ?outcome.stop,
        x = outcome.position.x,
        y = outcome.position.y,
        tag = ?tag,
        "trace"
    );

    export::write_trace(&out, cfg.sim.start, &states)?;
    let mut params = cfg.params();
    params["precision"] = json!(precision);
    params["radius"] = json!(radius);
    params["reached"] = json!(outcome.reached);
    params["steps"] = json!(outcome.steps);
    provenance::write_sidecar(&out, Payload::new(params, tag))?;
    Ok(())
}

fn figure(from: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(from = %from.display(), out = %out.display(), "figure");
    let rows = export::read_table(&from)?;
    let spec = export::ScatterSpec::from_rows(&rows);
    export::write_scatter(&out, &spec)?;
    let params = json!({ "from": from.to_string_lossy() });
    provenance::write_sidecar(&out, Payload::new(params, tag))?;
    Ok(())
}

fn report(geom: &GeomArgs, tag: Option<String>) -> Result<()> {
    let cfg = config::resolve(geom, None)?;
    let doc = provenance::document(cfg.params(), tag.as_deref(), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
