//! tower: runs a lift fleet against a call script and logs every event.
//!
//! ```text
//! tower [config.json] [calls.csv]
//! ```
//!
//! Without a config, a 3-lift, 10-floor building with default timings is
//! used.  Without a call script, random traffic is generated from the
//! config's seed.  Output goes to `output/tower/`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::{FleetConfig, Floor, FloorCall, LiftId, Tick};
use lift_output::{CsvWriter, EventLogObserver, OutputWriter};
use lift_schedule::{load_calls_csv, ScriptedCall, TrafficGenerator};
use lift_sim::{DispatchBuilder, DispatchObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:      &str = "output/tower";
const RANDOM_CALLS:    usize = 40;
const RANDOM_MAX_GAP:  u64   = 2_500; // ticks between generated calls

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:      EventLogObserver<W>,
    departures: usize,
    queued:     usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: EventLogObserver<W>) -> Self {
        Self { inner, departures: 0, queued: 0 }
    }
}

impl<W: OutputWriter> DispatchObserver for CountingObserver<W> {
    fn on_call_ignored(&mut self, tick: Tick, call: FloorCall) {
        self.inner.on_call_ignored(tick, call);
    }

    fn on_call_already_served(&mut self, tick: Tick, floor: Floor, call: FloorCall) {
        self.inner.on_call_already_served(tick, floor, call);
    }

    fn on_call_queued(
        &mut self,
        tick:      Tick,
        floor:     Floor,
        call:      FloorCall,
        queue_len: usize,
    ) {
        self.queued += 1;
        self.inner.on_call_queued(tick, floor, call, queue_len);
    }

    fn on_call_dispatched(
        &mut self,
        tick:  Tick,
        floor: Floor,
        call:  FloorCall,
        lift:  LiftId,
    ) {
        self.inner.on_call_dispatched(tick, floor, call, lift);
    }

    fn on_departure(
        &mut self,
        tick:         Tick,
        lift:         LiftId,
        from:         Floor,
        to:           Floor,
        travel_ticks: u64,
    ) {
        self.departures += 1;
        self.inner.on_departure(tick, lift, from, to, travel_ticks);
    }

    fn on_reached(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.inner.on_reached(tick, lift, floor);
    }

    fn on_doors_opened(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.inner.on_doors_opened(tick, lift, floor);
    }

    fn on_doors_closed(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.inner.on_doors_closed(tick, lift, floor);
    }

    fn on_arrived_idle(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.inner.on_arrived_idle(tick, lift, floor);
    }

    fn on_pending_replayed(&mut self, tick: Tick, floor: Floor) {
        self.inner.on_pending_replayed(tick, floor);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<FleetConfig> {
    let config = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {p}"))?
        }
        None => FleetConfig::default(),
    };
    config.validate_supported()?;
    Ok(config)
}

fn load_script(path: Option<&str>, config: &FleetConfig) -> Result<Vec<ScriptedCall>> {
    match path {
        Some(p) => load_calls_csv(Path::new(p)).with_context(|| format!("loading calls from {p}")),
        None => Ok(TrafficGenerator::new(config, RANDOM_MAX_GAP).generate(RANDOM_CALLS)),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let script = load_script(args.get(1).map(String::as_str), &config)?;

    println!("=== tower — rust_lift dispatch simulator ===");
    println!(
        "Lifts: {}  |  Floors: {}  |  Calls: {}  |  Seed: {}",
        config.lift_count,
        config.floor_count,
        script.len(),
        config.seed
    );
    println!();

    // 1. Build the dispatch system.
    let mut sys = DispatchBuilder::new(config).script(script).build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(EventLogObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    let end = sys.run_until_idle(&mut obs)?;
    let elapsed = t0.elapsed();
    info!(final_tick = end.0, "run complete");

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s (virtual {})", elapsed.as_secs_f64(), sys.clock);
    println!("  departures         : {}", obs.departures);
    println!("  calls queued       : {}", obs.queued);
    println!("  still pending      : {}", sys.pending.len());
    println!("  output             : {OUTPUT_DIR}/lift_events.csv, {OUTPUT_DIR}/call_log.csv");
    println!();

    // 5. Final lift table.
    println!("{:<8} {:<8} {:<8}", "Lift", "Floor", "Status");
    println!("{}", "-".repeat(24));
    for lift in sys.fleet.iter() {
        println!("{:<8} {:<8} {:<8}", lift.id.get(), lift.floor.get(), lift.status.as_str());
    }

    Ok(())
}
