//! smallgrid — reference run of the warehouse simulation.
//!
//! Simulates a 16×12 warehouse for two minutes of synthetic clock: four
//! generators down the west wall feed four robots that ferry items to five
//! fuzzy-classified drop zones on the east wall.  The event log lands in
//! `./output/{items,deliveries}.csv` and a final grid render plus per-zone
//! delivery table goes to stdout.
//!
//! Run with:
//!   cargo run -p smallgrid --release

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use wh_core::{AgentId, GeneratorId, ItemAttrs, SimConfig, Tick, ZoneId};
use wh_output::{CsvWriter, OutputWriter, SimOutputObserver};
use wh_sim::{SimObserver, WarehouseBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_DURATION_MS: u64 = 120_000; // two minutes of warehouse time
const HOST_STEP_MS:    u64 = 50;      // host loop granularity
const OUTPUT_DIR:      &str = "./output";

// ── Observer wrapper to count events ─────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:      SimOutputObserver<W>,
    generated:  u64,
    assigned:   u64,
    picked_up:  u64,
    delivered:  u64,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, generated: 0, assigned: 0, picked_up: 0, delivered: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_item_generated(&mut self, tick: Tick, source: GeneratorId, item: ItemAttrs) {
        self.generated += 1;
        println!("{tick}: {source} produced {item}");
        self.inner.on_item_generated(tick, source, item);
    }

    fn on_task_assigned(&mut self, _tick: Tick, _agent: AgentId, _gen: GeneratorId) {
        self.assigned += 1;
    }

    fn on_pickup(&mut self, tick: Tick, agent: AgentId, source: GeneratorId, zone: ZoneId, item: ItemAttrs) {
        self.picked_up += 1;
        println!("{tick}: {agent} picked up at {source}, heading to {}", zone.label());
        self.inner.on_pickup(tick, agent, source, zone, item);
    }

    fn on_delivery(&mut self, tick: Tick, agent: AgentId, zone: ZoneId, item: ItemAttrs) {
        self.delivered += 1;
        println!("{tick}: {agent} delivered to {}", zone.label());
        self.inner.on_delivery(tick, agent, zone, item);
    }
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig::default();

    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = CountingObserver::new(SimOutputObserver::new(writer));

    let mut warehouse = WarehouseBuilder::new(config.clone()).build()?;
    println!(
        "warehouse: {}x{} grid, {} generators, {} zones, {} agents, seed {}",
        config.cols, config.rows, config.generator_count, config.zone_count,
        config.agent_count, config.seed
    );
    println!("{}", warehouse.grid().render_ascii());

    let wall_start = Instant::now();
    warehouse.run_for(SIM_DURATION_MS, HOST_STEP_MS, &mut observer);
    let elapsed = wall_start.elapsed();

    observer.inner.finish();
    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!("{}", warehouse.grid().render_ascii());
    println!(
        "simulated {} ms ({} movement rounds) in {:.1} ms wall time",
        SIM_DURATION_MS,
        warehouse.move_tick(),
        elapsed.as_secs_f64() * 1_000.0
    );
    println!(
        "items: {} generated, {} assigned, {} picked up, {} delivered, {} outstanding",
        observer.generated,
        observer.assigned,
        observer.picked_up,
        observer.delivered,
        warehouse.items_outstanding()
    );
    for zone in warehouse.zones() {
        println!("  {:>4} at {}: {} received", zone.name, zone.pos, zone.received);
    }

    Ok(())
}
