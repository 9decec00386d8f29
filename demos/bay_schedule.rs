//! Enumerates every valid maintenance bay schedule for an instance file.
//!
//! ```sh
//! cargo run --example bay_schedule -- demos/maintenance01.json --stats
//! ```

use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use apron::{
    model::instance::MaintenanceInstance,
    schedule::{
        builder::{ScheduleBuilder, SpecialistRule},
        plan::BayPlan,
    },
    solver::{engine::SolverEngine, stats::render_stats_table},
};

#[derive(Parser, Debug)]
#[command(about = "Exhaustively enumerate maintenance bay schedules")]
struct Args {
    /// Path to a JSON instance file.
    input: PathBuf,

    /// Print the per-constraint work table after the search.
    #[arg(long)]
    stats: bool,

    /// Require a specialist bay in every slot of a qualifying plane
    /// instead of in at least one.
    #[arg(long)]
    per_slot_specialist: bool,

    /// Print every schedule as JSON instead of just the count.
    #[arg(long)]
    print_plans: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let file = File::open(&args.input)?;
    let instance: MaintenanceInstance = serde_json::from_reader(BufReader::new(file))?;
    info!(
        planes = instance.planes.len(),
        slots = instance.slots,
        rows = instance.rows,
        cols = instance.cols,
        "instance loaded"
    );

    let rule = if args.per_slot_specialist {
        SpecialistRule::PerSlot
    } else {
        SpecialistRule::AcrossSlots
    };
    let (problem, registry) = ScheduleBuilder::new(&instance).specialist_rule(rule).build()?;

    let engine = SolverEngine::default();
    let (solutions, stats) = engine.solve(&problem);

    if args.print_plans {
        for solution in solutions.iter() {
            let plan = BayPlan::from_solution(&instance, &registry, solution);
            println!("{}", serde_json::to_string(&plan)?);
        }
    }

    println!(
        "{} solutions in {:.4} seconds",
        solutions.len(),
        stats.elapsed.as_secs_f64()
    );
    if args.stats {
        println!("{}", render_stats_table(&stats, problem.constraints()));
    }

    Ok(())
}
