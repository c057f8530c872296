use anyhow::Result;
use clap::Parser;
use log::info;

use smart_traffic::simulation::{SimCity, SystemMode, TrafficConfig};

#[derive(Parser)]
#[command(name = "smart_traffic")]
#[command(about = "Turn-based smart traffic signal simulation")]
struct Cli {
    /// Number of intersections in the city
    #[arg(long, default_value = "3")]
    intersections: usize,

    /// Number of ticks to run
    #[arg(long, default_value = "1")]
    ticks: u64,

    /// Seed for reproducible random traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Chance per road per tick that a vehicle arrives
    #[arg(long, default_value = "0.0")]
    arrival_rate: f64,

    /// Chance that an arriving vehicle is an emergency vehicle
    #[arg(long, default_value = "0.05")]
    emergency_rate: f64,

    /// Chance per road per tick of a pedestrian request
    #[arg(long, default_value = "0.0")]
    pedestrian_rate: f64,

    /// Only run the emergency monitor; no automatic signal cycles
    #[arg(long)]
    manual: bool,

    /// Skip loading the demo traffic before the first tick
    #[arg(long)]
    no_demo: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,smart_traffic=info"),
    )
    .init();

    let cli = Cli::parse();

    let config = TrafficConfig {
        arrival_rate: cli.arrival_rate,
        emergency_rate: cli.emergency_rate,
        pedestrian_rate: cli.pedestrian_rate,
    };
    config.validate()?;

    let mut city = match cli.seed {
        Some(seed) => SimCity::new_with_seed(cli.intersections, seed),
        None => SimCity::new(cli.intersections),
    };
    if cli.manual {
        city.set_mode(SystemMode::Manual);
    }
    if !cli.no_demo {
        city.populate_demo_traffic()?;
    }

    info!(
        "Running {} ticks over {} intersections",
        cli.ticks, cli.intersections
    );

    let mut cycles_run = 0;
    let mut green_waves = 0;
    for _ in 0..cli.ticks {
        let report = city.run_tick();
        println!("{report}");

        cycles_run += report.cycles.iter().filter(|(_, c)| c.is_some()).count();
        if report.green_wave_active() {
            green_waves += 1;
        }

        city.spawn_random_traffic(&config)?;
    }

    info!("=== SIMULATION COMPLETE ===");
    info!("Ticks run: {}", city.tick_count());
    info!("Signal cycles applied: {}", cycles_run);
    info!("Green waves: {}", green_waves);
    info!("Vehicles still queued: {}", city.queued_vehicles());
    Ok(())
}
