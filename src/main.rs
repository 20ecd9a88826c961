use balance_bot::config::{ScenarioConfig, SimulationConfig};
use balance_bot::sim::{ConsoleSink, Simulator};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args) {
        eprintln!("balance-bot: {}", e);
        std::process::exit(1);
    }
}

fn option_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let v2 = args.len() > 1 && args[1] == "v2";

    let scenario = match option_value(args, "--config") {
        Some(path) => ScenarioConfig::from_json_file(path)?,
        None if v2 => ScenarioConfig::balance_bot_v2(),
        None => ScenarioConfig::balance_bot(),
    };

    let mut sim_config = if v2 {
        SimulationConfig::balance_bot_v2()
    } else {
        SimulationConfig::default()
    };
    if args.iter().any(|a| a == "--realtime") {
        sim_config.real_time = true;
    }

    println!("Balance Bot Stick Simulator");
    println!("Scenario: {}", scenario.name);
    println!(
        "Clock: {}",
        if sim_config.real_time { "wall clock" } else { "synthetic" }
    );
    println!();

    let mut sink = ConsoleSink::new(sim_config.status_interval);
    let mut simulator = Simulator::new(scenario, sim_config)?;
    simulator.run(&mut sink);

    let csv = option_value(args, "--csv").unwrap_or("stick_data.csv");
    if let Err(e) = simulator.export_telemetry(csv) {
        eprintln!("Failed to export telemetry: {}", e);
    }

    println!("Simulation complete");
    Ok(())
}
