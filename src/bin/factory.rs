//! latgen-factory: batch sweep over the (α2, β2) coefficient grid.
//!
//! Defaults reproduce the historical 7×7 research sweep under `data/`.
//! Flags are applied in order, so `--config` first then individual overrides:
//!
//! ```text
//! latgen-factory --config sweep.json --grid -0.1,0.0,0.1 --root data/pilot
//! ```

use latgen::env_config::data_root;
use latgen::sweep::{parse_grid, run_factory};
use latgen::types::FactoryConfig;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut cfg = FactoryConfig {
        root: data_root(),
        ..FactoryConfig::default()
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                cfg = FactoryConfig::from_json_file(&args[i]).unwrap_or_else(|e| {
                    eprintln!("Failed to load config {}: {}", args[i], e);
                    std::process::exit(1);
                });
            }
            "--root" => {
                i += 1;
                cfg.root = args[i].clone().into();
            }
            "--iterations" => {
                i += 1;
                cfg.iterations = args[i].parse().expect("Invalid --iterations");
            }
            "--time" => {
                i += 1;
                cfg.time_per_iteration = args[i].parse().expect("Invalid --time");
            }
            "--dumps" => {
                i += 1;
                cfg.dumps_per_iteration = args[i].parse().expect("Invalid --dumps");
            }
            "--size" => {
                i += 1;
                cfg.lattice_size = args[i].clone();
            }
            "--grid" => {
                i += 1;
                cfg.grid = parse_grid(&args[i]).unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    std::process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("=== latgen-factory ===");
    println!("Root: {}", cfg.root.display());
    println!(
        "Grid: {} values -> {} runs, {} iterations x {} dumps each",
        cfg.grid.len(),
        cfg.grid.len() * cfg.grid.len(),
        cfg.iterations,
        cfg.dumps_per_iteration
    );

    if let Err(e) = run_factory(&cfg) {
        eprintln!("Factory run failed: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: latgen-factory [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config PATH      JSON config file (missing fields use defaults)");
    println!("  --root PATH        Data root (default: data, env LATGEN_DATA_ROOT)");
    println!("  --iterations N     Iterations per run (default: 40)");
    println!("  --time T           Simulated time per iteration (default: 0.25)");
    println!("  --dumps N          Count-dumps per iteration (default: 100)");
    println!("  --size S           Lattice size token (default: 45)");
    println!("  --grid CSV         Values swept for alpha2 and beta2");
    println!("                     (default: -0.4,-0.2,-0.1,0.0,0.1,0.2,0.4)");
}
