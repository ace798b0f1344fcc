use clinician_dispatch::algorithms::DispatchSolver;
use clinician_dispatch::utils::init_roster::{default_roster, load_roster};
use clinician_dispatch::DispatchOptimizer;
use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let requires_lab = args.iter().any(|arg| arg == "--lab");
    let patient_address = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "510 Groveland Ave, Minneapolis, MN 55403".to_string());

    // Prefer the roster file; fall back to the built-in roster
    let (clinicians, labs) = match load_roster("data/roster.json") {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error loading roster file: {}", e);
            eprintln!("Falling back to the built-in roster");
            default_roster()
        }
    };

    println!("\nClinician roster:");
    for clinician in &clinicians {
        println!("  {} ({})", clinician.name, clinician.address);
    }
    println!("\nLab drop-off facilities:");
    for lab in &labs {
        println!("  {} ({})", lab.name, lab.address);
    }

    println!("\nPatient address: {}", patient_address);
    println!(
        "Visit type: {}",
        if requires_lab {
            "Home -> Patient -> Lab -> Home"
        } else {
            "Home -> Patient -> Home"
        }
    );

    let optimizer = DispatchOptimizer::new(clinicians, labs);
    println!(
        "\nEvaluating {} clinicians against {} labs",
        optimizer.clinician_count(),
        optimizer.lab_count()
    );

    let start_time = std::time::Instant::now();
    let outcome = optimizer.find_optimal_clinician(&patient_address, requires_lab);
    let elapsed = start_time.elapsed();

    match outcome {
        Ok(result) => {
            println!("\nBest match found (in {:.2?}):", elapsed);
            println!("------------------------------------------");
            println!("  Clinician: {}", result.clinician_name);
            println!("  Estimated round trip: {} miles", result.total_distance_miles);
        }
        Err(e) => {
            eprintln!("Dispatch calculation error: {}", e);
        }
    }
}
