// Integration test rendering the roster and the winning dispatch loop
use clinician_dispatch::algorithms::DispatchSolver;
use clinician_dispatch::utils::distance::haversine_miles;
use clinician_dispatch::utils::init_roster::default_roster;
use clinician_dispatch::{Coordinate, DispatchOptimizer, Lab, Location};
use plotters::prelude::*;
use std::error::Error;

const PATIENT: Coordinate = Coordinate {
    latitude: 44.9778,
    longitude: -93.2650,
};

#[test]
fn test_dispatch_map_visualization() -> Result<(), Box<dyn Error>> {
    let output_path = "dispatch_map.png";

    let (clinicians, labs) = default_roster();

    // Keep the map on the Twin Cities metro; the Boulder pair would
    // flatten everything else into a corner
    let metro_clinicians: Vec<Location> = clinicians
        .iter()
        .filter(|c| c.coordinate.longitude > -100.0)
        .cloned()
        .collect();
    let metro_labs: Vec<Location> = labs
        .iter()
        .filter(|l| l.coordinate.longitude > -100.0)
        .cloned()
        .collect();

    let optimizer = DispatchOptimizer::new(metro_clinicians.clone(), metro_labs.clone());
    let result = optimizer.find_optimal_clinician("4056 Pillsbury Ave, Minneapolis, MN", true)?;
    println!(
        "Rendering winner {} at {} miles to {}",
        result.clinician_name, result.total_distance_miles, output_path
    );

    let winner = metro_clinicians
        .iter()
        .find(|c| c.name == result.clinician_name)
        .expect("winner must come from the roster");
    let drop_off = best_lab_for(winner, &metro_labs);

    // Determine chart boundaries with a little padding
    let (min_lon, max_lon, min_lat, max_lat) =
        determine_bounds(&metro_clinicians, &metro_labs);

    let root = BitMapBackend::new(output_path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Dispatch: {} ({} mi loop)",
                result.clinician_name, result.total_distance_miles
            ),
            ("sans-serif", 20).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(min_lon..max_lon, min_lat..max_lat)?;

    chart.configure_mesh().draw()?;

    // Draw clinician home bases
    for clinician in &metro_clinicians {
        let style = ShapeStyle::from(&GREEN).filled();
        chart
            .draw_series(std::iter::once(Circle::new(
                (clinician.coordinate.longitude, clinician.coordinate.latitude),
                6,
                style,
            )))?
            .label(clinician.name.clone())
            .legend(move |(x, y)| Circle::new((x, y), 6, style));
    }

    // Draw lab drop-off facilities
    for lab in &metro_labs {
        chart.draw_series(std::iter::once(Circle::new(
            (lab.coordinate.longitude, lab.coordinate.latitude),
            6,
            ShapeStyle::from(&BLUE).filled(),
        )))?;
    }

    // Draw the patient stand-in point
    chart
        .draw_series(std::iter::once(Circle::new(
            (PATIENT.longitude, PATIENT.latitude),
            8,
            ShapeStyle::from(&RED).filled(),
        )))?
        .label("Patient")
        .legend(|(x, y)| Circle::new((x, y), 8, ShapeStyle::from(&RED).filled()));

    // Draw the winning loop: home -> patient -> lab -> home
    let loop_points = vec![
        (winner.coordinate.longitude, winner.coordinate.latitude),
        (PATIENT.longitude, PATIENT.latitude),
        (drop_off.coordinate.longitude, drop_off.coordinate.latitude),
        (winner.coordinate.longitude, winner.coordinate.latitude),
    ];
    chart.draw_series(LineSeries::new(loop_points, BLACK.mix(0.6).stroke_width(2)))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("Visualization complete. Output saved to: {}", output_path);

    Ok(())
}

/// The lab that minimizes this clinician's loop through the patient
fn best_lab_for<'a>(clinician: &Location, labs: &'a [Lab]) -> &'a Lab {
    labs.iter()
        .min_by(|a, b| {
            let loop_a = haversine_miles(clinician.coordinate, PATIENT)
                + haversine_miles(PATIENT, a.coordinate)
                + haversine_miles(a.coordinate, clinician.coordinate);
            let loop_b = haversine_miles(clinician.coordinate, PATIENT)
                + haversine_miles(PATIENT, b.coordinate)
                + haversine_miles(b.coordinate, clinician.coordinate);
            loop_a.partial_cmp(&loop_b).unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("metro roster has at least one lab")
}

/// Bounding box over every roster point plus the patient, with padding
fn determine_bounds(clinicians: &[Location], labs: &[Location]) -> (f64, f64, f64, f64) {
    let mut min_lon = PATIENT.longitude;
    let mut max_lon = PATIENT.longitude;
    let mut min_lat = PATIENT.latitude;
    let mut max_lat = PATIENT.latitude;

    for point in clinicians.iter().chain(labs.iter()) {
        min_lon = min_lon.min(point.coordinate.longitude);
        max_lon = max_lon.max(point.coordinate.longitude);
        min_lat = min_lat.min(point.coordinate.latitude);
        max_lat = max_lat.max(point.coordinate.latitude);
    }

    let pad_lon = (max_lon - min_lon).max(0.05) * 0.1;
    let pad_lat = (max_lat - min_lat).max(0.05) * 0.1;

    (
        min_lon - pad_lon,
        max_lon + pad_lon,
        min_lat - pad_lat,
        max_lat + pad_lat,
    )
}
