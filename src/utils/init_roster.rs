use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Clinician, Coordinate, Lab, Location};

/// The static roster the dispatch service currently runs against.
///
/// In a production environment this would be fetched from an API or
/// database; see [`load_roster`] for the file-backed variant.
pub fn default_roster() -> (Vec<Clinician>, Vec<Lab>) {
    let clinicians = vec![
        Location::new(
            "Barb",
            "4120 Garfield Ave, Minneapolis, MN 55409",
            Coordinate::new(44.9280, -93.2810),
        ),
        Location::new(
            "Isaac",
            "140 104th Ln NW, Blaine MN 55448",
            Coordinate::new(45.1608, -93.2427),
        ),
        Location::new(
            "Marisol",
            "2393 Kalmia Ave, Boulder, CO 80304",
            Coordinate::new(40.0420, -105.2727),
        ),
        Location::new(
            "Mary",
            "608 Spruce Dr, Hudson, WI 54016",
            Coordinate::new(44.9744, -92.7396),
        ),
        Location::new(
            "Shawna",
            "1727 W Highland Pkwy, St Paul, MN 55116",
            Coordinate::new(44.9182, -93.1779),
        ),
        Location::new(
            "Shelly",
            "1232 3rd St, Hudson, WI 54016",
            Coordinate::new(44.9760, -92.7551),
        ),
        Location::new(
            "Tom",
            "14173 Flagstone Trail, Apple Valley MN 55124",
            Coordinate::new(44.7290, -93.2055),
        ),
    ];

    let labs = vec![
        Location::new(
            "Edina Lab",
            "6525 France Ave, Edina, MN, 55435",
            Coordinate::new(44.8897, -93.3290),
        ),
        Location::new(
            "Medical Arts Lab",
            "835 Nicollet Mall, Minneapolis, MN 55402",
            Coordinate::new(44.9741, -93.2727),
        ),
        Location::new(
            "Bloomington Lab",
            "2716 E 82nd St, Bloomington, MN 55425",
            Coordinate::new(44.8569, -93.2311),
        ),
        Location::new(
            "Hudson Lab",
            "400 2nd St S, Hudson, WI 54016",
            Coordinate::new(44.9745, -92.7576),
        ),
        Location::new(
            "Boulder Lab",
            "4750 Nautilus Ct S, Boulder, CO 80381",
            Coordinate::new(40.0730, -105.2346),
        ),
    ];

    (clinicians, labs)
}

/// Load a roster from a JSON file with `clinicians` and `labs` arrays
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<(Vec<Clinician>, Vec<Lab>)> {
    // Serializable shape of the roster file
    #[derive(Serialize, Deserialize)]
    struct RosterFile {
        clinicians: Vec<Location>,
        labs: Vec<Location>,
    }

    let json_str = fs::read_to_string(path)?;
    let roster: RosterFile = serde_json::from_str(&json_str)?;

    println!(
        "Loaded {} clinicians and {} labs from roster file",
        roster.clinicians.len(),
        roster.labs.len()
    );

    Ok((roster.clinicians, roster.labs))
}

/// Generate a synthetic roster scattered over the Twin Cities metro area,
/// for benchmarks and stress tests
pub fn synthetic_roster(clinician_count: usize, lab_count: usize) -> (Vec<Clinician>, Vec<Lab>) {
    let mut rng = rand::thread_rng();

    let clinicians = (0..clinician_count)
        .map(|i| {
            Location::new(
                format!("Clinician {}", i + 1),
                format!("{} Test Ave", 100 + i),
                random_metro_point(&mut rng),
            )
        })
        .collect();

    let labs = (0..lab_count)
        .map(|i| {
            Location::new(
                format!("Lab {}", i + 1),
                format!("{} Test Blvd", 100 + i),
                random_metro_point(&mut rng),
            )
        })
        .collect();

    (clinicians, labs)
}

fn random_metro_point<R: Rng>(rng: &mut R) -> Coordinate {
    Coordinate::new(rng.gen_range(44.6..45.2), rng.gen_range(-93.6..-92.6))
}
