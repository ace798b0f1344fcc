use crate::algorithms::geocode::{FixedPointGeocoder, Geocoder};
use crate::algorithms::DispatchSolver;
use crate::error::{DispatchError, Result};
use crate::models::{Clinician, Coordinate, DispatchResult, Lab, Miles};
use crate::utils::distance::{haversine_miles, round_to_tenth};

/// Dispatch optimizer matching a patient to the clinician with the
/// shortest total travel loop.
///
/// Every visit is a loop starting and ending at the clinician's home:
/// home -> patient -> home, or home -> patient -> lab -> home when a lab
/// drop-off is required. The roster is read-only for the lifetime of the
/// optimizer; each dispatch is a pure computation over it, so shared use
/// across threads needs no locking.
pub struct DispatchOptimizer<G: Geocoder = FixedPointGeocoder> {
    /// Clinician roster, evaluated in order; earlier entries win ties
    clinicians: Vec<Clinician>,

    /// Lab drop-off facilities, consulted only when a lab is required
    labs: Vec<Lab>,

    /// Resolves patient addresses to coordinates
    geocoder: G,
}

impl DispatchOptimizer {
    /// Creates an optimizer over the given roster with the stand-in
    /// fixed-point geocoder
    pub fn new(clinicians: Vec<Clinician>, labs: Vec<Lab>) -> Self {
        Self::with_geocoder(clinicians, labs, FixedPointGeocoder::default())
    }
}

impl<G: Geocoder> DispatchOptimizer<G> {
    /// Creates an optimizer over the given roster with an injected geocoder
    pub fn with_geocoder(clinicians: Vec<Clinician>, labs: Vec<Lab>, geocoder: G) -> Self {
        Self {
            clinicians,
            labs,
            geocoder,
        }
    }

    /// Number of clinicians on the roster
    pub fn clinician_count(&self) -> usize {
        self.clinicians.len()
    }

    /// Number of lab facilities on the roster
    pub fn lab_count(&self) -> usize {
        self.labs.len()
    }

    /// Total loop mileage for one clinician, already rounded.
    ///
    /// `lab_legs` carries the patient-to-lab mileage per lab, computed once
    /// per dispatch rather than once per clinician. Empty means no lab stop.
    fn loop_miles(&self, clinician: &Clinician, patient: Coordinate, lab_legs: &[Miles]) -> Miles {
        let home_to_patient = haversine_miles(clinician.coordinate, patient);

        let total = if lab_legs.is_empty() {
            // Symmetric round trip: home -> patient -> home
            home_to_patient * 2.0
        } else {
            // Pick the lab that minimizes this clinician's loop
            let mut best_loop = f64::INFINITY;
            for (lab, patient_to_lab) in self.labs.iter().zip(lab_legs) {
                let lab_to_home = haversine_miles(lab.coordinate, clinician.coordinate);
                let trip = home_to_patient + patient_to_lab + lab_to_home;
                if trip < best_loop {
                    best_loop = trip;
                }
            }
            best_loop
        };

        round_to_tenth(total)
    }
}

impl<G: Geocoder> DispatchSolver for DispatchOptimizer<G> {
    fn find_optimal_clinician(
        &self,
        patient_address: &str,
        requires_lab: bool,
    ) -> Result<DispatchResult> {
        // Guard before geocoding: an empty roster fails no matter where
        // the patient is
        if self.clinicians.is_empty() {
            return Err(DispatchError::NoClinicianAvailable);
        }

        let patient = self.geocoder.geocode(patient_address)?;
        self.find_optimal_for_coordinate(patient, requires_lab)
    }

    fn find_optimal_for_coordinate(
        &self,
        patient: Coordinate,
        requires_lab: bool,
    ) -> Result<DispatchResult> {
        if self.clinicians.is_empty() {
            return Err(DispatchError::NoClinicianAvailable);
        }

        // Patient-to-lab legs are shared by every clinician, so compute
        // them once up front. A minimum over zero labs is rejected here
        // instead of producing a degenerate total.
        let lab_legs: Vec<Miles> = if requires_lab {
            if self.labs.is_empty() {
                return Err(DispatchError::NoLabAvailable);
            }
            self.labs
                .iter()
                .map(|lab| haversine_miles(patient, lab.coordinate))
                .collect()
        } else {
            Vec::new()
        };

        // Strict comparison keeps the earliest clinician in roster order
        // when rounded totals tie
        let mut best: Option<(usize, Miles)> = None;
        for (index, clinician) in self.clinicians.iter().enumerate() {
            let total = self.loop_miles(clinician, patient, &lab_legs);
            if best.map_or(true, |(_, best_total)| total < best_total) {
                best = Some((index, total));
            }
        }

        let (winner, total) = best.ok_or(DispatchError::NoClinicianAvailable)?;
        Ok(DispatchResult::new(
            self.clinicians[winner].name.clone(),
            total,
        ))
    }
}
