use super::{contains_ci, normalize};
use crate::domain::clinic::{ClinicDataset, Patient};

/// Patients whose name, MRN or email contains the term (any case), or
/// whose phone number contains it verbatim.
pub fn search_patients<'a>(data: &'a ClinicDataset, term: &str) -> Vec<&'a Patient> {
    let Some(needle) = normalize(term) else {
        return data.patients.iter().collect();
    };
    let raw = term.trim();

    data.patients
        .iter()
        .filter(|p| {
            contains_ci(&p.full_name(), &needle)
                || contains_ci(&p.mrn, &needle)
                || p.phone.contains(raw)
                || contains_ci(&p.email, &needle)
        })
        .collect()
}
