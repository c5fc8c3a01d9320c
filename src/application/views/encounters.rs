use serde::Serialize;
use utoipa::ToSchema;

use super::{contains_ci, normalize};
use crate::domain::clinic::{ClinicDataset, Encounter, UNKNOWN_PATIENT};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EncounterRow {
    pub encounter: Encounter,
    pub patient_name: String,
}

/// Encounters matching the term on patient name, chief complaint or
/// assessment.
pub fn search_encounters(data: &ClinicDataset, term: &str) -> Vec<EncounterRow> {
    let needle = normalize(term);

    data.encounters
        .iter()
        .filter_map(|encounter| {
            let patient_name = data.patient_name(&encounter.patient_id);
            let matched = match &needle {
                None => true,
                Some(needle) => {
                    contains_ci(&patient_name, needle)
                        || contains_ci(&encounter.chief_complaint, needle)
                        || contains_ci(&encounter.assessment, needle)
                }
            };
            matched.then(|| EncounterRow {
                encounter: encounter.clone(),
                patient_name: if patient_name.is_empty() {
                    UNKNOWN_PATIENT.to_string()
                } else {
                    patient_name
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clinic_dataset;

    #[test]
    fn search_fields() {
        let data = clinic_dataset();
        assert_eq!(search_encounters(&data, "").len(), 1);
        assert_eq!(search_encounters(&data, "sarah").len(), 1);
        assert_eq!(search_encounters(&data, "HEADACHES").len(), 1);
        assert_eq!(search_encounters(&data, "poor sleep").len(), 1);
        assert!(search_encounters(&data, "fracture").is_empty());
    }

    #[test]
    fn rows_carry_patient_name() {
        let data = clinic_dataset();
        let rows = search_encounters(&data, "");
        assert_eq!(rows[0].patient_name, "Sarah Smith");
        assert_eq!(rows[0].encounter.diagnoses[0].code, "G44.209");
    }
}
