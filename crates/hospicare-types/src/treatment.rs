use serde::{Deserialize, Serialize};

/// The treatment-history projection returned by `GET /treatments/{id}`:
/// id, description, and the current free-text status. Treatments are
/// created out of band, so there is no creation payload here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentRecord {
    #[serde(rename = "treatmentID")]
    pub id: i64,
    #[serde(rename = "treatmentDescription")]
    pub description: String,
    #[serde(rename = "treatmentStatus")]
    pub status: String,
}

/// Request body for `PUT /treatments/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTreatmentStatusRequest {
    #[serde(rename = "treatmentStatus")]
    pub treatment_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treatment_record_wire_names() {
        let record = TreatmentRecord {
            id: 5,
            description: "Palliative massage".to_string(),
            status: "scheduled".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["treatmentID"], 5);
        assert_eq!(json["treatmentDescription"], "Palliative massage");
        assert_eq!(json["treatmentStatus"], "scheduled");
    }

    #[test]
    fn test_update_request_missing_status() {
        let req: UpdateTreatmentStatusRequest = serde_json::from_str("{}").unwrap();
        assert!(req.treatment_status.is_none());
    }
}
