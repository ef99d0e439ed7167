use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An admission record: one patient stay bounded by admission and
/// discharge dates.
///
/// `NaiveDate` serializes as `YYYY-MM-DD`, the same text form the store
/// keeps in its date columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    #[serde(rename = "admissionID")]
    pub id: i64,
    #[serde(rename = "patientID")]
    pub patient_id: i64,
    #[serde(rename = "dateOfAdmission")]
    pub date_of_admission: NaiveDate,
    #[serde(rename = "dateOfDischarge")]
    pub date_of_discharge: NaiveDate,
}

/// Request body for `POST /patientadmissions`.
///
/// Dates arrive as strings and are parsed during validation; discharge
/// before admission is accepted as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAdmissionRequest {
    #[serde(rename = "patientID")]
    pub patient_id: Option<i64>,
    #[serde(rename = "dateOfAdmission")]
    pub date_of_admission: Option<String>,
    #[serde(rename = "dateOfDischarge")]
    pub date_of_discharge: Option<String>,
}

/// A validated admission payload ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmission {
    pub patient_id: i64,
    pub date_of_admission: NaiveDate,
    pub date_of_discharge: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_serializes_dates_as_iso() {
        let admission = Admission {
            id: 1,
            patient_id: 3,
            date_of_admission: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            date_of_discharge: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
        };

        let json = serde_json::to_value(&admission).unwrap();
        assert_eq!(json["admissionID"], 1);
        assert_eq!(json["patientID"], 3);
        assert_eq!(json["dateOfAdmission"], "2024-02-10");
        assert_eq!(json["dateOfDischarge"], "2024-02-14");
    }

    #[test]
    fn test_create_request_keeps_dates_as_strings() {
        let req: CreateAdmissionRequest = serde_json::from_str(
            r#"{"patientID": 3, "dateOfAdmission": "2024-02-10", "dateOfDischarge": "not-a-date"}"#,
        )
        .unwrap();
        assert_eq!(req.patient_id, Some(3));
        assert_eq!(req.date_of_discharge.as_deref(), Some("not-a-date"));
    }
}
