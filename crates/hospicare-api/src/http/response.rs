//! Typed response bodies for the care endpoints.

use serde::Serialize;

/// Body for writes acknowledged with a message only.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Body for writes that report the affected-row count alongside the
/// message. A count of 0 still rides a success status.
#[derive(Debug, Serialize)]
pub struct AffectedRows {
    pub message: &'static str,
    pub rows_affected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affected_rows_shape() {
        let body = AffectedRows {
            message: "Patient record deleted successfully",
            rows_affected: 0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Patient record deleted successfully");
        assert_eq!(json["rows_affected"], 0);
    }
}
