//! Request types for the settlement calculation API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::SettlementClaim;

/// Request body for the `/calculate` endpoint.
///
/// Amounts may be sent as JSON strings (`"2200.00"`) or numbers.
///
/// # Example
///
/// ```
/// use verbas_engine::api::CalculationRequest;
///
/// let request: CalculationRequest = serde_json::from_str(r#"{
///     "case_id": "proc-0001",
///     "claim": {
///         "monthly_salary": "2000.00",
///         "fgts": { "months_worked": 12 }
///     }
/// }"#).unwrap();
/// assert_eq!(request.case_id.as_deref(), Some("proc-0001"));
/// assert!(request.claim.fgts.unwrap().include_penalty);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Caller's reference for the case, echoed back in the response.
    #[serde(default)]
    pub case_id: Option<String>,
    /// The amounts claimed.
    pub claim: SettlementClaim,
}
