//! Typed input records for the document renderer.
//!
//! The structs in this module mirror the JSON payloads served by the
//! asset-management API. They are plain data: the renderer treats them as
//! immutable inputs and never mutates or persists them. Required fields are
//! statically declared; everything the upstream system may omit is an
//! `Option`. Enumerations keep unrecognized raw values in an `Other` variant
//! so a new server-side status renders as its uppercased raw text instead of
//! failing deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($raw:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Raw value not known to this crate; rendered uppercased.
            Other(String),
        }

        impl $name {
            /// Display label used on the printed document.
            pub fn label(&self) -> String {
                match self {
                    $(Self::$variant => $label.to_string(),)+
                    Self::Other(raw) => raw.to_uppercase(),
                }
            }

            /// Wire representation understood by the upstream API.
            pub fn as_raw(&self) -> &str {
                match self {
                    $(Self::$variant => $raw,)+
                    Self::Other(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($raw => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_raw().to_string()
            }
        }
    };
}

labeled_enum! {
    /// How a requisition is to be paid.
    RequestType {
        Transfer => ("transfer", "TRANSFERENCIA"),
        CardPayment => ("card_payment", "PAGO CON TARJETA"),
        Cash => ("cash", "EFECTIVO"),
        OnlinePayment => ("online_payment", "PAGO EN LÍNEA"),
    }
}

labeled_enum! {
    /// Currency of a requisition amount.
    Currency {
        Mxn => ("MXN", "MXN"),
        Usd => ("USD", "USD"),
    }
}

labeled_enum! {
    /// Approval state of a requisition.
    RequisitionStatus {
        Pending => ("pending", "PENDIENTE"),
        Approved => ("approved", "APROBADA"),
        Rejected => ("rejected", "RECHAZADA"),
        Completed => ("completed", "COMPLETADA"),
    }
}

labeled_enum! {
    /// Lifecycle state of an equipment custody assignment.
    CustodyStatus {
        Active => ("active", "VIGENTE"),
        Returned => ("returned", "DEVUELTO"),
        Damaged => ("damaged", "DAÑADO"),
    }
}

/// Department printed on a requisition when the record does not carry one.
pub const DEFAULT_DEPARTMENT: &str = "SISTEMAS";

/// Folio text rendered when neither a code nor a usable id is available.
pub const MISSING_FOLIO: &str = "N/A";

/// A purchase/payment request routed for approval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequisitionRecord {
    /// Upstream storage identifier; only used to derive a fallback folio.
    #[serde(default)]
    pub id: Option<String>,
    /// Display folio, e.g. `REQ-2025-041`.
    #[serde(default)]
    pub code: Option<String>,
    pub request_type: RequestType,
    pub request_date: NaiveDate,
    pub amount: f64,
    pub currency: Currency,
    /// Spelled-out amount, pre-computed upstream.
    #[serde(default)]
    pub amount_in_words: Option<String>,
    pub payable_to: String,
    /// Free text; may span multiple lines once wrapped.
    pub concept: String,
    #[serde(default)]
    pub department: Option<String>,
    pub status: RequisitionStatus,
    #[serde(default)]
    pub requested_by: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
}

impl RequisitionRecord {
    /// Folio shown in the document header.
    ///
    /// Falls back to the uppercased tail of the storage id, then to
    /// [`MISSING_FOLIO`].
    pub fn folio(&self) -> String {
        if let Some(code) = non_empty(&self.code) {
            return code.to_string();
        }
        if let Some(id) = non_empty(&self.id) {
            let tail: String = id
                .chars()
                .rev()
                .take(6)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            return tail.to_uppercase();
        }
        MISSING_FOLIO.to_string()
    }

    /// Department shown on the document, defaulting to [`DEFAULT_DEPARTMENT`].
    pub fn department_label(&self) -> String {
        non_empty(&self.department)
            .unwrap_or(DEFAULT_DEPARTMENT)
            .to_string()
    }

    /// Token used in the download filename; `REQ` when no folio code exists.
    pub fn filename_token(&self) -> String {
        match non_empty(&self.code) {
            Some(code) => sanitize_token(code),
            None => "REQ".to_string(),
        }
    }

    /// Checks the structurally required fields before any layout work.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("payable_to", &self.payable_to)?;
        require_text("concept", &self.concept)?;
        require_amount("amount", self.amount)?;
        Ok(())
    }
}

/// A record documenting that a piece of equipment was handed to an employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustodyRecord {
    pub equipment_type: String,
    pub brand: String,
    pub serial_number: String,
    pub acquisition_cost: f64,
    pub delivery_date: NaiveDate,
    pub employee_name: String,
    pub employee_position: String,
    pub status: CustodyStatus,
}

impl CustodyRecord {
    /// Token used in the download filename; `RESP` when the serial is empty.
    pub fn filename_token(&self) -> String {
        let trimmed = self.serial_number.trim();
        if trimmed.is_empty() {
            "RESP".to_string()
        } else {
            sanitize_token(trimmed)
        }
    }

    /// Checks the structurally required fields before any layout work.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("equipment_type", &self.equipment_type)?;
        require_text("brand", &self.brand)?;
        require_text("serial_number", &self.serial_number)?;
        require_amount("acquisition_cost", self.acquisition_cost)?;
        require_text("employee_name", &self.employee_name)?;
        require_text("employee_position", &self.employee_position)?;
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty(field))
    } else {
        Ok(())
    }
}

fn require_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        Err(ValidationError::new(field, "must be a finite number"))
    } else if value < 0.0 {
        Err(ValidationError::new(field, "must not be negative"))
    } else {
        Ok(())
    }
}

/// Keeps filename tokens to a filesystem-safe alphabet.
fn sanitize_token(raw: &str) -> String {
    let mapped: String = raw
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' {
                ch
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = mapped.trim_matches('-');
    if trimmed.is_empty() {
        "DOC".to_string()
    } else {
        trimmed.to_string()
    }
}
