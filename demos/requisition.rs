use std::error::Error;

use asset_pdf::record::{Currency, RequestType, RequisitionRecord, RequisitionStatus};
use asset_pdf::render;
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn Error>> {
    let record = RequisitionRecord {
        id: Some("64f1c2aa9b3e".to_string()),
        code: Some("REQ-2025-041".to_string()),
        request_type: RequestType::Transfer,
        request_date: NaiveDate::from_ymd_opt(2025, 3, 7).ok_or("invalid date")?,
        amount: 1234.5,
        currency: Currency::Mxn,
        amount_in_words: Some("MIL DOSCIENTOS TREINTA Y CUATRO PESOS 50/100 M.N.".to_string()),
        payable_to: "Proveedora del Caribe SA".to_string(),
        concept: "Renovación anual de licencias de software para los equipos de \
                  recepción y del centro de negocios"
            .to_string(),
        department: None,
        status: RequisitionStatus::Pending,
        requested_by: Some("Carlos Rivera".to_string()),
        approved_by: None,
    };

    let path = render::requisition_to_file(&record, ".")?;
    println!("Generated {}", path.display());
    Ok(())
}
