use std::error::Error;

use asset_pdf::record::{CustodyRecord, CustodyStatus};
use asset_pdf::render;
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn Error>> {
    let record = CustodyRecord {
        equipment_type: "Laptop".to_string(),
        brand: "Dell".to_string(),
        serial_number: "5CG1234XYZ".to_string(),
        acquisition_cost: 18999.0,
        delivery_date: NaiveDate::from_ymd_opt(2024, 11, 2).ok_or("invalid date")?,
        employee_name: "Laura Méndez".to_string(),
        employee_position: "Recepcionista".to_string(),
        status: CustodyStatus::Active,
    };

    let path = render::custody_to_file(&record, ".")?;
    println!("Generated {}", path.display());
    Ok(())
}
