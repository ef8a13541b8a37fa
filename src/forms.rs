//! Form compositions: record in, single-page layout out.
//!
//! Both compositions are pure functions of their record. They share the
//! letterhead, the label/value body, the signature block and the footer
//! caption; only the field rows and captions differ between the payment
//! requisition and the equipment custody letter.

use crate::error::DocError;
use crate::format;
use crate::layout::{
    Composer, DocumentLayout, FontStyle, BODY_LIMIT, BODY_SIZE, LABEL_X, MARGIN_LEFT,
    MARGIN_RIGHT, PAGE_WIDTH, ROW_HEIGHT, VALUE_X,
};
use crate::record::{Currency, CustodyRecord, RequisitionRecord};

const SUBTITLE: &str = "Sistema de Gestión de Activos";
const FOOTER_CAPTION: &str = "Documento generado electrónicamente - no requiere sello";

const TITLE_Y: f64 = 25.0;
const SUBTITLE_Y: f64 = 32.0;
const RULE_Y: f64 = 36.0;
const BODY_START_Y: f64 = 46.0;

const TITLE_SIZE: f64 = 16.0;
const SUBTITLE_SIZE: f64 = 11.0;
const AMOUNT_SIZE: f64 = 13.0;
const WORDS_SIZE: f64 = 9.0;
const SIGNATURE_SIZE: f64 = 9.0;
const FOOTER_SIZE: f64 = 7.0;

const SIGNATURE_Y: f64 = 252.0;
const SIGNATURE_CAPTION_Y: f64 = 257.0;
const SIGNATURE_NAME_Y: f64 = 263.0;
const FOOTER_Y: f64 = 285.0;

const LEFT_SIGNATURE: (f64, f64) = (25.0, 85.0);
const RIGHT_SIGNATURE: (f64, f64) = (125.0, 185.0);
const SIGNER_PLACEHOLDER: &str = "____________________";

/// Composes the layout for a payment requisition.
pub fn requisition_layout(record: &RequisitionRecord) -> Result<DocumentLayout, DocError> {
    let mut composer = Composer::new();
    letterhead(&mut composer, "REQUISICIÓN DE PAGO");

    let mut cursor = BODY_START_Y;
    cursor = composer.label_value(cursor, "Folio:", &record.folio());
    cursor = composer.label_value(
        cursor,
        "Fecha de solicitud:",
        &format::long_date(record.request_date),
    );
    cursor = composer.label_value(cursor, "Tipo de pago:", &record.request_type.label());
    cursor = composer.label_value(cursor, "Departamento:", &record.department_label());
    cursor = composer.label_value(cursor, "Beneficiario:", record.payable_to.trim());
    cursor = composer.label_value(cursor, "Estado:", &record.status.label());
    cursor = composer.label_wrapped(cursor, "Concepto:", record.concept.trim());
    cursor = amount_block(
        &mut composer,
        cursor,
        record.amount,
        &record.currency,
        record.amount_in_words.as_deref(),
    );
    check_overflow(cursor)?;

    signatures(
        &mut composer,
        "SOLICITADO POR",
        record.requested_by.as_deref(),
        "AUTORIZADO POR",
        record.approved_by.as_deref(),
    );
    footer(&mut composer);

    Ok(composer.finish(format!("Requisición {}", record.folio())))
}

/// Composes the layout for an equipment custody ("responsiva") letter.
pub fn custody_layout(record: &CustodyRecord) -> Result<DocumentLayout, DocError> {
    let mut composer = Composer::new();
    letterhead(&mut composer, "CARTA RESPONSIVA DE EQUIPO");

    let mut cursor = BODY_START_Y;
    cursor = composer.label_value(cursor, "Equipo:", record.equipment_type.trim());
    cursor = composer.label_value(cursor, "Marca:", record.brand.trim());
    cursor = composer.label_value(cursor, "Número de serie:", record.serial_number.trim());
    cursor = composer.label_value(
        cursor,
        "Fecha de entrega:",
        &format::long_date(record.delivery_date),
    );
    cursor = composer.label_value(cursor, "Empleado:", record.employee_name.trim());
    cursor = composer.label_value(cursor, "Puesto:", record.employee_position.trim());
    cursor = composer.label_value(cursor, "Estado:", &record.status.label());
    cursor = amount_block(
        &mut composer,
        cursor,
        record.acquisition_cost,
        &Currency::Mxn,
        None,
    );
    let declaration = format!(
        "Recibo en resguardo el equipo {} marca {} con número de serie {}, y me \
         comprometo a conservarlo en buen estado, a utilizarlo únicamente para \
         las funciones propias de mi puesto y a devolverlo cuando la empresa \
         así lo requiera.",
        record.equipment_type.trim(),
        record.brand.trim(),
        record.serial_number.trim(),
    );
    cursor = composer.label_wrapped(cursor, "Declaración:", &declaration);
    check_overflow(cursor)?;

    signatures(
        &mut composer,
        "ENTREGÓ",
        None,
        "RECIBÍ",
        Some(record.employee_name.trim()),
    );
    footer(&mut composer);

    Ok(composer.finish(format!(
        "Responsiva {}",
        record.serial_number.trim()
    )))
}

fn letterhead(composer: &mut Composer, title: &str) {
    let center = PAGE_WIDTH / 2.0;
    composer.centered_text(center, TITLE_Y, TITLE_SIZE, FontStyle::Bold, title);
    composer.centered_text(center, SUBTITLE_Y, SUBTITLE_SIZE, FontStyle::Regular, SUBTITLE);
    composer.rule(MARGIN_LEFT, MARGIN_RIGHT, RULE_Y);
}

/// Emphasized monetary row with the optional spelled-out amount beneath.
fn amount_block(
    composer: &mut Composer,
    cursor: f64,
    amount: f64,
    currency: &Currency,
    amount_in_words: Option<&str>,
) -> f64 {
    composer.text_at(LABEL_X, cursor, BODY_SIZE, FontStyle::Bold, "Importe:");
    composer.text_at(
        VALUE_X,
        cursor,
        AMOUNT_SIZE,
        FontStyle::Bold,
        format::money(amount, currency),
    );
    let mut next = cursor + ROW_HEIGHT;
    if let Some(words) = amount_in_words.map(str::trim).filter(|words| !words.is_empty()) {
        composer.text_at(
            VALUE_X,
            next - 2.0,
            WORDS_SIZE,
            FontStyle::Italic,
            format!("({words})"),
        );
        next += ROW_HEIGHT - 2.0;
    }
    next
}

fn signatures(
    composer: &mut Composer,
    left_caption: &str,
    left_signer: Option<&str>,
    right_caption: &str,
    right_signer: Option<&str>,
) {
    signature(composer, LEFT_SIGNATURE, left_caption, left_signer);
    signature(composer, RIGHT_SIGNATURE, right_caption, right_signer);
}

fn signature(
    composer: &mut Composer,
    (x1, x2): (f64, f64),
    caption: &str,
    signer: Option<&str>,
) {
    let center = (x1 + x2) / 2.0;
    composer.rule(x1, x2, SIGNATURE_Y);
    composer.centered_text(
        center,
        SIGNATURE_CAPTION_Y,
        SIGNATURE_SIZE,
        FontStyle::Bold,
        caption,
    );
    let name = signer
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(SIGNER_PLACEHOLDER);
    composer.centered_text(
        center,
        SIGNATURE_NAME_Y,
        SIGNATURE_SIZE,
        FontStyle::Regular,
        name,
    );
}

fn footer(composer: &mut Composer) {
    composer.muted_centered_text(PAGE_WIDTH / 2.0, FOOTER_Y, FOOTER_SIZE, FOOTER_CAPTION);
}

fn check_overflow(cursor: f64) -> Result<(), DocError> {
    if cursor > BODY_LIMIT {
        Err(DocError::Render(format!(
            "content runs past the single-page body limit ({cursor:.1} > {BODY_LIMIT})"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Op;
    use crate::record::{RequestType, RequisitionStatus};
    use chrono::NaiveDate;

    fn sample_requisition() -> RequisitionRecord {
        RequisitionRecord {
            id: Some("64f1c2aa9b3e".to_string()),
            code: Some("REQ-2025-041".to_string()),
            request_type: RequestType::Transfer,
            request_date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            amount: 1234.5,
            currency: Currency::Mxn,
            amount_in_words: Some(
                "MIL DOSCIENTOS TREINTA Y CUATRO PESOS 50/100 M.N.".to_string(),
            ),
            payable_to: "Proveedora del Caribe SA".to_string(),
            concept: "Renovación anual de licencias de software".to_string(),
            department: None,
            status: RequisitionStatus::Pending,
            requested_by: Some("Carlos Rivera".to_string()),
            approved_by: None,
        }
    }

    fn texts(layout: &DocumentLayout) -> Vec<&str> {
        layout
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                Op::Rule { .. } => None,
            })
            .collect()
    }

    #[test]
    fn requisition_layout_is_deterministic() {
        let record = sample_requisition();
        let first = requisition_layout(&record).unwrap();
        let second = requisition_layout(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn requisition_contains_formatted_values() {
        let layout = requisition_layout(&sample_requisition()).unwrap();
        let texts = texts(&layout);
        assert!(texts.contains(&"REQ-2025-041"));
        assert!(texts.contains(&"7 de marzo de 2025"));
        assert!(texts.contains(&"TRANSFERENCIA"));
        assert!(texts.contains(&"SISTEMAS"));
        assert!(texts.contains(&"$1,234.50 MXN"));
        assert!(texts.contains(&"(MIL DOSCIENTOS TREINTA Y CUATRO PESOS 50/100 M.N.)"));
    }

    #[test]
    fn missing_approver_renders_placeholder_line() {
        let layout = requisition_layout(&sample_requisition()).unwrap();
        let texts = texts(&layout);
        assert!(texts.contains(&"Carlos Rivera"));
        assert!(texts.contains(&SIGNER_PLACEHOLDER));
    }

    #[test]
    fn missing_code_renders_missing_folio_marker() {
        let mut record = sample_requisition();
        record.code = None;
        record.id = None;
        let layout = requisition_layout(&record).unwrap();
        assert!(texts(&layout).contains(&"N/A"));
    }

    #[test]
    fn long_concept_pushes_amount_down_without_overlap() {
        let mut short = sample_requisition();
        short.concept = "Breve".to_string();
        let mut long = sample_requisition();
        long.concept = "renovación de contratos de mantenimiento preventivo y \
                        correctivo para todos los equipos de cómputo, impresión y \
                        telecomunicaciones instalados en las áreas operativas y \
                        administrativas del hotel durante el ejercicio fiscal"
            .to_string();

        let amount_y = |record: &RequisitionRecord| {
            let layout = requisition_layout(record).unwrap();
            layout
                .ops
                .iter()
                .find_map(|op| match op {
                    Op::Text { y, text, .. } if text.starts_with('$') => Some(*y),
                    _ => None,
                })
                .expect("amount op present")
        };

        let short_y = amount_y(&short);
        let long_y = amount_y(&long);
        assert!(long_y > short_y);

        // No body text may sit below the amount row it was pushed above.
        let layout = requisition_layout(&long).unwrap();
        for op in &layout.ops {
            if let Op::Text { y, size, .. } = op {
                if *size == BODY_SIZE {
                    assert!(*y <= long_y);
                }
            }
        }
    }

    #[test]
    fn absurdly_long_concept_is_rejected() {
        let mut record = sample_requisition();
        record.concept = "palabra ".repeat(600);
        let err = requisition_layout(&record).unwrap_err();
        assert!(matches!(err, DocError::Render(_)));
    }

    #[test]
    fn custody_layout_lists_equipment_and_signatures() {
        let record = CustodyRecord {
            equipment_type: "Laptop".to_string(),
            brand: "Dell".to_string(),
            serial_number: "5CG1234XYZ".to_string(),
            acquisition_cost: 18999.0,
            delivery_date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            employee_name: "Laura Méndez".to_string(),
            employee_position: "Recepcionista".to_string(),
            status: crate::record::CustodyStatus::Active,
        };
        let layout = custody_layout(&record).unwrap();
        let texts = texts(&layout);
        assert!(texts.contains(&"CARTA RESPONSIVA DE EQUIPO"));
        assert!(texts.contains(&"5CG1234XYZ"));
        assert!(texts.contains(&"$18,999.00 MXN"));
        assert!(texts.contains(&"2 de noviembre de 2024"));
        assert!(texts.contains(&"VIGENTE"));
        assert!(texts.contains(&"ENTREGÓ"));
        assert!(texts.contains(&"Laura Méndez"));
        assert!(texts.contains(&SIGNER_PLACEHOLDER));
    }
}
