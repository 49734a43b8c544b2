//! Declarative rule set for the consignment submission form
//!
//! The rules drive the generic field validator; this module turns its
//! typed output into an insert payload, adding the range checks the
//! generic validator does not cover.

use std::collections::HashMap;

use tg_shared::validation::{FieldKind, FieldRule, FieldValue};

use crate::domain::entities::consignment::NewConsignment;

/// Validation rules for the consignment submission form
///
/// Field names are the wire contract of the upload form.
pub fn consignment_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::required("sender_name", FieldKind::Text),
        FieldRule::required("sender_address", FieldKind::Text),
        FieldRule::required("sender_country", FieldKind::Text),
        FieldRule::required("sender_mail", FieldKind::Text),
        FieldRule::required("sender_phone", FieldKind::Text),
        FieldRule::required("receiver_name", FieldKind::Text),
        FieldRule::required("receiver_address", FieldKind::Text),
        FieldRule::required("receiver_country", FieldKind::Text),
        FieldRule::required("shipment_id", FieldKind::Text),
        FieldRule::required("shipment_date", FieldKind::Date),
        FieldRule::required("PackageQuantity", FieldKind::Int),
        FieldRule::required("HS_code", FieldKind::Text),
        FieldRule::required("totalWeight", FieldKind::Float),
        FieldRule::required("Item_desc", FieldKind::Text),
        FieldRule::optional("handling_inst", FieldKind::Text),
    ]
}

/// Build an insert payload from validated form values
///
/// Expects the output of `validate_fields` over [`consignment_rules`], so
/// required fields are present and correctly typed. Range violations are
/// accumulated the same way the validator accumulates type errors.
pub fn draft_from_fields(
    fields: &HashMap<String, FieldValue>,
    invoice: Option<Vec<u8>>,
) -> Result<NewConsignment, Vec<String>> {
    let mut errors = Vec::new();

    let package_quantity = fields
        .get("PackageQuantity")
        .and_then(FieldValue::as_int)
        .unwrap_or_default();
    if package_quantity < 0 {
        errors.push("PackageQuantity must be zero or greater".to_string());
    }

    let total_weight = fields
        .get("totalWeight")
        .and_then(FieldValue::as_float)
        .unwrap_or_default();
    if total_weight < 0.0 {
        errors.push("totalWeight must be zero or greater".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let text = |name: &str| -> String {
        fields
            .get(name)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .to_string()
    };

    Ok(NewConsignment {
        sender_name: text("sender_name"),
        sender_address: text("sender_address"),
        sender_country: text("sender_country"),
        sender_mail: text("sender_mail"),
        sender_phone: text("sender_phone"),
        receiver_name: text("receiver_name"),
        receiver_address: text("receiver_address"),
        receiver_country: text("receiver_country"),
        shipment_id: text("shipment_id"),
        shipment_date: fields
            .get("shipment_date")
            .and_then(FieldValue::as_date)
            .unwrap_or_default(),
        package_quantity,
        hs_code: text("HS_code"),
        total_weight,
        item_desc: text("Item_desc"),
        handling_inst: text("handling_inst"),
        invoice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tg_shared::validation::validate_fields;

    fn complete_form() -> HashMap<String, String> {
        [
            ("sender_name", "Okafor Exports"),
            ("sender_address", "14 Marina Road, Lagos"),
            ("sender_country", "Nigeria"),
            ("sender_mail", "ops@okafor.example"),
            ("sender_phone", "+2348012345678"),
            ("receiver_name", "Brandt GmbH"),
            ("receiver_address", "Hafenstrasse 2, Hamburg"),
            ("receiver_country", "Germany"),
            ("shipment_id", "SHP-2025-0001"),
            ("shipment_date", "2025-03-14"),
            ("PackageQuantity", "12"),
            ("HS_code", "8471.30"),
            ("totalWeight", "103.5"),
            ("Item_desc", "Machined parts"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_complete_form_builds_a_draft() {
        let values = validate_fields(&consignment_rules(), &complete_form()).unwrap();
        let draft = draft_from_fields(&values, None).unwrap();

        assert_eq!(draft.shipment_id, "SHP-2025-0001");
        assert_eq!(draft.package_quantity, 12);
        assert_eq!(draft.total_weight, 103.5);
        // Absent optional field defaults to empty.
        assert_eq!(draft.handling_inst, "");
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let mut form = complete_form();
        form.remove("sender_name");
        form.remove("HS_code");

        let errors = validate_fields(&consignment_rules(), &form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"sender_name is required".to_string()));
        assert!(errors.contains(&"HS_code is required".to_string()));
    }

    #[test]
    fn test_negative_quantity_and_weight_are_both_reported() {
        let mut form = complete_form();
        form.insert("PackageQuantity".to_string(), "-3".to_string());
        form.insert("totalWeight".to_string(), "-1.5".to_string());

        let values = validate_fields(&consignment_rules(), &form).unwrap();
        let errors = draft_from_fields(&values, None).unwrap_err();

        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_invoice_bytes_are_carried_through() {
        let values = validate_fields(&consignment_rules(), &complete_form()).unwrap();
        let draft = draft_from_fields(&values, Some(vec![0x25, 0x50, 0x44, 0x46])).unwrap();

        assert_eq!(draft.invoice.as_deref(), Some(&[0x25, 0x50, 0x44, 0x46][..]));
    }
}
