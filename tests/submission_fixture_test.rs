use anyhow::Result;
use chrono::NaiveDate;
use rent_form_guard::config::fields::load_fields;
use rent_form_guard::core::forms::validate_json;
use rent_form_guard::core::FormKind;
use rent_form_guard::utils::validation::ValidationContext;
use rent_form_guard::{GuardRules, ValidationError};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// 從檔案讀取表單欄位並以自訂規則驗證
#[test]
fn test_toml_submission_with_custom_rules() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let rules_path = temp_dir.path().join("rules.toml");
    std::fs::write(&rules_path, "[complaint]\nsubject_min_length = 12\n")?;
    let rules = GuardRules::from_file(&rules_path)?;

    let fields_path = temp_dir.path().join("complaint.toml");
    std::fs::write(
        &fields_path,
        r#"
subject = "Water leak"
description = "The bathroom ceiling has been leaking since Monday."
"#,
    )?;
    let fields = load_fields(&fields_path)?;

    let ctx = ValidationContext::new(&rules, today());
    let outcome = validate_json(FormKind::RaiseComplaint, fields, &ctx)?;
    assert_eq!(outcome, Err(ValidationError::SubjectTooShort { min: 12 }));

    Ok(())
}

#[test]
fn test_json_payment_submission() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let fields_path = temp_dir.path().join("payment.json");
    std::fs::write(
        &fields_path,
        r#"{
  "month": "June",
  "amount": "8500.00",
  "payment_date": "2024-06-10",
  "transaction_id": "NEFT-2231",
  "payment_proof": {"type": "image/jpeg", "size": 480000, "name": "receipt.jpg"}
}"#,
    )?;

    let rules = GuardRules::default();
    let ctx = ValidationContext::new(&rules, today());
    let outcome = validate_json(FormKind::AddPayment, load_fields(&fields_path)?, &ctx)?;
    assert_eq!(outcome, Ok(()));

    Ok(())
}

#[test]
fn test_add_tenant_phone_rule() -> Result<()> {
    let rules = GuardRules::default();
    let ctx = ValidationContext::new(&rules, today());

    let fields = serde_json::json!({
        "name": "Ravi",
        "email": "ravi@example.com",
        "phone": "98765 4321",
        "room_number": "4",
        "monthly_rent": "6000",
        "password": "hunter22",
    });
    let outcome = validate_json(FormKind::AddTenant, fields, &ctx)?;
    assert_eq!(outcome, Err(ValidationError::InvalidPhone));

    Ok(())
}

#[test]
fn test_named_upload_checked_by_extension() -> Result<()> {
    let rules = GuardRules::default();
    let ctx = ValidationContext::new(&rules, today());

    let fields = serde_json::json!({
        "month": "June",
        "amount": "8500",
        "payment_date": "2024-06-10",
        "transaction_id": "UPI-9912",
        "payment_proof": {"type": "image/png", "size": 2048, "name": "receipt.pdf"},
    });
    let outcome = validate_json(FormKind::AddPayment, fields, &ctx)?;
    assert_eq!(
        outcome.map_err(|e| e.to_string()),
        Err("Payment proof must be a JPG, JPEG, or PNG file".to_string())
    );

    Ok(())
}
