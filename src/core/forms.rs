//! Per-form rule sets. Each validator stops at the first failing check, in
//! the order the page presents them.

use crate::core::files::validate_file;
use crate::domain::model::{
    AddPaymentForm, AddTenantForm, AdminLoginForm, FileField, FormKind, RaiseComplaintForm,
    TenantLoginForm,
};
use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::{
    char_len, is_blank, is_positive_number, is_valid_email, is_valid_phone, parse_iso_date,
    parse_number, require_all, RuleResult, Validate, ValidationContext,
};

fn missing_fields(field: String) -> ValidationError {
    ValidationError::MissingFields { field }
}

impl Validate for AdminLoginForm {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> RuleResult {
        require_all(
            &[("username", self.username.as_str()), ("password", self.password.as_str())],
            missing_fields,
        )
    }
}

impl Validate for TenantLoginForm {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> RuleResult {
        require_all(
            &[("email", self.email.as_str()), ("password", self.password.as_str())],
            missing_fields,
        )?;

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }
}

impl Validate for AddTenantForm {
    fn validate(&self, ctx: &ValidationContext<'_>) -> RuleResult {
        require_all(
            &[
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("phone", self.phone.as_str()),
                ("room_number", self.room_number.as_str()),
                ("monthly_rent", self.monthly_rent.as_str()),
                ("password", self.password.as_str()),
            ],
            missing_fields,
        )?;

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }

        if !is_positive_number(&self.monthly_rent) {
            return Err(ValidationError::NonPositiveRent);
        }

        let min = ctx.rules.tenant.password_min_length;
        if char_len(&self.password) < min {
            return Err(ValidationError::PasswordTooShort { min });
        }

        // Deposit fields are optional; only their shape is checked.
        if !is_blank(&self.deposit_amount) && parse_number(&self.deposit_amount).is_none() {
            return Err(ValidationError::InvalidDepositAmount);
        }

        if !is_blank(&self.deposit_paid_date) && parse_iso_date(&self.deposit_paid_date).is_none() {
            return Err(ValidationError::InvalidDepositDate);
        }

        validate_file(
            self.profile_photo.as_ref(),
            FileField::ProfilePhoto,
            &ctx.rules.files,
        )?;
        validate_file(
            self.id_proof_photo.as_ref(),
            FileField::IdProofPhoto,
            &ctx.rules.files,
        )
    }
}

impl Validate for AddPaymentForm {
    fn validate(&self, ctx: &ValidationContext<'_>) -> RuleResult {
        require_all(
            &[
                ("month", self.month.as_str()),
                ("amount", self.amount.as_str()),
                ("payment_date", self.payment_date.as_str()),
                ("transaction_id", self.transaction_id.as_str()),
            ],
            |field| ValidationError::MissingRequiredFields { field },
        )?;

        if !is_positive_number(&self.amount) {
            return Err(ValidationError::NonPositiveAmount);
        }

        let paid_on =
            parse_iso_date(&self.payment_date).ok_or(ValidationError::InvalidPaymentDate)?;
        if paid_on > ctx.today {
            return Err(ValidationError::FuturePaymentDate);
        }

        validate_file(
            self.payment_proof.as_ref(),
            FileField::PaymentProof,
            &ctx.rules.files,
        )
    }
}

impl Validate for RaiseComplaintForm {
    fn validate(&self, ctx: &ValidationContext<'_>) -> RuleResult {
        require_all(
            &[("subject", self.subject.as_str()), ("description", self.description.as_str())],
            missing_fields,
        )?;

        let rules = &ctx.rules.complaint;

        if char_len(&self.subject) < rules.subject_min_length {
            return Err(ValidationError::SubjectTooShort {
                min: rules.subject_min_length,
            });
        }

        let description_len = char_len(&self.description);
        if description_len < rules.description_min_length {
            return Err(ValidationError::DescriptionTooShort {
                min: rules.description_min_length,
            });
        }
        if description_len > rules.description_max_length {
            return Err(ValidationError::DescriptionTooLong {
                max: rules.description_max_length,
            });
        }

        Ok(())
    }
}

/// Validates a serialized submission of the given form. Deserialization
/// problems are reported as errors; rule violations come back as the inner
/// result.
pub fn validate_json(
    kind: FormKind,
    fields: serde_json::Value,
    ctx: &ValidationContext<'_>,
) -> Result<RuleResult> {
    let outcome = match kind {
        FormKind::AdminLogin => serde_json::from_value::<AdminLoginForm>(fields)?.validate(ctx),
        FormKind::TenantLogin => serde_json::from_value::<TenantLoginForm>(fields)?.validate(ctx),
        FormKind::AddTenant => serde_json::from_value::<AddTenantForm>(fields)?.validate(ctx),
        FormKind::AddPayment => serde_json::from_value::<AddPaymentForm>(fields)?.validate(ctx),
        FormKind::RaiseComplaint => {
            serde_json::from_value::<RaiseComplaintForm>(fields)?.validate(ctx)
        }
    };
    Ok(outcome)
}
