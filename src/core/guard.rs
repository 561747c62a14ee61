//! Event binding for the page: which elements have handlers, and what each
//! handler does when the document dispatches an event to it.

use crate::config::toml_config::GuardRules;
use crate::core::files::validate_file;
use crate::core::formatters::{format_currency, format_phone, CURRENCY_FIELDS};
use crate::core::ui;
use crate::domain::model::{
    AddPaymentForm, AddTenantForm, AdminLoginForm, ElementHandle, Event, EventOutcome,
    FileDescriptor, FileField, FormKind, RaiseComplaintForm, TenantLoginForm,
};
use crate::domain::ports::{Clock, Document};
use crate::utils::validation::{RuleResult, Validate, ValidationContext};
use std::collections::{HashMap, HashSet};

pub struct FormGuard<C: Clock> {
    rules: GuardRules,
    clock: C,
    forms: HashMap<ElementHandle, FormKind>,
    file_inputs: HashMap<ElementHandle, FileField>,
    phone_input: Option<ElementHandle>,
    currency_inputs: HashSet<ElementHandle>,
    confirm_targets: HashSet<ElementHandle>,
}

/// Binds every handler whose element is present on the page, applies the
/// payment date bound and schedules flash dismissal. Elements added after
/// this call are not bound.
pub fn attach_validators<D: Document, C: Clock>(
    document: &mut D,
    rules: GuardRules,
    clock: C,
) -> FormGuard<C> {
    if let Some(date_input) = document.get_element_by_id("payment_date") {
        ui::apply_payment_date_bound(document, date_input, clock.today());
    }

    let mut forms = HashMap::new();
    for kind in FormKind::ALL {
        if let Some(form) = document.get_element_by_id(kind.form_id()) {
            tracing::debug!(form = %kind, "bound submit validator");
            forms.insert(form, kind);
        }
    }

    let mut file_inputs = HashMap::new();
    for field in [
        FileField::PaymentProof,
        FileField::ProfilePhoto,
        FileField::IdProofPhoto,
    ] {
        if document.get_element_by_id(field.form().form_id()).is_none() {
            continue;
        }
        if let Some(input) = document.get_element_by_id(field.input_id()) {
            tracing::debug!(input = field.input_id(), "bound file check");
            file_inputs.insert(input, field);
        }
    }

    let phone_input = document.get_element_by_id("phone");
    let currency_inputs: HashSet<ElementHandle> = document
        .number_inputs_named(&CURRENCY_FIELDS)
        .into_iter()
        .collect();
    let confirm_targets: HashSet<ElementHandle> =
        document.confirm_elements().into_iter().collect();

    ui::schedule_flash_dismissal(document, &rules.flash);

    tracing::debug!(
        forms = forms.len(),
        file_inputs = file_inputs.len(),
        currency_inputs = currency_inputs.len(),
        confirm_targets = confirm_targets.len(),
        "form guard attached"
    );

    FormGuard {
        rules,
        clock,
        forms,
        file_inputs,
        phone_input,
        currency_inputs,
        confirm_targets,
    }
}

impl<C: Clock> FormGuard<C> {
    pub fn is_bound(&self, kind: FormKind) -> bool {
        self.forms.values().any(|bound| *bound == kind)
    }

    /// Runs the handler bound to the event's target, if any. Unbound targets
    /// are always allowed.
    pub fn dispatch<D: Document>(&self, document: &mut D, event: Event) -> EventOutcome {
        match event {
            Event::Submit(target) => match self.forms.get(&target) {
                Some(&kind) => self.on_submit(document, kind),
                None => EventOutcome::Allowed,
            },
            Event::Change(target) => {
                if let Some(&field) = self.file_inputs.get(&target) {
                    self.on_file_selected(document, target, field);
                }
                EventOutcome::Allowed
            }
            Event::Input(target) => {
                if self.phone_input == Some(target) {
                    on_phone_input(document, target);
                }
                EventOutcome::Allowed
            }
            Event::Blur(target) => {
                if self.currency_inputs.contains(&target) {
                    on_currency_blur(document, target);
                }
                EventOutcome::Allowed
            }
            Event::Click(target) => {
                if self.confirm_targets.contains(&target) {
                    ui::confirm_action(document, &self.rules.flash.confirm_prompt)
                } else {
                    EventOutcome::Allowed
                }
            }
        }
    }

    fn on_submit<D: Document>(&self, document: &mut D, kind: FormKind) -> EventOutcome {
        let Some(result) = self.check_page(document, kind) else {
            return EventOutcome::Allowed;
        };

        match result {
            Ok(()) => EventOutcome::Allowed,
            Err(e) => {
                tracing::info!(form = %kind, field = e.field(), "submission blocked: {}", e);
                document.alert(&e.to_string());
                EventOutcome::Blocked
            }
        }
    }

    /// Reads the form off the page and validates it. `None` when a required
    /// input is not on the page, in which case nothing is checked.
    fn check_page<D: Document>(&self, document: &D, kind: FormKind) -> Option<RuleResult> {
        let ctx = ValidationContext::new(&self.rules, self.clock.today());

        let result = match kind {
            FormKind::AdminLogin => {
                let [username, password] = required(document, ["username", "password"])?;
                AdminLoginForm { username, password }.validate(&ctx)
            }
            FormKind::TenantLogin => {
                let [email, password] = required(document, ["email", "password"])?;
                TenantLoginForm { email, password }.validate(&ctx)
            }
            FormKind::AddTenant => {
                let [name, email, phone, room_number, monthly_rent, password] = required(
                    document,
                    ["name", "email", "phone", "room_number", "monthly_rent", "password"],
                )?;
                AddTenantForm {
                    name,
                    email,
                    phone,
                    room_number,
                    monthly_rent,
                    password,
                    deposit_amount: document.value_of("deposit_amount").unwrap_or_default(),
                    deposit_paid_date: document
                        .value_of("deposit_paid_date")
                        .unwrap_or_default(),
                    profile_photo: selected_file(document, FileField::ProfilePhoto),
                    id_proof_photo: selected_file(document, FileField::IdProofPhoto),
                }
                .validate(&ctx)
            }
            FormKind::AddPayment => {
                let [month, amount, payment_date, transaction_id] = required(
                    document,
                    ["month", "amount", "payment_date", "transaction_id"],
                )?;
                AddPaymentForm {
                    month,
                    amount,
                    payment_date,
                    transaction_id,
                    payment_proof: selected_file(document, FileField::PaymentProof),
                }
                .validate(&ctx)
            }
            FormKind::RaiseComplaint => {
                let [subject, description] = required(document, ["subject", "description"])?;
                RaiseComplaintForm {
                    subject,
                    description,
                }
                .validate(&ctx)
            }
        };

        Some(result)
    }

    fn on_file_selected<D: Document>(
        &self,
        document: &mut D,
        input: ElementHandle,
        field: FileField,
    ) {
        let Some(file) = document.selected_file(input) else {
            return;
        };

        if let Err(e) = validate_file(Some(&file), field, &self.rules.files) {
            tracing::info!(input = field.input_id(), "rejected file selection: {}", e);
            document.alert(&e.to_string());
            document.clear_selection(input);
        }
    }
}

fn required<D: Document, const N: usize>(
    document: &D,
    ids: [&'static str; N],
) -> Option<[String; N]> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, id) in values.iter_mut().zip(ids) {
        match document.value_of(id) {
            Some(value) => *slot = value,
            None => {
                tracing::warn!(field = id, "form field not on page, skipping validation");
                return None;
            }
        }
    }
    Some(values)
}

fn selected_file<D: Document>(document: &D, field: FileField) -> Option<FileDescriptor> {
    document
        .get_element_by_id(field.input_id())
        .and_then(|input| document.selected_file(input))
}

fn on_phone_input<D: Document>(document: &mut D, input: ElementHandle) {
    let Some(raw) = document.value(input) else {
        return;
    };
    let formatted = format_phone(&raw);
    if formatted != raw {
        document.set_value(input, &formatted);
    }
}

fn on_currency_blur<D: Document>(document: &mut D, input: ElementHandle) {
    let Some(raw) = document.value(input) else {
        return;
    };
    if let Some(formatted) = format_currency(&raw) {
        tracing::debug!(from = %raw, to = %formatted, "formatted currency input");
        document.set_value(input, &formatted);
    }
}
