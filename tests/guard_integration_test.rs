use chrono::NaiveDate;
use rent_form_guard::adapters::memory::Element;
use rent_form_guard::core::{Document, Event, EventOutcome, FileDescriptor, FormKind};
use rent_form_guard::{attach_validators, FixedClock, FormGuard, GuardRules, MemoryDocument};

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

fn attach(doc: &mut MemoryDocument) -> FormGuard<FixedClock> {
    attach_validators(doc, GuardRules::default(), clock())
}

struct TenantPage {
    doc: MemoryDocument,
    form: rent_form_guard::domain::model::ElementHandle,
}

fn add_tenant_page() -> TenantPage {
    let mut doc = MemoryDocument::new();
    let form = doc.add_form("addTenantForm");
    doc.add_input("name", "text", "Asha Rao");
    doc.add_input("email", "email", "asha@example.com");
    doc.add_input("phone", "tel", "5551234567");
    doc.add_input("room_number", "text", "B-12");
    doc.add_input("monthly_rent", "number", "8500");
    doc.add_input("password", "password", "secret");
    doc.add_input("deposit_amount", "number", "");
    doc.add_input("deposit_paid_date", "date", "");
    doc.add_input("profile_photo", "file", "");
    doc.add_input("id_proof_photo", "file", "");
    TenantPage { doc, form }
}

fn set(doc: &mut MemoryDocument, id: &str, value: &str) {
    let element = doc.get_element_by_id(id).unwrap();
    doc.set_value(element, value);
}

#[test]
fn test_admin_login_blocks_empty_password() {
    let mut doc = MemoryDocument::new();
    let form = doc.add_form("adminLoginForm");
    doc.add_input("username", "text", "admin");
    doc.add_input("password", "password", "");
    let guard = attach(&mut doc);

    assert_eq!(guard.dispatch(&mut doc, Event::Submit(form)), EventOutcome::Blocked);
    assert_eq!(doc.alerts(), ["Please fill in all fields"]);

    set(&mut doc, "password", "admin123");
    assert_eq!(guard.dispatch(&mut doc, Event::Submit(form)), EventOutcome::Allowed);
    assert_eq!(doc.alerts().len(), 1);
}

#[test]
fn test_tenant_login_email_shape() {
    let mut doc = MemoryDocument::new();
    let form = doc.add_form("tenantLoginForm");
    doc.add_input("email", "email", "a@b");
    doc.add_input("password", "password", "pw");
    let guard = attach(&mut doc);

    assert!(guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
    assert_eq!(doc.alerts(), ["Please enter a valid email address"]);

    set(&mut doc, "email", "a@b.co");
    assert!(!guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
}

#[test]
fn test_add_tenant_valid_submission() {
    let TenantPage { mut doc, form } = add_tenant_page();
    let guard = attach(&mut doc);

    assert_eq!(guard.dispatch(&mut doc, Event::Submit(form)), EventOutcome::Allowed);
    assert!(doc.alerts().is_empty());
}

#[test]
fn test_add_tenant_shows_single_message() {
    let TenantPage { mut doc, form } = add_tenant_page();
    let photo = doc.get_element_by_id("profile_photo").unwrap();
    doc.select_file(photo, FileDescriptor::new("image/gif", 100));
    set(&mut doc, "password", "123");
    let guard = attach(&mut doc);

    assert!(guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
    assert_eq!(doc.alerts(), ["Password must be at least 6 characters long"]);
}

#[test]
fn test_add_tenant_rejects_stale_photo_at_submit() {
    let TenantPage { mut doc, form } = add_tenant_page();
    let id_proof = doc.get_element_by_id("id_proof_photo").unwrap();
    doc.select_file(id_proof, FileDescriptor::new("image/png", 3 * 1024 * 1024));
    let guard = attach(&mut doc);

    assert!(guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
    assert_eq!(doc.alerts(), ["ID proof photo must be less than 2MB"]);
}

#[test]
fn test_file_selection_is_cleared_on_rejection() {
    let TenantPage { mut doc, .. } = add_tenant_page();
    let guard = attach(&mut doc);
    let photo = doc.get_element_by_id("profile_photo").unwrap();

    doc.select_file(photo, FileDescriptor::new("image/gif", 100).with_name("cat.gif"));
    assert_eq!(guard.dispatch(&mut doc, Event::Change(photo)), EventOutcome::Allowed);
    assert_eq!(doc.alerts(), ["Profile photo must be a JPG, JPEG, or PNG file"]);
    assert!(doc.selected_file(photo).is_none());
    assert_eq!(doc.value(photo).as_deref(), Some(""));

    doc.select_file(photo, FileDescriptor::new("image/jpeg", 500_000));
    guard.dispatch(&mut doc, Event::Change(photo));
    assert_eq!(doc.alerts().len(), 1);
    assert!(doc.selected_file(photo).is_some());
}

#[test]
fn test_add_payment_flow() {
    let mut doc = MemoryDocument::new();
    let form = doc.add_form("addPaymentForm");
    doc.add_input("month", "text", "June");
    doc.add_input("amount", "number", "8500");
    let date = doc.add_input("payment_date", "date", "2024-06-16");
    doc.add_input("transaction_id", "text", "UPI-1");
    let proof = doc.add_input("payment_proof", "file", "");
    let guard = attach(&mut doc);

    assert_eq!(doc.attribute(date, "max"), Some("2024-06-15"));

    assert!(guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
    assert_eq!(doc.alerts().last().unwrap(), "Payment date cannot be in the future");

    doc.set_value(date, "2024-06-15");
    assert!(!guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());

    doc.select_file(proof, FileDescriptor::new("image/png", 2_097_153));
    assert!(guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
    assert_eq!(doc.alerts().last().unwrap(), "Payment proof must be less than 2MB");

    doc.select_file(proof, FileDescriptor::new("image/png", 2_097_152));
    assert!(!guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
}

#[test]
fn test_add_payment_missing_field_message() {
    let mut doc = MemoryDocument::new();
    let form = doc.add_form("addPaymentForm");
    doc.add_input("month", "text", "June");
    doc.add_input("amount", "number", "");
    doc.add_input("payment_date", "date", "2024-06-01");
    doc.add_input("transaction_id", "text", "UPI-1");
    let guard = attach(&mut doc);

    assert!(guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
    assert_eq!(doc.alerts(), ["Please fill in all required fields"]);
}

#[test]
fn test_complaint_description_bounds() {
    let mut doc = MemoryDocument::new();
    let form = doc.add_form("raiseComplaintForm");
    doc.add_input("subject", "text", "Water leak");
    doc.add(Element::new("textarea").with_id("description").with_value("x".repeat(2001)));
    let guard = attach(&mut doc);

    assert!(guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
    assert_eq!(
        doc.alerts(),
        ["Description is too long (maximum 2000 characters)"]
    );

    set(&mut doc, "description", &"x".repeat(2000));
    assert!(!guard.dispatch(&mut doc, Event::Submit(form)).is_blocked());
}

#[test]
fn test_missing_field_element_does_nothing() {
    let mut doc = MemoryDocument::new();
    let form = doc.add_form("raiseComplaintForm");
    doc.add_input("subject", "text", "");
    let guard = attach(&mut doc);

    assert!(guard.is_bound(FormKind::RaiseComplaint));
    assert_eq!(guard.dispatch(&mut doc, Event::Submit(form)), EventOutcome::Allowed);
    assert!(doc.alerts().is_empty());
}

#[test]
fn test_only_present_forms_are_bound() {
    let mut doc = MemoryDocument::new();
    doc.add_form("adminLoginForm");
    let guard = attach(&mut doc);

    assert!(guard.is_bound(FormKind::AdminLogin));
    assert!(!guard.is_bound(FormKind::AddPayment));

    let late_form = doc.add_form("addPaymentForm");
    assert_eq!(
        guard.dispatch(&mut doc, Event::Submit(late_form)),
        EventOutcome::Allowed
    );
}

#[test]
fn test_payment_proof_unbound_without_payment_form() {
    let mut doc = MemoryDocument::new();
    let proof = doc.add_input("payment_proof", "file", "");
    let guard = attach(&mut doc);

    doc.select_file(proof, FileDescriptor::new("image/gif", 1));
    guard.dispatch(&mut doc, Event::Change(proof));
    assert!(doc.alerts().is_empty());
    assert!(doc.selected_file(proof).is_some());
}

#[test]
fn test_phone_mask_on_input() {
    let TenantPage { mut doc, .. } = add_tenant_page();
    let guard = attach(&mut doc);
    let phone = doc.get_element_by_id("phone").unwrap();

    doc.set_value(phone, "55a5b51234567");
    assert_eq!(guard.dispatch(&mut doc, Event::Input(phone)), EventOutcome::Allowed);
    assert_eq!(doc.value(phone).as_deref(), Some("5555123456"));

    doc.set_value(phone, "555a123b45678");
    guard.dispatch(&mut doc, Event::Input(phone));
    assert_eq!(doc.value(phone).as_deref(), Some("5551234567"));
}

#[test]
fn test_currency_format_on_blur() {
    let TenantPage { mut doc, .. } = add_tenant_page();
    let guard = attach(&mut doc);
    let rent = doc.get_element_by_id("monthly_rent").unwrap();

    doc.set_value(rent, "12");
    guard.dispatch(&mut doc, Event::Blur(rent));
    assert_eq!(doc.value(rent).as_deref(), Some("12.00"));

    doc.set_value(rent, "-5");
    assert_eq!(guard.dispatch(&mut doc, Event::Blur(rent)), EventOutcome::Allowed);
    assert_eq!(doc.value(rent).as_deref(), Some("-5"));

    let name = doc.get_element_by_id("name").unwrap();
    guard.dispatch(&mut doc, Event::Blur(name));
    assert_eq!(doc.value(name).as_deref(), Some("Asha Rao"));
}

#[test]
fn test_confirm_before_destructive_action() {
    let mut doc = MemoryDocument::new();
    let delete = doc.add(
        Element::new("a")
            .with_id("delete-tenant")
            .with_attribute("onclick", "return confirm('Delete this tenant?')"),
    );
    let plain = doc.add(Element::new("a").with_id("view-tenant"));
    let guard = attach(&mut doc);

    doc.answer_next_confirm(false);
    assert_eq!(guard.dispatch(&mut doc, Event::Click(delete)), EventOutcome::Blocked);

    doc.answer_next_confirm(true);
    assert_eq!(guard.dispatch(&mut doc, Event::Click(delete)), EventOutcome::Allowed);

    assert_eq!(guard.dispatch(&mut doc, Event::Click(plain)), EventOutcome::Allowed);
    assert_eq!(doc.prompts(), ["Are you sure?", "Are you sure?"]);
}
