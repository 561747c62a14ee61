use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Attributes of a user-selected upload. The content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FileDescriptor {
    pub fn new(mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantLoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddTenantForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    pub monthly_rent: String,
    pub password: String,
    pub deposit_amount: String,
    pub deposit_paid_date: String,
    pub profile_photo: Option<FileDescriptor>,
    pub id_proof_photo: Option<FileDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddPaymentForm {
    pub month: String,
    pub amount: String,
    pub payment_date: String,
    pub transaction_id: String,
    pub payment_proof: Option<FileDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaiseComplaintForm {
    pub subject: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    AdminLogin,
    TenantLogin,
    AddTenant,
    AddPayment,
    RaiseComplaint,
}

impl FormKind {
    pub const ALL: [FormKind; 5] = [
        FormKind::AdminLogin,
        FormKind::TenantLogin,
        FormKind::AddTenant,
        FormKind::AddPayment,
        FormKind::RaiseComplaint,
    ];

    /// Element id of the `<form>` in the rendered page.
    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::AdminLogin => "adminLoginForm",
            FormKind::TenantLogin => "tenantLoginForm",
            FormKind::AddTenant => "addTenantForm",
            FormKind::AddPayment => "addPaymentForm",
            FormKind::RaiseComplaint => "raiseComplaintForm",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            FormKind::AdminLogin => "admin-login",
            FormKind::TenantLogin => "tenant-login",
            FormKind::AddTenant => "add-tenant",
            FormKind::AddPayment => "add-payment",
            FormKind::RaiseComplaint => "raise-complaint",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = FormKind::ALL.iter().map(|kind| kind.slug()).collect();
                format!("unknown form '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Optional upload inputs and the label used in their messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileField {
    PaymentProof,
    ProfilePhoto,
    IdProofPhoto,
}

impl FileField {
    pub fn input_id(self) -> &'static str {
        match self {
            FileField::PaymentProof => "payment_proof",
            FileField::ProfilePhoto => "profile_photo",
            FileField::IdProofPhoto => "id_proof_photo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileField::PaymentProof => "Payment proof",
            FileField::ProfilePhoto => "Profile photo",
            FileField::IdProofPhoto => "ID proof photo",
        }
    }

    /// Form whose page carries this input.
    pub fn form(self) -> FormKind {
        match self {
            FileField::PaymentProof => FormKind::AddPayment,
            FileField::ProfilePhoto | FileField::IdProofPhoto => FormKind::AddTenant,
        }
    }
}

/// Opaque reference to an element of a [`crate::domain::ports::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Submit(ElementHandle),
    Change(ElementHandle),
    Input(ElementHandle),
    Blur(ElementHandle),
    Click(ElementHandle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Allowed,
    /// The default action (submit, navigation) was suppressed.
    Blocked,
}

impl EventOutcome {
    pub fn is_blocked(self) -> bool {
        matches!(self, EventOutcome::Blocked)
    }
}

/// Deferred work handed to the document's timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    FadeOut { element: ElementHandle, fade: Duration },
    Remove(ElementHandle),
}
