//! Demo-request and contact-message schemas and their validator.
//!
//! Creating a record is a two-step process:
//!
//! 1. **Extraction.** Only the allow-listed field names are read from the
//!    untrusted JSON payload. Everything else, including any client-supplied
//!    `id` or `created_at`, is dropped.
//! 2. **Stamping.** The extracted input is combined with a fresh
//!    [`new_unique_id`] and [`now_utc_iso`] to produce the canonical record.
//!
//! Every failing field is reported at once, in declaration order.

use serde::Serialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{CoreError, FieldError, FieldErrorKind};
use crate::stamp::{new_unique_id, now_utc_iso};
use crate::types::{IsoTimestamp, RecordId};

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

pub const MAX_NAME_LENGTH: u64 = 200;
pub const MAX_EMAIL_LENGTH: u64 = 320;
pub const MAX_COMPANY_LENGTH: u64 = 200;
pub const MAX_ROLE_LENGTH: u64 = 200;
pub const MAX_SUBJECT_LENGTH: u64 = 300;
pub const MAX_MESSAGE_LENGTH: u64 = 5_000;

/// Demo-request create fields, in declaration order.
pub const DEMO_REQUEST_FIELDS: &[&str] = &["name", "email", "company", "role", "message"];

/// Contact-message create fields, in declaration order.
pub const CONTACT_MESSAGE_FIELDS: &[&str] = &["name", "email", "subject", "message"];

// ---------------------------------------------------------------------------
// Canonical records
// ---------------------------------------------------------------------------

/// A stored demo request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoRequest {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub message: String,
    pub created_at: IsoTimestamp,
}

/// A stored contact-form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: IsoTimestamp,
}

// ---------------------------------------------------------------------------
// Create inputs
// ---------------------------------------------------------------------------

/// Client-supplied fields of a demo request.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct DemoRequestCreate {
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub name: String,
    #[validate(length(max = MAX_EMAIL_LENGTH))]
    pub email: String,
    #[validate(length(max = MAX_COMPANY_LENGTH))]
    pub company: String,
    #[validate(length(max = MAX_ROLE_LENGTH))]
    pub role: String,
    #[validate(length(max = MAX_MESSAGE_LENGTH))]
    pub message: String,
}

/// Client-supplied fields of a contact message.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactMessageCreate {
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub name: String,
    #[validate(length(max = MAX_EMAIL_LENGTH))]
    pub email: String,
    #[validate(length(max = MAX_SUBJECT_LENGTH))]
    pub subject: String,
    #[validate(length(max = MAX_MESSAGE_LENGTH))]
    pub message: String,
}

impl DemoRequestCreate {
    /// Extract and validate a demo request from an untrusted payload.
    pub fn from_payload(payload: &Value) -> Result<Self, CoreError> {
        let mut fields = PayloadFields::new(payload)?;
        let input = Self {
            name: fields.required("name"),
            email: fields.required("email"),
            company: fields.required("company"),
            role: fields.optional("role"),
            message: fields.optional("message"),
        };
        fields.finish(&input, DEMO_REQUEST_FIELDS)?;
        Ok(input)
    }
}

impl ContactMessageCreate {
    /// Extract and validate a contact message from an untrusted payload.
    pub fn from_payload(payload: &Value) -> Result<Self, CoreError> {
        let mut fields = PayloadFields::new(payload)?;
        let input = Self {
            name: fields.required("name"),
            email: fields.required("email"),
            subject: fields.required("subject"),
            message: fields.required("message"),
        };
        fields.finish(&input, CONTACT_MESSAGE_FIELDS)?;
        Ok(input)
    }
}

impl DemoRequest {
    /// Stamp validated input with a fresh id and creation time.
    pub fn stamp(input: DemoRequestCreate) -> Self {
        Self {
            id: new_unique_id(),
            name: input.name,
            email: input.email,
            company: input.company,
            role: input.role,
            message: input.message,
            created_at: now_utc_iso(),
        }
    }

    /// Validate a payload and produce the canonical record in one step.
    pub fn from_payload(payload: &Value) -> Result<Self, CoreError> {
        DemoRequestCreate::from_payload(payload).map(Self::stamp)
    }
}

impl ContactMessage {
    /// Stamp validated input with a fresh id and creation time.
    pub fn stamp(input: ContactMessageCreate) -> Self {
        Self {
            id: new_unique_id(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            created_at: now_utc_iso(),
        }
    }

    /// Validate a payload and produce the canonical record in one step.
    pub fn from_payload(payload: &Value) -> Result<Self, CoreError> {
        ContactMessageCreate::from_payload(payload).map(Self::stamp)
    }
}

// ---------------------------------------------------------------------------
// Allow-list extraction
// ---------------------------------------------------------------------------

/// Reads named string fields out of a JSON object, collecting failures.
///
/// Failed fields yield an empty placeholder so the caller can keep building
/// its input struct; [`PayloadFields::finish`] reports them.
struct PayloadFields<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> PayloadFields<'a> {
    fn new(payload: &'a Value) -> Result<Self, CoreError> {
        let object = payload.as_object().ok_or_else(|| {
            CoreError::Validation("Request body must be a JSON object".to_string())
        })?;
        Ok(Self {
            object,
            errors: Vec::new(),
        })
    }

    fn required(&mut self, field: &str) -> String {
        match self.object.get(field) {
            None | Some(Value::Null) => {
                self.errors.push(FieldError::new(field, FieldErrorKind::Missing));
                String::new()
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.errors.push(FieldError::new(field, FieldErrorKind::Blank));
                String::new()
            }
            Some(Value::String(s)) => self.storable(field, s),
            Some(_) => {
                self.errors
                    .push(FieldError::new(field, FieldErrorKind::TypeMismatch));
                String::new()
            }
        }
    }

    fn optional(&mut self, field: &str) -> String {
        match self.object.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => self.storable(field, s),
            Some(_) => {
                self.errors
                    .push(FieldError::new(field, FieldErrorKind::TypeMismatch));
                String::new()
            }
        }
    }

    /// Postgres `TEXT` cannot hold NUL, so it is rejected here rather than
    /// surfacing later as a storage failure.
    fn storable(&mut self, field: &str, value: &str) -> String {
        if value.contains('\0') {
            self.errors
                .push(FieldError::new(field, FieldErrorKind::InvalidCharacter));
            String::new()
        } else {
            value.to_string()
        }
    }

    /// Merge extraction failures with length checks and sort them by
    /// declaration order.
    fn finish<T: Validate>(mut self, input: &T, order: &[&str]) -> Result<(), CoreError> {
        if let Err(errors) = input.validate() {
            for field in errors.field_errors().keys() {
                self.errors
                    .push(FieldError::new(field.to_string(), FieldErrorKind::TooLong));
            }
        }

        if self.errors.is_empty() {
            return Ok(());
        }

        self.errors.sort_by_key(|e| {
            order
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(order.len())
        });
        Err(CoreError::InvalidFields(self.errors))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
