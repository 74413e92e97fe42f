//! Inquiry forms: validation and submission.
//!
//! A submission either never reaches the store (invalid form), lands as
//! exactly one inserted row, or fails and hands the visitor's input back.
//! Duplicate submissions are not deduplicated.

use std::sync::Arc;
use std::time::Duration;

use pure_angan_core::{Email, InquiryType, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::supabase::types::NewInquiry;
use crate::supabase::{DataStore, Table};

/// Confirmation delay for the general contact form.
const GENERAL_DISMISS_AFTER: Duration = Duration::from_secs(5);
/// Confirmation delay for the product, white-label and export forms.
const INLINE_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Raw form body, exactly as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    pub message: String,
}

/// Every rejected field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// The message for `field`, if it was rejected.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl InquiryForm {
    /// Check the form for `inquiry_type` and build the row to insert.
    ///
    /// Strings are trimmed. Company, contact person, phone and message are
    /// required; the email must parse; export needs a country and product
    /// inquiries a product reference.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in form order.
    pub fn validate(&self, inquiry_type: InquiryType) -> Result<NewInquiry, FieldErrors> {
        let mut errors = FieldErrors::default();

        let company_name = required(&mut errors, "company_name", &self.company_name, "Company name");
        let contact_person = required(
            &mut errors,
            "contact_person",
            &self.contact_person,
            "Contact person",
        );
        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push("email", capitalize(&e.to_string()));
                None
            }
        };
        let phone = required(&mut errors, "phone", &self.phone, "Phone number");

        let country = optional(self.country.as_deref());
        if inquiry_type.requires_country() && country.is_none() {
            errors.push("country", "Country is required");
        }

        let message = required(&mut errors, "message", &self.message, "Message");

        let product_id = if inquiry_type.requires_product() {
            match optional(self.product_id.as_deref()).map(|raw| raw.parse::<ProductId>()) {
                Some(Ok(id)) => Some(id),
                Some(Err(_)) => {
                    errors.push("product_id", "Product reference is invalid");
                    None
                }
                None => {
                    errors.push("product_id", "Product reference is required");
                    None
                }
            }
        } else {
            None
        };

        match (company_name, contact_person, email, phone, message) {
            (Some(company_name), Some(contact_person), Some(email), Some(phone), Some(message))
                if errors.is_empty() =>
            {
                Ok(NewInquiry {
                    inquiry_type,
                    product_id,
                    company_name,
                    contact_person,
                    email,
                    phone,
                    country,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    label: &str,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, format!("{label} is required"));
        None
    } else {
        Some(value.to_string())
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// The transient banner shown after a stored inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub inquiry_type: InquiryType,
    pub title: &'static str,
    pub message: &'static str,
    /// How long the banner stays before hiding itself.
    pub dismiss_after: Duration,
}

impl Confirmation {
    /// Banner for `inquiry_type`; `dismiss_override` replaces the per-type delay.
    #[must_use]
    pub const fn for_type(inquiry_type: InquiryType, dismiss_override: Option<Duration>) -> Self {
        let (title, message, default_delay) = match inquiry_type {
            InquiryType::General => (
                "Thank you for contacting us!",
                "We've received your message and will get back to you within 24 hours.",
                GENERAL_DISMISS_AFTER,
            ),
            InquiryType::Product => (
                "Thank You!",
                "Your inquiry has been submitted. We'll contact you within 24 hours.",
                INLINE_DISMISS_AFTER,
            ),
            InquiryType::WhiteLabel => (
                "Thank You!",
                "Your inquiry has been submitted. Our team will contact you within 24 hours.",
                INLINE_DISMISS_AFTER,
            ),
            InquiryType::Export => (
                "Thank You!",
                "Your export inquiry has been submitted. We'll contact you within 24 hours.",
                INLINE_DISMISS_AFTER,
            ),
        };

        let dismiss_after = match dismiss_override {
            Some(delay) => delay,
            None => default_delay,
        };

        Self {
            inquiry_type,
            title,
            message,
            dismiss_after,
        }
    }

    /// Delay in milliseconds, for the `data-dismiss-after` attribute.
    #[must_use]
    pub fn dismiss_after_ms(&self) -> u128 {
        self.dismiss_after.as_millis()
    }
}

/// What the page should render after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validation failed; nothing was written.
    Invalid {
        form: InquiryForm,
        errors: FieldErrors,
    },
    /// One row was inserted; render an empty form and the banner.
    Submitted { confirmation: Confirmation },
    /// The insert failed; keep the input and say so.
    Failed { form: InquiryForm },
}

/// Validates and stores inquiries.
#[derive(Clone)]
pub struct InquiryService {
    store: Arc<dyn DataStore>,
    dismiss_override: Option<Duration>,
}

impl InquiryService {
    #[must_use]
    pub fn new(store: Arc<dyn DataStore>, dismiss_override: Option<Duration>) -> Self {
        Self {
            store,
            dismiss_override,
        }
    }

    /// Validate `form` and insert it as an `inquiry_type` inquiry.
    #[instrument(skip(self, form), fields(inquiry_type = %inquiry_type))]
    pub async fn submit(&self, inquiry_type: InquiryType, form: InquiryForm) -> SubmissionOutcome {
        let inquiry = match form.validate(inquiry_type) {
            Ok(inquiry) => inquiry,
            Err(errors) => {
                tracing::info!(fields = ?errors.fields(), "Inquiry rejected by validation");
                return SubmissionOutcome::Invalid { form, errors };
            }
        };

        let record = match serde_json::to_value(&inquiry) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode inquiry");
                return SubmissionOutcome::Failed { form };
            }
        };

        match self.store.insert(Table::Inquiries, record).await {
            Ok(()) => {
                tracing::info!(email_domain = %inquiry.email.domain(), "Inquiry stored");
                add_breadcrumb(
                    "inquiry",
                    "Inquiry submitted",
                    Some(&[("inquiry_type", inquiry_type.as_str())]),
                );
                SubmissionOutcome::Submitted {
                    confirmation: Confirmation::for_type(inquiry_type, self.dismiss_override),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store inquiry");
                SubmissionOutcome::Failed { form }
            }
        }
    }
}
