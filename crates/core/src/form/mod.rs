//! Customer registration form.
//!
//! [`FormController`] sits between the form boundary and the
//! [`RecordStore`]: it normalizes what the user typed, validates it and hands
//! the result to the store. [`CustomerForm`] is the boundary-side buffer that
//! holds the current field values and knows how to reset them.

use formdesk_types::CustomerRecord;
use tracing::debug;

use crate::db::RecordStore;

pub mod fields;
pub mod validation;

#[cfg(test)]
mod property_tests;

pub use fields::{Field, RawCustomerForm, normalize_field};
pub use validation::{ValidationError, validate, validate_email};

/// Result of a single form submission, as rendered by the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    ValidationError(ValidationError),
    Success(CustomerRecord),
    StorageFailure,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_))
    }

    /// Only a stored submission clears the form; failures keep the input
    /// around so the user can fix it and resubmit.
    pub fn should_reset(&self) -> bool {
        self.is_success()
    }
}

pub struct FormController<'a> {
    store: &'a mut RecordStore,
}

impl<'a> FormController<'a> {
    pub fn new(store: &'a mut RecordStore) -> Self {
        Self { store }
    }

    pub fn submit(&mut self, raw: &RawCustomerForm) -> SubmitOutcome {
        let customer = match validate(raw) {
            Ok(customer) => customer,
            Err(e) => {
                debug!("Rejected customer form: {}", e);
                return SubmitOutcome::ValidationError(e);
            }
        };

        match self.store.try_insert(&customer) {
            Ok(record) => SubmitOutcome::Success(record),
            Err(e) => {
                self.store.record_failure(&e);
                SubmitOutcome::StorageFailure
            }
        }
    }
}

/// Current contents of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    values: RawCustomerForm,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &RawCustomerForm {
        &self.values
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(field)
    }

    /// Blank input leaves the field untouched
    pub fn set(&mut self, field: Field, value: &str) {
        let value = (!value.trim().is_empty()).then(|| value.to_string());
        self.values.set(field, value);
    }

    pub fn contact_method(&self) -> &str {
        &self.values.contact_method
    }

    pub fn set_contact_method(&mut self, contact_method: &str) {
        self.values.contact_method = contact_method.to_string();
    }

    /// Back to placeholders and the default contact method
    pub fn reset(&mut self) {
        self.values = RawCustomerForm::default();
    }

    /// Reset the form when `outcome` asks for it. Returns whether it did.
    pub fn apply(&mut self, outcome: &SubmitOutcome) -> bool {
        if outcome.should_reset() {
            self.reset();
        }
        outcome.should_reset()
    }
}
