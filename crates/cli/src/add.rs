use formdesk_core::{Field, FormController, RawCustomerForm, RecordStore, SubmitOutcome};

use crate::render::{outcome_message, print_outcome};

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct AddCommand {
    /// Customer name (required)
    #[arg(long)]
    pub name: Option<String>,

    /// Birthday, expected as YYYY-MM-DD
    #[arg(long)]
    pub birthday: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Preferred contact method: Email, Phone or Mail
    #[arg(long = "contact", default_value = "Email")]
    pub contact_method: String,
}

impl AddCommand {
    pub fn to_raw_form(&self) -> RawCustomerForm {
        let mut raw = RawCustomerForm::default().with_contact_method(self.contact_method.clone());
        raw.set(Field::Name, self.name.clone());
        raw.set(Field::Birthday, self.birthday.clone());
        raw.set(Field::Email, self.email.clone());
        raw.set(Field::Phone, self.phone.clone());
        raw.set(Field::Address, self.address.clone());
        raw
    }

    pub fn execute(&self, store: &mut RecordStore) -> Result<(), String> {
        let db_path = store.path().to_string();
        let outcome = FormController::new(store).submit(&self.to_raw_form());
        match outcome {
            SubmitOutcome::Success(_) => {
                print_outcome(&outcome, &db_path);
                Ok(())
            }
            _ => Err(outcome_message(&outcome, &db_path)),
        }
    }
}
