/// The free-text fields of the customer registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Birthday,
    Email,
    Phone,
    Address,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Birthday,
        Field::Email,
        Field::Phone,
        Field::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Customer Name",
            Field::Birthday => "Birthday",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Address => "Address",
        }
    }

    /// Prompt text shown in the field while it holds no value
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Customer Name (Required)",
            Field::Birthday => "Birthday (YYYY-MM-DD)",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Address => "Full Address",
        }
    }
}

/// Field values as handed over by the form boundary.
///
/// `None` means the user never provided a value for the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCustomerForm {
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_method: String,
}

impl Default for RawCustomerForm {
    fn default() -> Self {
        RawCustomerForm {
            name: None,
            birthday: None,
            email: None,
            phone: None,
            address: None,
            contact_method: formdesk_types::ContactMethod::default().to_string(),
        }
    }
}

impl RawCustomerForm {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Birthday => self.birthday.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Address => self.address.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Birthday => &mut self.birthday,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
        };
        *slot = value;
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    pub fn with_contact_method(mut self, contact_method: impl Into<String>) -> Self {
        self.contact_method = contact_method.into();
        self
    }

    /// Trimmed value of `field`, empty when untouched or still showing its
    /// placeholder
    pub fn normalized(&self, field: Field) -> String {
        normalize_field(self.get(field), field.placeholder())
    }
}

pub fn normalize_field(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if v != placeholder => v.to_string(),
        _ => String::new(),
    }
}
