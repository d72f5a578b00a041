use diesel::prelude::*;
use formdesk_types::{ContactMethod, CustomerRecord, NewCustomer};
use tracing::{debug, warn};

use crate::db::schema::customers;

#[derive(Debug, Queryable, Identifiable)]
#[diesel(table_name = customers)]
pub struct CustomerModel {
    pub id: i64,
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_method: Option<String>,
}

impl From<CustomerModel> for CustomerRecord {
    fn from(model: CustomerModel) -> Self {
        // Rows written by other tools may carry NULLs or unknown methods
        let contact_method = match model.contact_method.as_deref() {
            None | Some("") => ContactMethod::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Customer {} has {}, falling back to Email", model.id, e);
                ContactMethod::default()
            }),
        };
        CustomerRecord {
            id: model.id,
            name: model.name,
            birthday: model.birthday.unwrap_or_default(),
            email: model.email.unwrap_or_default(),
            phone: model.phone.unwrap_or_default(),
            address: model.address.unwrap_or_default(),
            contact_method,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow<'a> {
    pub name: &'a str,
    pub birthday: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub contact_method: Option<&'a str>,
}

impl<'a> NewCustomerRow<'a> {
    /// Empty optional fields are written as empty strings, not NULL
    pub fn new(customer: &'a NewCustomer) -> NewCustomerRow<'a> {
        Self {
            name: &customer.name,
            birthday: Some(&customer.birthday),
            email: Some(&customer.email),
            phone: Some(&customer.phone),
            address: Some(&customer.address),
            contact_method: Some(customer.contact_method.as_str()),
        }
    }

    pub fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<i64> {
        debug!(
            "Inserting customer with name: {}, contact method: {:?}",
            self.name, self.contact_method
        );
        diesel::insert_into(customers::table)
            .values(self)
            .returning(customers::id)
            .get_result(conn)
    }
}

pub fn list_customers(conn: &mut SqliteConnection) -> QueryResult<Vec<CustomerModel>> {
    customers::table
        .order(customers::id.asc())
        .load::<CustomerModel>(conn)
}

pub fn count_customers(conn: &mut SqliteConnection) -> QueryResult<i64> {
    customers::table.count().get_result(conn)
}
