pub mod db;
pub mod feedback;
pub mod form;

pub use db::{DbError, DbResult, RecordStore};
pub use feedback::{Feedback, FeedbackError, RawFeedback};
pub use form::{CustomerForm, Field, FormController, RawCustomerForm, SubmitOutcome};
