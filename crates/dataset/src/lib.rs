//! Input data sets: parsing, domain validation and feasibility.
//!
//! A data set is a list of request lines. Before it can be used to judge a
//! candidate it must parse, satisfy the domain rules checked by
//! [`RequestSetValidator`], and be servable within the estimator's ceiling.
//! [`InputChecker`] runs all three and stops at the first failure.

mod checker;
mod error;
mod validator;

pub use checker::{InputChecker, RequestSet};
pub use error::{InputError, ValidationError};
pub use validator::{RequestSetValidator, ValidatorConfig};
