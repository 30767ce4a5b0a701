//! Customer attribute schema for prediction requests.
//!
//! [`CustomerInput`] is the editable draft a form shell mutates one
//! field at a time and submits wholesale.  Every field is captured as
//! free text and transmitted as a JSON string -- including the numeric
//! ones.  The prediction endpoint coerces server-side, so no client-side
//! numeric conversion is performed here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer attribute draft, as captured from form inputs.
///
/// All ten fields are required to be non-empty at submission time; the
/// constraint is expressed through [`Validate`] (`length(min = 1)` per
/// field) and mirrored by [`missing_fields`](Self::missing_fields) for
/// shells that want to mark individual inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerInput {
    /// Opaque customer identifier.
    #[validate(length(min = 1))]
    pub customer_id: String,
    /// Age in years.
    #[validate(length(min = 1))]
    pub age: String,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub credit_score: String,
    /// Account balance.
    #[validate(length(min = 1))]
    pub balance: String,
    /// Relationship length in years.
    #[validate(length(min = 1))]
    pub tenure: String,
    /// Number of products held.
    #[validate(length(min = 1))]
    pub products_number: String,
    /// Holds a credit card, encoded `0`/`1`.
    #[validate(length(min = 1))]
    pub credit_card: String,
    /// Active member flag, encoded `0`/`1`.
    #[validate(length(min = 1))]
    pub active_member: String,
    #[validate(length(min = 1))]
    pub estimated_salary: String,
}

// ---------------------------------------------------------------------------
// Field schema
// ---------------------------------------------------------------------------

/// One field of the fixed [`CustomerInput`] schema.
///
/// Lets callers address draft fields by name (as a form shell does)
/// without stringly-typed access to the struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    CustomerId,
    Age,
    Gender,
    CreditScore,
    Balance,
    Tenure,
    ProductsNumber,
    CreditCard,
    ActiveMember,
    EstimatedSalary,
}

/// A field name that is not part of the [`CustomerInput`] schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown customer field: {0}")]
pub struct UnknownFieldError(pub String);

impl CustomerField {
    /// Every schema field, in form display order.
    pub const ALL: [CustomerField; 10] = [
        CustomerField::CustomerId,
        CustomerField::Age,
        CustomerField::Gender,
        CustomerField::CreditScore,
        CustomerField::Balance,
        CustomerField::Tenure,
        CustomerField::ProductsNumber,
        CustomerField::CreditCard,
        CustomerField::ActiveMember,
        CustomerField::EstimatedSalary,
    ];

    /// Wire name of the field, matching the JSON key sent to the service.
    pub fn name(self) -> &'static str {
        match self {
            CustomerField::CustomerId => "customer_id",
            CustomerField::Age => "age",
            CustomerField::Gender => "gender",
            CustomerField::CreditScore => "credit_score",
            CustomerField::Balance => "balance",
            CustomerField::Tenure => "tenure",
            CustomerField::ProductsNumber => "products_number",
            CustomerField::CreditCard => "credit_card",
            CustomerField::ActiveMember => "active_member",
            CustomerField::EstimatedSalary => "estimated_salary",
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CustomerField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Draft access
// ---------------------------------------------------------------------------

impl CustomerInput {
    /// Current value of one draft field.
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::CustomerId => &self.customer_id,
            CustomerField::Age => &self.age,
            CustomerField::Gender => &self.gender,
            CustomerField::CreditScore => &self.credit_score,
            CustomerField::Balance => &self.balance,
            CustomerField::Tenure => &self.tenure,
            CustomerField::ProductsNumber => &self.products_number,
            CustomerField::CreditCard => &self.credit_card,
            CustomerField::ActiveMember => &self.active_member,
            CustomerField::EstimatedSalary => &self.estimated_salary,
        }
    }

    /// Overwrite one draft field, leaving every other field untouched.
    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        let slot = match field {
            CustomerField::CustomerId => &mut self.customer_id,
            CustomerField::Age => &mut self.age,
            CustomerField::Gender => &mut self.gender,
            CustomerField::CreditScore => &mut self.credit_score,
            CustomerField::Balance => &mut self.balance,
            CustomerField::Tenure => &mut self.tenure,
            CustomerField::ProductsNumber => &mut self.products_number,
            CustomerField::CreditCard => &mut self.credit_card,
            CustomerField::ActiveMember => &mut self.active_member,
            CustomerField::EstimatedSalary => &mut self.estimated_salary,
        };
        *slot = value.into();
    }

    /// Fields that are still empty, in display order.
    pub fn missing_fields(&self) -> Vec<CustomerField> {
        CustomerField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Whether every required field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn filled() -> CustomerInput {
        let mut input = CustomerInput::default();
        input.set(CustomerField::CustomerId, "C1");
        input.set(CustomerField::Age, "34");
        input.set(CustomerField::Gender, "F");
        input.set(CustomerField::CreditScore, "650");
        input.set(CustomerField::Balance, "1000");
        input.set(CustomerField::Tenure, "3");
        input.set(CustomerField::ProductsNumber, "2");
        input.set(CustomerField::CreditCard, "1");
        input.set(CustomerField::ActiveMember, "1");
        input.set(CustomerField::EstimatedSalary, "50000");
        input
    }

    // -- field update isolation --

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut input = CustomerInput::default();
        input.set(CustomerField::Age, "34");
        input.set(CustomerField::Gender, "F");

        assert_eq!(input.age, "34");
        assert_eq!(input.gender, "F");
        for field in CustomerField::ALL {
            if field != CustomerField::Age && field != CustomerField::Gender {
                assert_eq!(input.get(field), "", "{field} should be untouched");
            }
        }
    }

    #[test]
    fn set_keeps_only_the_most_recent_value() {
        let mut input = CustomerInput::default();
        input.set(CustomerField::Balance, "100");
        input.set(CustomerField::Balance, "2500");
        assert_eq!(input.balance, "2500");
    }

    // -- required-field constraint --

    #[test]
    fn default_draft_is_entirely_missing() {
        let input = CustomerInput::default();
        assert_eq!(input.missing_fields().len(), 10);
        assert!(!input.is_complete());
        assert!(input.validate().is_err());
    }

    #[test]
    fn filled_draft_is_complete_and_valid() {
        let input = filled();
        assert!(input.missing_fields().is_empty());
        assert!(input.is_complete());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn missing_fields_reports_cleared_field() {
        let mut input = filled();
        input.set(CustomerField::Tenure, "");
        assert_eq!(input.missing_fields(), vec![CustomerField::Tenure]);
        assert!(input.validate().is_err());
    }

    // -- field schema --

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in CustomerField::ALL {
            assert_eq!(field.name().parse::<CustomerField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "satisfaction_score".parse::<CustomerField>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown customer field: satisfaction_score"
        );
    }

    // -- wire encoding --

    /// The submitted body carries all ten fields as JSON strings, with
    /// the exact wire names -- numeric values are not coerced.
    #[test]
    fn serializes_every_field_as_a_json_string() {
        let json = serde_json::to_value(filled()).expect("serialization should succeed");

        for field in CustomerField::ALL {
            assert!(
                json[field.name()].is_string(),
                "{field} should serialize as a string"
            );
        }
        assert_eq!(json["customer_id"], "C1");
        assert_eq!(json["age"], "34");
        assert_eq!(json["credit_card"], "1");
        assert_eq!(json["estimated_salary"], "50000");
    }
}
