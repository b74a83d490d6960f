//! Declarative field validation.
//!
//! Each validated field is described by a [`FieldRules`] value listing its
//! constraints. The engine runs the rules of every field and accumulates all
//! violations; within one field it stops at the first failing rule, so a
//! blank field reports only that it is blank.

use risky_core::{FieldError, ValidationErrors};

use crate::types::{CreateRiskInput, RiskState};

// ============================================================================
// Rules
// ============================================================================

/// Message for a missing value.
pub const MSG_BLANK: &str = "cannot be blank";

/// Message for a value outside its allowed set.
pub const MSG_INVALID_VALUE: &str = "must be a valid value";

/// Maximum title length, in characters.
pub const TITLE_MAX_LENGTH: usize = 128;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 1024;

/// A single constraint on a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The value must not be empty.
    Required,
    /// The value must have at most this many characters.
    MaxLength(usize),
    /// A non-empty value must be one of these strings.
    OneOf(&'static [&'static str]),
}

impl FieldRule {
    /// Returns the violation message when `value` breaks this rule.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::Required => value.is_empty().then(|| MSG_BLANK.to_string()),
            Self::MaxLength(max) => (value.chars().count() > *max)
                .then(|| format!("the length must be no more than {max}")),
            Self::OneOf(allowed) => (!value.is_empty() && !allowed.contains(&value))
                .then(|| MSG_INVALID_VALUE.to_string()),
        }
    }
}

/// The constraints attached to one named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    /// Field name reported in violations.
    pub field: &'static str,
    /// Rules, evaluated in order.
    pub rules: &'static [FieldRule],
}

impl FieldRules {
    /// The first violation of `value` against these rules.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<FieldError> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(value))
            .map(|message| FieldError::new(self.field, message))
    }
}

/// Rules for [`CreateRiskInput::title`].
pub const TITLE_RULES: FieldRules = FieldRules {
    field: "title",
    rules: &[FieldRule::Required, FieldRule::MaxLength(TITLE_MAX_LENGTH)],
};

/// Rules for [`CreateRiskInput::description`].
pub const DESCRIPTION_RULES: FieldRules = FieldRules {
    field: "description",
    rules: &[
        FieldRule::Required,
        FieldRule::MaxLength(DESCRIPTION_MAX_LENGTH),
    ],
};

/// Rules for [`CreateRiskInput::state`].
pub const STATE_RULES: FieldRules = FieldRules {
    field: "state",
    rules: &[FieldRule::Required, FieldRule::OneOf(&RiskState::NAMES)],
};

// ============================================================================
// Engine
// ============================================================================

/// Run every `(rules, value)` pair and collect all violations.
pub fn validate_fields<'a, I>(fields: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = (&'a FieldRules, &'a str)>,
{
    fields
        .into_iter()
        .filter_map(|(rules, value)| rules.check(value))
        .collect::<ValidationErrors>()
        .into_result()
}

/// Types that can check themselves before reaching storage.
pub trait Validate {
    /// Validate `self`, reporting every violated field.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for CreateRiskInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields([
            (&TITLE_RULES, self.title.as_str()),
            (&DESCRIPTION_RULES, self.description.as_str()),
            (&STATE_RULES, self.state.as_str()),
        ])
    }
}
