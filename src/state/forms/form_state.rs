//! Admission form state and its submit/reset operations

use super::error::SubmitError;
use super::field::{Field, FieldFlags};
use super::validation;
use serde::Serialize;

/// Current values and error flags for every admission field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; Field::COUNT],
    errors: FieldFlags,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldFlags {
        &self.errors
    }

    /// Store a new raw value and re-validate that field only
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let has_error = validation::has_error(field, &value);
        tracing::debug!(field = %field, has_error, "field updated");
        self.values[field.index()] = value;
        self.errors.set(field, has_error);
    }

    /// Name-addressed entry point for field edits, for callers holding a
    /// field name rather than a [`Field`] (`"dob"` and `"dateOfBirth"` both
    /// work). Unknown names are ignored. The key handler already knows the
    /// focused [`Field`] and calls [`update_field`](Self::update_field).
    #[allow(dead_code)]
    pub fn update_field_by_name(&mut self, name: &str, value: impl Into<String>) {
        match name.parse::<Field>() {
            Ok(field) => self.update_field(field, value),
            Err(err) => tracing::debug!("ignoring update: {err}"),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| !v.is_empty())
    }

    /// Check the form and capture its values.
    ///
    /// Emptiness is checked before error flags, so an incomplete form is
    /// reported as such even when a filled field is also invalid.
    pub fn submit(&self) -> Result<AdmissionSnapshot, SubmitError> {
        if !self.is_complete() {
            tracing::info!("submission refused: form incomplete");
            return Err(SubmitError::Incomplete);
        }
        if self.errors.any() {
            let failing: Vec<&str> = self
                .errors
                .iter()
                .filter(|(_, flag)| *flag)
                .map(|(field, _)| field.as_str())
                .collect();
            tracing::info!(?failing, "submission refused: validation errors");
            return Err(SubmitError::Invalid);
        }
        Ok(AdmissionSnapshot::capture(self))
    }

    /// Return every value and flag to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::info!("form reset");
    }
}

/// Copy of all field values taken at a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionSnapshot {
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub gender: String,
    pub dob: String,
    pub course: String,
}

impl AdmissionSnapshot {
    fn capture(form: &FormState) -> Self {
        let get = |field| form.value(field).to_string();
        Self {
            name: get(Field::Name),
            address: get(Field::Address),
            mobile: get(Field::Mobile),
            email: get(Field::Email),
            gender: get(Field::Gender),
            dob: get(Field::DateOfBirth),
            course: get(Field::Course),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Gender => &self.gender,
            Field::DateOfBirth => &self.dob,
            Field::Course => &self.course,
        }
    }

    /// Success message listing every submitted value
    pub fn summary(&self) -> String {
        let mut text = String::from("Data stored successfully!");
        for field in Field::ALL {
            text.push('\n');
            text.push_str(field.summary_label());
            text.push_str(": ");
            text.push_str(self.value(field));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        let mut form = FormState::new();
        form.update_field(Field::Name, "Asha");
        form.update_field(Field::Address, "12 Lake Road, Kochi");
        form.update_field(Field::Mobile, "9876543210");
        form.update_field(Field::Email, "asha@example.in");
        form.update_field(Field::Gender, "Female");
        form.update_field(Field::DateOfBirth, "2008-05-14");
        form.update_field(Field::Course, "Computer Science");
        form
    }

    mod update_field {
        use super::*;

        #[test]
        fn test_initial_state_is_empty_and_error_free() {
            let form = FormState::new();
            for field in Field::ALL {
                assert_eq!(form.value(field), "");
                assert!(!form.has_error(field));
            }
        }

        #[test]
        fn test_touches_only_the_edited_field() {
            for field in Field::ALL {
                let mut form = FormState::new();
                form.update_field(field, "x");
                for other in Field::ALL.into_iter().filter(|f| *f != field) {
                    assert_eq!(form.value(other), "");
                    assert!(!form.has_error(other), "{other} flag changed");
                }
                assert_eq!(form.value(field), "x");
            }
        }

        #[test]
        fn test_leaves_other_error_flags_alone() {
            let mut form = FormState::new();
            form.update_field(Field::Mobile, "123");
            form.update_field(Field::Email, "a@b.co");
            assert!(form.has_error(Field::Mobile));
            assert!(!form.has_error(Field::Email));
        }

        #[test]
        fn test_error_clears_when_value_fixed() {
            let mut form = FormState::new();
            form.update_field(Field::Name, "John3");
            assert!(form.has_error(Field::Name));
            form.update_field(Field::Name, "John");
            assert!(!form.has_error(Field::Name));
        }

        #[test]
        fn test_clearing_a_selection_sets_error() {
            let mut form = FormState::new();
            form.update_field(Field::Gender, "Male");
            form.update_field(Field::Gender, "");
            assert!(form.has_error(Field::Gender));
        }

        #[test]
        fn test_by_name_dispatches_to_field() {
            let mut form = FormState::new();
            form.update_field_by_name("dateOfBirth", "2007-01-01");
            assert_eq!(form.value(Field::DateOfBirth), "2007-01-01");
        }

        #[test]
        fn test_unknown_name_is_noop() {
            let mut form = valid_form();
            let before = form.clone();
            form.update_field_by_name("nickname", "Ash");
            assert_eq!(form, before);
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_valid_form_yields_snapshot() {
            let form = valid_form();
            let snapshot = form.submit().unwrap();
            for field in Field::ALL {
                assert_eq!(snapshot.value(field), form.value(field));
            }
        }

        #[test]
        fn test_any_empty_field_is_incomplete() {
            for field in Field::ALL {
                let mut form = valid_form();
                form.update_field(field, "");
                assert_eq!(form.submit(), Err(SubmitError::Incomplete));
            }
        }

        #[test]
        fn test_incomplete_checked_before_errors() {
            let mut form = FormState::new();
            form.update_field(Field::Mobile, "12");
            assert_eq!(form.submit(), Err(SubmitError::Incomplete));
        }

        #[test]
        fn test_complete_with_error_is_invalid() {
            let mut form = valid_form();
            form.update_field(Field::Email, "asha@example");
            assert_eq!(form.submit(), Err(SubmitError::Invalid));
        }

        #[test]
        fn test_submit_does_not_mutate() {
            let form = valid_form();
            let before = form.clone();
            let _ = form.submit();
            assert_eq!(form, before);
        }

        #[test]
        fn test_two_character_name_submits() {
            let mut form = valid_form();
            form.update_field(Field::Name, "Jo");
            assert!(form.submit().is_ok());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_returns_to_initial_state() {
            let mut form = valid_form();
            form.update_field(Field::Mobile, "12");
            form.reset();
            assert_eq!(form, FormState::new());
        }

        #[test]
        fn test_reset_on_fresh_form_is_identity() {
            let mut form = FormState::new();
            form.reset();
            assert_eq!(form, FormState::new());
        }
    }

    mod snapshot {
        use super::*;

        #[test]
        fn test_summary_lists_all_values() {
            let snapshot = valid_form().submit().unwrap();
            assert_eq!(
                snapshot.summary(),
                "Data stored successfully!\n\
                 Name: Asha\n\
                 Address: 12 Lake Road, Kochi\n\
                 Mobile: 9876543210\n\
                 Email: asha@example.in\n\
                 Gender: Female\n\
                 DOB: 2008-05-14\n\
                 Course: Computer Science"
            );
        }

        #[test]
        fn test_serializes_with_field_names() {
            let snapshot = valid_form().submit().unwrap();
            let json = serde_json::to_value(&snapshot).unwrap();
            assert_eq!(json["dob"], "2008-05-14");
            assert_eq!(json["course"], "Computer Science");
        }
    }
}
