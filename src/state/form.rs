//! Form editing state types.
//!
//! This module holds the address form: the draft being typed and the control
//! that currently has focus.

use crate::address::{AddressDraft, AddressField};

/// Specifying the focused control of the address form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormFocus {
    Field(AddressField),
    Submit,
}

/// Holds the values entered on the address form.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AddressForm {
    draft: AddressDraft,
    focus: FormFocus,
}

impl Default for AddressForm {
    fn default() -> Self {
        AddressForm {
            draft: AddressDraft::default(),
            focus: FormFocus::Field(AddressField::ALL[0]),
        }
    }
}

impl AddressForm {
    pub fn draft(&self) -> &AddressDraft {
        &self.draft
    }

    pub fn value(&self, field: AddressField) -> &str {
        self.draft.get(field)
    }

    /// Replace the value of a field unconditionally.
    ///
    #[cfg(test)]
    pub fn set_value(&mut self, field: AddressField, value: impl Into<String>) -> &mut Self {
        self.draft.set(field, value);
        self
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) -> &mut Self {
        self.focus = focus;
        self
    }

    /// Field under the cursor, if the focus is not on the submit button.
    ///
    pub fn focused_field(&self) -> Option<AddressField> {
        match self.focus {
            FormFocus::Field(field) => Some(field),
            FormFocus::Submit => None,
        }
    }

    /// Append a character to the focused field.
    ///
    pub fn push_char(&mut self, c: char) -> &mut Self {
        if let Some(field) = self.focused_field() {
            self.draft.get_mut(field).push(c);
        }
        self
    }

    /// Remove the last character of the focused field.
    ///
    pub fn pop_char(&mut self) -> &mut Self {
        if let Some(field) = self.focused_field() {
            self.draft.get_mut(field).pop();
        }
        self
    }

    /// Move focus to the next control, wrapping after the submit button.
    ///
    pub fn next_focus(&mut self) -> &mut Self {
        let last = AddressField::ALL.len() - 1;
        self.focus = match self.focus {
            FormFocus::Field(field) if field.index() < last => {
                FormFocus::Field(AddressField::ALL[field.index() + 1])
            }
            FormFocus::Field(_) => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Field(AddressField::ALL[0]),
        };
        self
    }

    /// Move focus to the previous control, wrapping before the first field.
    ///
    pub fn previous_focus(&mut self) -> &mut Self {
        let last = AddressField::ALL.len() - 1;
        self.focus = match self.focus {
            FormFocus::Field(field) if field.index() > 0 => {
                FormFocus::Field(AddressField::ALL[field.index() - 1])
            }
            FormFocus::Field(_) => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Field(AddressField::ALL[last]),
        };
        self
    }

    /// Clear every field and put the cursor back on the first one.
    ///
    pub fn reset(&mut self) -> &mut Self {
        *self = AddressForm::default();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_first_field() {
        let form = AddressForm::default();
        assert_eq!(form.focus(), FormFocus::Field(AddressField::Country));
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = AddressForm::default();
        form.set_focus(FormFocus::Field(AddressField::Name));
        for c in "Jane".chars() {
            form.push_char(c);
        }
        form.pop_char().push_char('y');
        assert_eq!(form.value(AddressField::Name), "Jany");
        assert_eq!(form.value(AddressField::Country), "");
    }

    #[test]
    fn test_typing_on_submit_is_ignored() {
        let mut form = AddressForm::default();
        form.set_focus(FormFocus::Submit).push_char('x').pop_char();
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_pop_char_on_empty_field() {
        let mut form = AddressForm::default();
        form.pop_char();
        assert_eq!(form.value(AddressField::Country), "");
    }

    #[test]
    fn test_focus_cycles_through_fields_and_submit() {
        let mut form = AddressForm::default();
        for field in AddressField::ALL.iter().skip(1) {
            form.next_focus();
            assert_eq!(form.focus(), FormFocus::Field(*field));
        }
        form.next_focus();
        assert_eq!(form.focus(), FormFocus::Submit);
        form.next_focus();
        assert_eq!(form.focus(), FormFocus::Field(AddressField::Country));

        form.previous_focus();
        assert_eq!(form.focus(), FormFocus::Submit);
        form.previous_focus();
        assert_eq!(form.focus(), FormFocus::Field(AddressField::PostalCode));
    }

    #[test]
    fn test_set_value_and_reset() {
        let mut form = AddressForm::default();
        form.set_value(AddressField::Street, "Baker Street")
            .set_focus(FormFocus::Submit);
        assert_eq!(form.value(AddressField::Street), "Baker Street");

        form.reset();
        assert_eq!(form, AddressForm::default());
    }
}
