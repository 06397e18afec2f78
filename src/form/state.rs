use super::schema::{FIELD_COUNT, FIELDS, FieldDescriptor, field_index};

/// Errors raised when editing the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown form field '{0}'")]
    UnknownField(String),
}

/// Raw user input per field, kept in wire order.
///
/// Values are stored verbatim; parsing happens only when a submission vector
/// is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    values: [String; FIELD_COUNT],
}

impl FormState {
    /// Form populated with every descriptor's default value.
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|index| FIELDS[index].default_value.to_string()),
        }
    }

    /// Replace the value of `name`, leaving every other field untouched.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let index = field_index(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Iterate descriptors and their current values in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &str)> + '_ {
        FIELDS
            .iter()
            .zip(self.values.iter())
            .map(|(descriptor, value)| (descriptor, value.as_str()))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(form: &'a FormState, name: &str) -> Option<&'a str> {
        form.iter()
            .find(|(descriptor, _)| descriptor.name == name)
            .map(|(_, value)| value)
    }

    #[test]
    fn starts_with_descriptor_defaults() {
        let form = FormState::new();
        assert_eq!(value_of(&form, "age"), Some(""));
        assert_eq!(value_of(&form, "sex"), Some("1"));
        assert_eq!(value_of(&form, "cp"), Some("0"));
        assert_eq!(value_of(&form, "thal"), Some("1"));
        assert_eq!(form.iter().count(), FIELD_COUNT);
    }

    #[test]
    fn set_field_changes_only_the_named_field() {
        for descriptor in FIELDS.iter() {
            let before = FormState::new();
            let mut after = before.clone();
            after.set_field(descriptor.name, " 42x ").unwrap();
            for ((field, old), (_, new)) in before.iter().zip(after.iter()) {
                if field.name == descriptor.name {
                    assert_eq!(new, " 42x ");
                } else {
                    assert_eq!(old, new, "{} changed while editing {}", field.name, descriptor.name);
                }
            }
        }
    }

    #[test]
    fn set_field_rejects_unknown_names() {
        let mut form = FormState::new();
        let err = form.set_field("weight", "80").unwrap_err();
        assert_eq!(err, FormError::UnknownField("weight".to_string()));
        assert_eq!(form, FormState::new());
        assert_eq!(value_of(&form, "weight"), None);
    }
}
