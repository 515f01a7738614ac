use indexmap::IndexMap;

use crate::console::Console;
use crate::error::DialogError;

/// Ordered field name → value map shown in confirmation and entry dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmableValues {
    values: IndexMap<String, String>,
}

impl ConfirmableValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value set with the given fields, all empty.
    pub fn with_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            values: fields
                .into_iter()
                .map(|field| (field.into(), String::new()))
                .collect(),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ask for every field of `values` in order, one line each, overwriting the
/// current values.
pub fn prompt_values(
    console: &mut Console<'_>,
    name: &str,
    values: &mut ConfirmableValues,
) -> Result<(), DialogError> {
    console.line(format_args!("({name}) Please enter some information:"))?;
    for (field, value) in &mut values.values {
        console.prompt(format_args!("{field}: "))?;
        *value = console.read_line()?;
    }
    console.line("done!")
}
