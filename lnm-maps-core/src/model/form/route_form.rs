use serde::{Deserialize, Serialize};

use super::{validate_field, FieldRule, FormFieldName, ValidationError};

/// a single text input and its current validation error
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FormField {
    pub value: String,
    pub error: Option<ValidationError>,
}

/// the rule applied to each input of the route form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub source: FieldRule,
    pub destination: FieldRule,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self {
            source: FieldRule::string(FormFieldName::Source.label()),
            destination: FieldRule::string(FormFieldName::Destination.label()),
        }
    }
}

impl FormSchema {
    pub fn rule(&self, field: FormFieldName) -> &FieldRule {
        match field {
            FormFieldName::Source => &self.source,
            FormFieldName::Destination => &self.destination,
        }
    }
}

/// source/destination form state. editing a field re-validates only that
/// field; a submit re-validates everything. errors never block typing.
#[derive(Debug, Clone, Default)]
pub struct RouteForm {
    schema: FormSchema,
    source: FormField,
    destination: FormField,
}

impl RouteForm {
    pub fn new(schema: FormSchema) -> RouteForm {
        RouteForm {
            schema,
            source: FormField::default(),
            destination: FormField::default(),
        }
    }

    pub fn field(&self, name: FormFieldName) -> &FormField {
        match name {
            FormFieldName::Source => &self.source,
            FormFieldName::Destination => &self.destination,
        }
    }

    fn field_mut(&mut self, name: FormFieldName) -> &mut FormField {
        match name {
            FormFieldName::Source => &mut self.source,
            FormFieldName::Destination => &mut self.destination,
        }
    }

    pub fn value(&self, name: FormFieldName) -> &str {
        &self.field(name).value
    }

    /// stores new input for a field and refreshes that field's error.
    pub fn set_value(&mut self, name: FormFieldName, value: String) {
        let error = validate_field(self.schema.rule(name), &value).err();
        let field = self.field_mut(name);
        field.value = value;
        field.error = error;
    }

    /// validates every field, replacing all stored errors.
    ///
    /// # Returns
    ///
    /// * true if the form may be submitted
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for name in FormFieldName::ALL {
            let error = validate_field(self.schema.rule(name), self.value(name)).err();
            valid &= error.is_none();
            self.field_mut(name).error = error;
        }
        valid
    }

    /// whether a submit would pass validation, without touching stored errors
    pub fn is_valid(&self) -> bool {
        FormFieldName::ALL
            .iter()
            .all(|name| validate_field(self.schema.rule(*name), self.value(*name)).is_ok())
    }

    pub fn errors(&self) -> Vec<(FormFieldName, &ValidationError)> {
        FormFieldName::ALL
            .iter()
            .filter_map(|name| self.field(*name).error.as_ref().map(|e| (*name, e)))
            .collect()
    }
}
