mod field_name;
mod field_rule;
mod route_form;

pub use field_name::FormFieldName;
pub use field_rule::{validate_field, FieldRule, ValidationError};
pub use route_form::{FormField, FormSchema, RouteForm};
