//! Documentation builders for pagination query parameters.

use utoipa::openapi::path::{Parameter, ParameterBuilder, ParameterIn};
use utoipa::openapi::schema::{ObjectBuilder, SchemaType, Type};
use utoipa::openapi::Required;

/// Builder for a documented integer query parameter.
///
/// Every stock strategy documents its inputs through this builder so the
/// parameter entries stay uniform: integer schema, a title derived from the
/// parameter name, and only the bounds the strategy actually enforces.
/// Custom strategies are expected to do the same.
#[derive(Debug, Clone)]
pub struct IntegerParam {
    name: String,
    description: Option<String>,
    required: bool,
    default: Option<u64>,
    minimum: Option<u64>,
    maximum: Option<u64>,
    exclusive_minimum: Option<u64>,
    exclusive_maximum: Option<u64>,
}

impl IntegerParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            required: false,
            default: None,
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
            exclusive_maximum: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the parameter as mandatory. Defaults to optional.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value the strategy falls back to when the parameter is absent.
    pub fn default_value(mut self, default: u64) -> Self {
        self.default = Some(default);
        self
    }

    pub fn minimum(mut self, minimum: u64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: u64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn exclusive_minimum(mut self, exclusive_minimum: u64) -> Self {
        self.exclusive_minimum = Some(exclusive_minimum);
        self
    }

    pub fn exclusive_maximum(mut self, exclusive_maximum: u64) -> Self {
        self.exclusive_maximum = Some(exclusive_maximum);
        self
    }

    pub fn build(self) -> Parameter {
        let schema = ObjectBuilder::new()
            .schema_type(SchemaType::Type(Type::Integer))
            .title(Some(title_case(&self.name)))
            .default(self.default.map(serde_json::Value::from))
            .minimum(self.minimum.map(|v| v as usize))
            .maximum(self.maximum.map(|v| v as usize))
            .exclusive_minimum(self.exclusive_minimum.map(|v| v as usize))
            .exclusive_maximum(self.exclusive_maximum.map(|v| v as usize));

        ParameterBuilder::new()
            .name(self.name)
            .parameter_in(ParameterIn::Query)
            .required(if self.required {
                Required::True
            } else {
                Required::False
            })
            .description(self.description)
            .schema(Some(schema))
            .build()
    }
}

/// `page_size` becomes `Page Size`, matching how the documented titles read
/// in Swagger UI.
fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("limit", "Limit")]
    #[case("page_size", "Page Size")]
    #[case("someparam", "Someparam")]
    #[case("a_b_c", "A B C")]
    fn titles_come_from_the_parameter_name(#[case] name: &str, #[case] title: &str) {
        assert_eq!(title, title_case(name));
    }

    #[test]
    fn optional_parameter_with_default_and_bound() {
        let parameter = IntegerParam::new("limit")
            .default_value(100)
            .exclusive_minimum(0)
            .build();
        let parameter = serde_json::to_value(&parameter).expect("parameter serializes");

        assert_eq!(Some("limit"), parameter["name"].as_str());
        assert_eq!(Some("query"), parameter["in"].as_str());
        assert_ne!(Some(true), parameter["required"].as_bool());
        assert_eq!(Some("integer"), parameter["schema"]["type"].as_str());
        assert_eq!(Some("Limit"), parameter["schema"]["title"].as_str());
        assert_eq!(Some(100.0), parameter["schema"]["default"].as_f64());
        assert_eq!(Some(0.0), parameter["schema"]["exclusiveMinimum"].as_f64());
        assert_eq!(json!(null), parameter["schema"]["minimum"]);
        assert_eq!(json!(null), parameter["schema"]["maximum"]);
        assert_eq!(json!(null), parameter["schema"]["exclusiveMaximum"]);
    }

    #[test]
    fn required_parameter_has_no_default() {
        let parameter = IntegerParam::new("skip").required().build();
        let parameter = serde_json::to_value(&parameter).expect("parameter serializes");

        assert_eq!(Some("skip"), parameter["name"].as_str());
        assert_eq!(Some(true), parameter["required"].as_bool());
        assert_eq!(Some("Skip"), parameter["schema"]["title"].as_str());
        assert_eq!(json!(null), parameter["schema"]["default"]);
    }
}
