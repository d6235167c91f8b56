//! Schema-less extra fields merged into typed request payloads

use serde::{ser::Error as _, Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single field not covered by a request type's named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,
    pub value: Value,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Build a parameter from any serializable value.
    pub fn from_serializable<T: Serialize>(
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            key: key.into(),
            value: serde_json::to_value(value)?,
        })
    }

    /// Expand a JSON object into parameters, one per key, in the object's key order.
    pub fn from_object(object: Map<String, Value>) -> Vec<Self> {
        object
            .into_iter()
            .map(|(key, value)| Self { key, value })
            .collect()
    }
}

/// Serialize `base` and merge `parameters` into the resulting object.
///
/// Named fields are written first and parameters are applied afterwards in
/// order, so a parameter whose key matches a named field replaces that
/// field's value. Later parameters replace earlier ones with the same key.
pub fn flattened_marshal<T: Serialize + ?Sized>(
    base: &T,
    parameters: &[Parameter],
) -> Result<Vec<u8>, serde_json::Error> {
    let mut merged = match serde_json::to_value(base)? {
        Value::Object(map) => map,
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected a JSON object to merge parameters into, got {}",
                json_kind(&other)
            )))
        }
    };

    for parameter in parameters {
        merged.insert(parameter.key.clone(), parameter.value.clone());
    }

    serde_json::to_vec(&merged)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Payload of a create or update call.
///
/// Types carrying a parameter bag override [`RequestBody::parameters`]; their
/// body is then the flattened object instead of the plain serialization.
pub trait RequestBody: Serialize {
    fn parameters(&self) -> Option<&[Parameter]> {
        None
    }

    fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self.parameters() {
            Some(parameters) => flattened_marshal(self, parameters),
            None => serde_json::to_vec(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Sample {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        datalake_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        parent_id: Option<i64>,
        #[serde(skip)]
        parameters: Option<Vec<Parameter>>,
    }

    impl RequestBody for Sample {
        fn parameters(&self) -> Option<&[Parameter]> {
            self.parameters.as_deref()
        }
    }

    fn body_string(sample: &Sample) -> String {
        String::from_utf8(sample.to_body().unwrap()).unwrap()
    }

    #[test]
    fn parameters_are_merged_flat_after_named_fields() {
        let sample = Sample {
            name: Some("Acme".to_string()),
            datalake_id: Some(12),
            parameters: Some(vec![Parameter::new("region", "eu")]),
            ..Default::default()
        };

        assert_eq!(
            body_string(&sample),
            r#"{"name":"Acme","datalake_id":12,"region":"eu"}"#
        );
    }

    // A parameter named like a field silently wins. Kept as-is: callers rely
    // on it to send values the named fields cannot express.
    #[test]
    fn parameter_overrides_named_field_on_collision() {
        let sample = Sample {
            name: Some("Acme".to_string()),
            datalake_id: Some(12),
            parameters: Some(vec![Parameter::new("name", "Override")]),
            ..Default::default()
        };

        let body: Value = serde_json::from_str(&body_string(&sample)).unwrap();
        assert_eq!(body, json!({"name": "Override", "datalake_id": 12}));
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    #[test]
    fn last_duplicate_parameter_wins() {
        let sample = Sample {
            parameters: Some(vec![
                Parameter::new("region", "eu"),
                Parameter::new("region", "us"),
            ]),
            ..Default::default()
        };

        assert_eq!(body_string(&sample), r#"{"region":"us"}"#);
    }

    #[test]
    fn unset_fields_are_absent_not_null() {
        let sample = Sample {
            name: Some("Acme".to_string()),
            parameters: Some(vec![]),
            ..Default::default()
        };

        let body = body_string(&sample);
        assert_eq!(body, r#"{"name":"Acme"}"#);
        assert!(!body.contains("null"));
        assert!(!body.contains("parameters"));
    }

    #[test]
    fn key_count_is_fields_plus_parameters_minus_collisions() {
        let sample = Sample {
            name: Some("Acme".to_string()),
            datalake_id: Some(1),
            parent_id: Some(2),
            parameters: Some(vec![
                Parameter::new("parent_id", 3),
                Parameter::new("a", true),
                Parameter::new("b", json!({"nested": [1, 2]})),
            ]),
        };

        let body: Value = serde_json::from_str(&body_string(&sample)).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 3 + 3 - 1);
        assert_eq!(object["parent_id"], json!(3));
        assert_eq!(object["b"], json!({"nested": [1, 2]}));
    }

    #[test]
    fn without_parameters_body_is_plain_json() {
        let sample = Sample {
            datalake_id: Some(7),
            ..Default::default()
        };

        assert_eq!(body_string(&sample), r#"{"datalake_id":7}"#);
    }

    #[test]
    fn non_object_base_is_rejected() {
        let result = flattened_marshal(&vec![1, 2, 3], &[Parameter::new("a", 1)]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn parameters_expand_from_object_in_key_order() {
        let object = json!({"zeta": 1, "alpha": "x", "mid": [true]});
        let parameters = Parameter::from_object(object.as_object().unwrap().clone());

        let keys: Vec<_> = parameters.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(parameters[2].value, json!([true]));
    }

    #[test]
    fn parameter_from_serializable_value() {
        #[derive(Serialize)]
        struct Window {
            days: u32,
        }

        let parameter = Parameter::from_serializable("window", &Window { days: 30 }).unwrap();
        assert_eq!(parameter.value, json!({"days": 30}));
    }
}
