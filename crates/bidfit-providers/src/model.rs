//! Chat model seam
//!
//! One interface, two output modes: free prose and schema-constrained
//! JSON. Steps depend only on this trait; the concrete provider swaps
//! behind it without touching step logic.

use crate::error::ProviderError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A text-generation / structured-reasoning capability
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate free prose for an instruction
    async fn generate(&self, instruction: &str) -> Result<String, ProviderError>;

    /// Generate JSON constrained by the given schema
    ///
    /// The returned value conforms to `schema` as far as the provider
    /// enforces it; callers still deserialize defensively.
    async fn generate_structured(
        &self,
        instruction: &str,
        schema: Value,
    ) -> Result<Value, ProviderError>;
}

/// Build an inline (ref-free) JSON schema for `T`
///
/// Structured-output endpoints accept an OpenAPI-style schema subset
/// and reject `$ref`, so subschemas are inlined.
pub fn schema_for<T: JsonSchema>() -> Value {
    let mut settings = schemars::gen::SchemaSettings::openapi3();
    settings.inline_subschemas = true;
    let schema = settings.into_generator().into_root_schema_for::<T>();
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

/// Schema-constrained call returning a typed record
pub async fn structured<T>(model: &dyn ChatModel, instruction: &str) -> Result<T, ProviderError>
where
    T: DeserializeOwned + JsonSchema,
{
    let value = model
        .generate_structured(instruction, schema_for::<T>())
        .await?;
    serde_json::from_value(value).map_err(|e| ProviderError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct Inner {
        #[allow(dead_code)]
        value: u32,
    }

    #[derive(Debug, Deserialize, JsonSchema)]
    struct Outer {
        #[allow(dead_code)]
        inner: Inner,
    }

    #[test]
    fn schema_inlines_subschemas() {
        let schema = schema_for::<Outer>();
        let rendered = schema.to_string();
        assert!(!rendered.contains("$ref"), "schema must be ref-free");
        assert!(rendered.contains("inner"));
    }

    struct CannedModel(Value);

    #[async_trait::async_trait]
    impl ChatModel for CannedModel {
        async fn generate(&self, _instruction: &str) -> Result<String, ProviderError> {
            Ok("prose".to_string())
        }

        async fn generate_structured(
            &self,
            _instruction: &str,
            _schema: Value,
        ) -> Result<Value, ProviderError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn structured_deserializes_typed_record() {
        let model = CannedModel(serde_json::json!({ "inner": { "value": 7 } }));
        let outer: Outer = structured(&model, "extract").await.unwrap();
        assert_eq!(outer.inner.value, 7);
    }

    #[tokio::test]
    async fn structured_reports_decode_failures() {
        let model = CannedModel(serde_json::json!({ "inner": "not an object" }));
        let err = structured::<Outer>(&model, "extract").await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
