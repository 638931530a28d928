use std::collections::HashMap;

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde_json::Value as JsonValue;
use types::Writer;

use crate::repository::{RepositoryError, WriterRepository};

/// Writers stored in a ``DynamoDB`` table, one item per writer.
#[derive(Debug, Clone)]
pub struct DynamoDbWriterRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbWriterRepository {
    pub const fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

impl WriterRepository for DynamoDbWriterRepository {
    /// Scans the whole table, following `LastEvaluatedKey` until the last
    /// page has been read.
    #[tracing::instrument(skip(self), fields(table = %self.table_name))]
    async fn get_list(&self) -> Result<Vec<Writer>, RepositoryError> {
        let mut writers = Vec::new();
        let mut last_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            tracing::debug!("scanning page, cursor: {last_key:?}");

            let scan_output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(last_key.take())
                .send()
                .await
                .map_err(from_sdk_error)?;

            writers.extend(writers_from_items(
                scan_output.items.unwrap_or_default(),
            )?);

            match scan_output.last_evaluated_key {
                Some(key) if !key.is_empty() => last_key = Some(key),
                _ => break,
            }
        }

        tracing::info!("scanned {0} writers", writers.len());

        Ok(writers)
    }
}

fn writers_from_items(
    items: Vec<HashMap<String, AttributeValue>>,
) -> Result<Vec<Writer>, RepositoryError> {
    items
        .into_iter()
        .map(|item| {
            let record = item_to_json(item)?;
            serde_json::from_value(record).map_err(|e| {
                RepositoryError::StoreError(format!(
                    "malformed writer item: {e}"
                ))
            })
        })
        .collect()
}

fn item_to_json(
    item: HashMap<String, AttributeValue>,
) -> Result<JsonValue, RepositoryError> {
    item.into_iter()
        .map(|(key, value)| Ok((key, attribute_value_to_json(value)?)))
        .collect::<Result<serde_json::Map<_, _>, _>>()
        .map(JsonValue::Object)
}

/// Binary attributes become base64 strings; sets become arrays.
fn attribute_value_to_json(
    attr: AttributeValue,
) -> Result<JsonValue, RepositoryError> {
    match attr {
        AttributeValue::S(s) => Ok(JsonValue::String(s)),
        AttributeValue::N(n) => number_to_json(&n),
        AttributeValue::Bool(b) => Ok(JsonValue::Bool(b)),
        AttributeValue::Null(_) => Ok(JsonValue::Null),
        AttributeValue::B(blob) => {
            Ok(JsonValue::String(BASE64.encode(blob.as_ref())))
        }
        AttributeValue::Ss(values) => Ok(JsonValue::Array(
            values.into_iter().map(JsonValue::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| number_to_json(n))
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        AttributeValue::Bs(blobs) => Ok(JsonValue::Array(
            blobs
                .iter()
                .map(|blob| JsonValue::String(BASE64.encode(blob.as_ref())))
                .collect(),
        )),
        AttributeValue::L(list) => list
            .into_iter()
            .map(attribute_value_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        AttributeValue::M(map) => item_to_json(map),
        other => Err(RepositoryError::StoreError(format!(
            "unsupported attribute value: {other:?}"
        ))),
    }
}

fn number_to_json(n: &str) -> Result<JsonValue, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(JsonValue::Number(i.into()));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(JsonValue::Number(u.into()));
    }

    n.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
        .ok_or_else(|| {
            RepositoryError::StoreError(format!("invalid number: {n}"))
        })
}

/// Service and response errors mean the store was reached; everything
/// else (dispatch, timeout, construction) is treated as unreachable.
fn from_sdk_error<E, R>(err: SdkError<E, R>) -> RepositoryError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    match err {
        SdkError::ServiceError(_) | SdkError::ResponseError(_) => {
            RepositoryError::StoreError(message)
        }
        _ => RepositoryError::StoreUnavailable(message),
    }
}
