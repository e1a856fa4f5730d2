//! Conversion between JSON record fields and DynamoDB attribute values.

use anyhow::{bail, Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

pub fn to_attribute_value(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => {
            AttributeValue::L(items.into_iter().map(to_attribute_value).collect())
        }
        Value::Object(fields) => AttributeValue::M(to_item(fields)),
    }
}

pub fn to_item(fields: Map<String, Value>) -> HashMap<String, AttributeValue> {
    fields
        .into_iter()
        .map(|(name, value)| (name, to_attribute_value(value)))
        .collect()
}

pub fn from_attribute_value(attribute: AttributeValue) -> Result<Value> {
    let value = match attribute {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => Value::Number(parse_number(&n)?),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(items) => Value::Array(
            items
                .into_iter()
                .map(from_attribute_value)
                .collect::<Result<_>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(from_item(fields)?),
        // sets only show up if something other than the registry wrote the item
        AttributeValue::Ss(set) => Value::Array(set.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(
            set.iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_>>()?,
        ),
        AttributeValue::B(_) | AttributeValue::Bs(_) => {
            bail!("Binary attributes cannot be represented in an environment record")
        }
        other => bail!("Unsupported attribute value: {:?}", other),
    };

    Ok(value)
}

pub fn from_item(item: HashMap<String, AttributeValue>) -> Result<Map<String, Value>> {
    item.into_iter()
        .map(|(name, attribute)| {
            let value = from_attribute_value(attribute)
                .with_context(|| format!("Failed to read attribute '{}'", name))?;
            Ok((name, value))
        })
        .collect()
}

fn parse_number(raw: &str) -> Result<Number> {
    serde_json::from_str(raw).with_context(|| format!("Invalid number attribute '{}'", raw))
}
