//! Serde view of the SAM policy template catalogue and per-template parsing.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct CatalogDoc {
    #[serde(rename = "Templates")]
    pub templates: BTreeMap<String, TemplateDoc>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateDoc {
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Definition")]
    pub definition: Definition,
}

#[derive(Debug, Deserialize)]
pub struct Definition {
    #[serde(rename = "Statement")]
    pub statement: Vec<Value>,
}

/// A template shape the generator does not understand. Recorded per
/// template; never aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("statement list is empty")]
    EmptyStatement,

    #[error("missing or non-string Effect")]
    BadEffect,

    #[error("statements mix effects {0} and {1}")]
    MixedEffects(String, String),

    #[error("unsupported Action shape: {0}")]
    BadAction(String),

    #[error("unsupported Resource shape: {0}")]
    BadResource(String),

    #[error("substitution object declares no variables")]
    EmptyParameters,
}

/// A successfully parsed catalogue template, ready for code generation.
/// Multi-statement definitions with a uniform effect are merged; parameters
/// are the union of every substitution variable, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub description: String,
    pub effect: String,
    pub actions: Vec<String>,
    pub resources: Vec<String>,
    pub parameters: Vec<String>,
}

pub fn parse_template(name: &str, doc: &TemplateDoc) -> Result<TemplateEntry, SchemaError> {
    if doc.definition.statement.is_empty() {
        return Err(SchemaError::EmptyStatement);
    }

    let mut effect: Option<String> = None;
    let mut actions = Vec::new();
    let mut resources = Vec::new();
    let mut parameters = BTreeSet::new();

    for statement in &doc.definition.statement {
        let this = statement
            .get("Effect")
            .and_then(Value::as_str)
            .ok_or(SchemaError::BadEffect)?;
        match &effect {
            Some(seen) if seen != this => {
                return Err(SchemaError::MixedEffects(seen.clone(), this.to_string()));
            }
            Some(_) => {}
            None => effect = Some(this.to_string()),
        }

        parse_actions(statement.get("Action"), &mut actions)?;
        parse_resources(statement.get("Resource"), &mut resources, &mut parameters)?;
    }

    Ok(TemplateEntry {
        name: name.to_string(),
        description: doc.description.clone(),
        effect: effect.expect("checked non-empty statement list"),
        actions,
        resources,
        parameters: parameters.into_iter().collect(),
    })
}

fn parse_actions(action: Option<&Value>, actions: &mut Vec<String>) -> Result<(), SchemaError> {
    match action {
        Some(Value::String(one)) => actions.push(one.clone()),
        Some(Value::Array(list)) => {
            for item in list {
                match item.as_str() {
                    Some(action) => actions.push(action.to_string()),
                    None => return Err(SchemaError::BadAction(shape_of(item).to_string())),
                }
            }
        }
        other => return Err(SchemaError::BadAction(shape_name(other))),
    }
    Ok(())
}

fn parse_resources(
    resource: Option<&Value>,
    resources: &mut Vec<String>,
    parameters: &mut BTreeSet<String>,
) -> Result<(), SchemaError> {
    match resource {
        Some(Value::String(one)) => resources.push(one.clone()),
        Some(Value::Object(map)) => parse_substitution(map, resources, parameters)?,
        Some(Value::Array(list)) => {
            for item in list {
                match item {
                    Value::String(one) => resources.push(one.clone()),
                    Value::Object(map) => parse_substitution(map, resources, parameters)?,
                    other => return Err(SchemaError::BadResource(shape_of(other).to_string())),
                }
            }
        }
        other => return Err(SchemaError::BadResource(shape_name(other))),
    }
    Ok(())
}

/// A resource of the form `{"Fn::Sub": pattern}` or
/// `{"Fn::Sub": [pattern, {var: ...}]}`. Each variable becomes one operation
/// parameter.
fn parse_substitution(
    map: &serde_json::Map<String, Value>,
    resources: &mut Vec<String>,
    parameters: &mut BTreeSet<String>,
) -> Result<(), SchemaError> {
    let sub = map
        .get("Fn::Sub")
        .ok_or_else(|| SchemaError::BadResource("object without Fn::Sub".to_string()))?;
    match sub {
        Value::String(pattern) => resources.push(pattern.clone()),
        Value::Array(parts) => match parts.as_slice() {
            [Value::String(pattern), Value::Object(vars)] => {
                if vars.is_empty() {
                    return Err(SchemaError::EmptyParameters);
                }
                resources.push(pattern.clone());
                for key in vars.keys() {
                    parameters.insert(key.clone());
                }
            }
            _ => return Err(SchemaError::BadResource("malformed Fn::Sub list".to_string())),
        },
        other => return Err(SchemaError::BadResource(shape_of(other).to_string())),
    }
    Ok(())
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn shape_name(value: Option<&Value>) -> String {
    value.map(shape_of).unwrap_or("missing").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(definition: Value) -> TemplateDoc {
        serde_json::from_value(json!({
            "Description": "test template",
            "Definition": definition,
        }))
        .unwrap()
    }

    #[test]
    fn string_action_and_resource_parse_without_parameters() {
        let doc = doc(json!({
            "Statement": [{
                "Effect": "Allow",
                "Action": "execute-api:Invoke",
                "Resource": "*",
            }]
        }));
        let entry = parse_template("Simple", &doc).unwrap();
        assert_eq!(entry.effect, "Allow");
        assert_eq!(entry.actions, vec!["execute-api:Invoke"]);
        assert_eq!(entry.resources, vec!["*"]);
        assert!(entry.parameters.is_empty());
    }

    #[test]
    fn action_list_is_kept_in_order() {
        let doc = doc(json!({
            "Statement": [{
                "Effect": "Allow",
                "Action": ["s3:GetObject", "s3:PutObject"],
                "Resource": "*",
            }]
        }));
        let entry = parse_template("Ordered", &doc).unwrap();
        assert_eq!(entry.actions, vec!["s3:GetObject", "s3:PutObject"]);
    }

    #[test]
    fn substitution_with_one_variable_yields_one_parameter() {
        let doc = doc(json!({
            "Statement": [{
                "Effect": "Allow",
                "Action": ["sqs:SendMessage*"],
                "Resource": {
                    "Fn::Sub": [
                        "arn:${AWS::Partition}:sqs:${AWS::Region}:${AWS::AccountId}:${queueName}",
                        { "queueName": { "Ref": "QueueName" } },
                    ]
                },
            }]
        }));
        let entry = parse_template("Queue", &doc).unwrap();
        assert_eq!(entry.parameters, vec!["queueName"]);
        assert_eq!(entry.resources.len(), 1);
    }

    #[test]
    fn substitution_with_two_variables_yields_two_sorted_parameters() {
        let doc = doc(json!({
            "Statement": [{
                "Effect": "Allow",
                "Action": ["dynamodb:GetRecords"],
                "Resource": {
                    "Fn::Sub": [
                        "arn:aws:dynamodb:::table/${tableName}/stream/${streamName}",
                        { "tableName": {}, "streamName": {} },
                    ]
                },
            }]
        }));
        let entry = parse_template("Stream", &doc).unwrap();
        assert_eq!(entry.parameters, vec!["streamName", "tableName"]);
    }

    #[test]
    fn substitution_without_variables_is_a_failed_parse() {
        let doc = doc(json!({
            "Statement": [{
                "Effect": "Allow",
                "Action": ["s3:GetObject"],
                "Resource": { "Fn::Sub": ["arn:aws:s3:::${bucketName}", {}] },
            }]
        }));
        assert_eq!(
            parse_template("Empty", &doc).unwrap_err(),
            SchemaError::EmptyParameters
        );
    }

    #[test]
    fn resource_list_mixes_strings_and_substitutions() {
        let doc = doc(json!({
            "Statement": [{
                "Effect": "Allow",
                "Action": ["s3:GetObject"],
                "Resource": [
                    { "Fn::Sub": ["arn:aws:s3:::${bucketName}", { "bucketName": {} }] },
                    "arn:aws:s3:::logs",
                ],
            }]
        }));
        let entry = parse_template("Mixed", &doc).unwrap();
        assert_eq!(entry.resources.len(), 2);
        assert_eq!(entry.parameters, vec!["bucketName"]);
    }

    #[test]
    fn statements_with_one_effect_are_merged() {
        let doc = doc(json!({
            "Statement": [
                { "Effect": "Allow", "Action": ["s3:GetObject"], "Resource": "a" },
                { "Effect": "Allow", "Action": ["s3:ListBucket"], "Resource": "b" },
            ]
        }));
        let entry = parse_template("Merged", &doc).unwrap();
        assert_eq!(entry.actions, vec!["s3:GetObject", "s3:ListBucket"]);
        assert_eq!(entry.resources, vec!["a", "b"]);
    }

    #[test]
    fn mixed_effects_are_rejected() {
        let doc = doc(json!({
            "Statement": [
                { "Effect": "Allow", "Action": ["s3:GetObject"], "Resource": "a" },
                { "Effect": "Deny", "Action": ["s3:ListBucket"], "Resource": "b" },
            ]
        }));
        assert!(matches!(
            parse_template("Mixed", &doc).unwrap_err(),
            SchemaError::MixedEffects(..)
        ));
    }

    #[test]
    fn unexpected_action_shape_names_the_shape() {
        let doc = doc(json!({
            "Statement": [{ "Effect": "Allow", "Action": 42, "Resource": "*" }]
        }));
        assert_eq!(
            parse_template("Bad", &doc).unwrap_err(),
            SchemaError::BadAction("number".to_string())
        );
    }

    #[test]
    fn missing_resource_is_a_schema_error() {
        let doc = doc(json!({
            "Statement": [{ "Effect": "Allow", "Action": ["s3:GetObject"] }]
        }));
        assert_eq!(
            parse_template("NoResource", &doc).unwrap_err(),
            SchemaError::BadResource("missing".to_string())
        );
    }

    #[test]
    fn empty_statement_list_is_rejected() {
        let doc = doc(json!({ "Statement": [] }));
        assert_eq!(
            parse_template("Empty", &doc).unwrap_err(),
            SchemaError::EmptyStatement
        );
    }
}
