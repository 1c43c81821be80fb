use serde::Serialize;

/// One catalogue entry: a named IAM statement template. The resource
/// patterns may carry `${parameter}` tokens that are substituted when the
/// fragment is rendered, and the `${AWS::Partition}`, `${AWS::Region}` and
/// `${AWS::AccountId}` tokens that survive until the factory is finalized.
#[derive(Debug, Clone, Copy)]
pub struct PolicyTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: &'static str,
    pub actions: &'static [&'static str],
    pub resources: &'static [&'static str],
    pub parameters: &'static [&'static str],
}

#[derive(Serialize)]
struct Statement<'a> {
    #[serde(rename = "Action")]
    action: &'a [&'a str],
    #[serde(rename = "Effect")]
    effect: &'a str,
    #[serde(rename = "Resource")]
    resource: Resource,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Resource {
    One(String),
    Many(Vec<String>),
}

impl PolicyTemplate {
    /// Renders the statement fragment, substituting `args` for the declared
    /// parameters inside the resource patterns. Substitution is local to
    /// this fragment; the three `AWS::` tokens are left untouched.
    pub fn render(&self, args: &[&str]) -> String {
        let mut substituted: Vec<String> = self
            .resources
            .iter()
            .map(|pattern| {
                let mut resource = (*pattern).to_string();
                for (name, value) in self.parameters.iter().zip(args) {
                    resource = resource.replace(&format!("${{{name}}}"), value);
                }
                resource
            })
            .collect();

        let resource = if substituted.len() == 1 {
            Resource::One(substituted.pop().unwrap())
        } else {
            Resource::Many(substituted)
        };

        let statement = Statement {
            action: self.actions,
            effect: self.effect,
            resource,
        };
        serde_json::to_string(&statement).expect("statement serializes to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const SINGLE: PolicyTemplate = PolicyTemplate {
        name: "Single",
        description: "one resource, one parameter",
        effect: "Allow",
        actions: &["sqs:SendMessage*"],
        resources: &["arn:${AWS::Partition}:sqs:${AWS::Region}:${AWS::AccountId}:${queueName}"],
        parameters: &["queueName"],
    };

    const DOUBLE: PolicyTemplate = PolicyTemplate {
        name: "Double",
        description: "two resources, one parameter",
        effect: "Allow",
        actions: &["dynamodb:GetItem", "dynamodb:Scan"],
        resources: &[
            "arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}",
            "arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}/index/*",
        ],
        parameters: &["tableName"],
    };

    #[test]
    fn single_resource_renders_as_a_string() {
        let fragment = SINGLE.render(&["orders"]);
        let parsed: Value = serde_json::from_str(&fragment).unwrap();
        assert_eq!(
            parsed["Resource"],
            "arn:${AWS::Partition}:sqs:${AWS::Region}:${AWS::AccountId}:orders"
        );
        assert_eq!(parsed["Effect"], "Allow");
        assert_eq!(parsed["Action"][0], "sqs:SendMessage*");
    }

    #[test]
    fn several_resources_render_as_an_array() {
        let fragment = DOUBLE.render(&["orders"]);
        let parsed: Value = serde_json::from_str(&fragment).unwrap();
        let resources = parsed["Resource"].as_array().unwrap();
        assert_eq!(resources.len(), 2);
        assert!(resources[0].as_str().unwrap().ends_with("table/orders"));
        assert!(resources[1].as_str().unwrap().ends_with("table/orders/index/*"));
    }

    #[test]
    fn parameter_substitution_leaves_aws_tokens_in_place() {
        let fragment = SINGLE.render(&["orders"]);
        assert!(!fragment.contains("${queueName}"));
        assert!(fragment.contains("${AWS::Partition}"));
        assert!(fragment.contains("${AWS::Region}"));
        assert!(fragment.contains("${AWS::AccountId}"));
    }
}
