//! Renders the generated catalogue source from parsed template entries.

use crate::schema::TemplateEntry;

/// Outcome of a generation run: the templates that parsed and the ones that
/// did not. Presentation is the caller's job.
#[derive(Debug)]
pub struct Generation {
    pub entries: Vec<TemplateEntry>,
    pub failures: Vec<Failure>,
}

#[derive(Debug)]
pub struct Failure {
    pub name: String,
    pub reason: String,
}

const HEADER: &str = "\
// Generated by samkit-policygen from the AWS SAM policy template catalogue.
// Do not edit by hand; re-run the generator to refresh.

use crate::template::PolicyTemplate;
use crate::Factory;
";

/// Renders the complete catalogue source file. Parsed templates become a
/// descriptor const plus a factory method; failed templates become no-op
/// stubs so the generated file still compiles.
pub fn render(generation: &Generation) -> String {
    let mut out = String::from(HEADER);

    for entry in &generation.entries {
        out.push('\n');
        out.push_str(&render_const(entry));
    }

    out.push_str("\nimpl Factory {\n");
    let mut first = true;
    for entry in &generation.entries {
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(&render_method(entry));
    }
    for failure in &generation.failures {
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(&render_stub(failure));
    }
    out.push_str("}\n");

    out.push_str("\n/// Every template in the catalogue, in generation order.\n");
    out.push_str("pub static TEMPLATES: &[PolicyTemplate] = &[\n");
    for entry in &generation.entries {
        out.push_str("    ");
        out.push_str(&const_name(&entry.name));
        out.push_str(",\n");
    }
    out.push_str("];\n");

    out
}

fn render_const(entry: &TemplateEntry) -> String {
    format!(
        "pub const {}: PolicyTemplate = PolicyTemplate {{\n    name: {:?},\n    description: {:?},\n    effect: {:?},\n    actions: &[{}],\n    resources: &[{}],\n    parameters: &[{}],\n}};\n",
        const_name(&entry.name),
        entry.name,
        entry.description,
        entry.effect,
        string_slice(&entry.actions),
        string_slice(&entry.resources),
        string_slice(&entry.parameters),
    )
}

fn render_method(entry: &TemplateEntry) -> String {
    let args: Vec<String> = entry.parameters.iter().map(|name| snake_case(name)).collect();
    let signature = args
        .iter()
        .map(|arg| format!(", {arg}: &str"))
        .collect::<String>();
    format!(
        "    /// {}\n    pub fn {}(&mut self{}) {{\n        self.append(&{}, &[{}]);\n    }}\n",
        entry.description,
        method_name(&entry.name),
        signature,
        const_name(&entry.name),
        args.join(", "),
    )
}

fn render_stub(failure: &Failure) -> String {
    format!(
        "    /// {} could not be parsed from the catalogue ({}); appends nothing.\n    pub fn {}(&mut self) {{}}\n",
        failure.name,
        failure.reason,
        method_name(&failure.name),
    )
}

fn string_slice(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{item:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn method_name(name: &str) -> String {
    format!("add_{}", snake_case(name))
}

fn const_name(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}

/// CamelCase to snake_case, keeping acronym runs together: a separator goes
/// before an uppercase that follows a lowercase or digit, and before the
/// last uppercase of a run that is followed by a lowercase.
fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let after_word = i > 0
                && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let before_word = i > 0
                && chars[i - 1].is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
            if after_word || before_word {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> TemplateEntry {
        TemplateEntry {
            name: "LambdaInvokePolicy".to_string(),
            description: "Gives permission to invoke a Lambda Function, Alias or Version"
                .to_string(),
            effect: "Allow".to_string(),
            actions: vec!["lambda:InvokeFunction".to_string()],
            resources: vec![
                "arn:${AWS::Partition}:lambda:${AWS::Region}:${AWS::AccountId}:function:${functionName}*"
                    .to_string(),
            ],
            parameters: vec!["functionName".to_string()],
        }
    }

    #[test]
    fn snake_case_handles_acronyms_and_digits() {
        assert_eq!(snake_case("LambdaInvokePolicy"), "lambda_invoke_policy");
        assert_eq!(snake_case("AMIDescribePolicy"), "ami_describe_policy");
        assert_eq!(snake_case("DynamoDBCrudPolicy"), "dynamo_db_crud_policy");
        assert_eq!(snake_case("EC2CopyImagePolicy"), "ec2_copy_image_policy");
        assert_eq!(snake_case("S3CrudPolicy"), "s3_crud_policy");
        assert_eq!(snake_case("VPCAccessPolicy"), "vpc_access_policy");
        assert_eq!(snake_case("SSMParameterReadPolicy"), "ssm_parameter_read_policy");
        assert_eq!(snake_case("functionName"), "function_name");
        assert_eq!(snake_case("pipelinename"), "pipelinename");
    }

    #[test]
    fn rendered_const_matches_the_descriptor_layout() {
        let rendered = render_const(&entry());
        assert!(rendered.starts_with("pub const LAMBDA_INVOKE_POLICY: PolicyTemplate"));
        assert!(rendered.contains("name: \"LambdaInvokePolicy\","));
        assert!(rendered.contains("actions: &[\"lambda:InvokeFunction\"],"));
        assert!(rendered.contains("parameters: &[\"functionName\"],"));
    }

    #[test]
    fn rendered_method_takes_one_argument_per_parameter() {
        let rendered = render_method(&entry());
        assert!(rendered.contains("pub fn add_lambda_invoke_policy(&mut self, function_name: &str)"));
        assert!(rendered.contains("self.append(&LAMBDA_INVOKE_POLICY, &[function_name]);"));
    }

    #[test]
    fn parameterless_method_takes_only_self() {
        let mut plain = entry();
        plain.parameters.clear();
        let rendered = render_method(&plain);
        assert!(rendered.contains("pub fn add_lambda_invoke_policy(&mut self)"));
        assert!(rendered.contains("&[]);"));
    }

    #[test]
    fn failed_templates_become_noop_stubs() {
        let generation = Generation {
            entries: vec![],
            failures: vec![Failure {
                name: "BrokenPolicy".to_string(),
                reason: "unsupported Action shape: number".to_string(),
            }],
        };
        let rendered = render(&generation);
        assert!(rendered.contains("pub fn add_broken_policy(&mut self) {}"));
        assert!(rendered.contains("unsupported Action shape: number"));
    }

    #[test]
    fn templates_slice_lists_each_generated_const() {
        let generation = Generation {
            entries: vec![entry()],
            failures: vec![],
        };
        let rendered = render(&generation);
        assert!(rendered.contains("pub static TEMPLATES: &[PolicyTemplate] = &[\n    LAMBDA_INVOKE_POLICY,\n];"));
    }
}
