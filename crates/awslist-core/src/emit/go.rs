//! aws-sdk-go-v2 list functions.

use std::fmt::{self, Write};

use awslist_model::{ShapeType, exportable_name};

use super::{Emitter, GENERATED_HEADER};
use crate::catalog::InputValue;
use crate::fragment::{TagsFragment, TimestampSource};
use crate::resolve::Resolution;

/// Layout of string creation times, RFC 3339 with milliseconds.
pub const GO_TIME_LAYOUT: &str = "2006-01-02T15:04:05.000Z0700";

/// Emits one `package aws` Go file per resource type.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoEmitter;

impl Emitter for GoEmitter {
    fn file_name(&self, resource_type: &str) -> String {
        format!("{resource_type}.go")
    }

    fn render(&self, r: &Resolution) -> Result<String, fmt::Error> {
        let mut out = String::with_capacity(2048);
        let svc = &r.service;
        let op = &r.operation;
        let needs_time = r
            .creation_time
            .as_ref()
            .is_some_and(|c| c.source != TimestampSource::Native);
        let needs_fmt = r.resource_id.kind != ShapeType::String;
        let needs_aws = r
            .inputs
            .values()
            .any(|v| matches!(v, InputValue::Single(_)));

        writeln!(out, "{GENERATED_HEADER}")?;
        writeln!(out)?;
        writeln!(out, "package aws")?;
        writeln!(out)?;
        writeln!(out, "import (")?;
        writeln!(out, "\t\"context\"")?;
        if needs_fmt {
            writeln!(out, "\t\"fmt\"")?;
        }
        if needs_time {
            writeln!(out, "\t\"time\"")?;
        }
        writeln!(out)?;
        if needs_aws {
            writeln!(out, "\t\"github.com/aws/aws-sdk-go-v2/aws\"")?;
        }
        writeln!(out, "\t\"github.com/aws/aws-sdk-go-v2/service/{svc}\"")?;
        writeln!(out, ")")?;
        writeln!(out)?;

        writeln!(
            out,
            "func List{}(client *Client) ([]Resource, error) {{",
            r.function_name
        )?;
        write!(
            out,
            "\treq := client.{}conn.{op}Request(&{svc}.{op}Input{{",
            exportable_name(svc)
        )?;
        write_inputs(&mut out, r)?;
        writeln!(out, "}})")?;
        writeln!(out)?;

        if r.paginated {
            writeln!(out, "\tvar result []Resource")?;
            writeln!(out)?;
            writeln!(out, "\tp := {svc}.New{op}Paginator(req)")?;
            writeln!(out, "\tfor p.Next(context.Background()) {{")?;
            writeln!(out, "\t\tresp := p.CurrentPage()")?;
            writeln!(out)?;
            write_loop(&mut out, r, "\t\t")?;
            writeln!(out, "\t}}")?;
            writeln!(out)?;
            writeln!(out, "\tif err := p.Err(); err != nil {{")?;
            writeln!(out, "\t\treturn nil, err")?;
            writeln!(out, "\t}}")?;
        } else {
            writeln!(out, "\tresp, err := req.Send(context.Background())")?;
            writeln!(out, "\tif err != nil {{")?;
            writeln!(out, "\t\treturn nil, err")?;
            writeln!(out, "\t}}")?;
            writeln!(out)?;
            writeln!(out, "\tvar result []Resource")?;
            writeln!(out)?;
            write_loop(&mut out, r, "\t")?;
        }

        writeln!(out)?;
        writeln!(out, "\treturn result, nil")?;
        writeln!(out, "}}")?;
        Ok(out)
    }
}

/// Fixed input parameters as a Go composite literal body.
fn write_inputs(out: &mut String, r: &Resolution) -> fmt::Result {
    if r.inputs.is_empty() {
        return Ok(());
    }
    let width = r.inputs.keys().map(String::len).max().unwrap_or(0) + 2;
    writeln!(out)?;
    for (name, value) in &r.inputs {
        let key = format!("{name}:");
        let value = match value {
            InputValue::Single(v) => format!("aws.String({v:?})"),
            InputValue::List(vs) => format!(
                "[]string{{{}}}",
                vs.iter().map(|v| format!("{v:?}")).collect::<Vec<_>>().join(", ")
            ),
        };
        writeln!(out, "\t\t{key:<width$}{value},")?;
    }
    write!(out, "\t")
}

/// The loop over the output field, at indentation `indent`.
fn write_loop(out: &mut String, r: &Resolution, indent: &str) -> fmt::Result {
    let body = format!("{indent}\t");
    writeln!(out, "{indent}for _, r := range resp.{} {{", r.output_field)?;

    if let Some(owner) = &r.owner {
        writeln!(out, "{body}if *r.{} != client.AccountID {{", owner.field)?;
        writeln!(out, "{body}\tcontinue")?;
        writeln!(out, "{body}}}")?;
    }

    if let Some(tags) = &r.tags {
        writeln!(out, "{body}tags := map[string]string{{}}")?;
        match tags {
            TagsFragment::List { field } => {
                writeln!(out, "{body}for _, t := range r.{field} {{")?;
                writeln!(out, "{body}\ttags[*t.Key] = *t.Value")?;
            }
            TagsFragment::Map { field } => {
                writeln!(out, "{body}for k, v := range r.{field} {{")?;
                writeln!(out, "{body}\ttags[k] = v")?;
            }
        }
        writeln!(out, "{body}}}")?;
    }

    if let Some(time) = &r.creation_time {
        let field = &time.field;
        match time.source {
            TimestampSource::String => {
                writeln!(
                    out,
                    "{body}t, err := time.Parse(\"{GO_TIME_LAYOUT}\", *r.{field})"
                )?;
                writeln!(out, "{body}if err != nil {{")?;
                writeln!(out, "{body}\treturn nil, err")?;
                writeln!(out, "{body}}}")?;
            }
            TimestampSource::Native => writeln!(out, "{body}t := *r.{field}")?,
            TimestampSource::EpochMillis => {
                writeln!(out, "{body}t := time.Unix(0, *r.{field} * 1000000).UTC()")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{body}result = append(result, Resource{{")?;

    let id = if r.resource_id.kind == ShapeType::String {
        format!("*r.{}", r.resource_id.field)
    } else {
        format!("fmt.Sprint(*r.{})", r.resource_id.field)
    };
    let mut fields = vec![
        ("Type", format!("{:?}", r.resource_type)),
        ("ID", id),
        ("Profile", "client.Profile".to_owned()),
        ("Region", "client.Region".to_owned()),
        ("AccountID", "client.AccountID".to_owned()),
    ];
    if r.tags.is_some() {
        fields.push(("Tags", "tags".to_owned()));
    }
    if r.creation_time.is_some() {
        fields.push(("CreatedAt", "&t".to_owned()));
    }
    let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 2;
    for (key, value) in fields {
        let key = format!("{key}:");
        writeln!(out, "{body}\t{key:<width$}{value},")?;
    }

    writeln!(out, "{body}}})")?;
    writeln!(out, "{indent}}}")
}
