//! AWS SDK for Rust list functions.
//!
//! Every unit is a child module of the generated directory's `mod.rs` and
//! expects `Client`, `Resource` and `Result` to be in scope of its parent.
//! `Client` exposes one SDK client per service (`client.ec2()`) together with
//! the `profile`, `region` and `account_id` of the caller; `Resource`
//! implements `Default`.

use std::fmt::{self, Write};

use awslist_model::ShapeType;

use super::{Emitter, GENERATED_HEADER};
use crate::catalog::InputValue;
use crate::fragment::{TagsFragment, TimestampSource};
use crate::naming::rust_ident;
use crate::resolve::Resolution;

/// `chrono` format of string creation times, RFC 3339 with milliseconds.
pub const RUST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%#z";

/// Emits one module per resource type plus a `mod.rs` dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl RustEmitter {
    fn function_ident(r: &Resolution) -> String {
        rust_ident(&format!("List{}", r.function_name))
    }
}

impl Emitter for RustEmitter {
    fn file_name(&self, resource_type: &str) -> String {
        format!("{resource_type}.rs")
    }

    fn render(&self, r: &Resolution) -> Result<String, fmt::Error> {
        let mut out = String::with_capacity(2048);

        writeln!(out, "{GENERATED_HEADER}")?;
        writeln!(out)?;
        if matches!(r.tags, Some(TagsFragment::List { .. })) {
            writeln!(out, "use std::collections::HashMap;")?;
            writeln!(out)?;
        }
        if let Some(time) = &r.creation_time {
            let chrono = match time.source {
                TimestampSource::String | TimestampSource::Native => "DateTime, Utc",
                TimestampSource::EpochMillis => "TimeZone, Utc",
            };
            writeln!(out, "use chrono::{{{chrono}}};")?;
            writeln!(out)?;
        }
        writeln!(out, "use super::{{Client, Resource, Result}};")?;
        writeln!(out)?;

        writeln!(
            out,
            "pub async fn {}(client: &Client) -> Result<Vec<Resource>> {{",
            Self::function_ident(r)
        )?;
        writeln!(out, "    let mut result = Vec::new();")?;
        writeln!(out)?;

        let call = call_chain(r)?;
        let field = rust_ident(&r.output_field);
        if r.paginated {
            writeln!(out, "    let mut pages = client{call}")?;
            writeln!(out, "        .into_paginator()")?;
            writeln!(out, "        .send();")?;
            writeln!(out, "    while let Some(page) = pages.next().await {{")?;
            writeln!(out, "        let resp = page?;")?;
            write_loop(&mut out, r, &field, "        ")?;
            writeln!(out, "    }}")?;
        } else {
            writeln!(out, "    let resp = client{call}")?;
            writeln!(out, "        .send()")?;
            writeln!(out, "        .await?;")?;
            write_loop(&mut out, r, &field, "    ")?;
        }

        writeln!(out)?;
        writeln!(out, "    Ok(result)")?;
        writeln!(out, "}}")?;
        Ok(out)
    }

    fn render_index(
        &self,
        resolutions: &[Resolution],
    ) -> Result<Option<(String, String)>, fmt::Error> {
        let mut out = String::with_capacity(64 * resolutions.len() + 512);

        writeln!(out, "{GENERATED_HEADER}")?;
        writeln!(out)?;
        for r in resolutions {
            writeln!(out, "mod {};", r.resource_type)?;
        }
        writeln!(out)?;
        for r in resolutions {
            writeln!(out, "pub use {}::{};", r.resource_type, Self::function_ident(r))?;
        }
        writeln!(out)?;
        writeln!(out, "use super::{{Client, Resource, Result}};")?;
        writeln!(out)?;
        writeln!(out, "/// Resource types with a generated list function.")?;
        writeln!(out, "pub const RESOURCE_TYPES: &[&str] = &[")?;
        for r in resolutions {
            writeln!(out, "    {:?},", r.resource_type)?;
        }
        writeln!(out, "];")?;
        writeln!(out)?;
        writeln!(
            out,
            "/// List all resources of `resource_type`; `None` if it has no list function."
        )?;
        writeln!(
            out,
            "pub async fn list(client: &Client, resource_type: &str) -> Result<Option<Vec<Resource>>> {{"
        )?;
        writeln!(out, "    let resources = match resource_type {{")?;
        for r in resolutions {
            writeln!(
                out,
                "        {:?} => {}(client).await?,",
                r.resource_type,
                Self::function_ident(r)
            )?;
        }
        writeln!(out, "        _ => return Ok(None),")?;
        writeln!(out, "    }};")?;
        writeln!(out, "    Ok(Some(resources))")?;
        writeln!(out, "}}")?;

        Ok(Some(("mod.rs".to_owned(), out)))
    }
}

/// `.service().operation()` followed by one builder call per fixed input.
fn call_chain(r: &Resolution) -> Result<String, fmt::Error> {
    let mut call = String::new();
    writeln!(call)?;
    writeln!(call, "        .{}()", rust_ident(&r.service))?;
    write!(call, "        .{}()", rust_ident(&r.operation))?;
    for (name, value) in &r.inputs {
        let setter = rust_ident(name);
        let values = match value {
            InputValue::Single(v) => std::slice::from_ref(v),
            InputValue::List(vs) => vs.as_slice(),
        };
        for v in values {
            write!(call, "\n        .{setter}({v:?})")?;
        }
    }
    Ok(call)
}

/// The loop over the output field, at indentation `indent`.
fn write_loop(out: &mut String, r: &Resolution, field: &str, indent: &str) -> fmt::Result {
    let body = format!("{indent}    ");
    writeln!(out, "{indent}for r in resp.{field}() {{")?;

    if let Some(owner) = &r.owner {
        writeln!(
            out,
            "{body}if r.{}() != Some(client.account_id.as_str()) {{",
            rust_ident(&owner.field)
        )?;
        writeln!(out, "{body}    continue;")?;
        writeln!(out, "{body}}}")?;
    }

    if let Some(tags) = &r.tags {
        let accessor = rust_ident(tags.field());
        match tags {
            TagsFragment::List { .. } => {
                writeln!(out, "{body}let mut tags = HashMap::new();")?;
                writeln!(out, "{body}for t in r.{accessor}() {{")?;
                writeln!(out, "{body}    tags.insert(")?;
                writeln!(out, "{body}        t.key().unwrap_or_default().to_owned(),")?;
                writeln!(out, "{body}        t.value().unwrap_or_default().to_owned(),")?;
                writeln!(out, "{body}    );")?;
                writeln!(out, "{body}}}")?;
            }
            TagsFragment::Map { .. } => {
                writeln!(out, "{body}let tags = r.{accessor}().cloned().unwrap_or_default();")?;
            }
        }
    }

    if let Some(time) = &r.creation_time {
        let accessor = rust_ident(&time.field);
        match time.source {
            TimestampSource::String => {
                writeln!(out, "{body}let created_at = r")?;
                writeln!(out, "{body}    .{accessor}()")?;
                writeln!(out, "{body}    .map(|s| {{")?;
                writeln!(
                    out,
                    "{body}        DateTime::parse_from_str(s, {RUST_TIME_FORMAT:?})"
                )?;
                writeln!(out, "{body}            .map(|t| t.with_timezone(&Utc))")?;
                writeln!(out, "{body}    }})")?;
                writeln!(out, "{body}    .transpose()?;")?;
            }
            TimestampSource::Native => {
                writeln!(out, "{body}let created_at = r")?;
                writeln!(out, "{body}    .{accessor}()")?;
                writeln!(
                    out,
                    "{body}    .and_then(|t| DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos()));"
                )?;
            }
            TimestampSource::EpochMillis => {
                writeln!(out, "{body}let created_at = r")?;
                writeln!(out, "{body}    .{accessor}()")?;
                writeln!(out, "{body}    .map(|ms| Utc.timestamp_nanos(ms * 1_000_000));")?;
            }
        }
    }

    let id = rust_ident(&r.resource_id.field);
    if r.resource_id.kind == ShapeType::String {
        writeln!(out, "{body}let id = r.{id}().unwrap_or_default().to_owned();")?;
    } else {
        writeln!(
            out,
            "{body}let id = r.{id}().map(|v| v.to_string()).unwrap_or_default();"
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{body}result.push(Resource {{")?;
    writeln!(out, "{body}    resource_type: {:?}.to_owned(),", r.resource_type)?;
    writeln!(out, "{body}    id,")?;
    writeln!(out, "{body}    profile: client.profile.clone(),")?;
    writeln!(out, "{body}    region: client.region.clone(),")?;
    writeln!(out, "{body}    account_id: client.account_id.clone(),")?;
    if r.tags.is_some() {
        writeln!(out, "{body}    tags,")?;
    }
    if r.creation_time.is_some() {
        writeln!(out, "{body}    created_at,")?;
    }
    writeln!(out, "{body}    ..Default::default()")?;
    writeln!(out, "{body}}});")?;
    writeln!(out, "{indent}}}")
}
