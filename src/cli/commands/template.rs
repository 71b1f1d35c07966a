//! Template command implementation.
//!
//! Deployment templates are static JSON descriptors consumed verbatim by
//! the provisioning API. `show`/`check` parse them for display; `emit`
//! forwards the raw bytes untouched so the artifact is never rewritten.

use std::fs;
use std::path::Path;

use podium_lib::VmTemplate;

use crate::cli::{TemplateCommand, TemplateSubcommand};
use crate::config::Config;
use crate::error::Result;
use crate::format::{TemplateSummary, format_template_summary};

/// Execute the template command.
///
/// # Errors
///
/// Returns an error if the template cannot be read or parsed, or if output
/// serialization fails.
pub fn execute(command: &TemplateCommand, config: &Config, json: bool) -> Result<()> {
    match &command.command {
        Some(TemplateSubcommand::Show(args)) => {
            show(&config.resolve_template(&args.template), config, json)
        }
        Some(TemplateSubcommand::Check(args)) => {
            check(&config.resolve_template(&args.template), json)
        }
        Some(TemplateSubcommand::Emit(args)) => emit(&config.resolve_template(&args.template)),
        Some(TemplateSubcommand::Schema) => schema(),
        None => list(config, json),
    }
}

fn show(path: &Path, config: &Config, json: bool) -> Result<()> {
    let template = VmTemplate::load(path)?;
    let summary = TemplateSummary::from_template(&template);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_template_summary(&summary, &config.filler));
    }
    Ok(())
}

fn check(path: &Path, json: bool) -> Result<()> {
    let template = VmTemplate::load(path)?;
    let roles = template.virtual_environments.len();
    let endpoints = template.endpoints().count();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "ok": true,
                "expr_name": template.expr_name,
                "roles": roles,
                "endpoints": endpoints,
            }))?
        );
    } else {
        println!("OK: {} ({roles} roles, {endpoints} endpoints)", template.expr_name);
    }
    Ok(())
}

fn emit(path: &Path) -> Result<()> {
    let raw = VmTemplate::read_raw(path)?;
    print!("{raw}");
    Ok(())
}

fn schema() -> Result<()> {
    let schema = schemars::schema_for!(VmTemplate);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn list(config: &Config, json: bool) -> Result<()> {
    let dir = &config.templates_dir;
    let mut names = Vec::new();
    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
    }
    names.sort();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else if names.is_empty() {
        println!("No templates found in {}", dir.display());
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}
