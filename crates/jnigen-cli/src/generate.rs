//! `generate` and `check` command implementations

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use jnigen_codegen::{JniFieldCodegen, generate_type_handlers};
use jnigen_model::load_model;
use std::path::Path;

/// Load the model document and write the generated fragment blob.
pub fn run(model: Option<String>, output: Option<String>, manifest: Option<String>) -> Result<()> {
    let manifest = Manifest::resolve(manifest.as_deref())?;
    let model_path = model
        .or(manifest.model)
        .context("no model document given (pass --model or set `model` in jnigen.toml)")?;
    let output = output
        .or(manifest.output)
        .context("no output path given (pass --output or set `output` in jnigen.toml)")?;

    let model = load_model(Path::new(&model_path))
        .with_context(|| format!("failed to load model document {model_path}"))?;
    let handlers = generate_type_handlers(&model, &JniFieldCodegen)?;

    if output == "-" {
        println!("{handlers}");
    } else {
        std::fs::write(&output, &handlers)
            .with_context(|| format!("failed to write {output}"))?;
        tracing::info!(
            "wrote type handlers for {} model types to {}",
            model.types.len(),
            output
        );
    }

    Ok(())
}

/// Validate that the model document loads.
pub fn check(model: Option<String>, manifest: Option<String>) -> Result<()> {
    let manifest = Manifest::resolve(manifest.as_deref())?;
    let model_path = model
        .or(manifest.model)
        .context("no model document given (pass --model or set `model` in jnigen.toml)")?;

    let model = load_model(Path::new(&model_path))
        .with_context(|| format!("failed to load model document {model_path}"))?;
    println!("OK: {} ({} types)", model_path, model.types.len());

    Ok(())
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
