use anyhow::{Context, Result};
use colored::Colorize;
use envreg_server::RegistryClient;
use std::path::Path;

pub(crate) async fn list(client: &RegistryClient, json: bool) -> Result<()> {
    let mut records = client.list().await?;
    records.sort_by(|a, b| a.env_name().cmp(&b.env_name()));

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No environments registered.".yellow());
        return Ok(());
    }

    for record in records {
        let name = record.env_name().unwrap_or_default().to_string();
        println!("{}\t{}", name.bold(), serde_json::to_string(&record)?);
    }
    Ok(())
}

pub(crate) async fn get(client: &RegistryClient, name: &str) -> Result<()> {
    match client.get(name).await? {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => println!("{}", format!("No environment named '{}'.", name).yellow()),
    }
    Ok(())
}

pub(crate) async fn put(
    client: &RegistryClient,
    record: Option<String>,
    file: Option<&Path>,
) -> Result<()> {
    let body = match (record, file) {
        (Some(record), _) => record,
        (None, Some(file)) => std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?,
        (None, None) => anyhow::bail!("Provide the record as an argument or with --file"),
    };

    let message = client.put_raw(body).await?;
    println!("{}", message.green());
    Ok(())
}

pub(crate) async fn delete(client: &RegistryClient, name: &str) -> Result<()> {
    let message = client.delete(name).await?;
    println!("{}", message.green());
    Ok(())
}
