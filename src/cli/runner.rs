//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::{CatFactsClient, ClientConfig};
use crate::error::{Error, Result};
use crate::models::{Breed, Fact};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return what would be printed
    pub async fn execute(&self) -> Result<String> {
        let client = self.client()?;
        debug!("Running {:?} with {:?}", self.cli.command, client);

        match self.cli.command {
            Commands::Fact => {
                let fact = client.get_random_fact().await?;
                self.render(&fact, |out| {
                    out.push_str(&fact.fact);
                })
            }
            Commands::Breeds => {
                let breeds = client.list_all_breeds().await?;
                self.render(&breeds, |out| {
                    for breed in &breeds {
                        push_line(out, &format_breed(breed));
                    }
                })
            }
            Commands::Facts => {
                let facts = client.list_all_facts().await?;
                self.render(&facts, |out| {
                    for fact in &facts {
                        push_line(out, &format_fact(fact));
                    }
                })
            }
        }
    }

    /// Build the client from the config file and command-line overrides
    fn client(&self) -> Result<CatFactsClient> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }

        config.build_client()
    }

    /// Render a value in the selected output format
    fn render<T, F>(&self, value: &T, pretty: F) -> Result<String>
    where
        T: Serialize,
        F: FnOnce(&mut String),
    {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map_err(|e| Error::config(format!("Failed to serialize output: {e}"))),
            OutputFormat::Pretty => {
                let mut out = String::new();
                pretty(&mut out);
                Ok(out.trim_end().to_string())
            }
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    let _ = writeln!(out, "{line}");
}

fn format_breed(breed: &Breed) -> String {
    format!(
        "{} ({}) - origin: {}, coat: {}, pattern: {}",
        breed.breed, breed.country, breed.origin, breed.coat, breed.pattern
    )
}

fn format_fact(fact: &Fact) -> String {
    format!("- {}", fact.fact)
}
