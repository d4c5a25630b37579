//! Search CLI command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::process::ExitCode;

use crate::adapters::capabilities::SearchCapability;
use crate::cli::output::{output, CommandOutput};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query, e.g. "tesla outlook"
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    /// Keyword that matched; absent when the fallback was returned
    pub keyword: Option<String>,
    pub result: String,
}

impl CommandOutput for SearchOutput {
    fn to_human(&self) -> String {
        match &self.keyword {
            Some(keyword) => format!("[{keyword}] {}", self.result),
            None => format!("[no match] {}", self.result),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn search(query: &str) -> SearchOutput {
    let capability = SearchCapability::new();
    SearchOutput {
        query: query.to_string(),
        keyword: capability.matched_keyword(query).map(str::to_string),
        result: capability.search(query),
    }
}

pub fn execute(args: SearchArgs, json_mode: bool) -> Result<ExitCode> {
    output(&search(&args.query), json_mode);
    Ok(ExitCode::SUCCESS)
}
