/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use clap::Parser;
use route53domains::input::{CheckDomainAvailabilityInput, GetDomainSuggestionsInput};
use route53domains::model::DomainAvailability;
use route53domains::{Client, Config, Route53Domains};
use std::error::Error;

/// Check whether domain names can be registered, and suggest alternatives for those that can't
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Domain names to check
    #[clap(required = true)]
    domains: Vec<String>,

    /// Number of alternatives to suggest for an unavailable name
    #[clap(long, default_value_t = 5)]
    suggestions: i32,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned()))
        .init();
    let args = Args::parse();

    // Credentials are read from AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY
    let client = Client::from_conf(Config::builder().build())?;
    for domain in &args.domains {
        check(&client, domain, args.suggestions)?;
    }
    Ok(())
}

fn check(
    domains: &impl Route53Domains,
    domain: &str,
    suggestions: i32,
) -> Result<(), Box<dyn Error>> {
    let output = domains.check_domain_availability(
        CheckDomainAvailabilityInput::builder()
            .domain_name(domain)
            .build(),
    )?;
    let availability = output
        .availability()
        .map(|a| a.parse::<DomainAvailability>())
        .transpose()?;
    match availability {
        Some(DomainAvailability::Available) => println!("{}: available", domain),
        Some(other) => {
            println!("{}: {}", domain, other);
            let alternatives = domains.get_domain_suggestions(
                GetDomainSuggestionsInput::builder()
                    .domain_name(domain)
                    .suggestion_count(suggestions)
                    .only_available(true)
                    .build(),
            )?;
            for suggestion in alternatives.suggestions_list().into_iter().flatten() {
                if let Some(name) = suggestion.domain_name() {
                    println!("  try {}", name);
                }
            }
        }
        None => println!("{}: availability unknown", domain),
    }
    Ok(())
}
