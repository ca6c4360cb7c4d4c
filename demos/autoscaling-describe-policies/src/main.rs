/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use applicationautoscaling::input::DescribeScalingPoliciesInput;
use applicationautoscaling::model::ServiceNamespace;
use applicationautoscaling::{Client, Config, Region};
use clap::Parser;
use std::error::Error;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Region of the scalable targets
    #[clap(short, long)]
    region: String,

    /// Service namespace, eg. `ecs` or `dynamodb`
    #[clap(short, long, default_value = "ecs")]
    namespace: ServiceNamespace,

    /// Only list the policies of this resource, eg. `service/default/web-app`
    #[clap(long)]
    resource_id: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned()))
        .init();
    let args = Args::parse();

    let conf = Config::builder().region(Region::new(args.region)).build();
    let client = Client::from_conf(conf)?;

    let mut next_token = None;
    let mut count = 0;
    loop {
        let mut input = DescribeScalingPoliciesInput::builder()
            .service_namespace(args.namespace)
            .max_results(50);
        input.set_resource_id(args.resource_id.clone());
        input.set_next_token(next_token.take());
        let page = client.describe_scaling_policies(input.build())?;
        for policy in page.scaling_policies().into_iter().flatten() {
            count += 1;
            println!(
                "{} ({}) on {}",
                policy.policy_name().map(String::as_str).unwrap_or("<unnamed>"),
                policy.policy_type().map(String::as_str).unwrap_or("?"),
                policy.resource_id().map(String::as_str).unwrap_or("?"),
            );
        }
        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }
    println!("found {} policies", count);
    Ok(())
}
