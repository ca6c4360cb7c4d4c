/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::error::*;
use crate::input::*;
use crate::output::*;
use aws_http::json::{make_operation, JsonOperation, JsonOperationFor};
use aws_hyper::{HttpConnector, Https};
use aws_types::region::Region;
use aws_types::ProvideCredentials;
use smithy_http::operation::BuildError;
use smithy_http::result::{ConnectorError, SdkError};

/// Client for Application Auto Scaling
///
/// Calls block until the response has been received. A client built without a region fails every
/// call with [`SdkError::ConstructionFailure`] before anything is sent.
#[derive(Debug)]
pub struct Client<C = Https> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

impl Client<Https> {
    /// Build a client that sends requests over HTTPS
    pub fn from_conf(conf: Config) -> Result<Self, ConnectorError> {
        let client = aws_hyper::Client::https(conf.timeout_config())?
            .with_retry_config(conf.retry_config().clone());
        Ok(Client { client, conf })
    }

    pub fn with_provider(
        region: Region,
        provider: impl ProvideCredentials + 'static,
    ) -> Result<Self, ConnectorError> {
        Self::from_conf(
            Config::builder()
                .region(region)
                .credentials_provider(provider)
                .build(),
        )
    }
}

impl<C> Client<C> {
    /// Build a client that sends requests through `conn`
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let client = aws_hyper::Client::new(conn).with_retry_config(conf.retry_config().clone());
        Client { client, conf }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }
}

impl<C> Client<C>
where
    C: HttpConnector,
{
    fn send<I>(&self, input: I) -> Result<I::Output, SdkError<I::Error>>
    where
        I: JsonOperation,
    {
        let op = build_operation(&input, &self.conf).map_err(|err| {
            tracing::debug!(operation = I::NAME, error = %err, "failed to construct request");
            SdkError::ConstructionFailure(err.into())
        })?;
        self.client.call(op)
    }
}

fn build_operation<I>(input: &I, conf: &Config) -> Result<JsonOperationFor<I>, BuildError>
where
    I: JsonOperation,
{
    let mut op = make_operation(crate::TARGET_PREFIX, crate::ENDPOINT_PREFIX, input)?;
    conf.configure(&mut op.config_mut());
    Ok(op)
}

macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        $name:literal => $method:ident($input:ident) -> $output:ident, $error:ident;
    )+) => {
        $(
            impl JsonOperation for $input {
                const NAME: &'static str = $name;
                type Output = $output;
                type Error = $error;
            }

            impl $input {
                /// Validate and serialize this input into an operation that can be dispatched
                /// with [`aws_hyper::Client::call`]
                pub fn make_operation(&self, conf: &Config) -> Result<JsonOperationFor<Self>, BuildError> {
                    build_operation(self, conf)
                }
            }
        )+

        /// Every operation of Application Auto Scaling, implemented by [`Client`]
        pub trait ApplicationAutoScaling {
            $(
                $(#[$meta])*
                fn $method(&self, input: $input) -> Result<$output, SdkError<$error>>;
            )+
        }

        impl<C> Client<C>
        where
            C: HttpConnector,
        {
            $(
                $(#[$meta])*
                pub fn $method(&self, input: $input) -> Result<$output, SdkError<$error>> {
                    self.send(input)
                }
            )+
        }

        impl<C> ApplicationAutoScaling for Client<C>
        where
            C: HttpConnector,
        {
            $(
                fn $method(&self, input: $input) -> Result<$output, SdkError<$error>> {
                    Client::$method(self, input)
                }
            )+
        }
    };
}

operations! {
    "DeleteScalingPolicy" => delete_scaling_policy(DeleteScalingPolicyInput) -> DeleteScalingPolicyOutput, DeleteScalingPolicyError;
    "DeleteScheduledAction" => delete_scheduled_action(DeleteScheduledActionInput) -> DeleteScheduledActionOutput, DeleteScheduledActionError;
    /// Deregister a scalable target, deleting its policies and scheduled actions
    "DeregisterScalableTarget" => deregister_scalable_target(DeregisterScalableTargetInput) -> DeregisterScalableTargetOutput, DeregisterScalableTargetError;
    /// Registered scalable targets of a namespace, optionally filtered by resource and dimension
    "DescribeScalableTargets" => describe_scalable_targets(DescribeScalableTargetsInput) -> DescribeScalableTargetsOutput, DescribeScalableTargetsError;
    /// Scaling activities of the previous six weeks
    "DescribeScalingActivities" => describe_scaling_activities(DescribeScalingActivitiesInput) -> DescribeScalingActivitiesOutput, DescribeScalingActivitiesError;
    "DescribeScalingPolicies" => describe_scaling_policies(DescribeScalingPoliciesInput) -> DescribeScalingPoliciesOutput, DescribeScalingPoliciesError;
    "DescribeScheduledActions" => describe_scheduled_actions(DescribeScheduledActionsInput) -> DescribeScheduledActionsOutput, DescribeScheduledActionsError;
    /// Create or update a step scaling or target tracking policy
    "PutScalingPolicy" => put_scaling_policy(PutScalingPolicyInput) -> PutScalingPolicyOutput, PutScalingPolicyError;
    "PutScheduledAction" => put_scheduled_action(PutScheduledActionInput) -> PutScheduledActionOutput, PutScheduledActionError;
    /// Register a resource as a scalable target, or update the capacity bounds of one
    "RegisterScalableTarget" => register_scalable_target(RegisterScalableTargetInput) -> RegisterScalableTargetOutput, RegisterScalableTargetError;
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};
