/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs
//!
//! `ServiceNamespace` and `ScalableDimension` hold the canonical string of a
//! [`ServiceNamespace`](crate::model::ServiceNamespace) or
//! [`ScalableDimension`](crate::model::ScalableDimension); builders accept either the enum or a
//! string. Anything outside the closed set is rejected before the request is sent.

use crate::model::{
    scheduled_action_name_char, PolicyType, ScalableDimension, ScalableTargetAction,
    ServiceNamespace, StepScalingPolicyConfiguration, SuspendedState,
    TargetTrackingScalingPolicyConfiguration,
};
use smithy_types::constraint::{printable, xml_char};
use smithy_types::{shape, Instant};

shape! {
    pub struct DeleteScalingPolicyInput in delete_scaling_policy_input {
        set_policy_name, policy_name: String => "PolicyName" [required, length(1, 256), pattern(printable)],
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_id, resource_id: String => "ResourceId" [required, length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [required, one_of(ScalableDimension)],
    }
}

shape! {
    pub struct DeleteScheduledActionInput in delete_scheduled_action_input {
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_scheduled_action_name, scheduled_action_name: String => "ScheduledActionName" [required, length(1, 1600), pattern(xml_char)],
        set_resource_id, resource_id: String => "ResourceId" [required, length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [required, one_of(ScalableDimension)],
    }
}

shape! {
    /// Deregistering a scalable target also deletes its scaling policies and scheduled actions
    pub struct DeregisterScalableTargetInput in deregister_scalable_target_input {
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_id, resource_id: String => "ResourceId" [required, length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [required, one_of(ScalableDimension)],
    }
}

shape! {
    pub struct DescribeScalableTargetsInput in describe_scalable_targets_input {
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_ids, resource_ids: Vec<String> => "ResourceIds",
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [one_of(ScalableDimension)],
        set_max_results, max_results: i32 => "MaxResults" [range(1, 50)],
        set_next_token, next_token: String => "NextToken" [pattern(xml_char)],
    }
}

shape! {
    pub struct DescribeScalingActivitiesInput in describe_scaling_activities_input {
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_id, resource_id: String => "ResourceId" [length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [one_of(ScalableDimension)],
        set_max_results, max_results: i32 => "MaxResults" [range(1, 50)],
        set_next_token, next_token: String => "NextToken" [pattern(xml_char)],
    }
}

shape! {
    pub struct DescribeScalingPoliciesInput in describe_scaling_policies_input {
        set_policy_names, policy_names: Vec<String> => "PolicyNames",
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_id, resource_id: String => "ResourceId" [length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [one_of(ScalableDimension)],
        set_max_results, max_results: i32 => "MaxResults" [range(1, 50)],
        set_next_token, next_token: String => "NextToken" [pattern(xml_char)],
    }
}

shape! {
    pub struct DescribeScheduledActionsInput in describe_scheduled_actions_input {
        set_scheduled_action_names, scheduled_action_names: Vec<String> => "ScheduledActionNames",
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_id, resource_id: String => "ResourceId" [length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [one_of(ScalableDimension)],
        set_max_results, max_results: i32 => "MaxResults" [range(1, 50)],
        set_next_token, next_token: String => "NextToken" [pattern(xml_char)],
    }
}

shape! {
    /// Create or update a scaling policy for a registered scalable target
    ///
    /// Set the configuration matching `PolicyType`: `StepScalingPolicyConfiguration` for
    /// `StepScaling`, `TargetTrackingScalingPolicyConfiguration` for `TargetTrackingScaling`.
    pub struct PutScalingPolicyInput in put_scaling_policy_input {
        set_policy_name, policy_name: String => "PolicyName" [required, length(1, 256), pattern(printable)],
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_id, resource_id: String => "ResourceId" [required, length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [required, one_of(ScalableDimension)],
        set_policy_type, policy_type: String => "PolicyType" [one_of(PolicyType)],
        set_step_scaling_policy_configuration, step_scaling_policy_configuration: StepScalingPolicyConfiguration => "StepScalingPolicyConfiguration" [nested],
        set_target_tracking_scaling_policy_configuration, target_tracking_scaling_policy_configuration: TargetTrackingScalingPolicyConfiguration => "TargetTrackingScalingPolicyConfiguration" [nested],
    }
}

shape! {
    pub struct PutScheduledActionInput in put_scheduled_action_input {
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        /// `at(yyyy-mm-ddThh:mm:ss)`, `rate(value unit)` or `cron(fields)`
        set_schedule, schedule: String => "Schedule" [length(1, 1600), pattern(xml_char)],
        set_scheduled_action_name, scheduled_action_name: String => "ScheduledActionName" [required, length(1, 256), pattern(scheduled_action_name_char)],
        set_resource_id, resource_id: String => "ResourceId" [required, length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [required, one_of(ScalableDimension)],
        set_start_time, start_time: Instant => "StartTime",
        set_end_time, end_time: Instant => "EndTime",
        set_scalable_target_action, scalable_target_action: ScalableTargetAction => "ScalableTargetAction",
    }
}

shape! {
    /// Register a resource as a scalable target, or update the bounds of one already registered
    pub struct RegisterScalableTargetInput in register_scalable_target_input {
        set_service_namespace, service_namespace: String => "ServiceNamespace" [required, one_of(ServiceNamespace)],
        set_resource_id, resource_id: String => "ResourceId" [required, length(1, 1600), pattern(xml_char)],
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension" [required, one_of(ScalableDimension)],
        set_min_capacity, min_capacity: i32 => "MinCapacity",
        set_max_capacity, max_capacity: i32 => "MaxCapacity",
        set_role_arn, role_arn: String => "RoleARN" [length(1, 1600), pattern(xml_char)],
        set_suspended_state, suspended_state: SuspendedState => "SuspendedState",
    }
}
