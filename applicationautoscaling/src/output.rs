/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs
//!
//! `Describe*` outputs carry a `NextToken` while more results remain; pass it back unchanged in
//! the next request to continue.

use crate::model::{Alarm, ScalableTarget, ScalingActivity, ScalingPolicy, ScheduledAction};
use smithy_types::shape;

shape! {
    pub struct DeleteScalingPolicyOutput in delete_scaling_policy_output {}
}

shape! {
    pub struct DeleteScheduledActionOutput in delete_scheduled_action_output {}
}

shape! {
    pub struct DeregisterScalableTargetOutput in deregister_scalable_target_output {}
}

shape! {
    pub struct DescribeScalableTargetsOutput in describe_scalable_targets_output {
        set_scalable_targets, scalable_targets: Vec<ScalableTarget> => "ScalableTargets",
        set_next_token, next_token: String => "NextToken",
    }
}

shape! {
    pub struct DescribeScalingActivitiesOutput in describe_scaling_activities_output {
        set_scaling_activities, scaling_activities: Vec<ScalingActivity> => "ScalingActivities",
        set_next_token, next_token: String => "NextToken",
    }
}

shape! {
    pub struct DescribeScalingPoliciesOutput in describe_scaling_policies_output {
        set_scaling_policies, scaling_policies: Vec<ScalingPolicy> => "ScalingPolicies",
        set_next_token, next_token: String => "NextToken",
    }
}

shape! {
    pub struct DescribeScheduledActionsOutput in describe_scheduled_actions_output {
        set_scheduled_actions, scheduled_actions: Vec<ScheduledAction> => "ScheduledActions",
        set_next_token, next_token: String => "NextToken",
    }
}

shape! {
    pub struct PutScalingPolicyOutput in put_scaling_policy_output {
        set_policy_arn, policy_arn: String => "PolicyARN",
        /// Alarms created for a target tracking policy
        set_alarms, alarms: Vec<Alarm> => "Alarms",
    }
}

shape! {
    pub struct PutScheduledActionOutput in put_scheduled_action_output {}
}

shape! {
    pub struct RegisterScalableTargetOutput in register_scalable_target_output {}
}
