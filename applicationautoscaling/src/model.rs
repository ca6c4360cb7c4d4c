/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::{closed_enum, shape, Instant};

closed_enum! {
    /// Namespace of the AWS service that provides the scalable resource
    pub enum ServiceNamespace {
        Ecs => "ecs",
        ElasticMapReduce => "elasticmapreduce",
        Ec2 => "ec2",
        AppStream => "appstream",
        DynamoDb => "dynamodb",
        Rds => "rds",
        SageMaker => "sagemaker",
        CustomResource => "custom-resource",
        Comprehend => "comprehend",
        Lambda => "lambda",
        Cassandra => "cassandra",
    }
}

closed_enum! {
    /// The capacity a scalable target scales, as `service:resource-type:property`
    pub enum ScalableDimension {
        EcsServiceDesiredCount => "ecs:service:DesiredCount",
        Ec2SpotFleetRequestTargetCapacity => "ec2:spot-fleet-request:TargetCapacity",
        EmrInstanceGroupInstanceCount => "elasticmapreduce:instancegroup:InstanceCount",
        AppStreamFleetDesiredCapacity => "appstream:fleet:DesiredCapacity",
        DynamoDbTableReadCapacityUnits => "dynamodb:table:ReadCapacityUnits",
        DynamoDbTableWriteCapacityUnits => "dynamodb:table:WriteCapacityUnits",
        DynamoDbIndexReadCapacityUnits => "dynamodb:index:ReadCapacityUnits",
        DynamoDbIndexWriteCapacityUnits => "dynamodb:index:WriteCapacityUnits",
        RdsClusterReadReplicaCount => "rds:cluster:ReadReplicaCount",
        SageMakerVariantDesiredInstanceCount => "sagemaker:variant:DesiredInstanceCount",
        CustomResourceScalableDimension => "custom-resource:ResourceType:Property",
        ComprehendDocClassifierEndpointInferenceUnits => "comprehend:document-classifier-endpoint:DesiredInferenceUnits",
        LambdaFunctionProvisionedConcurrency => "lambda:function:ProvisionedConcurrency",
        KeyspacesReadCapacityUnits => "cassandra:table:ReadCapacityUnits",
        KeyspacesWriteCapacityUnits => "cassandra:table:WriteCapacityUnits",
    }
}

closed_enum! {
    pub enum PolicyType {
        StepScaling => "StepScaling",
        TargetTrackingScaling => "TargetTrackingScaling",
    }
}

closed_enum! {
    /// How the `ScalingAdjustment` of a step is applied to the current capacity
    pub enum AdjustmentType {
        ChangeInCapacity => "ChangeInCapacity",
        PercentChangeInCapacity => "PercentChangeInCapacity",
        ExactCapacity => "ExactCapacity",
    }
}

closed_enum! {
    pub enum MetricAggregationType {
        Average => "Average",
        Minimum => "Minimum",
        Maximum => "Maximum",
    }
}

closed_enum! {
    pub enum MetricStatistic {
        Average => "Average",
        Minimum => "Minimum",
        Maximum => "Maximum",
        SampleCount => "SampleCount",
        Sum => "Sum",
    }
}

closed_enum! {
    /// Metrics a target tracking policy can follow without a custom CloudWatch definition
    pub enum MetricType {
        DynamoDbReadCapacityUtilization => "DynamoDBReadCapacityUtilization",
        DynamoDbWriteCapacityUtilization => "DynamoDBWriteCapacityUtilization",
        AlbRequestCountPerTarget => "ALBRequestCountPerTarget",
        RdsReaderAverageCpuUtilization => "RDSReaderAverageCPUUtilization",
        RdsReaderAverageDatabaseConnections => "RDSReaderAverageDatabaseConnections",
        Ec2SpotFleetRequestAverageCpuUtilization => "EC2SpotFleetRequestAverageCPUUtilization",
        Ec2SpotFleetRequestAverageNetworkIn => "EC2SpotFleetRequestAverageNetworkIn",
        Ec2SpotFleetRequestAverageNetworkOut => "EC2SpotFleetRequestAverageNetworkOut",
        SageMakerVariantInvocationsPerInstance => "SageMakerVariantInvocationsPerInstance",
        EcsServiceAverageCpuUtilization => "ECSServiceAverageCPUUtilization",
        EcsServiceAverageMemoryUtilization => "ECSServiceAverageMemoryUtilization",
        AppStreamAverageCapacityUtilization => "AppStreamAverageCapacityUtilization",
        ComprehendInferenceUtilization => "ComprehendInferenceUtilization",
        LambdaProvisionedConcurrencyUtilization => "LambdaProvisionedConcurrencyUtilization",
        CassandraReadCapacityUtilization => "CassandraReadCapacityUtilization",
        CassandraWriteCapacityUtilization => "CassandraWriteCapacityUtilization",
    }
}

closed_enum! {
    pub enum ScalingActivityStatusCode {
        Pending => "Pending",
        InProgress => "InProgress",
        Successful => "Successful",
        Overridden => "Overridden",
        Unfulfilled => "Unfulfilled",
        Failed => "Failed",
    }
}

/// Characters allowed in a scheduled action name
///
/// Printable characters other than `:`, `/` and `|`.
pub fn scheduled_action_name_char(c: char) -> bool {
    smithy_types::constraint::printable(c) && !matches!(c, ':' | '/' | '|')
}

shape! {
    /// Scaling suspension flags of a scalable target
    pub struct SuspendedState in suspended_state {
        set_dynamic_scaling_in_suspended, dynamic_scaling_in_suspended: bool => "DynamicScalingInSuspended",
        set_dynamic_scaling_out_suspended, dynamic_scaling_out_suspended: bool => "DynamicScalingOutSuspended",
        set_scheduled_scaling_suspended, scheduled_scaling_suspended: bool => "ScheduledScalingSuspended",
    }
}

shape! {
    /// A registered resource together with its capacity bounds
    pub struct ScalableTarget in scalable_target {
        set_service_namespace, service_namespace: String => "ServiceNamespace",
        set_resource_id, resource_id: String => "ResourceId",
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension",
        set_min_capacity, min_capacity: i32 => "MinCapacity",
        set_max_capacity, max_capacity: i32 => "MaxCapacity",
        set_role_arn, role_arn: String => "RoleARN",
        set_creation_time, creation_time: Instant => "CreationTime",
        set_suspended_state, suspended_state: SuspendedState => "SuspendedState",
    }
}

shape! {
    pub struct ScalingActivity in scaling_activity {
        set_activity_id, activity_id: String => "ActivityId",
        set_service_namespace, service_namespace: String => "ServiceNamespace",
        set_resource_id, resource_id: String => "ResourceId",
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension",
        set_description, description: String => "Description",
        set_cause, cause: String => "Cause",
        set_start_time, start_time: Instant => "StartTime",
        set_end_time, end_time: Instant => "EndTime",
        /// A [`ScalingActivityStatusCode`] value
        set_status_code, status_code: String => "StatusCode",
        set_status_message, status_message: String => "StatusMessage",
        set_details, details: String => "Details",
    }
}

shape! {
    /// A CloudWatch alarm attached to a step scaling policy
    pub struct Alarm in alarm {
        set_alarm_name, alarm_name: String => "AlarmName" [required],
        set_alarm_arn, alarm_arn: String => "AlarmARN" [required],
    }
}

shape! {
    /// One step of a step scaling policy
    ///
    /// Bounds are relative to the alarm threshold: the lower bound is inclusive, the upper bound
    /// exclusive, and an absent bound is unbounded in that direction.
    pub struct StepAdjustment in step_adjustment {
        set_metric_interval_lower_bound, metric_interval_lower_bound: f64 => "MetricIntervalLowerBound",
        set_metric_interval_upper_bound, metric_interval_upper_bound: f64 => "MetricIntervalUpperBound",
        set_scaling_adjustment, scaling_adjustment: i32 => "ScalingAdjustment" [required],
    }
}

shape! {
    pub struct StepScalingPolicyConfiguration in step_scaling_policy_configuration {
        set_adjustment_type, adjustment_type: String => "AdjustmentType" [one_of(AdjustmentType)],
        set_step_adjustments, step_adjustments: Vec<StepAdjustment> => "StepAdjustments" [nested_list],
        set_min_adjustment_magnitude, min_adjustment_magnitude: i32 => "MinAdjustmentMagnitude",
        /// Seconds to wait after a scaling activity before the next one may start
        set_cooldown, cooldown: i32 => "Cooldown",
        set_metric_aggregation_type, metric_aggregation_type: String => "MetricAggregationType" [one_of(MetricAggregationType)],
    }
}

shape! {
    pub struct MetricDimension in metric_dimension {
        set_name, name: String => "Name" [required],
        set_value, value: String => "Value" [required],
    }
}

shape! {
    pub struct PredefinedMetricSpecification in predefined_metric_specification {
        set_predefined_metric_type, predefined_metric_type: String => "PredefinedMetricType" [required, one_of(MetricType)],
        /// Identifies the target group for `ALBRequestCountPerTarget`
        set_resource_label, resource_label: String => "ResourceLabel" [length(1, 1023)],
    }
}

shape! {
    /// A CloudWatch metric for a target tracking policy to follow
    pub struct CustomizedMetricSpecification in customized_metric_specification {
        set_metric_name, metric_name: String => "MetricName" [required],
        set_namespace, namespace: String => "Namespace" [required],
        set_dimensions, dimensions: Vec<MetricDimension> => "Dimensions" [nested_list],
        set_statistic, statistic: String => "Statistic" [required, one_of(MetricStatistic)],
        set_unit, unit: String => "Unit",
    }
}

shape! {
    pub struct TargetTrackingScalingPolicyConfiguration in target_tracking_scaling_policy_configuration {
        set_target_value, target_value: f64 => "TargetValue" [required],
        set_predefined_metric_specification, predefined_metric_specification: PredefinedMetricSpecification => "PredefinedMetricSpecification" [nested],
        set_customized_metric_specification, customized_metric_specification: CustomizedMetricSpecification => "CustomizedMetricSpecification" [nested],
        set_scale_out_cooldown, scale_out_cooldown: i32 => "ScaleOutCooldown",
        set_scale_in_cooldown, scale_in_cooldown: i32 => "ScaleInCooldown",
        /// When set, the policy never removes capacity
        set_disable_scale_in, disable_scale_in: bool => "DisableScaleIn",
    }
}

shape! {
    pub struct ScalingPolicy in scaling_policy {
        set_policy_arn, policy_arn: String => "PolicyARN",
        set_policy_name, policy_name: String => "PolicyName",
        set_service_namespace, service_namespace: String => "ServiceNamespace",
        set_resource_id, resource_id: String => "ResourceId",
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension",
        set_policy_type, policy_type: String => "PolicyType",
        set_step_scaling_policy_configuration, step_scaling_policy_configuration: StepScalingPolicyConfiguration => "StepScalingPolicyConfiguration",
        set_target_tracking_scaling_policy_configuration, target_tracking_scaling_policy_configuration: TargetTrackingScalingPolicyConfiguration => "TargetTrackingScalingPolicyConfiguration",
        set_alarms, alarms: Vec<Alarm> => "Alarms",
        set_creation_time, creation_time: Instant => "CreationTime",
    }
}

shape! {
    /// New capacity bounds applied when a scheduled action runs
    pub struct ScalableTargetAction in scalable_target_action {
        set_min_capacity, min_capacity: i32 => "MinCapacity",
        set_max_capacity, max_capacity: i32 => "MaxCapacity",
    }
}

shape! {
    pub struct ScheduledAction in scheduled_action {
        set_scheduled_action_name, scheduled_action_name: String => "ScheduledActionName",
        set_scheduled_action_arn, scheduled_action_arn: String => "ScheduledActionARN",
        set_service_namespace, service_namespace: String => "ServiceNamespace",
        /// `at(yyyy-mm-ddThh:mm:ss)`, `rate(value unit)` or `cron(fields)`
        set_schedule, schedule: String => "Schedule",
        set_resource_id, resource_id: String => "ResourceId",
        set_scalable_dimension, scalable_dimension: String => "ScalableDimension",
        set_start_time, start_time: Instant => "StartTime",
        set_end_time, end_time: Instant => "EndTime",
        set_scalable_target_action, scalable_target_action: ScalableTargetAction => "ScalableTargetAction",
        set_creation_time, creation_time: Instant => "CreationTime",
    }
}
