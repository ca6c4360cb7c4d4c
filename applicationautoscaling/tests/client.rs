/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use applicationautoscaling::error::{PutScalingPolicyErrorKind, RegisterScalableTargetError};
use applicationautoscaling::input::{
    DescribeScalableTargetsInput, DescribeScalingPoliciesInput, PutScalingPolicyInput,
    RegisterScalableTargetInput,
};
use applicationautoscaling::model::{
    AdjustmentType, PolicyType, ScalableDimension, ServiceNamespace, StepAdjustment,
    StepScalingPolicyConfiguration,
};
use applicationautoscaling::{Client, Config, Credentials, Region, RetryConfig, SdkError};
use aws_hyper::test_connection::TestConnection;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Uri;
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_ok, require_headers, validate_body, validate_headers};
use smithy_http::body::SdkBody;

fn test_config(region: Option<&'static str>) -> Config {
    let mut builder = Config::builder()
        .credentials_provider(Credentials::from_keys("access_key", "secret_key", None))
        .retry_config(RetryConfig::new().with_static_base(|| 0_f64));
    builder.set_region(region.map(Region::new));
    builder.build()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

fn any_request() -> http::Request<SdkBody> {
    http::Request::new(SdkBody::empty())
}

fn dynamo_table_target() -> RegisterScalableTargetInput {
    RegisterScalableTargetInput::builder()
        .service_namespace(ServiceNamespace::DynamoDb)
        .resource_id("table/Music")
        .scalable_dimension(ScalableDimension::DynamoDbTableReadCapacityUnits)
        .min_capacity(5)
        .max_capacity(100)
        .build()
}

#[test]
fn requests_are_sent_to_the_regional_endpoint() {
    let conn = TestConnection::new(vec![(
        any_request(),
        response(
            200,
            r#"{"ScalableTargets":[{"ServiceNamespace":"ecs","ResourceId":"service/default/web-app","ScalableDimension":"ecs:service:DesiredCount","MinCapacity":1,"MaxCapacity":10,"RoleARN":"arn:aws:iam::012345678910:role/aws-service-role/ecs.application-autoscaling.amazonaws.com/AWSServiceRoleForApplicationAutoScaling_ECSService","CreationTime":1.462558906199E9,"SuspendedState":{"DynamicScalingInSuspended":false,"DynamicScalingOutSuspended":false,"ScheduledScalingSuspended":false}}]}"#,
        ),
    )]);
    let client = Client::from_conf_conn(test_config(Some("us-west-2")), conn.clone());
    let output = client
        .describe_scalable_targets(
            DescribeScalableTargetsInput::builder()
                .service_namespace(ServiceNamespace::Ecs)
                .build(),
        )
        .expect("request succeeds");
    let target = &output.scalable_targets().expect("targets")[0];
    assert_eq!(target.max_capacity(), Some(&10));
    assert_eq!(
        target
            .suspended_state()
            .and_then(|state| state.scheduled_scaling_suspended()),
        Some(&false)
    );

    let requests = conn.requests();
    let request = &requests[0].actual;
    assert_eq!(
        request.uri(),
        &Uri::from_static("https://application-autoscaling.us-west-2.amazonaws.com/")
    );
    assert_eq!(request.method(), http::Method::POST);
    assert_ok(validate_headers(
        request,
        &[
            ("x-amz-target", "AnyScaleFrontendService.DescribeScalableTargets"),
            (CONTENT_TYPE.as_str(), "application/x-amz-json-1.1"),
        ],
    ));
    assert_ok(require_headers(request, &["x-amz-date", "x-amz-user-agent"]));
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .expect("signed request");
    assert!(
        authorization.contains("/us-west-2/application-autoscaling/aws4_request"),
        "{}",
        authorization
    );
    assert_ok(validate_body(
        request.body().bytes().expect("buffered body"),
        r#"{"ServiceNamespace":"ecs"}"#,
    ));
}

#[test]
fn missing_region_fails_before_sending() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(test_config(None), conn.clone());
    let err = client
        .register_scalable_target(dynamo_table_target())
        .expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert_eq!(conn.requests().len(), 0);
}

#[test]
fn client_faults_are_not_retried() {
    let conn = TestConnection::new(vec![
        (
            any_request(),
            response(
                400,
                r#"{"__type":"LimitExceededException","Message":"Maximum number of scalable targets reached"}"#,
            ),
        ),
        (any_request(), response(200, "{}")),
    ]);
    let client = Client::from_conf_conn(test_config(Some("eu-west-1")), conn.clone());
    let err: RegisterScalableTargetError = client
        .register_scalable_target(dynamo_table_target())
        .expect_err("limit exceeded")
        .into_service_error()
        .expect("service error");
    assert!(err.is_limit_exceeded_exception());
    assert_eq!(err.code(), Some("LimitExceededException"));
    assert_eq!(conn.requests().len(), 1);
}

#[test]
fn server_faults_are_retried() {
    let conn = TestConnection::new(vec![
        (
            any_request(),
            response(500, r#"{"__type":"InternalServiceException","Message":"try again"}"#),
        ),
        (
            any_request(),
            response(
                200,
                r#"{"PolicyARN":"arn:aws:autoscaling:eu-west-1:012345678910:scalingPolicy:ac542982-cbeb-4294-891c-a5a941dfa787:resource/ecs/service/default/web-app:policyName/web-app-cpu-gt-75"}"#,
            ),
        ),
    ]);
    let client = Client::from_conf_conn(test_config(Some("eu-west-1")), conn.clone());
    let output = client
        .put_scaling_policy(
            PutScalingPolicyInput::builder()
                .policy_name("web-app-cpu-gt-75")
                .service_namespace(ServiceNamespace::Ecs)
                .resource_id("service/default/web-app")
                .scalable_dimension(ScalableDimension::EcsServiceDesiredCount)
                .policy_type(PolicyType::StepScaling)
                .step_scaling_policy_configuration(
                    StepScalingPolicyConfiguration::builder()
                        .adjustment_type(AdjustmentType::PercentChangeInCapacity)
                        .step_adjustments(vec![StepAdjustment::builder()
                            .metric_interval_lower_bound(0.0)
                            .scaling_adjustment(200)
                            .build()])
                        .cooldown(60)
                        .build(),
                )
                .build(),
        )
        .expect("second attempt succeeds");
    assert!(output
        .policy_arn()
        .expect("policy arn")
        .ends_with("policyName/web-app-cpu-gt-75"));
    let requests = conn.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].actual.body().bytes(),
        requests[1].actual.body().bytes()
    );
}

#[test]
fn server_fault_is_reported_after_the_last_attempt() {
    let failure = r#"{"__type":"ConcurrentUpdateException","Message":"busy"}"#;
    let conn = TestConnection::new(vec![
        (any_request(), response(500, failure)),
        (any_request(), response(500, failure)),
        (any_request(), response(500, failure)),
    ]);
    let client = Client::from_conf_conn(test_config(Some("eu-west-1")), conn.clone());
    let err = client
        .put_scaling_policy(
            PutScalingPolicyInput::builder()
                .policy_name("p")
                .service_namespace(ServiceNamespace::Ecs)
                .resource_id("service/default/web-app")
                .scalable_dimension(ScalableDimension::EcsServiceDesiredCount)
                .build(),
        )
        .expect_err("every attempt fails")
        .into_service_error()
        .expect("service error");
    assert!(matches!(
        err.kind,
        PutScalingPolicyErrorKind::ConcurrentUpdateException(_)
    ));
    assert_eq!(err.message(), Some("busy"));
    assert_eq!(conn.requests().len(), 3);
}

#[test]
fn next_token_is_passed_back_unchanged() {
    let conn = TestConnection::new(vec![
        (
            any_request(),
            response(
                200,
                r#"{"ScalingPolicies":[{"PolicyName":"a"}],"NextToken":"eyJwIjoyfQ=="}"#,
            ),
        ),
        (
            any_request(),
            response(200, r#"{"ScalingPolicies":[{"PolicyName":"b"}]}"#),
        ),
    ]);
    let client = Client::from_conf_conn(test_config(Some("us-east-1")), conn.clone());
    let mut names = Vec::new();
    let mut next_token = None;
    loop {
        let mut input = DescribeScalingPoliciesInput::builder()
            .service_namespace(ServiceNamespace::Ecs)
            .max_results(1);
        input.set_next_token(next_token.take());
        let page = client
            .describe_scaling_policies(input.build())
            .expect("page");
        names.extend(
            page.scaling_policies()
                .into_iter()
                .flatten()
                .filter_map(|policy| policy.policy_name().cloned()),
        );
        match page.next_token() {
            Some(token) => next_token = Some(token.clone()),
            None => break,
        }
    }
    assert_eq!(names, vec!["a", "b"]);
    assert_ok(validate_body(
        conn.requests()[1].actual.body().bytes().expect("buffered body"),
        r#"{"ServiceNamespace":"ecs","MaxResults":1,"NextToken":"eyJwIjoyfQ=="}"#,
    ));
}

#[test]
fn invalid_input_is_never_sent() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(test_config(Some("us-east-1")), conn.clone());
    let err = client
        .describe_scalable_targets(
            DescribeScalableTargetsInput::builder()
                .service_namespace(ServiceNamespace::Ecs)
                .scalable_dimension("ecs:service:Desired")
                .build(),
        )
        .expect_err("unknown dimension");
    match err {
        SdkError::ConstructionFailure(err) => {
            assert!(err.to_string().contains("ScalableDimension"), "{}", err)
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 0);
}
