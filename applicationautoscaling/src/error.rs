/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Application Auto Scaling
//!
//! `ConcurrentUpdateException` and `InternalServiceException` are server faults and are retried
//! by the client. Every other named error is a client fault and is returned on the first attempt.

use aws_http::{modeled_error, operation_error};

modeled_error! {
    /// A parameter was not valid, eg. a scalable dimension that does not belong to the namespace
    ValidationException = "ValidationException", client
}

modeled_error! {
    /// The scalable target, policy or scheduled action does not exist
    ObjectNotFoundException = "ObjectNotFoundException", client
}

modeled_error! {
    /// Another request is updating the same resource
    ConcurrentUpdateException = "ConcurrentUpdateException", server
}

modeled_error! {
    InternalServiceException = "InternalServiceException", server
}

modeled_error! {
    /// The `NextToken` was not returned by a previous call
    InvalidNextTokenException = "InvalidNextTokenException", client
}

modeled_error! {
    /// A quota for the account, eg. the number of scalable targets, was reached
    LimitExceededException = "LimitExceededException", client
}

modeled_error! {
    /// The service could not read the CloudWatch alarms of a policy or the resource it scales
    FailedResourceAccessException = "FailedResourceAccessException", client
}

operation_error! {
    pub struct DeleteScalingPolicyError, DeleteScalingPolicyErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        ObjectNotFoundException(ObjectNotFoundException) => is_object_not_found_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct DeleteScheduledActionError, DeleteScheduledActionErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        ObjectNotFoundException(ObjectNotFoundException) => is_object_not_found_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct DeregisterScalableTargetError, DeregisterScalableTargetErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        ObjectNotFoundException(ObjectNotFoundException) => is_object_not_found_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct DescribeScalableTargetsError, DescribeScalableTargetsErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        InvalidNextTokenException(InvalidNextTokenException) => is_invalid_next_token_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct DescribeScalingActivitiesError, DescribeScalingActivitiesErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        InvalidNextTokenException(InvalidNextTokenException) => is_invalid_next_token_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct DescribeScalingPoliciesError, DescribeScalingPoliciesErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        FailedResourceAccessException(FailedResourceAccessException) => is_failed_resource_access_exception,
        InvalidNextTokenException(InvalidNextTokenException) => is_invalid_next_token_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct DescribeScheduledActionsError, DescribeScheduledActionsErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        InvalidNextTokenException(InvalidNextTokenException) => is_invalid_next_token_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct PutScalingPolicyError, PutScalingPolicyErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        LimitExceededException(LimitExceededException) => is_limit_exceeded_exception,
        ObjectNotFoundException(ObjectNotFoundException) => is_object_not_found_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        FailedResourceAccessException(FailedResourceAccessException) => is_failed_resource_access_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct PutScheduledActionError, PutScheduledActionErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        LimitExceededException(LimitExceededException) => is_limit_exceeded_exception,
        ObjectNotFoundException(ObjectNotFoundException) => is_object_not_found_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}

operation_error! {
    pub struct RegisterScalableTargetError, RegisterScalableTargetErrorKind {
        ValidationException(ValidationException) => is_validation_exception,
        LimitExceededException(LimitExceededException) => is_limit_exceeded_exception,
        ConcurrentUpdateException(ConcurrentUpdateException) => is_concurrent_update_exception,
        InternalServiceException(InternalServiceException) => is_internal_service_exception,
    }
}
