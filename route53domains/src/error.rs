/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by the service
//!
//! Every operation has its own error type listing the named errors it can return. A response
//! carrying any other error code, including a named error that the operation does not declare,
//! is reported as `Unhandled` with the code, message and request id still available through
//! [`code`](ListDomainsError::code), [`message`](ListDomainsError::message) and
//! [`request_id`](ListDomainsError::request_id).

use aws_http::{modeled_error, operation_error};

modeled_error! {
    /// The requested item is not acceptable, eg. an invalid domain name or a malformed operation id
    InvalidInput = "InvalidInput", client
}

modeled_error! {
    /// The request is already in progress for the domain
    DuplicateRequest = "DuplicateRequest", client
}

modeled_error! {
    /// The number of domains has exceeded the allowed threshold for the account
    DomainLimitExceeded = "DomainLimitExceeded", client
}

modeled_error! {
    /// The number of operations or jobs running exceeded the allowed threshold for the account
    OperationLimitExceeded = "OperationLimitExceeded", client
}

modeled_error! {
    /// The top-level domain does not support this operation
    TldRulesViolation = "TLDRulesViolation", client
}

modeled_error! {
    /// Amazon Route 53 does not support this top-level domain
    UnsupportedTld = "UnsupportedTLD", client
}

operation_error! {
    pub struct AcceptDomainTransferFromAnotherAwsAccountError, AcceptDomainTransferFromAnotherAwsAccountErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        DomainLimitExceeded(DomainLimitExceeded) => is_domain_limit_exceeded,
    }
}

operation_error! {
    pub struct CancelDomainTransferToAnotherAwsAccountError, CancelDomainTransferToAnotherAwsAccountErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
    }
}

operation_error! {
    pub struct CheckDomainAvailabilityError, CheckDomainAvailabilityErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct CheckDomainTransferabilityError, CheckDomainTransferabilityErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct DeleteTagsForDomainError, DeleteTagsForDomainErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct DisableDomainAutoRenewError, DisableDomainAutoRenewErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct DisableDomainTransferLockError, DisableDomainTransferLockErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct EnableDomainAutoRenewError, EnableDomainAutoRenewErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
    }
}

operation_error! {
    pub struct EnableDomainTransferLockError, EnableDomainTransferLockErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct GetContactReachabilityStatusError, GetContactReachabilityStatusErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct GetDomainDetailError, GetDomainDetailErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct GetDomainSuggestionsError, GetDomainSuggestionsErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct GetOperationDetailError, GetOperationDetailErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
    }
}

operation_error! {
    pub struct ListDomainsError, ListDomainsErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
    }
}

operation_error! {
    pub struct ListOperationsError, ListOperationsErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
    }
}

operation_error! {
    pub struct ListTagsForDomainError, ListTagsForDomainErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct RegisterDomainError, RegisterDomainErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        DomainLimitExceeded(DomainLimitExceeded) => is_domain_limit_exceeded,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
    }
}

operation_error! {
    pub struct RejectDomainTransferFromAnotherAwsAccountError, RejectDomainTransferFromAnotherAwsAccountErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
    }
}

operation_error! {
    pub struct RenewDomainError, RenewDomainErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
    }
}

operation_error! {
    pub struct ResendContactReachabilityEmailError, ResendContactReachabilityEmailErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct RetrieveDomainAuthCodeError, RetrieveDomainAuthCodeErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct TransferDomainError, TransferDomainErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        DomainLimitExceeded(DomainLimitExceeded) => is_domain_limit_exceeded,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
    }
}

operation_error! {
    pub struct TransferDomainToAnotherAwsAccountError, TransferDomainToAnotherAwsAccountErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
    }
}

operation_error! {
    pub struct UpdateDomainContactError, UpdateDomainContactErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct UpdateDomainContactPrivacyError, UpdateDomainContactPrivacyErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct UpdateDomainNameserversError, UpdateDomainNameserversErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        DuplicateRequest(DuplicateRequest) => is_duplicate_request,
        TldRulesViolation(TldRulesViolation) => is_tld_rules_violation,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct UpdateTagsForDomainError, UpdateTagsForDomainErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
        OperationLimitExceeded(OperationLimitExceeded) => is_operation_limit_exceeded,
        UnsupportedTld(UnsupportedTld) => is_unsupported_tld,
    }
}

operation_error! {
    pub struct ViewBillingError, ViewBillingErrorKind {
        InvalidInput(InvalidInput) => is_invalid_input,
    }
}
