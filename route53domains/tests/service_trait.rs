/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Code written against the `Route53Domains` trait can be tested without a network

use route53domains::error::*;
use route53domains::input::*;
use route53domains::model::DomainAvailability;
use route53domains::output::*;
use route53domains::{Route53Domains, SdkError};
use std::cell::RefCell;

/// Returns the first of `names` that can be registered
fn first_available(
    domains: &impl Route53Domains,
    names: &[&str],
) -> Result<Option<String>, SdkError<CheckDomainAvailabilityError>> {
    for name in names {
        let output = domains.check_domain_availability(
            CheckDomainAvailabilityInput::builder()
                .domain_name(*name)
                .build(),
        )?;
        if output.availability().map(|a| a.parse::<DomainAvailability>()) == Some(Ok(DomainAvailability::Available)) {
            return Ok(Some(name.to_string()));
        }
    }
    Ok(None)
}

#[derive(Default)]
struct FakeDomains {
    checked: RefCell<Vec<String>>,
}

macro_rules! unused {
    ($($method:ident($input:ident) -> $output:ident, $error:ident;)*) => {
        $(
            fn $method(&self, _input: $input) -> Result<$output, SdkError<$error>> {
                unimplemented!()
            }
        )*
    };
}

impl Route53Domains for FakeDomains {
    fn check_domain_availability(
        &self,
        input: CheckDomainAvailabilityInput,
    ) -> Result<CheckDomainAvailabilityOutput, SdkError<CheckDomainAvailabilityError>> {
        let name = input.domain_name().cloned().unwrap_or_default();
        self.checked.borrow_mut().push(name.clone());
        let availability = if name.ends_with(".org") {
            DomainAvailability::Available
        } else {
            DomainAvailability::Unavailable
        };
        Ok(CheckDomainAvailabilityOutput::builder()
            .availability(availability)
            .build())
    }

    unused! {
        accept_domain_transfer_from_another_aws_account(AcceptDomainTransferFromAnotherAwsAccountInput) -> AcceptDomainTransferFromAnotherAwsAccountOutput, AcceptDomainTransferFromAnotherAwsAccountError;
        cancel_domain_transfer_to_another_aws_account(CancelDomainTransferToAnotherAwsAccountInput) -> CancelDomainTransferToAnotherAwsAccountOutput, CancelDomainTransferToAnotherAwsAccountError;
        check_domain_transferability(CheckDomainTransferabilityInput) -> CheckDomainTransferabilityOutput, CheckDomainTransferabilityError;
        delete_tags_for_domain(DeleteTagsForDomainInput) -> DeleteTagsForDomainOutput, DeleteTagsForDomainError;
        disable_domain_auto_renew(DisableDomainAutoRenewInput) -> DisableDomainAutoRenewOutput, DisableDomainAutoRenewError;
        disable_domain_transfer_lock(DisableDomainTransferLockInput) -> DisableDomainTransferLockOutput, DisableDomainTransferLockError;
        enable_domain_auto_renew(EnableDomainAutoRenewInput) -> EnableDomainAutoRenewOutput, EnableDomainAutoRenewError;
        enable_domain_transfer_lock(EnableDomainTransferLockInput) -> EnableDomainTransferLockOutput, EnableDomainTransferLockError;
        get_contact_reachability_status(GetContactReachabilityStatusInput) -> GetContactReachabilityStatusOutput, GetContactReachabilityStatusError;
        get_domain_detail(GetDomainDetailInput) -> GetDomainDetailOutput, GetDomainDetailError;
        get_domain_suggestions(GetDomainSuggestionsInput) -> GetDomainSuggestionsOutput, GetDomainSuggestionsError;
        get_operation_detail(GetOperationDetailInput) -> GetOperationDetailOutput, GetOperationDetailError;
        list_domains(ListDomainsInput) -> ListDomainsOutput, ListDomainsError;
        list_operations(ListOperationsInput) -> ListOperationsOutput, ListOperationsError;
        list_tags_for_domain(ListTagsForDomainInput) -> ListTagsForDomainOutput, ListTagsForDomainError;
        register_domain(RegisterDomainInput) -> RegisterDomainOutput, RegisterDomainError;
        reject_domain_transfer_from_another_aws_account(RejectDomainTransferFromAnotherAwsAccountInput) -> RejectDomainTransferFromAnotherAwsAccountOutput, RejectDomainTransferFromAnotherAwsAccountError;
        renew_domain(RenewDomainInput) -> RenewDomainOutput, RenewDomainError;
        resend_contact_reachability_email(ResendContactReachabilityEmailInput) -> ResendContactReachabilityEmailOutput, ResendContactReachabilityEmailError;
        retrieve_domain_auth_code(RetrieveDomainAuthCodeInput) -> RetrieveDomainAuthCodeOutput, RetrieveDomainAuthCodeError;
        transfer_domain(TransferDomainInput) -> TransferDomainOutput, TransferDomainError;
        transfer_domain_to_another_aws_account(TransferDomainToAnotherAwsAccountInput) -> TransferDomainToAnotherAwsAccountOutput, TransferDomainToAnotherAwsAccountError;
        update_domain_contact(UpdateDomainContactInput) -> UpdateDomainContactOutput, UpdateDomainContactError;
        update_domain_contact_privacy(UpdateDomainContactPrivacyInput) -> UpdateDomainContactPrivacyOutput, UpdateDomainContactPrivacyError;
        update_domain_nameservers(UpdateDomainNameserversInput) -> UpdateDomainNameserversOutput, UpdateDomainNameserversError;
        update_tags_for_domain(UpdateTagsForDomainInput) -> UpdateTagsForDomainOutput, UpdateTagsForDomainError;
        view_billing(ViewBillingInput) -> ViewBillingOutput, ViewBillingError;
    }
}

#[test]
fn trait_can_be_substituted() {
    let fake = FakeDomains::default();
    let found = first_available(&fake, &["example.com", "example.net", "example.org", "example.io"])
        .expect("fake never fails");
    assert_eq!(found.as_deref(), Some("example.org"));
    assert_eq!(
        fake.checked.into_inner(),
        vec!["example.com", "example.net", "example.org"]
    );
}
