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

/// Client for Amazon Route 53 Domains
///
/// Each call blocks the current thread until the response, including any retries, has been
/// received. Clients are `Send + Sync`; share one between threads rather than building one per
/// thread, so that all calls draw from the same retry token bucket.
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

    /// Build a client with the default configuration for `region`
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
            tracing::debug!(operation = I::NAME, error = %err, "input rejected");
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

        /// Every operation of Amazon Route 53 Domains
        ///
        /// Implemented by [`Client`]. Code that depends on this trait rather than on the client can
        /// be tested against a hand-written implementation.
        pub trait Route53Domains {
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

        impl<C> Route53Domains for Client<C>
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
    /// Accept a domain that another account is transferring to this account
    "AcceptDomainTransferFromAnotherAwsAccount" => accept_domain_transfer_from_another_aws_account(AcceptDomainTransferFromAnotherAwsAccountInput) -> AcceptDomainTransferFromAnotherAwsAccountOutput, AcceptDomainTransferFromAnotherAwsAccountError;
    /// Cancel a transfer to another account that has not been accepted yet
    "CancelDomainTransferToAnotherAwsAccount" => cancel_domain_transfer_to_another_aws_account(CancelDomainTransferToAnotherAwsAccountInput) -> CancelDomainTransferToAnotherAwsAccountOutput, CancelDomainTransferToAnotherAwsAccountError;
    /// Check whether a domain name is available for registration
    "CheckDomainAvailability" => check_domain_availability(CheckDomainAvailabilityInput) -> CheckDomainAvailabilityOutput, CheckDomainAvailabilityError;
    /// Check whether a domain name can be transferred to Amazon Route 53
    "CheckDomainTransferability" => check_domain_transferability(CheckDomainTransferabilityInput) -> CheckDomainTransferabilityOutput, CheckDomainTransferabilityError;
    "DeleteTagsForDomain" => delete_tags_for_domain(DeleteTagsForDomainInput) -> DeleteTagsForDomainOutput, DeleteTagsForDomainError;
    "DisableDomainAutoRenew" => disable_domain_auto_renew(DisableDomainAutoRenewInput) -> DisableDomainAutoRenewOutput, DisableDomainAutoRenewError;
    /// Remove the transfer lock, allowing the domain to be transferred to another registrar
    "DisableDomainTransferLock" => disable_domain_transfer_lock(DisableDomainTransferLockInput) -> DisableDomainTransferLockOutput, DisableDomainTransferLockError;
    "EnableDomainAutoRenew" => enable_domain_auto_renew(EnableDomainAutoRenewInput) -> EnableDomainAutoRenewOutput, EnableDomainAutoRenewError;
    "EnableDomainTransferLock" => enable_domain_transfer_lock(EnableDomainTransferLockInput) -> EnableDomainTransferLockOutput, EnableDomainTransferLockError;
    /// Whether the registrant contact has confirmed that their email address is valid
    "GetContactReachabilityStatus" => get_contact_reachability_status(GetContactReachabilityStatusInput) -> GetContactReachabilityStatusOutput, GetContactReachabilityStatusError;
    "GetDomainDetail" => get_domain_detail(GetDomainDetailInput) -> GetDomainDetailOutput, GetDomainDetailError;
    /// Suggest domain names similar to the given one
    "GetDomainSuggestions" => get_domain_suggestions(GetDomainSuggestionsInput) -> GetDomainSuggestionsOutput, GetDomainSuggestionsError;
    /// Current status of an operation that has not completed
    "GetOperationDetail" => get_operation_detail(GetOperationDetailInput) -> GetOperationDetailOutput, GetOperationDetailError;
    /// List the domains registered with the current account, one page at a time
    "ListDomains" => list_domains(ListDomainsInput) -> ListDomainsOutput, ListDomainsError;
    "ListOperations" => list_operations(ListOperationsInput) -> ListOperationsOutput, ListOperationsError;
    "ListTagsForDomain" => list_tags_for_domain(ListTagsForDomainInput) -> ListTagsForDomainOutput, ListTagsForDomainError;
    /// Register a domain; the returned operation id tracks the registration
    "RegisterDomain" => register_domain(RegisterDomainInput) -> RegisterDomainOutput, RegisterDomainError;
    "RejectDomainTransferFromAnotherAwsAccount" => reject_domain_transfer_from_another_aws_account(RejectDomainTransferFromAnotherAwsAccountInput) -> RejectDomainTransferFromAnotherAwsAccountOutput, RejectDomainTransferFromAnotherAwsAccountError;
    "RenewDomain" => renew_domain(RenewDomainInput) -> RenewDomainOutput, RenewDomainError;
    "ResendContactReachabilityEmail" => resend_contact_reachability_email(ResendContactReachabilityEmailInput) -> ResendContactReachabilityEmailOutput, ResendContactReachabilityEmailError;
    "RetrieveDomainAuthCode" => retrieve_domain_auth_code(RetrieveDomainAuthCodeInput) -> RetrieveDomainAuthCodeOutput, RetrieveDomainAuthCodeError;
    /// Transfer a domain from another registrar to Amazon Route 53
    "TransferDomain" => transfer_domain(TransferDomainInput) -> TransferDomainOutput, TransferDomainError;
    "TransferDomainToAnotherAwsAccount" => transfer_domain_to_another_aws_account(TransferDomainToAnotherAwsAccountInput) -> TransferDomainToAnotherAwsAccountOutput, TransferDomainToAnotherAwsAccountError;
    "UpdateDomainContact" => update_domain_contact(UpdateDomainContactInput) -> UpdateDomainContactOutput, UpdateDomainContactError;
    "UpdateDomainContactPrivacy" => update_domain_contact_privacy(UpdateDomainContactPrivacyInput) -> UpdateDomainContactPrivacyOutput, UpdateDomainContactPrivacyError;
    "UpdateDomainNameservers" => update_domain_nameservers(UpdateDomainNameserversInput) -> UpdateDomainNameserversOutput, UpdateDomainNameserversError;
    "UpdateTagsForDomain" => update_tags_for_domain(UpdateTagsForDomainInput) -> UpdateTagsForDomainOutput, UpdateTagsForDomainError;
    /// Billing records for domain registration over a period of time
    "ViewBilling" => view_billing(ViewBillingInput) -> ViewBillingOutput, ViewBillingError;
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};
