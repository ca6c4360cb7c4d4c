/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs

use crate::model::{
    BillingRecord, ContactDetail, DomainSuggestion, DomainSummary, DomainTransferability,
    Nameserver, OperationSummary, Tag,
};
use smithy_types::{shape, Instant};

shape! {
    pub struct AcceptDomainTransferFromAnotherAwsAccountOutput in accept_domain_transfer_from_another_aws_account_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct CancelDomainTransferToAnotherAwsAccountOutput in cancel_domain_transfer_to_another_aws_account_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct CheckDomainAvailabilityOutput in check_domain_availability_output {
        /// A [`DomainAvailability`](crate::model::DomainAvailability) value
        set_availability, availability: String => "Availability",
    }
}

shape! {
    pub struct CheckDomainTransferabilityOutput in check_domain_transferability_output {
        set_transferability, transferability: DomainTransferability => "Transferability",
    }
}

shape! {
    pub struct DeleteTagsForDomainOutput in delete_tags_for_domain_output {}
}

shape! {
    pub struct DisableDomainAutoRenewOutput in disable_domain_auto_renew_output {}
}

shape! {
    pub struct DisableDomainTransferLockOutput in disable_domain_transfer_lock_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct EnableDomainAutoRenewOutput in enable_domain_auto_renew_output {}
}

shape! {
    pub struct EnableDomainTransferLockOutput in enable_domain_transfer_lock_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct GetContactReachabilityStatusOutput in get_contact_reachability_status_output {
        set_domain_name, domain_name: String => "domainName",
        /// A [`ReachabilityStatus`](crate::model::ReachabilityStatus) value
        set_status, status: String => "status",
    }
}

shape! {
    pub struct GetDomainDetailOutput in get_domain_detail_output {
        set_domain_name, domain_name: String => "DomainName",
        set_nameservers, nameservers: Vec<Nameserver> => "Nameservers",
        set_auto_renew, auto_renew: bool => "AutoRenew",
        set_admin_contact, admin_contact: ContactDetail => "AdminContact",
        set_registrant_contact, registrant_contact: ContactDetail => "RegistrantContact",
        set_tech_contact, tech_contact: ContactDetail => "TechContact",
        set_admin_privacy, admin_privacy: bool => "AdminPrivacy",
        set_registrant_privacy, registrant_privacy: bool => "RegistrantPrivacy",
        set_tech_privacy, tech_privacy: bool => "TechPrivacy",
        set_registrar_name, registrar_name: String => "RegistrarName",
        set_who_is_server, who_is_server: String => "WhoIsServer",
        set_registrar_url, registrar_url: String => "RegistrarUrl",
        set_abuse_contact_email, abuse_contact_email: String => "AbuseContactEmail",
        set_abuse_contact_phone, abuse_contact_phone: String => "AbuseContactPhone",
        set_registry_domain_id, registry_domain_id: String => "RegistryDomainId",
        set_creation_date, creation_date: Instant => "CreationDate",
        set_updated_date, updated_date: Instant => "UpdatedDate",
        set_expiration_date, expiration_date: Instant => "ExpirationDate",
        set_reseller, reseller: String => "Reseller",
        set_dns_sec, dns_sec: String => "DnsSec",
        /// EPP status codes of the domain, eg. `clientTransferProhibited`
        set_status_list, status_list: Vec<String> => "StatusList",
    }
    sensitive [admin_contact, registrant_contact, tech_contact, abuse_contact_email, abuse_contact_phone]
}

shape! {
    pub struct GetDomainSuggestionsOutput in get_domain_suggestions_output {
        set_suggestions_list, suggestions_list: Vec<DomainSuggestion> => "SuggestionsList",
    }
}

shape! {
    pub struct GetOperationDetailOutput in get_operation_detail_output {
        set_operation_id, operation_id: String => "OperationId",
        set_status, status: String => "Status",
        set_message, message: String => "Message",
        set_domain_name, domain_name: String => "DomainName",
        set_type, r#type: String => "Type",
        set_submitted_date, submitted_date: Instant => "SubmittedDate",
    }
}

shape! {
    pub struct ListDomainsOutput in list_domains_output {
        set_domains, domains: Vec<DomainSummary> => "Domains",
        /// Present when more domains are available; pass it as `Marker` to get the next page
        set_next_page_marker, next_page_marker: String => "NextPageMarker",
    }
}

shape! {
    pub struct ListOperationsOutput in list_operations_output {
        set_operations, operations: Vec<OperationSummary> => "Operations",
        set_next_page_marker, next_page_marker: String => "NextPageMarker",
    }
}

shape! {
    pub struct ListTagsForDomainOutput in list_tags_for_domain_output {
        set_tag_list, tag_list: Vec<Tag> => "TagList",
    }
}

shape! {
    pub struct RegisterDomainOutput in register_domain_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct RejectDomainTransferFromAnotherAwsAccountOutput in reject_domain_transfer_from_another_aws_account_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct RenewDomainOutput in renew_domain_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct ResendContactReachabilityEmailOutput in resend_contact_reachability_email_output {
        set_domain_name, domain_name: String => "domainName",
        set_email_address, email_address: String => "emailAddress",
        set_is_already_verified, is_already_verified: bool => "isAlreadyVerified",
    }
    sensitive [email_address]
}

shape! {
    pub struct RetrieveDomainAuthCodeOutput in retrieve_domain_auth_code_output {
        set_auth_code, auth_code: String => "AuthCode",
    }
    sensitive [auth_code]
}

shape! {
    pub struct TransferDomainOutput in transfer_domain_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct TransferDomainToAnotherAwsAccountOutput in transfer_domain_to_another_aws_account_output {
        set_operation_id, operation_id: String => "OperationId",
        /// Give this to the receiving account; it is needed to accept the transfer
        set_password, password: String => "Password",
    }
    sensitive [password]
}

shape! {
    pub struct UpdateDomainContactOutput in update_domain_contact_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct UpdateDomainContactPrivacyOutput in update_domain_contact_privacy_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct UpdateDomainNameserversOutput in update_domain_nameservers_output {
        set_operation_id, operation_id: String => "OperationId",
    }
}

shape! {
    pub struct UpdateTagsForDomainOutput in update_tags_for_domain_output {}
}

shape! {
    pub struct ViewBillingOutput in view_billing_output {
        set_next_page_marker, next_page_marker: String => "NextPageMarker",
        set_billing_records, billing_records: Vec<BillingRecord> => "BillingRecords",
    }
}
