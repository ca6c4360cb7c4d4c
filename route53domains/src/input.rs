/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs
//!
//! Inputs are validated before they are sent: a missing required field, a string that is too long
//! or an enum-typed field holding an unknown value fails the call with
//! [`SdkError::ConstructionFailure`](smithy_http::result::SdkError::ConstructionFailure).

use crate::model::{ContactDetail, Nameserver, Tag};
use smithy_types::{shape, Instant};

shape! {
    pub struct AcceptDomainTransferFromAnotherAwsAccountInput in accept_domain_transfer_from_another_aws_account_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        /// The password returned by `TransferDomainToAnotherAwsAccount`
        set_password, password: String => "Password" [required],
    }
    sensitive [password]
}

shape! {
    pub struct CancelDomainTransferToAnotherAwsAccountInput in cancel_domain_transfer_to_another_aws_account_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct CheckDomainAvailabilityInput in check_domain_availability_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        /// Reserved for future use
        set_idn_lang_code, idn_lang_code: String => "IdnLangCode" [length(0, 3)],
    }
}

shape! {
    pub struct CheckDomainTransferabilityInput in check_domain_transferability_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_auth_code, auth_code: String => "AuthCode" [length(0, 1024)],
    }
    sensitive [auth_code]
}

shape! {
    pub struct DeleteTagsForDomainInput in delete_tags_for_domain_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        /// Keys of the tags to remove
        set_tags_to_delete, tags_to_delete: Vec<String> => "TagsToDelete" [required],
    }
}

shape! {
    pub struct DisableDomainAutoRenewInput in disable_domain_auto_renew_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct DisableDomainTransferLockInput in disable_domain_transfer_lock_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct EnableDomainAutoRenewInput in enable_domain_auto_renew_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct EnableDomainTransferLockInput in enable_domain_transfer_lock_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct GetContactReachabilityStatusInput in get_contact_reachability_status_input {
        set_domain_name, domain_name: String => "domainName" [length(0, 255)],
    }
}

shape! {
    pub struct GetDomainDetailInput in get_domain_detail_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct GetDomainSuggestionsInput in get_domain_suggestions_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_suggestion_count, suggestion_count: i32 => "SuggestionCount" [required, range(1, 50)],
        /// Only return suggestions that are available for registration
        set_only_available, only_available: bool => "OnlyAvailable" [required],
    }
}

shape! {
    pub struct GetOperationDetailInput in get_operation_detail_input {
        set_operation_id, operation_id: String => "OperationId" [required, length(0, 255)],
    }
}

shape! {
    pub struct ListDomainsInput in list_domains_input {
        /// `NextPageMarker` of the previous page, passed through unchanged
        set_marker, marker: String => "Marker" [length(0, 4096)],
        set_max_items, max_items: i32 => "MaxItems" [range(1, 100)],
    }
}

shape! {
    pub struct ListOperationsInput in list_operations_input {
        /// Only list operations submitted after this time
        set_submitted_since, submitted_since: Instant => "SubmittedSince",
        set_marker, marker: String => "Marker" [length(0, 4096)],
        set_max_items, max_items: i32 => "MaxItems" [range(1, 100)],
    }
}

shape! {
    pub struct ListTagsForDomainInput in list_tags_for_domain_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct RegisterDomainInput in register_domain_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_idn_lang_code, idn_lang_code: String => "IdnLangCode" [length(0, 3)],
        set_duration_in_years, duration_in_years: i32 => "DurationInYears" [required, range(1, 10)],
        set_auto_renew, auto_renew: bool => "AutoRenew",
        set_admin_contact, admin_contact: ContactDetail => "AdminContact" [required, nested],
        set_registrant_contact, registrant_contact: ContactDetail => "RegistrantContact" [required, nested],
        set_tech_contact, tech_contact: ContactDetail => "TechContact" [required, nested],
        set_privacy_protect_admin_contact, privacy_protect_admin_contact: bool => "PrivacyProtectAdminContact",
        set_privacy_protect_registrant_contact, privacy_protect_registrant_contact: bool => "PrivacyProtectRegistrantContact",
        set_privacy_protect_tech_contact, privacy_protect_tech_contact: bool => "PrivacyProtectTechContact",
    }
    sensitive [admin_contact, registrant_contact, tech_contact]
}

shape! {
    pub struct RejectDomainTransferFromAnotherAwsAccountInput in reject_domain_transfer_from_another_aws_account_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct RenewDomainInput in renew_domain_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_duration_in_years, duration_in_years: i32 => "DurationInYears" [range(1, 10)],
        /// The year the registration currently expires, guarding against renewing twice
        set_current_expiry_year, current_expiry_year: i32 => "CurrentExpiryYear" [required],
    }
}

shape! {
    pub struct ResendContactReachabilityEmailInput in resend_contact_reachability_email_input {
        set_domain_name, domain_name: String => "domainName" [length(0, 255)],
    }
}

shape! {
    pub struct RetrieveDomainAuthCodeInput in retrieve_domain_auth_code_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
    }
}

shape! {
    pub struct TransferDomainInput in transfer_domain_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_idn_lang_code, idn_lang_code: String => "IdnLangCode" [length(0, 3)],
        set_duration_in_years, duration_in_years: i32 => "DurationInYears" [required, range(1, 10)],
        set_nameservers, nameservers: Vec<Nameserver> => "Nameservers" [nested_list],
        set_auth_code, auth_code: String => "AuthCode" [length(0, 1024)],
        set_auto_renew, auto_renew: bool => "AutoRenew",
        set_admin_contact, admin_contact: ContactDetail => "AdminContact" [required, nested],
        set_registrant_contact, registrant_contact: ContactDetail => "RegistrantContact" [required, nested],
        set_tech_contact, tech_contact: ContactDetail => "TechContact" [required, nested],
        set_privacy_protect_admin_contact, privacy_protect_admin_contact: bool => "PrivacyProtectAdminContact",
        set_privacy_protect_registrant_contact, privacy_protect_registrant_contact: bool => "PrivacyProtectRegistrantContact",
        set_privacy_protect_tech_contact, privacy_protect_tech_contact: bool => "PrivacyProtectTechContact",
    }
    sensitive [auth_code, admin_contact, registrant_contact, tech_contact]
}

shape! {
    pub struct TransferDomainToAnotherAwsAccountInput in transfer_domain_to_another_aws_account_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        /// The twelve digit id of the receiving account
        set_account_id, account_id: String => "AccountId" [required, length(12, 12)],
    }
}

shape! {
    pub struct UpdateDomainContactInput in update_domain_contact_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_admin_contact, admin_contact: ContactDetail => "AdminContact" [nested],
        set_registrant_contact, registrant_contact: ContactDetail => "RegistrantContact" [nested],
        set_tech_contact, tech_contact: ContactDetail => "TechContact" [nested],
    }
    sensitive [admin_contact, registrant_contact, tech_contact]
}

shape! {
    pub struct UpdateDomainContactPrivacyInput in update_domain_contact_privacy_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_admin_privacy, admin_privacy: bool => "AdminPrivacy",
        set_registrant_privacy, registrant_privacy: bool => "RegistrantPrivacy",
        set_tech_privacy, tech_privacy: bool => "TechPrivacy",
    }
}

shape! {
    pub struct UpdateDomainNameserversInput in update_domain_nameservers_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        /// Authorization key for `.fi` domains
        set_fi_auth_key, fi_auth_key: String => "FIAuthKey" [length(0, 1024)],
        set_nameservers, nameservers: Vec<Nameserver> => "Nameservers" [required, nested_list],
    }
    sensitive [fi_auth_key]
}

shape! {
    pub struct UpdateTagsForDomainInput in update_tags_for_domain_input {
        set_domain_name, domain_name: String => "DomainName" [required, length(0, 255)],
        set_tags_to_update, tags_to_update: Vec<Tag> => "TagsToUpdate",
    }
}

shape! {
    pub struct ViewBillingInput in view_billing_input {
        /// Start of the billing period
        set_start, start: Instant => "Start",
        set_end, end: Instant => "End",
        set_marker, marker: String => "Marker" [length(0, 4096)],
        set_max_items, max_items: i32 => "MaxItems" [range(1, 100)],
    }
}

#[cfg(test)]
mod test {
    use crate::input::{
        CheckDomainAvailabilityInput, ListDomainsInput, RegisterDomainInput,
        UpdateDomainNameserversInput,
    };
    use crate::model::{ContactDetail, ContactType, CountryCode, Nameserver};
    use pretty_assertions::assert_eq;
    use smithy_types::constraint::{Validate, ValidationError};

    fn contact() -> ContactDetail {
        ContactDetail::builder()
            .first_name("Ada")
            .last_name("Lovelace")
            .contact_type(ContactType::Person)
            .country_code(CountryCode::Gb)
            .email("ada@example.com")
            .build()
    }

    #[test]
    fn serializes_only_present_fields() {
        let input = CheckDomainAvailabilityInput::builder()
            .domain_name("example.com")
            .build();
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"DomainName":"example.com"}"#
        );
        assert_eq!(serde_json::to_string(&ListDomainsInput::default()).unwrap(), "{}");
    }

    #[test]
    fn contacts_are_redacted() {
        let input = RegisterDomainInput::builder()
            .domain_name("example.com")
            .duration_in_years(1)
            .admin_contact(contact())
            .build();
        let rendered = format!("{:?}", input);
        assert!(!rendered.contains("Lovelace"), "{}", rendered);
        assert!(rendered.starts_with("RegisterDomainInput {DomainName: example.com"));
    }

    #[test]
    fn nested_contacts_are_validated() {
        let mut bad = contact();
        bad.country_code = Some("XX".to_string());
        let input = RegisterDomainInput::builder()
            .domain_name("example.com")
            .duration_in_years(1)
            .admin_contact(contact())
            .registrant_contact(bad)
            .tech_contact(contact())
            .build();
        assert_eq!(
            input.validate(),
            Err(ValidationError::UnknownValue {
                field: "CountryCode",
                value: "XX".to_string()
            })
        );
    }

    #[test]
    fn registration_period_is_bounded() {
        let input = RegisterDomainInput::builder()
            .domain_name("example.com")
            .duration_in_years(11)
            .admin_contact(contact())
            .registrant_contact(contact())
            .tech_contact(contact())
            .build();
        assert_eq!(input.validate().unwrap_err().field(), "DurationInYears");
    }

    #[test]
    fn nameservers_are_required() {
        let input = UpdateDomainNameserversInput::builder()
            .domain_name("example.com")
            .build();
        assert_eq!(
            input.validate(),
            Err(ValidationError::MissingField {
                field: "Nameservers"
            })
        );
        let input = UpdateDomainNameserversInput::builder()
            .domain_name("example.com")
            .nameservers(vec![Nameserver::builder()
                .name("ns1.example.com")
                .glue_ips(vec!["192.0.2.44".to_string()])
                .build()])
            .build();
        assert_eq!(input.validate(), Ok(()));
    }
}
