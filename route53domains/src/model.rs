/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes and enumerations shared between operations
//!
//! Enum-typed fields hold the canonical string of the member; recover the typed value with
//! `str::parse`, eg. `summary.status().map(|s| s.parse::<OperationStatus>())`.

use smithy_types::{closed_enum, shape, Instant};

closed_enum! {
    pub enum ContactType {
        Person => "PERSON",
        Company => "COMPANY",
        Association => "ASSOCIATION",
        PublicBody => "PUBLIC_BODY",
        Reseller => "RESELLER",
    }
}

closed_enum! {
    /// ISO 3166-1 alpha-2 code of the country of a contact
    pub enum CountryCode {
        Ad => "AD",
        Ae => "AE",
        Af => "AF",
        Ag => "AG",
        Ai => "AI",
        Al => "AL",
        Am => "AM",
        An => "AN",
        Ao => "AO",
        Aq => "AQ",
        Ar => "AR",
        As => "AS",
        At => "AT",
        Au => "AU",
        Aw => "AW",
        Az => "AZ",
        Ba => "BA",
        Bb => "BB",
        Bd => "BD",
        Be => "BE",
        Bf => "BF",
        Bg => "BG",
        Bh => "BH",
        Bi => "BI",
        Bj => "BJ",
        Bl => "BL",
        Bm => "BM",
        Bn => "BN",
        Bo => "BO",
        Br => "BR",
        Bs => "BS",
        Bt => "BT",
        Bw => "BW",
        By => "BY",
        Bz => "BZ",
        Ca => "CA",
        Cc => "CC",
        Cd => "CD",
        Cf => "CF",
        Cg => "CG",
        Ch => "CH",
        Ci => "CI",
        Ck => "CK",
        Cl => "CL",
        Cm => "CM",
        Cn => "CN",
        Co => "CO",
        Cr => "CR",
        Cu => "CU",
        Cv => "CV",
        Cx => "CX",
        Cy => "CY",
        Cz => "CZ",
        De => "DE",
        Dj => "DJ",
        Dk => "DK",
        Dm => "DM",
        Do => "DO",
        Dz => "DZ",
        Ec => "EC",
        Ee => "EE",
        Eg => "EG",
        Er => "ER",
        Es => "ES",
        Et => "ET",
        Fi => "FI",
        Fj => "FJ",
        Fk => "FK",
        Fm => "FM",
        Fo => "FO",
        Fr => "FR",
        Ga => "GA",
        Gb => "GB",
        Gd => "GD",
        Ge => "GE",
        Gh => "GH",
        Gi => "GI",
        Gl => "GL",
        Gm => "GM",
        Gn => "GN",
        Gq => "GQ",
        Gr => "GR",
        Gt => "GT",
        Gu => "GU",
        Gw => "GW",
        Gy => "GY",
        Hk => "HK",
        Hn => "HN",
        Hr => "HR",
        Ht => "HT",
        Hu => "HU",
        Id => "ID",
        Ie => "IE",
        Il => "IL",
        Im => "IM",
        In => "IN",
        Iq => "IQ",
        Ir => "IR",
        Is => "IS",
        It => "IT",
        Jm => "JM",
        Jo => "JO",
        Jp => "JP",
        Ke => "KE",
        Kg => "KG",
        Kh => "KH",
        Ki => "KI",
        Km => "KM",
        Kn => "KN",
        Kp => "KP",
        Kr => "KR",
        Kw => "KW",
        Ky => "KY",
        Kz => "KZ",
        La => "LA",
        Lb => "LB",
        Lc => "LC",
        Li => "LI",
        Lk => "LK",
        Lr => "LR",
        Ls => "LS",
        Lt => "LT",
        Lu => "LU",
        Lv => "LV",
        Ly => "LY",
        Ma => "MA",
        Mc => "MC",
        Md => "MD",
        Me => "ME",
        Mf => "MF",
        Mg => "MG",
        Mh => "MH",
        Mk => "MK",
        Ml => "ML",
        Mm => "MM",
        Mn => "MN",
        Mo => "MO",
        Mp => "MP",
        Mr => "MR",
        Ms => "MS",
        Mt => "MT",
        Mu => "MU",
        Mv => "MV",
        Mw => "MW",
        Mx => "MX",
        My => "MY",
        Mz => "MZ",
        Na => "NA",
        Nc => "NC",
        Ne => "NE",
        Ng => "NG",
        Ni => "NI",
        Nl => "NL",
        No => "NO",
        Np => "NP",
        Nr => "NR",
        Nu => "NU",
        Nz => "NZ",
        Om => "OM",
        Pa => "PA",
        Pe => "PE",
        Pf => "PF",
        Pg => "PG",
        Ph => "PH",
        Pk => "PK",
        Pl => "PL",
        Pm => "PM",
        Pn => "PN",
        Pr => "PR",
        Pt => "PT",
        Pw => "PW",
        Py => "PY",
        Qa => "QA",
        Ro => "RO",
        Rs => "RS",
        Ru => "RU",
        Rw => "RW",
        Sa => "SA",
        Sb => "SB",
        Sc => "SC",
        Sd => "SD",
        Se => "SE",
        Sg => "SG",
        Sh => "SH",
        Si => "SI",
        Sk => "SK",
        Sl => "SL",
        Sm => "SM",
        Sn => "SN",
        So => "SO",
        Sr => "SR",
        St => "ST",
        Sv => "SV",
        Sy => "SY",
        Sz => "SZ",
        Tc => "TC",
        Td => "TD",
        Tg => "TG",
        Th => "TH",
        Tj => "TJ",
        Tk => "TK",
        Tl => "TL",
        Tm => "TM",
        Tn => "TN",
        To => "TO",
        Tr => "TR",
        Tt => "TT",
        Tv => "TV",
        Tw => "TW",
        Tz => "TZ",
        Ua => "UA",
        Ug => "UG",
        Us => "US",
        Uy => "UY",
        Uz => "UZ",
        Va => "VA",
        Vc => "VC",
        Ve => "VE",
        Vg => "VG",
        Vi => "VI",
        Vn => "VN",
        Vu => "VU",
        Wf => "WF",
        Ws => "WS",
        Ye => "YE",
        Yt => "YT",
        Za => "ZA",
        Zm => "ZM",
        Zw => "ZW",
    }
}

closed_enum! {
    /// Whether a domain name can be registered
    pub enum DomainAvailability {
        Available => "AVAILABLE",
        AvailableReserved => "AVAILABLE_RESERVED",
        AvailablePreorder => "AVAILABLE_PREORDER",
        Unavailable => "UNAVAILABLE",
        UnavailablePremium => "UNAVAILABLE_PREMIUM",
        UnavailableRestricted => "UNAVAILABLE_RESTRICTED",
        Reserved => "RESERVED",
        DontKnow => "DONT_KNOW",
    }
}

closed_enum! {
    /// Top-level domain specific registration parameters
    pub enum ExtraParamName {
        DunsNumber => "DUNS_NUMBER",
        BrandNumber => "BRAND_NUMBER",
        BirthDepartment => "BIRTH_DEPARTMENT",
        BirthDateInYyyyMmDd => "BIRTH_DATE_IN_YYYY_MM_DD",
        BirthCountry => "BIRTH_COUNTRY",
        BirthCity => "BIRTH_CITY",
        DocumentNumber => "DOCUMENT_NUMBER",
        AuIdNumber => "AU_ID_NUMBER",
        AuIdType => "AU_ID_TYPE",
        CaLegalType => "CA_LEGAL_TYPE",
        CaBusinessEntityType => "CA_BUSINESS_ENTITY_TYPE",
        CaLegalRepresentative => "CA_LEGAL_REPRESENTATIVE",
        CaLegalRepresentativeCapacity => "CA_LEGAL_REPRESENTATIVE_CAPACITY",
        EsIdentification => "ES_IDENTIFICATION",
        EsIdentificationType => "ES_IDENTIFICATION_TYPE",
        EsLegalForm => "ES_LEGAL_FORM",
        FiBusinessNumber => "FI_BUSINESS_NUMBER",
        FiIdNumber => "FI_ID_NUMBER",
        FiNationality => "FI_NATIONALITY",
        FiOrganizationType => "FI_ORGANIZATION_TYPE",
        ItNationality => "IT_NATIONALITY",
        ItPin => "IT_PIN",
        ItRegistrantEntityType => "IT_REGISTRANT_ENTITY_TYPE",
        RuPassportData => "RU_PASSPORT_DATA",
        SeIdNumber => "SE_ID_NUMBER",
        SgIdNumber => "SG_ID_NUMBER",
        VatNumber => "VAT_NUMBER",
        UkContactType => "UK_CONTACT_TYPE",
        UkCompanyNumber => "UK_COMPANY_NUMBER",
    }
}

closed_enum! {
    pub enum OperationStatus {
        Submitted => "SUBMITTED",
        InProgress => "IN_PROGRESS",
        Error => "ERROR",
        Successful => "SUCCESSFUL",
        Failed => "FAILED",
    }
}

closed_enum! {
    pub enum OperationType {
        RegisterDomain => "REGISTER_DOMAIN",
        DeleteDomain => "DELETE_DOMAIN",
        TransferInDomain => "TRANSFER_IN_DOMAIN",
        UpdateDomainContact => "UPDATE_DOMAIN_CONTACT",
        UpdateNameserver => "UPDATE_NAMESERVER",
        ChangePrivacyProtection => "CHANGE_PRIVACY_PROTECTION",
        DomainLock => "DOMAIN_LOCK",
        EnableAutorenew => "ENABLE_AUTORENEW",
        DisableAutorenew => "DISABLE_AUTORENEW",
        AddDnssec => "ADD_DNSSEC",
        RemoveDnssec => "REMOVE_DNSSEC",
        ExpireDomain => "EXPIRE_DOMAIN",
        TransferOutDomain => "TRANSFER_OUT_DOMAIN",
        ChangeDomainOwner => "CHANGE_DOMAIN_OWNER",
        RenewDomain => "RENEW_DOMAIN",
        PushDomain => "PUSH_DOMAIN",
        InternalTransferOutDomain => "INTERNAL_TRANSFER_OUT_DOMAIN",
        InternalTransferInDomain => "INTERNAL_TRANSFER_IN_DOMAIN",
    }
}

closed_enum! {
    /// State of the registrant contact email verification
    pub enum ReachabilityStatus {
        Pending => "PENDING",
        Done => "DONE",
        Expired => "EXPIRED",
    }
}

closed_enum! {
    pub enum Transferable {
        Transferable => "TRANSFERABLE",
        Untransferable => "UNTRANSFERABLE",
        DontKnow => "DONT_KNOW",
    }
}

shape! {
    /// Contact information for a domain registrant, administrator or technical contact
    pub struct ContactDetail in contact_detail {
        set_first_name, first_name: String => "FirstName" [length(0, 255)],
        set_last_name, last_name: String => "LastName" [length(0, 255)],
        set_contact_type, contact_type: String => "ContactType" [one_of(ContactType)],
        set_organization_name, organization_name: String => "OrganizationName" [length(0, 255)],
        set_address_line1, address_line1: String => "AddressLine1" [length(0, 255)],
        set_address_line2, address_line2: String => "AddressLine2" [length(0, 255)],
        set_city, city: String => "City" [length(0, 255)],
        set_state, state: String => "State" [length(0, 255)],
        set_country_code, country_code: String => "CountryCode" [one_of(CountryCode)],
        set_zip_code, zip_code: String => "ZipCode" [length(0, 255)],
        set_phone_number, phone_number: String => "PhoneNumber" [length(0, 30)],
        set_email, email: String => "Email" [length(0, 254)],
        set_fax, fax: String => "Fax" [length(0, 30)],
        set_extra_params, extra_params: Vec<ExtraParam> => "ExtraParams" [nested_list],
    }
    sensitive [
        first_name,
        last_name,
        organization_name,
        address_line1,
        address_line2,
        city,
        state,
        zip_code,
        phone_number,
        email,
        fax,
        extra_params,
    ]
}

shape! {
    /// An additional registration parameter required by some top-level domains
    pub struct ExtraParam in extra_param {
        set_name, name: String => "Name" [required, one_of(ExtraParamName)],
        set_value, value: String => "Value" [required, length(0, 2048)],
    }
}

shape! {
    /// A name server and, for name servers inside the domain, its glue addresses
    pub struct Nameserver in nameserver {
        set_name, name: String => "Name" [required, length(0, 255)],
        set_glue_ips, glue_ips: Vec<String> => "GlueIps",
    }
}

shape! {
    pub struct Tag in tag {
        set_key, key: String => "Key",
        set_value, value: String => "Value",
    }
}

shape! {
    pub struct DomainSummary in domain_summary {
        set_domain_name, domain_name: String => "DomainName",
        set_auto_renew, auto_renew: bool => "AutoRenew",
        set_transfer_lock, transfer_lock: bool => "TransferLock",
        set_expiry, expiry: Instant => "Expiry",
    }
}

shape! {
    pub struct DomainSuggestion in domain_suggestion {
        set_domain_name, domain_name: String => "DomainName",
        set_availability, availability: String => "Availability",
    }
}

shape! {
    pub struct DomainTransferability in domain_transferability {
        set_transferable, transferable: String => "Transferable",
    }
}

shape! {
    pub struct OperationSummary in operation_summary {
        set_operation_id, operation_id: String => "OperationId",
        set_status, status: String => "Status",
        set_type, r#type: String => "Type",
        set_submitted_date, submitted_date: Instant => "SubmittedDate",
    }
}

shape! {
    /// One charge on the AWS bill for domain registration
    pub struct BillingRecord in billing_record {
        set_domain_name, domain_name: String => "DomainName",
        set_operation, operation: String => "Operation",
        set_invoice_id, invoice_id: String => "InvoiceId",
        set_bill_date, bill_date: Instant => "BillDate",
        set_price, price: f64 => "Price",
    }
}
