//! DTOs for decoding SuccessFactors OData v2 responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain `EmployeeRecord` in one pass. Every navigation property is
//! optional: upstream omits a nav entirely when the related entity is absent,
//! and the mapping must distinguish a missing phone nav (no entry on file)
//! from an entry whose number field is blank.

use serde::Deserialize;

use crate::domain::employee::EmployeeRecord;

/// OData v2 envelope: `{"d": {"results": [...]}}`.
#[derive(Debug, Deserialize)]
pub(super) struct ODataEnvelopeDto {
    pub(super) d: ODataResultsDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ODataResultsDto {
    #[serde(default)]
    pub(super) results: Vec<EmpJobDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EmpJobDto {
    #[serde(default)]
    pub(super) employment_nav: Option<EmploymentNavDto>,
    #[serde(default)]
    pub(super) department_nav: Option<NamedNavDto>,
    #[serde(default)]
    pub(super) location_nav: Option<NamedNavDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EmploymentNavDto {
    #[serde(default)]
    pub(super) person_nav: Option<PersonNavDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PersonNavDto {
    #[serde(default)]
    pub(super) phone_nav: Option<PhoneNavDto>,
    #[serde(default)]
    pub(super) personal_info_nav: Option<PersonalInfoNavDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PhoneNavDto {
    #[serde(default)]
    pub(super) results: Vec<PhoneDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PhoneDto {
    #[serde(default)]
    pub(super) phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PersonalInfoNavDto {
    #[serde(default)]
    pub(super) results: Vec<PersonalInfoDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PersonalInfoDto {
    #[serde(default)]
    pub(super) first_name: Option<String>,
    #[serde(default)]
    pub(super) last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NamedNavDto {
    #[serde(default)]
    pub(super) name: Option<String>,
}

impl EmpJobDto {
    /// Flatten the nested navs into a domain record.
    ///
    /// `phone_number` is `None` only when the phone nav holds no entries at
    /// all; an entry with a missing or blank number maps to `Some("")`.
    pub(super) fn into_record(self) -> EmployeeRecord {
        let person_nav = self
            .employment_nav
            .and_then(|employment| employment.person_nav);

        let phone_number = person_nav
            .as_ref()
            .and_then(|person| person.phone_nav.as_ref())
            .and_then(|phones| phones.results.first())
            .map(|phone| phone.phone_number.clone().unwrap_or_default());

        let personal_info = person_nav
            .and_then(|person| person.personal_info_nav)
            .and_then(|infos| infos.results.into_iter().next());
        let (first_name, last_name) = personal_info
            .map(|info| {
                (
                    info.first_name.unwrap_or_default(),
                    info.last_name.unwrap_or_default(),
                )
            })
            .unwrap_or_default();

        EmployeeRecord {
            phone_number,
            first_name,
            last_name,
            department: self
                .department_nav
                .and_then(|nav| nav.name)
                .unwrap_or_default(),
            location: self
                .location_nav
                .and_then(|nav| nav.name)
                .unwrap_or_default(),
        }
    }
}
