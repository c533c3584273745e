//! Request/response shapes. Every field is optional: partial payloads are
//! data for the validation engine, not deserialization failures. Serde names
//! match the JSON the API has always spoken, including the snake-named
//! `address_id`/`birth_date_id` keys inside the nested objects.

use serde::{Deserialize, Serialize};

use devdesk_db::addresses::Address;
use devdesk_db::birth_dates::BirthDate;
use devdesk_db::programmers::Programmer;
use devdesk_db::project_managers::ProjectManager;
use devdesk_db::projects::Project;
use devdesk_db::Responsibility;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDto {
    #[serde(rename = "address_id")]
    pub address_id: Option<i64>,
    pub zip_code: Option<i32>,
    pub city: Option<String>,
    pub street: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BirthDateDto {
    #[serde(rename = "birth_date_id")]
    pub birth_date_id: Option<i64>,
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgrammerDto {
    pub programmer_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<AddressDto>,
    pub birth_date: Option<BirthDateDto>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub responsibility: Option<Responsibility>,
    pub is_apprentice: Option<bool>,
    pub deleted: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectManagerDto {
    pub project_manager_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<AddressDto>,
    pub birth_date: Option<BirthDateDto>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub deleted: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDto {
    pub project_id: Option<i64>,
    pub client: Option<String>,
    pub start_date: Option<String>,
    pub description: Option<String>,
    pub deleted: Option<bool>,
}

/// Detail projection for GET /api/details-programmers/{id}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammerDetailsDto {
    pub programmer_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<AddressDto>,
    pub birth_date: Option<BirthDateDto>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub responsibility: Option<Responsibility>,
    pub is_apprentice: Option<bool>,
    pub project: Option<ProjectDto>,
    pub project_manager: Option<ProjectManagerDto>,
    pub deleted: Option<bool>,
}

/// Detail projection for GET /api/details-project-managers/{id}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManagerDetailsDto {
    pub project_manager_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<AddressDto>,
    pub birth_date: Option<BirthDateDto>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub project: Option<ProjectDto>,
    pub deleted: Option<bool>,
}

impl From<Address> for AddressDto {
    fn from(row: Address) -> Self {
        AddressDto {
            address_id: Some(row.address_id),
            zip_code: Some(row.zip_code),
            city: Some(row.city),
            street: Some(row.street),
        }
    }
}

impl From<BirthDate> for BirthDateDto {
    fn from(row: BirthDate) -> Self {
        BirthDateDto {
            birth_date_id: Some(row.birth_date_id),
            day: Some(row.day),
            month: Some(row.month),
            year: Some(row.year),
        }
    }
}

impl From<Project> for ProjectDto {
    fn from(row: Project) -> Self {
        ProjectDto {
            project_id: Some(row.project_id),
            client: Some(row.client),
            start_date: Some(row.start_date),
            description: Some(row.description),
            deleted: Some(row.deleted),
        }
    }
}

impl ProgrammerDto {
    pub fn from_row(
        row: Programmer,
        address: Option<Address>,
        birth_date: Option<BirthDate>,
    ) -> Self {
        ProgrammerDto {
            programmer_id: Some(row.programmer_id),
            name: Some(row.name),
            address: address.map(AddressDto::from),
            birth_date: birth_date.map(BirthDateDto::from),
            phone_number: Some(row.phone_number),
            email: Some(row.email),
            responsibility: Some(row.responsibility),
            is_apprentice: Some(row.is_apprentice),
            deleted: Some(row.deleted),
        }
    }
}

impl ProjectManagerDto {
    pub fn from_row(
        row: ProjectManager,
        address: Option<Address>,
        birth_date: Option<BirthDate>,
    ) -> Self {
        ProjectManagerDto {
            project_manager_id: Some(row.project_manager_id),
            name: Some(row.name),
            address: address.map(AddressDto::from),
            birth_date: birth_date.map(BirthDateDto::from),
            phone_number: Some(row.phone_number),
            email: Some(row.email),
            deleted: Some(row.deleted),
        }
    }
}
