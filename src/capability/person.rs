use crate::domain::person::Person;
use crate::domain::person_name::PersonName;
use crate::domain::person_uuid::PersonUuid;
use crate::domain::phone_number::PhoneNumber;
use async_trait::async_trait;

pub struct NewPerson {
    pub name: PersonName,
    pub number: PhoneNumber,
}

pub struct PersonUpdate {
    pub name: PersonName,
    pub number: PhoneNumber,
}

#[async_trait]
pub trait PersonCapability {
    async fn list_persons(&self) -> Result<Vec<Person>, String>;
    async fn get_person(&self, person_uuid: PersonUuid) -> Result<Option<Person>, String>;
    async fn find_persons_by_name(&self, person_name: &PersonName)
        -> Result<Vec<Person>, String>;
    async fn create_person(&self, new_person: NewPerson) -> Result<Person, String>;
    async fn update_person(
        &self,
        person_uuid: PersonUuid,
        update: PersonUpdate,
    ) -> Result<Option<Person>, String>;
    async fn delete_person(&self, person_uuid: PersonUuid) -> Result<(), String>;
}
