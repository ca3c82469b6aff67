use crate::domain::person_name::PersonName;
use crate::domain::person_uuid::PersonUuid;
use crate::domain::phone_number::PhoneNumber;

#[derive(Debug, Clone)]
pub struct Person {
    pub uuid: PersonUuid,
    pub name: PersonName,
    pub number: PhoneNumber,
}
