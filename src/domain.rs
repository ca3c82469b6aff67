pub mod person;
pub mod person_name;
pub mod person_uuid;
pub mod phone_number;
