use async_trait::async_trait;
use sqlx::FromRow;

use crate::capability::person::{NewPerson, PersonCapability, PersonUpdate};
use crate::domain::person::Person;
use crate::domain::person_name::PersonName;
use crate::domain::person_uuid::PersonUuid;
use crate::domain::phone_number::PhoneNumber;
use crate::worker::Worker;

#[derive(FromRow)]
struct PersonRow {
    uuid: uuid::Uuid,
    name: String,
    number: String,
}

impl PersonRow {
    fn into_person(self) -> Person {
        Person {
            uuid: PersonUuid::from_uuid(self.uuid),
            name: PersonName::from_string(self.name),
            number: PhoneNumber::from_string(self.number),
        }
    }
}

#[async_trait]
impl PersonCapability for Worker {
    async fn list_persons(&self) -> Result<Vec<Person>, String> {
        let rows = sqlx::query_as::<_, PersonRow>(
            r#"
                SELECT uuid, name, number
                FROM person
                ORDER BY created_at ASC;
            "#,
        )
        .fetch_all(&self.sqlx)
        .await
        .map_err(|err| format!("Error listing persons: {}", err))?;

        Ok(rows.into_iter().map(PersonRow::into_person).collect())
    }

    async fn get_person(&self, person_uuid: PersonUuid) -> Result<Option<Person>, String> {
        let maybe_row = sqlx::query_as::<_, PersonRow>(
            r#"
                SELECT uuid, name, number
                FROM person
                WHERE uuid = $1::UUID;
            "#,
        )
        .bind(person_uuid.to_uuid())
        .fetch_optional(&self.sqlx)
        .await
        .map_err(|err| format!("Error fetching person: {}", err))?;

        Ok(maybe_row.map(PersonRow::into_person))
    }

    async fn find_persons_by_name(
        &self,
        person_name: &PersonName,
    ) -> Result<Vec<Person>, String> {
        let rows = sqlx::query_as::<_, PersonRow>(
            r#"
                SELECT uuid, name, number
                FROM person
                WHERE name = $1::TEXT;
            "#,
        )
        .bind(person_name.to_string())
        .fetch_all(&self.sqlx)
        .await
        .map_err(|err| format!("Error fetching persons by name: {}", err))?;

        Ok(rows.into_iter().map(PersonRow::into_person).collect())
    }

    async fn create_person(&self, new_person: NewPerson) -> Result<Person, String> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
                INSERT INTO person (uuid, name, number)
                VALUES ($1::UUID, $2::TEXT, $3::TEXT)
                RETURNING uuid, name, number;
            "#,
        )
        .bind(PersonUuid::new().to_uuid())
        .bind(new_person.name.to_string())
        .bind(new_person.number.to_string())
        .fetch_one(&self.sqlx)
        .await
        .map_err(|err| format!("Error inserting new person: {}", err))?;

        Ok(row.into_person())
    }

    async fn update_person(
        &self,
        person_uuid: PersonUuid,
        update: PersonUpdate,
    ) -> Result<Option<Person>, String> {
        let maybe_row = sqlx::query_as::<_, PersonRow>(
            r#"
                UPDATE person
                SET name = $2::TEXT, number = $3::TEXT
                WHERE uuid = $1::UUID
                RETURNING uuid, name, number;
            "#,
        )
        .bind(person_uuid.to_uuid())
        .bind(update.name.to_string())
        .bind(update.number.to_string())
        .fetch_optional(&self.sqlx)
        .await
        .map_err(|err| format!("Error updating person: {}", err))?;

        Ok(maybe_row.map(PersonRow::into_person))
    }

    async fn delete_person(&self, person_uuid: PersonUuid) -> Result<(), String> {
        sqlx::query(
            r#"
                DELETE FROM person
                WHERE uuid = $1::UUID;
            "#,
        )
        .bind(person_uuid.to_uuid())
        .execute(&self.sqlx)
        .await
        .map_err(|err| format!("Error deleting person: {}", err))?;

        Ok(())
    }
}
