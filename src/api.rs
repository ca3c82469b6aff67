pub mod error;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ErrorJson};
use crate::capability::person::{NewPerson, PersonCapability, PersonUpdate};
use crate::domain::person::Person;
use crate::domain::person_name::PersonName;
use crate::domain::person_uuid::PersonUuid;
use crate::domain::phone_number::PhoneNumber;

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonJson {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<Person> for PersonJson {
    fn from(person: Person) -> Self {
        PersonJson {
            id: person.uuid.to_string(),
            name: person.name.to_string(),
            number: person.number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PersonBody {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonBody {
    fn name(&self) -> Result<PersonName, ApiError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(PersonName::from_string(name.to_string())),
            _ => Err(ApiError::NameMissing),
        }
    }

    fn number(&self) -> Result<PhoneNumber, ApiError> {
        match self.number.as_deref() {
            Some(number) if !number.is_empty() => {
                Ok(PhoneNumber::from_string(number.to_string()))
            }
            _ => Err(ApiError::NumberMissing),
        }
    }
}

pub fn routes<W: PersonCapability + Send + Sync + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/info", web::get().to(info::<W>))
        .route("/api/persons", web::get().to(list_persons::<W>))
        .route("/api/persons", web::post().to(create_person::<W>))
        .route("/api/persons/{person_id}", web::get().to(get_person::<W>))
        .route("/api/persons/{person_id}", web::put().to(update_person::<W>))
        .route(
            "/api/persons/{person_id}",
            web::delete().to(delete_person::<W>),
        );
}

pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorJson {
        error: "unknown endpoint".to_string(),
    })
}

fn parse_person_id(raw: &str) -> Result<PersonUuid, ApiError> {
    PersonUuid::from_str(raw).map_err(|_| ApiError::MalformedPersonId)
}

async fn info<W: PersonCapability>(worker: web::Data<W>) -> Result<HttpResponse, ApiError> {
    let persons = worker.list_persons().await.map_err(ApiError::Store)?;

    let body = format!(
        "<p>\nPhonebook has info for {} people <br>\n{}\n</p>",
        persons.len(),
        chrono::Local::now().format("%a %b %d %Y %H:%M:%S GMT%z")
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

async fn list_persons<W: PersonCapability>(
    worker: web::Data<W>,
) -> Result<HttpResponse, ApiError> {
    let persons = worker.list_persons().await.map_err(ApiError::Store)?;

    let body: Vec<PersonJson> = persons.into_iter().map(PersonJson::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

async fn get_person<W: PersonCapability>(
    worker: web::Data<W>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let person_uuid = parse_person_id(path.into_inner().as_str())?;

    match worker
        .get_person(person_uuid)
        .await
        .map_err(ApiError::Store)?
    {
        Some(person) => Ok(HttpResponse::Ok().json(PersonJson::from(person))),
        None => Err(ApiError::PersonNotFound),
    }
}

async fn create_person<W: PersonCapability>(
    worker: web::Data<W>,
    body: web::Json<PersonBody>,
) -> Result<HttpResponse, ApiError> {
    let name = body.name()?;
    let number = body.number()?;

    let same_name = worker
        .find_persons_by_name(&name)
        .await
        .map_err(ApiError::Store)?;

    if !same_name.is_empty() {
        return Err(ApiError::NameTaken);
    }

    let person = worker
        .create_person(NewPerson { name, number })
        .await
        .map_err(ApiError::Store)?;

    Ok(HttpResponse::Ok().json(PersonJson::from(person)))
}

async fn update_person<W: PersonCapability>(
    worker: web::Data<W>,
    path: web::Path<String>,
    body: web::Json<PersonBody>,
) -> Result<HttpResponse, ApiError> {
    let person_uuid = parse_person_id(path.into_inner().as_str())?;

    let update = PersonUpdate {
        name: body.name()?,
        number: body.number()?,
    };

    match worker
        .update_person(person_uuid, update)
        .await
        .map_err(ApiError::Store)?
    {
        Some(person) => Ok(HttpResponse::Ok().json(PersonJson::from(person))),
        None => Err(ApiError::PersonNotFound),
    }
}

async fn delete_person<W: PersonCapability>(
    worker: web::Data<W>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let person_uuid = parse_person_id(path.into_inner().as_str())?;

    worker
        .delete_person(person_uuid)
        .await
        .map_err(ApiError::Store)?;

    Ok(HttpResponse::NoContent().finish())
}
