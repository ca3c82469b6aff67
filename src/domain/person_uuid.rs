use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonUuid(Uuid);

impl PersonUuid {
    pub fn from_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }

    pub fn from_uuid(u: Uuid) -> Self {
        Self(u)
    }

    pub fn to_string(&self) -> String {
        self.0.to_string()
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }

    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

#[cfg(test)]
mod tests {
    use super::PersonUuid;

    #[test]
    fn parses_its_own_string_form() {
        let person_uuid = PersonUuid::new();

        let reparsed = PersonUuid::from_str(person_uuid.to_string().as_str());

        assert_eq!(reparsed.unwrap(), person_uuid);
    }

    #[test]
    fn rejects_text_that_is_not_a_uuid() {
        assert!(PersonUuid::from_str("12345").is_err());
        assert!(PersonUuid::from_str("").is_err());
        assert!(PersonUuid::from_str("not-a-uuid-at-all").is_err());
    }
}
