use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
///
/// Specialties are stored as a JSON array in a text column; the conversion to
/// the domain type parses that column and fails on malformed rows instead of
/// passing raw storage data through.
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl TryFrom<Advocate> for DomainAdvocate {
    type Error = serde_json::Error;

    fn try_from(row: Advocate) -> Result<Self, Self::Error> {
        let specialties: Vec<String> = serde_json::from_str(&row.specialties)?;
        Ok(Self {
            first_name: row.first_name,
            last_name: row.last_name,
            city: row.city,
            degree: row.degree,
            specialties,
            years_of_experience: row.years_of_experience,
            phone_number: row.phone_number,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    type Error = serde_json::Error;

    fn try_from(advocate: &'a DomainNewAdvocate) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            specialties: serde_json::to_string(&advocate.specialties)?,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Advocate {
        Advocate {
            id: 1,
            first_name: "Alice".to_string(),
            last_name: "Walker".to_string(),
            city: "Phoenix".to_string(),
            degree: "MSW".to_string(),
            specialties: r#"["Bipolar","Sleep issues"]"#.to_string(),
            years_of_experience: 12,
            phone_number: 5550001111,
        }
    }

    #[test]
    fn row_into_domain_parses_specialties() {
        let domain: DomainAdvocate = sample_row().try_into().unwrap();
        assert_eq!(domain.first_name, "Alice");
        assert_eq!(domain.specialties, vec!["Bipolar", "Sleep issues"]);
        assert_eq!(domain.phone_number, 5550001111);
    }

    #[test]
    fn row_with_malformed_specialties_fails() {
        let mut row = sample_row();
        row.specialties = "not json".to_string();
        assert!(DomainAdvocate::try_from(row).is_err());
    }

    #[test]
    fn from_domain_new_serializes_specialties() {
        let domain = DomainNewAdvocate::new(
            "Bob".into(),
            "Lee".into(),
            "Houston".into(),
            "MD".into(),
            vec!["Pediatrics".into()],
            3,
            5552223333,
        );
        let new: NewAdvocate = (&domain).try_into().unwrap();
        assert_eq!(new.first_name, "Bob");
        assert_eq!(new.specialties, r#"["Pediatrics"]"#);
    }
}
