use serde::{Deserialize, Serialize};

/// A personnel record in the directory: name, location, credential,
/// specialty list, experience and phone number.
///
/// Wire representation uses camelCase field names. The phone number is a
/// bare 10-digit number, matching the upstream data source; no display
/// formatting happens here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl NewAdvocate {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        city: String,
        degree: String,
        specialties: Vec<String>,
        years_of_experience: i32,
        phone_number: i64,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            city: city.trim().to_string(),
            degree: degree.trim().to_string(),
            specialties: specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            years_of_experience: years_of_experience.max(0),
            phone_number,
        }
    }
}
