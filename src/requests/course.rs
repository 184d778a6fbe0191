use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CourseName {
    pub en: Option<String>,
    pub kz: Option<String>,
    pub ru: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CourseHours {
    pub theory: Option<i32>,
    pub practice: Option<i32>,
    pub labs: Option<i32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStoreRequest {
    pub code: String,
    pub year: i32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub name: CourseName,
    #[serde(default)]
    pub department_id: Option<Uuid>,
    #[serde(default)]
    pub hours: CourseHours,
    pub credits: i32,
    pub ects: i32,
}

impl CourseStoreRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.code.trim().is_empty() {
            errors.push("Course code is required".to_string());
        }
        if self.year <= 0 {
            errors.push("Year must be positive".to_string());
        }
        if self.credits < 0 {
            errors.push("Credits cannot be negative".to_string());
        }
        if self.ects < 0 {
            errors.push("ECTS cannot be negative".to_string());
        }

        let hours = [self.hours.theory, self.hours.practice, self.hours.labs];
        if hours.iter().flatten().any(|hours| *hours < 0) {
            errors.push("Hours cannot be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CourseShowRequest {
    pub code: String,
}
