use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::courses::Model;
use crate::requests::course::{CourseHours, CourseName};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub year: i32,
    pub language: String,
    pub name: CourseName,
    pub department_id: Option<Uuid>,
    pub hours: CourseHours,
    pub credits: i32,
    pub ects: i32,
}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            year: model.year,
            language: model.language,
            name: CourseName {
                en: model.name_en,
                kz: model.name_kz,
                ru: model.name_ru,
            },
            department_id: model.department_id,
            hours: CourseHours {
                theory: model.hours_theory,
                practice: model.hours_practice,
                labs: model.hours_labs,
            },
            credits: model.credits,
            ects: model.ects,
        }
    }
}
