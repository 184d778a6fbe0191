use anyhow::Context;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::entities::courses::Model;
use crate::errors::Error;
use crate::requests::course::{CourseShowRequest, CourseStoreRequest};
use crate::responses::course::Course;

#[::tracing::instrument(skip(db, request), fields(code = %request.code))]
pub async fn store(db: &DatabaseConnection, request: CourseStoreRequest) -> Result<Course, Error> {
    if let Err(errors) = request.validate() {
        return Err(Error::bad_request(errors.join(", ")));
    }

    let code = request.code.trim().to_uppercase();

    if Model::code_exists(db, &code).await? {
        return Err(Error::not_acceptable("Course code already exists."));
    }

    let model = Model {
        id: Uuid::new_v4(),
        code,
        year: request.year,
        language: request.language.unwrap_or_else(|| "en".to_string()),
        name_en: request.name.en,
        name_kz: request.name.kz,
        name_ru: request.name.ru,
        department_id: request.department_id,
        hours_theory: request.hours.theory,
        hours_practice: request.hours.practice,
        hours_labs: request.hours.labs,
        credits: request.credits,
        ects: request.ects,
    };

    let model = model
        .store(db)
        .await
        .context("Failed to store course to database")?;

    ::tracing::info!(course_id = %model.id, "Course created successfully");

    Ok(model.into())
}

#[::tracing::instrument(skip(db))]
pub async fn show(db: &DatabaseConnection, request: CourseShowRequest) -> Result<Course, Error> {
    let code = request.code.trim().to_uppercase();

    match Model::find_by_code(db, &code).await? {
        Some(model) => Ok(model.into()),
        None => Err(Error::not_found(format!("Course {} not found", code))),
    }
}

#[::tracing::instrument(skip(db))]
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Course>, Error> {
    let courses = Model::all(db).await?;

    Ok(courses.into_iter().map(Course::from).collect())
}
