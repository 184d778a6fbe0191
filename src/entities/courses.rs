use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub year: i32,
    pub language: String,
    pub name_en: Option<String>,
    pub name_kz: Option<String>,
    pub name_ru: Option<String>,
    pub department_id: Option<Uuid>,
    pub hours_theory: Option<i32>,
    pub hours_practice: Option<i32>,
    pub hours_labs: Option<i32>,
    pub credits: i32,
    pub ects: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
