use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Course::Table)
                    .col(ColumnDef::new(Course::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Course::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Course::Year).integer().not_null())
                    .col(
                        ColumnDef::new(Course::Language)
                            .string()
                            .not_null()
                            .default("en"),
                    )
                    .col(ColumnDef::new(Course::NameEn).string().null())
                    .col(ColumnDef::new(Course::NameKz).string().null())
                    .col(ColumnDef::new(Course::NameRu).string().null())
                    .col(ColumnDef::new(Course::DepartmentId).uuid().null())
                    .col(ColumnDef::new(Course::HoursTheory).integer().null())
                    .col(ColumnDef::new(Course::HoursPractice).integer().null())
                    .col(ColumnDef::new(Course::HoursLabs).integer().null())
                    .col(ColumnDef::new(Course::Credits).integer().not_null())
                    .col(ColumnDef::new(Course::Ects).integer().not_null())
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Course::Table)
                    .col(Course::Year)
                    .name("idx_courses_year")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Course::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Code,
    Year,
    Language,
    NameEn,
    NameKz,
    NameRu,
    DepartmentId,
    HoursTheory,
    HoursPractice,
    HoursLabs,
    Credits,
    Ects,
}
