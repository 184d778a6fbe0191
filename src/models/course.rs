use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::entities::courses::{ActiveModel, Column, Entity, Model};

impl Model {
    pub async fn find_by_code<T: ToString>(
        db: &DatabaseConnection,
        code: T,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Code.eq(code.to_string()))
            .one(db)
            .await
    }

    pub async fn code_exists<T: ToString>(db: &DatabaseConnection, code: T) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Code.eq(code.to_string()))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .order_by_desc(Column::Year)
            .order_by_asc(Column::Code)
            .all(db)
            .await
    }

    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel::from(self.clone()).insert(db).await
    }
}
