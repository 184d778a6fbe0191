use sea_orm::prelude::*;
use sea_orm::Condition;

use crate::entities::users::{ActiveModel, Column, Entity, Model};

impl Model {
    pub async fn email_exists<T: ToString>(db: &DatabaseConnection, email: T) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn username_exists<T: ToString>(
        db: &DatabaseConnection,
        username: T,
    ) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Username.eq(username.to_string()))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_email_or_username<T: ToString>(
        db: &DatabaseConnection,
        email_or_username: T,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(email_or_username.to_string()))
                    .add(Column::Email.eq(email_or_username.to_string())),
            )
            .one(db)
            .await
    }

    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel::from(self.clone()).insert(db).await
    }
}
