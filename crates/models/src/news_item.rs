use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{category, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a news item. The foreign key on `category_id` rejects unknown categories
/// with [`errors::ModelError::ForeignKey`].
pub async fn create(
    db: &DatabaseConnection,
    category_id: i32,
    title: &str,
    description: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        category_id: Set(category_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_category(db: &DatabaseConnection, category_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Lookup by the composite (category, news) key; a matching id in another category is not found.
pub async fn find_in_category(
    db: &DatabaseConnection,
    category_id: i32,
    id: i32,
) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .filter(Column::Id.eq(id))
        .one(db)
        .await?)
}
