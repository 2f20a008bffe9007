use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tagged_items::Entity")]
    TaggedItems,
}

impl Related<super::tagged_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaggedItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
