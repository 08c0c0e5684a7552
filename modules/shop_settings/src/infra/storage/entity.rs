//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Option slots table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "options")]
pub struct Model {
    /// Slot name (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub option_name: String,

    /// Whole slot value as JSON
    pub option_value: Json,

    /// Last write timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Post meta module
pub mod post_meta {
    use sea_orm::entity::prelude::*;

    /// Post meta table entity, one row per (post, key)
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "postmeta")]
    pub struct Model {
        /// Post ID (part of composite primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub post_id: i64,

        /// Meta key (part of composite primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub meta_key: String,

        /// Meta value
        #[sea_orm(column_type = "Text")]
        pub meta_value: String,

        /// Last write timestamp
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
