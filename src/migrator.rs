use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_catalog_tables::Migration),
            Box::new(m20250101_000002_create_customer_tables::Migration),
            Box::new(m20250101_000003_create_cart_and_tag_tables::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Collections {
    Table,
    Id,
    Title,
    FeaturedProductId,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Title,
    Slug,
    Description,
    UnitPriceCents,
    Inventory,
    LastUpdated,
    CollectionId,
}

#[derive(DeriveIden)]
enum Promotions {
    Table,
    Id,
    Description,
    Discount,
}

#[derive(DeriveIden)]
enum ProductPromotions {
    Table,
    ProductId,
    PromotionId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    ProductId,
    Name,
    Description,
    Date,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    BirthDate,
    Membership,
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    Street,
    City,
    Zip,
    CustomerId,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    PlacedAt,
    PaymentStatus,
    CustomerId,
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    UnitPriceCents,
}

#[derive(DeriveIden)]
enum Carts {
    Table,
    Id,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    Id,
    CartId,
    ProductId,
    Quantity,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Label,
}

#[derive(DeriveIden)]
enum TaggedItems {
    Table,
    Id,
    TagId,
    ContentKind,
    ObjectId,
}

#[derive(DeriveIden)]
enum AuditLogs {
    Table,
    Id,
    Action,
    Resource,
    Metadata,
    CreatedAt,
}

mod m20250101_000001_create_catalog_tables {
    use sea_orm_migration::prelude::*;
    use sea_orm_migration::sea_orm::DbBackend;

    use super::{Collections, ProductPromotions, Products, Promotions, Reviews};

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000001_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Collections::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Collections::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Collections::Title).string_len(255).not_null())
                        .col(ColumnDef::new(Collections::FeaturedProductId).integer().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Products::Title).string_len(255).not_null())
                        .col(ColumnDef::new(Products::Slug).string_len(255).not_null())
                        .col(ColumnDef::new(Products::Description).text().null())
                        .col(ColumnDef::new(Products::UnitPriceCents).big_integer().not_null())
                        .col(ColumnDef::new(Products::Inventory).integer().not_null())
                        .col(
                            ColumnDef::new(Products::LastUpdated)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::CollectionId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_collection")
                                .from(Products::Table, Products::CollectionId)
                                .to(Collections::Table, Collections::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_products_collection_id")
                        .table(Products::Table)
                        .col(Products::CollectionId)
                        .to_owned(),
                )
                .await?;

            // SQLite cannot add a constraint to an existing table; the featured
            // product pointer is cleared by the delete path there.
            if manager.get_database_backend() != DbBackend::Sqlite {
                manager
                    .create_foreign_key(
                        ForeignKey::create()
                            .name("fk_collections_featured_product")
                            .from(Collections::Table, Collections::FeaturedProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .to_owned(),
                    )
                    .await?;
            }

            manager
                .create_table(
                    Table::create()
                        .table(Promotions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Promotions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Promotions::Description).string_len(255).not_null())
                        .col(ColumnDef::new(Promotions::Discount).double().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProductPromotions::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(ProductPromotions::ProductId).integer().not_null())
                        .col(ColumnDef::new(ProductPromotions::PromotionId).integer().not_null())
                        .primary_key(
                            Index::create()
                                .col(ProductPromotions::ProductId)
                                .col(ProductPromotions::PromotionId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_promotions_product")
                                .from(ProductPromotions::Table, ProductPromotions::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_promotions_promotion")
                                .from(ProductPromotions::Table, ProductPromotions::PromotionId)
                                .to(Promotions::Table, Promotions::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Reviews::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Reviews::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Reviews::ProductId).integer().not_null())
                        .col(ColumnDef::new(Reviews::Name).string_len(255).not_null())
                        .col(ColumnDef::new(Reviews::Description).text().not_null())
                        .col(ColumnDef::new(Reviews::Date).date().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_reviews_product")
                                .from(Reviews::Table, Reviews::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Reviews::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProductPromotions::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Promotions::Table).to_owned())
                .await?;
            if manager.get_database_backend() != DbBackend::Sqlite {
                manager
                    .drop_foreign_key(
                        ForeignKey::drop()
                            .name("fk_collections_featured_product")
                            .table(Collections::Table)
                            .to_owned(),
                    )
                    .await?;
            }
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Collections::Table).to_owned())
                .await
        }
    }
}

mod m20250101_000002_create_customer_tables {
    use sea_orm_migration::prelude::*;

    use super::{Addresses, Customers, OrderItems, Orders, Products};

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000002_create_customer_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Customers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Customers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Customers::FirstName).string_len(150).not_null())
                        .col(ColumnDef::new(Customers::LastName).string_len(150).not_null())
                        .col(ColumnDef::new(Customers::Email).string_len(255).not_null())
                        .col(ColumnDef::new(Customers::Phone).string_len(255).not_null())
                        .col(ColumnDef::new(Customers::BirthDate).date().null())
                        .col(
                            ColumnDef::new(Customers::Membership)
                                .string_len(1)
                                .not_null()
                                .default("B"),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Addresses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Addresses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Addresses::Street).string_len(255).not_null())
                        .col(ColumnDef::new(Addresses::City).string_len(255).not_null())
                        .col(ColumnDef::new(Addresses::Zip).integer().null())
                        .col(ColumnDef::new(Addresses::CustomerId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_addresses_customer")
                                .from(Addresses::Table, Addresses::CustomerId)
                                .to(Customers::Table, Customers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Orders::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Orders::PlacedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Orders::PaymentStatus)
                                .string_len(1)
                                .not_null()
                                .default("P"),
                        )
                        .col(ColumnDef::new(Orders::CustomerId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_orders_customer")
                                .from(Orders::Table, Orders::CustomerId)
                                .to(Customers::Table, Customers::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderItems::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(OrderItems::OrderId).integer().not_null())
                        .col(ColumnDef::new(OrderItems::ProductId).integer().not_null())
                        .col(ColumnDef::new(OrderItems::Quantity).integer().not_null())
                        .col(ColumnDef::new(OrderItems::UnitPriceCents).big_integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_items_order")
                                .from(OrderItems::Table, OrderItems::OrderId)
                                .to(Orders::Table, Orders::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_items_product")
                                .from(OrderItems::Table, OrderItems::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_order_items_product_id")
                        .table(OrderItems::Table)
                        .col(OrderItems::ProductId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OrderItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Addresses::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }
}

mod m20250101_000003_create_cart_and_tag_tables {
    use sea_orm_migration::prelude::*;

    use super::{AuditLogs, CartItems, Carts, Products, TaggedItems, Tags};

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000003_create_cart_and_tag_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Carts::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Carts::Id).uuid().not_null().primary_key())
                        .col(
                            ColumnDef::new(Carts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CartItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CartItems::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CartItems::CartId).uuid().not_null())
                        .col(ColumnDef::new(CartItems::ProductId).integer().not_null())
                        .col(ColumnDef::new(CartItems::Quantity).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_cart_items_cart")
                                .from(CartItems::Table, CartItems::CartId)
                                .to(Carts::Table, Carts::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_cart_items_product")
                                .from(CartItems::Table, CartItems::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_cart_items_cart_product")
                        .table(CartItems::Table)
                        .col(CartItems::CartId)
                        .col(CartItems::ProductId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Tags::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Tags::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Tags::Label)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(TaggedItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TaggedItems::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(TaggedItems::TagId).integer().not_null())
                        .col(ColumnDef::new(TaggedItems::ContentKind).string_len(32).not_null())
                        .col(ColumnDef::new(TaggedItems::ObjectId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_tagged_items_tag")
                                .from(TaggedItems::Table, TaggedItems::TagId)
                                .to(Tags::Table, Tags::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_tagged_items_object")
                        .table(TaggedItems::Table)
                        .col(TaggedItems::ContentKind)
                        .col(TaggedItems::ObjectId)
                        .col(TaggedItems::TagId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(AuditLogs::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(AuditLogs::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(AuditLogs::Action).string_len(64).not_null())
                        .col(ColumnDef::new(AuditLogs::Resource).string_len(64).null())
                        .col(ColumnDef::new(AuditLogs::Metadata).text().null())
                        .col(
                            ColumnDef::new(AuditLogs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AuditLogs::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(TaggedItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Tags::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CartItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Carts::Table).to_owned())
                .await
        }
    }
}
