//! Database migrations for the dashboard tables

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_customers::Migration),
            Box::new(m20250301_000003_create_invoices::Migration),
            Box::new(m20250301_000004_create_revenue::Migration),
        ]
    }
}

mod m20250301_000001_create_users {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_users"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .string_len(36)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Users::Name).string_len(255).not_null())
                        .col(
                            ColumnDef::new(Users::Email)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::Password).string_len(255).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
        Name,
        Email,
        Password,
    }
}

mod m20250301_000002_create_customers {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_customers"
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
                                .string_len(36)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Customers::Name).string_len(255).not_null())
                        .col(ColumnDef::new(Customers::Email).string_len(255).not_null())
                        .col(ColumnDef::new(Customers::ImageUrl).string_len(255).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Customers {
        Table,
        Id,
        Name,
        Email,
        ImageUrl,
    }
}

mod m20250301_000003_create_invoices {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_invoices"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Invoices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Invoices::Id)
                                .string_len(36)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Invoices::CustomerId).string_len(36).not_null())
                        .col(ColumnDef::new(Invoices::Amount).integer().not_null())
                        .col(ColumnDef::new(Invoices::Status).string_len(16).not_null())
                        .col(ColumnDef::new(Invoices::Date).date().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_invoices_customer")
                                .from(Invoices::Table, Invoices::CustomerId)
                                .to(Customers::Table, Customers::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_invoices_customer_id")
                        .table(Invoices::Table)
                        .col(Invoices::CustomerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_invoices_date")
                        .table(Invoices::Table)
                        .col(Invoices::Date)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Invoices::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Invoices {
        Table,
        Id,
        CustomerId,
        Amount,
        Status,
        Date,
    }

    #[derive(DeriveIden)]
    enum Customers {
        Table,
        Id,
    }
}

mod m20250301_000004_create_revenue {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000004_create_revenue"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Revenue::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Revenue::Month)
                                .string_len(4)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Revenue::Revenue).integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Revenue::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Revenue {
        Table,
        Month,
        Revenue,
    }
}
