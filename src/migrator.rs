use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_clients_table::Migration),
            Box::new(m20240101_000003_create_catalog_tables::Migration),
            Box::new(m20240101_000004_create_quotations_tables::Migration),
            Box::new(m20240101_000005_create_projects_tables::Migration),
            Box::new(m20240101_000006_create_maintenance_tables::Migration),
            Box::new(m20240101_000007_create_notifications_table::Migration),
            Box::new(m20240101_000008_create_sales_visits_table::Migration),
            Box::new(m20240101_000009_create_hr_tables::Migration),
        ]
    }
}

mod m20240101_000001_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_users_table"
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
                        .col(ColumnDef::new(Users::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Users::Name).string().not_null())
                        .col(ColumnDef::new(Users::Email).string().not_null())
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Users::Role).string().not_null())
                        .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_users_email")
                        .table(Users::Table)
                        .col(Users::Email)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_users_role")
                        .table(Users::Table)
                        .col(Users::Role)
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
        PasswordHash,
        Role,
        CreatedAt,
    }
}

mod m20240101_000002_create_clients_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_clients_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Clients::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Clients::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Clients::Name).string().not_null())
                        .col(ColumnDef::new(Clients::Phone).string().not_null())
                        .col(ColumnDef::new(Clients::Email).string().not_null())
                        .col(ColumnDef::new(Clients::City).string().not_null())
                        .col(ColumnDef::new(Clients::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_clients_email")
                        .table(Clients::Table)
                        .col(Clients::Email)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Clients::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Clients {
        Table,
        Id,
        Name,
        Phone,
        Email,
        City,
        CreatedAt,
    }
}

mod m20240101_000003_create_catalog_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ProductTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductTypes::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ProductTypes::Name).string().not_null())
                        .col(ColumnDef::new(ProductTypes::Category).string().not_null())
                        .col(ColumnDef::new(ProductTypes::Unit).string().not_null())
                        .col(
                            ColumnDef::new(ProductTypes::WarrantyYears)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(ProductTypes::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(InventoryItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::ProductTypeId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::Stock)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_items_product_type_id")
                        .table(InventoryItems::Table)
                        .col(InventoryItems::ProductTypeId)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProductTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ProductTypes {
        Table,
        Id,
        Name,
        Category,
        Unit,
        WarrantyYears,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum InventoryItems {
        Table,
        Id,
        ProductTypeId,
        Stock,
        UpdatedAt,
    }
}

mod m20240101_000004_create_quotations_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_quotations_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Quotations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Quotations::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Quotations::QuotationNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Quotations::ClientId).uuid().not_null())
                        .col(ColumnDef::new(Quotations::OwnerId).uuid().not_null())
                        .col(ColumnDef::new(Quotations::ProjectName).string().not_null())
                        .col(ColumnDef::new(Quotations::Status).string().not_null())
                        .col(ColumnDef::new(Quotations::PreviousStatus).string().null())
                        .col(
                            ColumnDef::new(Quotations::Discount)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::DiscountMode)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Quotations::Tax)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Quotations::TaxMode).string().not_null())
                        .col(
                            ColumnDef::new(Quotations::Subtotal)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::Total)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Quotations::ContractFile).string().null())
                        .col(ColumnDef::new(Quotations::CreatedAt).timestamp().not_null())
                        .col(
                            ColumnDef::new(Quotations::Version)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_quotations_number")
                        .table(Quotations::Table)
                        .col(Quotations::QuotationNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_quotations_client_id")
                        .table(Quotations::Table)
                        .col(Quotations::ClientId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_quotations_status")
                        .table(Quotations::Table)
                        .col(Quotations::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(QuotationItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(QuotationItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuotationItems::QuotationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuotationItems::ProductTypeId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuotationItems::Quantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuotationItems::UnitPrice)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(QuotationItems::Width).decimal().null())
                        .col(ColumnDef::new(QuotationItems::Height).decimal().null())
                        .col(
                            ColumnDef::new(QuotationItems::Position)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_quotation_items_quotation_id")
                        .table(QuotationItems::Table)
                        .col(QuotationItems::QuotationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(QuotationItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Quotations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Quotations {
        Table,
        Id,
        QuotationNumber,
        ClientId,
        OwnerId,
        ProjectName,
        Status,
        PreviousStatus,
        Discount,
        DiscountMode,
        Tax,
        TaxMode,
        Subtotal,
        Total,
        ContractFile,
        CreatedAt,
        Version,
    }

    #[derive(DeriveIden)]
    enum QuotationItems {
        Table,
        Id,
        QuotationId,
        ProductTypeId,
        Quantity,
        UnitPrice,
        Width,
        Height,
        Position,
    }
}

mod m20240101_000005_create_projects_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_projects_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Projects::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Projects::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Projects::ProjectNumber).string().not_null())
                        .col(ColumnDef::new(Projects::QuotationId).uuid().not_null())
                        .col(ColumnDef::new(Projects::ClientId).uuid().not_null())
                        .col(ColumnDef::new(Projects::Name).string().not_null())
                        .col(ColumnDef::new(Projects::Stage).string().not_null())
                        .col(
                            ColumnDef::new(Projects::Progress)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Projects::AssignedTeam).string().null())
                        .col(ColumnDef::new(Projects::PostponeReason).string().null())
                        .col(ColumnDef::new(Projects::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Projects::UpdatedAt).timestamp().not_null())
                        .col(
                            ColumnDef::new(Projects::Version)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_projects_number")
                        .table(Projects::Table)
                        .col(Projects::ProjectNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_projects_quotation_id")
                        .table(Projects::Table)
                        .col(Projects::QuotationId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_projects_stage")
                        .table(Projects::Table)
                        .col(Projects::Stage)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProjectAttachments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProjectAttachments::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProjectAttachments::ProjectId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ProjectAttachments::Kind).string().not_null())
                        .col(
                            ColumnDef::new(ProjectAttachments::FileRef)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProjectAttachments::UploadedBy)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProjectAttachments::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_project_attachments_project_id")
                        .table(ProjectAttachments::Table)
                        .col(ProjectAttachments::ProjectId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProjectAttachments::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Projects::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Projects {
        Table,
        Id,
        ProjectNumber,
        QuotationId,
        ClientId,
        Name,
        Stage,
        Progress,
        AssignedTeam,
        PostponeReason,
        CreatedAt,
        UpdatedAt,
        Version,
    }

    #[derive(DeriveIden)]
    enum ProjectAttachments {
        Table,
        Id,
        ProjectId,
        Kind,
        FileRef,
        UploadedBy,
        CreatedAt,
    }
}

mod m20240101_000006_create_maintenance_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_maintenance_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MaintenanceRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaintenanceRequests::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::TicketNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaintenanceRequests::ProjectId).uuid().null())
                        .col(
                            ColumnDef::new(MaintenanceRequests::ClientName)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::Title)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::Description)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::Status)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::UnderWarranty)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::ScheduledFor)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::CreatedBy)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRequests::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_maintenance_requests_ticket_number")
                        .table(MaintenanceRequests::Table)
                        .col(MaintenanceRequests::TicketNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_maintenance_requests_project_id")
                        .table(MaintenanceRequests::Table)
                        .col(MaintenanceRequests::ProjectId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(MaintenanceStatusLogs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaintenanceStatusLogs::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceStatusLogs::MaintenanceRequestId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceStatusLogs::FromStatus)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceStatusLogs::ToStatus)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaintenanceStatusLogs::Note).string().null())
                        .col(
                            ColumnDef::new(MaintenanceStatusLogs::ChangedBy)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceStatusLogs::ChangedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_maintenance_status_logs_request_id")
                        .table(MaintenanceStatusLogs::Table)
                        .col(MaintenanceStatusLogs::MaintenanceRequestId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaintenanceStatusLogs::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(MaintenanceRequests::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum MaintenanceRequests {
        Table,
        Id,
        TicketNumber,
        ProjectId,
        ClientName,
        Title,
        Description,
        Status,
        UnderWarranty,
        ScheduledFor,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum MaintenanceStatusLogs {
        Table,
        Id,
        MaintenanceRequestId,
        FromStatus,
        ToStatus,
        Note,
        ChangedBy,
        ChangedAt,
    }
}

mod m20240101_000007_create_notifications_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_notifications_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Notifications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Notifications::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Notifications::UserId).uuid().not_null())
                        .col(ColumnDef::new(Notifications::Kind).string().not_null())
                        .col(ColumnDef::new(Notifications::Title).string().not_null())
                        .col(ColumnDef::new(Notifications::Body).string().not_null())
                        .col(ColumnDef::new(Notifications::EntityId).uuid().null())
                        .col(
                            ColumnDef::new(Notifications::Read)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Notifications::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_notifications_user_id")
                        .table(Notifications::Table)
                        .col(Notifications::UserId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Notifications::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Notifications {
        Table,
        Id,
        UserId,
        Kind,
        Title,
        Body,
        EntityId,
        Read,
        CreatedAt,
    }
}

mod m20240101_000008_create_sales_visits_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_sales_visits_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SalesVisits::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SalesVisits::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SalesVisits::SalesRepId).uuid().not_null())
                        .col(ColumnDef::new(SalesVisits::ClientId).uuid().not_null())
                        .col(ColumnDef::new(SalesVisits::VisitDate).date().not_null())
                        .col(ColumnDef::new(SalesVisits::Purpose).string().not_null())
                        .col(ColumnDef::new(SalesVisits::Outcome).string().not_null())
                        .col(ColumnDef::new(SalesVisits::Notes).string().null())
                        .col(
                            ColumnDef::new(SalesVisits::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sales_visits_rep_date")
                        .table(SalesVisits::Table)
                        .col(SalesVisits::SalesRepId)
                        .col(SalesVisits::VisitDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SalesVisits::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SalesVisits {
        Table,
        Id,
        SalesRepId,
        ClientId,
        VisitDate,
        Purpose,
        Outcome,
        Notes,
        CreatedAt,
    }
}

mod m20240101_000009_create_hr_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000009_create_hr_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Employees::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Employees::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Employees::Name).string().not_null())
                        .col(ColumnDef::new(Employees::JobTitle).string().not_null())
                        .col(ColumnDef::new(Employees::Department).string().not_null())
                        .col(
                            ColumnDef::new(Employees::Salary)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Employees::HiredOn).date().not_null())
                        .col(ColumnDef::new(Employees::UserId).uuid().null())
                        .col(ColumnDef::new(Employees::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CustodyEntries::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CustodyEntries::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(CustodyEntries::EmployeeId).uuid().not_null())
                        .col(
                            ColumnDef::new(CustodyEntries::EntryType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(CustodyEntries::Amount).decimal().not_null())
                        .col(ColumnDef::new(CustodyEntries::Reason).string().not_null())
                        .col(ColumnDef::new(CustodyEntries::RecordedBy).uuid().not_null())
                        .col(
                            ColumnDef::new(CustodyEntries::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_custody_entries_employee_id")
                        .table(CustodyEntries::Table)
                        .col(CustodyEntries::EmployeeId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CustodyEntries::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Employees::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Employees {
        Table,
        Id,
        Name,
        JobTitle,
        Department,
        Salary,
        HiredOn,
        UserId,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum CustodyEntries {
        Table,
        Id,
        EmployeeId,
        EntryType,
        Amount,
        Reason,
        RecordedBy,
        CreatedAt,
    }
}
