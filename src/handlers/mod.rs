use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::DbPool;
use crate::events::EventSender;
use crate::services::clients::ClientService;
use crate::services::hr::HrService;
use crate::services::inventory::InventoryService;
use crate::services::maintenance::MaintenanceService;
use crate::services::notifications::NotificationService;
use crate::services::projects::ProjectService;
use crate::services::quotations::QuotationService;
use crate::services::users::UserService;
use crate::services::visits::VisitService;

pub mod auth;
pub mod clients;
pub mod hr;
pub mod inventory;
pub mod maintenance;
pub mod notifications;
pub mod products;
pub mod projects;
pub mod quotations;
pub mod users;
pub mod visits;

/// All domain services, wired once at startup and shared through AppState.
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<UserService>,
    pub clients: Arc<ClientService>,
    pub inventory: Arc<InventoryService>,
    pub quotations: Arc<QuotationService>,
    pub projects: Arc<ProjectService>,
    pub maintenance: Arc<MaintenanceService>,
    pub notifications: Arc<NotificationService>,
    pub visits: Arc<VisitService>,
    pub hr: Arc<HrService>,
    pub auth: Arc<AuthService>,
}

impl AppServices {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: EventSender,
        auth_service: Arc<AuthService>,
    ) -> Self {
        let notifications = NotificationService::new(db_pool.clone(), event_sender.clone());

        Self {
            users: Arc::new(UserService::new(db_pool.clone())),
            clients: Arc::new(ClientService::new(db_pool.clone())),
            inventory: Arc::new(InventoryService::new(
                db_pool.clone(),
                event_sender.clone(),
                notifications.clone(),
            )),
            quotations: Arc::new(QuotationService::new(
                db_pool.clone(),
                event_sender.clone(),
                notifications.clone(),
            )),
            projects: Arc::new(ProjectService::new(
                db_pool.clone(),
                event_sender.clone(),
                notifications.clone(),
            )),
            maintenance: Arc::new(MaintenanceService::new(
                db_pool.clone(),
                event_sender,
                notifications.clone(),
            )),
            notifications: Arc::new(notifications),
            visits: Arc::new(VisitService::new(db_pool.clone())),
            hr: Arc::new(HrService::new(db_pool)),
            auth: auth_service,
        }
    }
}
