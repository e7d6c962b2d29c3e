use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::entities::maintenance_request::MaintenanceStatus;
use crate::entities::project::ProjectStage;
use crate::entities::quotation::QuotationStatus;

/// Events emitted after state changes commit. Handlers here are side-effect
/// only; nothing downstream may mutate the records that produced the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    QuotationCreated(Uuid),
    QuotationStatusChanged {
        quotation_id: Uuid,
        old_status: QuotationStatus,
        new_status: QuotationStatus,
    },
    QuotationConverted {
        quotation_id: Uuid,
        project_id: Uuid,
    },
    QuotationReverted {
        quotation_id: Uuid,
        project_id: Uuid,
    },
    ProjectStageChanged {
        project_id: Uuid,
        old_stage: ProjectStage,
        new_stage: ProjectStage,
        progress: i32,
    },
    ProjectDelivered(Uuid),
    InventoryAdjusted {
        product_type_id: Uuid,
        old_stock: Decimal,
        new_stock: Decimal,
    },
    LowStock {
        product_type_id: Uuid,
        stock: Decimal,
    },
    MaintenanceRequestCreated(Uuid),
    MaintenanceStatusChanged {
        request_id: Uuid,
        old_status: MaintenanceStatus,
        new_status: MaintenanceStatus,
    },
    NotificationsFanned {
        kind: String,
        recipients: usize,
        at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event; failure means the processing loop is gone, which is
    /// logged by callers rather than treated as a request error.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Drains the event channel, logging each event. Runs for the lifetime of
/// the process; exits when all senders are dropped.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match &event {
            Event::QuotationConverted {
                quotation_id,
                project_id,
            } => {
                info!(
                    quotation_id = %quotation_id,
                    project_id = %project_id,
                    "quotation converted to project"
                );
            }
            Event::QuotationReverted {
                quotation_id,
                project_id,
            } => {
                info!(
                    quotation_id = %quotation_id,
                    project_id = %project_id,
                    "project conversion reverted"
                );
            }
            Event::LowStock {
                product_type_id,
                stock,
            } => {
                warn!(
                    product_type_id = %product_type_id,
                    stock = %stock,
                    "stock fell below threshold"
                );
            }
            Event::ProjectDelivered(project_id) => {
                info!(project_id = %project_id, "project delivered");
            }
            other => {
                info!(event = ?other, "event processed");
            }
        }
    }

    error!("Event processing loop terminated; channel closed");
}
