use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::item_category::ItemCategoryService;
use service::payment_information::PaymentInformationService;

use crate::rpc::{commands, CommandRegistry};

/// Shared by every handler; services are built once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub payment_information: PaymentInformationService,
    pub item_categories: ItemCategoryService,
    pub rpc: Arc<CommandRegistry>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let payment_information = PaymentInformationService::with_seaorm(db.clone());
        let item_categories = ItemCategoryService::with_seaorm(db);
        let rpc = Arc::new(commands::registry(item_categories.clone(), payment_information.clone()));
        Self { payment_information, item_categories, rpc }
    }
}
