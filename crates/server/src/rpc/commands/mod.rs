pub mod help;
pub mod item_category;
pub mod payment_information;

use std::sync::Arc;

use service::item_category::ItemCategoryService;
use service::payment_information::PaymentInformationService;

use self::help::HelpCommand;
use self::item_category::{
    AddCategoryCommand, GetCategoriesCommand, GetCategoryCommand, RemoveCategoryCommand, UpdateCategoryCommand,
};
use self::payment_information::{
    CreatePaymentInformationCommand, GetPaymentInformationCommand, RemovePaymentInformationCommand,
    UpdatePaymentInformationCommand,
};
use super::{CommandRegistry, RpcCommand};

/// Registry with every marketplace command plus `help`.
pub fn registry(categories: ItemCategoryService, payments: PaymentInformationService) -> CommandRegistry {
    let commands: Vec<Arc<dyn RpcCommand>> = vec![
        Arc::new(GetCategoryCommand(categories.clone())),
        Arc::new(GetCategoriesCommand(categories.clone())),
        Arc::new(AddCategoryCommand(categories.clone())),
        Arc::new(UpdateCategoryCommand(categories.clone())),
        Arc::new(RemoveCategoryCommand(categories)),
        Arc::new(CreatePaymentInformationCommand(payments.clone())),
        Arc::new(GetPaymentInformationCommand(payments.clone())),
        Arc::new(UpdatePaymentInformationCommand(payments.clone())),
        Arc::new(RemovePaymentInformationCommand(payments)),
    ];

    let mut registry = CommandRegistry::new();
    let texts = commands.iter().map(|c| (c.name(), c.help())).collect();
    for command in commands {
        registry.register(command);
    }
    registry.register(Arc::new(HelpCommand::new(texts)));
    registry
}
