use async_trait::async_trait;
use serde_json::Value;
use service::payment_information::PaymentInformationService;

use crate::rpc::{params, RpcCommand, RpcError};

pub struct CreatePaymentInformationCommand(pub PaymentInformationService);

#[async_trait]
impl RpcCommand for CreatePaymentInformationCommand {
    fn name(&self) -> &'static str { "createpaymentinformation" }
    fn usage(&self) -> &'static str { "<paymentInformation>" }
    fn description(&self) -> &'static str {
        "Create payment information with its escrow and item prices."
    }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let body = params::object(params, 0, "paymentInformation")?;
        Ok(serde_json::to_value(self.0.create(body).await?)?)
    }
}

pub struct GetPaymentInformationCommand(pub PaymentInformationService);

#[async_trait]
impl RpcCommand for GetPaymentInformationCommand {
    fn name(&self) -> &'static str { "getpaymentinformation" }
    fn usage(&self) -> &'static str { "<paymentInformationId>" }
    fn description(&self) -> &'static str { "Get payment information with every related row." }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let id = params::id(params, 0, "paymentInformationId")?;
        Ok(serde_json::to_value(self.0.find_one(id).await?)?)
    }
}

pub struct UpdatePaymentInformationCommand(pub PaymentInformationService);

#[async_trait]
impl RpcCommand for UpdatePaymentInformationCommand {
    fn name(&self) -> &'static str { "updatepaymentinformation" }
    fn usage(&self) -> &'static str { "<paymentInformationId> <paymentInformation>" }
    fn description(&self) -> &'static str { "Replace payment information and its related rows." }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let id = params::id(params, 0, "paymentInformationId")?;
        let body = params::object(params, 1, "paymentInformation")?;
        Ok(serde_json::to_value(self.0.update(id, body).await?)?)
    }
}

pub struct RemovePaymentInformationCommand(pub PaymentInformationService);

#[async_trait]
impl RpcCommand for RemovePaymentInformationCommand {
    fn name(&self) -> &'static str { "removepaymentinformation" }
    fn usage(&self) -> &'static str { "<paymentInformationId>" }
    fn description(&self) -> &'static str { "Remove payment information and everything it owns." }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let id = params::id(params, 0, "paymentInformationId")?;
        self.0.destroy(id).await?;
        Ok(Value::Null)
    }
}
