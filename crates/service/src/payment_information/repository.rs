use std::sync::Arc;

use models::{
    cryptocurrency_address::{self, CryptocurrencyAddressValues},
    escrow::{self, EscrowValues},
    escrow_ratio::{self, EscrowRatioValues},
    item_price::{self, ItemPriceValues},
    payment_information::{self, PaymentInformationValues},
    shipping_price::{self, ShippingPriceValues},
};

use super::repo::seaorm::{
    SeaOrmAddressRepository, SeaOrmEscrowRatioRepository, SeaOrmEscrowRepository, SeaOrmItemPriceRepository,
    SeaOrmPaymentInformationRepository, SeaOrmShippingPriceRepository,
};
use crate::repository::{ChildRepository, Repository};

pub type PaymentInformationRepository =
    dyn Repository<Row = payment_information::Model, Values = PaymentInformationValues>;
pub type EscrowRepository = dyn ChildRepository<Row = escrow::Model, Values = EscrowValues>;
pub type EscrowRatioRepository = dyn ChildRepository<Row = escrow_ratio::Model, Values = EscrowRatioValues>;
pub type ItemPriceRepository = dyn ChildRepository<Row = item_price::Model, Values = ItemPriceValues>;
pub type ShippingPriceRepository = dyn ChildRepository<Row = shipping_price::Model, Values = ShippingPriceValues>;
pub type AddressRepository =
    dyn ChildRepository<Row = cryptocurrency_address::Model, Values = CryptocurrencyAddressValues>;

/// One repository per table of the payment tree.
#[derive(Clone)]
pub struct PaymentInformationRepositories {
    pub payment_information: Arc<PaymentInformationRepository>,
    pub escrow: Arc<EscrowRepository>,
    pub ratio: Arc<EscrowRatioRepository>,
    pub item_price: Arc<ItemPriceRepository>,
    pub shipping_price: Arc<ShippingPriceRepository>,
    pub address: Arc<AddressRepository>,
}

impl PaymentInformationRepositories {
    pub fn seaorm() -> Self {
        Self {
            payment_information: Arc::new(SeaOrmPaymentInformationRepository),
            escrow: Arc::new(SeaOrmEscrowRepository),
            ratio: Arc::new(SeaOrmEscrowRatioRepository),
            item_price: Arc::new(SeaOrmItemPriceRepository),
            shipping_price: Arc::new(SeaOrmShippingPriceRepository),
            address: Arc::new(SeaOrmAddressRepository),
        }
    }
}
