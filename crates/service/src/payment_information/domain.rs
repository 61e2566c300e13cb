use models::enums::{Currency, CryptocurrencyAddressType, EscrowType, PaymentType};
use models::{cryptocurrency_address, escrow, escrow_ratio, item_price, payment_information, shipping_price};
use serde::{Deserialize, Deserializer, Serialize};

/// Validated input for creating or replacing a payment tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInformationRequest {
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub escrow: Option<EscrowRequest>,
    #[serde(default, rename = "itemPrice", deserialize_with = "null_as_empty")]
    pub item_prices: Vec<ItemPriceRequest>,
    #[serde(default)]
    pub listing_item_id: Option<i32>,
    #[serde(default)]
    pub listing_item_template_id: Option<i32>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscrowRequest {
    #[serde(rename = "type")]
    pub escrow_type: EscrowType,
    pub ratio: RatioRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRequest {
    pub buyer: f64,
    pub seller: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriceRequest {
    pub currency: Currency,
    pub base_price: f64,
    #[serde(default)]
    pub shipping_price: Option<ShippingPriceRequest>,
    #[serde(default)]
    pub address: Option<AddressRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingPriceRequest {
    pub domestic: f64,
    pub international: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRequest {
    #[serde(rename = "type")]
    pub address_type: CryptocurrencyAddressType,
    pub address: String,
}

impl PaymentInformationRequest {
    pub fn values(&self) -> payment_information::PaymentInformationValues {
        payment_information::PaymentInformationValues {
            payment_type: self.payment_type,
            listing_item_id: self.listing_item_id,
            listing_item_template_id: self.listing_item_template_id,
        }
    }
}

impl EscrowRequest {
    pub fn values(&self, payment_information_id: i32) -> escrow::EscrowValues {
        escrow::EscrowValues { payment_information_id, escrow_type: self.escrow_type }
    }
}

impl RatioRequest {
    pub fn values(&self, escrow_id: i32) -> escrow_ratio::EscrowRatioValues {
        escrow_ratio::EscrowRatioValues { escrow_id, buyer: self.buyer, seller: self.seller }
    }
}

impl ItemPriceRequest {
    pub fn values(&self, payment_information_id: i32) -> item_price::ItemPriceValues {
        item_price::ItemPriceValues {
            payment_information_id,
            currency: self.currency,
            base_price: self.base_price,
        }
    }
}

impl ShippingPriceRequest {
    pub fn values(&self, item_price_id: i32) -> shipping_price::ShippingPriceValues {
        shipping_price::ShippingPriceValues {
            item_price_id,
            domestic: self.domestic,
            international: self.international,
        }
    }
}

impl AddressRequest {
    pub fn values(&self, item_price_id: i32) -> cryptocurrency_address::CryptocurrencyAddressValues {
        cryptocurrency_address::CryptocurrencyAddressValues {
            item_price_id,
            address_type: self.address_type,
            address: self.address.clone(),
        }
    }
}

/// Payment information with every owned row attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentInformationTree {
    #[serde(flatten)]
    pub payment_information: payment_information::Model,
    #[serde(rename = "Escrow")]
    pub escrow: Option<EscrowNode>,
    #[serde(rename = "ItemPrice")]
    pub item_prices: Vec<ItemPriceNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscrowNode {
    #[serde(flatten)]
    pub escrow: escrow::Model,
    #[serde(rename = "Ratio")]
    pub ratio: Option<escrow_ratio::Model>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPriceNode {
    #[serde(flatten)]
    pub item_price: item_price::Model,
    #[serde(rename = "ShippingPrice")]
    pub shipping_price: Option<shipping_price::Model>,
    #[serde(rename = "Address")]
    pub address: Option<cryptocurrency_address::Model>,
}

impl PaymentInformationTree {
    pub fn id(&self) -> i32 { self.payment_information.id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_reads_mixed_case_keys() {
        let req: PaymentInformationRequest = serde_json::from_value(json!({
            "type": "SALE",
            "escrow": {"type": "MAD", "ratio": {"buyer": 100, "seller": 100}},
            "itemPrice": [{
                "currency": "BITCOIN",
                "basePrice": 0.0001,
                "shippingPrice": {"domestic": 0.123, "international": 1.234},
                "address": {"type": "NORMAL", "address": "1234"}
            }],
            "listing_item_template_id": 0
        }))
        .unwrap();
        assert_eq!(req.payment_type, PaymentType::Sale);
        assert_eq!(req.escrow.as_ref().unwrap().ratio.buyer, 100.0);
        assert_eq!(req.item_prices[0].shipping_price.unwrap().international, 1.234);
        assert_eq!(req.listing_item_template_id, Some(0));
        assert_eq!(req.listing_item_id, None);
    }

    #[test]
    fn item_price_list_defaults_to_empty() {
        let req: PaymentInformationRequest =
            serde_json::from_value(json!({"type": "FREE", "listing_item_id": 3})).unwrap();
        assert!(req.item_prices.is_empty());
        assert!(req.escrow.is_none());
    }
}
