use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct RatioInputDoc { pub buyer: f64, pub seller: f64 }

#[derive(Serialize, ToSchema)]
pub struct EscrowInputDoc {
    /// `NOP` or `MAD`
    #[serde(rename = "type")]
    pub escrow_type: String,
    pub ratio: RatioInputDoc,
}

#[derive(Serialize, ToSchema)]
pub struct ShippingPriceInputDoc { pub domestic: f64, pub international: f64 }

#[derive(Serialize, ToSchema)]
pub struct AddressInputDoc {
    /// `NORMAL` or `STEALTH`
    #[serde(rename = "type")]
    pub address_type: String,
    pub address: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriceInputDoc {
    /// `BITCOIN` or `PARTICL`
    pub currency: String,
    pub base_price: f64,
    pub shipping_price: Option<ShippingPriceInputDoc>,
    pub address: Option<AddressInputDoc>,
}

/// Exactly one of `listing_item_id` and `listing_item_template_id` is required.
#[derive(Serialize, ToSchema)]
pub struct PaymentInformationInputDoc {
    /// `SALE`, `FREE` or `RENT`
    #[serde(rename = "type")]
    pub payment_type: String,
    pub escrow: Option<EscrowInputDoc>,
    #[serde(rename = "itemPrice")]
    pub item_price: Vec<ItemPriceInputDoc>,
    pub listing_item_id: Option<i32>,
    pub listing_item_template_id: Option<i32>,
}

/// The parent may be named by id or by key, not both.
#[derive(Serialize, ToSchema)]
pub struct ItemCategoryInputDoc {
    pub name: String,
    pub key: Option<String>,
    pub description: Option<String>,
    pub parent_item_category_id: Option<i32>,
    pub parent_item_category_key: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RpcRequestDoc {
    pub jsonrpc: Option<String>,
    /// e.g. `getcategory`, `createpaymentinformation`, `help`
    pub method: String,
    #[schema(value_type = Vec<Object>)]
    pub params: Vec<serde_json::Value>,
    pub id: Option<i64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::payment_information::list,
        crate::routes::payment_information::create,
        crate::routes::payment_information::get_one,
        crate::routes::payment_information::update,
        crate::routes::payment_information::destroy,
        crate::routes::item_categories::list,
        crate::routes::item_categories::create,
        crate::routes::item_categories::root,
        crate::routes::item_categories::by_key,
        crate::routes::item_categories::get_one,
        crate::routes::item_categories::update,
        crate::routes::item_categories::destroy,
        crate::routes::rpc::call,
    ),
    components(
        schemas(
            HealthResponse,
            RatioInputDoc,
            EscrowInputDoc,
            ShippingPriceInputDoc,
            AddressInputDoc,
            ItemPriceInputDoc,
            PaymentInformationInputDoc,
            ItemCategoryInputDoc,
            RpcRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "payment"),
        (name = "category"),
        (name = "rpc")
    )
)]
pub struct ApiDoc;
