use models::{cryptocurrency_address, escrow_ratio, item_price, payment_information, shipping_price};
use serde_json::Value;

use super::domain::PaymentInformationRequest;
use crate::validation::{as_object, has_value, ValidationError, Validator};

/// Check a raw body and turn it into a typed request.
///
/// Runs in three passes, each returning early on failure: required keys,
/// typed decoding, then value ranges.
pub fn validate_request(body: &Value) -> Result<PaymentInformationRequest, ValidationError> {
    let obj = as_object(body)?;

    let mut shape = Validator::new();
    if !has_value(obj, "type") {
        shape.push("type", "is required");
    }
    let listing_item = has_value(obj, "listing_item_id");
    let template = has_value(obj, "listing_item_template_id");
    if listing_item && template {
        shape.push("listing_item_template_id", "listing_item_id and listing_item_template_id are mutually exclusive");
    } else if !listing_item && !template {
        shape.push("listing_item_id", "listing_item_id or listing_item_template_id required");
    }
    shape.finish()?;

    let request: PaymentInformationRequest = serde_json::from_value(body.clone())
        .map_err(|e| ValidationError::field("body", e.to_string()))?;

    let mut v = Validator::new();
    v.check(
        "listing_item_id",
        payment_information::validate_parent(request.listing_item_id, request.listing_item_template_id),
    );
    if let Some(escrow) = &request.escrow {
        v.check("escrow.ratio.buyer", escrow_ratio::validate_weight("buyer", escrow.ratio.buyer));
        v.check("escrow.ratio.seller", escrow_ratio::validate_weight("seller", escrow.ratio.seller));
    }
    for (i, price) in request.item_prices.iter().enumerate() {
        let field = format!("itemPrice[{i}].basePrice");
        v.check(field.clone(), item_price::validate_base_price(price.base_price));
        if request.payment_type.requires_price() && price.base_price == 0.0 {
            v.push(field, "must be greater than zero for SALE and RENT");
        }
        if let Some(shipping) = &price.shipping_price {
            v.check(
                format!("itemPrice[{i}].shippingPrice.domestic"),
                shipping_price::validate_amount("domestic", shipping.domestic),
            );
            v.check(
                format!("itemPrice[{i}].shippingPrice.international"),
                shipping_price::validate_amount("international", shipping.international),
            );
        }
        if let Some(address) = &price.address {
            v.check(
                format!("itemPrice[{i}].address.address"),
                cryptocurrency_address::validate_address(&address.address),
            );
        }
    }
    v.finish_with(request)
}
