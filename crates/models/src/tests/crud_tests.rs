use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Statement};

use super::setup_test_db;
use crate::enums::{CryptocurrencyAddressType, Currency, EscrowType, PaymentType};
use crate::{
    cryptocurrency_address, escrow, escrow_ratio, item_category, item_price, payment_information,
    shipping_price,
};

fn root_values() -> payment_information::PaymentInformationValues {
    payment_information::PaymentInformationValues {
        payment_type: PaymentType::Sale,
        listing_item_id: None,
        listing_item_template_id: Some(0),
    }
}

#[tokio::test]
async fn test_payment_tree_rows_and_cascade() -> Result<()> {
    let db = setup_test_db().await?;

    let root = root_values().into_active_model().insert(&db).await?;
    assert_eq!(root.payment_type, PaymentType::Sale);
    assert_eq!(root.listing_item_template_id, Some(0));

    let esc = escrow::EscrowValues { payment_information_id: root.id, escrow_type: EscrowType::Mad }
        .into_active_model()
        .insert(&db)
        .await?;
    let ratio = escrow_ratio::EscrowRatioValues { escrow_id: esc.id, buyer: 100.0, seller: 100.0 }
        .into_active_model()
        .insert(&db)
        .await?;
    let price = item_price::ItemPriceValues { payment_information_id: root.id, currency: Currency::Bitcoin, base_price: 0.0001 }
        .into_active_model()
        .insert(&db)
        .await?;
    let shipping = shipping_price::ShippingPriceValues { item_price_id: price.id, domestic: 0.123, international: 1.234 }
        .into_active_model()
        .insert(&db)
        .await?;
    let address = cryptocurrency_address::CryptocurrencyAddressValues {
        item_price_id: price.id,
        address_type: CryptocurrencyAddressType::Normal,
        address: "1234".into(),
    }
    .into_active_model()
    .insert(&db)
    .await?;

    // floats come back bit-for-bit
    let found = item_price::Entity::find_by_id(price.id).one(&db).await?.unwrap();
    assert_eq!(found.base_price, 0.0001);
    let found = shipping_price::Entity::find_by_id(shipping.id).one(&db).await?.unwrap();
    assert_eq!(found.domestic, 0.123);
    assert_eq!(found.international, 1.234);

    let by_parent = escrow::Entity::find()
        .filter(escrow::Column::PaymentInformationId.eq(root.id))
        .all(&db)
        .await?;
    assert_eq!(by_parent.len(), 1);

    // deleting the root removes every owned row
    payment_information::Entity::delete_by_id(root.id).exec(&db).await?;
    assert!(escrow::Entity::find_by_id(esc.id).one(&db).await?.is_none());
    assert!(escrow_ratio::Entity::find_by_id(ratio.id).one(&db).await?.is_none());
    assert!(item_price::Entity::find_by_id(price.id).one(&db).await?.is_none());
    assert!(shipping_price::Entity::find_by_id(shipping.id).one(&db).await?.is_none());
    assert!(cryptocurrency_address::Entity::find_by_id(address.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_enum_columns_store_upper_case_names() -> Result<()> {
    let db = setup_test_db().await?;
    let root = root_values().into_active_model().insert(&db).await?;

    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(
            backend,
            format!("SELECT \"type\" FROM payment_information WHERE id = {}", root.id),
        ))
        .await?
        .expect("row");
    let stored: String = row.try_get("", "type")?;
    assert_eq!(stored, "SALE");
    Ok(())
}

#[tokio::test]
async fn test_single_escrow_per_payment_information() -> Result<()> {
    let db = setup_test_db().await?;
    let root = root_values().into_active_model().insert(&db).await?;

    escrow::EscrowValues { payment_information_id: root.id, escrow_type: EscrowType::Mad }
        .into_active_model()
        .insert(&db)
        .await?;
    let second = escrow::EscrowValues { payment_information_id: root.id, escrow_type: EscrowType::Nop }
        .into_active_model()
        .insert(&db)
        .await;
    assert!(second.is_err(), "unique index must reject a second escrow");
    Ok(())
}

#[tokio::test]
async fn test_child_requires_existing_parent() -> Result<()> {
    let db = setup_test_db().await?;
    let orphan = escrow::EscrowValues { payment_information_id: 4242, escrow_type: EscrowType::Mad }
        .into_active_model()
        .insert(&db)
        .await;
    assert!(orphan.is_err(), "foreign key must reject an unknown parent");
    Ok(())
}

#[tokio::test]
async fn test_item_category_update_and_cascade() -> Result<()> {
    let db = setup_test_db().await?;

    let root = item_category::ItemCategoryValues {
        key: Some("cat_ROOT".into()),
        name: "ROOT".into(),
        description: Some("root item category".into()),
        parent_item_category_id: None,
    }
    .into_active_model()
    .insert(&db)
    .await?;
    let child = item_category::ItemCategoryValues {
        key: Some("cat_electronics".into()),
        name: "Electronics".into(),
        description: None,
        parent_item_category_id: Some(root.id),
    }
    .into_active_model()
    .insert(&db)
    .await?;

    let mut am: item_category::ActiveModel = child.clone().into();
    item_category::ItemCategoryValues {
        key: child.key.clone(),
        name: "Electronics & Technology".into(),
        description: Some("gadgets".into()),
        parent_item_category_id: Some(root.id),
    }
    .apply(&mut am);
    let updated = am.update(&db).await?;
    assert_eq!(updated.name, "Electronics & Technology");

    let by_key = item_category::Entity::find()
        .filter(item_category::Column::Key.eq("cat_electronics"))
        .one(&db)
        .await?;
    assert_eq!(by_key.map(|c| c.id), Some(child.id));

    item_category::Entity::delete_by_id(root.id).exec(&db).await?;
    assert!(item_category::Entity::find_by_id(child.id).one(&db).await?.is_none());
    Ok(())
}

#[test]
fn test_values_validation() {
    let mut v = root_values();
    assert!(v.validate().is_ok());
    v.listing_item_id = Some(1);
    assert!(v.validate().is_err());
    v.listing_item_id = None;
    v.listing_item_template_id = None;
    assert!(v.validate().is_err());

    let ratio = escrow_ratio::EscrowRatioValues { escrow_id: 1, buyer: -1.0, seller: 0.0 };
    assert!(ratio.validate().is_err());
    let shipping = shipping_price::ShippingPriceValues { item_price_id: 1, domestic: 0.0, international: f64::NAN };
    assert!(shipping.validate().is_err());
    let address = cryptocurrency_address::CryptocurrencyAddressValues {
        item_price_id: 1,
        address_type: CryptocurrencyAddressType::Stealth,
        address: "  ".into(),
    };
    assert!(address.validate().is_err());
}
