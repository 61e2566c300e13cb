use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
};

use models::{cryptocurrency_address, escrow, escrow_ratio, item_price, payment_information, shipping_price};

use crate::errors::ServiceError;
use crate::repository::{ChildRepository, Repository};

/// The tables differ only in entity, values type and parent column, so the
/// row operations are stamped out per table.
macro_rules! seaorm_repository {
    ($repo:ident, $entity:ident, $values:ty, $name:literal) => {
        pub struct $repo;

        #[async_trait]
        impl Repository for $repo {
            type Row = $entity::Model;
            type Values = $values;

            fn row_id(&self, row: &$entity::Model) -> i32 { row.id }

            async fn insert(&self, txn: &DatabaseTransaction, values: $values) -> Result<$entity::Model, ServiceError> {
                values.validate()?;
                Ok(values.into_active_model().insert(txn).await?)
            }

            async fn find_by_id(&self, txn: &DatabaseTransaction, id: i32) -> Result<Option<$entity::Model>, ServiceError> {
                Ok($entity::Entity::find_by_id(id).one(txn).await?)
            }

            async fn update(&self, txn: &DatabaseTransaction, id: i32, values: $values) -> Result<$entity::Model, ServiceError> {
                values.validate()?;
                let row = $entity::Entity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| ServiceError::not_found($name, id))?;
                let mut am: $entity::ActiveModel = row.into();
                values.apply(&mut am);
                Ok(am.update(txn).await?)
            }

            async fn delete(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, ServiceError> {
                let res = $entity::Entity::delete_by_id(id).exec(txn).await?;
                Ok(res.rows_affected > 0)
            }

            async fn find_all(&self, txn: &DatabaseTransaction) -> Result<Vec<$entity::Model>, ServiceError> {
                Ok($entity::Entity::find().order_by_asc($entity::Column::Id).all(txn).await?)
            }
        }
    };
    ($repo:ident, $entity:ident, $values:ty, $name:literal, parent = $parent:ident) => {
        seaorm_repository!($repo, $entity, $values, $name);

        #[async_trait]
        impl ChildRepository for $repo {
            async fn find_by_parent(&self, txn: &DatabaseTransaction, parent_id: i32) -> Result<Vec<$entity::Model>, ServiceError> {
                Ok($entity::Entity::find()
                    .filter($entity::Column::$parent.eq(parent_id))
                    .order_by_asc($entity::Column::Id)
                    .all(txn)
                    .await?)
            }
        }
    };
}

seaorm_repository!(
    SeaOrmPaymentInformationRepository,
    payment_information,
    payment_information::PaymentInformationValues,
    "payment_information"
);
seaorm_repository!(
    SeaOrmEscrowRepository,
    escrow,
    escrow::EscrowValues,
    "escrow",
    parent = PaymentInformationId
);
seaorm_repository!(
    SeaOrmEscrowRatioRepository,
    escrow_ratio,
    escrow_ratio::EscrowRatioValues,
    "escrow_ratio",
    parent = EscrowId
);
seaorm_repository!(
    SeaOrmItemPriceRepository,
    item_price,
    item_price::ItemPriceValues,
    "item_price",
    parent = PaymentInformationId
);
seaorm_repository!(
    SeaOrmShippingPriceRepository,
    shipping_price,
    shipping_price::ShippingPriceValues,
    "shipping_price",
    parent = ItemPriceId
);
seaorm_repository!(
    SeaOrmAddressRepository,
    cryptocurrency_address,
    cryptocurrency_address::CryptocurrencyAddressValues,
    "cryptocurrency_address",
    parent = ItemPriceId
);
