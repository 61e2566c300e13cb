use sea_orm::{DatabaseConnection, DatabaseTransaction};
use serde_json::Value;
use tracing::{debug, info, instrument};

use models::payment_information;

use super::domain::{EscrowNode, EscrowRequest, ItemPriceNode, ItemPriceRequest, PaymentInformationRequest, PaymentInformationTree};
use super::repository::PaymentInformationRepositories;
use super::validation::validate_request;
use crate::errors::ServiceError;
use crate::repository::{begin, finish, ChildRepository};

const ENTITY: &str = "payment_information";

/// Builds, reads, replaces and removes whole payment trees.
///
/// The root row is written first and every child after its own parent, so
/// foreign keys always resolve. Each public operation is one transaction.
#[derive(Clone)]
pub struct PaymentInformationService {
    db: DatabaseConnection,
    repos: PaymentInformationRepositories,
}

impl PaymentInformationService {
    pub fn new(db: DatabaseConnection, repos: PaymentInformationRepositories) -> Self {
        Self { db, repos }
    }

    pub fn with_seaorm(db: DatabaseConnection) -> Self {
        Self::new(db, PaymentInformationRepositories::seaorm())
    }

    /// Validate `body`, insert the whole tree and return it as stored.
    #[instrument(skip(self, body))]
    pub async fn create(&self, body: &Value) -> Result<PaymentInformationTree, ServiceError> {
        let request = validate_request(body)?;
        let txn = begin(&self.db).await?;
        let result = self.insert_tree(&txn, &request).await;
        let id = finish(txn, result).await?;
        info!(payment_information_id = id, item_prices = request.item_prices.len(), "payment_information_created");
        self.find_one(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i32) -> Result<PaymentInformationTree, ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.load_tree(&txn, id).await;
        finish(txn, result).await
    }

    /// Root rows only; relations are not attached.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<payment_information::Model>, ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.repos.payment_information.find_all(&txn).await;
        finish(txn, result).await
    }

    /// Replace the tree under `id` with `body`.
    ///
    /// Item prices are paired with stored ones by position: stored rows in id
    /// order are updated in place, extra input entries are inserted and
    /// surplus stored rows are deleted. An escrow absent from `body` is
    /// removed.
    #[instrument(skip(self, body))]
    pub async fn update(&self, id: i32, body: &Value) -> Result<PaymentInformationTree, ServiceError> {
        let request = validate_request(body)?;
        let txn = begin(&self.db).await?;
        let result = self.update_tree(&txn, id, &request).await;
        finish(txn, result).await?;
        info!(payment_information_id = id, item_prices = request.item_prices.len(), "payment_information_updated");
        self.find_one(id).await
    }

    /// Delete the root; owned rows go with it through the cascading keys.
    #[instrument(skip(self))]
    pub async fn destroy(&self, id: i32) -> Result<(), ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.repos.payment_information.delete(&txn, id).await;
        if !finish(txn, result).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(payment_information_id = id, "payment_information_destroyed");
        Ok(())
    }

    async fn insert_tree(&self, txn: &DatabaseTransaction, request: &PaymentInformationRequest) -> Result<i32, ServiceError> {
        let root = self.repos.payment_information.insert(txn, request.values()).await?;
        if let Some(escrow) = &request.escrow {
            self.insert_escrow(txn, root.id, escrow).await?;
        }
        for price in &request.item_prices {
            self.insert_item_price(txn, root.id, price).await?;
        }
        Ok(root.id)
    }

    async fn insert_escrow(&self, txn: &DatabaseTransaction, payment_information_id: i32, input: &EscrowRequest) -> Result<(), ServiceError> {
        let escrow = self.repos.escrow.insert(txn, input.values(payment_information_id)).await?;
        self.repos.ratio.insert(txn, input.ratio.values(escrow.id)).await?;
        Ok(())
    }

    async fn insert_item_price(&self, txn: &DatabaseTransaction, payment_information_id: i32, input: &ItemPriceRequest) -> Result<(), ServiceError> {
        let price = self.repos.item_price.insert(txn, input.values(payment_information_id)).await?;
        if let Some(shipping) = &input.shipping_price {
            self.repos.shipping_price.insert(txn, shipping.values(price.id)).await?;
        }
        if let Some(address) = &input.address {
            self.repos.address.insert(txn, address.values(price.id)).await?;
        }
        Ok(())
    }

    async fn load_tree(&self, txn: &DatabaseTransaction, id: i32) -> Result<PaymentInformationTree, ServiceError> {
        let payment_information = self
            .repos
            .payment_information
            .find_by_id(txn, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;

        let escrow = match self.repos.escrow.find_by_parent(txn, id).await?.into_iter().next() {
            Some(escrow) => {
                let ratio = self.repos.ratio.find_by_parent(txn, escrow.id).await?.into_iter().next();
                Some(EscrowNode { escrow, ratio })
            }
            None => None,
        };

        let mut item_prices = Vec::new();
        for item_price in self.repos.item_price.find_by_parent(txn, id).await? {
            let shipping_price = self.repos.shipping_price.find_by_parent(txn, item_price.id).await?.into_iter().next();
            let address = self.repos.address.find_by_parent(txn, item_price.id).await?.into_iter().next();
            item_prices.push(ItemPriceNode { item_price, shipping_price, address });
        }

        Ok(PaymentInformationTree { payment_information, escrow, item_prices })
    }

    async fn update_tree(&self, txn: &DatabaseTransaction, id: i32, request: &PaymentInformationRequest) -> Result<(), ServiceError> {
        self.repos.payment_information.update(txn, id, request.values()).await?;

        let existing_escrow = self.repos.escrow.find_by_parent(txn, id).await?.into_iter().next();
        match (existing_escrow, &request.escrow) {
            (Some(row), Some(input)) => {
                self.repos.escrow.update(txn, row.id, input.values(id)).await?;
                sync_one(self.repos.ratio.as_ref(), txn, row.id, Some(input.ratio.values(row.id))).await?;
            }
            (None, Some(input)) => self.insert_escrow(txn, id, input).await?,
            (Some(row), None) => {
                debug!(escrow_id = row.id, "escrow removed by update");
                self.repos.escrow.delete(txn, row.id).await?;
            }
            (None, None) => {}
        }

        let existing = self.repos.item_price.find_by_parent(txn, id).await?;
        for (i, input) in request.item_prices.iter().enumerate() {
            match existing.get(i) {
                Some(row) => {
                    self.repos.item_price.update(txn, row.id, input.values(id)).await?;
                    let shipping = input.shipping_price.map(|s| s.values(row.id));
                    sync_one(self.repos.shipping_price.as_ref(), txn, row.id, shipping).await?;
                    let address = input.address.as_ref().map(|a| a.values(row.id));
                    sync_one(self.repos.address.as_ref(), txn, row.id, address).await?;
                }
                None => self.insert_item_price(txn, id, input).await?,
            }
        }
        for surplus in existing.iter().skip(request.item_prices.len()) {
            debug!(item_price_id = surplus.id, "item price removed by update");
            self.repos.item_price.delete(txn, surplus.id).await?;
        }
        Ok(())
    }
}

/// Bring the single child of `parent_id` in line with `values`: update it,
/// create it, or delete it when `values` is `None`.
async fn sync_one<R, V>(
    repo: &dyn ChildRepository<Row = R, Values = V>,
    txn: &DatabaseTransaction,
    parent_id: i32,
    values: Option<V>,
) -> Result<(), ServiceError>
where
    R: Send + Sync,
    V: Send + Sync,
{
    let existing = repo.find_by_parent(txn, parent_id).await?.into_iter().next();
    match (existing, values) {
        (Some(row), Some(values)) => {
            repo.update(txn, repo.row_id(&row), values).await?;
        }
        (None, Some(values)) => {
            repo.insert(txn, values).await?;
        }
        (Some(row), None) => {
            repo.delete(txn, repo.row_id(&row)).await?;
        }
        (None, None) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use models::cryptocurrency_address::{self, CryptocurrencyAddressValues};
    use models::enums::{Currency, CryptocurrencyAddressType, EscrowType, PaymentType};
    use models::{escrow, escrow_ratio, item_price, shipping_price};
    use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
    use serde_json::json;

    use super::*;
    use crate::lookup::Lookup;
    use crate::repository::Repository;
    use crate::test_support::get_db;

    fn sale_body() -> Value {
        json!({
            "type": "SALE",
            "escrow": {"type": "MAD", "ratio": {"buyer": 100, "seller": 100}},
            "itemPrice": [{
                "currency": "BITCOIN",
                "basePrice": 0.0001,
                "shippingPrice": {"domestic": 0.123, "international": 1.234},
                "address": {"type": "NORMAL", "address": "1234"}
            }],
            "listing_item_template_id": 0
        })
    }

    fn free_body() -> Value {
        json!({
            "type": "FREE",
            "escrow": {"type": "NOP", "ratio": {"buyer": 0, "seller": 0}},
            "itemPrice": [{
                "currency": "PARTICL",
                "basePrice": 0.002,
                "shippingPrice": {"domestic": 0.234, "international": 2.345},
                "address": {"type": "STEALTH", "address": "4567"}
            }],
            "listing_item_template_id": 0
        })
    }

    fn price_body(prices: &[f64]) -> Value {
        let item_price: Vec<Value> = prices
            .iter()
            .map(|p| json!({"currency": "PARTICL", "basePrice": p}))
            .collect();
        json!({"type": "RENT", "itemPrice": item_price, "listing_item_id": 9})
    }

    #[tokio::test]
    async fn create_then_find_returns_same_tree() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db);

        let created = svc.create(&sale_body()).await?;
        let pi = &created.payment_information;
        assert_eq!(pi.payment_type, PaymentType::Sale);
        assert_eq!(pi.listing_item_template_id, Some(0));
        assert_eq!(pi.listing_item_id, None);

        let escrow = created.escrow.as_ref().unwrap();
        assert_eq!(escrow.escrow.escrow_type, EscrowType::Mad);
        assert_eq!(escrow.escrow.payment_information_id, pi.id);
        let ratio = escrow.ratio.as_ref().unwrap();
        assert_eq!((ratio.buyer, ratio.seller), (100.0, 100.0));

        assert_eq!(created.item_prices.len(), 1);
        let price = &created.item_prices[0];
        assert_eq!(price.item_price.currency, Currency::Bitcoin);
        assert_eq!(price.item_price.base_price, 0.0001);
        let shipping = price.shipping_price.as_ref().unwrap();
        assert_eq!((shipping.domestic, shipping.international), (0.123, 1.234));
        let address = price.address.as_ref().unwrap();
        assert_eq!(address.address_type, CryptocurrencyAddressType::Normal);
        assert_eq!(address.address, "1234");

        let fetched = svc.find_one(created.id()).await?;
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_values() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db);

        let created = svc.create(&sale_body()).await?;
        let escrow_id = created.escrow.as_ref().unwrap().escrow.id;
        let price_id = created.item_prices[0].item_price.id;

        let updated = svc.update(created.id(), &free_body()).await?;
        assert_eq!(updated.payment_information.payment_type, PaymentType::Free);
        let escrow = updated.escrow.as_ref().unwrap();
        assert_eq!(escrow.escrow.id, escrow_id);
        assert_eq!(escrow.escrow.escrow_type, EscrowType::Nop);
        let ratio = escrow.ratio.as_ref().unwrap();
        assert_eq!((ratio.buyer, ratio.seller), (0.0, 0.0));

        assert_eq!(updated.item_prices.len(), 1);
        let price = &updated.item_prices[0];
        assert_eq!(price.item_price.id, price_id);
        assert_eq!(price.item_price.currency, Currency::Particl);
        assert_eq!(price.item_price.base_price, 0.002);
        let shipping = price.shipping_price.as_ref().unwrap();
        assert_eq!((shipping.domestic, shipping.international), (0.234, 2.345));
        let address = price.address.as_ref().unwrap();
        assert_eq!(address.address_type, CryptocurrencyAddressType::Stealth);
        assert_eq!(address.address, "4567");

        assert_eq!(svc.find_one(created.id()).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn update_without_escrow_or_children_removes_them() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db.clone());

        let created = svc.create(&sale_body()).await?;
        let updated = svc
            .update(created.id(), &json!({
                "type": "SALE",
                "itemPrice": [{"currency": "BITCOIN", "basePrice": 1.5}],
                "listing_item_template_id": 0
            }))
            .await?;
        assert!(updated.escrow.is_none());
        assert!(updated.item_prices[0].shipping_price.is_none());
        assert!(updated.item_prices[0].address.is_none());
        assert_eq!(escrow_ratio::Entity::find().count(&db).await?, 0);
        assert_eq!(cryptocurrency_address::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn update_pairs_item_prices_by_position() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db.clone());

        let created = svc.create(&price_body(&[1.0, 2.0])).await?;
        let first_id = created.item_prices[0].item_price.id;
        let second_id = created.item_prices[1].item_price.id;

        let grown = svc.update(created.id(), &price_body(&[10.0, 20.0, 30.0])).await?;
        let ids: Vec<i32> = grown.item_prices.iter().map(|p| p.item_price.id).collect();
        assert_eq!(&ids[..2], &[first_id, second_id]);
        let prices: Vec<f64> = grown.item_prices.iter().map(|p| p.item_price.base_price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 30.0]);

        let shrunk = svc.update(created.id(), &price_body(&[5.0])).await?;
        assert_eq!(shrunk.item_prices.len(), 1);
        assert_eq!(shrunk.item_prices[0].item_price.id, first_id);
        assert_eq!(shrunk.item_prices[0].item_price.base_price, 5.0);
        assert_eq!(item_price::Entity::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db);
        match svc.update(404, &free_body()).await {
            Err(ServiceError::NotFound { lookup, .. }) => assert_eq!(lookup, Lookup::ById(404)),
            other => panic!("expected NotFound, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn invalid_bodies_never_reach_the_database() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db);

        assert!(matches!(svc.create(&json!({})).await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.create(&json!({"type": "SALE"})).await, Err(ServiceError::Validation(_))));
        assert!(matches!(
            svc.create(&json!({"type": "SALE", "listing_item_id": 1, "listing_item_template_id": 1})).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(svc.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_without_parent_ref_keeps_stored_tree() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db);

        let created = svc.create(&sale_body()).await?;
        let mut body = free_body();
        if let Some(obj) = body.as_object_mut() {
            obj.remove("listing_item_template_id");
        }
        match svc.update(created.id(), &body).await {
            Err(ServiceError::Validation(e)) => assert!(e.has_field("listing_item_id")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(svc.find_one(created.id()).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn find_all_returns_roots_only() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db);

        let created = svc.create(&sale_body()).await?;
        let all = svc.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created.payment_information);

        let json = serde_json::to_value(&all)?;
        assert!(json[0].get("Escrow").is_none());
        assert_eq!(json[0]["type"], "SALE");
        Ok(())
    }

    #[tokio::test]
    async fn destroy_cascades_and_then_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db.clone());

        let created = svc.create(&sale_body()).await?;
        svc.destroy(created.id()).await?;

        match svc.find_one(created.id()).await {
            Err(ServiceError::NotFound { entity, lookup }) => {
                assert_eq!(entity, "payment_information");
                assert_eq!(lookup, Lookup::ById(created.id()));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(escrow::Entity::find().count(&db).await?, 0);
        assert_eq!(escrow_ratio::Entity::find().count(&db).await?, 0);
        assert_eq!(item_price::Entity::find().count(&db).await?, 0);
        assert_eq!(shipping_price::Entity::find().count(&db).await?, 0);
        assert_eq!(cryptocurrency_address::Entity::find().count(&db).await?, 0);

        assert!(matches!(svc.destroy(created.id()).await, Err(ServiceError::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn serialized_tree_uses_relation_keys() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PaymentInformationService::with_seaorm(db);

        let created = svc.create(&sale_body()).await?;
        let json = serde_json::to_value(&created)?;
        assert_eq!(json["type"], "SALE");
        assert_eq!(json["listingItemTemplateId"], 0);
        assert_eq!(json["Escrow"]["type"], "MAD");
        assert_eq!(json["Escrow"]["Ratio"]["buyer"], 100.0);
        assert_eq!(json["ItemPrice"][0]["basePrice"], 0.0001);
        assert_eq!(json["ItemPrice"][0]["ShippingPrice"]["international"], 1.234);
        assert_eq!(json["ItemPrice"][0]["Address"]["address"], "1234");
        Ok(())
    }

    /// Address store that always fails, to break a create half way.
    struct FailingAddressRepository;

    #[async_trait]
    impl Repository for FailingAddressRepository {
        type Row = cryptocurrency_address::Model;
        type Values = CryptocurrencyAddressValues;

        fn row_id(&self, row: &Self::Row) -> i32 { row.id }

        async fn insert(&self, _: &DatabaseTransaction, _: Self::Values) -> Result<Self::Row, ServiceError> {
            Err(ServiceError::Db(DbErr::Custom("address store offline".into())))
        }
        async fn find_by_id(&self, _: &DatabaseTransaction, _: i32) -> Result<Option<Self::Row>, ServiceError> {
            Ok(None)
        }
        async fn update(&self, _: &DatabaseTransaction, id: i32, _: Self::Values) -> Result<Self::Row, ServiceError> {
            Err(ServiceError::not_found("cryptocurrency_address", id))
        }
        async fn delete(&self, _: &DatabaseTransaction, _: i32) -> Result<bool, ServiceError> {
            Ok(false)
        }
        async fn find_all(&self, _: &DatabaseTransaction) -> Result<Vec<Self::Row>, ServiceError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl ChildRepository for FailingAddressRepository {
        async fn find_by_parent(&self, _: &DatabaseTransaction, _: i32) -> Result<Vec<Self::Row>, ServiceError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn failing_child_insert_leaves_no_partial_tree() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut repos = PaymentInformationRepositories::seaorm();
        repos.address = Arc::new(FailingAddressRepository);
        let svc = PaymentInformationService::new(db.clone(), repos);

        let err = svc.create(&sale_body()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        assert_eq!(payment_information::Entity::find().count(&db).await?, 0);
        assert_eq!(escrow::Entity::find().count(&db).await?, 0);
        assert_eq!(item_price::Entity::find().count(&db).await?, 0);
        assert_eq!(shipping_price::Entity::find().count(&db).await?, 0);
        Ok(())
    }
}
