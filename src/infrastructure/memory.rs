//! In-process implementation of the repository ports, for tests and local
//! demos without a database.

use std::collections::{BTreeMap, HashMap, HashSet};

use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};

use crate::domain::customer::{
    AddressRecord, BoughtProductRecord, CartRuleRecord, ConnectionRecord, CustomerId,
    CustomerRecord, GroupRecord, MessageRecord, OrderRecord, SentEmailRecord, ViewedProductRecord,
    RECENT_ACTIVITY_LIMIT,
};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CustomerViewRepository, TabRepository};
use crate::domain::rank::{competition_rank, SalesRank};
use crate::domain::redirect::Tab;

#[derive(Debug, Clone)]
pub struct StoredOrder {
    pub customer_id: CustomerId,
    pub shop_id: i32,
    pub order: OrderRecord,
    pub total_paid_real: BigDecimal,
    pub ordered_at: DateTime<Utc>,
    /// `(product_id, product_name, quantity)`
    pub lines: Vec<(i32, String, i32)>,
}

#[derive(Debug, Clone)]
pub struct StoredCartProduct {
    pub customer_id: CustomerId,
    pub product_id: i32,
    pub cart_shop_id: i32,
}

#[derive(Debug, Clone)]
pub struct StoredProduct {
    pub id: i32,
    pub lang_id: i32,
    pub name: String,
    pub link_rewrite: String,
    pub category_link_rewrite: String,
}

/// Everything lives in plain vectors; names other than product names are
/// stored already resolved for the context language.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub customers: Vec<CustomerRecord>,
    pub genders: HashMap<i32, String>,
    pub shops: HashMap<i32, String>,
    pub languages: HashMap<i32, String>,
    pub orders: Vec<StoredOrder>,
    pub cart_products: Vec<StoredCartProduct>,
    pub products: Vec<StoredProduct>,
    pub messages: Vec<(CustomerId, MessageRecord)>,
    pub cart_rules: Vec<(CustomerId, CartRuleRecord)>,
    pub emails: Vec<(String, SentEmailRecord)>,
    pub connections: Vec<(CustomerId, ConnectionRecord)>,
    pub groups: Vec<(CustomerId, GroupRecord)>,
    pub addresses: Vec<(CustomerId, AddressRecord)>,
    pub tabs: Vec<Tab>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn valid_paid_totals(&self) -> Vec<(CustomerId, BigDecimal)> {
        let mut totals: BTreeMap<CustomerId, BigDecimal> = BTreeMap::new();
        for stored in self.orders.iter().filter(|o| o.order.valid) {
            *totals.entry(stored.customer_id).or_insert_with(BigDecimal::zero) += &stored.total_paid_real;
        }
        totals.into_iter().collect()
    }

    fn customer_connections(&self, id: CustomerId) -> Vec<&ConnectionRecord> {
        let mut connections: Vec<_> = self
            .connections
            .iter()
            .filter(|(owner, _)| *owner == id)
            .map(|(_, c)| c)
            .collect();
        connections.sort_by(|a, b| b.connected_at.cmp(&a.connected_at));
        connections
    }
}

impl CustomerViewRepository for InMemoryStore {
    fn find_customer(&self, id: CustomerId) -> Result<Option<CustomerRecord>, DomainError> {
        Ok(self.customers.iter().find(|c| c.id == id).cloned())
    }

    fn customer_exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let email = email.to_lowercase();
        Ok(self
            .customers
            .iter()
            .any(|c| !c.is_guest && c.email.to_lowercase() == email))
    }

    fn gender_name(&self, gender_id: i32, _lang_id: i32) -> Result<Option<String>, DomainError> {
        Ok(self.genders.get(&gender_id).cloned())
    }

    fn shop_name(&self, shop_id: i32) -> Result<Option<String>, DomainError> {
        Ok(self.shops.get(&shop_id).cloned())
    }

    fn language_name(&self, lang_id: i32) -> Result<Option<String>, DomainError> {
        Ok(self.languages.get(&lang_id).cloned())
    }

    fn last_visit(&self, id: CustomerId) -> Result<Option<DateTime<Utc>>, DomainError> {
        Ok(self.customer_connections(id).first().map(|c| c.connected_at))
    }

    fn sales_rank(&self, id: CustomerId) -> Result<SalesRank, DomainError> {
        Ok(competition_rank(&self.valid_paid_totals(), id))
    }

    fn orders(&self, id: CustomerId, shop_id: Option<i32>) -> Result<Vec<OrderRecord>, DomainError> {
        Ok(self
            .orders
            .iter()
            .filter(|o| o.customer_id == id)
            .filter(|o| shop_id.map_or(true, |shop| o.shop_id == shop))
            .map(|o| o.order.clone())
            .collect())
    }

    fn bought_products(&self, id: CustomerId) -> Result<Vec<BoughtProductRecord>, DomainError> {
        let mut valid: Vec<_> = self
            .orders
            .iter()
            .filter(|o| o.customer_id == id && o.order.valid)
            .collect();
        valid.sort_by(|a, b| b.ordered_at.cmp(&a.ordered_at));

        Ok(valid
            .into_iter()
            .flat_map(|o| {
                o.lines.iter().map(move |(_, name, quantity)| BoughtProductRecord {
                    order_id: o.order.id,
                    ordered_at: o.ordered_at,
                    product_name: name.clone(),
                    quantity: *quantity,
                })
            })
            .collect())
    }

    fn viewed_products(&self, id: CustomerId, lang_id: i32) -> Result<Vec<ViewedProductRecord>, DomainError> {
        let purchased: HashSet<i32> = self
            .orders
            .iter()
            .filter(|o| o.customer_id == id && o.order.valid)
            .flat_map(|o| o.lines.iter().map(|(product_id, _, _)| *product_id))
            .collect();

        let mut seen = HashSet::new();
        let mut viewed = Vec::new();
        for cart_product in self.cart_products.iter().filter(|cp| cp.customer_id == id) {
            if purchased.contains(&cart_product.product_id)
                || !seen.insert((cart_product.product_id, cart_product.cart_shop_id))
            {
                continue;
            }
            let Some(product) = self
                .products
                .iter()
                .find(|p| p.id == cart_product.product_id && p.lang_id == lang_id)
            else {
                continue;
            };
            viewed.push(ViewedProductRecord {
                product_id: product.id,
                name: product.name.clone(),
                link_rewrite: product.link_rewrite.clone(),
                category_link_rewrite: product.category_link_rewrite.clone(),
                cart_shop_id: cart_product.cart_shop_id,
            });
        }
        Ok(viewed)
    }

    fn messages(&self, id: CustomerId) -> Result<Vec<MessageRecord>, DomainError> {
        let mut messages: Vec<_> = self
            .messages
            .iter()
            .filter(|(owner, _)| *owner == id)
            .map(|(_, m)| m.clone())
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    fn cart_rules(&self, id: CustomerId, _lang_id: i32) -> Result<Vec<CartRuleRecord>, DomainError> {
        Ok(self
            .cart_rules
            .iter()
            .filter(|(owner, _)| *owner == id)
            .map(|(_, r)| r.clone())
            .collect())
    }

    fn last_emails(&self, email: &str) -> Result<Vec<SentEmailRecord>, DomainError> {
        let mut emails: Vec<_> = self
            .emails
            .iter()
            .filter(|(recipient, _)| recipient == email)
            .map(|(_, e)| e.clone())
            .collect();
        emails.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        emails.truncate(RECENT_ACTIVITY_LIMIT);
        Ok(emails)
    }

    fn last_connections(&self, id: CustomerId) -> Result<Vec<ConnectionRecord>, DomainError> {
        Ok(self
            .customer_connections(id)
            .into_iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .cloned()
            .collect())
    }

    fn groups(&self, id: CustomerId, _lang_id: i32) -> Result<Vec<GroupRecord>, DomainError> {
        Ok(self
            .groups
            .iter()
            .filter(|(owner, _)| *owner == id)
            .map(|(_, g)| g.clone())
            .collect())
    }

    fn addresses(&self, id: CustomerId, _lang_id: i32) -> Result<Vec<AddressRecord>, DomainError> {
        Ok(self
            .addresses
            .iter()
            .filter(|(owner, _)| *owner == id)
            .map(|(_, a)| a.clone())
            .collect())
    }
}

impl TabRepository for InMemoryStore {
    fn find_by_id(&self, id: i32) -> Result<Option<Tab>, DomainError> {
        Ok(self.tabs.iter().find(|t| t.id == id).cloned())
    }
}
