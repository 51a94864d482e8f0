use chrono::{DateTime, Utc};

use super::customer::{
    AddressRecord, BoughtProductRecord, CartRuleRecord, ConnectionRecord, CustomerId,
    CustomerRecord, GroupRecord, MessageRecord, OrderRecord, SentEmailRecord, ViewedProductRecord,
};
use super::errors::DomainError;
use super::rank::SalesRank;
use super::redirect::Tab;

/// Read-only access to everything the customer view shows.
pub trait CustomerViewRepository: Send + Sync + 'static {
    /// Non-deleted customer by id.
    fn find_customer(&self, id: CustomerId) -> Result<Option<CustomerRecord>, DomainError>;
    /// Whether a registered (non-guest, non-deleted) customer uses `email`.
    fn customer_exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
    fn gender_name(&self, gender_id: i32, lang_id: i32) -> Result<Option<String>, DomainError>;
    fn shop_name(&self, shop_id: i32) -> Result<Option<String>, DomainError>;
    fn language_name(&self, lang_id: i32) -> Result<Option<String>, DomainError>;
    fn last_visit(&self, id: CustomerId) -> Result<Option<DateTime<Utc>>, DomainError>;
    fn sales_rank(&self, id: CustomerId) -> Result<SalesRank, DomainError>;
    /// All orders of the customer, restricted to `shop_id` when given.
    fn orders(&self, id: CustomerId, shop_id: Option<i32>) -> Result<Vec<OrderRecord>, DomainError>;
    /// Order lines of the customer's valid orders.
    fn bought_products(&self, id: CustomerId) -> Result<Vec<BoughtProductRecord>, DomainError>;
    /// Products placed in a cart but absent from every valid order.
    fn viewed_products(
        &self,
        id: CustomerId,
        lang_id: i32,
    ) -> Result<Vec<ViewedProductRecord>, DomainError>;
    fn messages(&self, id: CustomerId) -> Result<Vec<MessageRecord>, DomainError>;
    fn cart_rules(&self, id: CustomerId, lang_id: i32) -> Result<Vec<CartRuleRecord>, DomainError>;
    fn last_emails(&self, email: &str) -> Result<Vec<SentEmailRecord>, DomainError>;
    fn last_connections(&self, id: CustomerId) -> Result<Vec<ConnectionRecord>, DomainError>;
    fn groups(&self, id: CustomerId, lang_id: i32) -> Result<Vec<GroupRecord>, DomainError>;
    fn addresses(&self, id: CustomerId, lang_id: i32) -> Result<Vec<AddressRecord>, DomainError>;
}

/// Message lookup keyed by `(message, domain)`. Unknown messages come back
/// unchanged.
pub trait Translator: Send + Sync {
    fn trans(&self, message: &str, domain: &str) -> String;
}

pub trait ProductLinkGenerator: Send + Sync {
    fn product_link(
        &self,
        product_id: i32,
        link_rewrite: &str,
        category_link_rewrite: &str,
        shop_id: i32,
    ) -> String;
}

/// Named route to URL. `None` for unknown routes.
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send + Sync {
    fn generate(&self, route_name: &str) -> Option<String>;
}

/// Legacy controller name to back-office URL.
#[cfg_attr(test, mockall::automock)]
pub trait LegacyAdminLinks: Send + Sync {
    fn admin_link(&self, controller: &str) -> Option<String>;
}

#[cfg_attr(test, mockall::automock)]
pub trait TabRepository: Send + Sync {
    fn find_by_id(&self, id: i32) -> Result<Option<Tab>, DomainError>;
}

/// Session-scoped store of the page a user asked for before logging in.
#[cfg_attr(test, mockall::automock)]
pub trait TargetPathStore {
    fn target_path(&self, firewall: &str) -> Option<String>;
}
