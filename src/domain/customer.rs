use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How many recent emails and connections the view lists.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i32);

impl CustomerId {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Records returned by the repository ───────────────────────────────────────
//
// Plain data, one struct per query. Nothing here loads anything lazily.

#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub shop_id: i32,
    pub lang_id: i32,
    pub gender_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// `None` also covers the legacy `0000-00-00` value.
    pub birthday: Option<NaiveDate>,
    pub note: Option<String>,
    pub is_guest: bool,
    pub active: bool,
    pub newsletter: bool,
    pub optin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: i32,
    pub valid: bool,
    pub total_paid_tax_incl: BigDecimal,
    pub conversion_rate: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct BoughtProductRecord {
    pub order_id: i32,
    pub ordered_at: DateTime<Utc>,
    pub product_name: String,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct ViewedProductRecord {
    pub product_id: i32,
    pub name: String,
    pub link_rewrite: String,
    pub category_link_rewrite: String,
    /// Shop the product was added to the cart from.
    pub cart_shop_id: i32,
}

#[derive(Debug, Clone)]
pub struct MessageRecord {
    pub thread_id: i32,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CartRuleRecord {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
    pub quantity: i32,
    pub quantity_for_user: i32,
}

#[derive(Debug, Clone)]
pub struct SentEmailRecord {
    pub sent_at: DateTime<Utc>,
    pub language: String,
    pub subject: String,
    pub template: String,
}

#[derive(Debug, Clone)]
pub struct ConnectionRecord {
    pub id: i32,
    pub connected_at: DateTime<Utc>,
    pub pages: i64,
    /// Time spent, already formatted as `HH:MM:SS`.
    pub time: String,
    pub http_referer: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GroupRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AddressRecord {
    pub id: i32,
    pub company: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub address1: String,
    pub address2: Option<String>,
    pub postcode: Option<String>,
    pub city: String,
    pub country: String,
    pub phone: Option<String>,
    pub phone_mobile: Option<String>,
}
