//! Read model returned by the customer view query.
//!
//! Every section is a flat value type. Absent data is always an explicit
//! default ("--", "Unknown", an empty list), never a missing field.

use bigdecimal::BigDecimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::customer::CustomerId;
use super::rank::SalesRank;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViewableCustomer {
    #[schema(value_type = i32)]
    pub customer_id: CustomerId,
    pub general_information: GeneralInformation,
    pub personal_information: PersonalInformation,
    pub orders_information: OrdersInformation,
    pub carts_information: Vec<CartInformation>,
    pub products_information: ProductsInformation,
    pub messages_information: Vec<MessageInformation>,
    pub discounts_information: Vec<DiscountInformation>,
    pub sent_emails_information: Vec<SentEmailInformation>,
    pub last_connections_information: Vec<LastConnectionInformation>,
    pub groups_information: Vec<GroupInformation>,
    pub addresses_information: Vec<AddressInformation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GeneralInformation {
    pub private_note: String,
    pub customer_by_same_email_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Subscriptions {
    pub newsletter: bool,
    pub partner_offers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PersonalInformation {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_guest: bool,
    pub social_title: String,
    pub birthday: String,
    pub registration_date: String,
    pub last_update_date: String,
    pub last_visit_date: String,
    #[schema(value_type = Option<u32>)]
    pub rank_by_sales: SalesRank,
    pub shop_name: String,
    pub language_name: String,
    pub subscriptions: Subscriptions,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderSummary {
    pub order_id: i32,
    #[schema(value_type = String)]
    pub total_paid_tax_incl: BigDecimal,
    #[schema(value_type = String)]
    pub conversion_rate: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrdersInformation {
    /// Sum of valid orders in the display currency, already formatted.
    pub total_spent: String,
    pub valid_orders: Vec<OrderSummary>,
    pub invalid_orders: Vec<OrderSummary>,
}

/// Never populated: the paginated cart grid replaced this section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartInformation {
    pub cart_id: i32,
    pub creation_date: String,
    pub total: String,
    pub carrier_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BoughtProductInformation {
    pub order_id: i32,
    pub bought_date: String,
    pub product_name: String,
    pub bought_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ViewedProductInformation {
    pub product_id: i32,
    pub product_name: String,
    pub product_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductsInformation {
    pub bought_products: Vec<BoughtProductInformation>,
    pub viewed_products: Vec<ViewedProductInformation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageInformation {
    pub customer_thread_id: i32,
    pub message: String,
    pub status: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DiscountInformation {
    pub discount_id: i32,
    pub code: String,
    pub name: String,
    pub is_active: bool,
    pub available_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SentEmailInformation {
    pub date: String,
    pub language: String,
    pub subject: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LastConnectionInformation {
    pub connection_id: i32,
    pub date: String,
    pub pages_viewed: i64,
    pub total_time: String,
    pub http_referer: String,
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GroupInformation {
    pub group_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AddressInformation {
    pub address_id: i32,
    pub company: String,
    pub full_name: String,
    pub full_address: String,
    pub country_name: String,
    pub phone: String,
    pub phone_mobile: String,
}
