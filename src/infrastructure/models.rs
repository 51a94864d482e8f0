use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Integer, Nullable, Text, Timestamptz};

use crate::domain::customer::{
    AddressRecord, CartRuleRecord, ConnectionRecord, CustomerId, CustomerRecord, GroupRecord,
    MessageRecord, OrderRecord, SentEmailRecord, ViewedProductRecord,
};
use crate::domain::redirect::Tab;
use crate::schema::{customer, orders, tab};

// ── Table-backed rows ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id_customer: i32,
    pub id_shop: i32,
    pub id_lang: i32,
    pub id_gender: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    pub note: Option<String>,
    pub is_guest: bool,
    pub active: bool,
    pub newsletter: bool,
    pub optin: bool,
    pub date_add: DateTime<Utc>,
    pub date_upd: DateTime<Utc>,
}

impl From<CustomerRow> for CustomerRecord {
    fn from(row: CustomerRow) -> Self {
        CustomerRecord {
            id: CustomerId(row.id_customer),
            shop_id: row.id_shop,
            lang_id: row.id_lang,
            gender_id: row.id_gender,
            firstname: row.firstname,
            lastname: row.lastname,
            email: row.email,
            birthday: row.birthday,
            note: row.note,
            is_guest: row.is_guest,
            active: row.active,
            newsletter: row.newsletter,
            optin: row.optin,
            created_at: row.date_add,
            updated_at: row.date_upd,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id_order: i32,
    pub valid: bool,
    pub total_paid_tax_incl: BigDecimal,
    pub conversion_rate: BigDecimal,
}

impl From<OrderRow> for OrderRecord {
    fn from(row: OrderRow) -> Self {
        OrderRecord {
            id: row.id_order,
            valid: row.valid,
            total_paid_tax_incl: row.total_paid_tax_incl,
            conversion_rate: row.conversion_rate,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tab)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TabRow {
    pub id_tab: i32,
    pub class_name: Option<String>,
    pub route_name: Option<String>,
}

impl From<TabRow> for Tab {
    fn from(row: TabRow) -> Self {
        Tab {
            id: row.id_tab,
            route_name: row.route_name,
            class_name: row.class_name,
        }
    }
}

// ── Raw query rows ───────────────────────────────────────────────────────────

#[derive(Debug, QueryableByName)]
pub struct SalesRankRow {
    #[diesel(sql_type = BigInt)]
    pub sales_rank: i64,
}

#[derive(Debug, QueryableByName)]
pub struct EmailExistsRow {
    #[diesel(sql_type = Bool)]
    pub email_exists: bool,
}

#[derive(Debug, QueryableByName)]
pub struct LastVisitRow {
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub last_visit: Option<DateTime<Utc>>,
}

#[derive(Debug, QueryableByName)]
pub struct ViewedProductRow {
    #[diesel(sql_type = Integer)]
    pub id_product: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub link_rewrite: String,
    #[diesel(sql_type = Text)]
    pub category_link_rewrite: String,
    #[diesel(sql_type = Integer)]
    pub cart_shop_id: i32,
}

impl From<ViewedProductRow> for ViewedProductRecord {
    fn from(row: ViewedProductRow) -> Self {
        ViewedProductRecord {
            product_id: row.id_product,
            name: row.name,
            link_rewrite: row.link_rewrite,
            category_link_rewrite: row.category_link_rewrite,
            cart_shop_id: row.cart_shop_id,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub struct MessageRow {
    #[diesel(sql_type = Integer)]
    pub id_customer_thread: i32,
    #[diesel(sql_type = Text)]
    pub message: String,
    #[diesel(sql_type = Text)]
    pub status: String,
    #[diesel(sql_type = Timestamptz)]
    pub date_add: DateTime<Utc>,
}

impl From<MessageRow> for MessageRecord {
    fn from(row: MessageRow) -> Self {
        MessageRecord {
            thread_id: row.id_customer_thread,
            message: row.message,
            status: row.status,
            created_at: row.date_add,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub struct CartRuleRow {
    #[diesel(sql_type = Integer)]
    pub id_cart_rule: i32,
    #[diesel(sql_type = Text)]
    pub code: String,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Bool)]
    pub active: bool,
    #[diesel(sql_type = Integer)]
    pub quantity: i32,
    #[diesel(sql_type = Integer)]
    pub quantity_for_user: i32,
}

impl From<CartRuleRow> for CartRuleRecord {
    fn from(row: CartRuleRow) -> Self {
        CartRuleRecord {
            id: row.id_cart_rule,
            code: row.code,
            name: row.name,
            active: row.active,
            quantity: row.quantity,
            quantity_for_user: row.quantity_for_user,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub struct SentEmailRow {
    #[diesel(sql_type = Timestamptz)]
    pub date_add: DateTime<Utc>,
    #[diesel(sql_type = Text)]
    pub language: String,
    #[diesel(sql_type = Text)]
    pub subject: String,
    #[diesel(sql_type = Text)]
    pub template: String,
}

impl From<SentEmailRow> for SentEmailRecord {
    fn from(row: SentEmailRow) -> Self {
        SentEmailRecord {
            sent_at: row.date_add,
            language: row.language,
            subject: row.subject,
            template: row.template,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub struct ConnectionRow {
    #[diesel(sql_type = Integer)]
    pub id_connections: i32,
    #[diesel(sql_type = Timestamptz)]
    pub date_add: DateTime<Utc>,
    #[diesel(sql_type = BigInt)]
    pub pages: i64,
    #[diesel(sql_type = Text)]
    pub time: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub http_referer: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub ip_address: Option<String>,
}

impl From<ConnectionRow> for ConnectionRecord {
    fn from(row: ConnectionRow) -> Self {
        ConnectionRecord {
            id: row.id_connections,
            connected_at: row.date_add,
            pages: row.pages,
            time: row.time,
            http_referer: row.http_referer,
            ip_address: row.ip_address,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub struct GroupRow {
    #[diesel(sql_type = Integer)]
    pub id_group: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
}

impl From<GroupRow> for GroupRecord {
    fn from(row: GroupRow) -> Self {
        GroupRecord {
            id: row.id_group,
            name: row.name,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub struct AddressRow {
    #[diesel(sql_type = Integer)]
    pub id_address: i32,
    #[diesel(sql_type = Nullable<Text>)]
    pub company: Option<String>,
    #[diesel(sql_type = Text)]
    pub firstname: String,
    #[diesel(sql_type = Text)]
    pub lastname: String,
    #[diesel(sql_type = Text)]
    pub address1: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub address2: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub postcode: Option<String>,
    #[diesel(sql_type = Text)]
    pub city: String,
    #[diesel(sql_type = Text)]
    pub country: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub phone: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub phone_mobile: Option<String>,
}

impl From<AddressRow> for AddressRecord {
    fn from(row: AddressRow) -> Self {
        AddressRecord {
            id: row.id_address,
            company: row.company,
            firstname: row.firstname,
            lastname: row.lastname,
            address1: row.address1,
            address2: row.address2,
            postcode: row.postcode,
            city: row.city,
            country: row.country,
            phone: row.phone,
            phone_mobile: row.phone_mobile,
        }
    }
}
