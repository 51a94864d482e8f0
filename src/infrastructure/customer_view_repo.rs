use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};

use crate::db::DbPool;
use crate::domain::customer::{
    AddressRecord, BoughtProductRecord, CartRuleRecord, ConnectionRecord, CustomerId,
    CustomerRecord, GroupRecord, MessageRecord, OrderRecord, SentEmailRecord, ViewedProductRecord,
    RECENT_ACTIVITY_LIMIT,
};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerViewRepository;
use crate::domain::rank::SalesRank;
use crate::schema::{customer, gender_lang, lang, order_detail, orders, shop};

use super::models::{
    AddressRow, CartRuleRow, ConnectionRow, CustomerRow, EmailExistsRow, GroupRow, LastVisitRow,
    MessageRow, OrderRow, SalesRankRow, SentEmailRow, ViewedProductRow,
};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Queries too awkward for the DSL ──────────────────────────────────────────

// Competition ranking: ties share a rank, the next one is skipped.
const SALES_RANK_SQL: &str = r#"
SELECT ranked.sales_rank
FROM (
    SELECT id_customer,
           RANK() OVER (ORDER BY SUM(total_paid_real) DESC) AS sales_rank
    FROM orders
    WHERE valid = TRUE
    GROUP BY id_customer
    HAVING SUM(total_paid_real) > 0
) ranked
WHERE ranked.id_customer = $1
"#;

// Emails match case-insensitively; served by idx_customer_email_lower.
const EMAIL_EXISTS_SQL: &str = r#"
SELECT EXISTS (
    SELECT 1
    FROM customer
    WHERE lower(email) = lower($1)
      AND is_guest = FALSE
      AND deleted = FALSE
) AS email_exists
"#;

const LAST_VISIT_SQL: &str = r#"
SELECT MAX(c.date_add) AS last_visit
FROM guest g
JOIN connections c ON c.id_guest = g.id_guest
WHERE g.id_customer = $1
"#;

const VIEWED_PRODUCTS_SQL: &str = r#"
SELECT DISTINCT cp.id_product,
       pl.name,
       pl.link_rewrite,
       COALESCE(cl.link_rewrite, '') AS category_link_rewrite,
       cp.id_shop AS cart_shop_id
FROM cart_product cp
JOIN cart c ON c.id_cart = cp.id_cart
JOIN product p ON p.id_product = cp.id_product
JOIN product_lang pl ON pl.id_product = p.id_product
                    AND pl.id_shop = c.id_shop
                    AND pl.id_lang = $2
LEFT JOIN category_lang cl ON cl.id_category = p.id_category_default
                          AND cl.id_lang = $2
WHERE c.id_customer = $1
  AND NOT EXISTS (
      SELECT 1
      FROM orders o
      JOIN order_detail od ON od.id_order = o.id_order
      WHERE od.product_id = cp.id_product
        AND o.valid = TRUE
        AND o.id_customer = $1
  )
ORDER BY cp.id_product, cart_shop_id
"#;

// Threads without any message are still listed, with an empty body.
const MESSAGES_SQL: &str = r#"
SELECT t.id_customer_thread,
       COALESCE(m.message, '') AS message,
       t.status,
       COALESCE(m.date_add, t.date_add) AS date_add
FROM customer_thread t
LEFT JOIN customer_message m ON m.id_customer_thread = t.id_customer_thread
WHERE t.id_customer = $1
ORDER BY COALESCE(m.date_add, t.date_add) DESC, m.id_customer_message DESC
"#;

const CART_RULES_SQL: &str = r#"
SELECT cr.id_cart_rule,
       cr.code,
       COALESCE(crl.name, '') AS name,
       cr.active,
       cr.quantity,
       GREATEST(cr.quantity_per_user - (
           SELECT COUNT(*)
           FROM order_cart_rule ocr
           JOIN orders o ON o.id_order = ocr.id_order
           WHERE ocr.id_cart_rule = cr.id_cart_rule
             AND o.id_customer = $1
             AND o.valid = TRUE
       ), 0)::INTEGER AS quantity_for_user
FROM cart_rule cr
LEFT JOIN cart_rule_lang crl ON crl.id_cart_rule = cr.id_cart_rule
                            AND crl.id_lang = $2
WHERE cr.id_customer = $1
ORDER BY cr.id_cart_rule
"#;

const LAST_EMAILS_SQL: &str = r#"
SELECT m.date_add, COALESCE(l.name, '') AS language, m.subject, m.template
FROM mail m
LEFT JOIN lang l ON l.id_lang = m.id_lang
WHERE m.recipient = $1
ORDER BY m.date_add DESC
LIMIT $2
"#;

const LAST_CONNECTIONS_SQL: &str = r#"
SELECT c.id_connections,
       c.date_add,
       COUNT(cp.id_page) AS pages,
       TO_CHAR(COALESCE(MAX(cp.time_end) - c.date_add, INTERVAL '0'), 'HH24:MI:SS') AS time,
       c.http_referer,
       c.ip_address
FROM guest g
JOIN connections c ON c.id_guest = g.id_guest
LEFT JOIN connections_page cp ON cp.id_connections = c.id_connections
WHERE g.id_customer = $1
GROUP BY c.id_connections
ORDER BY c.date_add DESC
LIMIT $2
"#;

const GROUPS_SQL: &str = r#"
SELECT cg.id_group, COALESCE(gl.name, '') AS name
FROM customer_group cg
LEFT JOIN group_lang gl ON gl.id_group = cg.id_group AND gl.id_lang = $2
WHERE cg.id_customer = $1
ORDER BY cg.id_group
"#;

const ADDRESSES_SQL: &str = r#"
SELECT a.id_address, a.company, a.firstname, a.lastname, a.address1, a.address2,
       a.postcode, a.city, COALESCE(cl.name, '') AS country, a.phone, a.phone_mobile
FROM address a
LEFT JOIN country_lang cl ON cl.id_country = a.id_country AND cl.id_lang = $2
WHERE a.id_customer = $1
  AND a.deleted = FALSE
ORDER BY a.id_address
"#;

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselCustomerViewRepository {
    pool: DbPool,
}

impl DieselCustomerViewRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerViewRepository for DieselCustomerViewRepository {
    fn find_customer(&self, id: CustomerId) -> Result<Option<CustomerRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customer::table
            .filter(customer::id_customer.eq(id.value()))
            .filter(customer::deleted.eq(false))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(CustomerRecord::from))
    }

    fn customer_exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let row: EmailExistsRow = diesel::sql_query(EMAIL_EXISTS_SQL)
            .bind::<Text, _>(email)
            .get_result(&mut conn)?;

        Ok(row.email_exists)
    }

    fn gender_name(&self, gender_id: i32, lang_id: i32) -> Result<Option<String>, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(gender_lang::table
            .filter(gender_lang::id_gender.eq(gender_id))
            .filter(gender_lang::id_lang.eq(lang_id))
            .select(gender_lang::name)
            .first(&mut conn)
            .optional()?)
    }

    fn shop_name(&self, shop_id: i32) -> Result<Option<String>, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(shop::table
            .find(shop_id)
            .select(shop::name)
            .first(&mut conn)
            .optional()?)
    }

    fn language_name(&self, lang_id: i32) -> Result<Option<String>, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(lang::table
            .find(lang_id)
            .select(lang::name)
            .first(&mut conn)
            .optional()?)
    }

    fn last_visit(&self, id: CustomerId) -> Result<Option<DateTime<Utc>>, DomainError> {
        let mut conn = self.pool.get()?;

        let row: LastVisitRow = diesel::sql_query(LAST_VISIT_SQL)
            .bind::<Integer, _>(id.value())
            .get_result(&mut conn)?;

        Ok(row.last_visit)
    }

    fn sales_rank(&self, id: CustomerId) -> Result<SalesRank, DomainError> {
        let mut conn = self.pool.get()?;

        let row: Option<SalesRankRow> = diesel::sql_query(SALES_RANK_SQL)
            .bind::<Integer, _>(id.value())
            .get_result(&mut conn)
            .optional()?;

        Ok(SalesRank::from_position(row.map(|r| r.sales_rank)))
    }

    fn orders(&self, id: CustomerId, shop_id: Option<i32>) -> Result<Vec<OrderRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = orders::table
            .filter(orders::id_customer.eq(id.value()))
            .into_boxed();
        if let Some(shop_id) = shop_id {
            query = query.filter(orders::id_shop.eq(shop_id));
        }

        let rows = query
            .order(orders::id_order.asc())
            .select(OrderRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(OrderRecord::from).collect())
    }

    fn bought_products(&self, id: CustomerId) -> Result<Vec<BoughtProductRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_detail::table
            .inner_join(orders::table)
            .filter(orders::id_customer.eq(id.value()))
            .filter(orders::valid.eq(true))
            .order((orders::date_add.desc(), order_detail::id_order_detail.asc()))
            .select((
                order_detail::id_order,
                orders::date_add,
                order_detail::product_name,
                order_detail::product_quantity,
            ))
            .load::<(i32, DateTime<Utc>, String, i32)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(order_id, ordered_at, product_name, quantity)| BoughtProductRecord {
                order_id,
                ordered_at,
                product_name,
                quantity,
            })
            .collect())
    }

    fn viewed_products(&self, id: CustomerId, lang_id: i32) -> Result<Vec<ViewedProductRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<ViewedProductRow> = diesel::sql_query(VIEWED_PRODUCTS_SQL)
            .bind::<Integer, _>(id.value())
            .bind::<Integer, _>(lang_id)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(ViewedProductRecord::from).collect())
    }

    fn messages(&self, id: CustomerId) -> Result<Vec<MessageRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<MessageRow> = diesel::sql_query(MESSAGES_SQL)
            .bind::<Integer, _>(id.value())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(MessageRecord::from).collect())
    }

    fn cart_rules(&self, id: CustomerId, lang_id: i32) -> Result<Vec<CartRuleRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<CartRuleRow> = diesel::sql_query(CART_RULES_SQL)
            .bind::<Integer, _>(id.value())
            .bind::<Integer, _>(lang_id)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(CartRuleRecord::from).collect())
    }

    fn last_emails(&self, email: &str) -> Result<Vec<SentEmailRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<SentEmailRow> = diesel::sql_query(LAST_EMAILS_SQL)
            .bind::<Text, _>(email)
            .bind::<BigInt, _>(RECENT_ACTIVITY_LIMIT as i64)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(SentEmailRecord::from).collect())
    }

    fn last_connections(&self, id: CustomerId) -> Result<Vec<ConnectionRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<ConnectionRow> = diesel::sql_query(LAST_CONNECTIONS_SQL)
            .bind::<Integer, _>(id.value())
            .bind::<BigInt, _>(RECENT_ACTIVITY_LIMIT as i64)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(ConnectionRecord::from).collect())
    }

    fn groups(&self, id: CustomerId, lang_id: i32) -> Result<Vec<GroupRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<GroupRow> = diesel::sql_query(GROUPS_SQL)
            .bind::<Integer, _>(id.value())
            .bind::<Integer, _>(lang_id)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(GroupRecord::from).collect())
    }

    fn addresses(&self, id: CustomerId, lang_id: i32) -> Result<Vec<AddressRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<AddressRow> = diesel::sql_query(ADDRESSES_SQL)
            .bind::<Integer, _>(id.value())
            .bind::<Integer, _>(lang_id)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(AddressRecord::from).collect())
    }
}
