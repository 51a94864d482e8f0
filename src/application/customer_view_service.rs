use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};
use chrono::{NaiveDate, Utc};

use crate::domain::customer::{CustomerId, CustomerRecord};
use crate::domain::errors::DomainError;
use crate::domain::locale::{age_on, fill_positional, Locale};
use crate::domain::ports::{CustomerViewRepository, ProductLinkGenerator, Translator};
use crate::domain::text::{
    available_quantity, company_label, full_address, message_preview, referrer_host,
    MessageStatus,
};
use crate::domain::view::{
    AddressInformation, BoughtProductInformation, CartInformation, DiscountInformation,
    GeneralInformation, GroupInformation, LastConnectionInformation, MessageInformation,
    OrderSummary, OrdersInformation, PersonalInformation, ProductsInformation,
    SentEmailInformation, Subscriptions, ViewableCustomer, ViewedProductInformation,
};

const FEATURE_DOMAIN: &str = "Admin.Orderscustomers.Feature";
const NOTIFICATION_DOMAIN: &str = "Admin.Orderscustomers.Notification";
const GLOBAL_DOMAIN: &str = "Admin.Global";

/// Language, shop and currency the view is rendered for.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub lang_id: i32,
    /// Restricts orders to one shop when set.
    pub shop_id: Option<i32>,
    pub currency_iso: String,
    pub locale: Locale,
}

impl Default for ViewContext {
    fn default() -> Self {
        Self {
            lang_id: 1,
            shop_id: None,
            currency_iso: "EUR".to_string(),
            locale: Locale::default(),
        }
    }
}

/// Builds the back-office customer page: one customer, eleven sections.
pub struct CustomerViewService {
    repo: Arc<dyn CustomerViewRepository>,
    translator: Arc<dyn Translator>,
    links: Arc<dyn ProductLinkGenerator>,
    context: ViewContext,
}

impl CustomerViewService {
    pub fn new(
        repo: Arc<dyn CustomerViewRepository>,
        translator: Arc<dyn Translator>,
        links: Arc<dyn ProductLinkGenerator>,
        context: ViewContext,
    ) -> Self {
        Self {
            repo,
            translator,
            links,
            context,
        }
    }

    pub fn assemble_view(&self, customer_id: CustomerId) -> Result<ViewableCustomer, DomainError> {
        self.assemble_view_on(customer_id, Utc::now().date_naive())
    }

    fn assemble_view_on(
        &self,
        customer_id: CustomerId,
        today: NaiveDate,
    ) -> Result<ViewableCustomer, DomainError> {
        let customer = self.repo.find_customer(customer_id)?.ok_or_else(|| {
            log::info!("customer {} requested for viewing does not exist", customer_id);
            DomainError::CustomerNotFound(customer_id)
        })?;

        log::debug!("assembling view for customer {}", customer_id);

        Ok(ViewableCustomer {
            customer_id,
            general_information: self.general_information(&customer)?,
            personal_information: self.personal_information(&customer, today)?,
            orders_information: self.orders_information(&customer)?,
            carts_information: self.carts_information(&customer),
            products_information: self.products_information(&customer)?,
            messages_information: self.messages_information(&customer)?,
            discounts_information: self.discounts_information(&customer)?,
            sent_emails_information: self.sent_emails_information(&customer)?,
            last_connections_information: self.last_connections_information(&customer)?,
            groups_information: self.groups_information(&customer)?,
            addresses_information: self.addresses_information(&customer)?,
        })
    }

    fn general_information(&self, customer: &CustomerRecord) -> Result<GeneralInformation, DomainError> {
        Ok(GeneralInformation {
            private_note: customer.note.clone().unwrap_or_default(),
            customer_by_same_email_exists: self.repo.customer_exists_by_email(&customer.email)?,
        })
    }

    fn personal_information(
        &self,
        customer: &CustomerRecord,
        today: NaiveDate,
    ) -> Result<PersonalInformation, DomainError> {
        let locale = &self.context.locale;
        let unknown = || self.translator.trans("Unknown", FEATURE_DOMAIN);

        let social_title = self
            .repo
            .gender_name(customer.gender_id, self.context.lang_id)?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(unknown);

        let birthday = match customer.birthday {
            Some(birthday) => {
                let age = age_on(birthday, today).to_string();
                let template = self
                    .translator
                    .trans("%1$d years old (birth date: %2$s)", FEATURE_DOMAIN);
                fill_positional(&template, &[&age, &locale.display_date(birthday)])
            }
            None => unknown(),
        };

        let last_visit_date = match self.repo.last_visit(customer.id)? {
            Some(at) => locale.display_datetime(at),
            None => self.translator.trans("Never", GLOBAL_DOMAIN),
        };

        Ok(PersonalInformation {
            first_name: customer.firstname.clone(),
            last_name: customer.lastname.clone(),
            email: customer.email.clone(),
            is_guest: customer.is_guest,
            social_title,
            birthday,
            registration_date: locale.display_datetime(customer.created_at),
            last_update_date: locale.display_datetime(customer.updated_at),
            last_visit_date,
            rank_by_sales: self.repo.sales_rank(customer.id)?,
            shop_name: self.repo.shop_name(customer.shop_id)?.unwrap_or_default(),
            language_name: self.repo.language_name(customer.lang_id)?.unwrap_or_default(),
            subscriptions: Subscriptions {
                newsletter: customer.newsletter,
                partner_offers: customer.optin,
            },
            is_active: customer.active,
        })
    }

    fn orders_information(&self, customer: &CustomerRecord) -> Result<OrdersInformation, DomainError> {
        let mut valid_orders = Vec::new();
        let mut invalid_orders = Vec::new();
        let mut total = BigDecimal::zero();

        for order in self.repo.orders(customer.id, self.context.shop_id)? {
            let summary = OrderSummary {
                order_id: order.id,
                total_paid_tax_incl: order.total_paid_tax_incl,
                conversion_rate: order.conversion_rate,
            };
            if order.valid {
                if !summary.conversion_rate.is_zero() {
                    total += &summary.total_paid_tax_incl / &summary.conversion_rate;
                }
                valid_orders.push(summary);
            } else {
                invalid_orders.push(summary);
            }
        }

        Ok(OrdersInformation {
            total_spent: self
                .context
                .locale
                .format_price(&total, &self.context.currency_iso),
            valid_orders,
            invalid_orders,
        })
    }

    /// Always empty; the paginated customer cart grid serves this data.
    fn carts_information(&self, _customer: &CustomerRecord) -> Vec<CartInformation> {
        Vec::new()
    }

    fn products_information(&self, customer: &CustomerRecord) -> Result<ProductsInformation, DomainError> {
        let locale = &self.context.locale;

        let bought_products = self
            .repo
            .bought_products(customer.id)?
            .into_iter()
            .map(|p| BoughtProductInformation {
                order_id: p.order_id,
                bought_date: locale.display_date(p.ordered_at.date_naive()),
                product_name: p.product_name,
                bought_quantity: p.quantity,
            })
            .collect();

        let viewed_products = self
            .repo
            .viewed_products(customer.id, self.context.lang_id)?
            .into_iter()
            .map(|p| ViewedProductInformation {
                product_id: p.product_id,
                product_url: self.links.product_link(
                    p.product_id,
                    &p.link_rewrite,
                    &p.category_link_rewrite,
                    p.cart_shop_id,
                ),
                product_name: p.name,
            })
            .collect();

        Ok(ProductsInformation {
            bought_products,
            viewed_products,
        })
    }

    fn messages_information(&self, customer: &CustomerRecord) -> Result<Vec<MessageInformation>, DomainError> {
        Ok(self
            .repo
            .messages(customer.id)?
            .into_iter()
            .map(|m| MessageInformation {
                customer_thread_id: m.thread_id,
                message: message_preview(&m.message),
                status: MessageStatus::from_code(&m.status).label(self.translator.as_ref()),
                date: self.context.locale.display_datetime(m.created_at),
            })
            .collect())
    }

    fn discounts_information(&self, customer: &CustomerRecord) -> Result<Vec<DiscountInformation>, DomainError> {
        Ok(self
            .repo
            .cart_rules(customer.id, self.context.lang_id)?
            .into_iter()
            .map(|rule| DiscountInformation {
                discount_id: rule.id,
                available_quantity: available_quantity(rule.quantity, rule.quantity_for_user),
                code: rule.code,
                name: rule.name,
                is_active: rule.active,
            })
            .collect())
    }

    fn sent_emails_information(&self, customer: &CustomerRecord) -> Result<Vec<SentEmailInformation>, DomainError> {
        Ok(self
            .repo
            .last_emails(&customer.email)?
            .into_iter()
            .map(|email| SentEmailInformation {
                date: self.context.locale.display_datetime(email.sent_at),
                language: email.language,
                subject: email.subject,
                template: email.template,
            })
            .collect())
    }

    fn last_connections_information(
        &self,
        customer: &CustomerRecord,
    ) -> Result<Vec<LastConnectionInformation>, DomainError> {
        Ok(self
            .repo
            .last_connections(customer.id)?
            .into_iter()
            .map(|c| LastConnectionInformation {
                connection_id: c.id,
                date: self.context.locale.display_date(c.connected_at.date_naive()),
                pages_viewed: c.pages,
                total_time: c.time,
                http_referer: referrer_host(c.http_referer.as_deref())
                    .unwrap_or_else(|| self.translator.trans("Direct link", NOTIFICATION_DOMAIN)),
                ip_address: c.ip_address.unwrap_or_default(),
            })
            .collect())
    }

    fn groups_information(&self, customer: &CustomerRecord) -> Result<Vec<GroupInformation>, DomainError> {
        Ok(self
            .repo
            .groups(customer.id, self.context.lang_id)?
            .into_iter()
            .map(|g| GroupInformation {
                group_id: g.id,
                name: g.name,
            })
            .collect())
    }

    fn addresses_information(&self, customer: &CustomerRecord) -> Result<Vec<AddressInformation>, DomainError> {
        Ok(self
            .repo
            .addresses(customer.id, self.context.lang_id)?
            .into_iter()
            .map(|a| AddressInformation {
                address_id: a.id,
                company: company_label(a.company.as_deref()),
                full_name: format!("{} {}", a.firstname, a.lastname),
                full_address: full_address(
                    &a.address1,
                    a.address2.as_deref(),
                    a.postcode.as_deref(),
                    &a.city,
                ),
                country_name: a.country,
                phone: a.phone.unwrap_or_default(),
                phone_mobile: a.phone_mobile.unwrap_or_default(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{
        AddressRecord, CartRuleRecord, ConnectionRecord, GroupRecord, MessageRecord, OrderRecord,
        SentEmailRecord,
    };
    use crate::domain::rank::SalesRank;
    use crate::infrastructure::links::ShopLinks;
    use crate::infrastructure::localization::CatalogTranslator;
    use crate::infrastructure::memory::{InMemoryStore, StoredCartProduct, StoredOrder, StoredProduct};
    use chrono::{DateTime, TimeZone};
    use std::str::FromStr;

    const ALICE: CustomerId = CustomerId(1);
    const BOB: CustomerId = CustomerId(2);

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    fn customer(id: CustomerId, email: &str) -> CustomerRecord {
        CustomerRecord {
            id,
            shop_id: 1,
            lang_id: 1,
            gender_id: 1,
            firstname: "Alice".into(),
            lastname: "Martin".into(),
            email: email.into(),
            birthday: NaiveDate::from_ymd_opt(1990, 6, 15),
            note: Some("VIP".into()),
            is_guest: false,
            active: true,
            newsletter: true,
            optin: false,
            created_at: at(1, 9),
            updated_at: at(2, 10),
        }
    }

    fn order(customer_id: CustomerId, id: i32, valid: bool, total: &str, rate: &str, lines: Vec<(i32, &str, i32)>) -> StoredOrder {
        StoredOrder {
            customer_id,
            shop_id: 1,
            order: OrderRecord {
                id,
                valid,
                total_paid_tax_incl: dec(total),
                conversion_rate: dec(rate),
            },
            total_paid_real: dec(total),
            ordered_at: at(id as u32, 12),
            lines: lines
                .into_iter()
                .map(|(product, name, qty)| (product, name.to_string(), qty))
                .collect(),
        }
    }

    fn product(id: i32, name: &str) -> StoredProduct {
        StoredProduct {
            id,
            lang_id: 1,
            name: name.into(),
            link_rewrite: name.to_lowercase().replace(' ', "-"),
            category_link_rewrite: "clothes".into(),
        }
    }

    fn store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.customers.push(customer(ALICE, "alice@example.com"));
        store.customers.push(CustomerRecord {
            firstname: "Bob".into(),
            birthday: None,
            note: None,
            ..customer(BOB, "bob@example.com")
        });
        store.genders.insert(1, "Mrs".into());
        store.shops.insert(1, "Main shop".into());
        store.languages.insert(1, "English".into());

        store.orders.push(order(ALICE, 1, true, "120", "1.0", vec![(10, "T-shirt", 2)]));
        store.orders.push(order(ALICE, 2, false, "50", "1.0", vec![(11, "Scarf", 1)]));
        store.orders.push(order(BOB, 3, true, "300", "1.0", vec![(10, "T-shirt", 5)]));

        store.products.extend([product(10, "T-shirt"), product(11, "Scarf"), product(12, "Blue mug")]);
        for product_id in [10, 11, 12] {
            store.cart_products.push(StoredCartProduct {
                customer_id: ALICE,
                product_id,
                cart_shop_id: 1,
            });
        }
        store.cart_products.push(StoredCartProduct {
            customer_id: ALICE,
            product_id: 99,
            cart_shop_id: 1,
        });

        store.messages.push((
            ALICE,
            MessageRecord {
                thread_id: 5,
                message: "<p>My order &amp; the invoice</p>".into(),
                status: "pending1".into(),
                created_at: at(3, 8),
            },
        ));
        store.messages.push((
            ALICE,
            MessageRecord {
                thread_id: 6,
                message: "Thanks".into(),
                status: "escalated".into(),
                created_at: at(4, 8),
            },
        ));

        store.cart_rules.push((
            ALICE,
            CartRuleRecord {
                id: 1,
                code: "WELCOME".into(),
                name: "Welcome".into(),
                active: true,
                quantity: 100,
                quantity_for_user: 1,
            },
        ));
        store.cart_rules.push((
            ALICE,
            CartRuleRecord {
                id: 2,
                code: "GONE".into(),
                name: "Sold out".into(),
                active: false,
                quantity: 0,
                quantity_for_user: 1,
            },
        ));

        store.emails.push((
            "alice@example.com".into(),
            SentEmailRecord {
                sent_at: at(5, 11),
                language: "English".into(),
                subject: "Your order".into(),
                template: "order_conf".into(),
            },
        ));

        store.connections.push((
            ALICE,
            ConnectionRecord {
                id: 1,
                connected_at: at(6, 14),
                pages: 4,
                time: "00:12:30".into(),
                http_referer: Some("https://www.google.com/search?q=tshirt".into()),
                ip_address: Some("203.0.113.9".into()),
            },
        ));
        store.connections.push((
            ALICE,
            ConnectionRecord {
                id: 2,
                connected_at: at(7, 15),
                pages: 1,
                time: "00:00:10".into(),
                http_referer: None,
                ip_address: None,
            },
        ));

        store.groups.push((ALICE, GroupRecord { id: 3, name: "Customer".into() }));

        store.addresses.push((
            ALICE,
            AddressRecord {
                id: 8,
                company: Some(String::new()),
                firstname: "Alice".into(),
                lastname: "Martin".into(),
                address1: "1 rue de Rivoli".into(),
                address2: None,
                postcode: Some("75001".into()),
                city: "Paris".into(),
                country: "France".into(),
                phone: Some("0102030405".into()),
                phone_mobile: None,
            },
        ));

        store
    }

    fn service(store: InMemoryStore) -> CustomerViewService {
        CustomerViewService::new(
            Arc::new(store),
            Arc::new(CatalogTranslator::default()),
            Arc::new(ShopLinks::new("https://shop.example")),
            ViewContext::default(),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn unknown_customer_is_not_found() {
        let err = service(store()).assemble_view(CustomerId(404)).unwrap_err();
        assert!(matches!(err, DomainError::CustomerNotFound(CustomerId(404))));
        assert_eq!(err.to_string(), "Customer with id \"404\" was not found.");
    }

    #[test]
    fn general_information() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        assert_eq!(view.customer_id, ALICE);
        assert_eq!(view.general_information.private_note, "VIP");
        assert!(view.general_information.customer_by_same_email_exists);
    }

    #[test]
    fn personal_information_with_fallbacks() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        let info = &view.personal_information;
        assert_eq!(info.social_title, "Mrs");
        assert_eq!(info.birthday, "33 years old (birth date: 1990-06-15)");
        assert_eq!(info.registration_date, "2024-03-01 09:00:00");
        assert_eq!(info.last_update_date, "2024-03-02 10:00:00");
        assert_eq!(info.last_visit_date, "2024-03-07 15:00:00");
        assert_eq!(info.rank_by_sales, SalesRank::Ranked(2));
        assert_eq!(info.shop_name, "Main shop");
        assert_eq!(info.language_name, "English");
        assert!(info.subscriptions.newsletter);
        assert!(!info.subscriptions.partner_offers);
        assert!(info.is_active);

        let mut store = store();
        store.genders.clear();
        store.connections.clear();
        let view = service(store).assemble_view_on(BOB, today()).unwrap();
        let info = &view.personal_information;
        assert_eq!(info.social_title, "Unknown");
        assert_eq!(info.birthday, "Unknown");
        assert_eq!(info.last_visit_date, "Never");
        assert_eq!(info.rank_by_sales, SalesRank::Ranked(1));
        assert_eq!(view.general_information.private_note, "");
    }

    #[test]
    fn customer_without_valid_orders_is_unranked() {
        let mut store = store();
        store.orders.retain(|o| o.customer_id != ALICE || !o.order.valid);
        let view = service(store).assemble_view_on(ALICE, today()).unwrap();
        assert_eq!(view.personal_information.rank_by_sales, SalesRank::Unranked);
    }

    #[test]
    fn equal_totals_share_a_rank() {
        let mut store = store();
        store.orders.push(order(ALICE, 4, true, "180", "1.0", vec![]));
        let service = service(store);
        let alice = service.assemble_view_on(ALICE, today()).unwrap();
        let bob = service.assemble_view_on(BOB, today()).unwrap();
        assert_eq!(alice.personal_information.rank_by_sales, SalesRank::Ranked(1));
        assert_eq!(bob.personal_information.rank_by_sales, SalesRank::Ranked(1));
    }

    #[test]
    fn orders_are_partitioned_and_only_valid_ones_summed() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        let orders = &view.orders_information;
        assert_eq!(orders.total_spent, "€120.00");
        assert_eq!(orders.valid_orders.len(), 1);
        assert_eq!(orders.valid_orders[0].order_id, 1);
        assert_eq!(orders.invalid_orders.len(), 1);
        assert_eq!(orders.invalid_orders[0].order_id, 2);
    }

    #[test]
    fn orders_total_is_converted_per_order() {
        let mut store = store();
        store.orders.push(order(ALICE, 4, true, "60", "2.0", vec![]));
        store.orders.push(order(ALICE, 5, true, "10", "0", vec![]));
        let view = service(store).assemble_view_on(ALICE, today()).unwrap();
        assert_eq!(view.orders_information.total_spent, "€150.00");
        assert_eq!(view.orders_information.valid_orders.len(), 3);
    }

    #[test]
    fn orders_can_be_restricted_to_one_shop() {
        let mut store = store();
        let mut other_shop = order(ALICE, 4, true, "999", "1.0", vec![]);
        other_shop.shop_id = 2;
        store.orders.push(other_shop);

        let service = CustomerViewService::new(
            Arc::new(store),
            Arc::new(CatalogTranslator::default()),
            Arc::new(ShopLinks::new("https://shop.example")),
            ViewContext {
                shop_id: Some(1),
                currency_iso: "CHF".into(),
                ..ViewContext::default()
            },
        );
        let view = service.assemble_view_on(ALICE, today()).unwrap();
        assert_eq!(view.orders_information.total_spent, "120.00 CHF");
    }

    #[test]
    fn carts_are_always_empty() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        assert!(view.carts_information.is_empty());
    }

    #[test]
    fn viewed_products_exclude_purchased_ones() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        let products = &view.products_information;

        assert_eq!(products.bought_products.len(), 1);
        assert_eq!(products.bought_products[0].product_name, "T-shirt");
        assert_eq!(products.bought_products[0].bought_quantity, 2);
        assert_eq!(products.bought_products[0].bought_date, "2024-03-01");

        // 10 was bought; 11 only sits in an invalid order; 99 has no name.
        let viewed: Vec<_> = products.viewed_products.iter().map(|p| p.product_id).collect();
        assert_eq!(viewed, vec![11, 12]);
        assert_eq!(
            products.viewed_products[1].product_url,
            "https://shop.example/clothes/12-blue-mug.html"
        );
    }

    #[test]
    fn messages_are_previewed_and_labelled() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        let messages = &view.messages_information;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].customer_thread_id, 6);
        assert_eq!(messages[0].status, "escalated");
        assert_eq!(messages[1].message, "My order & the invoice");
        assert_eq!(messages[1].status, "Pending 1");
        assert_eq!(messages[1].date, "2024-03-03 08:00:00");
    }

    #[test]
    fn discounts_report_available_quantity() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        let discounts = &view.discounts_information;
        assert_eq!(discounts[0].code, "WELCOME");
        assert_eq!(discounts[0].available_quantity, 1);
        assert_eq!(discounts[1].available_quantity, 0);
        assert!(!discounts[1].is_active);
    }

    #[test]
    fn emails_connections_and_groups() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();

        assert_eq!(view.sent_emails_information.len(), 1);
        assert_eq!(view.sent_emails_information[0].template, "order_conf");

        let connections = &view.last_connections_information;
        assert_eq!(connections[0].connection_id, 2);
        assert_eq!(connections[0].date, "2024-03-07");
        assert_eq!(connections[0].http_referer, "Direct link");
        assert_eq!(connections[0].ip_address, "");
        assert_eq!(connections[1].http_referer, "google.com");
        assert_eq!(connections[1].total_time, "00:12:30");
        assert_eq!(connections[1].pages_viewed, 4);

        assert_eq!(view.groups_information, vec![GroupInformation { group_id: 3, name: "Customer".into() }]);
    }

    #[test]
    fn addresses_get_placeholders() {
        let view = service(store()).assemble_view_on(ALICE, today()).unwrap();
        let address = &view.addresses_information[0];
        assert_eq!(address.company, "--");
        assert_eq!(address.full_name, "Alice Martin");
        assert_eq!(address.full_address, "1 rue de Rivoli  75001 Paris");
        assert_eq!(address.country_name, "France");
        assert_eq!(address.phone, "0102030405");
        assert_eq!(address.phone_mobile, "");
    }

    #[test]
    fn labels_go_through_the_translator() {
        let translator = CatalogTranslator::from_json(
            r#"{
                "Admin.Orderscustomers.Feature": {
                    "Unknown": "Inconnu",
                    "Pending 1": "En attente 1",
                    "%1$d years old (birth date: %2$s)": "%1$d ans (né le %2$s)"
                },
                "Admin.Global": { "Never": "Jamais" },
                "Admin.Orderscustomers.Notification": { "Direct link": "Lien direct" }
            }"#,
        )
        .unwrap();
        let service = CustomerViewService::new(
            Arc::new(store()),
            Arc::new(translator),
            Arc::new(ShopLinks::new("https://shop.example")),
            ViewContext::default(),
        );

        let alice = service.assemble_view_on(ALICE, today()).unwrap();
        assert_eq!(alice.personal_information.birthday, "33 ans (né le 1990-06-15)");
        assert_eq!(alice.messages_information[1].status, "En attente 1");
        assert_eq!(alice.last_connections_information[0].http_referer, "Lien direct");

        let bob = service.assemble_view_on(BOB, today()).unwrap();
        assert_eq!(bob.personal_information.birthday, "Inconnu");
        assert_eq!(bob.personal_information.last_visit_date, "Jamais");
    }
}
