use std::collections::HashMap;

use crate::domain::ports::{LegacyAdminLinks, ProductLinkGenerator, Router};
use crate::domain::redirect::HOMEPAGE_ROUTE;

fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

/// Front-office product URLs: `{base}/{category}/{id}-{rewrite}.html`.
#[derive(Debug, Clone)]
pub struct ShopLinks {
    base_url: String,
    shop_urls: HashMap<i32, String>,
}

impl ShopLinks {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_base(base_url),
            shop_urls: HashMap::new(),
        }
    }

    /// Serve one shop of a multistore install from its own domain.
    pub fn with_shop_url(mut self, shop_id: i32, base_url: &str) -> Self {
        self.shop_urls.insert(shop_id, trim_base(base_url));
        self
    }
}

impl ProductLinkGenerator for ShopLinks {
    fn product_link(
        &self,
        product_id: i32,
        link_rewrite: &str,
        category_link_rewrite: &str,
        shop_id: i32,
    ) -> String {
        let base = self.shop_urls.get(&shop_id).unwrap_or(&self.base_url);
        if category_link_rewrite.is_empty() {
            format!("{}/{}-{}.html", base, product_id, link_rewrite)
        } else {
            format!("{}/{}/{}-{}.html", base, category_link_rewrite, product_id, link_rewrite)
        }
    }
}

/// Named back-office routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// The routes employees can pick as their homepage, under `admin_base_path`.
    pub fn admin(admin_base_path: &str) -> Self {
        let base = trim_base(admin_base_path);
        let routes = [
            (HOMEPAGE_ROUTE, "/"),
            ("admin_customers_index", "/sell/customers/"),
            ("admin_orders_index", "/sell/orders/"),
            ("admin_products_index", "/sell/catalog/products"),
            ("admin_cart_rules_index", "/sell/catalog/cart-rules/"),
            ("admin_customer_threads_index", "/sell/customer-service/customer-threads/"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), format!("{}{}", base, path)))
        .collect();
        Self { routes }
    }

}

impl Router for RouteTable {
    fn generate(&self, route_name: &str) -> Option<String> {
        self.routes.get(route_name).cloned()
    }
}

/// Links to controllers of the legacy back office, `index.php?controller=`.
#[derive(Debug, Clone)]
pub struct LegacyLinks {
    admin_base_path: String,
}

impl LegacyLinks {
    pub fn new(admin_base_path: &str) -> Self {
        Self {
            admin_base_path: trim_base(admin_base_path),
        }
    }
}

impl LegacyAdminLinks for LegacyLinks {
    fn admin_link(&self, controller: &str) -> Option<String> {
        if controller.is_empty() {
            return None;
        }
        Some(format!("{}/index.php?controller={}", self.admin_base_path, controller))
    }
}
