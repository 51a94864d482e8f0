use std::sync::Arc;

use crate::domain::ports::{LegacyAdminLinks, Router, TabRepository, TargetPathStore};
use crate::domain::redirect::{
    is_local_path, Employee, DASHBOARD_CONTROLLER, HOMEPAGE_ROUTE, MAIN_FIREWALL,
};

/// Picks where an employee lands after a successful back-office login.
pub struct LoginRedirectResolver {
    router: Arc<dyn Router>,
    tabs: Arc<dyn TabRepository>,
    legacy_links: Arc<dyn LegacyAdminLinks>,
}

impl LoginRedirectResolver {
    pub fn new(
        router: Arc<dyn Router>,
        tabs: Arc<dyn TabRepository>,
        legacy_links: Arc<dyn LegacyAdminLinks>,
    ) -> Self {
        Self {
            router,
            tabs,
            legacy_links,
        }
    }

    /// First non-empty of: saved target path (same host only), the employee's
    /// homepage, the application homepage. `session` is `None` when the
    /// request carries no previous session.
    pub fn resolve(&self, session: Option<&dyn TargetPathStore>, principal: Option<&Employee>) -> String {
        if let Some(target) = session
            .and_then(|s| s.target_path(MAIN_FIREWALL))
            .filter(|t| !t.is_empty())
        {
            if is_local_path(&target) {
                log::debug!("redirecting to saved target path {}", target);
                return target;
            }
            log::warn!("ignoring saved target path {:?} outside this host", target);
        }

        if let Some(url) = principal.and_then(|employee| self.employee_homepage(employee)) {
            return url;
        }

        self.router
            .generate(HOMEPAGE_ROUTE)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| {
                log::warn!("route {} is not registered, redirecting to /", HOMEPAGE_ROUTE);
                "/".to_string()
            })
    }

    fn employee_homepage(&self, employee: &Employee) -> Option<String> {
        let from_tab = employee.default_tab_id.and_then(|tab_id| {
            match self.tabs.find_by_id(tab_id) {
                Ok(Some(tab)) => match (tab.route_name(), tab.class_name()) {
                    (Some(route), _) => self.router.generate(route),
                    (None, Some(class)) => self.legacy_links.admin_link(class),
                    (None, None) => None,
                },
                Ok(None) => {
                    log::info!("default tab {} of employee {} no longer exists", tab_id, employee.id);
                    None
                }
                Err(e) => {
                    log::warn!("could not load default tab {} of employee {}: {}", tab_id, employee.id, e);
                    None
                }
            }
        });

        from_tab
            .filter(|url| !url.is_empty())
            .or_else(|| self.legacy_links.admin_link(DASHBOARD_CONTROLLER))
            .filter(|url| !url.is_empty())
    }
}
