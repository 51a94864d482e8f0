use serde::{Deserialize, Serialize};

/// Firewall whose saved target path is honoured after login.
pub const MAIN_FIREWALL: &str = "main";
/// Route used when nothing better is known.
pub const HOMEPAGE_ROUTE: &str = "admin_homepage";
/// Legacy controller used when an employee's default tab leads nowhere.
pub const DASHBOARD_CONTROLLER: &str = "AdminDashboard";

/// Authenticated back-office user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub default_tab_id: Option<i32>,
}

/// Back-office menu entry. Newer entries carry a route name, older ones only
/// the legacy controller class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: i32,
    pub route_name: Option<String>,
    pub class_name: Option<String>,
}

impl Tab {
    pub fn route_name(&self) -> Option<&str> {
        self.route_name.as_deref().filter(|r| !r.is_empty())
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref().filter(|c| !c.is_empty())
    }
}

/// A saved target path is only followed when it stays on this host: an
/// absolute path, not protocol-relative, without backslashes or control
/// characters that browsers fold into `//`.
pub fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control)
}
