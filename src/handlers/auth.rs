use actix_web::cookie::Cookie;
use actix_web::{http::header, web, HttpMessage, HttpRequest, HttpResponse};

use crate::application::redirect_service::LoginRedirectResolver;
use crate::domain::ports::TargetPathStore;
use crate::domain::redirect::Employee;
use crate::errors::AppError;

/// Saved target paths live in `_security.<firewall>.target_path` cookies.
pub fn target_path_cookie(firewall: &str) -> String {
    format!("_security.{}.target_path", firewall)
}

struct CookieTargetPaths(Vec<Cookie<'static>>);

impl TargetPathStore for CookieTargetPaths {
    fn target_path(&self, firewall: &str) -> Option<String> {
        let name = target_path_cookie(firewall);
        self.0
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.value().to_string())
    }
}

/// POST /login/success
///
/// Called once the employee is authenticated. The authentication layer puts
/// the `Employee` into the request extensions; a request without cookies has
/// no previous session.
#[utoipa::path(
    post,
    path = "/login/success",
    responses(
        (status = 302, description = "Redirect to the page the employee should land on"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "auth"
)]
pub async fn login_success(
    req: HttpRequest,
    resolver: web::Data<LoginRedirectResolver>,
) -> Result<HttpResponse, AppError> {
    let principal = req.extensions().get::<Employee>().cloned();
    let employee_id = principal.as_ref().map(|e| e.id);

    let cookies = req.cookies().map(|c| c.clone()).unwrap_or_default();
    let session = (!cookies.is_empty()).then(|| CookieTargetPaths(cookies));

    // The default tab lookup hits the database.
    let url = web::block(move || {
        resolver.resolve(
            session.as_ref().map(|s| s as &dyn TargetPathStore),
            principal.as_ref(),
        )
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    log::info!("login succeeded for employee {:?}, redirecting to {}", employee_id, url);

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, url))
        .finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::Service as _;
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpMessage};

    use super::*;
    use crate::domain::redirect::Tab;
    use crate::infrastructure::links::{LegacyLinks, RouteTable};
    use crate::infrastructure::memory::InMemoryStore;

    fn resolver() -> LoginRedirectResolver {
        let mut tabs = InMemoryStore::new();
        tabs.tabs.push(Tab {
            id: 1,
            route_name: Some("admin_orders_index".into()),
            class_name: Some("AdminOrders".into()),
        });
        tabs.tabs.push(Tab {
            id: 2,
            route_name: None,
            class_name: Some("AdminStats".into()),
        });
        LoginRedirectResolver::new(
            Arc::new(RouteTable::admin("/admin")),
            Arc::new(tabs),
            Arc::new(LegacyLinks::new("/admin")),
        )
    }

    async fn login(employee: Option<Employee>, cookie: Option<Cookie<'static>>) -> (StatusCode, Option<String>) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(resolver()))
                .wrap_fn(move |req, srv| {
                    if let Some(employee) = employee.clone() {
                        req.extensions_mut().insert(employee);
                    }
                    srv.call(req)
                })
                .configure(crate::configure),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/login/success");
        if let Some(cookie) = cookie {
            req = req.cookie(cookie);
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        (resp.status(), location)
    }

    fn employee(default_tab_id: Option<i32>) -> Option<Employee> {
        Some(Employee { id: 3, default_tab_id })
    }

    #[actix_web::test]
    async fn saved_target_path_wins() {
        let cookie = Cookie::new(target_path_cookie("main"), "/admin/sell/customers/42/view");
        let (status, location) = login(employee(Some(1)), Some(cookie)).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some("/admin/sell/customers/42/view"));
    }

    #[actix_web::test]
    async fn off_site_target_path_is_not_followed() {
        let cookie = Cookie::new(target_path_cookie("main"), "https://evil.example/phish");
        let (status, location) = login(None, Some(cookie)).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some("/admin/"));

        let cookie = Cookie::new(target_path_cookie("main"), "//evil.example/phish");
        let (_, location) = login(employee(Some(1)), Some(cookie)).await;
        assert_eq!(location.as_deref(), Some("/admin/sell/orders/"));
    }

    #[actix_web::test]
    async fn other_firewalls_are_ignored() {
        let cookie = Cookie::new(target_path_cookie("api"), "/api/orders");
        let (_, location) = login(employee(Some(1)), Some(cookie)).await;
        assert_eq!(location.as_deref(), Some("/admin/sell/orders/"));
    }

    #[actix_web::test]
    async fn default_tab_with_a_route() {
        let (_, location) = login(employee(Some(1)), None).await;
        assert_eq!(location.as_deref(), Some("/admin/sell/orders/"));
    }

    #[actix_web::test]
    async fn default_tab_with_a_legacy_controller() {
        let (_, location) = login(employee(Some(2)), None).await;
        assert_eq!(location.as_deref(), Some("/admin/index.php?controller=AdminStats"));
    }

    #[actix_web::test]
    async fn missing_tab_falls_back_to_the_dashboard() {
        let (_, location) = login(employee(Some(99)), None).await;
        assert_eq!(location.as_deref(), Some("/admin/index.php?controller=AdminDashboard"));
    }

    #[actix_web::test]
    async fn anonymous_login_goes_to_the_homepage() {
        let (status, location) = login(None, None).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some("/admin/"));
    }
}
