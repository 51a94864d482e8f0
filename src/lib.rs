pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::customer_view_service::{CustomerViewService, ViewContext};
use application::redirect_service::LoginRedirectResolver;
use config::{AppConfig, ConfigError};
use domain::locale::Locale;
use infrastructure::customer_view_repo::DieselCustomerViewRepository;
use infrastructure::links::{LegacyLinks, RouteTable, ShopLinks};
use infrastructure::localization::CatalogTranslator;
use infrastructure::tab_repo::DieselTabRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::customers::get_customer_view,
        handlers::auth::login_success,
    ),
    components(schemas(domain::view::ViewableCustomer)),
    tags(
        (name = "customers", description = "Back-office customer page"),
        (name = "auth", description = "Back-office login"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}

/// The two request handlers' services, wired to their collaborators.
pub struct Services {
    pub customer_views: CustomerViewService,
    pub login_redirects: LoginRedirectResolver,
}

impl Services {
    pub fn from_config(pool: DbPool, config: &AppConfig) -> Result<Self, ConfigError> {
        let translator = match &config.translations_path {
            Some(path) => CatalogTranslator::from_file(path).map_err(ConfigError::Translations)?,
            None => CatalogTranslator::default(),
        };

        let context = ViewContext {
            lang_id: config.lang_id,
            shop_id: config.shop_id,
            currency_iso: config.currency_iso.clone(),
            locale: Locale {
                date_format: config.date_format.clone(),
                datetime_format: config.datetime_format.clone(),
            },
        };

        let shop_links = config
            .shop_urls
            .iter()
            .fold(ShopLinks::new(&config.shop_base_url), |links, (shop_id, url)| {
                links.with_shop_url(*shop_id, url)
            });

        let customer_views = CustomerViewService::new(
            Arc::new(DieselCustomerViewRepository::new(pool.clone())),
            Arc::new(translator),
            Arc::new(shop_links),
            context,
        );

        let login_redirects = LoginRedirectResolver::new(
            Arc::new(RouteTable::admin(&config.admin_base_path)),
            Arc::new(DieselTabRepository::new(pool)),
            Arc::new(LegacyLinks::new(&config.admin_base_path)),
        );

        Ok(Self {
            customer_views,
            login_redirects,
        })
    }
}

/// Routes of the service, without state. Callers register the
/// `CustomerViewService` and `LoginRedirectResolver` as app data.
///
/// `POST /login/success` reads the authenticated [`domain::redirect::Employee`]
/// from the request extensions. The authentication middleware in front of it
/// must insert it, e.g.
///
/// ```ignore
/// App::new().wrap_fn(|req, srv| {
///     if let Some(employee) = authenticate(&req) {
///         req.extensions_mut().insert(employee);
///     }
///     srv.call(req)
/// })
/// ```
///
/// Without it every login is anonymous and lands on the saved target path or
/// the admin homepage.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("/{id}/view", web::get().to(handlers::customers::get_customer_view)),
    )
    .route("/login/success", web::post().to(handlers::auth::login_success));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server. No authentication layer is installed here; see
/// [`configure`] for where the logged-in employee comes from.
pub fn build_server(
    services: Services,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let customer_views = web::Data::new(services.customer_views);
    let login_redirects = web::Data::new(services.login_redirects);

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(customer_views.clone())
            .app_data(login_redirects.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
