use actix_web::{web, HttpResponse};

use crate::application::customer_view_service::CustomerViewService;
use crate::domain::customer::CustomerId;
use crate::domain::view::ViewableCustomer;
use crate::errors::AppError;

/// GET /customers/{id}/view
///
/// Everything the back office shows on a customer's page: profile, orders,
/// products, messages, discounts, emails, connections, groups, addresses.
#[utoipa::path(
    get,
    path = "/customers/{id}/view",
    params(
        ("id" = i32, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Customer view", body = ViewableCustomer),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn get_customer_view(
    service: web::Data<CustomerViewService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = CustomerId(path.into_inner());

    let view = web::block(move || service.assemble_view(customer_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(view))
}
