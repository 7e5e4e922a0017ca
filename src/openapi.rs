use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "smesales API",
        version = "1.0.0",
        description = r#"
Sales management backend for small businesses.

Manages billing entities, customers, products, sales with their line items,
and customer payments. Every entity exposes full CRUD plus lookups by its
natural keys (trade name, display name, formal name, invoice id) and by its
foreign keys.

Updates are full replacements: the stored record is fetched, every field is
overwritten from the payload, and the result is saved. There is no partial
patch.
"#
    ),
    paths(
        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::get_product_by_formal_name,
        crate::handlers::products::get_product_by_display_name,
        crate::handlers::products::list_active_products,
        crate::handlers::products::product_exists,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
        crate::handlers::payments::list_payments,
        crate::handlers::payments::get_payment,
        crate::handlers::payments::list_payments_by_customer,
        crate::handlers::payments::list_payments_by_method,
        crate::handlers::payments::create_payment,
        crate::handlers::payments::update_payment,
        crate::handlers::payments::delete_payment,
    ),
    components(schemas(
        crate::entities::billing_entity::Model,
        crate::entities::customer::Model,
        crate::entities::product::Model,
        crate::entities::sale::Model,
        crate::entities::sale_detail::Model,
        crate::entities::payment::Model,
        crate::errors::ErrorResponse,
    )),
    tags(
        (name = "Products", description = "Product catalog"),
        (name = "Payments", description = "Customer payments")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
