use crate::domain::{NewPizza, Pizza};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PizzaStore API",
        description = "Making the Pizzas you love",
        version = "v1"
    ),
    paths(
        crate::features::hello_handler,
        crate::features::pizzas::list_pizzas_handler,
        crate::features::pizzas::create_pizza_handler,
        crate::features::pizzas::get_pizza_handler,
        crate::features::pizzas::update_pizza_handler,
        crate::features::pizzas::delete_pizza_handler,
    ),
    components(schemas(Pizza, NewPizza)),
    tags(
        (name = "health"),
        (name = "pizzas")
    )
)]
pub struct ApiDoc;
