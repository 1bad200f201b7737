// Route path constants - single source of truth for all API paths

pub const PING: &str = "/api/ping";
pub const ADD_ITEM: &str = "/api/add-item";
pub const LATEST_ITEM: &str = "/api/get-latest-item";
pub const HEALTH: &str = "/api/health";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
