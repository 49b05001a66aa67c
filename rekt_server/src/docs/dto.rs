use crate::{error::ErrorServer, info, valuation};
use rekt_core::helpers::dto::ValuationResult;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(info::handler::info, valuation::handler::valuation,),
    components(schemas(info::dto::Info, ValuationResult, ErrorServer))
)]
pub struct ApiDoc;
