use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub name: String,
    pub version: String,
    #[schema(example = "3359.00")]
    pub reference_price: String,
    #[schema(example = "2025-01-20")]
    pub reference_date: String,
}
