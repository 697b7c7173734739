use poem::handler;
use poem::web::Json;

use crate::prelude::*;
use crate::web::responses::WelcomeResponse;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}
