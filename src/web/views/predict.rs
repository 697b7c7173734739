use poem::http::StatusCode;
use poem::web::{Data, Json};
use poem::{handler, IntoResponse, Response};

use crate::prelude::*;
use crate::trainer::model::Model;
use crate::web::requests::PredictRequest;
use crate::web::responses::{ErrorResponse, PredictionResponse, ValidationResponse};

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_predict(
    Json(request): Json<PredictRequest>,
    Data(model): Data<&Arc<Model>>,
) -> Response {
    let start_instant = Instant::now();
    debug!(?request);

    let errors = request.validate();
    if !errors.is_empty() {
        info!(n_errors = errors.len(), "rejected the request");
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(ValidationResponse::new(errors)))
            .into_response();
    }

    match model.predict(&request.to_features()) {
        Ok(prediction) => {
            info!(prediction, elapsed = ?start_instant.elapsed());
            Json(PredictionResponse::new(prediction)).into_response()
        }
        Err(error) => {
            error!("{:#}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Prediction failed: {:#}", error))),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;

    use crate::prelude::Result;
    use crate::trainer::model::Model;
    use crate::web::create_app;
    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn predict_ok() -> Result {
        let client = create_test_client();
        let response = client
            .post("/predict")
            .body_json(&serde_json::json!({
                "temperature": 20.0,
                "humidity": 50.0,
                "wind_speed": 10.0,
            }))
            .send()
            .await;
        response.assert_status_is_ok();

        let json = response.json().await;
        let object = json.value().object();
        object.get("status").assert_string("success");
        object.get("message").assert_string("Prediction generated successfully");
        assert!(object.get("prediction").f64().is_finite());
        Ok(())
    }

    #[tokio::test]
    async fn out_of_bounds_rejected() -> Result {
        let client = create_test_client();
        let response = client
            .post("/predict")
            .body_json(&serde_json::json!({
                "temperature": 20.0,
                "humidity": 150.0,
                "wind_speed": 10.0,
            }))
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json().await;
        let detail = json.value().object().get("detail");
        detail.array().get(0).object().get("field").assert_string("humidity");
        Ok(())
    }

    #[tokio::test]
    async fn missing_field_rejected() -> Result {
        let client = create_test_client();
        let response = client
            .post("/predict")
            .body_json(&serde_json::json!({
                "temperature": 20.0,
                "humidity": 50.0,
            }))
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_model_reported() -> Result {
        // One coefficient short: inference fails, validation does not.
        let client = TestClient::new(create_app(Model::new(vec![0.5, -0.25], 10.0)));
        let response = client
            .post("/predict")
            .body_json(&serde_json::json!({
                "temperature": 20.0,
                "humidity": 50.0,
                "wind_speed": 10.0,
            }))
            .send()
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let json = response.json().await;
        assert!(json.value().object().get("detail").string().starts_with("Prediction failed"));
        Ok(())
    }
}
