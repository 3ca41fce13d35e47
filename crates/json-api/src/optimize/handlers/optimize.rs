//! Portfolio Optimization Handler

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::optimize::{errors::render_validation_failure, models::OptimizeRequest};

/// Portfolio Optimization Handler
///
/// Selects the subset of items maximizing total gain without exceeding the
/// budget capacity.
#[endpoint(
    tags("optimize"),
    summary = "Optimize portfolio selection",
    responses(
        (status_code = StatusCode::OK, description = "Optimization result"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid request payload"),
    ),
)]
pub(crate) async fn handler(json: JsonBody<OptimizeRequest>, res: &mut Response) {
    match json.into_inner().into_domain() {
        Ok((capacity, items)) => {
            info!(
                "starting optimization: capacity {capacity}, {} items",
                items.len()
            );

            let result = portfolio::selection::optimize(capacity, &items);

            info!(
                "optimization complete: gain {}, cost {}",
                result.total_gain, result.total_cost
            );

            res.render(Json(result));
        }
        Err(error) => render_validation_failure(res, &error),
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(Router::with_path("optimizar").post(handler))
    }

    fn fund_request() -> Value {
        json!({
            "capacidad": 10_000,
            "objetos": [
                {"nombre": "Fondo_A", "peso": 2000, "ganancia": 1500},
                {"nombre": "Fondo_B", "peso": 4000, "ganancia": 3500},
                {"nombre": "Fondo_C", "peso": 5000, "ganancia": 4000},
                {"nombre": "Fondo_D", "peso": 3000, "ganancia": 2500},
                {"nombre": "Fondo_E", "peso": 1500, "ganancia": 1800},
            ],
        })
    }

    #[tokio::test]
    async fn test_optimize_returns_selection() -> TestResult {
        let mut res = TestClient::post("http://example.com/optimizar")
            .json(&fund_request())
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(body["seleccionados"], json!(["Fondo_C", "Fondo_D", "Fondo_E"]));
        assert_eq!(body["ganancia_total"], 8300);
        assert_eq!(body["peso_total"], 9500);
        assert_eq!(body["capacidad_utilizada"], 95.0);
        assert_eq!(body["eficiencia"], 0.8737);

        Ok(())
    }

    #[tokio::test]
    async fn test_optimize_limited_capacity() -> TestResult {
        let body: Value = TestClient::post("http://example.com/optimizar")
            .json(&json!({
                "capacidad": 8000,
                "objetos": [
                    {"nombre": "Acción_X", "peso": 1000, "ganancia": 800},
                    {"nombre": "Acción_Y", "peso": 2500, "ganancia": 2200},
                    {"nombre": "Acción_Z", "peso": 3000, "ganancia": 2800},
                    {"nombre": "Bono_P", "peso": 4000, "ganancia": 3000},
                    {"nombre": "Bono_Q", "peso": 1500, "ganancia": 1200},
                ],
            }))
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert_eq!(body["ganancia_total"], 7000);
        assert_eq!(body["peso_total"], 8000);
        assert_eq!(body["capacidad_utilizada"], 100.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_optimize_rejects_duplicate_names() -> TestResult {
        let mut res = TestClient::post("http://example.com/optimizar")
            .json(&json!({
                "capacidad": 1000,
                "objetos": [
                    {"nombre": "Test", "peso": 100, "ganancia": 50},
                    {"nombre": "Test", "peso": 200, "ganancia": 100},
                ],
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        let body: Value = res.take_json().await?;

        assert_eq!(body["tipo"], "INPUT_VALIDATION");

        Ok(())
    }

    #[tokio::test]
    async fn test_optimize_rejects_negative_capacity() -> TestResult {
        let mut res = TestClient::post("http://example.com/optimizar")
            .json(&json!({
                "capacidad": -1000,
                "objetos": [{"nombre": "Test", "peso": 100, "ganancia": 50}],
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        let body: Value = res.take_json().await?;

        assert_eq!(body["tipo"], "INPUT_VALIDATION");

        Ok(())
    }

    #[tokio::test]
    async fn test_optimize_rejects_empty_item_list() -> TestResult {
        let res = TestClient::post("http://example.com/optimizar")
            .json(&json!({"capacidad": 1000, "objetos": []}))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_optimize_echoes_trimmed_names() -> TestResult {
        let body: Value = TestClient::post("http://example.com/optimizar")
            .json(&json!({
                "capacidad": 1000,
                "objetos": [{"nombre": "  Solo  ", "peso": 500, "ganancia": 300}],
            }))
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert_eq!(body["seleccionados"], json!(["Solo"]));

        Ok(())
    }
}
