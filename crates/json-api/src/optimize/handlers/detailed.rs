//! Detailed Optimization Analysis Handler

use std::time::Instant;

use jiff::Timestamp;
use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::Serialize;
use tracing::info;

use portfolio::analysis::DetailedAnalysis;

use crate::optimize::{errors::render_validation_failure, models::OptimizeRequest};

/// Detailed analysis plus the boundary-measured execution metrics.
#[derive(Debug, Serialize)]
pub(crate) struct DetailedResponse {
    #[serde(flatten)]
    pub analysis: DetailedAnalysis,

    pub rendimiento: Performance,
}

/// Execution metrics measured around the engine call.
#[derive(Debug, Serialize)]
pub(crate) struct Performance {
    /// Wall-clock duration of the analysis in milliseconds, rounded to two
    /// decimals.
    pub tiempo_ejecucion_ms: f64,

    /// Moment the analysis finished.
    pub timestamp: String,
}

/// Detailed Optimization Analysis Handler
///
/// Runs the optimization and returns the selection together with aggregate
/// statistics and the per-item efficiency ranking.
#[endpoint(
    tags("optimize"),
    summary = "Optimize with detailed analysis",
    responses(
        (status_code = StatusCode::OK, description = "Detailed analysis"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid request payload"),
    ),
)]
pub(crate) async fn handler(json: JsonBody<OptimizeRequest>, res: &mut Response) {
    match json.into_inner().into_domain() {
        Ok((capacity, items)) => {
            info!(
                "starting detailed analysis: capacity {capacity}, {} items",
                items.len()
            );

            let started = Instant::now();
            let analysis = portfolio::analysis::analyze(capacity, &items);
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            info!("detailed analysis complete in {elapsed_ms:.4}ms");

            res.render(Json(DetailedResponse {
                analysis,
                rendimiento: Performance {
                    tiempo_ejecucion_ms: (elapsed_ms * 100.0).round() / 100.0,
                    timestamp: Timestamp::now().to_string(),
                },
            }));
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
        Service::new(
            Router::with_path("optimizar")
                .push(Router::with_path("detallado").post(handler)),
        )
    }

    #[tokio::test]
    async fn test_detailed_returns_full_analysis() -> TestResult {
        let mut res = TestClient::post("http://example.com/optimizar/detallado")
            .json(&json!({
                "capacidad": 1000,
                "objetos": [
                    {"nombre": "A", "peso": 300, "ganancia": 200},
                    {"nombre": "B", "peso": 400, "ganancia": 300},
                    {"nombre": "C", "peso": 500, "ganancia": 400},
                ],
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(
            body["resultado_optimizacion"]["seleccionados"],
            json!(["B", "C"])
        );
        assert_eq!(body["resultado_optimizacion"]["ganancia_total"], 700);

        let stats = &body["estadisticas"];

        assert_eq!(stats["total_objetos_disponibles"], 3);
        assert_eq!(stats["objetos_seleccionados"], 2);
        assert_eq!(stats["porcentaje_seleccion"], 66.67);
        assert_eq!(stats["ganancia_total_disponible"], 900);
        assert_eq!(stats["ganancia_obtenida"], 700);
        assert_eq!(stats["porcentaje_ganancia_obtenida"], 77.78);
        assert_eq!(stats["peso_total_disponible"], 1200);
        assert_eq!(stats["peso_utilizado"], 900);
        assert_eq!(stats["porcentaje_peso_utilizado"], 75.0);

        let efficiencies = &body["eficiencias_objetos"];

        assert_eq!(efficiencies.as_array().map_or(0, Vec::len), 3);
        assert_eq!(efficiencies[0]["nombre"], "C");
        assert_eq!(efficiencies[0]["eficiencia"], 0.8);

        Ok(())
    }

    #[tokio::test]
    async fn test_detailed_appends_performance_block() -> TestResult {
        let body: Value = TestClient::post("http://example.com/optimizar/detallado")
            .json(&json!({
                "capacidad": 1000,
                "objetos": [{"nombre": "Solo", "peso": 500, "ganancia": 300}],
            }))
            .send(&make_service())
            .await
            .take_json()
            .await?;

        let rendimiento = &body["rendimiento"];

        assert!(rendimiento["tiempo_ejecucion_ms"].as_f64().is_some());
        assert!(rendimiento["timestamp"].as_str().is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_detailed_rejects_invalid_payload() -> TestResult {
        let mut res = TestClient::post("http://example.com/optimizar/detallado")
            .json(&json!({
                "capacidad": 1000,
                "objetos": [{"nombre": "Test", "peso": 0, "ganancia": 50}],
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        let body: Value = res.take_json().await?;

        assert_eq!(body["tipo"], "INPUT_VALIDATION");

        Ok(())
    }
}
