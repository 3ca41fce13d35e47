//! Example Payloads Handler

use salvo::prelude::*;
use serde_json::{Value, json};

/// Example Payloads Handler
///
/// Returns ready-to-send example requests together with the responses the
/// service produces for them.
#[handler]
pub(crate) async fn handler() -> Json<Value> {
    Json(json!({
        "ejemplos": {
            "caso_1": {
                "descripcion": "Máximo aprovechamiento de capacidad",
                "entrada": {
                    "capacidad": 10_000,
                    "objetos": [
                        {"nombre": "Fondo_A", "peso": 2000, "ganancia": 1500},
                        {"nombre": "Fondo_B", "peso": 4000, "ganancia": 3500},
                        {"nombre": "Fondo_C", "peso": 5000, "ganancia": 4000},
                        {"nombre": "Fondo_D", "peso": 3000, "ganancia": 2500},
                        {"nombre": "Fondo_E", "peso": 1500, "ganancia": 1800},
                    ],
                },
                "salida_esperada": {
                    "seleccionados": ["Fondo_C", "Fondo_D", "Fondo_E"],
                    "ganancia_total": 8300,
                    "peso_total": 9500,
                    "capacidad_utilizada": 95.0,
                    "eficiencia": 0.8737,
                },
            },
            "caso_2": {
                "descripcion": "Capacidad limitada",
                "entrada": {
                    "capacidad": 8000,
                    "objetos": [
                        {"nombre": "Acción_X", "peso": 1000, "ganancia": 800},
                        {"nombre": "Acción_Y", "peso": 2500, "ganancia": 2200},
                        {"nombre": "Acción_Z", "peso": 3000, "ganancia": 2800},
                        {"nombre": "Bono_P", "peso": 4000, "ganancia": 3000},
                        {"nombre": "Bono_Q", "peso": 1500, "ganancia": 1200},
                    ],
                },
                "salida_esperada": {
                    "seleccionados": ["Acción_X", "Acción_Y", "Acción_Z", "Bono_Q"],
                    "ganancia_total": 7000,
                    "peso_total": 8000,
                    "capacidad_utilizada": 100.0,
                    "eficiencia": 0.875,
                },
            },
        },
    }))
}
