//! Service Info Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Service information response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceInfo {
    /// Service description
    #[serde(rename = "mensaje")]
    pub message: String,

    /// Service version
    pub version: String,

    /// Map of the main endpoints
    pub endpoints: EndpointMap,
}

/// The main endpoints of the service
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EndpointMap {
    /// Optimization endpoint
    pub optimizar: String,

    /// Interactive documentation
    pub documentacion: String,

    /// Health endpoint
    pub health: String,
}

/// Service Info Handler
///
/// Describes the service and where its endpoints live.
#[endpoint(tags("info"), summary = "Service information")]
pub(crate) async fn handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Microservicio de Optimización de Portafolio de Inversiones".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            optimizar: "/optimizar".to_string(),
            documentacion: "/docs".to_string(),
            health: "/health".to_string(),
        },
    })
}
