use utoipa::OpenApi;

use crate::ephemeris::{OemHeader, OemMetadata, StateVector, VectorComponent};

use super::api::epochs::{EpochLocationResponse, EpochSpeedResponse, NowResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::feed::comment,
        super::api::feed::header,
        super::api::feed::metadata,
        super::api::epochs::list_epochs,
        super::api::epochs::get_epoch,
        super::api::epochs::get_epoch_speed,
        super::api::epochs::get_epoch_location,
        super::api::epochs::now,
    ),
    components(
        schemas(
            OemHeader,
            OemMetadata,
            StateVector,
            VectorComponent,
            EpochSpeedResponse,
            EpochLocationResponse,
            NowResponse,
        )
    ),
    info(
        title = "ISS Tracker API",
        description = "REST API deriving speed and sub-satellite position from the public ISS trajectory feed",
        version = "0.1.0"
    ),
    tags(
        (name = "feed", description = "Upstream OEM feed passthrough"),
        (name = "epochs", description = "State vectors and derived quantities")
    )
)]
pub struct ApiDoc;
