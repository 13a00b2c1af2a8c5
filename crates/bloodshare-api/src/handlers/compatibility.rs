//! Blood type compatibility lookup.

use axum::Json;
use axum::extract::Path;

use bloodshare_entity::blood_type::BloodType;

use crate::dto::response::CompatibilityResponse;
use crate::error::ApiError;

/// GET /api/compatibility/{blood_group}
pub async fn lookup(Path(raw): Path<String>) -> Result<Json<CompatibilityResponse>, ApiError> {
    let blood_group: BloodType = raw.parse()?;

    Ok(Json(CompatibilityResponse {
        blood_group,
        compatible_donors: blood_group.compatible_donors().to_vec(),
        can_donate_to: BloodType::ALL
            .into_iter()
            .filter(|recipient| blood_group.can_donate_to(*recipient))
            .collect(),
    }))
}
