use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StaffOnlineDto {
    /// Distinct users with an open session seen within the online window
    pub count: u64,
}
