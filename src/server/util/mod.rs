//! Pure helpers shared by services and controllers: shift resolution, batch numbering
//! and request input validation.

pub mod batch_number;
pub mod shift;
pub mod validate;
