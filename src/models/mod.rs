pub mod activity;
pub mod responses;

pub use activity::{ActivityMap, ActivityRecord};
pub use responses::{ErrorDetail, MessageResponse};
