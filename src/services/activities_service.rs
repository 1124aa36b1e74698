use tracing::{info, warn};

use crate::database::activities_repo::{self, DeleteParticipant, InsertParticipant};
use crate::database::ActivityStore;
use crate::error::{RegistryError, ACTIVITY_NOT_FOUND, ALREADY_SIGNED_UP, STUDENT_NOT_FOUND};
use crate::models::{ActivityMap, MessageResponse};

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    activities_repo::list_activities(store).await
}

pub async fn signup(
    store: &ActivityStore,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, RegistryError> {
    match activities_repo::insert_participant(store, activity, email).await {
        InsertParticipant::Inserted => {
            info!(activity = %activity, email = %email, "signup_ok");
            Ok(MessageResponse::new(format!(
                "Signed up {} for {}",
                email, activity
            )))
        }
        InsertParticipant::AlreadyPresent => {
            warn!(activity = %activity, email = %email, "signup_rejected: already signed up");
            Err(RegistryError::Conflict(ALREADY_SIGNED_UP))
        }
        InsertParticipant::ActivityMissing => {
            warn!(activity = %activity, "signup_rejected: unknown activity");
            Err(RegistryError::NotFound(ACTIVITY_NOT_FOUND))
        }
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, RegistryError> {
    match activities_repo::delete_participant(store, activity, email).await {
        DeleteParticipant::Deleted => {
            info!(activity = %activity, email = %email, "unregister_ok");
            Ok(MessageResponse::new(format!(
                "Unregistered {} from {}",
                email, activity
            )))
        }
        // An unknown activity and an unknown student share one answer.
        DeleteParticipant::NotPresent | DeleteParticipant::ActivityMissing => {
            warn!(activity = %activity, email = %email, "unregister_rejected: not a participant");
            Err(RegistryError::NotFound(STUDENT_NOT_FOUND))
        }
    }
}
