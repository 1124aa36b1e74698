use crate::database::ActivityStore;
use crate::models::ActivityMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertParticipant {
    Inserted,
    AlreadyPresent,
    ActivityMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteParticipant {
    Deleted,
    NotPresent,
    ActivityMissing,
}

/// Snapshot of every activity.
pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.read().await.clone()
}

pub async fn insert_participant(
    store: &ActivityStore,
    activity: &str,
    email: &str,
) -> InsertParticipant {
    let mut activities = store.write().await;
    let Some(record) = activities.get_mut(activity) else {
        return InsertParticipant::ActivityMissing;
    };
    if record.has_participant(email) {
        return InsertParticipant::AlreadyPresent;
    }
    record.participants.push(email.to_string());
    InsertParticipant::Inserted
}

pub async fn delete_participant(
    store: &ActivityStore,
    activity: &str,
    email: &str,
) -> DeleteParticipant {
    let mut activities = store.write().await;
    let Some(record) = activities.get_mut(activity) else {
        return DeleteParticipant::ActivityMissing;
    };
    let Some(pos) = record.participants.iter().position(|p| p == email) else {
        return DeleteParticipant::NotPresent;
    };
    record.participants.remove(pos);
    DeleteParticipant::Deleted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_delete_restores_roster() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store).await;

        let inserted = insert_participant(&store, "Math Club", "ada@mergington.edu").await;
        assert_eq!(inserted, InsertParticipant::Inserted);
        let deleted = delete_participant(&store, "Math Club", "ada@mergington.edu").await;
        assert_eq!(deleted, DeleteParticipant::Deleted);

        assert_eq!(list_activities(&store).await, before);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = ActivityStore::seeded();
        let res = insert_participant(&store, "Chess Club", "michael@mergington.edu").await;
        assert_eq!(res, InsertParticipant::AlreadyPresent);

        let chess = &list_activities(&store).await["Chess Club"];
        let count = chess
            .participants
            .iter()
            .filter(|p| p.as_str() == "michael@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn unknown_activity_is_reported() {
        let store = ActivityStore::seeded();
        assert_eq!(
            insert_participant(&store, "chess club", "a@mergington.edu").await,
            InsertParticipant::ActivityMissing
        );
        assert_eq!(
            delete_participant(&store, "Knitting", "a@mergington.edu").await,
            DeleteParticipant::ActivityMissing
        );
    }

    #[tokio::test]
    async fn delete_of_non_participant_is_reported() {
        let store = ActivityStore::seeded();
        let res = delete_participant(&store, "Chess Club", "notfound@mergington.edu").await;
        assert_eq!(res, DeleteParticipant::NotPresent);
    }
}
