use std::future::IntoFuture;
use std::time::Duration;

use bson::doc;
use bson::oid::ObjectId;
use core_types::LearnerProfile;
use mongodb::Collection;
use tracing::debug;

use crate::connection::StoreClient;
use crate::error::DbError;
use crate::update::ProfileUpdate;

/// The `ProfileRepository` provides a high-level, application-specific
/// interface to the learner-profile collection. It encapsulates document
/// mapping, identifier assignment, and the partial-update rules.
///
/// The repository holds no mutable state of its own; it can be cloned freely
/// and called from concurrent tasks. Isolation between concurrent calls is
/// whatever the document-store service guarantees per document.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    profiles: Collection<LearnerProfile>,
    operation_timeout: Duration,
}

impl ProfileRepository {
    /// Creates a new `ProfileRepository` on top of a shared store handle.
    pub fn new(client: &StoreClient) -> Self {
        Self {
            profiles: client.profiles(),
            operation_timeout: client.operation_timeout(),
        }
    }

    /// Persists a new profile as one atomic write and returns its freshly
    /// assigned identifier.
    ///
    /// The input must not carry an identifier and must have a non-empty
    /// username; both are `Validation` failures.
    pub async fn create(&self, profile: &LearnerProfile) -> Result<ObjectId, DbError> {
        if profile.id.is_some() {
            return Err(DbError::Validation(
                "a new profile must not carry an identifier".to_string(),
            ));
        }
        if profile.username.trim().is_empty() {
            return Err(DbError::Validation(
                "username must not be empty".to_string(),
            ));
        }

        let id = ObjectId::new();
        let mut stored = profile.clone();
        stored.id = Some(id);

        self.bounded(self.profiles.insert_one(&stored)).await?;
        debug!(profile_id = %id, username = %stored.username, "created learner profile");
        Ok(id)
    }

    /// Fetches the full profile document exactly as last written, with all
    /// nested sequences in stored order.
    pub async fn get(&self, id: ObjectId) -> Result<LearnerProfile, DbError> {
        let found = self
            .bounded(self.profiles.find_one(doc! { "_id": id }))
            .await?;
        found.ok_or(DbError::NotFound)
    }

    /// Applies a partial merge: only the paths named by `update` are
    /// overwritten; every other field, including sibling nested fields and
    /// sequence contents, is left untouched.
    ///
    /// The update is validated against the profile schema before anything is
    /// sent to the store, so a bad path never reaches the document. There is
    /// no returned document; callers re-`get` to observe the new state.
    pub async fn update(&self, id: ObjectId, update: &ProfileUpdate) -> Result<(), DbError> {
        update.validate()?;

        let outcome = self
            .bounded(
                self.profiles
                    .update_one(doc! { "_id": id }, update.to_set_document()),
            )
            .await?;
        if outcome.matched_count == 0 {
            return Err(DbError::NotFound);
        }
        debug!(profile_id = %id, "applied partial profile update");
        Ok(())
    }

    /// Runs one driver round trip under the configured operation bound.
    ///
    /// On an elapsed timer the request may still apply at the service
    /// (at-most-once); no retry or rollback is attempted here.
    async fn bounded<T, F>(&self, operation: F) -> Result<T, DbError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, operation).await {
            Ok(outcome) => Ok(outcome?),
            Err(_) => Err(DbError::Timeout {
                limit: self.operation_timeout,
            }),
        }
    }
}
