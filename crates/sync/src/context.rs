//! The shared data context.
//!
//! Refresh policy:
//! - Creates and updates of services, appointments, messages and reviews
//!   refetch all four collections so denormalized fields stay consistent.
//! - Deletes and status updates patch the local collection in place without
//!   refetching.
//!
//! A failed store call leaves the local collections exactly as they were.
//!
//! Local patches made while a refresh is fetching are replayed over the
//! rows it brings back, so a fetch that started before a status update or
//! delete cannot roll that change back.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use mucize_core::entities::{
    Appointment, ContactMessage, NewAppointment, NewMessage, Review, ReviewSubmission,
    ServiceInput, ServiceItem,
};
use mucize_core::review::{
    has_completed_booking, REVIEW_ACCEPTED_MESSAGE, REVIEW_INELIGIBLE_MESSAGE,
    REVIEW_INVALID_RATING_MESSAGE, REVIEW_STORE_FAILURE_MESSAGE,
};
use mucize_core::stats::{compute_stats, DashboardStats};
use mucize_core::status::{validate_transition, AppointmentStatus};
use mucize_core::types::DbId;
use mucize_core::validation::validate_rating;
use mucize_db::{DataStore, StoreError, Table};

use crate::error::SyncError;
use crate::mapping;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Behaviour switches for [`DataContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Reject status changes outside the staff workflow
    /// (pending -> approved/rejected, approved -> completed/rejected).
    /// Off by default: any status is accepted.
    pub enforce_status_transitions: bool,
}

/// The four synchronized collections.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
    pub services: Vec<ServiceItem>,
    pub appointments: Vec<Appointment>,
    pub messages: Vec<ContactMessage>,
    pub reviews: Vec<Review>,
}

/// A point-in-time copy of the collections plus the loading flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub loading: bool,
    #[serde(flatten)]
    pub collections: Collections,
}

/// Result of [`DataContext::add_review`]. `message` is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    pub success: bool,
    pub message: String,
}

impl ReviewOutcome {
    fn accepted(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Local patches
// ---------------------------------------------------------------------------

/// An in-place change made without refetching.
#[derive(Debug, Clone, Copy)]
enum LocalPatch {
    Status(DbId, AppointmentStatus),
    Removed(Table, DbId),
}

impl LocalPatch {
    fn apply(self, collections: &mut Collections) {
        match self {
            Self::Status(id, status) => {
                if let Some(appt) = collections.appointments.iter_mut().find(|a| a.id == id) {
                    appt.status = status;
                }
            }
            Self::Removed(Table::Services, id) => collections.services.retain(|s| s.id != id),
            Self::Removed(Table::Appointments, id) => {
                collections.appointments.retain(|a| a.id != id)
            }
            Self::Removed(Table::Messages, id) => collections.messages.retain(|m| m.id != id),
            Self::Removed(Table::Reviews, id) => collections.reviews.retain(|r| r.id != id),
        }
    }
}

/// Patches recorded while at least one refresh is fetching.
#[derive(Debug, Default)]
struct PatchLog {
    next_seq: u64,
    entries: Vec<(u64, LocalPatch)>,
    /// `next_seq` as it stood when each running refresh started.
    active: Vec<u64>,
}

impl PatchLog {
    fn begin(&mut self) -> u64 {
        let since = self.next_seq;
        self.active.push(since);
        since
    }

    fn record(&mut self, patch: LocalPatch) {
        if self.active.is_empty() {
            return;
        }
        self.entries.push((self.next_seq, patch));
        self.next_seq += 1;
    }

    fn since(&self, since: u64) -> impl Iterator<Item = LocalPatch> + '_ {
        self.entries
            .iter()
            .filter(move |(seq, _)| *seq >= since)
            .map(|(_, patch)| *patch)
    }

    fn end(&mut self, since: u64) {
        if let Some(pos) = self.active.iter().position(|s| *s == since) {
            self.active.swap_remove(pos);
        }
        match self.active.iter().min() {
            Some(&oldest) => self.entries.retain(|(seq, _)| *seq >= oldest),
            None => self.entries.clear(),
        }
    }
}

/// Marks one refresh as running until dropped, including when the refresh
/// future is cancelled mid-fetch.
struct RefreshGuard<'a> {
    ctx: &'a DataContext,
    since: u64,
}

impl<'a> RefreshGuard<'a> {
    fn enter(ctx: &'a DataContext) -> Self {
        ctx.in_flight.fetch_add(1, Ordering::SeqCst);
        let since = ctx.patch_log().begin();
        Self { ctx, since }
    }
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.ctx.patch_log().end(self.since);
        self.ctx.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// DataContext
// ---------------------------------------------------------------------------

/// Sole owner of the in-memory collections.
///
/// Consumers read through [`read`](Self::read) or the cloning accessors and
/// route every mutation through the methods below.
pub struct DataContext {
    store: Arc<dyn DataStore>,
    options: SyncOptions,
    collections: RwLock<Collections>,
    /// Set once the first refresh has resolved.
    loaded: AtomicBool,
    in_flight: AtomicUsize,
    patches: Mutex<PatchLog>,
}

impl DataContext {
    pub fn new(store: Arc<dyn DataStore>, options: SyncOptions) -> Self {
        Self {
            store,
            options,
            collections: RwLock::new(Collections::default()),
            loaded: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
            patches: Mutex::new(PatchLog::default()),
        }
    }

    /// Kick off the initial load in the background.
    ///
    /// Consumers observe [`is_loading`](Self::is_loading) until it resolves.
    /// Dropping the handle does not cancel the load.
    pub fn activate(self: &Arc<Self>) -> JoinHandle<()> {
        let ctx = Arc::clone(self);
        tokio::spawn(async move { ctx.refresh().await })
    }

    /// True until the first load resolves, and while any refresh is running.
    pub fn is_loading(&self) -> bool {
        !self.loaded.load(Ordering::SeqCst) || self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// True once the first refresh has resolved, whatever it fetched.
    ///
    /// Unlike [`is_loading`](Self::is_loading) this stays true while later
    /// refreshes run.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    fn patch_log(&self) -> MutexGuard<'_, PatchLog> {
        self.patches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a patch to the local collections and record it for any refresh
    /// still fetching.
    async fn patch(&self, patch: LocalPatch) {
        let mut collections = self.collections.write().await;
        patch.apply(&mut collections);
        self.patch_log().record(patch);
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Run `f` against the current collections without cloning them.
    pub async fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> R {
        let collections = self.collections.read().await;
        f(&collections)
    }

    pub async fn snapshot(&self) -> Snapshot {
        Snapshot {
            loading: self.is_loading(),
            collections: self.collections.read().await.clone(),
        }
    }

    pub async fn services(&self) -> Vec<ServiceItem> {
        self.read(|c| c.services.clone()).await
    }

    pub async fn service(&self, id: DbId) -> Option<ServiceItem> {
        self.read(|c| c.services.iter().find(|s| s.id == id).cloned())
            .await
    }

    pub async fn appointments(&self) -> Vec<Appointment> {
        self.read(|c| c.appointments.clone()).await
    }

    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.read(|c| c.messages.clone()).await
    }

    pub async fn reviews(&self) -> Vec<Review> {
        self.read(|c| c.reviews.clone()).await
    }

    /// Statistics over the current collections, recomputed on every call.
    pub async fn stats(&self) -> DashboardStats {
        self.read(|c| compute_stats(&c.appointments, &c.messages))
            .await
    }

    // -----------------------------------------------------------------------
    // Refresh
    // -----------------------------------------------------------------------

    /// Refetch all four collections concurrently.
    ///
    /// Each table settles independently: a failed table keeps its previous
    /// contents, a missing table reads as empty, and the loading flag clears
    /// once all four have resolved either way.
    ///
    /// Status updates and deletes that land while the fetch is running are
    /// reapplied to the fetched rows. Cancelling the future mid-fetch leaves
    /// the collections untouched and does not leave the context loading.
    pub async fn refresh(&self) {
        let guard = RefreshGuard::enter(self);

        let (services, appointments, messages, reviews) = tokio::join!(
            self.store.list_services(),
            self.store.list_appointments(),
            self.store.list_messages(),
            self.store.list_reviews(),
        );

        {
            let mut collections = self.collections.write().await;

            if let Some(rows) = settle(Table::Services, services) {
                collections.services = rows.into_iter().map(mapping::service_from_row).collect();
            }
            if let Some(rows) = settle(Table::Appointments, appointments) {
                collections.appointments = rows
                    .into_iter()
                    .filter_map(|row| {
                        let id = row.id;
                        mapping::appointment_from_row(row)
                            .map_err(|e| {
                                tracing::warn!(appointment_id = %id, error = %e, "Skipping appointment with unreadable status");
                            })
                            .ok()
                    })
                    .collect();
            }
            if let Some(rows) = settle(Table::Messages, messages) {
                collections.messages = rows.into_iter().map(mapping::message_from_row).collect();
            }
            if let Some(rows) = settle(Table::Reviews, reviews) {
                collections.reviews = rows.into_iter().map(mapping::review_from_row).collect();
            }

            for patch in self.patch_log().since(guard.since) {
                patch.apply(&mut collections);
            }

            tracing::debug!(
                services = collections.services.len(),
                appointments = collections.appointments.len(),
                messages = collections.messages.len(),
                reviews = collections.reviews.len(),
                "Collections refreshed"
            );
        }

        self.loaded.store(true, Ordering::SeqCst);
        drop(guard);
    }

    // -----------------------------------------------------------------------
    // Appointments
    // -----------------------------------------------------------------------

    /// Insert an appointment with the status the caller supplies, then refresh.
    pub async fn add_appointment(&self, input: NewAppointment) -> Result<Appointment, SyncError> {
        input.validate()?;

        let row = self
            .store
            .insert_appointment(&mapping::appointment_to_row(&input))
            .await
            .map_err(|e| log_store_error("add_appointment", e))?;

        tracing::info!(
            appointment_id = %row.id,
            service_id = %row.service_id,
            status = %row.status,
            "Appointment created"
        );

        self.refresh().await;
        Ok(mapping::appointment_from_row(row)?)
    }

    /// Change only the status of an appointment and patch it locally.
    ///
    /// Returns `Ok(false)` without touching local state when the store has
    /// no row with that id.
    pub async fn update_status(
        &self,
        id: DbId,
        status: AppointmentStatus,
    ) -> Result<bool, SyncError> {
        if self.options.enforce_status_transitions {
            let current = self
                .read(|c| c.appointments.iter().find(|a| a.id == id).map(|a| a.status))
                .await;
            if let Some(current) = current {
                validate_transition(current, status)?;
            }
        }

        let found = self
            .store
            .update_appointment_status(id, status.as_str())
            .await
            .map_err(|e| log_store_error("update_status", e))?;

        if !found {
            tracing::warn!(appointment_id = %id, %status, "Status update matched no appointment");
            return Ok(false);
        }

        self.patch(LocalPatch::Status(id, status)).await;
        tracing::info!(appointment_id = %id, %status, "Appointment status updated");
        Ok(true)
    }

    pub async fn delete_appointment(&self, id: DbId) -> Result<(), SyncError> {
        self.store
            .delete_appointment(id)
            .await
            .map_err(|e| log_store_error("delete_appointment", e))?;

        self.patch(LocalPatch::Removed(Table::Appointments, id)).await;
        tracing::info!(appointment_id = %id, "Appointment deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Services
    // -----------------------------------------------------------------------

    pub async fn add_service(&self, input: ServiceInput) -> Result<ServiceItem, SyncError> {
        input.validate()?;

        let row = self
            .store
            .insert_service(&mapping::service_to_row(&input))
            .await
            .map_err(|e| log_store_error("add_service", e))?;

        tracing::info!(service_id = %row.id, title = %row.title, "Service created");
        self.refresh().await;
        Ok(mapping::service_from_row(row))
    }

    /// Replace a service's fields, then refresh.
    ///
    /// Existing appointments keep their `service_name` snapshot.
    pub async fn update_service(&self, id: DbId, input: ServiceInput) -> Result<bool, SyncError> {
        input.validate()?;

        let found = self
            .store
            .update_service(id, &mapping::service_to_row(&input))
            .await
            .map_err(|e| log_store_error("update_service", e))?;

        if found {
            tracing::info!(service_id = %id, "Service updated");
        } else {
            tracing::warn!(service_id = %id, "Service update matched no row");
        }
        self.refresh().await;
        Ok(found)
    }

    /// Remove a service. Appointments and reviews naming it are kept.
    pub async fn delete_service(&self, id: DbId) -> Result<(), SyncError> {
        self.store
            .delete_service(id)
            .await
            .map_err(|e| log_store_error("delete_service", e))?;

        self.patch(LocalPatch::Removed(Table::Services, id)).await;
        tracing::info!(service_id = %id, "Service deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Messages
    // -----------------------------------------------------------------------

    pub async fn add_message(&self, input: NewMessage) -> Result<ContactMessage, SyncError> {
        input.validate()?;

        let row = self
            .store
            .insert_message(&mapping::message_to_row(&input))
            .await
            .map_err(|e| log_store_error("add_message", e))?;

        tracing::info!(message_id = %row.id, "Contact message received");
        self.refresh().await;
        Ok(mapping::message_from_row(row))
    }

    pub async fn delete_message(&self, id: DbId) -> Result<(), SyncError> {
        self.store
            .delete_message(id)
            .await
            .map_err(|e| log_store_error("delete_message", e))?;

        self.patch(LocalPatch::Removed(Table::Messages, id)).await;
        tracing::info!(message_id = %id, "Contact message deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reviews
    // -----------------------------------------------------------------------

    /// Store a review if the phone number has a completed appointment for
    /// the service in the current appointment collection.
    ///
    /// The check runs against locally held appointments only; the store
    /// itself does not enforce it.
    pub async fn add_review(&self, submission: ReviewSubmission) -> ReviewOutcome {
        if validate_rating(submission.rating).is_err() {
            return ReviewOutcome::rejected(REVIEW_INVALID_RATING_MESSAGE);
        }

        let eligible = self
            .read(|c| {
                has_completed_booking(
                    &c.appointments,
                    submission.service_id,
                    &submission.customer_phone,
                )
            })
            .await;

        if !eligible {
            tracing::debug!(service_id = %submission.service_id, "Review rejected: no completed booking");
            return ReviewOutcome::rejected(REVIEW_INELIGIBLE_MESSAGE);
        }

        match self
            .store
            .insert_review(&mapping::review_to_row(&submission))
            .await
        {
            Ok(row) => {
                tracing::info!(review_id = %row.id, service_id = %row.service_id, rating = row.rating, "Review added");
                self.refresh().await;
                ReviewOutcome::accepted(REVIEW_ACCEPTED_MESSAGE)
            }
            Err(e) => {
                log_store_error("add_review", e);
                ReviewOutcome::rejected(REVIEW_STORE_FAILURE_MESSAGE)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decide what a table fetch contributes to a refresh.
///
/// `None` keeps the current collection.
fn settle<T>(table: Table, result: Result<Vec<T>, StoreError>) -> Option<Vec<T>> {
    match result {
        Ok(rows) => Some(rows),
        Err(e) if e.is_missing_table() => {
            tracing::debug!(%table, "Table missing, treating as empty");
            Some(Vec::new())
        }
        Err(e) => {
            tracing::error!(%table, error = %e, "Failed to load table");
            None
        }
    }
}

fn log_store_error(operation: &'static str, err: StoreError) -> StoreError {
    tracing::error!(operation, error = %err, "Store operation failed");
    err
}
