use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    actions, ActivityRecord, NewPickupRequest, NewTransportSource, NewTransportation, NewUser,
    NewWasteEntry, Notification, PickupRequest, PointsEntry, TransportPatch, TransportSource,
    Transportation, User, WasteEntry, POINTS_PER_KG,
};
use crate::error::DomainError;
use crate::value_objects::{
    ActivityId, CafeId, NotificationId, PointsEntryId, RequestId, RequestStatus, TransportId,
    TransportStatus, UserId, WasteEntryId, WasteStatus,
};

/// The complete FWMS dataset and its lifecycle rules.
///
/// Every mutating method checks all of its preconditions before it writes
/// anything, so a returned error leaves the ledger untouched. Callers hold the
/// ledger behind a single lock, which makes each method one atomic unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodLedger {
    pub users: Vec<User>,
    pub waste_entries: Vec<WasteEntry>,
    pub pickup_requests: Vec<PickupRequest>,
    pub transportation: Vec<Transportation>,
    pub points_history: Vec<PointsEntry>,
    pub notifications: Vec<Notification>,
    pub activity: Vec<ActivityRecord>,
}

/// Everything written by a transportation completion.
#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    pub transportation: Transportation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_request: Option<PickupRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_entry: Option<WasteEntry>,
    pub points: PointsEntry,
}

impl FoodLedger {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    // ---- users ----

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn add_user(
        &mut self,
        input: NewUser,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<User, DomainError> {
        let id = required_text(input.id, "id")?;
        let organization = required_text(input.organization, "organization")?;
        let cafe_id = optional_text(input.cafe_id).map(CafeId);
        let id = UserId(id);
        if self.user(&id).is_some() {
            return Err(DomainError::DuplicateUser(id));
        }

        let user = User {
            id,
            role: input.role,
            organization,
            cafe_id,
            created_at: now,
        };
        self.record(actor, actions::USER_CREATED, user.id.as_str(), user.role.as_str(), now);
        self.users.push(user.clone());
        Ok(user)
    }

    // ---- waste entries ----

    pub fn waste_entry(&self, id: WasteEntryId) -> Option<&WasteEntry> {
        self.waste_entries.iter().find(|entry| entry.id == id)
    }

    fn waste_entry_mut(&mut self, id: WasteEntryId) -> Result<&mut WasteEntry, DomainError> {
        self.waste_entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| DomainError::not_found("waste entry", id))
    }

    /// The pending or approved request holding this entry, if any.
    pub fn open_request_for(&self, entry_id: WasteEntryId) -> Option<&PickupRequest> {
        self.pickup_requests
            .iter()
            .find(|request| request.waste_entry_id == entry_id && request.status.is_open())
    }

    pub fn log_waste(
        &mut self,
        input: NewWasteEntry,
        now: DateTime<Utc>,
    ) -> Result<WasteEntry, DomainError> {
        let item_name = required_text(input.item_name, "item_name")?;
        if input.cafe_id.as_str().trim().is_empty() {
            return Err(DomainError::MissingField("cafe_id"));
        }
        if !input.quantity_kg.is_finite() || input.quantity_kg <= 0.0 {
            return Err(DomainError::invalid("quantity_kg", "must be greater than 0"));
        }
        if let Some(expected) = input.category.required_target() {
            if expected != input.assigned_to {
                return Err(DomainError::AssignmentMismatch {
                    category: input.category,
                    expected,
                });
            }
        }

        let entry = WasteEntry {
            id: WasteEntryId::new(),
            cafe_id: input.cafe_id,
            category: input.category,
            item_name,
            quantity_kg: input.quantity_kg,
            expiry_date: input.expiry_date,
            status: WasteStatus::Pending,
            assigned_to: input.assigned_to,
            logged_by: input.logged_by,
            created_at: now,
            updated_at: now,
        };
        self.waste_entries.push(entry.clone());

        self.record(
            &entry.logged_by,
            actions::WASTE_LOGGED,
            &entry.id.to_string(),
            &format!("{} {} kg of {}", entry.category, entry.quantity_kg, entry.item_name),
            now,
        );

        let message = format!(
            "New {} waste available: {} ({} kg, expires {})",
            entry.category, entry.item_name, entry.quantity_kg, entry.expiry_date
        );
        let audience = entry.assigned_to.role();
        let recipients = self
            .users
            .iter()
            .filter(|user| user.role == audience)
            .map(|user| user.id.clone())
            .collect::<Vec<_>>();
        for user_id in recipients {
            self.notify(user_id, message.clone(), Some(entry.id), now);
        }

        Ok(entry)
    }

    pub fn mark_dropped(
        &mut self,
        id: WasteEntryId,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<WasteEntry, DomainError> {
        let entry = self
            .waste_entry(id)
            .ok_or_else(|| DomainError::not_found("waste entry", id))?;
        if entry.status != WasteStatus::Pending {
            return Err(DomainError::InvalidTransition {
                kind: "waste entry",
                id: id.to_string(),
                from: entry.status.as_str(),
                to: WasteStatus::Dropped.as_str(),
            });
        }
        if let Some(request) = self.open_request_for(id) {
            return Err(DomainError::OpenRequestExists {
                entry: id,
                request: request.id,
            });
        }

        let entry = self.waste_entry_mut(id)?;
        entry.status = WasteStatus::Dropped;
        entry.updated_at = now;
        let entry = entry.clone();
        self.record(actor, actions::WASTE_DROPPED, &id.to_string(), &entry.item_name, now);
        Ok(entry)
    }

    // ---- pickup requests ----

    pub fn pickup_request(&self, id: RequestId) -> Option<&PickupRequest> {
        self.pickup_requests.iter().find(|request| request.id == id)
    }

    fn pickup_request_mut(&mut self, id: RequestId) -> Result<&mut PickupRequest, DomainError> {
        self.pickup_requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| DomainError::not_found("pickup request", id))
    }

    pub fn create_request(
        &mut self,
        input: NewPickupRequest,
        now: DateTime<Utc>,
    ) -> Result<PickupRequest, DomainError> {
        let entry = self
            .waste_entry(input.waste_entry_id)
            .ok_or_else(|| DomainError::not_found("waste entry", input.waste_entry_id))?;
        if entry.status != WasteStatus::Pending {
            return Err(DomainError::EntryUnavailable(entry.id));
        }
        if entry.assigned_to != input.requester_type {
            return Err(DomainError::TargetMismatch {
                entry: entry.id,
                assigned: entry.assigned_to,
                requested: input.requester_type,
            });
        }
        if let Some(open) = self.open_request_for(entry.id) {
            return Err(DomainError::OpenRequestExists {
                entry: entry.id,
                request: open.id,
            });
        }

        let request = PickupRequest {
            id: RequestId::new(),
            waste_entry_id: input.waste_entry_id,
            requester_id: input.requester_id,
            requester_type: input.requester_type,
            organization: input.organization,
            requested_at: now,
            preferred_time: optional_text(input.preferred_time),
            notes: optional_text(input.notes),
            status: RequestStatus::Pending,
            decided_by: None,
            decided_at: None,
        };
        self.pickup_requests.push(request.clone());
        self.record(
            &request.requester_id,
            actions::REQUEST_CREATED,
            &request.id.to_string(),
            &format!("waste entry {}", request.waste_entry_id),
            now,
        );
        Ok(request)
    }

    /// Approval leaves the waste entry pending until it is physically collected.
    pub fn approve_request(
        &mut self,
        id: RequestId,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<PickupRequest, DomainError> {
        let request = self
            .pickup_request(id)
            .ok_or_else(|| DomainError::not_found("pickup request", id))?;
        let entry_id = request.waste_entry_id;
        let other_open = self
            .pickup_requests
            .iter()
            .find(|other| other.id != id && other.waste_entry_id == entry_id && other.status.is_open());
        if let Some(other) = other_open {
            return Err(DomainError::OpenRequestExists {
                entry: entry_id,
                request: other.id,
            });
        }
        let entry_status = self.waste_entry(entry_id).map(|entry| entry.status);
        if entry_status != Some(WasteStatus::Pending) {
            return Err(DomainError::EntryUnavailable(entry_id));
        }
        self.decide_request(id, RequestStatus::Approved, actor, now)
    }

    /// Rejection reopens the waste entry in the marketplace.
    pub fn reject_request(
        &mut self,
        id: RequestId,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<PickupRequest, DomainError> {
        self.decide_request(id, RequestStatus::Rejected, actor, now)
    }

    fn decide_request(
        &mut self,
        id: RequestId,
        next: RequestStatus,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<PickupRequest, DomainError> {
        let request = self.pickup_request_mut(id)?;
        if request.status != RequestStatus::Pending || !request.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                kind: "pickup request",
                id: id.to_string(),
                from: request.status.as_str(),
                to: next.as_str(),
            });
        }
        request.status = next;
        request.decided_by = Some(actor.clone());
        request.decided_at = Some(now);
        let request = request.clone();

        let (action, verb) = match next {
            RequestStatus::Approved => (actions::REQUEST_APPROVED, "approved"),
            _ => (actions::REQUEST_REJECTED, "rejected"),
        };
        self.record(actor, action, &id.to_string(), &request.organization, now);

        let item = self
            .waste_entry(request.waste_entry_id)
            .map(|entry| entry.item_name.clone())
            .unwrap_or_else(|| "waste entry".to_string());
        self.notify(
            request.requester_id.clone(),
            format!("Your pickup request for {} was {}", item, verb),
            Some(request.waste_entry_id),
            now,
        );
        Ok(request)
    }

    // ---- transportation ----

    pub fn transportation(&self, id: TransportId) -> Option<&Transportation> {
        self.transportation.iter().find(|record| record.id == id)
    }

    fn transportation_mut(&mut self, id: TransportId) -> Result<&mut Transportation, DomainError> {
        self.transportation
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| DomainError::not_found("transportation", id))
    }

    pub fn schedule_transport(
        &mut self,
        input: NewTransportation,
        now: DateTime<Utc>,
    ) -> Result<Transportation, DomainError> {
        let time_window = required_text(input.time_window, "time_window")?;
        let carrier = required_text(input.carrier, "carrier")?;

        let (source, destination, category, quantity_kg) = match input.source {
            NewTransportSource::Request(request_id) => {
                let request = self
                    .pickup_request(request_id)
                    .ok_or_else(|| DomainError::not_found("pickup request", request_id))?;
                if request.status != RequestStatus::Approved {
                    return Err(DomainError::InvalidTransition {
                        kind: "pickup request",
                        id: request_id.to_string(),
                        from: request.status.as_str(),
                        to: "scheduled",
                    });
                }
                if let Some(active) = self.transportation.iter().find(|record| {
                    record.source.request_id() == Some(request_id)
                        && record.status != TransportStatus::Cancelled
                }) {
                    return Err(DomainError::TransportExists {
                        request: request_id,
                        transport: active.id,
                    });
                }
                let entry = self
                    .waste_entry(request.waste_entry_id)
                    .ok_or_else(|| DomainError::not_found("waste entry", request.waste_entry_id))?;
                (
                    TransportSource::Request {
                        request_id,
                        waste_entry_id: entry.id,
                    },
                    request.organization.clone(),
                    entry.category,
                    entry.quantity_kg,
                )
            }
            NewTransportSource::Manual(manual) => {
                let destination = required_text(manual.destination, "destination")?;
                if !manual.quantity_kg.is_finite() || manual.quantity_kg <= 0.0 {
                    return Err(DomainError::invalid("quantity_kg", "must be greater than 0"));
                }
                (TransportSource::Manual, destination, manual.category, manual.quantity_kg)
            }
        };

        let record = Transportation {
            id: TransportId::new(),
            source,
            destination,
            category,
            quantity_kg,
            scheduled_date: input.scheduled_date,
            time_window,
            carrier,
            status: TransportStatus::Scheduled,
            scheduled_by: input.scheduled_by,
            created_at: now,
            updated_at: now,
            completed_at: None,
        };
        self.transportation.push(record.clone());
        self.record(
            &record.scheduled_by,
            actions::TRANSPORT_SCHEDULED,
            &record.id.to_string(),
            &format!("{} on {} {}", record.destination, record.scheduled_date, record.time_window),
            now,
        );
        Ok(record)
    }

    pub fn update_transport(
        &mut self,
        id: TransportId,
        patch: TransportPatch,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Transportation, DomainError> {
        let time_window = match patch.time_window {
            Some(value) => Some(required_text(value, "time_window")?),
            None => None,
        };
        let carrier = match patch.carrier {
            Some(value) => Some(required_text(value, "carrier")?),
            None => None,
        };

        let record = self
            .transportation(id)
            .ok_or_else(|| DomainError::not_found("transportation", id))?;
        if record.status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                kind: "transportation",
                id: id.to_string(),
                from: record.status.as_str(),
                to: patch.status.unwrap_or(record.status).as_str(),
            });
        }
        if let Some(next) = patch.status {
            if next == TransportStatus::Completed {
                return Err(DomainError::invalid(
                    "status",
                    "use the complete action to finish a transportation",
                ));
            }
            if next != record.status && !record.status.can_transition_to(next) {
                return Err(DomainError::InvalidTransition {
                    kind: "transportation",
                    id: id.to_string(),
                    from: record.status.as_str(),
                    to: next.as_str(),
                });
            }
        }

        let record = self.transportation_mut(id)?;
        if let Some(date) = patch.scheduled_date {
            record.scheduled_date = date;
        }
        if let Some(window) = time_window {
            record.time_window = window;
        }
        if let Some(carrier) = carrier {
            record.carrier = carrier;
        }
        if let Some(next) = patch.status {
            record.status = next;
        }
        record.updated_at = now;
        let record = record.clone();
        self.record(
            actor,
            actions::TRANSPORT_UPDATED,
            &id.to_string(),
            record.status.as_str(),
            now,
        );
        Ok(record)
    }

    /// Completes a transportation record together with its request, its
    /// waste entry and the points award.
    pub fn complete_transport(
        &mut self,
        id: TransportId,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Completion, DomainError> {
        let record = self
            .transportation(id)
            .ok_or_else(|| DomainError::not_found("transportation", id))?;
        if !record.status.can_transition_to(TransportStatus::Completed) {
            return Err(DomainError::InvalidTransition {
                kind: "transportation",
                id: id.to_string(),
                from: record.status.as_str(),
                to: TransportStatus::Completed.as_str(),
            });
        }

        let linked = match &record.source {
            TransportSource::Request {
                request_id,
                waste_entry_id,
            } => {
                let request = self
                    .pickup_request(*request_id)
                    .ok_or_else(|| DomainError::not_found("pickup request", request_id))?;
                if !request.status.can_transition_to(RequestStatus::Completed) {
                    return Err(DomainError::InvalidTransition {
                        kind: "pickup request",
                        id: request_id.to_string(),
                        from: request.status.as_str(),
                        to: RequestStatus::Completed.as_str(),
                    });
                }
                let entry = self
                    .waste_entry(*waste_entry_id)
                    .ok_or_else(|| DomainError::not_found("waste entry", waste_entry_id))?;
                if entry.status != WasteStatus::Pending {
                    return Err(DomainError::InvalidTransition {
                        kind: "waste entry",
                        id: waste_entry_id.to_string(),
                        from: entry.status.as_str(),
                        to: WasteStatus::Collected.as_str(),
                    });
                }
                Some((*request_id, *waste_entry_id, request.requester_id.clone()))
            }
            TransportSource::Manual => None,
        };

        // All preconditions hold; apply the writes.
        let record = self.transportation_mut(id)?;
        record.status = TransportStatus::Completed;
        record.updated_at = now;
        record.completed_at = Some(now);
        let record = record.clone();

        let (pickup_request, waste_entry, awarded_user) = match linked {
            Some((request_id, entry_id, requester_id)) => {
                let request = self.pickup_request_mut(request_id)?;
                request.status = RequestStatus::Completed;
                let request = request.clone();
                let entry = self.waste_entry_mut(entry_id)?;
                entry.status = WasteStatus::Collected;
                entry.updated_at = now;
                let entry = entry.clone();
                (Some(request), Some(entry), Some(requester_id))
            }
            None => (None, None, None),
        };

        let points = PointsEntry {
            id: PointsEntryId::new(),
            user_id: awarded_user.clone(),
            organization: record.destination.clone(),
            points: record.quantity_kg * POINTS_PER_KG,
            reason: format!("Collected {} kg of {}", record.quantity_kg, record.category),
            transportation_id: Some(record.id),
            awarded_at: now,
        };
        self.points_history.push(points.clone());

        self.record(
            actor,
            actions::TRANSPORT_COMPLETED,
            &id.to_string(),
            &format!("{} points to {}", points.points, points.organization),
            now,
        );
        if let Some(user_id) = awarded_user {
            self.notify(
                user_id,
                format!("Pickup completed: you earned {} points", points.points),
                waste_entry.as_ref().map(|entry| entry.id),
                now,
            );
        }

        Ok(Completion {
            transportation: record,
            pickup_request,
            waste_entry,
            points,
        })
    }

    /// Removes the record only; linked request, entry and points keep their state.
    pub fn delete_transport(
        &mut self,
        id: TransportId,
        actor: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Transportation, DomainError> {
        let position = self
            .transportation
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| DomainError::not_found("transportation", id))?;
        let record = self.transportation.remove(position);
        self.record(
            actor,
            actions::TRANSPORT_DELETED,
            &id.to_string(),
            record.status.as_str(),
            now,
        );
        Ok(record)
    }

    // ---- notifications ----

    pub fn mark_notification_read(
        &mut self,
        id: NotificationId,
        user_id: &UserId,
    ) -> Result<Notification, DomainError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|item| item.id == id && &item.user_id == user_id)
            .ok_or_else(|| DomainError::not_found("notification", id))?;
        notification.read = true;
        Ok(notification.clone())
    }

    pub fn mark_all_notifications_read(&mut self, user_id: &UserId) -> usize {
        let mut changed = 0;
        for item in self
            .notifications
            .iter_mut()
            .filter(|item| &item.user_id == user_id && !item.read)
        {
            item.read = true;
            changed += 1;
        }
        changed
    }

    fn notify(
        &mut self,
        user_id: UserId,
        message: String,
        waste_entry_id: Option<WasteEntryId>,
        now: DateTime<Utc>,
    ) {
        self.notifications.push(Notification {
            id: NotificationId::new(),
            user_id,
            message,
            read: false,
            created_at: now,
            waste_entry_id,
        });
    }

    fn record(&mut self, actor: &UserId, action: &str, subject_id: &str, detail: &str, now: DateTime<Utc>) {
        self.activity.push(ActivityRecord {
            id: ActivityId::new(),
            actor_id: actor.clone(),
            action: action.to_string(),
            subject_id: subject_id.to_string(),
            detail: detail.to_string(),
            at: now,
        });
    }
}

fn required_text(value: String, field: &'static str) -> Result<String, DomainError> {
    optional_text(Some(value)).ok_or(DomainError::MissingField(field))
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
