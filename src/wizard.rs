//! The selection session: one mutation entry point that atomically updates
//! state, availability and result, then notifies observers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::availability::{availability, downstream_of};
use crate::catalog::is_disabled_option;
use crate::enums::*;
use crate::error::*;
use crate::resolve::resolve;
use crate::table::{Edition, LookupTable};
use crate::types::*;

// ─── Observers ──────────────────────────────────────────────────────────────

/// Receives one [`StateChange`] per successful mutation or reset.
///
/// Implemented for any `FnMut(&StateChange) + Send` closure.
pub trait StateObserver: Send {
    fn on_change(&mut self, change: &StateChange);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateChange) + Send,
{
    fn on_change(&mut self, change: &StateChange) {
        self(change)
    }
}

/// Handle returned by [`Wizard::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct ObserverList {
    entries: Vec<(SubscriptionId, Box<dyn StateObserver>)>,
    next_id: u64,
}

impl ObserverList {
    fn add(&mut self, observer: Box<dyn StateObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    fn notify(&mut self, change: &StateChange) {
        for (_, observer) in self.entries.iter_mut() {
            observer.on_change(change);
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.entries.len())
            .finish()
    }
}

// ─── Options ────────────────────────────────────────────────────────────────

/// Construction options for a [`Wizard`].
#[derive(Clone, Debug, Default)]
pub struct WizardOptions {
    /// Built-in table to use when `table` is not given. [`Edition::Custom`]
    /// has no compiled-in rows, so without a table it falls back to
    /// [`Edition::Current`].
    pub edition: Edition,
    /// An explicit table, e.g. one produced by [`load`](crate::load).
    pub table: Option<LookupTable>,
}

/// Builder for [`Wizard`].
#[derive(Debug, Default)]
#[must_use]
pub struct WizardBuilder {
    options: WizardOptions,
}

impl WizardBuilder {
    pub fn edition(mut self, edition: Edition) -> Self {
        self.options.edition = edition;
        self
    }

    pub fn table(mut self, table: LookupTable) -> Self {
        self.options.table = Some(table);
        self
    }

    pub fn build(self) -> Wizard {
        Wizard::with_options(self.options)
    }
}

// ─── Wizard ─────────────────────────────────────────────────────────────────

/// A single selection session.
pub struct Wizard {
    table: LookupTable,
    state: SelectionState,
    availability: Availability,
    result: Resolution,
    observers: ObserverList,
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("edition", &self.table.edition())
            .field("state", &self.state)
            .field("result", &self.result)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// A fresh session over the current built-in table.
    pub fn new() -> Wizard {
        Self::with_table(LookupTable::current())
    }

    pub fn builder() -> WizardBuilder {
        WizardBuilder::default()
    }

    pub fn with_options(options: WizardOptions) -> Wizard {
        let table = match (options.table, options.edition) {
            (Some(table), _) => table,
            (None, Edition::Custom) => {
                tracing::warn!("custom edition requested without a table, using current");
                LookupTable::current()
            }
            (None, edition) => LookupTable::builtin(edition),
        };
        Self::with_table(table)
    }

    pub fn with_table(table: LookupTable) -> Wizard {
        let state = SelectionState::default();
        Wizard {
            availability: availability(&state),
            result: resolve(&state, &table),
            table,
            state,
            observers: ObserverList::default(),
        }
    }

    /// Parse, validate and adopt a YAML table document.
    ///
    /// # Errors
    ///
    /// Returns every parse or validation error; warnings are discarded.
    pub fn from_yaml(input: &str) -> Result<Wizard, Vec<LoadError>> {
        crate::load(input).map(|loaded| Self::with_table(loaded.table))
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn result(&self) -> &Resolution {
        &self.result
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            availability: self.availability,
            result: self.result.clone(),
        }
    }

    /// Submit a wire value for `field`, as a presentation layer would.
    ///
    /// # Errors
    ///
    /// [`WizardError::InvalidValue`] when the value is outside the field's
    /// domain, names a disabled option, or the field is unavailable. The
    /// session is unchanged in that case and no notification is sent.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<Snapshot, WizardError> {
        let change = self.apply_field(field, value)?;
        Ok(self.publish(change))
    }

    /// Apply a typed assignment.
    ///
    /// Assigns the value, clears every downstream field, fixes Path B's
    /// function, then recomputes availability and result. Re-submitting the
    /// value a field already holds leaves downstream answers in place.
    ///
    /// # Errors
    ///
    /// [`WizardError::InvalidValue`] with [`RejectReason::Unavailable`] when
    /// the field is not answerable in the current state.
    pub fn set(&mut self, value: FieldValue) -> Result<Snapshot, WizardError> {
        let change = self.apply(value)?;
        Ok(self.publish(change))
    }

    /// Return to the empty selection. Never fails.
    pub fn reset(&mut self) -> Snapshot {
        let change = self.apply_reset();
        self.publish(change)
    }

    /// Register an observer. It sees every later change, not earlier ones.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) -> SubscriptionId {
        self.observers.add(Box::new(observer))
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    fn publish(&mut self, change: StateChange) -> Snapshot {
        self.observers.notify(&change);
        change.current
    }

    fn apply_field(&mut self, field: Field, value: &str) -> Result<StateChange, WizardError> {
        let parsed = match FieldValue::parse(field, value) {
            Some(parsed) => parsed,
            None => {
                let reason = if is_disabled_option(field, value) {
                    RejectReason::Disabled
                } else {
                    RejectReason::OutOfDomain
                };
                return Err(self.reject(field, value, reason));
            }
        };
        self.apply(parsed)
    }

    fn apply(&mut self, value: FieldValue) -> Result<StateChange, WizardError> {
        let field = value.field();
        if !self.availability.is_available(field) {
            return Err(self.reject(field, value.as_str(), RejectReason::Unavailable));
        }

        let previous = self.snapshot();
        let unchanged = self.state.get(field) == Some(value);

        let mut next = self.state.clone();
        next.assign(value);
        let mut cleared = Vec::new();
        if !unchanged {
            for downstream in downstream_of(field) {
                if next.is_set(downstream) {
                    cleared.push(downstream);
                }
                next.clear(downstream);
            }
            if let (Field::Device, Some(fixed)) =
                (field, next.path().and_then(Path::fixed_function))
            {
                next.function = Some(fixed);
            }
        }

        tracing::debug!(
            %field,
            value = value.as_str(),
            ?cleared,
            unchanged,
            "field set"
        );

        Ok(self.commit(next, Cause::Set { value }, previous))
    }

    fn apply_reset(&mut self) -> StateChange {
        let previous = self.snapshot();
        tracing::debug!(had_result = previous.result.is_resolved(), "reset");
        self.commit(SelectionState::default(), Cause::Reset, previous)
    }

    /// Store `next` with its derived availability and result. Observers are
    /// not called here.
    fn commit(&mut self, next: SelectionState, cause: Cause, previous: Snapshot) -> StateChange {
        self.availability = availability(&next);
        self.result = resolve(&next, &self.table);
        self.state = next;
        StateChange {
            cause,
            previous,
            current: self.snapshot(),
        }
    }

    fn reject(&self, field: Field, value: &str, reason: RejectReason) -> WizardError {
        tracing::debug!(%field, value, %reason, "assignment rejected");
        WizardError::InvalidValue {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

// ─── Shared handle ──────────────────────────────────────────────────────────

/// A cloneable, thread-safe handle around one [`Wizard`].
///
/// Each mutation takes the session lock for its whole read, mutate and
/// resolve sequence, so callers never observe a partial update. Observers
/// run after that lock is released and may read the session through a
/// clone of the handle. They must not subscribe, unsubscribe or mutate
/// through the handle from inside the callback. Notifications for
/// mutations racing on different threads may arrive in either order; each
/// event carries its own `previous` and `current` snapshots.
#[derive(Clone, Debug, Default)]
pub struct SharedWizard {
    session: Arc<Mutex<Wizard>>,
    observers: Arc<Mutex<ObserverList>>,
}

impl SharedWizard {
    /// Wrap `wizard`. Observers already registered on it move to the handle.
    pub fn new(mut wizard: Wizard) -> SharedWizard {
        let observers = std::mem::take(&mut wizard.observers);
        SharedWizard {
            session: Arc::new(Mutex::new(wizard)),
            observers: Arc::new(Mutex::new(observers)),
        }
    }

    fn session(&self) -> MutexGuard<'_, Wizard> {
        // state is committed before any observer runs
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn observers(&self) -> MutexGuard<'_, ObserverList> {
        self.observers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn publish(&self, change: StateChange) -> Snapshot {
        self.observers().notify(&change);
        change.current
    }

    pub fn set_field(&self, field: Field, value: &str) -> Result<Snapshot, WizardError> {
        let change = self.session().apply_field(field, value)?;
        Ok(self.publish(change))
    }

    pub fn set(&self, value: FieldValue) -> Result<Snapshot, WizardError> {
        let change = self.session().apply(value)?;
        Ok(self.publish(change))
    }

    pub fn reset(&self) -> Snapshot {
        let change = self.session().apply_reset();
        self.publish(change)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session().snapshot()
    }

    pub fn subscribe(&self, observer: impl StateObserver + 'static) -> SubscriptionId {
        self.observers().add(Box::new(observer))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers().remove(id)
    }
}
