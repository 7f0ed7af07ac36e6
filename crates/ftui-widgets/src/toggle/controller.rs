#![forbid(unsafe_code)]

//! Value / selection reconciliation for toggle widgets.
//!
//! [`ToggleController`] owns a toggle's `value`, its tri-state selection,
//! and its `title` and `icon`. Three reactions keep them consistent:
//!
//! - **value changed**: the selection is recomputed from the value.
//! - **selection changed**: unless the new state is `Mixed`, a value that
//!   no longer produces the state is rewritten to the reference's on or off
//!   value.
//! - **content changed**: slots with a resolved content key are pulled from
//!   the content object.
//!
//! Each reaction runs inline in the write that triggered it. Slots are
//! [`Observable`]s, whose writes report whether anything changed; a write
//! that changes nothing runs no reaction. Because the reference values
//! round-trip (see [`ToggleReference::validate`]), a user-driven selection
//! change converges after one rewrite of the value.
//!
//! # Failure Modes
//!
//! - **Content changes during a write**: observers registered with the
//!   `subscribe_*` methods run while a shared controller is mutably
//!   borrowed. If one of them writes a bound content object, the binding
//!   cannot reach the controller; it queues the changed key instead, and
//!   the queue is replayed before the outermost public write returns.
//!   Replaying an unchanged property is a no-op, so mirrors settle.
//! - **Direct re-entry**: an observer that borrows a shared controller
//!   itself still panics (`RefCell`).

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use ftui_runtime::reactive::{Memo, Observable, PropertyBag, PropertyKey, Subscription};
use tracing::{debug, debug_span, trace, warn};

use super::config::ToggleConfig;
use super::content::{ContentKeyDelegate, ContentKeys, ContentSlot, resolve_content_key};
use super::state::{SelectionState, ToggleReference};
use super::title::{IconKind, Localizer, display_title};
use super::value::ToggleValue;
use crate::error::ToggleError;

/// Content object a toggle can mirror.
pub type ToggleContent = PropertyBag<ToggleValue>;

/// Reconciles a toggle's value with its selection state.
pub struct ToggleController {
    reference: ToggleReference,
    value: Observable<ToggleValue>,
    selection: Observable<SelectionState>,
    title: Observable<Option<String>>,
    icon: Observable<Option<String>>,
    localize: Observable<bool>,
    localizer: Option<Rc<dyn Localizer>>,
    localizer_revision: u64,
    display_title: Memo<String>,
    display_revision: u64,
    content: Option<ToggleContent>,
    content_keys: ContentKeys,
    delegate: Option<Rc<dyn ContentKeyDelegate>>,
    /// Content keys that changed while the controller was busy.
    pending_content: Rc<RefCell<Vec<PropertyKey>>>,
}

impl fmt::Debug for ToggleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleController")
            .field("reference", &self.reference)
            .field("value", &self.value.get())
            .field("selection", &self.selection.get())
            .field("title", &self.title.get())
            .field("icon", &self.icon.get())
            .field("content_keys", &self.content_keys)
            .field("has_content", &self.content.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new(ToggleReference::default())
    }
}

impl ToggleController {
    /// Controller with a null value and an `Off` selection.
    #[must_use]
    pub fn new(reference: ToggleReference) -> Self {
        if let Err(err) = reference.validate() {
            warn!(%err, "toggle reference does not round-trip");
        }
        Self {
            reference,
            value: Observable::new(ToggleValue::NULL),
            selection: Observable::new(SelectionState::Off),
            title: Observable::new(None),
            icon: Observable::new(None),
            localize: Observable::new(false),
            localizer: None,
            localizer_revision: 0,
            display_title: Memo::new(),
            display_revision: 0,
            content: None,
            content_keys: ContentKeys::default(),
            delegate: None,
            pending_content: Rc::default(),
        }
    }

    /// Controller built from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the reference validation error when the configured on/off
    /// values do not round-trip.
    pub fn from_config(config: &ToggleConfig) -> Result<Self, ToggleError> {
        let reference = config.reference();
        reference.validate()?;
        let mut controller = Self::new(reference);
        controller.content_keys = config.content_keys();
        controller.title.set(config.title.clone());
        controller.icon.set(config.icon.clone());
        controller.localize.set(config.localize);
        controller.value.set(config.value.clone());
        controller.prepare();
        Ok(controller)
    }

    /// Builder: start from `value` and derive the selection from it.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<ToggleValue>) -> Self {
        self.value.set(value.into());
        self.prepare();
        self
    }

    /// Derive the selection from the current value.
    ///
    /// A null value leaves the selection alone so a widget can be driven
    /// through its selection only.
    pub fn prepare(&mut self) {
        if self.value.with(ToggleValue::is_null) {
            return;
        }
        self.value_did_change();
    }

    #[must_use]
    pub const fn reference(&self) -> &ToggleReference {
        &self.reference
    }

    // ------------------------------------------------------------------
    // Value and selection
    // ------------------------------------------------------------------

    #[must_use]
    pub fn value(&self) -> ToggleValue {
        self.value.get()
    }

    /// Write the value and reconcile the selection. Returns whether the
    /// value changed.
    pub fn set_value(&mut self, value: impl Into<ToggleValue>) -> bool {
        let changed = self.write_value(value.into());
        self.replay_pending_content();
        changed
    }

    fn write_value(&mut self, value: ToggleValue) -> bool {
        trace!(?value, "toggle value write");
        if !self.value.set(value) {
            return false;
        }
        self.value_did_change();
        true
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.get()
    }

    /// Whether the selection is fully `On`.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selection.get() == SelectionState::On
    }

    /// Write the selection (user interaction) and reconcile the value.
    /// Returns whether the selection changed.
    ///
    /// Writing `Mixed` is accepted but never rewrites the value.
    pub fn set_selection_state(&mut self, state: SelectionState) -> bool {
        trace!(?state, "toggle selection write");
        let changed = self.selection.set(state);
        if changed {
            self.selection_did_change();
        }
        self.replay_pending_content();
        changed
    }

    /// Flip the selection the way a click does. `Mixed` becomes `On`.
    pub fn toggle(&mut self) -> SelectionState {
        let next = self.selection.get().toggled();
        self.set_selection_state(next);
        self.selection.get()
    }

    /// Version of the selection slot; unchanged by no-op writes.
    #[must_use]
    pub fn selection_version(&self) -> u64 {
        self.selection.version()
    }

    /// Version of the value slot.
    #[must_use]
    pub fn value_version(&self) -> u64 {
        self.value.version()
    }

    /// Observe value changes.
    pub fn subscribe_value(&self, callback: impl Fn(&ToggleValue) + 'static) -> Subscription {
        self.value.subscribe(callback)
    }

    /// Observe selection changes.
    pub fn subscribe_selection(
        &self,
        callback: impl Fn(&SelectionState) + 'static,
    ) -> Subscription {
        self.selection.subscribe(callback)
    }

    fn value_did_change(&mut self) {
        let state = self.value.with(|v| self.reference.state_of(v));
        let _span = debug_span!("toggle.value_did_change", ?state).entered();
        if self.selection.set(state) {
            self.selection_did_change();
        }
    }

    fn selection_did_change(&mut self) {
        let new_state = self.selection.get();
        if new_state.is_mixed() {
            // Mixed only ever comes from the value.
            return;
        }
        let current = self.value.with(|v| self.reference.state_of(v));
        if current == new_state {
            return;
        }
        let _span = debug_span!("toggle.selection_did_change", ?new_state, ?current).entered();
        if let Some(rewrite) = self.reference.value_for(new_state) {
            debug!(value = ?rewrite, "rewriting toggle value from selection");
            self.write_value(rewrite);
        }
    }

    // ------------------------------------------------------------------
    // Title and icon
    // ------------------------------------------------------------------

    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.title.get()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        if self.title.set(title) {
            self.display_did_change();
        }
    }

    #[must_use]
    pub fn icon(&self) -> Option<String> {
        self.icon.get()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        if self.icon.set(icon) {
            self.display_did_change();
        }
    }

    /// Whether the icon is a URL or a sprite class; `None` without an icon.
    #[must_use]
    pub fn icon_kind(&self) -> Option<IconKind> {
        self.icon.with(|icon| icon.as_deref().and_then(IconKind::classify))
    }

    #[must_use]
    pub fn localize(&self) -> bool {
        self.localize.get()
    }

    pub fn set_localize(&mut self, localize: bool) {
        self.localize.set(localize);
    }

    /// Install the localizer used when `localize` is on.
    pub fn set_localizer(&mut self, localizer: Option<Rc<dyn Localizer>>) {
        self.localizer = localizer;
        self.localizer_revision += 1;
    }

    /// The title as displayed: localized when `localize` is on, `""` when
    /// absent. Cached until the title, the flag or the localizer change.
    #[must_use]
    pub fn display_title(&self) -> String {
        let deps = [
            self.title.version(),
            self.localize.version(),
            self.localizer_revision,
        ];
        self.display_title.get(&deps, || {
            let title = self.title.get();
            display_title(
                title.as_deref(),
                self.localize.get(),
                self.localizer.as_deref(),
            )
        })
    }

    /// Bumped whenever the title or icon changes; a render layer compares
    /// it against the revision it last drew.
    #[must_use]
    pub const fn display_revision(&self) -> u64 {
        self.display_revision
    }

    fn display_did_change(&mut self) {
        self.display_revision += 1;
        trace!(revision = self.display_revision, "toggle display did change");
    }

    // ------------------------------------------------------------------
    // Content delegation
    // ------------------------------------------------------------------

    #[must_use]
    pub fn content(&self) -> Option<&ToggleContent> {
        self.content.as_ref()
    }

    /// Replace the content object and pull every keyed slot from it.
    ///
    /// Clearing the content pulls null into every keyed slot.
    pub fn set_content(&mut self, content: Option<ToggleContent>) {
        let same = match (&self.content, &content) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }
        self.content = content;
        self.content_property_did_change(&PropertyKey::Any);
    }

    #[must_use]
    pub const fn content_keys(&self) -> &ContentKeys {
        &self.content_keys
    }

    /// Configure the content key for one slot. With content present the
    /// slot is pulled through the new key right away.
    pub fn set_content_key(&mut self, slot: ContentSlot, key: Option<String>) {
        if self.content_keys.get(slot) == key.as_deref() {
            return;
        }
        self.content_keys.set(slot, key);
        if self.content.is_some() {
            self.sync_slot(slot, &PropertyKey::Any);
        }
        self.replay_pending_content();
    }

    /// Install a display delegate that may override content keys.
    pub fn set_display_delegate(&mut self, delegate: Option<Rc<dyn ContentKeyDelegate>>) {
        self.delegate = delegate;
        if self.content.is_some() {
            self.content_property_did_change(&PropertyKey::Any);
        }
    }

    /// Resolved content key for `slot`.
    #[must_use]
    pub fn resolved_content_key(&self, slot: ContentSlot) -> Option<String> {
        resolve_content_key(self.delegate.as_deref(), &self.content_keys, slot)
    }

    /// Pull the slots affected by `changed` from the content object.
    ///
    /// Slots whose resolved key is not `changed` are left untouched; a
    /// wildcard reaches every keyed slot.
    pub fn content_property_did_change(&mut self, changed: &PropertyKey) {
        self.pull_from_content(changed);
        self.replay_pending_content();
    }

    fn pull_from_content(&mut self, changed: &PropertyKey) {
        let _span = debug_span!("toggle.content_did_change", key = %changed).entered();
        for slot in ContentSlot::ALL {
            self.sync_slot(slot, changed);
        }
    }

    /// Apply content changes queued while the controller was borrowed.
    fn replay_pending_content(&mut self) {
        loop {
            let pending = std::mem::take(&mut *self.pending_content.borrow_mut());
            if pending.is_empty() {
                return;
            }
            debug!(count = pending.len(), "replaying deferred content changes");
            for key in &pending {
                self.pull_from_content(key);
            }
        }
    }

    fn sync_slot(&mut self, slot: ContentSlot, changed: &PropertyKey) {
        let Some(key) = self.resolved_content_key(slot) else {
            return;
        };
        if !changed.affects(&key) {
            return;
        }
        let pulled = match &self.content {
            Some(content) => content.get(&key).unwrap_or_else(|| {
                warn!(%slot, %key, "content has no such property");
                ToggleValue::NULL
            }),
            None => ToggleValue::NULL,
        };
        trace!(%slot, %key, value = ?pulled, "pulling slot from content");
        match slot {
            ContentSlot::Value => {
                self.write_value(pulled);
            }
            ContentSlot::Title => self.set_title(pulled.as_text()),
            ContentSlot::Icon => self.set_icon(pulled.as_text()),
        }
    }

    /// Install `content` on a shared controller and keep it in sync.
    ///
    /// The returned binding owns the subscription; dropping it stops the
    /// sync but leaves the content installed.
    ///
    /// A change that arrives while the controller is borrowed is queued and
    /// applied when the controller's current write finishes.
    pub fn bind_content(this: &Rc<RefCell<Self>>, content: ToggleContent) -> ContentBinding {
        let pending = {
            let mut controller = this.borrow_mut();
            controller.set_content(Some(content.clone()));
            Rc::clone(&controller.pending_content)
        };
        let weak: Weak<RefCell<Self>> = Rc::downgrade(this);
        let subscription = content.subscribe(move |key| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut guard) => guard.content_property_did_change(key),
                Err(_) => {
                    trace!(%key, "toggle busy, deferring content change");
                    let mut queue = pending.borrow_mut();
                    if !queue.contains(key) {
                        queue.push(key.clone());
                    }
                }
            };
        });
        ContentBinding {
            content,
            _subscription: subscription,
        }
    }
}

/// Live link from a content object to a shared [`ToggleController`].
#[derive(Debug)]
pub struct ContentBinding {
    content: ToggleContent,
    _subscription: Subscription,
}

impl ContentBinding {
    /// The bound content object.
    #[must_use]
    pub fn content(&self) -> &ToggleContent {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::toggle::title::TitleCatalog;
    use crate::toggle::value::Scalar;

    #[test]
    fn value_write_derives_selection() {
        let mut toggle = ToggleController::default();
        toggle.set_value(true);
        assert_eq!(toggle.selection_state(), SelectionState::On);
        toggle.set_value(0);
        assert_eq!(toggle.selection_state(), SelectionState::Off);
    }

    #[test]
    fn selection_write_rewrites_value() {
        let mut toggle = ToggleController::default().with_value(true);
        assert!(toggle.set_selection_state(SelectionState::Off));
        assert_eq!(toggle.value(), ToggleValue::from(false));
        assert_eq!(toggle.selection_state(), SelectionState::Off);
    }

    #[test]
    fn selection_matching_value_keeps_value() {
        // 1 already selects a true/false toggle; it must not become `true`.
        let mut toggle = ToggleController::default().with_value(1);
        let before = toggle.value_version();
        assert!(!toggle.set_selection_state(SelectionState::On));
        assert_eq!(toggle.value(), ToggleValue::from(1));
        assert_eq!(toggle.value_version(), before);
    }

    #[test]
    fn mixed_write_leaves_value() {
        let mut toggle = ToggleController::default().with_value(true);
        assert!(toggle.set_selection_state(SelectionState::Mixed));
        assert_eq!(toggle.value(), ToggleValue::from(true));
        assert_eq!(toggle.selection_state(), SelectionState::Mixed);
    }

    #[test]
    fn explicit_on_resolves_mixed_list() {
        let mut toggle =
            ToggleController::new(ToggleReference::new(1, 0)).with_value(ToggleValue::list([1, 0, 1]));
        assert_eq!(toggle.selection_state(), SelectionState::Mixed);

        toggle.set_selection_state(SelectionState::On);
        assert_eq!(toggle.value(), ToggleValue::from(1));
        assert_eq!(toggle.selection_state(), SelectionState::On);
    }

    #[test]
    fn idempotent_value_write_keeps_selection_version() {
        let mut toggle = ToggleController::default().with_value(true);
        let version = toggle.selection_version();
        toggle.set_value(1);
        toggle.set_value("1");
        assert_eq!(toggle.selection_state(), SelectionState::On);
        assert_eq!(toggle.selection_version(), version);
    }

    #[test]
    fn null_value_leaves_selection_driven_state() {
        let mut toggle = ToggleController::default();
        toggle.prepare();
        assert_eq!(toggle.selection_state(), SelectionState::Off);
        toggle.set_selection_state(SelectionState::On);
        assert_eq!(toggle.value(), ToggleValue::from(true));
    }

    #[test]
    fn degenerate_reference_still_terminates() {
        // Off loosely equals on: writing OFF selects again and settles ON.
        let mut toggle = ToggleController::new(ToggleReference::new(1, true)).with_value(1);
        toggle.set_selection_state(SelectionState::Off);
        assert_eq!(toggle.value(), ToggleValue::from(true));
        assert_eq!(toggle.selection_state(), SelectionState::On);
    }

    #[test]
    fn toggle_flips_and_resolves_mixed() {
        let mut toggle = ToggleController::default().with_value(ToggleValue::list([true, false]));
        assert_eq!(toggle.toggle(), SelectionState::On);
        assert_eq!(toggle.value(), ToggleValue::from(true));
        assert_eq!(toggle.toggle(), SelectionState::Off);
        assert_eq!(toggle.value(), ToggleValue::from(false));
    }

    #[test]
    fn subscribers_see_reconciled_writes() {
        let toggle_states = Rc::new(RefCell::new(Vec::new()));
        let mut toggle = ToggleController::default();
        let log = Rc::clone(&toggle_states);
        let _sub = toggle.subscribe_selection(move |s| log.borrow_mut().push(*s));

        toggle.set_value(ToggleValue::list([true, false]));
        toggle.set_selection_state(SelectionState::Off);
        assert_eq!(
            *toggle_states.borrow(),
            vec![SelectionState::Mixed, SelectionState::Off]
        );
    }

    #[test]
    fn content_amount_drives_value_only() {
        let content = ToggleContent::from_entries([
            ("amount", ToggleValue::from(3)),
            ("name", ToggleValue::from("Total")),
        ]);
        let mut toggle = ToggleController::new(ToggleReference::new(7, 0));
        toggle.set_content_key(ContentSlot::Value, Some("amount".into()));
        toggle.set_content(Some(content.clone()));
        assert_eq!(toggle.value(), ToggleValue::from(3));
        assert_eq!(toggle.title(), None);

        content.set("amount", ToggleValue::from(7));
        toggle.content_property_did_change(&PropertyKey::named("amount"));
        assert_eq!(toggle.value(), ToggleValue::from(7));
        assert_eq!(toggle.selection_state(), SelectionState::On);
        assert_eq!(toggle.title(), None);
        assert_eq!(toggle.icon(), None);
    }

    #[test]
    fn unrelated_key_touches_nothing() {
        let content = ToggleContent::from_entries([("name", ToggleValue::from("A"))]);
        let mut toggle = ToggleController::default();
        toggle.set_content_key(ContentSlot::Title, Some("name".into()));
        toggle.set_content(Some(content.clone()));
        assert_eq!(toggle.title().as_deref(), Some("A"));

        content.set("name", ToggleValue::from("B"));
        toggle.content_property_did_change(&PropertyKey::named("other"));
        assert_eq!(toggle.title().as_deref(), Some("A"));
    }

    #[test]
    fn clearing_content_nulls_keyed_slots() {
        let content = ToggleContent::from_entries([
            ("on", ToggleValue::from(true)),
            ("glyph", ToggleValue::from("sc-icon-star")),
        ]);
        let mut toggle = ToggleController::default();
        toggle.set_content_key(ContentSlot::Value, Some("on".into()));
        toggle.set_content_key(ContentSlot::Icon, Some("glyph".into()));
        toggle.set_content(Some(content));
        assert!(toggle.is_selected());
        assert_eq!(toggle.icon().as_deref(), Some("sc-icon-star"));

        toggle.set_content(None);
        assert!(toggle.value().is_null());
        assert_eq!(toggle.selection_state(), SelectionState::Off);
        assert_eq!(toggle.icon(), None);
    }

    #[test]
    fn delegate_overrides_content_key() {
        struct UseLabel;
        impl ContentKeyDelegate for UseLabel {
            fn content_key(&self, slot: ContentSlot) -> Option<String> {
                (slot == ContentSlot::Title).then(|| "label".to_owned())
            }
        }

        let content = ToggleContent::from_entries([
            ("name", ToggleValue::from("Name")),
            ("label", ToggleValue::from("Label")),
        ]);
        let mut toggle = ToggleController::default();
        toggle.set_content_key(ContentSlot::Title, Some("name".into()));
        toggle.set_content(Some(content));
        assert_eq!(toggle.title().as_deref(), Some("Name"));

        toggle.set_display_delegate(Some(Rc::new(UseLabel)));
        assert_eq!(toggle.title().as_deref(), Some("Label"));
    }

    #[test]
    fn bound_content_syncs_until_dropped() {
        let content = ToggleContent::from_entries([("done", ToggleValue::from(false))]);
        let toggle = Rc::new(RefCell::new(ToggleController::default()));
        toggle
            .borrow_mut()
            .set_content_key(ContentSlot::Value, Some("done".into()));

        let binding = ToggleController::bind_content(&toggle, content.clone());
        assert!(binding.content().ptr_eq(&content));
        assert_eq!(toggle.borrow().selection_state(), SelectionState::Off);

        content.set("done", ToggleValue::from(true));
        assert!(toggle.borrow().is_selected());

        drop(binding);
        content.set("done", ToggleValue::from(false));
        assert!(toggle.borrow().is_selected());
    }

    #[test]
    fn value_mirrored_into_bound_content_settles() {
        let content = ToggleContent::from_entries([("done", ToggleValue::from(false))]);
        let toggle = Rc::new(RefCell::new(ToggleController::default()));
        toggle
            .borrow_mut()
            .set_content_key(ContentSlot::Value, Some("done".into()));
        let _binding = ToggleController::bind_content(&toggle, content.clone());

        let mirror = content.clone();
        let _sub = toggle
            .borrow()
            .subscribe_value(move |v| {
                mirror.set("done", v.clone());
            });

        assert!(toggle.borrow_mut().set_selection_state(SelectionState::On));
        assert_eq!(content.get("done"), Some(ToggleValue::from(true)));
        let t = toggle.borrow();
        assert_eq!(t.value(), ToggleValue::from(true));
        assert_eq!(t.selection_state(), SelectionState::On);
        assert!(t.pending_content.borrow().is_empty());
    }

    #[test]
    fn deferred_content_change_is_replayed() {
        // The observer writes a different property than the one mirrored,
        // so the replay has real work to do.
        let content = ToggleContent::from_entries([
            ("done", ToggleValue::from(false)),
            ("label", ToggleValue::from("Todo")),
        ]);
        let toggle = Rc::new(RefCell::new(ToggleController::default()));
        {
            let mut t = toggle.borrow_mut();
            t.set_content_key(ContentSlot::Value, Some("done".into()));
            t.set_content_key(ContentSlot::Title, Some("label".into()));
        }
        let _binding = ToggleController::bind_content(&toggle, content.clone());

        let writer = content.clone();
        let _sub = toggle.borrow().subscribe_selection(move |s| {
            let label = if *s == SelectionState::On { "Done" } else { "Todo" };
            writer.set("label", ToggleValue::from(label));
        });

        toggle.borrow_mut().set_value(true);
        assert_eq!(toggle.borrow().title().as_deref(), Some("Done"));
        toggle.borrow_mut().toggle();
        assert_eq!(toggle.borrow().title().as_deref(), Some("Todo"));
    }

    #[test]
    fn title_and_icon_changes_bump_display_revision() {
        let mut toggle = ToggleController::default();
        toggle.set_title(Some("Bold".into()));
        toggle.set_title(Some("Bold".into()));
        toggle.set_icon(Some("/img/bold.png".into()));
        toggle.set_value(true);
        assert_eq!(toggle.display_revision(), 2);
        assert_eq!(toggle.icon_kind(), Some(IconKind::Url));
    }

    #[test]
    fn display_title_is_cached_and_localized() {
        let mut catalog = TitleCatalog::new("fr");
        catalog.add_strings("fr", [("toggle.bold", "Gras")]);

        let mut toggle = ToggleController::default();
        toggle.set_title(Some("toggle.bold".into()));
        assert_eq!(toggle.display_title(), "toggle.bold");

        toggle.set_localize(true);
        assert_eq!(toggle.display_title(), "toggle.bold");
        toggle.set_localizer(Some(Rc::new(catalog)));
        assert_eq!(toggle.display_title(), "Gras");
        assert_eq!(toggle.display_title(), "Gras");
    }

    #[test]
    fn value_subscriber_counts_rewrites() {
        let writes = Rc::new(Cell::new(0u32));
        let mut toggle = ToggleController::new(ToggleReference::new("yes", "no"));
        let counter = Rc::clone(&writes);
        let _sub = toggle.subscribe_value(move |_| counter.set(counter.get() + 1));

        toggle.set_selection_state(SelectionState::On);
        assert_eq!(toggle.value(), ToggleValue::Scalar(Scalar::from("yes")));
        assert_eq!(writes.get(), 1);
    }
}
