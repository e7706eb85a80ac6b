//! Modal video player with focus trapping
//!
//! Each open modal is a [`ModalSession`] owned by the controller, holding
//! the element that opened it so focus can return there on close. The
//! focus-trap listener is installed with the first session and removed
//! with the last, so repeated open/close cycles never stack listeners.

use crate::config::ModalConfig;
use crate::view::View;

/// Keyboard input relevant to the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }
}

/// What the controller did with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; let the browser proceed
    Ignored,
    /// Focus wrapped inside the modal; the default tab move must be suppressed
    Wrapped,
    /// Escape closed this many modals
    ClosedAll(usize),
}

/// One open modal
#[derive(Debug, Clone)]
pub struct ModalSession<N> {
    pub modal: N,
    pub trigger: Option<N>,
}

pub struct ModalController<V: View> {
    view: V,
    player: Option<V::Node>,
    sessions: Vec<ModalSession<V::Node>>,
    config: ModalConfig,
}

impl<V: View> ModalController<V> {
    /// `player` is the shared mount point for the video element.
    pub const fn new(view: V, player: Option<V::Node>, config: ModalConfig) -> Self {
        Self {
            view,
            player,
            sessions: Vec::new(),
            config,
        }
    }

    pub fn is_open(&self) -> bool {
        !self.sessions.is_empty()
    }

    pub fn sessions(&self) -> &[ModalSession<V::Node>] {
        &self.sessions
    }

    /// Open `modal` playing `video_path`.
    ///
    /// Skipped when either the modal or the path is missing. Reopening a
    /// modal that is already open swaps the video and keeps the original
    /// trigger.
    pub fn open(
        &mut self,
        modal: Option<V::Node>,
        video_path: Option<&str>,
        trigger: Option<V::Node>,
    ) -> bool {
        let (Some(modal), Some(video_path)) = (modal, video_path) else {
            return false;
        };
        if video_path.is_empty() {
            return false;
        }

        if let Some(player) = &self.player {
            self.view.mount_video(player, video_path);
        }
        self.view.toggle_class(&modal, &self.config.active_class, true);

        let body = self.view.body();
        self.view.set_style(&body, "overflow", Some("hidden"));

        if let Some(close) = self.view.find_in(&modal, &self.config.close_class) {
            self.view.focus(&close);
        }

        if !self.sessions.iter().any(|s| s.modal == modal) {
            if self.sessions.is_empty() {
                self.view.set_key_trap(true);
            }
            self.sessions.push(ModalSession { modal, trigger });
        }
        tracing::debug!(video_path, open = self.sessions.len(), "modal opened");
        true
    }

    /// Close the modal enclosing a close control or backdrop.
    pub fn close_containing(&mut self, control: &V::Node) -> bool {
        match self.view.closest(control, &self.config.modal_class) {
            Some(modal) => self.close(&modal),
            None => false,
        }
    }

    /// Close `modal`, stopping playback and restoring focus to its trigger.
    ///
    /// Returns whether the modal was open, either tracked by a session or
    /// marked active in the page.
    pub fn close(&mut self, modal: &V::Node) -> bool {
        let was_active = self.view.has_class(modal, &self.config.active_class);
        if let Some(player) = &self.player {
            self.view.clear_children(player);
        }
        self.view.toggle_class(modal, &self.config.active_class, false);

        let index = self.sessions.iter().position(|s| &s.modal == modal);
        let session = index.map(|i| self.sessions.remove(i));

        if self.sessions.is_empty() {
            let body = self.view.body();
            self.view.set_style(&body, "overflow", None);
            self.view.set_key_trap(false);
        }

        if let Some(trigger) = session.as_ref().and_then(|s| s.trigger.as_ref()) {
            self.view.focus(trigger);
        }
        tracing::debug!(open = self.sessions.len(), "modal closed");
        was_active || session.is_some()
    }

    /// Modals marked active in the page, in document order
    pub fn active_modals(&self) -> Vec<V::Node> {
        self.view
            .query_with_classes(&[self.config.modal_class.as_str(), self.config.active_class.as_str()])
    }

    /// Close every open modal: tracked sessions most recent first, then any
    /// other modal the page marks active. Returns how many closed.
    pub fn close_all(&mut self) -> usize {
        let mut targets: Vec<V::Node> = self
            .sessions
            .iter()
            .rev()
            .map(|s| s.modal.clone())
            .collect();
        for modal in self.active_modals() {
            if !targets.contains(&modal) {
                targets.push(modal);
            }
        }
        let mut closed = 0;
        for modal in &targets {
            if self.close(modal) {
                closed += 1;
            }
        }
        closed
    }

    /// Focus-trap listener: Escape closes everything, Tab wraps inside the
    /// first active modal.
    pub fn handle_key(&mut self, key: &KeyPress) -> KeyOutcome {
        match key.key.as_str() {
            "Escape" => match self.close_all() {
                0 => KeyOutcome::Ignored,
                closed => KeyOutcome::ClosedAll(closed),
            },
            "Tab" => self.trap_tab(key.shift),
            _ => KeyOutcome::Ignored,
        }
    }

    /// Always-attached document listener.
    ///
    /// While a session is open the focus-trap listener owns the keyboard,
    /// so this only acts on modals the page marked active by itself.
    pub fn handle_page_key(&mut self, key: &KeyPress) -> KeyOutcome {
        if self.is_open() {
            return KeyOutcome::Ignored;
        }
        self.handle_key(key)
    }

    fn trap_tab(&self, shift: bool) -> KeyOutcome {
        let Some(active) = self.active_modals().into_iter().next() else {
            return KeyOutcome::Ignored;
        };

        let focusable = self.view.query_focusable(&active);
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return KeyOutcome::Ignored;
        };
        let current = self.view.active_element();

        let (edge, target) = if shift { (first, last) } else { (last, first) };
        if current.as_ref() == Some(edge) {
            self.view.focus(target);
            KeyOutcome::Wrapped
        } else {
            KeyOutcome::Ignored
        }
    }
}
