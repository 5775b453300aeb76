//! Wheel guard for numeric inputs.
//!
//! Browsers step the value of a focused `<input type="number">` when the mouse
//! wheel spins over the page. The guard runs on every document-level `wheel`
//! event and, if the focused element is a guarded input, blurs it so the
//! wheel delta never reaches the value. The check is on the input type only:
//! wheel direction, magnitude and read-only/disabled state are not consulted.

use tracing::debug;

use crate::config::BootConfig;

/// The element currently holding focus, as seen by the guard.
pub trait FocusTarget {
    /// The `type` of an `<input>` element, or `None` for anything else.
    fn input_type(&self) -> Option<String>;
    fn blur(&self);
}

/// Read access to the document's focus state.
pub trait FocusSource {
    type Target: FocusTarget;

    /// `None` when nothing (or only the body) holds focus.
    fn active_element(&self) -> Option<Self::Target>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    NoFocus,
    NotAnInput,
    UnguardedType(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Blurred { input_type: String },
    Ignored(IgnoreReason),
}

impl GuardOutcome {
    pub fn blurred(&self) -> bool {
        matches!(self, GuardOutcome::Blurred { .. })
    }
}

/// Page-lifetime registration of the wheel listener.
///
/// There is no way to release it: once acquired the listener stays attached
/// until the page goes away.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct GuardSubscription {
    event: &'static str,
}

impl GuardSubscription {
    pub const WHEEL: &'static str = "wheel";

    pub fn document_wheel() -> Self {
        Self { event: Self::WHEEL }
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelGuard {
    guarded_types: Vec<String>,
}

impl Default for WheelGuard {
    fn default() -> Self {
        Self::new(&BootConfig::default())
    }
}

impl WheelGuard {
    pub fn new(cfg: &BootConfig) -> Self {
        let guarded_types = cfg
            .guarded_input_types
            .iter()
            .map(|t| normalize_type(t))
            .filter(|t| !t.is_empty())
            .collect();
        Self { guarded_types }
    }

    pub fn guarded_types(&self) -> &[String] {
        &self.guarded_types
    }

    pub fn guards(&self, input_type: &str) -> bool {
        let t = normalize_type(input_type);
        self.guarded_types.iter().any(|g| *g == t)
    }

    /// Handle one wheel event. Never cancels the event itself.
    pub fn handle_wheel<S: FocusSource>(&self, source: &S) -> GuardOutcome {
        let Some(target) = source.active_element() else {
            return GuardOutcome::Ignored(IgnoreReason::NoFocus);
        };
        let Some(input_type) = target.input_type() else {
            return GuardOutcome::Ignored(IgnoreReason::NotAnInput);
        };
        if !self.guards(&input_type) {
            return GuardOutcome::Ignored(IgnoreReason::UnguardedType(input_type));
        }

        target.blur();
        debug!("wheel over focused <input type={input_type}>, blurred");
        GuardOutcome::Blurred { input_type }
    }
}

fn normalize_type(t: &str) -> String {
    t.trim().to_ascii_lowercase()
}


#[cfg(test)]
mod tests {
    use super::testing::FakeDocument;
    use super::*;

    #[test]
    fn focused_number_input_is_blurred_and_keeps_its_value() {
        let doc = FakeDocument::new();
        let n = doc.add_input("number", "42");
        doc.focus(n);

        let out = WheelGuard::default().handle_wheel(&doc);

        assert_eq!(
            out,
            GuardOutcome::Blurred {
                input_type: "number".to_string()
            }
        );
        assert_eq!(doc.focused(), None);
        assert_eq!(doc.value(n), "42");
    }

    #[test]
    fn focused_text_input_keeps_focus() {
        let doc = FakeDocument::new();
        let t = doc.add_input("text", "hello");
        doc.focus(t);

        let out = WheelGuard::default().handle_wheel(&doc);

        assert_eq!(
            out,
            GuardOutcome::Ignored(IgnoreReason::UnguardedType("text".to_string()))
        );
        assert_eq!(doc.focused(), Some(t));
        assert_eq!(doc.blur_calls(), 0);
    }

    #[test]
    fn non_input_focus_is_left_alone() {
        let doc = FakeDocument::new();
        let el = doc.add_element();
        doc.focus(el);

        let out = WheelGuard::default().handle_wheel(&doc);

        assert_eq!(out, GuardOutcome::Ignored(IgnoreReason::NotAnInput));
        assert_eq!(doc.focused(), Some(el));
    }

    #[test]
    fn nothing_focused_is_a_no_op() {
        let doc = FakeDocument::new();
        doc.add_input("number", "1");

        let out = WheelGuard::default().handle_wheel(&doc);

        assert_eq!(out, GuardOutcome::Ignored(IgnoreReason::NoFocus));
        assert_eq!(doc.blur_calls(), 0);
    }

    #[test]
    fn second_wheel_on_blurred_field_changes_nothing() {
        let doc = FakeDocument::new();
        let n = doc.add_input("number", "7");
        doc.focus(n);
        let guard = WheelGuard::default();

        assert!(guard.handle_wheel(&doc).blurred());
        let again = guard.handle_wheel(&doc);

        assert_eq!(again, GuardOutcome::Ignored(IgnoreReason::NoFocus));
        assert_eq!(doc.blur_calls(), 1);
        assert_eq!(doc.value(n), "7");
    }

    #[test]
    fn type_check_ignores_case_and_whitespace() {
        let guard = WheelGuard::default();
        assert!(guard.guards("NUMBER"));
        assert!(guard.guards(" number "));
        assert!(!guard.guards("range"));
        assert!(!guard.guards(""));
    }

    #[test]
    fn configured_types_replace_the_default() {
        let cfg = BootConfig {
            guarded_input_types: vec!["range".to_string(), " ".to_string()],
            ..Default::default()
        };
        let guard = WheelGuard::new(&cfg);

        assert_eq!(guard.guarded_types(), ["range".to_string()]);
        assert!(guard.guards("range"));
        assert!(!guard.guards("number"));
    }

    #[test]
    fn subscription_is_for_the_wheel_event() {
        assert_eq!(GuardSubscription::document_wheel().event(), "wheel");
    }
}
