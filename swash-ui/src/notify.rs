//! Notification banners
//!
//! Each call adds its own fixed-position alert. Alerts stack without any
//! coordination and remove themselves after [`NOTIFICATION_TTL_MS`].

use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event, HtmlElement};

use crate::dom;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Parse a kind name; unknown names fall back to `Info`
    pub fn parse(kind: &str) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "error" | "danger" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    /// Bootstrap alert variant
    pub fn alert_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "alert-info",
            NotificationKind::Success => "alert-success",
            NotificationKind::Warning => "alert-warning",
            NotificationKind::Error => "alert-danger",
        }
    }

    pub fn class_name(self) -> String {
        format!(
            "alert {} alert-dismissible fade show position-fixed",
            self.alert_class()
        )
    }
}

/// Append a notification to the page
///
/// Returns the alert element, or `None` when there is no document body.
pub fn show(message: &str, kind: NotificationKind) -> Option<Element> {
    let doc = dom::document()?;
    let body = doc.body()?;

    let alert = doc.create_element("div").ok()?;
    alert.set_class_name(&kind.class_name());
    let _ = alert.set_attribute("role", "alert");
    if let Some(el) = alert.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("top", "20px");
        let _ = style.set_property("right", "20px");
        let _ = style.set_property("z-index", "9999");
        let _ = style.set_property("min-width", "300px");
    }
    alert.set_text_content(Some(message));

    let close = doc.create_element("button").ok()?;
    let _ = close.set_attribute("type", "button");
    let _ = close.set_attribute("aria-label", "Close");
    close.set_class_name("btn-close");

    let dismissed = alert.clone();
    let on_close = Closure::wrap(Box::new(move |_event: Event| {
        dismissed.remove();
    }) as Box<dyn FnMut(Event)>);
    let _ = close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
    on_close.forget();

    alert.append_child(&close).ok()?;
    body.append_child(&alert).ok()?;

    let expiring = alert.clone();
    Timeout::new(NOTIFICATION_TTL_MS, move || {
        if expiring.parent_node().is_some() {
            expiring.remove();
        }
    })
    .forget();

    Some(alert)
}
