use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    fn class(&self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            Severity::Success => "#14b8a6",
            Severity::Error => "#ef4444",
            Severity::Info => "#6c5ce7",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
    /// Playing the exit animation, about to be removed.
    pub leaving: bool,
}

/// Holds at most one notice. Showing a new one evicts the current one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationSlot {
    pub current: Option<Notice>,
    next_id: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Show { message: String, severity: Severity },
    Dismiss(u32),
    Remove(u32),
}

impl Reducible for NotificationSlot {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show { message, severity } => {
                let id = self.next_id + 1;
                Rc::new(Self {
                    current: Some(Notice { id, message, severity, leaving: false }),
                    next_id: id,
                })
            }
            NotificationAction::Dismiss(id) => match &self.current {
                Some(notice) if notice.id == id && !notice.leaving => Rc::new(Self {
                    current: Some(Notice { leaving: true, ..notice.clone() }),
                    next_id: self.next_id,
                }),
                _ => self,
            },
            NotificationAction::Remove(id) => match &self.current {
                Some(notice) if notice.id == id => Rc::new(Self {
                    current: None,
                    next_id: self.next_id,
                }),
                _ => self,
            },
        }
    }
}

impl Notice {
    /// The timer this notice runs in its current phase: auto-dismiss while
    /// shown, removal once the exit animation has played.
    pub fn timer(&self) -> (u32, NotificationAction) {
        if self.leaving {
            (config::NOTIFICATION_EXIT_MS, NotificationAction::Remove(self.id))
        } else {
            (config::NOTIFICATION_TTL_MS, NotificationAction::Dismiss(self.id))
        }
    }
}

/// Handle for raising notifications, provided through context.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.dispatch.emit(NotificationAction::Show { message: message.into(), severity });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        log::warn!("use_notifier called outside NotificationProvider");
        Notifier { dispatch: Callback::noop() }
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let slot = use_reducer(NotificationSlot::default);
    let dispatch = {
        let dispatcher = slot.dispatcher();
        use_memo(move |_| Callback::from(move |action| dispatcher.dispatch(action)), ())
    };
    let notifier = Notifier { dispatch: (*dispatch).clone() };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            {
                if let Some(notice) = slot.current.clone() {
                    let id = notice.id;
                    html! { <Toast key={id} notice={notice} on_action={(*dispatch).clone()} /> }
                } else {
                    html! {}
                }
            }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notice: Notice,
    on_action: Callback<NotificationAction>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let Notice { id, ref message, severity, leaving } = props.notice;

    // The pending timeout is dropped, and so cancelled, on change or unmount.
    {
        let on_action = props.on_action.clone();
        let (delay, action) = props.notice.timer();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay, move || {
                    debug!("notification {} timer fired: {:?}", id, action);
                    on_action.emit(action)
                });
                move || drop(timeout)
            },
            leaving,
        );
    }

    let on_close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(NotificationAction::Dismiss(id)))
    };

    let animation = if leaving { "slideOut 0.3s ease forwards" } else { "slideIn 0.3s ease" };

    html! {
        <div
            class={classes!("notification", severity.class(), leaving.then(|| "leaving"))}
            role="status"
            style={format!("background: {}; animation: {};", severity.background(), animation)}
        >
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        bottom: 20px;
                        right: 20px;
                        padding: 16px 24px;
                        color: white;
                        border-radius: 8px;
                        box-shadow: 0 10px 25px rgba(0,0,0,0.2);
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        z-index: 9999;
                        max-width: calc(100vw - 40px);
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.4rem;
                        line-height: 1;
                        cursor: pointer;
                    }
                    @keyframes slideIn {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOut {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                "#}
            </style>
            <span>{message.clone()}</span>
            <button class="notification-close" aria-label="Dismiss" onclick={on_close}>{"×"}</button>
        </div>
    }
}
