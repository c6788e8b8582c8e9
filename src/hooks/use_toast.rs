use yew::prelude::*;

/// Severity of a transient notification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Warning => "toast toast-warning",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// App-wide handle for pushing transient, auto-dismissing notifications.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub push: Callback<(ToastLevel, String)>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Error, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Info, message.into()));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Warning, message.into()));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toast must be used within a ToastProvider")
}
