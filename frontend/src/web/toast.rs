//! 全局提示框
//!
//! 实现核心库的 `Notifier`，供请求管道和页面共用。

use std::time::Duration;

use leptos::prelude::*;
use lingodrill::notify::{NoticeLevel, Notifier};

/// 提示展示时长
const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                message: message.to_string(),
            })
        });

        let service = *self;
        set_timeout(move || service.dismiss(id), TOAST_DURATION);
    }
}

pub fn provide_toasts() -> ToastService {
    let service = ToastService::new();
    provide_context(service);
    service
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService should be provided")
}

/// 提示框容器，挂在页面右上角
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = use_toasts().toasts();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        NoticeLevel::Success => "alert alert-success shadow-lg",
                        NoticeLevel::Error => "alert alert-error shadow-lg",
                    };
                    view! {
                        <div class=class>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
