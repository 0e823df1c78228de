use crate::auth::{login, register, use_auth};
use crate::web::toast::use_toasts;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lingodrill::Notifier;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_register, set_is_register) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = (username.get(), password.get());
        if user.trim().is_empty() || pass.is_empty() {
            set_error_msg.set(Some("请输入用户名和密码".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            if is_register.get_untracked() {
                // 失败提示已由请求管道给出
                if register(auth, user, pass).await.is_ok() {
                    toasts.success("注册成功，请登录");
                    set_is_register.set(false);
                    set_password.set(String::new());
                }
            } else {
                let _ = login(auth, user, pass).await;
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"LingoDrill"</h1>
                    <p class="text-base-content/70">
                        {move || if is_register.get() { "创建新账号" } else { "登录后开始练习" }}
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || match (is_submitting.get(), is_register.get()) {
                                    (true, _) => "请稍候...",
                                    (false, true) => "注册",
                                    (false, false) => "登录",
                                }}
                            </button>
                        </div>
                        <button
                            type="button"
                            class="btn btn-link btn-sm"
                            on:click=move |_| set_is_register.update(|r| *r = !*r)
                        >
                            {move || if is_register.get() { "已有账号？去登录" } else { "没有账号？去注册" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
