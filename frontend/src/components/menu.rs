use crate::auth::{logout, use_auth};
use crate::web::router::use_router;
use crate::web::storage::browser_session;
use leptos::prelude::*;

#[component]
pub fn MenuPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // 页面渲染时读取一次会话即可，登录/注销都会触发重新导航
    let session = browser_session();
    let username = session.username().unwrap_or_default();
    let is_admin = session.is_admin();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <span class="text-xl font-bold px-4">"LingoDrill"</span>
                        <span class="badge badge-neutral">{username}</span>
                    </div>
                    <div class="flex-none">
                        <button on:click=move |_| logout(auth) class="btn btn-outline btn-error">
                            "退出登录"
                        </button>
                    </div>
                </div>

                <div class="grid gap-4 md:grid-cols-2">
                    <button
                        class="btn btn-primary h-32 text-xl"
                        on:click=move |_| router.navigate("/word-practice")
                    >
                        "词语练习"
                    </button>
                    <button
                        class="btn btn-secondary h-32 text-xl"
                        on:click=move |_| router.navigate("/article-practice")
                    >
                        "文章练习"
                    </button>
                </div>

                <Show when=move || is_admin>
                    <button class="btn btn-ghost w-full" on:click=move |_| router.navigate("/admin")>
                        "管理后台"
                    </button>
                </Show>
            </div>
        </div>
    }
}
