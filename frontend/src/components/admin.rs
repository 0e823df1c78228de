use crate::auth::use_auth;
use crate::components::pager::Pager;
use crate::web::router::use_router;
use crate::web::toast::use_toasts;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lingodrill::Notifier;
use lingodrill_shared::{Article, Page, User, Word};

/// 管理后台的子页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Users,
    Words,
    Articles,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Users, AdminTab::Words, AdminTab::Articles];

    fn path(&self) -> &'static str {
        match self {
            AdminTab::Users => "/admin/users",
            AdminTab::Words => "/admin/words",
            AdminTab::Articles => "/admin/articles",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Users => "用户管理",
            AdminTab::Words => "词语管理",
            AdminTab::Articles => "文章管理",
        }
    }
}

#[component]
pub fn AdminPage(tab: AdminTab) -> impl IntoView {
    let router = use_router();

    let tabs = AdminTab::ALL
        .into_iter()
        .map(|t| {
            let class = if t == tab { "tab tab-active" } else { "tab" };
            view! {
                <a role="tab" class=class on:click=move |_| router.navigate(t.path())>
                    {t.label()}
                </a>
            }
        })
        .collect_view();

    let panel = match tab {
        AdminTab::Users => view! { <UsersPanel /> }.into_any(),
        AdminTab::Words => view! { <WordsPanel /> }.into_any(),
        AdminTab::Articles => view! { <ArticlesPanel /> }.into_any(),
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"管理后台"</h1>
                    <button class="btn btn-ghost" on:click=move |_| router.navigate("/menu")>
                        "← 返回菜单"
                    </button>
                </div>
                <div role="tablist" class="tabs tabs-boxed">{tabs}</div>
                {panel}
            </div>
        </div>
    }
}

// =========================================================
// 用户管理
// =========================================================

#[component]
fn UsersPanel() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (page, set_page) = signal(Page::FIRST);
    let (users, set_users) = signal(Vec::<User>::new());
    let (has_next, set_has_next) = signal(false);
    // 增删改之后自增以触发重新加载
    let (version, set_version) = signal(0u32);

    Effect::new(move |_| {
        let current = page.get();
        version.track();
        spawn_local(async move {
            if let Ok(list) = auth.api().admin().get_users(current).await {
                set_has_next.set(list.has_more());
                set_users.set(list.items);
            }
        });
    });

    let delete = move |id: i64| {
        spawn_local(async move {
            if auth.api().admin().delete_user(id).await.is_ok() {
                toasts.success("用户已删除");
                set_version.update(|v| *v += 1);
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"用户名"</th>
                            <th>"角色"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user| {
                                let id = user.id;
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>{user.username}</td>
                                        <td>{if user.is_admin { "管理员" } else { "学员" }}</td>
                                        <td class="text-right">
                                            <button
                                                class="btn btn-xs btn-error btn-outline"
                                                on:click=move |_| delete(id)
                                            >
                                                "删除"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="flex justify-center">
                    <Pager page=page set_page=set_page has_next=has_next />
                </div>
            </div>
        </div>
    }
}

// =========================================================
// 词语管理
// =========================================================

#[component]
fn WordsPanel() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (page, set_page) = signal(Page::FIRST);
    let (words, set_words) = signal(Vec::<Word>::new());
    let (has_next, set_has_next) = signal(false);
    let (version, set_version) = signal(0u32);

    // 编辑表单；`editing` 为空时表示新增
    let editing = RwSignal::new(Option::<i64>::None);
    let word = RwSignal::new(String::new());
    let pinyin = RwSignal::new(String::new());

    let reset_form = move || {
        editing.set(None);
        word.set(String::new());
        pinyin.set(String::new());
    };

    Effect::new(move |_| {
        let current = page.get();
        version.track();
        spawn_local(async move {
            if let Ok(list) = auth.api().admin().get_all_words(current).await {
                set_has_next.set(list.has_more());
                set_words.set(list.items);
            }
        });
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (w, p) = (word.get(), pinyin.get());
        if w.trim().is_empty() {
            toasts.error("请输入词语");
            return;
        }
        let target = editing.get();
        spawn_local(async move {
            let api = auth.api();
            let result = match target {
                Some(id) => api.admin().update_word(id, &w, &p).await,
                None => api.admin().add_word(&w, &p).await,
            };
            if result.is_ok() {
                toasts.success(if target.is_some() { "词语已更新" } else { "词语已添加" });
                reset_form();
                set_version.update(|v| *v += 1);
            }
        });
    };

    let delete = move |id: i64| {
        spawn_local(async move {
            if auth.api().admin().delete_word(id).await.is_ok() {
                toasts.success("词语已删除");
                set_version.update(|v| *v += 1);
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <form class="flex flex-wrap gap-2 items-end" on:submit=on_submit>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="词语"
                        prop:value=word
                        on:input=move |ev| word.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="拼音"
                        prop:value=pinyin
                        on:input=move |ev| pinyin.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">
                        {move || if editing.get().is_some() { "保存" } else { "添加" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="btn btn-ghost" on:click=move |_| reset_form()>
                            "取消"
                        </button>
                    </Show>
                </form>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"词语"</th>
                            <th>"拼音"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || words.get()
                            key=|w| w.id
                            children=move |w| {
                                let id = w.id;
                                let edit_word = w.word.clone();
                                let edit_pinyin = w.pinyin.clone();
                                view! {
                                    <tr>
                                        <td>{w.id}</td>
                                        <td>{w.word}</td>
                                        <td>{w.pinyin}</td>
                                        <td class="text-right space-x-2">
                                            <button
                                                class="btn btn-xs btn-outline"
                                                on:click=move |_| {
                                                    editing.set(Some(id));
                                                    word.set(edit_word.clone());
                                                    pinyin.set(edit_pinyin.clone());
                                                }
                                            >
                                                "编辑"
                                            </button>
                                            <button
                                                class="btn btn-xs btn-error btn-outline"
                                                on:click=move |_| delete(id)
                                            >
                                                "删除"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="flex justify-center">
                    <Pager page=page set_page=set_page has_next=has_next />
                </div>
            </div>
        </div>
    }
}

// =========================================================
// 文章管理
// =========================================================

#[component]
fn ArticlesPanel() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (page, set_page) = signal(Page::FIRST);
    let (articles, set_articles) = signal(Vec::<Article>::new());
    let (has_next, set_has_next) = signal(false);
    let (version, set_version) = signal(0u32);

    let editing = RwSignal::new(Option::<i64>::None);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let pinyin = RwSignal::new(String::new());

    let reset_form = move || {
        editing.set(None);
        title.set(String::new());
        content.set(String::new());
        pinyin.set(String::new());
    };

    Effect::new(move |_| {
        let current = page.get();
        version.track();
        spawn_local(async move {
            if let Ok(list) = auth.api().admin().get_all_articles(current).await {
                set_has_next.set(list.has_more());
                set_articles.set(list.items);
            }
        });
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (t, c, p) = (title.get(), content.get(), pinyin.get());
        if t.trim().is_empty() || c.trim().is_empty() {
            toasts.error("请输入标题和正文");
            return;
        }
        let target = editing.get();
        spawn_local(async move {
            let api = auth.api();
            let result = match target {
                Some(id) => api.admin().update_article(id, &t, &c, &p).await,
                None => api.admin().add_article(&t, &c, &p).await,
            };
            if result.is_ok() {
                toasts.success(if target.is_some() { "文章已更新" } else { "文章已添加" });
                reset_form();
                set_version.update(|v| *v += 1);
            }
        });
    };

    let delete = move |id: i64| {
        spawn_local(async move {
            if auth.api().admin().delete_article(id).await.is_ok() {
                toasts.success("文章已删除");
                set_version.update(|v| *v += 1);
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <form class="space-y-2" on:submit=on_submit>
                    <input
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="标题"
                        prop:value=title
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="textarea textarea-bordered w-full h-32"
                        placeholder="正文"
                        prop:value=content
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <textarea
                        class="textarea textarea-bordered w-full h-24"
                        placeholder="拼音"
                        prop:value=pinyin
                        on:input=move |ev| pinyin.set(event_target_value(&ev))
                    ></textarea>
                    <div class="flex gap-2">
                        <button type="submit" class="btn btn-primary">
                            {move || if editing.get().is_some() { "保存" } else { "添加" }}
                        </button>
                        <Show when=move || editing.get().is_some()>
                            <button type="button" class="btn btn-ghost" on:click=move |_| reset_form()>
                                "取消"
                            </button>
                        </Show>
                    </div>
                </form>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"标题"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || articles.get()
                            key=|a| a.id
                            children=move |a| {
                                let id = a.id;
                                let article = a.clone();
                                view! {
                                    <tr>
                                        <td>{a.id}</td>
                                        <td>{a.title}</td>
                                        <td class="text-right space-x-2">
                                            <button
                                                class="btn btn-xs btn-outline"
                                                on:click=move |_| {
                                                    editing.set(Some(id));
                                                    title.set(article.title.clone());
                                                    content.set(article.content.clone());
                                                    pinyin.set(article.pinyin.clone());
                                                }
                                            >
                                                "编辑"
                                            </button>
                                            <button
                                                class="btn btn-xs btn-error btn-outline"
                                                on:click=move |_| delete(id)
                                            >
                                                "删除"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="flex justify-center">
                    <Pager page=page set_page=set_page has_next=has_next />
                </div>
            </div>
        </div>
    }
}
