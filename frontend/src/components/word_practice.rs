use crate::auth::use_auth;
use crate::components::pager::Pager;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lingodrill_shared::{Page, PracticeKind, Word};

#[component]
pub fn WordPracticePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (page, set_page) = signal(Page::FIRST);
    let (words, set_words) = signal(Vec::<Word>::new());
    let (has_next, set_has_next) = signal(false);
    let (show_pinyin, set_show_pinyin) = signal(false);
    // 恢复进度之前不加载、不保存
    let (ready, set_ready) = signal(false);

    spawn_local(async move {
        if let Ok(progress) = auth.api().practice().get_progress(PracticeKind::Word).await {
            set_page.set(Page::new(progress.page));
        }
        set_ready.set(true);
    });

    Effect::new(move |_| {
        if !ready.get() {
            return;
        }
        let current = page.get();
        spawn_local(async move {
            let api = auth.api();
            if let Ok(list) = api.practice().get_words(current).await {
                set_has_next.set(list.has_more());
                set_words.set(list.items);
            }
            let _ = api
                .practice()
                .save_progress(PracticeKind::Word, current.get())
                .await;
        });
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <button class="btn btn-ghost" on:click=move |_| router.navigate("/menu")>
                        "← 返回菜单"
                    </button>
                    <label class="label cursor-pointer gap-2">
                        <span class="label-text">"显示拼音"</span>
                        <input
                            type="checkbox"
                            class="toggle"
                            prop:checked=show_pinyin
                            on:change=move |_| set_show_pinyin.update(|s| *s = !*s)
                        />
                    </label>
                </div>

                <div class="grid gap-4 grid-cols-2 md:grid-cols-4">
                    <For
                        each=move || words.get()
                        key=|word| word.id
                        children=move |word| {
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body items-center text-center">
                                        <Show when=move || show_pinyin.get()>
                                            <p class="text-sm text-base-content/60">{word.pinyin.clone()}</p>
                                        </Show>
                                        <h2 class="card-title text-3xl">{word.word.clone()}</h2>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="flex justify-center">
                    <Pager page=page set_page=set_page has_next=has_next />
                </div>
            </div>
        </div>
    }
}
