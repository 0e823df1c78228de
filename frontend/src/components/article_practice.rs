use crate::auth::use_auth;
use crate::components::pager::Pager;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lingodrill_shared::{Article, Page, PracticeKind};

#[component]
pub fn ArticlePracticePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (page, set_page) = signal(Page::FIRST);
    let (articles, set_articles) = signal(Vec::<Article>::new());
    let (has_next, set_has_next) = signal(false);
    let (ready, set_ready) = signal(false);

    spawn_local(async move {
        if let Ok(progress) = auth
            .api()
            .practice()
            .get_progress(PracticeKind::Article)
            .await
        {
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
            if let Ok(list) = api.practice().get_articles(current).await {
                set_has_next.set(list.has_more());
                set_articles.set(list.items);
            }
            let _ = api
                .practice()
                .save_progress(PracticeKind::Article, current.get())
                .await;
        });
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <button class="btn btn-ghost" on:click=move |_| router.navigate("/menu")>
                    "← 返回菜单"
                </button>

                <For
                    each=move || articles.get()
                    key=|article| article.id
                    children=move |article| {
                        view! {
                            <article class="card bg-base-100 shadow">
                                <div class="card-body space-y-2">
                                    <h2 class="card-title text-2xl">{article.title}</h2>
                                    <p class="text-sm text-base-content/60 whitespace-pre-wrap">
                                        {article.pinyin}
                                    </p>
                                    <p class="text-lg leading-loose whitespace-pre-wrap">
                                        {article.content}
                                    </p>
                                </div>
                            </article>
                        }
                    }
                />

                <div class="flex justify-center">
                    <Pager page=page set_page=set_page has_next=has_next />
                </div>
            </div>
        </div>
    }
}
