use leptos::prelude::*;
use lingodrill_shared::Page;

/// 上一页/下一页
#[component]
pub fn Pager(
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// 当前页是否还有下一页
    #[prop(into)]
    has_next: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="join">
            <button
                class="join-item btn"
                disabled=move || page.get() == Page::FIRST
                on:click=move |_| set_page.update(|p| *p = p.prev())
            >
                "«"
            </button>
            <span class="join-item btn btn-disabled">{move || format!("第 {} 页", page.get())}</span>
            <button
                class="join-item btn"
                disabled=move || !has_next.get()
                on:click=move |_| set_page.update(|p| *p = p.next())
            >
                "»"
            </button>
        </div>
    }
}
