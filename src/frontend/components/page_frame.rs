use leptos::prelude::*;

use crate::layout::{HeaderVariant, PageLayout, Panel};

use super::{AccountSidebar, Footer, Header, HomePanel, SubHeader};

/// Renders the fixtures declared by a [`PageLayout`] around a page's content.
#[component]
pub fn PageFrame(layout: PageLayout, children: Children) -> impl IntoView {
    let header = layout.header.map(|variant| match variant {
        HeaderVariant::Main => view! { <Header/> }.into_any(),
        HeaderVariant::Sub => view! { <SubHeader/> }.into_any(),
    });

    let content = children();

    let body = if layout.panels.is_empty() {
        view! { <main class="flex-grow">{content}</main> }.into_any()
    } else {
        let panels = layout
            .panels
            .iter()
            .map(|panel| match panel {
                Panel::AccountSidebar => view! { <AccountSidebar/> }.into_any(),
                Panel::HomePanel => view! { <HomePanel/> }.into_any(),
            })
            .collect_view();

        view! {
            <div class="flex-grow max-w-6xl w-full mx-auto px-6 py-8 flex gap-8">
                {panels}
                <main class="flex-1 min-w-0">{content}</main>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="min-h-screen flex flex-col bg-stone-50 text-stone-900">
            {header}
            {body}
            {layout.footer.then(|| view! { <Footer/> })}
        </div>
    }
}
