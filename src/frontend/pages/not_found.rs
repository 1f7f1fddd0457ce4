//! 404 page for paths outside the route table

use leptos::prelude::*;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use actix_web::http::StatusCode;
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-stone-50">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold text-emerald-600 mb-4">"404"</h1>
                <p class="text-2xl font-semibold text-stone-900 mb-2">"Page not found"</p>
                <p class="text-stone-500 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a href="/" class="btn-primary">"Return Home"</a>
            </div>
        </div>
    }
}
