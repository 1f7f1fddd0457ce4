//! Login page for ReciGuard

use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, PageFrame, PasswordInput, TextInput};
use crate::frontend::use_session_actions;
use crate::routing::Page;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::Login.layout()>
            <LoginForm/>
        </PageFrame>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let login_action = use_session_actions().login;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let pending = login_action.pending();
    let error_message = move || {
        login_action
            .value()
            .get()
            .and_then(|r| r.err().map(|e| e.to_string()))
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12">
            <div class="w-full max-w-md bg-white border border-stone-200 rounded-2xl p-8 shadow-sm">
                <div class="text-center mb-8">
                    <a href="/" class="inline-block text-4xl mb-4">"🥗"</a>
                    <h1 class="text-2xl font-bold">"Welcome back"</h1>
                    <p class="text-stone-500 mt-2">"Log in to see recipes that are safe for you"</p>
                </div>

                <Show when=move || error_message().is_some()>
                    <ErrorAlert message=error_message().unwrap_or_default() />
                </Show>

                <ActionForm action=login_action attr:class="space-y-5">
                    <TextInput
                        label="Username"
                        name="username"
                        placeholder="your_name"
                        input_type="text"
                        required=true
                        value=username
                    />
                    <PasswordInput label="Password" value=password />
                    <Button
                        variant=ButtonVariant::Primary
                        loading=pending
                        loading_text="Logging in..."
                    >
                        "Log in"
                    </Button>
                </ActionForm>

                <p class="text-center text-stone-500 mt-6 text-sm">
                    "No account yet? "
                    <a href="/auth/register" class="text-emerald-700 font-medium">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
