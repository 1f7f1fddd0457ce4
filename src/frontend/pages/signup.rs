use leptos::prelude::*;

use crate::api::Register;
use crate::frontend::components::{
    Button, ButtonVariant, EmailInput, ErrorAlert, PageFrame, PasswordInput, SuccessAlert,
    TextInput,
};
use crate::routing::Page;
use crate::services::{PasswordPolicy, validate_signup};

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::Signup.layout()>
            <SignupForm/>
        </PageFrame>
    }
}

#[component]
fn SignupForm() -> impl IntoView {
    let register_action = ServerAction::<Register>::new();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());

    let pending = register_action.pending();
    let result = register_action.value();

    let success_message = move || {
        result
            .get()
            .and_then(|r| r.ok().map(|response| response.message))
    };

    let error_message = move || result.get().and_then(|r| r.err().map(|e| e.to_string()));

    // Only shown once every field has something in it.
    let form_problem = Signal::derive(move || {
        let (u, e, p, c) = (username.get(), email.get(), password.get(), password_confirm.get());
        if u.is_empty() || e.is_empty() || p.is_empty() || c.is_empty() {
            return None;
        }
        validate_signup(&u, &e, &p, &c).err()
    });

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12">
            <div class="w-full max-w-md">
                <div class="bg-white border border-stone-200 rounded-2xl p-8 shadow-sm">
                    <div class="text-center mb-8">
                        <a href="/" class="inline-block text-4xl mb-4">"🥗"</a>
                        <h1 class="text-2xl font-bold">"Create Account"</h1>
                        <p class="text-stone-500 mt-2">"Join ReciGuard and cook safely"</p>
                    </div>

                    <Show when=move || success_message().is_some()>
                        <SuccessAlert message=success_message().unwrap_or_default()>
                            <a href="/auth/login" class="text-emerald-700 font-medium">
                                "Continue to login →"
                            </a>
                        </SuccessAlert>
                    </Show>

                    <Show when=move || error_message().is_some()>
                        <ErrorAlert message=error_message().unwrap_or_default() />
                    </Show>

                    <ActionForm action=register_action attr:class="space-y-5">
                        <TextInput
                            label="Username"
                            name="username"
                            placeholder="your_name"
                            input_type="text"
                            required=true
                            hint="3 to 20 letters, digits, '_' or '-'"
                            value=username
                        />
                        <EmailInput label="Email" value=email />
                        <PasswordInput
                            label="Password"
                            hint=format!(
                                "At least {} characters with 3 of: uppercase, lowercase, digit, symbol",
                                PasswordPolicy::MIN_LENGTH,
                            )
                            value=password
                        />
                        <PasswordInput label="Confirm password" name="password_confirm" value=password_confirm />

                        {move || form_problem.get().map(|problem| view! {
                            <p class="text-sm text-red-600">{problem}</p>
                        })}

                        <Button
                            variant=ButtonVariant::Primary
                            disabled=Signal::derive(move || form_problem.get().is_some())
                            loading=pending
                            loading_text="Creating account..."
                        >
                            "Create Account"
                        </Button>
                    </ActionForm>

                    <p class="text-center text-stone-500 mt-6 text-sm">
                        "Already have an account? "
                        <a href="/auth/login" class="text-emerald-700 font-medium">"Log in"</a>
                    </p>
                </div>

                <a href="/" class="block text-center text-stone-400 hover:text-stone-600 mt-6 text-sm">
                    "← Back to home"
                </a>
            </div>
        </div>
    }
}
