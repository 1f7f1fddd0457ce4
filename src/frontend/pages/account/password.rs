use leptos::prelude::*;

use crate::api::UpdatePassword;
use crate::frontend::components::{
    Button, ButtonVariant, ErrorAlert, PageFrame, PasswordInput, SuccessAlert,
};
use crate::routing::Page;
use crate::services::{PasswordPolicy, validate_password_change};

#[component]
pub fn PasswordUpdatePage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::PasswordUpdate.layout()>
            <h1 class="text-3xl font-bold mb-6">"Change password"</h1>
            <PasswordForm/>
        </PageFrame>
    }
}

#[component]
fn PasswordForm() -> impl IntoView {
    let update = ServerAction::<UpdatePassword>::new();

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let problem = Signal::derive(move || {
        let (c, n, k) = (current.get(), new.get(), confirm.get());
        if n.is_empty() || k.is_empty() {
            return None;
        }
        validate_password_change(&c, &n, &k).err()
    });

    let result = update.value();
    let success = move || result.get().and_then(|r| r.ok());
    let error_message = move || result.get().and_then(|r| r.err().map(|e| e.to_string()));

    view! {
        <div class="max-w-md">
            <Show when=move || success().is_some()>
                <SuccessAlert message=success().unwrap_or_default()/>
            </Show>
            <Show when=move || error_message().is_some()>
                <ErrorAlert message=error_message().unwrap_or_default()/>
            </Show>

            <ActionForm action=update attr:class="space-y-5">
                <PasswordInput label="Current password" name="current_password" value=current/>
                <PasswordInput
                    label="New password"
                    name="new_password"
                    hint=format!("At least {} characters", PasswordPolicy::MIN_LENGTH)
                    value=new
                />
                <PasswordInput label="Confirm new password" name="confirm_password" value=confirm/>

                {move || problem.get().map(|p| view! { <p class="text-sm text-red-600">{p}</p> })}

                <Button
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || problem.get().is_some())
                    loading=update.pending()
                    loading_text="Updating..."
                >
                    "Update password"
                </Button>
            </ActionForm>
        </div>
    }
}
