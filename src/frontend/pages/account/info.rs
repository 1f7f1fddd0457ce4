use leptos::prelude::*;

use crate::api::{UpdateProfile, fetch_profile};
use crate::frontend::components::{
    Button, ButtonVariant, EmailInput, ErrorAlert, PageFrame, SuccessAlert, TextInput,
};
use crate::routing::Page;
use crate::types::ProfileInfo;

#[component]
pub fn InfoUpdatePage() -> impl IntoView {
    let profile = Resource::new(|| (), |_| fetch_profile());

    view! {
        <PageFrame layout=Page::InfoUpdate.layout()>
            <h1 class="text-3xl font-bold mb-6">"Profile"</h1>
            <Suspense fallback=|| view! { <p class="text-stone-400">"Loading profile..."</p> }>
                {move || Suspend::new(async move {
                    match profile.await {
                        Ok(info) => view! { <ProfileForm info=info/> }.into_any(),
                        Err(e) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Suspense>
        </PageFrame>
    }
}

/// The username is shown read-only; only the email can change.
#[component]
fn ProfileForm(info: ProfileInfo) -> impl IntoView {
    let update = ServerAction::<UpdateProfile>::new();

    let username = RwSignal::new(info.username);
    let email = RwSignal::new(info.email);

    let result = update.value();
    let saved = move || matches!(result.get(), Some(Ok(_)));
    let error_message = move || result.get().and_then(|r| r.err().map(|e| e.to_string()));

    view! {
        <div class="max-w-md">
            <Show when=saved>
                <SuccessAlert message="Profile updated"/>
            </Show>
            <Show when=move || error_message().is_some()>
                <ErrorAlert message=error_message().unwrap_or_default()/>
            </Show>

            <ActionForm action=update attr:class="space-y-5">
                <TextInput
                    label="Username"
                    name="username"
                    input_type="text"
                    readonly=true
                    value=username
                />
                <EmailInput label="Email" value=email/>
                <Button variant=ButtonVariant::Primary loading=update.pending() loading_text="Saving...">
                    "Save"
                </Button>
            </ActionForm>
        </div>
    }
}
