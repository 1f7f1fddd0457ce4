pub mod components;
pub mod pages;
mod scroll;

pub use scroll::{ScrollToTop, WindowViewport};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::api::{Login, Logout, get_current_user};
use crate::routing::{Page, Params, app_routes};
use crate::types::UserPublic;
use pages::*;

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Parameters bound by the route that rendered the current page.
#[derive(Clone, Copy)]
pub struct RouteParams(pub Memo<Params>);

/// The logged-in user, fetched again after every login and logout.
#[derive(Clone, Copy)]
pub struct CurrentUser(pub Resource<Result<Option<UserPublic>, ServerFnError>>);

pub fn use_current_user() -> Option<CurrentUser> {
    use_context::<CurrentUser>()
}

/// Login and logout actions, owned by the app root so they outlive the forms
/// that dispatch them. [`CurrentUser`] is keyed on their versions.
#[derive(Clone, Copy)]
pub struct SessionActions {
    pub login: ServerAction<Login>,
    pub logout: ServerAction<Logout>,
}

impl SessionActions {
    pub fn new() -> Self {
        Self {
            login: ServerAction::new(),
            logout: ServerAction::new(),
        }
    }

    /// Changes whenever a login or logout completes.
    pub fn key(&self) -> (usize, usize) {
        (self.login.version().get(), self.logout.version().get())
    }
}

impl Default for SessionActions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session_actions() -> SessionActions {
    use_context::<SessionActions>().unwrap_or_default()
}

/// A named parameter of the current route, e.g. `recipeId`.
pub fn use_route_param(name: &'static str) -> Memo<Option<String>> {
    let params = use_context::<RouteParams>();
    Memo::new(move |_| params.and_then(|p| p.0.with(|params| params.get(name).map(str::to_owned))))
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionActions::new();
    provide_context(session);

    let user = Resource::new(move || session.key(), |_| get_current_user());
    provide_context(CurrentUser(user));

    view! {
        <Stylesheet id="leptos" href="/pkg/reciguard.css"/>
        <Title formatter=|text| format!("{text} | ReciGuard")/>
        <Meta name="description" content="Share and discover recipes filtered by your allergies"/>

        <Router>
            <ScrollToTop/>
            <RouteOutlet/>
        </Router>
    }
}

/// Resolves the current location against the route table and renders the
/// matching page, or [`NotFound`].
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    let resolved = Memo::new(move |_| app_routes().resolve(&location.pathname.get()));

    let params = Memo::new(move |_| resolved.get().map(|m| m.params).unwrap_or_default());
    provide_context(RouteParams(params));

    let page = Memo::new(move |_| resolved.get().map(|m| m.value));

    move || match page.get() {
        Some(page) => view! {
            <Title text=page.title()/>
            {render_page(page)}
        }
        .into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Landing => view! { <LandingPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Recipes => view! { <RecipesPage/> }.into_any(),
        Page::RecipeForm => view! { <RecipeFormPage/> }.into_any(),
        Page::RecipeDetail => view! { <RecipeDetailPage/> }.into_any(),
        Page::AccountHome => view! { <AccountHomePage/> }.into_any(),
        Page::InfoUpdate => view! { <InfoUpdatePage/> }.into_any(),
        Page::PasswordUpdate => view! { <PasswordUpdatePage/> }.into_any(),
        Page::AllergyUpdate => view! { <AllergyUpdatePage/> }.into_any(),
        Page::MyRecipes => view! { <MyRecipesPage/> }.into_any(),
        Page::Scraps => view! { <ScrapsPage/> }.into_any(),
        Page::AllRecipes => view! { <AllRecipesPage/> }.into_any(),
    }
}
