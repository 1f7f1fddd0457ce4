//! Which layout fixtures each page is composed of.

use crate::routing::Page;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum HeaderVariant {
    /// Full site header with brand and auth links, used on the landing page.
    Main,
    /// Compact header with search and account links.
    Sub,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Panel {
    /// Primary account navigation.
    AccountSidebar,
    /// Secondary "home" panel with the account summary.
    HomePanel,
}

/// Any reusable piece a page may place around its content.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Fixture {
    Header(HeaderVariant),
    Panel(Panel),
    Footer,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PageLayout {
    pub header: Option<HeaderVariant>,
    pub panels: &'static [Panel],
    pub footer: bool,
}

const ACCOUNT_PANELS: &[Panel] = &[Panel::AccountSidebar, Panel::HomePanel];

impl PageLayout {
    pub const BARE: PageLayout = PageLayout {
        header: None,
        panels: &[],
        footer: false,
    };

    pub const LANDING: PageLayout = PageLayout {
        header: Some(HeaderVariant::Main),
        panels: &[],
        footer: true,
    };

    pub const BROWSE: PageLayout = PageLayout {
        header: Some(HeaderVariant::Sub),
        panels: &[],
        footer: true,
    };

    pub const ACCOUNT: PageLayout = PageLayout {
        header: Some(HeaderVariant::Sub),
        panels: ACCOUNT_PANELS,
        footer: true,
    };

    /// Fixtures in render order: header, panels, footer.
    pub fn fixtures(&self) -> Vec<Fixture> {
        self.header
            .map(Fixture::Header)
            .into_iter()
            .chain(self.panels.iter().copied().map(Fixture::Panel))
            .chain(self.footer.then_some(Fixture::Footer))
            .collect()
    }

    pub fn has(&self, fixture: Fixture) -> bool {
        self.fixtures().contains(&fixture)
    }
}

impl Page {
    pub fn layout(&self) -> PageLayout {
        match self {
            Self::Landing => PageLayout::LANDING,
            Self::Login | Self::Signup => PageLayout::BARE,
            Self::Recipes | Self::AllRecipes | Self::RecipeDetail | Self::RecipeForm => {
                PageLayout::BROWSE
            }
            Self::AccountHome
            | Self::InfoUpdate
            | Self::PasswordUpdate
            | Self::AllergyUpdate
            | Self::MyRecipes
            | Self::Scraps => PageLayout::ACCOUNT,
        }
    }
}
