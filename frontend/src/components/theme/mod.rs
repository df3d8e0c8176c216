//! Color-theme switcher.
//!
//! Resolves the persisted theme on startup (missing or unrecognized values
//! fall back to the default), mirrors it onto the document-root attribute the
//! stylesheet keys off, and persists future selections. Local storage may be
//! blocked entirely; every access tolerates failure, degrading to "use the
//! default, don't persist".

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use common::model::theme::Theme;

pub struct ThemeSwitcher {
    theme: Theme,
}

pub enum Msg {
    Select(String),
}

impl Component for ThemeSwitcher {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            theme: load_saved_theme(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(name) => match Theme::from_name(&name) {
                Some(theme) => {
                    self.theme = theme;
                    apply_root_attribute(theme);
                    persist_theme(theme);
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::Select(select.value())
        });

        html! {
            <select id="theme-selector" class="theme-selector" {onchange}>
                {
                    Theme::ALL
                        .into_iter()
                        .map(|theme| html! {
                            <option
                                value={theme.as_str()}
                                selected={theme == self.theme}
                            >
                                { theme.as_str() }
                            </option>
                        })
                        .collect::<Html>()
                }
            </select>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            apply_root_attribute(self.theme);
        }
    }
}

fn load_saved_theme() -> Theme {
    let saved = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(Theme::STORAGE_KEY).ok().flatten());
    Theme::resolve(saved.as_deref())
}

fn persist_theme(theme: Theme) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        // Blocked storage keeps the selection for this page only.
        let _ = storage.set_item(Theme::STORAGE_KEY, theme.as_str());
    }
}

fn apply_root_attribute(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute(Theme::ROOT_ATTRIBUTE, theme.as_str());
    }
}
